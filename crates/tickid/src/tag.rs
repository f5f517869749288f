use crate::{RandSource, ThreadRandom};
use std::sync::OnceLock;

/// A source of bytes identifying the machine a process runs on.
///
/// The bytes are only hashed, so any stable value works: a hostname, a
/// container ID, a configured worker name.
pub trait MachineSource {
    /// Returns the machine identifier, or `None` if it cannot be determined.
    fn machine_id(&self) -> Option<Vec<u8>>;
}

/// Reads the hostname from `HOSTNAME` or `COMPUTERNAME`, then from
/// `/etc/hostname`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Hostname;

impl MachineSource for Hostname {
    fn machine_id(&self) -> Option<Vec<u8>> {
        ["HOSTNAME", "COMPUTERNAME"]
            .into_iter()
            .filter_map(|key| std::env::var(key).ok())
            .chain(std::fs::read_to_string("/etc/hostname").ok())
            .map(|name| name.trim().to_owned())
            .find(|name| !name.is_empty())
            .map(String::into_bytes)
    }
}

/// A fixed machine identifier, for configuration and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FixedMachine(Vec<u8>);

impl FixedMachine {
    /// Wraps `id`. An empty value behaves like a missing identifier.
    pub fn new(id: impl Into<Vec<u8>>) -> Self {
        Self(id.into())
    }
}

impl MachineSource for FixedMachine {
    fn machine_id(&self) -> Option<Vec<u8>> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.clone())
        }
    }
}

impl<M: MachineSource + ?Sized> MachineSource for &M {
    fn machine_id(&self) -> Option<Vec<u8>> {
        (**self).machine_id()
    }
}

/// A 4-byte tag identifying the generating process.
///
/// ```text
///  Byte:   0              1 2              3
///          +----------------+----------------+
///  Field:  | machine hash   |  pid (low 16)  |
///          +----------------+----------------+
/// ```
///
/// The machine hash is FNV-1a (32-bit) over the machine bytes, XOR-folded to
/// 16 bits. Tags only make collisions between processes unlikely; they are
/// not unique.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProcessTag(u32);

static CURRENT: OnceLock<ProcessTag> = OnceLock::new();

impl ProcessTag {
    /// Builds a tag from machine bytes and a process id.
    ///
    /// # Example
    /// ```
    /// use tickid::ProcessTag;
    ///
    /// let tag = ProcessTag::from_parts(b"worker-1", 0x0001_2345);
    /// assert_eq!(tag.to_be_bytes()[2..], [0x23, 0x45]);
    /// ```
    #[must_use]
    pub fn from_parts(machine: &[u8], pid: u32) -> Self {
        let hash = fnv1a_16(machine);
        Self((u32::from(hash) << 16) | (pid & 0xFFFF))
    }

    /// Builds the tag of this process from `source`.
    ///
    /// When the source yields nothing, random bytes stand in for the machine
    /// identifier.
    pub fn from_source(source: &impl MachineSource) -> Self {
        let machine = source.machine_id().unwrap_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!("no machine identifier found, using random bytes");
            ThreadRandom.rand().to_be_bytes().to_vec()
        });
        Self::from_parts(&machine, std::process::id())
    }

    /// The tag of this process, derived from [`Hostname`] on first use and
    /// fixed for the lifetime of the process.
    pub fn current() -> Self {
        *CURRENT.get_or_init(|| {
            let tag = Self::from_source(&Hostname);
            #[cfg(feature = "tracing")]
            tracing::debug!(tag = %tag, "process tag initialized");
            tag
        })
    }

    /// Fixes the process-wide tag before first use.
    ///
    /// Returns `false`, leaving the tag unchanged, if [`ProcessTag::current`]
    /// has already been initialized.
    pub fn install(tag: Self) -> bool {
        CURRENT.set(tag).is_ok()
    }

    /// The tag as an integer, machine hash in the high 16 bits.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// The tag as written into the tag field.
    #[must_use]
    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl core::fmt::Display for ProcessTag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

impl From<ProcessTag> for u32 {
    fn from(tag: ProcessTag) -> Self {
        tag.0
    }
}

const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

fn fnv1a_16(bytes: &[u8]) -> u16 {
    let hash = bytes
        .iter()
        .fold(FNV_OFFSET, |h, &b| (h ^ u32::from(b)).wrapping_mul(FNV_PRIME));
    #[allow(clippy::cast_possible_truncation)]
    let folded = ((hash >> 16) ^ hash) as u16;
    folded
}
