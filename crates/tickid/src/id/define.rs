/// A macro for defining a fixed-width ID type from three contiguous fields:
/// `time`, `tag` and `entropy`.
///
/// The fields are laid out from the first (most significant) byte to the last:
///
/// - `time`: width in bytes and [`Resolution`] (`Seconds` or `Millis`)
/// - `tag`: width in bytes of the machine/process tag (may be `0`)
/// - `entropy`: width in bytes and [`EntropyPolicy`] (`Random` or `Sequence`)
///
/// The widths **must** add up to `bytes`; a compile-time assertion enforces
/// this. Optional trailing `epoch` and `alphabet` arguments default to
/// [`CUSTOM_EPOCH`] and [`DEFAULT_ALPHABET`].
///
/// ```text
/// define_id!(
///     <TypeName>,
///     bytes: <N>,
///     time: <bytes> => <Seconds|Millis>,
///     tag: <bytes>,
///     entropy: <bytes> => <Random|Sequence>
///     [, epoch: <Duration>, alphabet: <Alphabet>]
/// );
/// ```
///
/// ## Example
/// ```rust
/// use tickid::{Base32Ext, CROCKFORD_ALPHABET, Layout, define_id};
/// use core::time::Duration;
///
/// define_id!(
///     /// 6-byte millisecond time, 2-byte tag, 8-byte random
///     WideId,
///     bytes: 16,
///     time: 6 => Millis,
///     tag: 2,
///     entropy: 8 => Random,
///     epoch: Duration::ZERO,
///     alphabet: CROCKFORD_ALPHABET
/// );
///
/// let id = WideId::from_components(1, 0xBEEF, 42);
/// assert_eq!(id.tag(), &[0xBE, 0xEF]);
/// assert_eq!(WideId::decode(id.encode().as_str()).unwrap(), id);
/// ```
///
/// Which expands to the following byte layout:
///
/// ```text
///  Byte:   0            5 6      7 8              15
///          +-------------+--------+-----------------+
///  Field:  |  time (6)   | tag (2)|  entropy (8)    |
///          +-------------+--------+-----------------+
/// ```
///
/// [`Resolution`]: crate::Resolution
/// [`EntropyPolicy`]: crate::EntropyPolicy
/// [`CUSTOM_EPOCH`]: crate::CUSTOM_EPOCH
/// [`DEFAULT_ALPHABET`]: crate::DEFAULT_ALPHABET
#[macro_export]
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident,
        bytes: $bytes:expr,
        time: $time_bytes:expr => $resolution:ident,
        tag: $tag_bytes:expr,
        entropy: $entropy_bytes:expr => $policy:ident,
        epoch: $epoch:expr,
        alphabet: $alphabet:expr $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name {
            bytes: [u8; $bytes],
        }

        const _: () = {
            assert!(
                $time_bytes + $tag_bytes + $entropy_bytes == $bytes,
                "field widths must add up to the declared width"
            );
            assert!($time_bytes >= 1 && $time_bytes <= 8, "time must be 1..=8 bytes");
            assert!($tag_bytes <= 4, "tag must be 0..=4 bytes");
            assert!($entropy_bytes >= 1 && $entropy_bytes <= 8, "entropy must be 1..=8 bytes");
        };

        impl $name {
            /// The all-zero sentinel.
            pub const NIL: Self = Self { bytes: [0; $bytes] };

            /// Wraps a raw byte array.
            #[must_use]
            pub const fn from_array(bytes: [u8; $bytes]) -> Self {
                Self { bytes }
            }

            /// Returns the raw byte array.
            #[must_use]
            pub const fn to_array(&self) -> [u8; $bytes] {
                self.bytes
            }

            /// Returns the process-wide generator for this type, creating it
            /// on first use.
            ///
            /// Call this once at startup to pay the initialization cost
            /// (process tag lookup, sequencer state) before the first ID is needed.
            pub fn default_generator() -> &'static $crate::DefaultGenerator<Self> {
                static GENERATOR: ::std::sync::OnceLock<$crate::DefaultGenerator<$name>> =
                    ::std::sync::OnceLock::new();
                GENERATOR.get_or_init(::core::default::Default::default)
            }

            /// Generates a new ID from the current time using the process-wide
            /// generator.
            #[must_use]
            pub fn generate() -> Self {
                Self::default_generator().next_id()
            }

            /// Generates a new ID stamped with `at` using the process-wide
            /// generator, even when `at` is earlier than IDs already
            /// generated.
            #[must_use]
            pub fn generate_at(at: ::std::time::SystemTime) -> Self {
                Self::default_generator().next_id_at(at)
            }
        }

        impl $crate::Id for $name {
            type Bytes = [u8; $bytes];
            type Text = [u8; $crate::base32_len($bytes)];

            const SIZE: usize = $bytes;
            const TEXT_SIZE: usize = $crate::base32_len($bytes);
            const NIL: Self = Self::NIL;
            const ALPHABET: &'static $crate::Alphabet = &$alphabet;

            fn as_bytes(&self) -> &[u8] {
                &self.bytes
            }

            fn to_bytes(&self) -> Self::Bytes {
                self.bytes
            }

            fn from_bytes(bytes: Self::Bytes) -> Self {
                Self { bytes }
            }
        }

        impl $crate::Layout for $name {
            const TIME_BYTES: usize = $time_bytes;
            const TAG_BYTES: usize = $tag_bytes;
            const ENTROPY_BYTES: usize = $entropy_bytes;
            const RESOLUTION: $crate::Resolution = $crate::Resolution::$resolution;
            const EPOCH: ::core::time::Duration = $epoch;
            const POLICY: $crate::EntropyPolicy = $crate::EntropyPolicy::$policy;
        }

        impl Default for $name {
            fn default() -> Self {
                Self::NIL
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.bytes
            }
        }

        impl From<[u8; $bytes]> for $name {
            fn from(bytes: [u8; $bytes]) -> Self {
                Self { bytes }
            }
        }

        impl From<$name> for [u8; $bytes] {
            fn from(id: $name) -> Self {
                id.bytes
            }
        }

        impl ::core::convert::TryFrom<&[u8]> for $name {
            type Error = $crate::Error;

            fn try_from(bytes: &[u8]) -> ::core::result::Result<Self, Self::Error> {
                <Self as $crate::Id>::from_slice(bytes)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                use $crate::Base32Ext;
                let mut buf = Self::buf();
                f.write_str(self.encode_to_buf(&mut buf))
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                use $crate::Layout;
                f.debug_struct(stringify!($name))
                    .field("id", &format_args!("{self}"))
                    .field("time", &self.time())
                    .field("tag", &self.tag())
                    .field("entropy", &self.entropy())
                    .finish()
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as $crate::Base32Ext>::decode(s)
            }
        }

        impl ::core::convert::TryFrom<&str> for $name {
            type Error = $crate::Error;

            fn try_from(s: &str) -> ::core::result::Result<Self, Self::Error> {
                <Self as $crate::Base32Ext>::decode(s)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                use $crate::Base32Ext;
                let mut buf = Self::buf();
                self.encode_to_buf(&mut buf) == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self == *other
            }
        }

        impl From<$name> for ::std::string::String {
            fn from(id: $name) -> Self {
                use $crate::Base32Ext;
                id.encode().as_str().to_owned()
            }
        }

        $crate::cfg_serde! {
            impl $crate::__internal::serde::Serialize for $name {
                fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
                where
                    S: $crate::__internal::serde::Serializer,
                {
                    $crate::adapter::serialize_text(self, serializer)
                }
            }

            impl<'de> $crate::__internal::serde::Deserialize<'de> for $name {
                fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
                where
                    D: $crate::__internal::serde::Deserializer<'de>,
                {
                    $crate::adapter::deserialize_text(deserializer)
                }
            }
        }
    };

    (
        $(#[$meta:meta])*
        $name:ident,
        bytes: $bytes:expr,
        time: $time_bytes:expr => $resolution:ident,
        tag: $tag_bytes:expr,
        entropy: $entropy_bytes:expr => $policy:ident $(,)?
    ) => {
        $crate::define_id!(
            $(#[$meta])*
            $name,
            bytes: $bytes,
            time: $time_bytes => $resolution,
            tag: $tag_bytes,
            entropy: $entropy_bytes => $policy,
            epoch: $crate::CUSTOM_EPOCH,
            alphabet: $crate::DEFAULT_ALPHABET
        );
    };
}
