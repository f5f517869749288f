use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tickid::{Id, MonoId, ShortId, TaggedId, TickId};

/// Command-line arguments for the `tickid` binary.
///
/// Every option falls back to an environment variable (loaded from `.env` if
/// present) and then to a default.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "tickid",
    version,
    about = "Generate, decode and benchmark compact k-sortable identifiers"
)]
pub struct CliArgs {
    /// Identifier layout to work with.
    ///
    /// Environment variable: `TICKID_KIND`
    #[arg(long, global = true, env = "TICKID_KIND", value_enum, default_value_t = Kind::Tick)]
    pub kind: Kind,

    /// Machine identifier hashed into the process tag of tagged IDs, in place
    /// of the hostname.
    ///
    /// Environment variable: `TICKID_MACHINE`
    #[arg(long, global = true, env = "TICKID_MACHINE")]
    pub machine: Option<String>,

    /// Print JSON instead of plain text.
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    #[command(subcommand)]
    pub command: CommandArgs,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CommandArgs {
    /// Generate new identifiers.
    Generate {
        /// Number of identifiers to print.
        ///
        /// Environment variable: `TICKID_COUNT`
        #[arg(short = 'n', long, env = "TICKID_COUNT", default_value_t = 1)]
        count: usize,
    },
    /// Decode the text form of an identifier and print its fields.
    Decode {
        /// Text form, e.g. `9p4f2pv0yj3f8b21`.
        text: String,
    },
    /// Build an identifier from its raw bytes (hex) and print its text form
    /// and fields.
    Inspect {
        /// Raw bytes as hex, e.g. `4d88e15b60f486e42841`.
        hex: String,
    },
    /// Generate from many threads at once, check uniqueness and report
    /// throughput.
    Bench {
        /// Number of generating threads.
        ///
        /// Environment variable: `TICKID_THREADS`
        #[arg(long, env = "TICKID_THREADS")]
        threads: Option<usize>,

        /// Total number of identifiers to generate.
        ///
        /// Environment variable: `TICKID_COUNT`
        #[arg(short = 'n', long, env = "TICKID_COUNT", default_value_t = 1_000_000)]
        count: usize,
    },
}

/// Identifier layouts shipped by `tickid`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// 8 bytes: seconds + random
    Short,
    /// 10 bytes: seconds + random
    Tick,
    /// 10 bytes: milliseconds + counter
    Mono,
    /// 12 bytes: seconds + process tag + counter
    Tagged,
}

impl Kind {
    /// Width of the binary form in bytes.
    pub const fn size(self) -> usize {
        match self {
            Self::Short => ShortId::SIZE,
            Self::Tick => TickId::SIZE,
            Self::Mono => MonoId::SIZE,
            Self::Tagged => TaggedId::SIZE,
        }
    }

    /// Width of the text form in symbols.
    pub const fn text_size(self) -> usize {
        match self {
            Self::Short => ShortId::TEXT_SIZE,
            Self::Tick => TickId::TEXT_SIZE,
            Self::Mono => MonoId::TEXT_SIZE,
            Self::Tagged => TaggedId::TEXT_SIZE,
        }
    }
}

/// Validated configuration built from [`CliArgs`].
#[derive(Debug, Clone)]
pub struct Config {
    pub kind: Kind,
    pub machine: Option<String>,
    pub json: bool,
    pub command: Command,
}

/// A validated subcommand.
#[derive(Debug, Clone)]
pub enum Command {
    Generate { count: usize },
    Decode { text: String },
    Inspect { bytes: Vec<u8> },
    Bench { threads: usize, count: usize },
}

impl TryFrom<CliArgs> for Config {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.machine.as_deref().is_some_and(|m| m.trim().is_empty()) {
            bail!("TICKID_MACHINE must not be empty");
        }

        let command = match args.command {
            CommandArgs::Generate { count } => {
                if count == 0 {
                    bail!("TICKID_COUNT must be greater than 0");
                }
                Command::Generate { count }
            }
            CommandArgs::Decode { text } => {
                let text = text.trim().to_owned();
                if text.len() != args.kind.text_size() {
                    bail!(
                        "{:?} identifiers are {} symbols, got {}",
                        args.kind,
                        args.kind.text_size(),
                        text.len()
                    );
                }
                Command::Decode { text }
            }
            CommandArgs::Inspect { hex } => {
                let bytes = hex::decode(hex.trim()).context("invalid hex input")?;
                if bytes.len() != args.kind.size() {
                    bail!(
                        "{:?} identifiers are {} bytes, got {}",
                        args.kind,
                        args.kind.size(),
                        bytes.len()
                    );
                }
                Command::Inspect { bytes }
            }
            CommandArgs::Bench { threads, count } => {
                let threads = threads.unwrap_or_else(num_cpus::get);
                if threads == 0 {
                    bail!("TICKID_THREADS must be greater than 0");
                }
                if count < threads {
                    bail!("TICKID_COUNT ({count}) must be at least TICKID_THREADS ({threads})");
                }
                Command::Bench { threads, count }
            }
        };

        Ok(Self {
            kind: args.kind,
            machine: args.machine,
            json: args.json,
            command,
        })
    }
}
