#![doc = include_str!("../README.md")]

mod commands;
mod config;
mod telemetry;

use clap::Parser;
use config::{CliArgs, Command, Config};
use telemetry::init_telemetry;
use tickid::{FixedMachine, ProcessTag};

// Using mimalloc for better performance under contention, especially in musl
// environments.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = Config::try_from(args)?;

    init_telemetry()?;

    if let Some(machine) = &config.machine {
        let tag = ProcessTag::from_source(&FixedMachine::new(machine.as_bytes()));
        ProcessTag::install(tag);
        tracing::debug!(%tag, "process tag installed from TICKID_MACHINE");
    }

    let mut out = std::io::stdout().lock();
    match &config.command {
        Command::Generate { count } => commands::generate(&mut out, config.kind, *count, config.json),
        Command::Decode { text } => commands::decode(&mut out, config.kind, text, config.json),
        Command::Inspect { bytes } => commands::inspect(&mut out, config.kind, bytes, config.json),
        Command::Bench { threads, count } => {
            commands::bench(&mut out, config.kind, *threads, *count, config.json)
        }
    }
}
