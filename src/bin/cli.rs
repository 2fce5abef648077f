// src/bin/cli.rs
use clap::Parser;
use ga_bridges::cli::{self, Args};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();
    cli::run(Args::parse())
}
