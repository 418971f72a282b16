//! `talk-admin` entry point: parse arguments, wire the layer, run a command.

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use talk_admin::cli::{Cli, run};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();
    run(cli, &mut stdout).map_err(color_eyre::eyre::Report::from)
}
