//! Curriculum CLI — inspect and export the tutoring site's curriculum pages.
//!
//! Builds the level × subject content matrix, resolves pages the way the
//! site router does, and writes site data for the page renderer.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
