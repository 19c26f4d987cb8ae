// Entrypoint for the CLI application.
// Keeps `main` small: set up logging, parse arguments, hand off.

use clap::Parser;
use gpa_tracker::{cli::Cli, logging};

fn main() -> anyhow::Result<()> {
    logging::init();
    Cli::parse().run()
}
