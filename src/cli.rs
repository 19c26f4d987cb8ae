// Command-line surface. Parsing is done by clap; everything past that is
// handed to the session, the interactive menu or the report.

use crate::config::Config;
use crate::report::Report;
use crate::session::Session;
use crate::ui::main_menu;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gpa-tracker",
    version,
    about = "Keep a list of courses and track your credit-weighted GPA."
)]
pub struct Cli {
    /// Data file to read and write (overrides GPA_DATA_FILE)
    #[arg(long, short, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// What to do; the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add, view, edit and delete courses interactively
    Menu,

    /// Print the stored courses with GPA and total hours, then exit
    Report(ReportArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ReportArgs {
    /// Emit JSON instead of a text table
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config = Config::from_env().with_data_file(self.file);
        tracing::debug!(data_file = %config.data_file.display(), "resolved configuration");
        let session = Session::open(&config.data_file);

        match self.command.unwrap_or(Commands::Menu) {
            Commands::Menu => main_menu(session),
            Commands::Report(args) => print_report(&session, &args),
        }
    }
}

fn print_report(session: &Session, args: &ReportArgs) -> Result<()> {
    let report = Report::build(session.courses());
    if args.json {
        println!("{}", report.render_json().context("encoding report as JSON")?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}
