//! Command-line interface for skill-merge
//!
//! A single flat command: two input files in, one merged file out.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod merge;

pub use merge::{render_report, MergeArgs};

/// Merge two skill-name JSON maps with configurable priority and numeric key ordering
#[derive(Parser)]
#[command(name = "skill-merge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    merge: MergeArgs,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", exclusive = true)]
    completions: Option<Shell>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if let Some(shell) = cli.completions {
        let mut command = Cli::command();
        let name = command.get_name().to_string();
        clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
        return Ok(());
    }

    merge::run(cli.merge)
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn completions_do_not_need_input_files() {
        let cli = Cli::try_parse_from(["skill-merge", "--completions", "bash"]).expect("parse");
        assert!(cli.completions.is_some());
    }

    #[test]
    fn input_files_are_required_otherwise() {
        assert!(Cli::try_parse_from(["skill-merge", "a.json"]).is_err());
    }

    #[test]
    fn priority_rejects_unknown_values() {
        assert!(Cli::try_parse_from(["skill-merge", "a.json", "b.json", "-p", "file3"]).is_err());
    }
}
