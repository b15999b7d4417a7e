//! Merge command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::{MergeStats, Priority};
use crate::files::{load_mapping, write_mapping};
use crate::merge::{merge_sorted, validate_numeric_keys};

#[derive(Args)]
pub struct MergeArgs {
    /// Path to the first JSON file
    #[arg(value_name = "FILE1", required_unless_present = "completions")]
    pub file1: Option<PathBuf>,

    /// Path to the second JSON file
    #[arg(value_name = "FILE2", required_unless_present = "completions")]
    pub file2: Option<PathBuf>,

    /// Path to save the merged result [default: skill_names_merged.json next to the executable]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Which file takes priority for duplicate keys [default: file2]
    #[arg(short, long, value_enum, value_name = "FILE")]
    pub priority: Option<Priority>,

    /// Config file (TOML or YAML); auto-discovered in the current directory when omitted
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Merge and report without writing the output file
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: MergeArgs) -> Result<()> {
    let (Some(file1), Some(file2)) = (args.file1, args.file2) else {
        anyhow::bail!("Both FILE1 and FILE2 must be specified");
    };

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let config = load_config(&cwd, args.config.as_deref())?;
    let settings = merge_cli_with_config(
        CliOverrides { output: args.output, priority: args.priority },
        &config,
    )?;
    tracing::debug!("Resolved settings: {:?}", settings);

    let first = load_input(&file1)?;
    let second = load_input(&file2)?;

    let merged = merge_sorted(&first, &second, settings.priority)?;
    let stats = MergeStats::compute(&first, &second, &merged);

    let winner = match settings.priority {
        Priority::First => &file1,
        Priority::Second => &file2,
    };

    let written = if args.dry_run {
        tracing::debug!("Dry run: skipping write to {}", settings.output.display());
        None
    } else {
        write_mapping(&settings.output, &merged, settings.indent).with_context(|| {
            format!("Failed to write merged file: {}", settings.output.display())
        })?;
        Some(settings.output.as_path())
    };

    print!("{}", render_report(winner, &stats, written));
    Ok(())
}

/// Load one input and check that every key is an integer before merging.
fn load_input(path: &Path) -> Result<crate::domain::Mapping> {
    let mapping = load_mapping(path)
        .with_context(|| format!("Failed to load input file: {}", path.display()))?;
    validate_numeric_keys(&mapping, path)?;
    Ok(mapping)
}

/// Human-readable summary printed after a merge.
pub fn render_report(winner: &Path, stats: &MergeStats, written: Option<&Path>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Priority: {}", winner.display());
    let _ = writeln!(out, "File 1 entries: {}", stats.first_entries);
    let _ = writeln!(out, "File 2 entries: {}", stats.second_entries);
    let _ = writeln!(out, "Merged entries: {}", stats.merged_entries);
    let _ = writeln!(out, "Overlapping keys: {}", stats.overlapping_keys);
    match written {
        Some(path) => {
            let _ = writeln!(out, "\nMerged file saved to: {}", path.display());
        }
        None => out.push_str("\nDry run: nothing written\n"),
    }
    out
}
