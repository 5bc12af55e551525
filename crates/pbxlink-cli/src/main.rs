//! Pbxlink CLI - register the Firebase configuration plist in the iOS project
//!
//! Usage:
//!   pbxlink             # patch ios/Runner.xcodeproj in the current directory
//!   pbxlink --json      # emit the patch report as JSON
//!   pbxlink -q          # suppress status lines
//!
//! Exits non-zero when the plist is missing on disk or the project cannot
//! be patched; the project file is left untouched in either case.

use anyhow::{Context, Result};
use clap::Parser;
use pbxlink::{Decision, PatchReport, Patcher};
use tracing_subscriber::EnvFilter;

/// Pbxlink - Firebase configuration fixup for Xcode projects
#[derive(Parser, Debug)]
#[command(name = "pbxlink")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print the patch report as JSON instead of status lines
    #[arg(long)]
    json: bool,

    /// Suppress status lines
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let report = Patcher::new().run().context("failed to patch project")?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to encode report")?
        );
    } else if !args.quiet {
        for line in status_lines(&report) {
            println!("{line}");
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "pbxlink=debug" } else { "pbxlink=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// One human-readable line per decision point, plus the final save line.
fn status_lines(report: &PatchReport) -> Vec<String> {
    let mut lines = Vec::new();
    match report.reference {
        Decision::AlreadyPresent => lines.push(format!("{} already linked.", report.file_name)),
        Decision::Added => lines.push(format!("Added file reference to {} group.", report.group)),
    }
    match report.resources {
        Decision::AlreadyPresent => {
            lines.push(format!("{} already in Resources build phase.", report.file_name));
        }
        Decision::Added => lines.push("Added to Resources build phase.".to_string()),
    }
    lines.push("Project saved.".to_string());
    lines
}
