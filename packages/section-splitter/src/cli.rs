//! Command-line interface for the section splitter.

use std::path::{Path, PathBuf};

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::Result;
use crate::splitter::split_file_with;
use crate::types::SplitReport;

/// Section Splitter - Split a delimited text report into section files.
#[derive(Parser)]
#[command(name = "section-splitter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the report text file
    pub input: PathBuf,

    /// Output directory (default: `sections` next to the input file)
    // An empty value is accepted and means the default
    #[arg(short, long, value_parser = OsStringValueParser::new().map(PathBuf::from))]
    pub outdir: Option<PathBuf>,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let report = split_command(&cli.input, cli.outdir.as_deref())?;

    println!(
        "Wrote {} files to {}",
        style(report.count()).bold(),
        report.output_dir.display()
    );

    Ok(())
}

/// Execute the split, showing a spinner while section files are written.
fn split_command(input: &Path, outdir: Option<&Path>) -> Result<SplitReport> {
    // Only drawn when stderr is a terminal
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {pos} written {msg}")
            .expect("valid template"),
    );
    pb.set_message(format!("from {}", input.display()));

    let result = split_file_with(input, outdir, |path| {
        if let Some(name) = path.file_name() {
            pb.set_message(name.to_string_lossy().into_owned());
        }
        pb.inc(1);
    });
    pb.finish_and_clear();

    result
}
