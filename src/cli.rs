//! Command-line interface for the exporter.

use std::path::PathBuf;

use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{DEFAULT_OUTPUT_DIR, DEFAULT_RECORD_TAG};
use crate::error::Result;
use crate::exporter::export_file;

/// Convert a WordPress export (WXR) file to Markdown documents.
#[derive(Parser)]
#[command(name = "wxr2md")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the export XML file
    pub xml_path: PathBuf,

    /// Output directory for converted documents
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Tag name of record (post) elements
    #[arg(short, long, default_value = DEFAULT_RECORD_TAG)]
    pub tag: String,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    convert_command(&cli)
}

/// Execute the conversion.
fn convert_command(cli: &Cli) -> Result<()> {
    println!(
        "{} {} (records: <{}>)",
        style("Converting").bold(),
        style(cli.xml_path.display()).cyan(),
        style(&cli.tag).green()
    );
    println!();

    // Create progress spinner
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Parsing export...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let summary = match export_file(&cli.xml_path, &cli.output, &cli.tag) {
        Ok(summary) => summary,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    if summary.record_count == 0 {
        println!(
            "{} no records found for tag <{}>",
            style("Warning:").yellow().bold(),
            cli.tag
        );
        println!("Tags present in the document:");
        for tag in &summary.document_tags {
            println!("  - {tag}");
        }
        return Ok(());
    }

    println!("  Records found: {}", style(summary.record_count).green());
    for path in &summary.written {
        println!("  {} {}", style("wrote").dim(), path.display());
    }

    println!();
    println!(
        "{} {} files to {}",
        style("Saved").green().bold(),
        summary.written.len(),
        cli.output.display()
    );

    Ok(())
}
