//! Command-line arguments for the desktop app.
//!
//! The window is the real interface; arguments only seed the merge queue and
//! tune logging and output compression.

use clap::Parser;
use pdfmerger::config::{CompressionLevel, Config};
use pdfmerger::utils::collect_paths_for_patterns;

/// Pick, order and merge PDF files into a single document.
///
/// Opens the Simple PDF Merger window. Files given on the command line are
/// placed in the merge queue in the order provided.
#[derive(Parser, Debug)]
#[command(name = "pdfmerger")]
#[command(version)]
#[command(about = "Pick, order and merge PDF files into a single document", long_about = None)]
pub struct Cli {
    /// PDF files to queue at startup (in order)
    ///
    /// Glob patterns are expanded; plain paths are queued as given.
    ///
    /// Examples:
    ///   pdfmerger cover.pdf chapter*.pdf
    #[arg(value_name = "FILE")]
    pub inputs: Vec<String>,

    /// Compression level for the merged PDF
    ///
    /// - none: No compression
    /// - standard: Compress streams (default)
    /// - maximum: Compress streams and drop unused objects
    #[arg(short, long, value_name = "LEVEL", default_value = "standard")]
    #[arg(value_parser = ["none", "standard", "maximum"])]
    pub compression: String,

    /// Verbose logging
    ///
    /// Logs every queue change and merge step at debug level.
    /// RUST_LOG takes precedence when set.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Convert parsed arguments into the application configuration.
    pub fn to_config(&self) -> Result<Config, String> {
        let compression = self
            .compression
            .parse::<CompressionLevel>()
            .map_err(|e| e.to_string())?;
        let inputs = collect_paths_for_patterns(&self.inputs).map_err(|e| e.to_string())?;

        Ok(Config {
            inputs,
            compression,
            verbose: self.verbose,
        })
    }
}
