//! Runtime configuration for pdfmerger.
//!
//! Nothing here is persisted: the configuration is assembled from command
//! line arguments at startup and lives for a single run of the application.

use std::path::PathBuf;
use std::str::FromStr;

/// Compression level for the merged PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionLevel {
    /// No compression - streams are written as loaded.
    None,
    /// Compress streams.
    #[default]
    Standard,
    /// Compress streams and prune unreachable objects.
    Maximum,
}

/// Error returned when a compression level string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid compression level: {0}. Must be one of: none, standard, maximum")]
pub struct ParseCompressionLevelError(String);

impl FromStr for CompressionLevel {
    type Err = ParseCompressionLevelError;

    /// Parse compression level from "none", "standard" or "maximum".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "standard" => Ok(Self::Standard),
            "maximum" => Ok(Self::Maximum),
            _ => Err(ParseCompressionLevelError(s.to_string())),
        }
    }
}

impl CompressionLevel {
    /// Whether streams should be compressed before writing.
    pub fn compresses(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Paths to place in the merge queue at startup, in order.
    pub inputs: Vec<PathBuf>,

    /// Compression applied to the merged document.
    pub compression: CompressionLevel,

    /// Enable debug logging.
    pub verbose: bool,
}

impl Config {
    /// Paths to preload into the merge queue.
    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }
}
