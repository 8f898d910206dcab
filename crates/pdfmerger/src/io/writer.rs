//! Writing the merged PDF to disk.
//!
//! Writes are atomic: the document is serialized to a sibling
//! temp file which is then renamed over the destination, so a failed merge
//! never leaves a truncated PDF behind.

use lopdf::Document;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::CompressionLevel;
use crate::error::{PdfMergeError, Result};

const BUFFER_SIZE: usize = 8192;

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,
}

/// Writes a document with the configured compression.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    compression: CompressionLevel,
}

impl PdfWriter {
    /// Create a writer with standard compression.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer using `compression`.
    pub fn with_compression(compression: CompressionLevel) -> Self {
        Self { compression }
    }

    /// Serialize `doc` to `path` and report what was written.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Output directory doesn't exist
    /// - Insufficient permissions
    /// - Serialization or flushing fails
    pub fn save(&self, mut doc: Document, path: &Path) -> Result<WriteStatistics> {
        let start = Instant::now();

        match self.compression {
            CompressionLevel::None => {}
            CompressionLevel::Standard => doc.compress(),
            CompressionLevel::Maximum => {
                doc.prune_objects();
                doc.compress();
            }
        }

        let write_path = temp_path_for(path);
        if let Err(err) = Self::write_to(&mut doc, &write_path) {
            let _ = std::fs::remove_file(&write_path);
            return Err(err);
        }

        std::fs::rename(&write_path, path).map_err(|e| {
            let _ = std::fs::remove_file(&write_path);
            PdfMergeError::FailedToWrite {
                path: path.to_path_buf(),
                source: e,
            }
        })?;

        let file_size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        log::debug!(
            "Wrote {} ({} bytes) in {:?}",
            path.display(),
            file_size,
            start.elapsed()
        );

        Ok(WriteStatistics {
            file_size,
            output_path: path.to_path_buf(),
        })
    }

    fn write_to(doc: &mut Document, write_path: &Path) -> Result<()> {
        let file = std::fs::File::create(write_path).map_err(|e| {
            PdfMergeError::FailedToCreateOutput {
                path: write_path.to_path_buf(),
                source: e,
            }
        })?;

        let mut writer = std::io::BufWriter::with_capacity(BUFFER_SIZE, file);

        doc.save_to(&mut writer)
            .map_err(|e| PdfMergeError::FailedToWrite {
                path: write_path.to_path_buf(),
                source: std::io::Error::other(e),
            })?;

        writer.flush().map_err(|e| PdfMergeError::FailedToWrite {
            path: write_path.to_path_buf(),
            source: e,
        })
    }
}

/// Temp file used for atomic writes: `out.pdf` becomes `out.pdf.tmp`.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
