//! Opening and parsing source PDFs.
//!
//! Loading happens in two steps so that the merge workflow can report
//! unreadable files before it asks the user for a destination:
//!
//! 1. [`PdfReader::open`] opens the file and keeps the handle ([`PdfSource`]).
//! 2. [`PdfReader::load`] parses the held handle into a `lopdf::Document`.

use lopdf::Document;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::error::{PdfMergeError, Result};

/// An opened, not yet parsed, source file.
#[derive(Debug)]
pub struct PdfSource {
    /// Path the handle was opened from.
    pub path: PathBuf,
    file: File,
}

impl PdfSource {
    /// Size of the underlying file in bytes.
    pub fn file_size(&self) -> u64 {
        self.file.metadata().map(|m| m.len()).unwrap_or(0)
    }
}

/// A parsed PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// File size in bytes.
    pub file_size: u64,
}

/// Opens and parses source PDFs. Documents without pages are rejected.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new PDF reader.
    pub fn new() -> Self {
        Self
    }

    /// Open `path` for reading without parsing it.
    ///
    /// # Errors
    ///
    /// Returns [`PdfMergeError::FileNotFound`] if the file does not exist and
    /// [`PdfMergeError::FileNotAccessible`] for any other open failure.
    pub fn open(&self, path: &Path) -> Result<PdfSource> {
        let file = File::open(path)
            .map_err(|e| PdfMergeError::from_open_error(path.to_path_buf(), e))?;

        if file.metadata().map(|m| m.is_dir()).unwrap_or(false) {
            return Err(PdfMergeError::FileNotAccessible {
                path: path.to_path_buf(),
                source: std::io::Error::other("is a directory"),
            });
        }

        Ok(PdfSource {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Parse an opened source, consuming its handle.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The content is not a valid PDF
    /// - The PDF is encrypted
    /// - The PDF has no pages
    pub fn load(&self, source: PdfSource) -> Result<LoadedPdf> {
        let start = Instant::now();
        let file_size = source.file_size();
        let PdfSource { path, file } = source;

        let document = Document::load_from(BufReader::new(file)).map_err(|e| {
            let err_msg = e.to_string();
            if err_msg.contains("encrypt") || err_msg.contains("password") {
                PdfMergeError::EncryptedPdf { path: path.clone() }
            } else {
                PdfMergeError::failed_to_load_pdf(path.clone(), err_msg)
            }
        })?;

        if document.is_encrypted() {
            return Err(PdfMergeError::EncryptedPdf { path });
        }

        let page_count = document.get_pages().len();
        if page_count == 0 {
            return Err(PdfMergeError::corrupted_pdf(path, "PDF has no pages"));
        }

        log::debug!(
            "Loaded {} ({} pages, {} bytes) in {:?}",
            path.display(),
            page_count,
            file_size,
            start.elapsed()
        );

        Ok(LoadedPdf {
            document,
            path,
            page_count,
            file_size,
        })
    }
}
