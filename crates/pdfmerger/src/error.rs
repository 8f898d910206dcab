//! Error types for pdfmerger.
//!
//! Two layers of errors live here:
//!
//! - [`PdfMergeError`]: failures raised by the lopdf merge backend while
//!   registering sources, merging pages, or writing the output file.
//! - [`WorkflowError`]: the user-facing classification reported by the
//!   merge queue controller. Its `Display` text is exactly what the alert
//!   dialog shows.

use std::io;
use std::path::PathBuf;

/// Result type alias for merge backend operations.
pub type Result<T> = std::result::Result<T, PdfMergeError>;

/// Errors raised by a merge capability.
#[derive(Debug, thiserror::Error)]
pub enum PdfMergeError {
    /// Source file was not found.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Path to the file that was not found.
        path: PathBuf,
    },

    /// Source file exists but could not be opened.
    #[error("Cannot access file: {}\n  Reason: {source}", path.display())]
    FileNotAccessible {
        /// Path to the inaccessible file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse a registered source as a PDF.
    #[error("Failed to load PDF: {}\n  Reason: {reason}", path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// Source PDF is encrypted and cannot be merged.
    #[error(
        "PDF is encrypted and cannot be processed: {}\n  \
         Hint: Decrypt the PDF first using 'qpdf --decrypt' or similar tools",
        path.display()
    )]
    EncryptedPdf {
        /// Path to the encrypted PDF.
        path: PathBuf,
    },

    /// Source PDF has an unusable structure.
    #[error("Corrupted or invalid PDF: {}\n  Details: {details}", path.display())]
    CorruptedPdf {
        /// Path to the corrupted PDF.
        path: PathBuf,
        /// Details about the corruption.
        details: String,
    },

    /// `merge_all` was called before any source was registered.
    #[error("No PDF sources registered for merging")]
    NoSourcesRegistered,

    /// Failed to create the destination file.
    #[error("Failed to create output file: {}\n  Reason: {source}", path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write the destination file.
    #[error("Failed to write to output file: {}\n  Reason: {source}", path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Page tree surgery failed.
    #[error("Merge operation failed: {reason}")]
    MergeFailed {
        /// Description of what went wrong.
        reason: String,
    },
}

impl PdfMergeError {
    /// Classify a failed `File::open` on a source path.
    pub fn from_open_error(path: PathBuf, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileNotAccessible { path, source: err }
        }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create a CorruptedPdf error.
    pub fn corrupted_pdf(path: PathBuf, details: impl Into<String>) -> Self {
        Self::CorruptedPdf {
            path,
            details: details.into(),
        }
    }

    /// Create a MergeFailed error.
    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
        }
    }
}

/// User-facing failures of the merge workflow.
///
/// Each variant is reported to the user through a blocking alert at the
/// point it is detected; none of them abort the application.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    /// Merge was requested with an empty queue.
    #[error("Please add some PDFs before merging.")]
    EmptyQueue,

    /// Remove was requested with no entry selected.
    #[error("Please select a PDF file before attempting to remove it.")]
    NoSelection,

    /// One or more queued sources could not be registered.
    #[error(
        "Unable to merge selected PDFs, ensure that they exist and that \
         you have read permission for each file."
    )]
    SourceUnreadable {
        /// Every registration failure, in queue order.
        failures: Vec<PdfMergeError>,
    },

    /// The merge or write step failed.
    #[error(
        "Unable to merge the PDF documents. Ensure that all files are readable, \
         and that you have enough free memory to process the conversion."
    )]
    MergeIoFailure {
        /// Backend error that caused the failure.
        #[source]
        source: PdfMergeError,
    },
}

impl WorkflowError {
    /// Paths of the sources that failed registration, if any.
    pub fn unreadable_paths(&self) -> Vec<&PathBuf> {
        match self {
            Self::SourceUnreadable { failures } => failures
                .iter()
                .filter_map(|failure| match failure {
                    PdfMergeError::FileNotFound { path }
                    | PdfMergeError::FileNotAccessible { path, .. } => Some(path),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}
