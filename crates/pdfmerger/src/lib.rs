//! pdfmerger - Queue PDF files and merge them into a single document.
//!
//! This library holds everything behind the Simple PDF Merger window:
//!
//! - [`queue`]: the ordered list of PDFs and the derived control state
//! - [`controller`]: add / remove / merge driven by user actions
//! - [`picker`]: the file chooser and alert collaborators
//! - [`merge`]: the merge capability and its lopdf backend
//! - [`io`]: opening sources and writing the merged output
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerger::controller::MergeController;
//! use pdfmerger::merge::LopdfMerger;
//! use pdfmerger::picker::{FilePicker, Notifier};
//! use std::path::PathBuf;
//!
//! struct Fixed;
//!
//! impl FilePicker for Fixed {
//!     fn choose_open(&mut self) -> Option<PathBuf> {
//!         None
//!     }
//!     fn choose_save(&mut self) -> Option<PathBuf> {
//!         Some(PathBuf::from("merged.pdf"))
//!     }
//! }
//!
//! struct Stderr;
//!
//! impl Notifier for Stderr {
//!     fn alert(&mut self, message: &str) {
//!         eprintln!("{message}");
//!     }
//! }
//!
//! let mut controller = MergeController::new(Fixed, Stderr);
//! controller.push("a.pdf");
//! controller.push("b.pdf");
//! let _ = controller.merge(LopdfMerger::new());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod controller;
pub mod error;
pub mod io;
pub mod merge;
pub mod picker;
pub mod queue;
pub mod utils;

// Re-export commonly used types
pub use config::{CompressionLevel, Config};
pub use controller::{MergeController, MergeOutcome};
pub use error::{PdfMergeError, Result, WorkflowError};
pub use queue::{ButtonStates, MergeQueue, derive_button_states};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application title used for windows and alerts.
pub const APP_TITLE: &str = "Simple PDF Merger";
