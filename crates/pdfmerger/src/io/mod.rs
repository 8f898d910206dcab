//! File I/O for pdfmerger.
//!
//! - [`reader`]: opening source files and parsing them with lopdf
//! - [`writer`]: atomic, buffered writing of the merged document

pub mod reader;
pub mod writer;

pub use reader::{LoadedPdf, PdfReader, PdfSource};
pub use writer::{PdfWriter, WriteStatistics};
