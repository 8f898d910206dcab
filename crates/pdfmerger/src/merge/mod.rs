//! The merge capability and its lopdf backend.
//!
//! A merge is driven in two phases: every input is [registered] in page
//! order, then [`MergeCapability::merge_all`] writes the combined document.
//!
//! [registered]: MergeCapability::register

mod merger;

pub use merger::{LopdfMerger, MergeStatistics};

use crate::error::Result;
use std::path::Path;

/// Something that can concatenate PDFs into a destination file.
///
/// Implementations own every resource acquired during registration and
/// release it when `merge_all` returns or when they are dropped.
pub trait MergeCapability {
    /// Declare the next input. Fails if the file cannot be opened.
    fn register(&mut self, path: &Path) -> Result<()>;

    /// Merge every registered input, in registration order, into `destination`.
    fn merge_all(self, destination: &Path) -> Result<MergeStatistics>;
}
