//! The merge workflow controller.
//!
//! Every operation runs synchronously in response to a user action. Errors
//! are reported through the [`Notifier`] where they are detected and are
//! also returned, so callers and tests can observe the outcome.
//!
//! A merge attempt always ends with an empty queue, whether it succeeded,
//! failed, or the user cancelled the destination prompt. Retrying a failed
//! merge means adding the files again.

use std::path::{Path, PathBuf};

use crate::error::WorkflowError;
use crate::merge::{MergeCapability, MergeStatistics};
use crate::picker::{FilePicker, Notifier};
use crate::queue::{ButtonStates, MergeQueue, derive_button_states};
use crate::utils::{display_name, format_file_size};

/// How a merge attempt that raised no error ended.
#[derive(Debug, Clone)]
pub enum MergeOutcome {
    /// The merged document was written.
    Merged(MergeStatistics),
    /// The user dismissed the destination prompt; nothing was written.
    Cancelled,
}

/// Owns the merge queue and the current selection.
pub struct MergeController<P, N> {
    queue: MergeQueue,
    selected: Option<usize>,
    picker: P,
    notifier: N,
}

impl<P: FilePicker, N: Notifier> MergeController<P, N> {
    /// Create a controller with an empty queue.
    pub fn new(picker: P, notifier: N) -> Self {
        Self {
            queue: MergeQueue::new(),
            selected: None,
            picker,
            notifier,
        }
    }

    /// The queued entries.
    pub fn queue(&self) -> &MergeQueue {
        &self.queue
    }

    /// Index of the selected entry.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Select the entry at `index`, or clear the selection.
    ///
    /// Out of range indices clear the selection.
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.queue.len());
    }

    /// Enabled state of the merge and remove controls.
    pub fn button_states(&self) -> ButtonStates {
        derive_button_states(self.queue.len())
    }

    /// Whether the context menu's remove item is usable.
    pub fn can_remove_selection(&self) -> bool {
        !self.queue.is_empty() && self.selected.is_some()
    }

    /// Append `path` without asking the picker.
    pub fn push(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        log::info!("Queued {}", path.display());
        self.queue.push(path);
    }

    /// Ask the picker for a PDF and append it.
    ///
    /// Returns the added path, or `None` if the user cancelled.
    pub fn add(&mut self) -> Option<&Path> {
        let path = self.picker.choose_open()?;
        self.push(path);
        self.queue.get(self.queue.len() - 1)
    }

    /// Remove the selected entry.
    ///
    /// # Errors
    ///
    /// [`WorkflowError::NoSelection`] if nothing is selected; the queue is
    /// left untouched.
    pub fn remove(&mut self) -> Result<PathBuf, WorkflowError> {
        let removed = self
            .selected
            .take()
            .and_then(|index| self.queue.remove(index));

        match removed {
            Some(path) => {
                log::info!("Removed {}", path.display());
                Ok(path)
            }
            None => Err(self.report(WorkflowError::NoSelection)),
        }
    }

    /// Merge the queued PDFs, in queue order, through `merger`.
    ///
    /// Every entry is registered even after a failure so that all unreadable
    /// files are reported together. The destination is only requested when
    /// every registration succeeded.
    ///
    /// # Errors
    ///
    /// - [`WorkflowError::EmptyQueue`] if nothing is queued
    /// - [`WorkflowError::SourceUnreadable`] if any entry failed to register
    /// - [`WorkflowError::MergeIoFailure`] if the merge or write step failed
    pub fn merge<M: MergeCapability>(&mut self, merger: M) -> Result<MergeOutcome, WorkflowError> {
        if self.queue.is_empty() {
            return Err(self.report(WorkflowError::EmptyQueue));
        }

        let result = self.run_merge(merger);

        self.queue.clear();
        self.selected = None;

        match result {
            Ok(MergeOutcome::Merged(stats)) => {
                log::info!(
                    "Merged {} files ({} pages, {} -> {}) into {} in {:.2?}",
                    stats.files_merged,
                    stats.total_pages,
                    format_file_size(stats.input_size),
                    stats.format_output_size(),
                    stats.destination.display(),
                    stats.merge_time
                );
                self.notifier.alert(&format!(
                    "PDFs merged into: {}",
                    display_name(&stats.destination)
                ));
                Ok(MergeOutcome::Merged(stats))
            }
            Ok(MergeOutcome::Cancelled) => {
                log::info!("Merge cancelled at destination prompt");
                Ok(MergeOutcome::Cancelled)
            }
            Err(err) => Err(self.report(err)),
        }
    }

    fn run_merge<M: MergeCapability>(&mut self, mut merger: M) -> Result<MergeOutcome, WorkflowError> {
        let mut failures = Vec::new();
        for path in self.queue.iter() {
            if let Err(err) = merger.register(path) {
                log::warn!("Could not register {}: {err}", path.display());
                failures.push(err);
            }
        }

        if !failures.is_empty() {
            return Err(WorkflowError::SourceUnreadable { failures });
        }

        let Some(destination) = self.picker.choose_save() else {
            return Ok(MergeOutcome::Cancelled);
        };

        merger
            .merge_all(&destination)
            .map(MergeOutcome::Merged)
            .map_err(|source| WorkflowError::MergeIoFailure { source })
    }

    fn report(&mut self, err: WorkflowError) -> WorkflowError {
        match &err {
            WorkflowError::MergeIoFailure { source } => log::error!("Merge failed: {source}"),
            WorkflowError::SourceUnreadable { failures } => log::warn!(
                "Merge aborted, {} of the queued files could not be opened: {:?}",
                failures.len(),
                err.unreadable_paths()
            ),
            other => log::warn!("{other}"),
        }
        self.notifier.alert(&err.to_string());
        err
    }
}
