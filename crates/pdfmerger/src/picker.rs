//! Collaborators the controller talks to: file choosers and alerts.
//!
//! The desktop binary backs these with native dialogs; tests script them.

use std::path::PathBuf;

/// File extension accepted by both choosers.
pub const PDF_EXTENSION: &str = "pdf";

/// Title of the destination chooser.
pub const SAVE_PROMPT: &str = "Please select a save file location";

/// Supplies paths chosen by the user.
///
/// Both methods return `None` when the user cancels, which is not an error.
pub trait FilePicker {
    /// Ask for an existing `*.pdf` file to add to the queue.
    fn choose_open(&mut self) -> Option<PathBuf>;

    /// Ask for the `*.pdf` destination of a merge.
    fn choose_save(&mut self) -> Option<PathBuf>;
}

/// Shows blocking informational alerts.
pub trait Notifier {
    /// Display `message` and return once the user dismisses it.
    fn alert(&mut self, message: &str);
}

impl<T: FilePicker + ?Sized> FilePicker for &mut T {
    fn choose_open(&mut self) -> Option<PathBuf> {
        (**self).choose_open()
    }

    fn choose_save(&mut self) -> Option<PathBuf> {
        (**self).choose_save()
    }
}

impl<T: Notifier + ?Sized> Notifier for &mut T {
    fn alert(&mut self, message: &str) {
        (**self).alert(message)
    }
}
