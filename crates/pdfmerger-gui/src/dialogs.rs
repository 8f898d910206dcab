//! Native file choosers and alerts backed by `rfd`.

use pdfmerger::APP_TITLE;
use pdfmerger::picker::{FilePicker, Notifier, PDF_EXTENSION, SAVE_PROMPT};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::PathBuf;

const FILTER_NAME: &str = "PDF Files";

/// Blocking native file dialogs restricted to `*.pdf`.
#[derive(Debug, Default)]
pub struct NativePicker;

impl NativePicker {
    fn dialog() -> FileDialog {
        FileDialog::new().add_filter(FILTER_NAME, &[PDF_EXTENSION])
    }
}

impl FilePicker for NativePicker {
    fn choose_open(&mut self) -> Option<PathBuf> {
        Self::dialog().set_title(APP_TITLE).pick_file()
    }

    fn choose_save(&mut self) -> Option<PathBuf> {
        Self::dialog().set_title(SAVE_PROMPT).save_file()
    }
}

/// Blocking informational message boxes titled with the app name.
#[derive(Debug, Default)]
pub struct NativeNotifier;

impl Notifier for NativeNotifier {
    fn alert(&mut self, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(APP_TITLE)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
