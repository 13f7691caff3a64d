//! Native file pickers and message boxes.
//!
//! All calls block the UI thread until the user answers, which matches the
//! store's synchronous model.

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::{Path, PathBuf};

use crate::notice::{Level, Notice};

pub fn show(notice: &Notice) {
    let level = match notice.level {
        Level::Info => MessageLevel::Info,
        Level::Warning => MessageLevel::Warning,
        Level::Error => MessageLevel::Error,
    };
    MessageDialog::new()
        .set_level(level)
        .set_title(notice.title.as_str())
        .set_description(notice.message.as_str())
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Asks before deleting `name`. Anything but an explicit "Yes" is a no.
pub fn confirm_delete(name: &str) -> bool {
    let answer = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title("Confirm Deletion")
        .set_description(format!(
            "Are you sure you want to delete the snippet '{name}'?"
        ))
        .set_buttons(MessageButtons::YesNo)
        .show();
    matches!(answer, MessageDialogResult::Yes)
}

pub fn pick_import_file(start_dir: Option<&Path>) -> Option<PathBuf> {
    with_directory(FileDialog::new(), start_dir)
        .set_title("Import Snippets")
        .add_filter("JSON Files", &["json"])
        .pick_file()
}

pub fn pick_export_file(
    title: &str,
    suggested_name: &str,
    start_dir: Option<&Path>,
) -> Option<PathBuf> {
    with_directory(FileDialog::new(), start_dir)
        .set_title(title)
        .set_file_name(suggested_name)
        .save_file()
}

fn with_directory(dialog: FileDialog, start_dir: Option<&Path>) -> FileDialog {
    match start_dir {
        Some(dir) => dialog.set_directory(dir),
        None => dialog,
    }
}
