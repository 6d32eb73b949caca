use rfd::{MessageButtons, MessageDialog, MessageLevel};
use tracing::error;

/// Title for error dialogs: the path of the running executable.
pub fn dialog_title() -> String {
    std::env::current_exe()
        .ok()
        .map(|p| p.display().to_string())
        .or_else(|| {
            std::env::args_os()
                .next()
                .map(|a| a.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

/// Show `message` in a blocking modal dialog with an error icon and a single OK button.
pub fn show_error(message: &str) {
    error!("{}", message);
    let title = dialog_title();
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(&title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_never_empty() {
        assert!(!dialog_title().is_empty());
    }
}
