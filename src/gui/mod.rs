//! Dialog-based error reporting for the `cfgconvwrapUI` binary.
pub mod dialog;

pub use dialog::{dialog_title, show_error};
