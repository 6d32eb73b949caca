//! Dialog front-end: same launcher, but every failure is shown in a modal error
//! dialog and the process always exits normally. Intended for shell
//! associations and shortcuts where there is no console to print to.
#![cfg_attr(all(windows, feature = "gui"), windows_subsystem = "windows")]

#[cfg(feature = "gui")]
use cfgconvwrap::{LaunchOptions, gui, launch_from_args};

#[cfg(feature = "gui")]
fn main() {
    let args: Vec<std::ffi::OsString> = std::env::args_os().skip(1).collect();
    if let Err(e) = launch_from_args(args.as_slice(), &LaunchOptions::default()) {
        gui::show_error(&e.to_string());
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    eprintln!("GUI feature is not enabled. Please build with --features gui");
    std::process::exit(1);
}
