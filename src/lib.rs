#![doc = r#"
cfgconvwrap — a thin launcher in front of an external `.bin`/`.cpp` config converter.

The crate never converts anything itself. It validates three arguments (converter
path, mode token, source file), derives the destination path from the mode, and
starts the converter as `<tool> <-txt|-bin> -dst "<destination>" "<source>"`.

Quick start
-----------
```rust,no_run
use cfgconvwrap::{ConversionRequest, LaunchOptions, run};

fn main() -> cfgconvwrap::Result<()> {
    let request = ConversionRequest::parse(&[
        "/opt/tools/cfgconv.exe",
        "-b2c",
        "/data/settings.bin",
    ])?;
    assert_eq!(request.mode_option(), "-txt");

    // Fire-and-forget by default; set `wait: true` to get the exit code.
    run(&request, &LaunchOptions::default())?;
    Ok(())
}
```

Error handling
--------------
All fallible functions return `cfgconvwrap::Result<T>`. Use [`Error::kind`] to tell
argument problems from missing files and launch failures.

```rust,no_run
use cfgconvwrap::{ConversionRequest, ErrorKind};

match ConversionRequest::parse(&["tool.exe", "-b2c", "missing.bin"]) {
    Ok(req) => println!("{req}"),
    Err(e) if e.kind() == ErrorKind::FileNotFound => eprintln!("missing: {e}"),
    Err(e) => eprintln!("error: {e}"),
}
```

Feature flags
-------------
- `gui`: builds the `gui` module and the `cfgconvwrapUI` binary, which reports errors in a modal dialog.
- `full`: enables every feature.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod types;

// GUI module (only available with gui feature)
#[cfg(feature = "gui")]
pub mod gui;

pub use api::launch_from_args;
pub use core::launch::{LaunchOptions, LaunchOutcome, command_line, run, tool_arguments};
pub use core::request::{ConversionRequest, destination_path_for, resolve_existing_file};
pub use error::{Error, ErrorKind, Result};
pub use types::{ConversionMode, ExtensionStrategy};
