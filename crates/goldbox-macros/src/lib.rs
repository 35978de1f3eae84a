#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::print_stderr)]
#![warn(clippy::print_stdout)]

//! Macros shared by `goldbox` and `goldcmd`

#[cfg(feature = "color")]
pub use anstream::eprintln;
#[cfg(not(feature = "color"))]
pub use std::eprintln;

/// Trace a harness step on stderr, tagged with the calling module
///
/// Compiled out unless the `debug` feature is on.
#[cfg(feature = "debug")]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::eprintln!("[{:>28}] {}", module_path!(), format_args!($($arg)*))
    };
}

/// Trace a harness step on stderr, tagged with the calling module
///
/// Compiled out unless the `debug` feature is on.
#[cfg(not(feature = "debug"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

/// Path of the executable of a binary target of the package under test
///
/// Only available in integration tests and benchmarks, where cargo sets
/// `CARGO_BIN_EXE_<name>`.
///
/// ```rust,ignore
/// let program = goldcmd::Program::new(goldcmd::cargo_bin!("golden-fixture"));
/// ```
#[macro_export]
macro_rules! cargo_bin {
    ($name:expr) => {
        ::std::path::Path::new(env!(concat!("CARGO_BIN_EXE_", $name)))
    };
}
