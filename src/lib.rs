//! # Table-driven command tests
//!
//! `goldcmd` runs a table of [`Case`]s against a command and reports every mismatch between the
//! actual and expected outputs of each case: standard output, standard error, panic message,
//! error message, exit code and an optional written file.
//!
//! ## Getting Started
//!
//! A command is anything implementing [`Runner`]. External programs are wrapped with
//! [`Program`]:
//!
//! ```rust,no_run
//! use goldcmd::{Case, Harness, Program};
//!
//! #[test]
//! fn hello() {
//!     Harness::new("hello", Program::new("hello"))
//!         .case(
//!             Case::new("output")
//!                 .args(["hello", "World"])
//!                 .stdout("Hello World!"),
//!         )
//!         .run();
//! }
//! ```
//!
//! The first argument is always the command name.
//!
//! ## Smart strings
//!
//! Expected values are smart strings, see [`goldbox::Pattern`]:
//!
//! ```text
//! "golden"         // content of testdata/golden/hello-output
//! "golden.json"    // content of testdata/golden/hello-output.json
//! "^value|error$"  // full regex match
//! "...value"       // suffix
//! "value..."       // prefix
//! "...value..."    // substring
//! "=value"         // exactly "value", "==value" is exactly "=value"
//! ```
//!
//! ## Workflow
//!
//! To record or refresh the gold masters, run
//! ```console
//! $ GOLDEN=overwrite cargo test
//! ```
//! Every `golden` comparison then writes the actual output before reading it back.
//!
//! ## Case tables
//!
//! Cases can also live in TOML files, see [`CaseTable`]:
//!
//! ```toml
//! [[case]]
//! name = "stdout"
//! args = "echo stdout 'Hello World!'"
//! stdout = "Hello..."
//!
//! [[case]]
//! name = "failure"
//! args = ["echo", "exit"]
//! exit-code = 4
//! ```
//!
//! To debug what `goldcmd` is doing, run `cargo test -F goldcmd/debug`.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::print_stderr)]
#![warn(clippy::print_stdout)]

mod fixture;
mod harness;
mod program;
mod runner;

pub mod schema;

pub use fixture::TempFiles;
pub use harness::Harness;
pub use harness::Summary;
pub use program::display_exit_status;
pub use program::Program;
pub use runner::Buffer;
pub use runner::Runner;
pub use schema::Case;
pub use schema::CaseTable;

pub use goldbox::cargo_bin;
pub use goldbox::Action;
pub use goldbox::Capture;
pub use goldbox::report::Palette;
pub use goldbox::Error;
pub use goldbox::Reporter;
pub use goldbox::Sink;
