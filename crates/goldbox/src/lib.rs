//! # Smart-string and gold master matching toolbox
//!
//! `goldbox` is the engine behind [`goldcmd`][goldcmd]:
//! - [`Pattern`] decides how an expected string is matched
//! - [`GoldenStore`] reads (and with [`Action::Overwrite`], refreshes) gold master files
//! - [`Matcher`] accumulates every mismatch of one test case and reports them to a [`Sink`]
//!
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!
//! # Smart strings
//!
//! ```text
//! "golden"         // content of testdata/golden/<case>
//! "golden.json"    // content of testdata/golden/<case>.json
//! "^value|error$"  // full regex match
//! "...value"       // suffix
//! "value..."       // prefix
//! "...value..."    // substring
//! "=...value"      // the literal "...value"
//! "a...value"      // anything else is a literal
//! ```
//!
//! # Examples
//!
//! ```rust
//! use goldbox::{Capture, Field, GoldenStore, Matcher, Verdict};
//!
//! let store = GoldenStore::new();
//! let mut sink = Capture::new();
//! let mut m = Matcher::new("hello", &store, None, &mut sink);
//! m.check(Field::Stdout, "Hello World!", "Hello...");
//! m.check_exit_code(0, 0);
//! assert_eq!(m.finish(), Verdict::Pass);
//! ```
//!
//! [goldcmd]: https://docs.rs/goldcmd

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::print_stderr)]
#![warn(clippy::print_stdout)]

mod action;
mod error;
mod golden;
mod matcher;
mod sink;
mod smart;

pub mod format;
pub mod report;

pub use action::Action;
pub use action::DEFAULT_ACTION_ENV;
pub use error::Error;
pub use error::Result;
pub use format::is_multiline;
pub use format::Field;
pub use golden::GoldenError;
pub use golden::GoldenStore;
pub use golden::DEFAULT_GOLDEN_DIR;
pub use matcher::catch;
pub use matcher::Matcher;
pub use matcher::Termination;
pub use matcher::Verdict;
pub use sink::Capture;
pub use sink::Reporter;
pub use sink::Sink;
pub use smart::extension;
pub use smart::Pattern;

pub use goldbox_macros::cargo_bin;
pub use goldbox_macros::debug;

