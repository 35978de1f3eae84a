#[cfg(feature = "color")]
use anstream::stderr;
#[cfg(not(feature = "color"))]
use std::io::stderr;

use crate::report::Palette;

/// Where a [`Matcher`][crate::Matcher] sends the verdict of a case
pub trait Sink {
    /// The case passed
    fn pass(&mut self, case: &str) {
        let _ = case;
    }

    /// The case failed with every accumulated message
    fn fail(&mut self, case: &str, messages: &[String]);
}

/// Writes each verdict to stderr
#[derive(Clone, Debug)]
pub struct Reporter {
    palette: Palette,
}

impl Reporter {
    pub fn new() -> Self {
        Default::default()
    }

    /// Override the color palette
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self {
            palette: Palette::auto(),
        }
    }
}

impl Sink for Reporter {
    fn pass(&mut self, case: &str) {
        use std::io::Write;

        let _ = writeln!(
            stderr(),
            "{} {} ... {}",
            self.palette.label("Testing"),
            case,
            self.palette.passed("ok")
        );
    }

    fn fail(&mut self, case: &str, messages: &[String]) {
        use std::io::Write;

        let mut stderr = stderr().lock();
        let _ = writeln!(
            stderr,
            "{} {} ... {}",
            self.palette.label("Testing"),
            case,
            self.palette.failed("failed")
        );
        let _ = writeln!(stderr, "{}", messages.join("\n"));
    }
}

/// Records failures instead of reporting them
///
/// Used to assert on the failure reporting of the harness itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Capture {
    passed: Vec<String>,
    failures: Vec<(String, Vec<String>)>,
}

impl Capture {
    pub fn new() -> Self {
        Default::default()
    }

    /// Cases that passed, in order
    pub fn passed(&self) -> &[String] {
        &self.passed
    }

    /// Failed cases with their messages, in order
    pub fn failures(&self) -> &[(String, Vec<String>)] {
        &self.failures
    }

    /// Messages of the failed case `case`
    pub fn messages(&self, case: &str) -> Option<&[String]> {
        self.failures
            .iter()
            .find(|(name, _)| name == case)
            .map(|(_, messages)| messages.as_slice())
    }

    /// Whether no case failed
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Sink for Capture {
    fn pass(&mut self, case: &str) {
        self.passed.push(case.to_owned());
    }

    fn fail(&mut self, case: &str, messages: &[String]) {
        self.failures.push((case.to_owned(), messages.to_vec()));
    }
}
