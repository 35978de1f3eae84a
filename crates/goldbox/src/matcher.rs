use std::borrow::Cow;
use std::path::Path;

use crate::format;
use crate::Field;
use crate::GoldenStore;
use crate::Pattern;
use crate::Sink;

/// Outcome of a finished [`Matcher`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn is_pass(self) -> bool {
        self == Verdict::Pass
    }
}

/// Accumulates every mismatch of one test case
///
/// Checks never stop at the first mismatch: each failing field, gold master or fixture file adds
/// one message and [`Matcher::finish`] reports all of them at once.
///
/// A case may declare an expected failure, used to test the failure reporting itself. It then
/// passes only when exactly one message was accumulated and that message matches the expected
/// smart string.
pub struct Matcher<'a> {
    key: &'a str,
    store: &'a GoldenStore,
    expected_failure: Option<&'a str>,
    sink: &'a mut dyn Sink,
    messages: Vec<String>,
}

impl<'a> Matcher<'a> {
    /// Start matching the case `key`
    ///
    /// `key` names the case in reports and selects its gold masters.
    pub fn new(
        key: &'a str,
        store: &'a GoldenStore,
        expected_failure: Option<&'a str>,
        sink: &'a mut dyn Sink,
    ) -> Self {
        Self {
            key,
            store,
            expected_failure,
            sink,
            messages: Vec::new(),
        }
    }

    /// Match `got` against the smart string `want`
    ///
    /// An empty `want` expects an empty `got`.
    pub fn check(&mut self, field: Field, got: &str, want: &str) {
        self.check_bytes(field, got.as_bytes(), want);
    }

    /// Match raw output against the smart string `want`
    ///
    /// Bytes are compared as-is, including with gold masters; invalid UTF-8 is only replaced when
    /// rendering the message.
    pub fn check_bytes(&mut self, field: Field, got: &[u8], want: &str) {
        let pattern = Pattern::classify(want);
        let label = pattern.label();

        let (ok, want) = match pattern {
            Pattern::Golden(ext) => match self.store.resolve(self.key, ext, got) {
                Ok(content) => {
                    let ok = got == content.as_slice();
                    (ok, Cow::Owned(String::from_utf8_lossy(&content).into_owned()))
                }
                Err(err) => {
                    self.messages.push(format!("{field}{label} {err}"));
                    return;
                }
            },
            pattern => (pattern.is_match(got) == Some(true), Cow::Borrowed(want)),
        };

        if !ok {
            let got = String::from_utf8_lossy(got);
            self.messages.push(format::mismatch(field, &label, &got, &want));
        }
    }

    pub fn check_exit_code(&mut self, got: i32, want: i32) {
        if got != want {
            self.messages.push(format::exit_code(got, want));
        }
    }

    /// Clear the way for a file the command is expected to write
    ///
    /// Returns `false` when the file cannot be checked for this case; the reason is accumulated.
    pub fn prepare_file(&mut self, path: &Path) -> bool {
        let field = Field::File;
        match std::fs::metadata(path) {
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => true,
            Err(err) => {
                self.messages.push(format!(
                    "{field} access error:\n{}: {err}",
                    path.display()
                ));
                false
            }
            Ok(meta) if !meta.is_file() => {
                self.messages
                    .push(format!("{field} mode error:\nexpected regular file"));
                false
            }
            Ok(_) => {
                crate::debug!("Removing {}", path.display());
                match std::fs::remove_file(path) {
                    Ok(()) => true,
                    Err(err) => {
                        self.messages.push(format!(
                            "{field} remove error:\n{}: {err}",
                            path.display()
                        ));
                        false
                    }
                }
            }
        }
    }

    /// Match the file written by the command against its gold master
    ///
    /// The gold master shares the file's extension.
    pub fn check_file(&mut self, path: &Path) {
        let field = Field::File;
        match std::fs::read(path) {
            Ok(data) => {
                let name = path.to_string_lossy();
                let want = format!("golden{}", crate::extension(&name));
                self.check_bytes(field, &data, &want);
            }
            Err(err) => {
                self.messages
                    .push(format!("{field} read error:\n{}: {err}", path.display()));
            }
        }
    }

    /// Messages accumulated so far
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// End the case, handing any failure to the sink
    pub fn finish(mut self) -> Verdict {
        let verdict = match self.expected_failure {
            None => {
                if self.messages.is_empty() {
                    Verdict::Pass
                } else {
                    Verdict::Fail
                }
            }
            Some(want) if self.messages.len() == 1 => {
                let got = self.messages[0].clone();
                self.check(Field::Fail, &got, want);
                if self.messages.len() == 1 {
                    Verdict::Pass
                } else {
                    Verdict::Fail
                }
            }
            Some(want) => {
                // Exactly one failure is required, whatever the pattern
                let label = Pattern::classify(want).label();
                self.messages
                    .push(format::mismatch(Field::Fail, &label, "", want));
                Verdict::Fail
            }
        };

        match verdict {
            Verdict::Pass => self.sink.pass(self.key),
            Verdict::Fail => self.sink.fail(self.key, &self.messages),
        }
        verdict
    }
}

/// How a command body ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Termination<T> {
    /// The body returned normally
    Returned(T),
    /// The body panicked with this message
    Panicked(String),
}

/// Run `f`, turning a panic into [`Termination::Panicked`]
///
/// ```rust
/// use goldbox::Termination;
///
/// assert_eq!(goldbox::catch(|| 42), Termination::Returned(42));
/// assert_eq!(
///     goldbox::catch(|| -> i32 { panic!("boom") }),
///     Termination::Panicked("boom".to_owned())
/// );
/// ```
pub fn catch<T>(f: impl FnOnce() -> T) -> Termination<T> {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(value) => Termination::Returned(value),
        Err(payload) => Termination::Panicked(panic_message(payload.as_ref())),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Box<dyn Any>".to_owned()
    }
}
