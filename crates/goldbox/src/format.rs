//! Rendering of mismatch messages

/// Output channel of a test case, used to name mismatches
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// Content of the file written by the command
    File,
    Stdout,
    Stderr,
    /// Panic message of an in-process command
    Panic,
    /// Error returned by the command
    Error,
    ExitCode,
    /// The single failure message of a case that is expected to fail
    Fail,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::File => "file",
            Field::Stdout => "stdout",
            Field::Stderr => "stderr",
            Field::Panic => "panic",
            Field::Error => "error",
            Field::ExitCode => "exit code",
            Field::Fail => "fail",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}

/// Whether `s` has a newline anywhere but in its last byte
pub fn is_multiline(s: &str) -> bool {
    s.len() > 1 && s.as_bytes()[..s.len() - 1].contains(&b'\n')
}

/// Render a `got`/`want` discrepancy of `field`
///
/// `label` qualifies the field with the match strategy, see [`Pattern::label`][crate::Pattern::label].
///
/// ```rust
/// use goldbox::Field;
///
/// let message = goldbox::format::mismatch(Field::Stdout, "", "", "value");
/// assert_eq!(message, "stdout match error:\ngot an empty string, want: value");
/// ```
pub fn mismatch(field: Field, label: &str, got: &str, want: &str) -> String {
    let mut m = String::new();
    m.push_str(field.as_str());
    m.push_str(label);
    m.push_str(" match error:");

    if field == Field::Fail {
        m.push_str(" expected: ");
        m.push_str(want);
    } else if got.is_empty() {
        m.push_str("\ngot an empty string, want:");
        write_value(&mut m, want);
    } else if want.is_empty() {
        m.push_str("\nwant an empty string, got:");
        write_value(&mut m, got);
    } else if is_multiline(got) || is_multiline(want) {
        m.push_str("\ngot:");
        write_indent(&mut m, got);
        m.push_str("\nwant:");
        write_indent(&mut m, want);
    } else {
        m.push_str("\ngot: ");
        write_line(&mut m, got);
        m.push_str("\nwant: ");
        write_line(&mut m, want);
    }

    m
}

/// Render an exit code discrepancy
///
/// ```rust
/// assert_eq!(
///     goldbox::format::exit_code(4, 0),
///     "exit code match error:\ngot: 4, want: 0"
/// );
/// ```
pub fn exit_code(got: i32, want: i32) -> String {
    format!("{} match error:\ngot: {got}, want: {want}", Field::ExitCode)
}

fn write_value(m: &mut String, s: &str) {
    if is_multiline(s) {
        write_indent(m, s);
    } else {
        m.push(' ');
        write_line(m, s);
    }
}

/// One line, dropping a single trailing newline
fn write_line(m: &mut String, s: &str) {
    m.push_str(s.strip_suffix('\n').unwrap_or(s));
}

/// Every line on its own, indented by four spaces
fn write_indent(m: &mut String, s: &str) {
    for line in s.split('\n') {
        m.push_str("\n    ");
        m.push_str(line);
    }
}
