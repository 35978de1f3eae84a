/// Styles of the case report: verdicts, the `Testing` label and warnings
#[derive(Copy, Clone, Debug, Default)]
pub struct Palette {
    passed: anstyle::Style,
    failed: anstyle::Style,
    label: anstyle::Style,
    warning: anstyle::Style,
}

impl Palette {
    /// Plain text
    pub fn never() -> Self {
        Self::default()
    }

    /// Colored when stderr supports it and the `color` feature is on
    pub fn auto() -> Self {
        if stderr_is_colored() {
            Self::colored()
        } else {
            Self::never()
        }
    }

    fn colored() -> Self {
        Self {
            passed: anstyle::AnsiColor::Green.on_default(),
            failed: anstyle::AnsiColor::Red.on_default() | anstyle::Effects::BOLD,
            label: anstyle::Effects::DIMMED.into(),
            warning: anstyle::AnsiColor::Yellow.on_default(),
        }
    }

    pub fn passed<D: std::fmt::Display>(self, item: D) -> Styled<D> {
        Styled::new(item, self.passed)
    }

    pub fn failed<D: std::fmt::Display>(self, item: D) -> Styled<D> {
        Styled::new(item, self.failed)
    }

    pub fn label<D: std::fmt::Display>(self, item: D) -> Styled<D> {
        Styled::new(item, self.label)
    }

    pub fn warning<D: std::fmt::Display>(self, item: D) -> Styled<D> {
        Styled::new(item, self.warning)
    }
}

#[cfg(feature = "color")]
fn stderr_is_colored() -> bool {
    anstream::AutoStream::choice(&std::io::stderr()) != anstream::ColorChoice::Never
}

#[cfg(not(feature = "color"))]
fn stderr_is_colored() -> bool {
    false
}

/// A value rendered between a style and its reset
#[derive(Debug)]
pub struct Styled<D> {
    display: D,
    style: anstyle::Style,
}

impl<D: std::fmt::Display> Styled<D> {
    fn new(display: D, style: anstyle::Style) -> Self {
        Self { display, style }
    }
}

impl<D: std::fmt::Display> std::fmt::Display for Styled<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.style.render(),
            self.display,
            self.style.render_reset()
        )
    }
}
