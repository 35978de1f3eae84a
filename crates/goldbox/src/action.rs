pub const DEFAULT_ACTION_ENV: &str = "GOLDEN";

/// What to do with gold masters, see [`GoldenStore`][crate::GoldenStore]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Compare against the committed gold master
    Verify,
    /// Record the actual output into the gold master before comparing
    Overwrite,
}

impl Action {
    pub fn with_env_var(var: impl AsRef<std::ffi::OsStr>) -> Option<Self> {
        let var = var.as_ref();
        let value = std::env::var_os(var)?;
        Self::with_env_value(value)
    }

    pub fn with_env_value(value: impl AsRef<std::ffi::OsStr>) -> Option<Self> {
        let value = value.as_ref();
        match value.to_str()? {
            "verify" => Some(Action::Verify),
            "overwrite" => Some(Action::Overwrite),
            _ => None,
        }
    }

    pub fn is_overwrite(self) -> bool {
        self == Action::Overwrite
    }
}

impl Default for Action {
    fn default() -> Self {
        Self::Verify
    }
}
