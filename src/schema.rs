//! Case tables
//!
//! [`CaseTable`] is the top-level item in the `*.toml` case files.

use std::path::Path;
use std::path::PathBuf;

/// Top-level data in case files
#[derive(Clone, Default, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct CaseTable {
    #[serde(default)]
    pub case: Vec<Case>,
}

impl CaseTable {
    /// Read the table at `path`, resolving relative `file`s against its directory
    pub fn load(path: &Path) -> Result<Self, crate::Error> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let mut table = Self::parse_toml(&raw)
            .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;

        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        for case in &mut table.case {
            if let Some(file) = case.file.take() {
                case.file = Some(dir.join(file));
            }
        }

        Ok(table)
    }

    pub fn parse_toml(s: &str) -> Result<Self, crate::Error> {
        toml_edit::de::from_str(s).map_err(|e| e.to_string().into())
    }
}

impl std::str::FromStr for CaseTable {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_toml(s)
    }
}

/// One set of inputs and expected outputs
///
/// Every expected value but `exit-code` is a smart string; an empty one expects an empty output.
#[derive(Clone, Default, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
#[serde(deny_unknown_fields)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Case {
    /// Unique within a run; a `#NN` suffix is added to empty or repeated names
    #[serde(default)]
    pub name: String,
    /// Argument list, starting with the command name
    #[serde(default)]
    pub args: Args,
    /// File the command writes, removed before the run
    ///
    /// Matched against the gold master sharing its extension.
    pub file: Option<PathBuf>,
    #[serde(default)]
    pub stdout: String,
    #[serde(default)]
    pub stderr: String,
    #[serde(default)]
    pub panic: String,
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub exit_code: i32,
    /// The single failure this case must produce
    ///
    /// For testing the failure reporting itself: the case passes only when it fails with exactly
    /// one message matching this smart string.
    pub fail: Option<String>,
}

impl Case {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args = Args::Split(args.into_iter().map(|s| s.into()).collect());
        self
    }

    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    pub fn stdout(mut self, want: impl Into<String>) -> Self {
        self.stdout = want.into();
        self
    }

    pub fn stderr(mut self, want: impl Into<String>) -> Self {
        self.stderr = want.into();
        self
    }

    pub fn panic(mut self, want: impl Into<String>) -> Self {
        self.panic = want.into();
        self
    }

    pub fn error(mut self, want: impl Into<String>) -> Self {
        self.error = want.into();
        self
    }

    pub fn exit_code(mut self, want: i32) -> Self {
        self.exit_code = want;
        self
    }

    pub fn fail(mut self, want: impl Into<String>) -> Self {
        self.fail = Some(want.into());
        self
    }
}

/// Argument list, either an array or a shell-quoted string
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum Args {
    Joined(JoinedArgs),
    Split(Vec<String>),
}

impl Args {
    fn new() -> Self {
        Self::Split(Default::default())
    }

    fn as_slice(&self) -> &[String] {
        match self {
            Self::Joined(j) => j.inner.as_slice(),
            Self::Split(v) => v.as_slice(),
        }
    }
}

impl Default for Args {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for Args {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

/// Shell-quoted argument string, split with `shlex`
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct JoinedArgs {
    inner: Vec<String>,
}

impl JoinedArgs {
    #[cfg(test)]
    pub(crate) fn from_vec(inner: Vec<String>) -> Self {
        JoinedArgs { inner }
    }
}

impl<'de> serde::Deserialize<'de> for JoinedArgs {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let line = String::deserialize(deserializer)?;
        Ok(Self {
            inner: shlex::Shlex::new(&line).collect(),
        })
    }
}
