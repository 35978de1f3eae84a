use std::path::Path;
use std::path::PathBuf;

use crate::Action;

pub const DEFAULT_GOLDEN_DIR: &str = "testdata/golden";

/// Gold master files of a test run
///
/// A gold master lives at `<dir>/<key><ext>` where the path separators of the case key are
/// replaced by `-`, so `group/case` with `.json` reads `testdata/golden/group-case.json`.
///
/// With [`Action::Overwrite`], the actual value is written before the file is read back, so the
/// comparison always succeeds barring I/O failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoldenStore {
    dir: PathBuf,
    action: Action,
}

impl GoldenStore {
    pub fn new() -> Self {
        Default::default()
    }

    /// Override where gold masters are stored
    pub fn dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    /// Override the refresh behavior
    pub fn action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }

    pub fn get_dir(&self) -> &Path {
        &self.dir
    }

    pub fn get_action(&self) -> Action {
        self.action
    }

    /// Location of the gold master for a case key and extension
    pub fn path(&self, key: &str, ext: &str) -> PathBuf {
        let name = key.replace(std::path::is_separator, "-");
        self.dir.join(format!("{name}{ext}"))
    }

    /// Raw content of the gold master, refreshed from `got` first when overwriting
    pub fn resolve(&self, key: &str, ext: &str, got: &[u8]) -> Result<Vec<u8>, GoldenError> {
        let path = self.path(key, ext);

        if self.action.is_overwrite() {
            std::fs::create_dir_all(&self.dir).map_err(|source| GoldenError::Folder {
                path: self.dir.clone(),
                source,
            })?;
            crate::debug!("Writing {}", path.display());
            std::fs::write(&path, got).map_err(|source| GoldenError::Update {
                path: path.clone(),
                source,
            })?;
        }

        crate::debug!("Reading {}", path.display());
        std::fs::read(&path).map_err(|source| GoldenError::Read { path, source })
    }
}

impl Default for GoldenStore {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_GOLDEN_DIR),
            action: Default::default(),
        }
    }
}

/// Failure to access a gold master
#[derive(Debug)]
pub enum GoldenError {
    /// The store directory could not be created
    Folder {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The gold master could not be overwritten
    Update {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The gold master could not be read
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl GoldenError {
    pub fn category(&self) -> &'static str {
        match self {
            GoldenError::Folder { .. } => "folder error",
            GoldenError::Update { .. } => "update error",
            GoldenError::Read { .. } => "read error",
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            GoldenError::Folder { path, .. }
            | GoldenError::Update { path, .. }
            | GoldenError::Read { path, .. } => path,
        }
    }

    fn io(&self) -> &std::io::Error {
        match self {
            GoldenError::Folder { source, .. }
            | GoldenError::Update { source, .. }
            | GoldenError::Read { source, .. } => source,
        }
    }
}

impl std::fmt::Display for GoldenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:\n{}: {}", self.category(), self.path().display(), self.io())
    }
}

impl std::error::Error for GoldenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.io())
    }
}
