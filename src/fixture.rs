use std::path::Path;
use std::path::PathBuf;

/// Temporary directory for cases writing a file
///
/// The directory and everything in it is removed on drop, so keep it alive until the
/// [`Harness`][crate::Harness] has run.
///
/// ```rust,no_run
/// use goldcmd::{Case, Harness, Program, TempFiles};
///
/// let tmp = TempFiles::new().unwrap();
/// let out = tmp.path("out.json");
/// Harness::new("export", Program::new("export"))
///     .case(
///         Case::new("json")
///             .args(["export".into(), out.display().to_string()])
///             .file(&out),
///     )
///     .run();
/// ```
#[derive(Debug)]
pub struct TempFiles {
    dir: tempfile::TempDir,
}

impl TempFiles {
    pub fn new() -> Result<Self, crate::Error> {
        let dir = tempfile::Builder::new()
            .prefix("goldcmd")
            .tempdir()
            .map_err(|e| format!("Failed to create temporary directory: {e}"))?;
        goldbox::debug!("Temporary directory {}", dir.path().display());
        Ok(Self { dir })
    }

    /// `name` inside the temporary directory
    pub fn path(&self, name: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}
