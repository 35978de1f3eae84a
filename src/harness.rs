use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use goldbox::report::Palette;
use goldbox::Action;
use goldbox::Field;
use goldbox::GoldenStore;
use goldbox::Matcher;
use goldbox::Reporter;
use goldbox::Sink;
use goldbox::Termination;

use crate::Buffer;
use crate::Case;
use crate::CaseTable;
use crate::Runner;

/// Run a table of [`Case`]s against one [`Runner`]
///
/// Cases run one after the other, in the order they were added. Each case is keyed
/// `<group>/<name>`, which selects its gold masters in the golden directory.
///
/// Panics of an in-process [`Runner`] are caught and matched against [`Case::panic`], but the
/// process panic hook still runs, so each one also prints a `thread ... panicked at` block to
/// stderr. The hook is process-wide and is left alone.
///
/// ```rust,no_run
/// use goldcmd::{Case, Harness, Program};
///
/// Harness::new("hello", Program::new("hello"))
///     .case(Case::new("world").args(["hello", "World"]).stdout("Hello World!"))
///     .tables("tests/cmd/*.toml")
///     .run();
/// ```
pub struct Harness<R> {
    group: String,
    runner: R,
    entries: Vec<Entry>,
    store: GoldenStore,
    palette: Palette,
}

enum Entry {
    Case(Case),
    Invalid { name: String, error: crate::Error },
}

impl<R: Runner> Harness<R> {
    /// `group` prefixes every case key, usually the name of the test
    ///
    /// Gold masters are refreshed when the `GOLDEN` environment variable is set to `overwrite`.
    pub fn new(group: impl Into<String>, runner: R) -> Self {
        let action = Action::with_env_var(goldbox::DEFAULT_ACTION_ENV).unwrap_or_default();
        Self {
            group: group.into(),
            runner,
            entries: Vec::new(),
            store: GoldenStore::new().action(action),
            palette: Palette::auto(),
        }
    }

    pub fn case(mut self, case: Case) -> Self {
        self.entries.push(Entry::Case(case));
        self
    }

    pub fn cases(mut self, cases: impl IntoIterator<Item = Case>) -> Self {
        self.entries.extend(cases.into_iter().map(Entry::Case));
        self
    }

    /// Add every case of the [`CaseTable`] at `path`
    ///
    /// A table that cannot be loaded is reported as a failed case.
    pub fn table(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match CaseTable::load(path) {
            Ok(table) => {
                self.entries.extend(table.case.into_iter().map(Entry::Case));
            }
            Err(error) => {
                self.entries.push(Entry::Invalid {
                    name: path.display().to_string(),
                    error,
                });
            }
        }
        self
    }

    /// Add the tables matching `pattern`, in path order
    pub fn tables(mut self, pattern: &str) -> Self {
        let paths = match glob::glob(pattern) {
            Ok(paths) => paths,
            Err(err) => {
                self.entries.push(Entry::Invalid {
                    name: pattern.to_owned(),
                    error: format!("Invalid glob {pattern}: {err}").into(),
                });
                return self;
            }
        };

        let mut found: Vec<PathBuf> = Vec::new();
        for entry in paths {
            match entry {
                Ok(path) => found.push(path),
                Err(err) => {
                    self.entries.push(Entry::Invalid {
                        name: err.path().display().to_string(),
                        error: err.to_string().into(),
                    });
                }
            }
        }
        found.sort();
        for path in found {
            self = self.table(path);
        }
        self
    }

    /// Directory of the gold masters, [`goldbox::DEFAULT_GOLDEN_DIR`] by default
    pub fn golden_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.store = self.store.dir(dir);
        self
    }

    /// Override the [`Action`] read from the environment
    pub fn action(mut self, action: Action) -> Self {
        self.store = self.store.action(action);
        self
    }

    /// Read the [`Action`] from `var` instead of `GOLDEN`
    pub fn action_env(mut self, var: &str) -> Self {
        let action = Action::with_env_var(var).unwrap_or_default();
        self.store = self.store.action(action);
        self
    }

    /// Override the color palette of the report
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Run every case, panicking if any failed
    ///
    /// Each case is reported on stderr with all of its failure messages.
    #[track_caller]
    pub fn run(mut self) {
        if self.entries.is_empty() {
            goldbox::report::eprintln!(
                "{}",
                self.palette.warning("There are no goldcmd cases enabled yet")
            );
            return;
        }

        let mut reporter = Reporter::new().palette(self.palette);
        let summary = self.run_with(&mut reporter);
        if !summary.is_ok() {
            panic!("{} of {} cases failed", summary.failed, summary.total());
        }
    }

    /// Run every case, handing the verdicts to `sink`
    pub fn run_with(&mut self, sink: &mut dyn Sink) -> Summary {
        let mut summary = Summary::default();
        let mut names = UniqueNames::default();
        let entries = std::mem::take(&mut self.entries);
        for entry in &entries {
            let passed = match entry {
                Entry::Case(case) => {
                    let key = format!("{}/{}", self.group, names.insert(&case.name));
                    self.run_case(&key, case, sink)
                }
                Entry::Invalid { name, error } => {
                    let key = format!("{}/{}", self.group, names.insert(name));
                    sink.fail(&key, &[error.to_string()]);
                    false
                }
            };
            if passed {
                summary.passed += 1;
            } else {
                summary.failed += 1;
            }
        }
        self.entries = entries;
        summary
    }

    fn run_case(&mut self, key: &str, case: &Case, sink: &mut dyn Sink) -> bool {
        goldbox::debug!("Running {key}: {:?}", &*case.args);

        let stdout = Buffer::new();
        let stderr = Buffer::new();
        self.runner.set_stdout(Box::new(stdout.clone()));
        self.runner.set_stderr(Box::new(stderr.clone()));

        let mut m = Matcher::new(key, &self.store, case.fail.as_deref(), sink);

        let file = case
            .file
            .as_deref()
            .filter(|path| m.prepare_file(path));

        let runner = &mut self.runner;
        let (error, panic) = match goldbox::catch(|| runner.run(&case.args)) {
            Termination::Returned(Ok(())) => (String::new(), String::new()),
            Termination::Returned(Err(err)) => (err.to_string(), String::new()),
            Termination::Panicked(message) => (String::new(), message),
        };

        if let Some(path) = file {
            m.check_file(path);
        }
        m.check_bytes(Field::Stdout, &stdout.to_bytes(), &case.stdout);
        m.check_bytes(Field::Stderr, &stderr.to_bytes(), &case.stderr);
        m.check(Field::Panic, &panic, &case.panic);
        m.check(Field::Error, &error, &case.error);
        m.check_exit_code(self.runner.exit_code(), case.exit_code);

        m.finish().is_pass()
    }
}

impl<R> std::fmt::Debug for Harness<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Harness")
            .field("group", &self.group)
            .field("cases", &self.entries.len())
            .field("store", &self.store)
            .finish()
    }
}

/// Case counts of a [`Harness::run_with`]
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn is_ok(&self) -> bool {
        self.failed == 0
    }
}

/// Disambiguates case names: `#NN` for empty names, `name#NN` for repeated ones
#[derive(Default)]
struct UniqueNames {
    used: HashSet<String>,
}

impl UniqueNames {
    fn insert(&mut self, name: &str) -> String {
        if !name.is_empty() && self.used.insert(name.to_owned()) {
            return name.to_owned();
        }

        let mut n = if name.is_empty() { 0 } else { 1 };
        loop {
            let candidate = format!("{name}#{n:02}");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}
