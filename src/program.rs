use std::ffi::OsString;
use std::io::Write as _;

use crate::Error;
use crate::Runner;

/// [`Runner`] for an external program
///
/// `args[0]` must be the program name; the rest is passed to the process, which inherits the
/// current environment plus the variables added with [`Program::env`].
///
/// ```rust,no_run
/// use goldcmd::{Case, Harness, Program};
///
/// Harness::new("version", Program::new("cargo"))
///     .case(Case::new("short").args(["cargo", "--version"]).stdout("cargo ..."))
///     .run();
/// ```
pub struct Program {
    name: String,
    env: Vec<(OsString, OsString)>,
    stdout: Option<Box<dyn std::io::Write>>,
    stderr: Option<Box<dyn std::io::Write>>,
    exit_code: i32,
}

impl Program {
    /// `name` is looked up like [`std::process::Command::new`]
    pub fn new(name: impl AsRef<std::ffi::OsStr>) -> Self {
        Self {
            name: name.as_ref().to_string_lossy().into_owned(),
            env: Vec::new(),
            stdout: None,
            stderr: None,
            exit_code: 0,
        }
    }

    /// Inserts or updates an environment variable mapping.
    pub fn env(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Adds or updates multiple environment variable mappings.
    pub fn envs(
        mut self,
        vars: impl IntoIterator<Item = (impl Into<OsString>, impl Into<OsString>)>,
    ) -> Self {
        self.env
            .extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

impl Runner for Program {
    fn run(&mut self, args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
        self.exit_code = 2;

        let (name, args) = args
            .split_first()
            .ok_or_else(|| Error::new("missing program name"))?;
        if *name != self.name {
            return Err(Error::new(format!("invalid program name: {name}")).into());
        }

        self.exit_code = 0;

        goldbox::debug!("Spawning {} {:?}", self.name, args);
        let output = std::process::Command::new(&self.name)
            .args(args)
            .envs(self.env.iter().map(|(k, v)| (k, v)))
            .output();
        let output = match output {
            Ok(output) => output,
            Err(err) => {
                self.exit_code = -1;
                return Err(err.into());
            }
        };

        if let Some(stdout) = self.stdout.as_mut() {
            stdout.write_all(&output.stdout)?;
        }
        if let Some(stderr) = self.stderr.as_mut() {
            stderr.write_all(&output.stderr)?;
        }

        if output.status.success() {
            Ok(())
        } else {
            self.exit_code = output.status.code().unwrap_or(-1);
            Err(Error::new(display_exit_status(output.status)).into())
        }
    }

    fn set_stdout(&mut self, sink: Box<dyn std::io::Write>) {
        self.stdout = Some(sink);
    }

    fn set_stderr(&mut self, sink: Box<dyn std::io::Write>) {
        self.stderr = Some(sink);
    }

    fn exit_code(&self) -> i32 {
        self.exit_code
    }
}

impl std::fmt::Debug for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Program")
            .field("name", &self.name)
            .field("env", &self.env)
            .field("exit_code", &self.exit_code)
            .finish()
    }
}

/// Converts an [`std::process::ExitStatus`] to the error reported by [`Program`]
///
/// `exit status <code>`, or the signal on unix when the process did not exit.
pub fn display_exit_status(status: std::process::ExitStatus) -> String {
    if let Some(code) = status.code() {
        return format!("exit status {code}");
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        if let Some(signal) = status.signal() {
            let name = match signal as libc::c_int {
                libc::SIGABRT => ", SIGABRT: process abort signal",
                libc::SIGALRM => ", SIGALRM: alarm clock",
                libc::SIGFPE => ", SIGFPE: erroneous arithmetic operation",
                libc::SIGHUP => ", SIGHUP: hangup",
                libc::SIGILL => ", SIGILL: illegal instruction",
                libc::SIGINT => ", SIGINT: terminal interrupt signal",
                libc::SIGKILL => ", SIGKILL: kill",
                libc::SIGPIPE => ", SIGPIPE: write on a pipe with no one to read",
                libc::SIGQUIT => ", SIGQUIT: terminal quit signal",
                libc::SIGSEGV => ", SIGSEGV: invalid memory reference",
                libc::SIGTERM => ", SIGTERM: termination signal",
                libc::SIGBUS => ", SIGBUS: access to undefined memory",
                libc::SIGTRAP => ", SIGTRAP: trace/breakpoint trap",
                _ => "",
            };
            return format!("signal: {signal}{name}");
        }
    }

    "interrupted".to_owned()
}
