use std::cell::RefCell;
use std::rc::Rc;

/// A command under test
///
/// A black box with inputs (the argument list) and outputs (standard output and error, a panic
/// or error message, the exit code, and maybe a file).
pub trait Runner {
    /// Execute the command; `args[0]` is the command name
    fn run(&mut self, args: &[String]) -> Result<(), Box<dyn std::error::Error>>;

    /// Where the command writes its standard output
    fn set_stdout(&mut self, sink: Box<dyn std::io::Write>);

    /// Where the command writes its standard error
    fn set_stderr(&mut self, sink: Box<dyn std::io::Write>);

    /// Exit code of the last run
    ///
    /// 0 before the first run and after a successful run, 2 if the command name is missing or
    /// invalid, -1 if the code cannot be recovered.
    fn exit_code(&self) -> i32;
}

impl<R: Runner + ?Sized> Runner for &mut R {
    fn run(&mut self, args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
        (**self).run(args)
    }

    fn set_stdout(&mut self, sink: Box<dyn std::io::Write>) {
        (**self).set_stdout(sink);
    }

    fn set_stderr(&mut self, sink: Box<dyn std::io::Write>) {
        (**self).set_stderr(sink);
    }

    fn exit_code(&self) -> i32 {
        (**self).exit_code()
    }
}

impl<R: Runner + ?Sized> Runner for Box<R> {
    fn run(&mut self, args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
        (**self).run(args)
    }

    fn set_stdout(&mut self, sink: Box<dyn std::io::Write>) {
        (**self).set_stdout(sink);
    }

    fn set_stderr(&mut self, sink: Box<dyn std::io::Write>) {
        (**self).set_stderr(sink);
    }

    fn exit_code(&self) -> i32 {
        (**self).exit_code()
    }
}

/// In-memory output sink whose clones share the same content
#[derive(Clone, Debug, Default)]
pub struct Buffer {
    inner: Rc<RefCell<Vec<u8>>>,
}

impl Buffer {
    pub fn new() -> Self {
        Default::default()
    }

    /// Everything written so far, as raw bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        self.inner.borrow().clone()
    }

    pub fn clear(&self) {
        self.inner.borrow_mut().clear();
    }
}

impl std::io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
