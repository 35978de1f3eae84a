use std::io::Write;

use goldcmd::Runner;

/// In-process command echoing its arguments to the selected output
///
/// `echo <output> <value>...` where output is one of `stdout`, `stderr`, `panic`, `err`, `exit`
/// or `file <path>`. `echo bytes <n>...` writes the decimal bytes `n` to stdout as is.
#[derive(Default)]
pub(crate) struct Echo {
    stdout: Option<Box<dyn Write>>,
    stderr: Option<Box<dyn Write>>,
    exit_code: i32,
}

impl Runner for Echo {
    fn run(&mut self, args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
        self.exit_code = 2;
        let Some(name) = args.first() else {
            return Err("missing command name".into());
        };
        if name != "echo" {
            return Err(format!("invalid command name: {name}").into());
        }
        if args.len() == 1 || args[1] == "file" && args.len() != 3 {
            return Err("bad number of arguments".into());
        }

        let value = args[2..].join("\n");

        self.exit_code = 0;
        match args[1].as_str() {
            "stdout" => {
                if let Some(stdout) = self.stdout.as_mut() {
                    stdout.write_all(value.as_bytes())?;
                }
            }
            "stderr" => {
                self.exit_code = 1;
                if let Some(stderr) = self.stderr.as_mut() {
                    stderr.write_all(value.as_bytes())?;
                }
            }
            "panic" => {
                self.exit_code = 2;
                panic!("{}", value);
            }
            "err" => {
                self.exit_code = 3;
                return Err(value.into());
            }
            "bytes" => {
                let bytes = args[2..]
                    .iter()
                    .map(|n| n.parse::<u8>())
                    .collect::<Result<Vec<_>, _>>()?;
                if let Some(stdout) = self.stdout.as_mut() {
                    stdout.write_all(&bytes)?;
                }
            }
            "exit" => {
                self.exit_code = 4;
            }
            "file" => {
                let path = std::path::Path::new(&args[2]);
                let name = path.file_name().unwrap_or_default().to_string_lossy();
                std::fs::write(path, name.as_bytes()).unwrap();
            }
            _ => {}
        }

        Ok(())
    }

    fn set_stdout(&mut self, sink: Box<dyn Write>) {
        self.stdout = Some(sink);
    }

    fn set_stderr(&mut self, sink: Box<dyn Write>) {
        self.stderr = Some(sink);
    }

    fn exit_code(&self) -> i32 {
        self.exit_code
    }
}
