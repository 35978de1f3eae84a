use std::io::Write;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        panic!("missing command");
    };
    let value = args[2..].join("\n");

    match command.as_str() {
        "stdout" => {
            std::io::stdout().write_all(value.as_bytes()).unwrap();
        }
        "stderr" => {
            std::io::stderr().write_all(value.as_bytes()).unwrap();
            std::process::exit(1);
        }
        "env" => {
            let value = std::env::var(&value).unwrap_or_default();
            std::io::stdout().write_all(value.as_bytes()).unwrap();
        }
        _ => panic!("invalid command name: {command}"),
    }
}
