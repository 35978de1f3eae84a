use goldcmd::Case;
use goldcmd::Harness;
use goldcmd::Program;

fn fixture() -> String {
    goldcmd::cargo_bin!("golden-fixture").display().to_string()
}

#[test]
fn external() {
    let name = fixture();
    let args = |rest: &[&str]| {
        let mut args = vec![name.clone()];
        args.extend(rest.iter().map(|s| (*s).to_owned()));
        args
    };

    Harness::new("external", Program::new(&name))
        .cases([
            Case::new("stdout")
                .args(args(&["stdout", "Hello", "World!"]))
                .stdout("Hello\nWorld!"),
            Case::new("stderr")
                .args(args(&["stderr", "value"]))
                .stderr("value")
                .error("exit status 1")
                .exit_code(1),
            Case::new("missing command")
                .args(args(&[]))
                .stderr("...missing command...")
                .error("exit status 101")
                .exit_code(101),
            Case::new("invalid command")
                .args(args(&["command"]))
                .stderr("...invalid command name: command...")
                .error("^exit status \\d+$")
                .exit_code(101),
        ])
        .run();
}

#[test]
fn calling_errors() {
    Harness::new("external", Program::new(fixture()))
        .cases([
            Case::new("missing program")
                .error("missing program name")
                .exit_code(2),
            Case::new("invalid program")
                .args(["version"])
                .error("invalid program name: version")
                .exit_code(2),
        ])
        .run();
}

#[test]
fn env() {
    let name = fixture();
    Harness::new("external", Program::new(&name).env("GOLDCMD_FIXTURE", "value"))
        .case(
            Case::new("env")
                .args([name.as_str(), "env", "GOLDCMD_FIXTURE"])
                .stdout("value"),
        )
        .run();
}
