use goldcmd::Case;
use goldcmd::Harness;

use crate::echo::Echo;

#[test]
fn equal() {
    Harness::new("equal", Echo::default())
        .cases([
            Case::new("stdout")
                .args(["echo", "stdout", "value"])
                .stdout("value"),
            Case::new("stderr")
                .args(["echo", "stderr", "value"])
                .stderr("value")
                .exit_code(1),
            Case::new("panic")
                .args(["echo", "panic", "value"])
                .panic("value")
                .exit_code(2),
            Case::new("error")
                .args(["echo", "err", "value"])
                .error("value")
                .exit_code(3),
        ])
        .run();
}

#[test]
fn equal_bad_syntax() {
    Harness::new("equal-bad-syntax", Echo::default())
        .cases(
            ["^value", "value$", "^(value$", "golden.ext.ext", "...", "="]
                .into_iter()
                .map(|value| {
                    Case::new(value)
                        .args(["echo", "stdout", value])
                        .stdout(value)
                }),
        )
        .run();
}

#[test]
fn pattern() {
    Harness::new("pattern", Echo::default())
        .cases([
            Case::new("stdout")
                .args(["echo", "stdout", "value"])
                .stdout("^value$"),
            Case::new("stderr")
                .args(["echo", "stderr", "value"])
                .stderr("^.*ue$")
                .exit_code(1),
            Case::new("panic")
                .args(["echo", "panic", "value"])
                .panic("^va.*$")
                .exit_code(2),
            Case::new("error")
                .args(["echo", "err", "value"])
                .error("^.*l.*$")
                .exit_code(3),
            Case::new("multiline")
                .args(["echo", "stdout", "first", "second"])
                .stdout(r"^first\nsecond$"),
        ])
        .run();
}

#[test]
fn ellipsis() {
    Harness::new("ellipsis", Echo::default())
        .cases([
            Case::new("suffix")
                .args(["echo", "stdout", "value"])
                .stdout("...ue"),
            Case::new("substring")
                .args(["echo", "stderr", "value"])
                .stderr("...l...")
                .exit_code(1),
            Case::new("prefix")
                .args(["echo", "panic", "value"])
                .panic("va...")
                .exit_code(2),
            Case::new("whole")
                .args(["echo", "err", "value"])
                .error("...value...")
                .exit_code(3),
        ])
        .run();
}

#[test]
fn escaped() {
    Harness::new("escaped", Echo::default())
        .cases([
            Case::new("stdout")
                .args(["echo", "stdout", "value"])
                .stdout("=value"),
            Case::new("stderr")
                .args(["echo", "stderr", "value"])
                .stderr("=value")
                .exit_code(1),
            Case::new("panic")
                .args(["echo", "panic", "value"])
                .panic("=value")
                .exit_code(2),
            Case::new("error")
                .args(["echo", "err", "value"])
                .error("=value")
                .exit_code(3),
            Case::new("golden")
                .args(["echo", "stdout", "golden"])
                .stdout("=golden"),
            Case::new("equal")
                .args(["echo", "stdout", "=value"])
                .stdout("==value"),
        ])
        .run();
}

#[test]
fn hello() {
    Harness::new("hello", Echo::default())
        .cases([
            Case::new("prefix")
                .args(["echo", "stdout", "Hello World!"])
                .stdout("Hello..."),
            Case::new("suffix")
                .args(["echo", "stdout", "Hello World!"])
                .stdout("...Goodbye")
                .fail("stdout suffix match error:\ngot: Hello World!\nwant: ...Goodbye"),
        ])
        .run();
}
