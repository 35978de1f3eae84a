use goldcmd::Capture;
use goldcmd::Case;
use goldcmd::Harness;

use crate::echo::Echo;

#[test]
fn cli_tests() {
    Harness::new("table", Echo::default())
        .tables("tests/cmd/*.toml")
        .run();
}

#[test]
fn mixed_with_cases() {
    let mut sink = Capture::new();
    let summary = Harness::new("table", Echo::default())
        .case(
            Case::new("stdout")
                .args(["echo", "stdout", "value"])
                .stdout("value"),
        )
        .table("tests/cmd/panic.toml")
        .run_with(&mut sink);
    assert_eq!(summary.passed, 3);
    assert_eq!(
        sink.passed(),
        ["table/stdout", "table/#00", "table/#01"]
    );
}

#[test]
fn missing_table() {
    let mut sink = Capture::new();
    let summary = Harness::new("table", Echo::default())
        .table("tests/cmd/missing.toml")
        .run_with(&mut sink);
    assert_eq!(summary.failed, 1);

    let (name, messages) = &sink.failures()[0];
    assert_eq!(name, "table/tests/cmd/missing.toml");
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("Failed to read "), "{}", messages[0]);
}

#[test]
fn invalid_table() {
    let tmp = goldcmd::TempFiles::new().unwrap();
    let path = tmp.path("invalid.toml");
    std::fs::write(&path, "[[case]]\nstatus = 'pass'").unwrap();

    let mut sink = Capture::new();
    let summary = Harness::new("table", Echo::default())
        .table(&path)
        .run_with(&mut sink);
    assert_eq!(summary.failed, 1);
    assert!(
        sink.failures()[0].1[0].starts_with("Failed to parse "),
        "{:?}",
        sink.failures()
    );
}

#[test]
fn no_match() {
    let mut sink = Capture::new();
    let summary = Harness::new("table", Echo::default())
        .tables("tests/cmd/*.missing")
        .run_with(&mut sink);
    assert_eq!(summary.total(), 0);
}
