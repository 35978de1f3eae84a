use goldcmd::Capture;
use goldcmd::Case;
use goldcmd::Harness;

use crate::echo::Echo;

fn run(cases: impl IntoIterator<Item = Case>) -> (goldcmd::Summary, Capture) {
    let mut sink = Capture::new();
    let summary = Harness::new("inner", Echo::default())
        .cases(cases)
        .run_with(&mut sink);
    (summary, sink)
}

#[test]
fn pass() {
    let (summary, sink) = run([Case::new("pass")
        .args(["echo", "stdout", "value"])
        .stdout("value")]);
    assert_eq!(summary.passed, 1);
    assert_eq!(sink.passed(), ["inner/pass"]);
    assert!(sink.is_empty());
}

#[test]
fn fail() {
    let (summary, sink) = run([Case::new("fail").args(["echo", "stdout", "value"])]);
    assert_eq!(summary.failed, 1);
    assert_eq!(
        sink.failures(),
        [(
            "inner/fail".to_owned(),
            vec!["stdout match error:\nwant an empty string, got: value".to_owned()]
        )]
    );
}

#[test]
fn expected_failure_without_failure() {
    let (summary, sink) = run([Case::new("pass")
        .args(["echo", "stdout", "value"])
        .stdout("value")
        .fail("...")]);
    assert_eq!(summary.failed, 1);
    assert_eq!(
        sink.messages("inner/pass").unwrap(),
        ["fail match error: expected: ..."]
    );
}

#[test]
fn expected_failure_with_two_failures() {
    let (summary, sink) = run([Case::new("twice")
        .args(["echo", "stderr", "value"])
        .fail("stderr...")]);
    assert_eq!(summary.failed, 1);
    assert_eq!(
        sink.messages("inner/twice").unwrap(),
        [
            "stderr match error:\nwant an empty string, got: value",
            "exit code match error:\ngot: 1, want: 0",
            "fail prefix match error: expected: stderr...",
        ]
    );
}

#[test]
fn expected_failure_mismatch() {
    let (summary, sink) = run([Case::new("other")
        .args(["echo", "stdout", "value"])
        .fail("=stderr match error:\nwant an empty string, got: value")]);
    assert_eq!(summary.failed, 1);
    assert_eq!(
        sink.messages("inner/other").unwrap(),
        [
            "stdout match error:\nwant an empty string, got: value",
            "fail escaped match error: expected: =stderr match error:\nwant an empty string, got: value",
        ]
    );
}

#[test]
fn unique_names() {
    let case = || Case::new("").args(["echo", "stdout", "value"]).stdout("value");
    let (summary, sink) = run([
        case(),
        case(),
        Case::new("named").args(["echo", "exit"]).exit_code(4),
        Case::new("named").args(["echo", "exit"]).exit_code(4),
    ]);
    assert_eq!(summary.passed, 4);
    assert_eq!(
        sink.passed(),
        ["inner/#00", "inner/#01", "inner/named", "inner/named#01"]
    );
}

#[test]
#[should_panic(expected = "1 of 2 cases failed")]
fn run_panics_on_failure() {
    Harness::new("inner", Echo::default())
        .palette(goldcmd::Palette::never())
        .cases([
            Case::new("pass")
                .args(["echo", "stdout", "value"])
                .stdout("value"),
            Case::new("fail")
                .args(["echo", "stdout", "value"])
                .stdout("other"),
        ])
        .run();
}

#[test]
fn run_without_cases() {
    Harness::new("inner", Echo::default()).run();
}
