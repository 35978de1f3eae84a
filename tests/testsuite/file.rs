use goldcmd::Case;
use goldcmd::Harness;
use goldcmd::TempFiles;

use crate::echo::Echo;

#[test]
fn file() {
    let tmp = TempFiles::new().unwrap();
    let found = tmp.path("found");
    let missing = tmp.path("missing");
    let text = tmp.path("text.txt");
    std::fs::write(&found, "").unwrap();

    let case = |name: &str, path: &std::path::Path| {
        Case::new(name)
            .args(["echo".to_owned(), "file".to_owned(), path.display().to_string()])
            .file(path)
    };
    Harness::new("file", Echo::default())
        .cases([
            case("found", &found),
            case("missing", &missing),
            case("text", &text),
        ])
        .run();

    assert_eq!(std::fs::read_to_string(&found).unwrap(), "found");
}

#[test]
fn stale_file_is_removed() {
    let tmp = TempFiles::new().unwrap();
    let missing = tmp.path("missing");
    std::fs::write(&missing, "stale").unwrap();

    // The command writes nothing, so only the removal can explain the read error
    let mut sink = goldcmd::Capture::new();
    Harness::new("file", Echo::default())
        .case(
            Case::new("stale")
                .args(["echo", "stdout"])
                .file(&missing)
                .fail("file read error:\n..."),
        )
        .run_with(&mut sink);
    assert!(sink.is_empty(), "{:?}", sink.failures());
    assert!(!missing.exists());
}
