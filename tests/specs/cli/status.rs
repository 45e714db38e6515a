//! Status command specs

use crate::prelude::*;

#[test]
fn status_of_missing_checkpoint_is_all_zero() {
    let temp = Project::empty();

    temp.bk()
        .args(&["status", "--checkpoint", "progress.log"])
        .passes()
        .stdout_has("Done:    0")
        .stdout_has("Failed:  0");

    assert!(!temp.exists("progress.log"));
}

#[test]
fn status_counts_recorded_items() {
    let temp = Project::empty();
    temp.script("marked.sh", MARKED_FAILURES);
    temp.inputs(&["a", "b", "c"]);
    temp.file("fail-b", "");
    temp.generate("marked.sh").exits(1);

    temp.bk()
        .args(&["status", "--checkpoint", "progress.log"])
        .passes()
        .stdout_has("Done:    2")
        .stdout_has("Failed:  1")
        .stdout_has("Skipped: 0");
}

#[test]
fn status_json_is_machine_readable() {
    let temp = Project::empty();
    temp.script("copy.sh", COPY);
    temp.inputs(&["a", "b"]);
    temp.generate("copy.sh").passes();

    let out = temp
        .bk()
        .args(&["--format", "json", "status", "--checkpoint", "progress.log"])
        .passes()
        .stdout();

    let report: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(report["done"], 2);
    assert_eq!(report["failed"], 0);
    assert!(report["pending_commit"].is_null());
}
