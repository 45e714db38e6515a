//! Independent mode failure specs

use crate::prelude::*;

#[test]
fn failed_item_is_recorded_and_others_continue() {
    let temp = Project::empty();
    temp.script("marked.sh", MARKED_FAILURES);
    temp.inputs(&["a", "b", "c"]);
    temp.file("fail-b", "");

    temp.generate("marked.sh")
        .exits(1)
        .stdout_has("FAILED   b")
        .stdout_has("refusing b")
        .stdout_has("completed with failures");

    assert_eq!(temp.lines("progress.log"), vec!["a", "c"]);
    assert_eq!(temp.lines("progress.log.failed"), vec!["b"]);
    // Partial output is never left behind
    assert!(!temp.exists("out/b"));
}

#[test]
fn zero_exit_without_artifact_is_a_failure() {
    let temp = Project::empty();
    temp.script("nothing.sh", NO_OUTPUT);
    temp.input("a");

    temp.generate("nothing.sh").exits(1);

    assert!(temp.lines("progress.log").is_empty());
    assert_eq!(temp.lines("progress.log.failed"), vec!["a"]);
}

#[test]
fn missing_processor_fails_items() {
    let temp = Project::empty();
    temp.input("a");

    temp.generate("does-not-exist.sh")
        .exits(1)
        .stdout_has("failed to start processor");

    assert_eq!(temp.lines("progress.log.failed"), vec!["a"]);
}

#[test]
fn timed_out_invocation_is_a_failure() {
    let temp = Project::empty();
    temp.script("hangs.sh", HANGS);
    temp.input("a");

    temp.generate("hangs.sh")
        .args(&["--timeout", "300ms"])
        .exits(1)
        .stdout_has("timed out");

    assert_eq!(temp.lines("progress.log.failed"), vec!["a"]);
}
