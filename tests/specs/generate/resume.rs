//! Independent mode resume specs
//!
//! A rerun never repeats recorded work; `--retry-fails` revisits failures.

use crate::prelude::*;

#[test]
fn rerun_after_success_invokes_nothing() {
    let temp = Project::empty();
    temp.script("counting.sh", COUNTING_CONCAT);
    temp.inputs(&["a", "b"]);

    temp.generate("counting.sh").passes();
    temp.generate("counting.sh")
        .passes()
        .stdout_has("Nothing to process");

    assert_eq!(temp.lines("calls.log").len(), 2);
    assert_eq!(temp.lines("progress.log"), vec!["a", "b"]);
}

#[test]
fn new_inputs_are_picked_up_on_rerun() {
    let temp = Project::empty();
    temp.script("counting.sh", COUNTING_CONCAT);
    temp.inputs(&["a", "b"]);
    temp.generate("counting.sh").passes();

    temp.input("c");
    temp.generate("counting.sh").passes().stdout_has("done     c");

    assert_eq!(temp.lines("calls.log").len(), 3);
    assert_eq!(temp.lines("progress.log"), vec!["a", "b", "c"]);
}

#[test]
fn failures_are_not_retried_by_default() {
    let temp = Project::empty();
    temp.script("marked.sh", MARKED_FAILURES);
    temp.inputs(&["a", "b"]);
    temp.file("fail-b", "");
    temp.generate("marked.sh").exits(1);

    temp.remove("fail-b");
    temp.generate("marked.sh")
        .passes()
        .stdout_has("Nothing to process");

    assert!(!temp.exists("out/b"));
}

#[test]
fn retry_fails_reprocesses_failed_items() {
    let temp = Project::empty();
    temp.script("marked.sh", MARKED_FAILURES);
    temp.inputs(&["a", "b"]);
    temp.file("fail-b", "");
    temp.generate("marked.sh").exits(1);

    temp.remove("fail-b");
    temp.generate("marked.sh")
        .args(&["--retry-fails"])
        .passes()
        .stdout_has("done     b")
        .stdout_lacks("done     a");

    assert_eq!(temp.lines("progress.log"), vec!["a", "b"]);
    assert!(temp.lines("progress.log.failed").is_empty());
    assert_eq!(temp.read("out/b"), "b\n");
}
