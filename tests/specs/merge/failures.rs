//! Accumulator mode failure specs
//!
//! A failed batch halts the run and leaves the accumulator untouched.

use crate::prelude::*;

fn halted_project() -> Project {
    let temp = Project::empty();
    temp.script("marked.sh", MARKED_FAILURES);
    temp.inputs(&["a", "b", "c", "d", "e", "f"]);
    temp.file("fail-c", "");
    temp
}

#[test]
fn failed_batch_halts_the_run() {
    let temp = halted_project();

    temp.merge("marked.sh", 2)
        .exits(1)
        .stdout_has("[2] FAILED")
        .stdout_has("Halted, 1 batches not attempted")
        .stdout_lacks("[3/3]");

    assert_eq!(temp.lines("progress.log"), vec!["a", "b"]);
    assert_eq!(temp.lines("progress.log.failed"), vec!["c", "d"]);
}

#[test]
fn failed_batch_leaves_accumulator_byte_for_byte() {
    let temp = halted_project();

    temp.merge("marked.sh", 2).exits(1);

    assert_eq!(temp.read("merged.txt"), "a\nb\n");
    assert!(!temp.exists("merged.txt.tmp"));
}

#[test]
fn rerun_after_halt_continues_with_later_batches() {
    let temp = halted_project();
    temp.merge("marked.sh", 2).exits(1);

    temp.remove("fail-c");
    temp.merge("marked.sh", 2).passes();

    assert_eq!(temp.lines("merged.txt"), vec!["a", "b", "e", "f"]);
    assert_eq!(temp.lines("progress.log.failed"), vec!["c", "d"]);
}

#[test]
fn retry_fails_folds_the_failed_batch_back_in() {
    let temp = halted_project();
    temp.merge("marked.sh", 2).exits(1);

    temp.remove("fail-c");
    temp.merge("marked.sh", 2)
        .args(&["--retry-fails"])
        .passes();

    assert_eq!(
        temp.lines("merged.txt"),
        vec!["a", "b", "c", "d", "e", "f"]
    );
    assert!(temp.lines("progress.log.failed").is_empty());
}

#[test]
fn processor_without_output_fails_the_batch() {
    let temp = Project::empty();
    temp.script("nothing.sh", NO_OUTPUT);
    temp.inputs(&["a", "b"]);

    temp.merge("nothing.sh", 5).exits(1);

    assert!(!temp.exists("merged.txt"));
    assert_eq!(temp.lines("progress.log.failed"), vec!["a", "b"]);
}
