//! Accumulator mode specs
//!
//! Batches are folded into one artifact in name order; every batch after the
//! first sees everything merged so far.

use crate::prelude::*;

#[test]
fn merge_folds_batches_in_order() {
    let temp = Project::empty();
    temp.script("concat.sh", CONCAT);
    temp.inputs(&["c", "a", "b"]);

    temp.merge("concat.sh", 2)
        .passes()
        .stdout_has("[1/2] merging 2 items")
        .stdout_has("[2/2] merging 1 items")
        .stdout_has("=== accumulator run: completed ===");

    similar_asserts::assert_eq!(temp.lines("merged.txt"), vec!["a", "b", "c"]);
    assert_eq!(temp.lines("progress.log"), vec!["a", "b", "c"]);
    assert!(!temp.exists("merged.txt.tmp"));
}

#[test]
fn twenty_five_inputs_in_batches_of_ten() {
    let temp = Project::empty();
    temp.script("counting.sh", COUNTING_CONCAT);
    let names: Vec<String> = (0..25).map(|i| format!("f{:02}", i)).collect();
    for name in &names {
        temp.input(name);
    }

    temp.merge("counting.sh", 10).passes();

    // Argument counts: 10 items + output, then accumulator + items + output
    assert_eq!(temp.lines("calls.log"), vec!["11", "12", "7"]);
    assert_eq!(temp.lines("progress.log"), names);
    assert_eq!(temp.lines("merged.txt"), names);
}

#[test]
fn merge_ignores_size_limit() {
    let temp = Project::empty();
    temp.script("concat.sh", CONCAT);
    temp.file("src/big", &format!("{}\n", "x".repeat(300 * 1024)));

    temp.merge("concat.sh", 5).passes();

    assert_eq!(temp.lines("progress.log"), vec!["big"]);
    assert!(temp.lines("progress.log.skipped").is_empty());
}

#[test]
fn rerun_merges_only_new_inputs_into_existing_accumulator() {
    let temp = Project::empty();
    temp.script("counting.sh", COUNTING_CONCAT);
    temp.inputs(&["a", "b"]);
    temp.merge("counting.sh", 5).passes();

    temp.input("c");
    temp.merge("counting.sh", 5).passes();
    temp.merge("counting.sh", 5)
        .passes()
        .stdout_has("Nothing to process");

    assert_eq!(temp.lines("calls.log").len(), 2);
    assert_eq!(temp.lines("merged.txt"), vec!["a", "b", "c"]);
}

#[test]
fn stale_temp_file_is_cleaned_up() {
    let temp = Project::empty();
    temp.script("concat.sh", CONCAT);
    temp.file("merged.txt.tmp", "half a merge");

    temp.merge("concat.sh", 2).passes();

    assert!(!temp.exists("merged.txt.tmp"));
}
