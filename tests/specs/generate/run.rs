//! Independent mode specs
//!
//! One artifact per input, one done record per artifact.

use crate::prelude::*;

#[test]
fn generate_processes_every_input_in_name_order() {
    let temp = Project::empty();
    temp.script("copy.sh", COPY);
    temp.inputs(&["c", "a", "b"]);

    temp.generate("copy.sh")
        .args(&["-v"])
        .passes()
        .stdout_has("done     a")
        .stdout_has("=== independent run: completed ===")
        .stdout_has("Done:      3");

    similar_asserts::assert_eq!(temp.lines("progress.log"), vec!["a", "b", "c"]);
    assert_eq!(temp.read("out/b"), "b\n");
}

#[test]
fn empty_source_is_a_successful_run() {
    let temp = Project::empty();
    temp.script("copy.sh", COPY);

    temp.generate("copy.sh")
        .passes()
        .stdout_has("Nothing to process")
        .stdout_has("Done:      0");
}

#[test]
fn extension_is_appended_to_artifact_names() {
    let temp = Project::empty();
    temp.script("copy.sh", COPY);
    temp.inputs(&["notes.txt", "notes.md"]);

    temp.generate("copy.sh")
        .args(&["--extension", "json"])
        .passes();

    assert!(temp.exists("out/notes.txt.json"));
    assert!(temp.exists("out/notes.md.json"));
}

#[test]
fn oversized_inputs_are_skipped_and_logged_once() {
    let temp = Project::empty();
    temp.script("copy.sh", COPY);
    temp.input("small");
    temp.file("src/large", &"x".repeat(4096));

    temp.generate("copy.sh")
        .args(&["--max-size-kb", "2"])
        .passes()
        .stdout_has("skipped  large")
        .stdout_has("Skipped:   1");

    assert!(!temp.exists("out/large"));
    temp.generate("copy.sh")
        .args(&["--max-size-kb", "2"])
        .passes()
        .stdout_has("Skipped:   0");
    assert_eq!(temp.lines("progress.log.skipped"), vec!["large"]);
}

#[test]
fn parallel_jobs_process_everything_once() {
    let temp = Project::empty();
    temp.script("counting.sh", COUNTING_CONCAT);
    let names: Vec<String> = (0..10).map(|i| format!("in{}", i)).collect();
    for name in &names {
        temp.input(name);
    }

    temp.generate("counting.sh")
        .args(&["--jobs", "4"])
        .passes()
        .stdout_has("Done:      10");

    assert_eq!(temp.lines("calls.log").len(), 10);
    let mut done = temp.lines("progress.log");
    done.sort();
    assert_eq!(done, names);
}

#[test]
fn json_summary_reports_counts() {
    let temp = Project::empty();
    temp.script("copy.sh", COPY);
    temp.inputs(&["a", "b"]);

    let out = temp
        .generate("copy.sh")
        .args(&["--format", "json"])
        .passes()
        .stdout();

    let summary: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(summary["mode"], "independent");
    assert_eq!(summary["outcome"], "completed");
    assert_eq!(summary["done"], 2);
    assert_eq!(summary["totals"]["done"], 2);
}

#[test]
fn log_file_receives_tracing_output() {
    let temp = Project::empty();
    temp.script("copy.sh", COPY);
    temp.input("a");

    temp.generate("copy.sh")
        .args(&["-vv", "--log-file", "logs/bk.log"])
        .passes();

    assert!(temp.read("logs/bk.log").contains("run finished"));
}
