//! Configuration error specs
//!
//! Invalid configuration exits 2 and leaves no checkpoint files behind.

use crate::prelude::*;

#[test]
fn missing_source_is_a_config_error() {
    let temp = Project::empty();
    temp.script("copy.sh", COPY);

    temp.bk()
        .args(&[
            "generate",
            "--source",
            "nope",
            "--output-dir",
            "out",
            "--checkpoint",
            "progress.log",
            "--processor",
            "./copy.sh",
        ])
        .exits(2)
        .stderr_has("invalid configuration")
        .stderr_has("nope");

    assert!(!temp.exists("progress.log"));
    assert!(!temp.exists("progress.log.lock"));
}

#[test]
fn output_dir_equal_to_source_is_rejected() {
    let temp = Project::empty();
    temp.script("copy.sh", COPY);
    temp.input("a");

    temp.bk()
        .args(&[
            "generate",
            "--source",
            "src",
            "--output-dir",
            "./src",
            "--checkpoint",
            "progress.log",
            "--processor",
            "./copy.sh",
        ])
        .exits(2)
        .stderr_has("must differ");
}

#[test]
fn accumulator_inside_source_is_rejected() {
    let temp = Project::empty();
    temp.script("concat.sh", CONCAT);

    temp.bk()
        .args(&[
            "merge",
            "--source",
            "src",
            "--accumulator",
            "src/merged.txt",
            "--checkpoint",
            "progress.log",
            "--batch-size",
            "2",
            "--processor",
            "./concat.sh",
        ])
        .exits(2)
        .stderr_has("inside the source directory");
}

#[test]
fn checkpoint_inside_source_is_rejected() {
    let temp = Project::empty();
    temp.script("copy.sh", COPY);
    temp.input("a");

    temp.bk()
        .args(&[
            "generate",
            "--source",
            "src",
            "--output-dir",
            "out",
            "--checkpoint",
            "src/progress.log",
            "--processor",
            "./copy.sh",
        ])
        .exits(2)
        .stderr_has("checkpoint must not live inside the source directory");

    assert!(!temp.exists("src/progress.log"));
    assert!(!temp.exists("src/progress.log.lock"));
    assert!(!temp.exists("out/a"));
}

#[test]
fn checkpoint_directory_must_exist() {
    let temp = Project::empty();
    temp.script("copy.sh", COPY);

    temp.bk()
        .args(&[
            "generate",
            "--source",
            "src",
            "--output-dir",
            "out",
            "--checkpoint",
            "state/progress.log",
            "--processor",
            "./copy.sh",
        ])
        .exits(2)
        .stderr_has("checkpoint directory not found");
}

#[test]
fn zero_batch_size_is_a_usage_error() {
    let temp = Project::empty();
    temp.script("concat.sh", CONCAT);

    temp.merge("concat.sh", 0).exits(2);
    assert!(!temp.exists("progress.log"));
}

#[test]
fn bad_timeout_is_a_usage_error() {
    let temp = Project::empty();
    temp.script("copy.sh", COPY);

    temp.generate("copy.sh")
        .args(&["--timeout", "soon"])
        .exits(2)
        .stderr_has("soon");
}
