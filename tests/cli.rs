// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::io::Write;
use tempfile::NamedTempFile;

fn cmd() -> Command {
    Command::cargo_bin("commit-msg-hook").unwrap()
}

fn message_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn accepts_feature_commit_silently() {
    let file = message_file("feat(skills): add angular-signals skill\n");
    cmd()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn accepts_issue_reference() {
    let file = message_file("fix(commands): correct generate path resolution #12\n");
    cmd().arg(file.path()).assert().success();
}

#[test]
fn accepts_merge_message() {
    let file = message_file("Merge remote-tracking branch 'origin/main' into feature-x\n");
    cmd()
        .arg(file.path())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn accepts_message_with_comment_lines() {
    let file = message_file(
        "chore(plugin): bump version to 1.0.0\n\n# Please enter the commit message for your changes.\n",
    );
    cmd().arg(file.path()).assert().success();
}

#[test]
fn rejects_free_text() {
    let file = message_file("updated stuff\n");
    cmd()
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("Your message: \"updated stuff\""))
        .stderr(contains("type(scope): description"))
        .stderr(contains("hotfix"))
        .stderr(contains("docs(readme): update installation instructions"))
        .stderr(contains("Error:").not());
}

#[test]
fn rejects_capitalized_type() {
    let file = message_file("Feat(skills): add thing\n");
    cmd()
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(contains("Feat(skills): add thing"));
}

#[test]
fn rejects_empty_file() {
    let file = message_file("");
    cmd()
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(contains("Your message: \"\""));
}

#[test]
fn rejects_bad_scope() {
    for text in ["feat(SKILLS): add thing", "feat(my_skill): add thing"] {
        let file = message_file(text);
        cmd().arg(file.path()).assert().code(1);
    }
}

#[test]
fn echoes_multiline_message_verbatim() {
    let file = message_file("\n  quick \"fix\"\nsecond line  \n\n");
    cmd()
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(contains("Your message: \"quick \"fix\"\nsecond line\""));
}

#[test]
fn fails_on_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("COMMIT_EDITMSG");
    cmd()
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("Error:"))
        .stderr(contains("COMMIT_EDITMSG"));
}

#[test]
fn ignores_arguments_after_message_file() {
    let file = message_file("feat(skills): add angular-signals skill\n");
    cmd()
        .arg(file.path())
        .args(["extra", "--unknown"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn echoes_bom_prefixed_message_without_bom() {
    let file = message_file("\u{FEFF}updated stuff\n");
    cmd()
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(contains("Your message: \"updated stuff\""));
}

#[test]
fn fails_without_argument() {
    cmd().assert().failure();
}

#[test]
fn debug_logging_goes_to_stderr() {
    let file = message_file("feat(skills): add angular-signals skill\n");
    cmd()
        .env("RUST_LOG", "commit_msg_hook=debug")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(contains("Accepted as conventional feat(skills)"));
}
