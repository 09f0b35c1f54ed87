//! Integration tests for the kompass CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn kompass() -> Command {
    Command::cargo_bin("kompass").unwrap()
}

// ---------------------------------------------------------------------------
// score
// ---------------------------------------------------------------------------

#[test]
fn score_majority_a_run() {
    kompass()
        .args(["score", "AAAAAABAABAA"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("ESTJ")
                .and(predicate::str::contains("Adaptive"))
                .and(predicate::str::contains("result_ESTJ")),
        );
}

#[test]
fn score_all_b_run() {
    kompass()
        .args(["score", "BBBBBBBBBBBB"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("INFP")
                .and(predicate::str::contains("Adaptive"))
                .and(predicate::str::contains("result_INFP")),
        );
}

#[test]
fn score_split_code_carries_stability_in_page_name() {
    kompass()
        .args(["score", "BBBABBBABABA"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("INFJ")
                .and(predicate::str::contains("Robust"))
                .and(predicate::str::contains("result_INFJ_Robust")),
        );
}

#[test]
fn score_accepts_lowercase() {
    kompass()
        .args(["score", "aaaaaabaabaa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ESTJ"));
}

#[test]
fn score_rejects_unknown_letters() {
    kompass()
        .args(["score", "AAAAAABAABAX"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not an answer"));
}

#[test]
fn score_rejects_short_sequence_without_partial() {
    kompass()
        .args(["score", "ABAB"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 12 answers"));
}

#[test]
fn score_partial_resolves_open_dimensions_by_tie() {
    kompass()
        .args(["score", "A", "--partial"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ENTJ").and(predicate::str::contains("result_ENTJ")));
}

#[test]
fn score_rejects_too_many_answers() {
    kompass()
        .args(["score", "ABABABABABABA"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 12"));
}

// ---------------------------------------------------------------------------
// pages
// ---------------------------------------------------------------------------

#[test]
fn pages_lists_the_full_result_surface() {
    kompass()
        .arg("pages")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("20 result pages")
                .and(predicate::str::contains("result_ESTJ"))
                .and(predicate::str::contains("result_INFJ_Adaptive"))
                .and(predicate::str::contains("result_INFJ_Robust"))
                .and(predicate::str::contains("result_ESFJ_Adaptive")),
        );
}

#[test]
fn pages_does_not_split_plain_codes() {
    kompass()
        .arg("pages")
        .assert()
        .success()
        .stdout(predicate::str::contains("result_INFP_").not());
}

// ---------------------------------------------------------------------------
// take
// ---------------------------------------------------------------------------

#[test]
fn take_full_run_over_stdin() {
    kompass()
        .arg("take")
        .write_stdin("A\nA\nA\nA\nA\nA\nB\nA\nA\nB\nA\nA\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Q1.")
                .and(predicate::str::contains("ESTJ"))
                .and(predicate::str::contains("result_ESTJ")),
        );
}

#[test]
fn take_quits_on_request() {
    kompass()
        .arg("take")
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Left the quiz."));
}

#[test]
fn take_reprompts_on_garbage() {
    kompass()
        .arg("take")
        .write_stdin("x\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Answer A or B"));
}
