//! `start`, `stop`, `restart` end to end, with and without a profile.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::support::Fixture;

#[test]
fn test_start_loads_every_match() {
    let fx = Fixture::with_descriptors(&["foo", "foobar", "web"]);
    fx.lunchy()
        .args(["start", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("load foo"))
        .stdout(predicate::str::contains("load foobar"))
        .stdout(predicate::str::contains("web").not());
}

#[test]
fn test_start_with_unmatched_fragment_is_a_silent_no_op() {
    let fx = Fixture::with_descriptors(&["web"]);
    fx.lunchy()
        .args(["start", "db"])
        .assert()
        .success()
        .stdout("")
        .stderr("");
}

#[test]
fn test_failed_control_call_does_not_fail_the_batch() {
    let fx = Fixture::with_descriptors(&["db", "web"]);
    fx.lunchy_with_control("false")
        .args(["stop", "b"])
        .assert()
        .success()
        .stderr(predicate::str::contains("failed to unload db"))
        .stderr(predicate::str::contains("failed to unload web"));
}

#[test]
fn test_restart_reports_only_start_failure() {
    let fx = Fixture::with_descriptors(&["web"]);
    fx.lunchy_with_control("false")
        .args(["restart", "web"])
        .assert()
        .success()
        .stderr(predicate::str::contains("failed to load web"))
        .stderr(predicate::str::contains("unload").not());
}

#[test]
fn test_quiet_suppresses_confirmations() {
    let fx = Fixture::with_descriptors(&["web"]);
    fx.lunchy()
        .args(["-q", "start", "web"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_start_without_name_or_profile_exits_one() {
    let fx = Fixture::with_descriptors(&["web"]);
    fx.lunchy()
        .arg("start")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("name required"));
}

#[test]
fn test_start_without_name_uses_profile() {
    let fx = Fixture::with_descriptors(&["db", "mail", "web"]);
    fx.write_profile("# local stack\nweb\n\n  db  \n");

    fx.lunchy()
        .arg("start")
        .assert()
        .success()
        .stdout(predicate::str::contains("Using daemons in profile:"))
        .stdout(predicate::str::contains("load web"))
        .stdout(predicate::str::contains("load db"))
        .stdout(predicate::str::contains("mail").not());
}

#[test]
fn test_explicit_name_bypasses_profile() {
    let fx = Fixture::with_descriptors(&["db", "web"]);
    fx.write_profile("db\n");

    fx.lunchy()
        .args(["stop", "web"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unload web"))
        .stdout(predicate::str::contains("profile").not());
}

#[test]
fn test_empty_profile_is_a_no_op() {
    let fx = Fixture::with_descriptors(&["web"]);
    fx.write_profile("# nothing yet\n");

    fx.lunchy()
        .arg("restart")
        .assert()
        .success()
        .stdout(predicate::str::contains("load").not());
}
