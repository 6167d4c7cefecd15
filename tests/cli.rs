mod common;

use assert_cmd::Command;
use predicates::prelude::*;

fn bundle_restrict() -> Command {
    assert_cmd::cargo_bin_cmd!("bundle-restrict")
}

// --- check subcommand ---

#[test]
fn check_clean_chunk_succeeds() {
    let s = common::TestStats::new("green");
    bundle_restrict()
        .args(["check", "--chunk", "test.js", "-m", "http", "--root", common::WORK])
        .arg(&s.path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Restricted module(s) `http' absent from bundle chunk `test.js' (1 module processed).",
        ));
}

#[test]
fn check_offender_fails_with_trace() {
    let s = common::TestStats::new("red2");
    bundle_restrict()
        .args(["check", "--chunk", "test.js", "--module", "lodash", "--root", common::WORK])
        .arg(&s.path)
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "[bundle-restrict] ├──┬─ from: ./test/targets/red2/import1.js",
        ))
        .stdout(predicate::str::contains(
            "[bundle-restrict]    ╰──── from: ./test/targets/red2/import2.js",
        ))
        .stderr(predicate::str::contains(
            "error: Restricted module(s) `lodash' present in main bundle chunk `test.js'.",
        ));
}

#[test]
fn check_lazy_chunk_module_passes() {
    let s = common::TestStats::new("yellow");
    bundle_restrict()
        .args(["check", "--chunk", "test.js", "-m", "lodash"])
        .arg(&s.path)
        .assert()
        .success();
}

#[test]
fn check_reads_config_file() {
    let s = common::TestStats::new("red");
    let config = s.write_config("chunk = \"test.js\"\nmodules = [\"lodash\"]\nmax_depth = 1\n");
    bundle_restrict()
        .args(["check", "--root", common::WORK, "--config"])
        .arg(&config)
        .arg(&s.path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("(maxStackDepth=1, maxStackWidth=3)"));
}

#[test]
fn check_flags_override_config_file() {
    let s = common::TestStats::new("red");
    let config = s.write_config("chunk = \"test.js\"\nmodules = [\"lodash\"]\n");
    bundle_restrict()
        .args(["check", "-m", "http", "--config"])
        .arg(&config)
        .arg(&s.path)
        .assert()
        .success();
}

#[test]
fn check_without_chunk_is_an_error() {
    let s = common::TestStats::new("green");
    bundle_restrict()
        .args(["check", "-m", "lodash"])
        .arg(&s.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required option 'chunk'"))
        .stderr(predicate::str::contains("hint:"));
}

#[test]
fn check_zero_width_is_rejected() {
    let s = common::TestStats::new("green");
    bundle_restrict()
        .args(["check", "--chunk", "test.js", "--max-width", "0"])
        .arg(&s.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("max-width must be at least 1"));
}

#[test]
fn check_missing_stats_file() {
    bundle_restrict()
        .args(["check", "--chunk", "test.js", "/nonexistent/stats.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read stats"));
}

#[test]
fn check_invalid_stats_file() {
    let s = common::TestStats::new("green");
    std::fs::write(&s.path, "{ \"modules\": 3 }").unwrap();
    bundle_restrict()
        .args(["check", "--chunk", "test.js"])
        .arg(&s.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid stats"));
}

#[test]
fn check_debug_log_level() {
    let s = common::TestStats::new("red");
    bundle_restrict()
        .args(["check", "--chunk", "test.js", "-m", "lodash", "--log", "debug"])
        .arg(&s.path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Debug: Processing chunks: test"));
}

// --- explain subcommand ---

#[test]
fn explain_by_request() {
    let s = common::TestStats::new("red2");
    bundle_restrict()
        .args(["explain", "--root", common::WORK])
        .arg(&s.path)
        .arg("lodash")
        .assert()
        .success()
        .stdout(predicate::str::contains("┬─ Module `lodash' included because of"))
        .stdout(predicate::str::contains("│  ╰──── from: ./test/targets/red2/index.js"));
}

#[test]
fn explain_unknown_module() {
    let s = common::TestStats::new("green");
    bundle_restrict()
        .arg("explain")
        .arg(&s.path)
        .arg("react")
        .assert()
        .failure()
        .stderr(predicate::str::contains("module 'react' not found in stats"));
}

// --- general ---

#[test]
fn help_lists_subcommands() {
    bundle_restrict()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("explain"));
}
