//! Harness CLI end-to-end tests
//!
//! Drives the `mite-demo` binary through the exit-status contract:
//! 0 = all selected tests passed, 1 = test failure or nothing to run,
//! 2 = usage or configuration error.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn demo_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mite-demo").unwrap();
    cmd.env_remove("MITE_FORMAT")
        .env_remove("MITE_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn count_lines(output: &[u8], prefix: &str) -> usize {
    String::from_utf8_lossy(output)
        .lines()
        .filter(|line| line.starts_with(prefix))
        .count()
}

// ══════════════════════════════════════════════════════════════════════════════
// PASSING RUNS
// ══════════════════════════════════════════════════════════════════════════════

mod passing {
    use super::*;

    #[test]
    fn test_filtered_run_passes() {
        let output = demo_cmd()
            .args(["--filter", "^(arith|text)_"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Running 8 test cases:"))
            .stdout(predicate::str::contains("6 run; 0 failed"))
            .get_output()
            .clone();

        assert_eq!(count_lines(&output.stdout, "passed: "), 6);
        assert!(!String::from_utf8_lossy(&output.stdout).contains("broken_"));
    }

    #[test]
    fn test_report_line_names_source_file() {
        demo_cmd()
            .args(["-f", "arith_gcd"])
            .assert()
            .success()
            .stdout(predicate::str::is_match(r"passed: arith_gcd \[.*arith\.rs:\d+\] in \d+\.\d+s").unwrap());
    }

    #[test]
    fn test_list_selected_tests() {
        demo_cmd()
            .args(["--list", "-f", "^text_"])
            .assert()
            .success()
            .stdout(predicate::str::contains("text_concat: "))
            .stdout(predicate::str::contains("3 tests"))
            .stdout(predicate::str::contains("arith_").not());
    }

    #[test]
    fn test_json_format() {
        demo_cmd()
            .args(["--format", "json", "-f", "text_upper"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""event":"started""#))
            .stdout(predicate::str::contains(r#""name":"text_upper""#))
            .stdout(predicate::str::contains(r#""event":"summary""#));
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// FAILING RUNS
// ══════════════════════════════════════════════════════════════════════════════

mod failing {
    use super::*;

    #[test]
    fn test_stop_at_first_failure() {
        demo_cmd()
            .args(["-f", "broken_check"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("test result:").not())
            .stderr(predicate::str::contains("FAILED: broken_check"))
            .stderr(predicate::str::contains("sum was 6"));
    }

    #[test]
    fn test_accumulate_counts_failures() {
        let output = demo_cmd()
            .args(["--all", "-f", "broken_|text_"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("5 run; 2 failed"))
            .get_output()
            .clone();

        assert_eq!(count_lines(&output.stdout, "passed: "), 3);
        assert_eq!(count_lines(&output.stdout, "FAILED: "), 2);
    }

    #[test]
    fn test_panic_is_reported_as_failure() {
        demo_cmd()
            .args(["-a", "-f", "broken_panic"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("panicked: no first byte"))
            .stdout(predicate::str::contains("1 run; 1 failed"));
    }

    #[test]
    fn test_default_run_hits_broken_tests() {
        demo_cmd().assert().code(1);
    }

    #[test]
    fn test_filter_matching_nothing() {
        demo_cmd()
            .args(["-f", "^nothing_here$"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("passed:").not())
            .stderr(predicate::str::contains("No test matches filter"));
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// USAGE ERRORS
// ══════════════════════════════════════════════════════════════════════════════

mod usage {
    use super::*;

    #[test]
    fn test_invalid_pattern() {
        demo_cmd()
            .args(["--filter", "arith_("])
            .assert()
            .code(2)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Invalid filter pattern 'arith_('"))
            .stderr(predicate::str::contains("unclosed group"));
    }

    #[test]
    fn test_duplicate_filter() {
        demo_cmd()
            .args(["-f", "arith", "-f", "text"])
            .assert()
            .code(2)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("refusing second filter"));
    }

    #[test]
    fn test_missing_pattern() {
        demo_cmd()
            .arg("--filter")
            .assert()
            .code(2)
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn test_unknown_flag() {
        demo_cmd()
            .arg("--frobnicate")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("--frobnicate"));
    }

    #[test]
    fn test_help_goes_to_stderr() {
        demo_cmd()
            .arg("-h")
            .assert()
            .code(2)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("--filter <PATTERN>"));
    }
}
