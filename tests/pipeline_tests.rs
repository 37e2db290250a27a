//! Pipeline integration tests.
//!
//! These tests exercise the full read → parse → rank → output pipeline
//! against a fixture catalog, plus the fatal-error paths (missing file,
//! invalid JSON, non-list document).

use eolrank::pipeline::{run, run_to_target, OutputTarget, RunConfig};
use eolrank::{EndDateFields, EolRankError};
use std::io::Write as _;
use std::path::{Path, PathBuf};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn run_to_string(config: &RunConfig) -> Result<(String, usize), EolRankError> {
    let mut buf = Vec::new();
    let summary = run(config, &mut buf)?;
    Ok((String::from_utf8(buf).unwrap(), summary.total_entries))
}

// ============================================================================
// End-to-end runs
// ============================================================================

mod end_to_end {
    use super::*;

    #[test]
    fn prints_top_entries_in_descending_order() {
        let config = RunConfig::new(fixture_path("catalog.json"), 2);
        let (output, total) = run_to_string(&config).expect("run should succeed");

        assert_eq!(output, "debian 11 1053\nopensuse 15.4 541\n");
        assert_eq!(total, 4);
    }

    #[test]
    fn count_beyond_available_prints_everything() {
        let config = RunConfig::new(fixture_path("catalog.json"), 100);
        let (output, _) = run_to_string(&config).expect("run should succeed");

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "debian 11 1053",
                "opensuse 15.4 541",
                "alpine 3.18 367",
                "ubuntu 22.10 274",
            ]
        );
    }

    #[test]
    fn zero_and_negative_counts_print_nothing() {
        for count in [0, -5] {
            let config = RunConfig::new(fixture_path("catalog.json"), count);
            let (output, total) = run_to_string(&config).expect("run should succeed");
            assert!(output.is_empty());
            // The catalog itself was still parsed in full.
            assert_eq!(total, 4);
        }
    }

    #[test]
    fn strict_eol_policy_drops_support_fallback_entries() {
        let mut config = RunConfig::new(fixture_path("catalog.json"), 100);
        config.end_date_fields = EndDateFields::eol_only();
        let (output, total) = run_to_string(&config).expect("run should succeed");

        assert_eq!(total, 3);
        assert!(!output.contains("alpine"));
    }

    #[test]
    fn runs_are_deterministic() {
        let config = RunConfig::new(fixture_path("catalog.json"), 10);
        let first = run_to_string(&config).expect("run should succeed");
        let second = run_to_string(&config).expect("run should succeed");
        assert_eq!(first, second);
    }
}

// ============================================================================
// File output target
// ============================================================================

mod file_output {
    use super::*;

    #[test]
    fn file_target_writes_selected_lines() {
        let dir = tempfile::tempdir().unwrap();
        let out_path = dir.path().join("result.txt");

        let config = RunConfig::new(fixture_path("catalog.json"), 2);
        let summary = run_to_target(&config, &OutputTarget::File(out_path.clone()))
            .expect("run should succeed");

        assert_eq!(summary.printed, 2);
        assert_eq!(
            std::fs::read_to_string(&out_path).unwrap(),
            "debian 11 1053\nopensuse 15.4 541\n"
        );
    }

    #[test]
    fn fatal_error_never_creates_the_result_file() {
        let dir = tempfile::tempdir().unwrap();
        let out_path = dir.path().join("result.txt");

        let config = RunConfig::new(fixture_path("does-not-exist.json"), 2);
        let err = run_to_target(&config, &OutputTarget::File(out_path.clone()))
            .expect_err("missing catalog must fail");

        assert!(matches!(err, EolRankError::Io { .. }));
        assert!(
            !out_path.exists(),
            "fatal input errors must not leave a result file behind"
        );
    }

    #[test]
    fn file_target_overwrites_a_previous_result() {
        let dir = tempfile::tempdir().unwrap();
        let out_path = dir.path().join("result.txt");
        std::fs::write(&out_path, "stale lines\n").unwrap();

        let config = RunConfig::new(fixture_path("catalog.json"), 1);
        run_to_target(&config, &OutputTarget::File(out_path.clone()))
            .expect("run should succeed");

        assert_eq!(
            std::fs::read_to_string(&out_path).unwrap(),
            "debian 11 1053\n"
        );
    }
}

// ============================================================================
// Fatal-error paths
// ============================================================================

mod fatal_errors {
    use super::*;

    #[test]
    fn missing_file_is_fatal_with_no_output() {
        let config = RunConfig::new(fixture_path("does-not-exist.json"), 10);
        let mut buf = Vec::new();
        let err = run(&config, &mut buf).expect_err("missing file must fail");

        assert!(matches!(err, EolRankError::Io { .. }));
        assert!(buf.is_empty(), "fatal errors must not produce partial output");
    }

    #[test]
    fn invalid_json_is_fatal_with_no_output() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json ]").unwrap();

        let config = RunConfig::new(file.path(), 10);
        let mut buf = Vec::new();
        let err = run(&config, &mut buf).expect_err("garbage must fail");

        assert!(matches!(err, EolRankError::InvalidJson { .. }));
        assert!(buf.is_empty());
    }

    #[test]
    fn non_list_document_is_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"name": "debian", "os": true}"#).unwrap();

        let config = RunConfig::new(file.path(), 10);
        let mut buf = Vec::new();
        let err = run(&config, &mut buf).expect_err("object root must fail");

        assert!(matches!(err, EolRankError::NotACatalog { .. }));
    }

    #[test]
    fn empty_list_document_succeeds_with_no_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[]").unwrap();

        let config = RunConfig::new(file.path(), 10);
        let (output, total) = run_to_string(&config).expect("empty catalog is valid");
        assert!(output.is_empty());
        assert_eq!(total, 0);
    }
}
