// Unit tests for domain models

use std::path::{Path, PathBuf};

use super::*;

#[test]
fn test_timecode_display_pads_fields() {
    assert_eq!(Timecode::from_seconds(0).to_string(), "00:00:00");
    assert_eq!(Timecode::from_seconds(10).to_string(), "00:00:10");
    assert_eq!(Timecode::from_seconds(90).to_string(), "00:01:30");
    assert_eq!(Timecode::from_seconds(3723).to_string(), "01:02:03");
}

#[test]
fn test_timecode_hours_do_not_wrap() {
    assert_eq!(Timecode::from_seconds(100 * 3600 + 59).to_string(), "100:00:59");
}

#[test]
fn test_trim_config_rejects_empty_postfix() {
    let err = TrimConfig::new(10, 20, "", 1).unwrap_err();
    assert!(matches!(err, FfTrimError::InvalidConfig { .. }));
}

#[test]
fn test_trim_config_rejects_zero_depth() {
    let err = TrimConfig::new(10, 20, DEFAULT_POSTFIX, 0).unwrap_err();
    assert!(matches!(err, FfTrimError::InvalidConfig { .. }));
}

#[test]
fn test_trim_config_defaults() {
    let config = TrimConfig::new(10, 20, DEFAULT_POSTFIX, DEFAULT_MAX_DEPTH).unwrap();
    assert_eq!(config.postfix(), "_trimmed");
    assert_eq!(config.max_depth(), 1);
    assert_eq!(config.whitelist().extensions(), &[".ts", ".mpg"]);
    assert!(!config.dry_run);
    assert!(!config.delete_original);
    assert_eq!(config.start_timecode().to_string(), "00:00:10");
}

#[test]
fn test_whitelist_exact_match() {
    let whitelist = Whitelist::default();
    assert!(whitelist.allows(Path::new("a.ts")));
    assert!(whitelist.allows(Path::new("dir/b.mpg")));
    assert!(!whitelist.allows(Path::new("a.mp4")));
    assert!(!whitelist.allows(Path::new("a")));
}

#[test]
fn test_whitelist_is_case_sensitive() {
    let whitelist = Whitelist::default();
    assert!(!whitelist.allows(Path::new("A.TS")));
}

#[test]
fn test_whitelist_uses_final_extension_only() {
    let whitelist = Whitelist::new([".tar.gz"]);
    assert!(!whitelist.allows(Path::new("archive.tar.gz")));

    let whitelist = Whitelist::new([".gz"]);
    assert!(whitelist.allows(Path::new("archive.tar.gz")));
}

#[test]
fn test_run_report_success() {
    let mut report = RunReport::default();
    assert!(report.success());

    report.files.push(FileReport {
        input: PathBuf::from("a.ts"),
        start: Timecode::from_seconds(0),
        outcome: TrimOutcome::DryRun {
            duration: Timecode::from_seconds(5),
        },
    });
    assert!(report.success());

    report.files.push(FileReport {
        input: PathBuf::from("b.ts"),
        start: Timecode::from_seconds(0),
        outcome: TrimOutcome::Failed { status: 1 },
    });
    assert!(!report.success());
    assert_eq!(report.failed_count(), 1);
}

#[test]
fn test_run_report_aborted_is_failure() {
    let report = RunReport {
        files: vec![],
        aborted: Some(AbortReason {
            input: PathBuf::from("a.ts"),
            duration_seconds: 30,
            requested_seconds: 35,
        }),
    };
    assert!(!report.success());
    assert_eq!(
        report.aborted.unwrap().to_string(),
        "cannot trim 35s from a.ts which is only 30s long"
    );
}
