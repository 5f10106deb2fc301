use assert_fs::prelude::*;
use assert_fs::TempDir;
use test_case::test_case;
use test_log::test;

use super::{bump, init, render_with_prefix, show, BumpError, Config};
use crate::store::{StoreError, WriteMode};
use crate::version::{IncrementKind, ParseError, Version};

fn setup(content: Option<&str>) -> (TempDir, Config) {
    let t = TempDir::new().unwrap();
    let file = t.child("VERSION");
    if let Some(content) = content {
        file.write_str(content).unwrap();
    }
    let config = Config::default().with_version_file(file.path());
    (t, config)
}

#[test]
fn default_config() {
    let config = Config::default();
    assert_eq!(config.version_file.to_str(), Some("VERSION"));
    assert_eq!(config.initial_version, Version::new(0, 1, 0));
}

#[test]
fn bump_from_file() {
    let (t, config) = setup(Some("0.1.0\n"));

    let version = bump(&config, IncrementKind::Minor, None, WriteMode::Persist).unwrap();

    assert_eq!(version.to_string(), "0.2.0");
    t.child("VERSION").assert("0.2.0\n");
}

#[test]
fn bump_explicit_dry_run() {
    let (t, config) = setup(Some("0.1.0\n"));

    let version = bump(&config, IncrementKind::Minor, Some("0.1.0"), WriteMode::DryRun).unwrap();

    assert_eq!(version.to_string(), "0.2.0");
    t.child("VERSION").assert("0.1.0\n");
}

#[test]
fn bump_explicit_never_reads_store() {
    // The file is missing and would fail to read.
    let (t, config) = setup(None);

    let version = bump(&config, IncrementKind::Major, Some("1.2.3"), WriteMode::Persist).unwrap();

    assert_eq!(version, Version::new(2, 0, 0));
    t.child("VERSION").assert("2.0.0\n");
}

#[test_case(IncrementKind::Patch, "1.2.4\n")]
#[test_case(IncrementKind::Minor, "1.3.0\n")]
#[test_case(IncrementKind::Major, "2.0.0\n")]
fn bump_each_kind(kind: IncrementKind, expected: &str) {
    let (t, config) = setup(Some("1.2.3\n"));
    bump(&config, kind, None, WriteMode::Persist).unwrap();
    t.child("VERSION").assert(expected);
}

#[test]
fn sequence_of_bumps() {
    let (t, config) = setup(None);
    let file = t.child("VERSION");

    init(&config, None).unwrap();
    file.assert("0.1.0\n");
    for (kind, expected) in [
        (IncrementKind::Patch, "0.1.1\n"),
        (IncrementKind::Minor, "0.2.0\n"),
        (IncrementKind::Major, "1.0.0\n"),
    ] {
        bump(&config, kind, None, WriteMode::Persist).unwrap();
        file.assert(expected);
    }
}

#[test]
fn bump_invalid_explicit_writes_nothing() {
    let (t, config) = setup(Some("0.1.0\n"));

    let err = bump(&config, IncrementKind::Patch, Some("1.2.x"), WriteMode::Persist).unwrap_err();

    assert!(matches!(err, BumpError::Parse(ParseError::InvalidSegment { index: 2, .. })));
    t.child("VERSION").assert("0.1.0\n");
}

#[test]
fn bump_overflow_writes_nothing() {
    let (t, config) = setup(Some("0.0.18446744073709551615\n"));

    let err = bump(&config, IncrementKind::Patch, None, WriteMode::Persist).unwrap_err();

    assert!(matches!(err, BumpError::Version(_)));
    t.child("VERSION").assert("0.0.18446744073709551615\n");
}

#[test]
fn bump_missing_file() {
    let (_t, config) = setup(None);

    let err = bump(&config, IncrementKind::Patch, None, WriteMode::Persist).unwrap_err();

    assert!(matches!(err, BumpError::Store(StoreError::NotFound { .. })));
}

#[test]
fn init_default_and_explicit() {
    let (t, config) = setup(None);
    let file = t.child("VERSION");

    assert_eq!(init(&config, None).unwrap(), Version::new(0, 1, 0));
    file.assert("0.1.0\n");

    assert_eq!(init(&config, Some("1.2.3")).unwrap(), Version::new(1, 2, 3));
    file.assert("1.2.3\n");
}

#[test]
fn init_invalid_version_keeps_file() {
    let (t, config) = setup(Some("4.5.6\n"));

    assert!(matches!(init(&config, Some("4.5")), Err(BumpError::Parse(_))));
    t.child("VERSION").assert("4.5.6\n");
}

#[test]
fn show_with_prefix() {
    let (_t, config) = setup(Some("1.2.3\n"));

    let version = show(&config).unwrap();

    assert_eq!(render_with_prefix(version, "v"), "v1.2.3");
    assert_eq!(render_with_prefix(version, ""), "1.2.3");
}
