use std::fs;

use meowhash_corelib::config::{load_config, parse_seed, HashConfig};
use meowhash_corelib::HashWidth;
use tempfile::tempdir;

#[test]
fn loads_width_and_seed_from_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("meowhash.toml");
    fs::write(&path, "width = 256\nseed = 1234\n").unwrap();

    let cfg = load_config(&path).expect("config loads");
    assert_eq!(cfg, HashConfig::new(HashWidth::W256, 1234));
}

#[test]
fn rejects_unsupported_width() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "width = 384\n").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(format!("{err:#}").contains("384"), "{err:#}");
}

#[test]
fn missing_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn seeds_parse_like_cli_flags() {
    assert_eq!(parse_seed("0x10").unwrap(), 16);
    assert_eq!(parse_seed("10").unwrap(), 10);
}
