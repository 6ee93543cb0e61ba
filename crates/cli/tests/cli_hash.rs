use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use meowhash_corelib::{hash, HashWidth};
use serde_json::Value;
use tempfile::tempdir;

fn meowsum() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_meowsum"));
    cmd.env_remove("MEOWHASH_CONFIG");
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn hash_prints_digest_and_name() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("note.txt");
    fs::write(&path, b"purr").unwrap();

    let output = meowsum()
        .args(["hash", "--width", "256", "--seed", "42"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");

    let expected = hash(HashWidth::W256, b"purr", 42).to_hex();
    assert_eq!(
        stdout(&output).trim_end(),
        format!("{expected}  {}", path.display())
    );
}

#[test]
fn hex_seed_matches_decimal_seed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.bin");
    fs::write(&path, [0u8, 1, 2, 3]).unwrap();

    let run = |seed: &str| {
        let output = meowsum()
            .args(["hash", "-s", seed])
            .arg(&path)
            .output()
            .unwrap();
        assert!(output.status.success(), "{output:?}");
        stdout(&output)
    };
    assert_eq!(run("0xff"), run("255"));
}

#[test]
fn unsupported_width_is_rejected() {
    let output = meowsum()
        .args(["hash", "--width", "384", "-"])
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("384"), "stderr: {stderr}");
}

#[test]
fn reads_stdin_without_files() {
    let mut child = meowsum()
        .args(["hash", "-w", "128", "--json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"from a pipe")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success(), "{output:?}");

    let record: Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(record["input"], "-");
    assert_eq!(record["width"], 128);
    assert_eq!(record["seed"], 0);
    assert_eq!(
        record["digest"],
        hash(HashWidth::W128, b"from a pipe", 0).to_hex()
    );
}

#[test]
fn config_file_supplies_defaults() {
    let dir = tempdir().unwrap();
    let cfg = dir.path().join("meow.toml");
    fs::write(&cfg, "width = 512\nseed = 9\n").unwrap();
    let path = dir.path().join("x");
    fs::write(&path, b"x").unwrap();

    let output = meowsum()
        .args(["hash", "--json", "--config"])
        .arg(&cfg)
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");
    let record: Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(record["digest"], hash(HashWidth::W512, b"x", 9).to_hex());

    // flags win over the file
    let output = meowsum()
        .args(["hash", "-w", "128", "--config"])
        .arg(&cfg)
        .arg(&path)
        .output()
        .unwrap();
    assert!(stdout(&output).starts_with(&hash(HashWidth::W128, b"x", 9).to_hex()));
}

#[test]
fn check_detects_tampering() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, b"alpha").unwrap();
    fs::write(&b, b"beta").unwrap();

    let output = meowsum().arg("hash").arg(&a).arg(&b).output().unwrap();
    assert!(output.status.success());
    let sums = dir.path().join("SUMS");
    fs::write(&sums, stdout(&output)).unwrap();

    let output = meowsum().arg("check").arg(&sums).output().unwrap();
    assert!(output.status.success(), "{output:?}");
    assert_eq!(stdout(&output).matches(": OK").count(), 2);

    fs::write(&b, b"bet4").unwrap();
    let output = meowsum().arg("check").arg(&sums).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.contains(&format!("{}: OK", a.display())));
    assert!(text.contains(&format!("{}: FAILED", b.display())));
}

#[test]
fn check_keeps_going_past_unreadable_files() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let gone = dir.path().join("gone.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, b"alpha").unwrap();
    fs::write(&gone, b"soon deleted").unwrap();
    fs::write(&b, b"beta").unwrap();

    let output = meowsum()
        .arg("hash")
        .args([&a, &gone, &b])
        .output()
        .unwrap();
    assert!(output.status.success());
    let sums = dir.path().join("SUMS");
    fs::write(&sums, stdout(&output)).unwrap();
    fs::remove_file(&gone).unwrap();

    let output = meowsum().arg("check").arg(&sums).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.contains(&format!("{}: OK", a.display())), "{text}");
    assert!(text.contains(&format!("{}: FAILED", gone.display())), "{text}");
    assert!(text.contains(&format!("{}: OK", b.display())), "{text}");
}

#[test]
fn widths_json_lists_all_variants() {
    let output = meowsum().args(["widths", "--json"]).output().unwrap();
    assert!(output.status.success());
    let widths: Value = serde_json::from_str(&stdout(&output)).unwrap();
    let bits: Vec<u64> = widths
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["bits"].as_u64().unwrap())
        .collect();
    assert_eq!(bits, vec![128, 256, 512]);
    assert_eq!(widths[2]["digest_size"], 64);
}

#[test]
fn bare_invocation_prints_banner() {
    let output = meowsum().output().unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("meowsum "));
}
