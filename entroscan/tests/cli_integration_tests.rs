// entroscan/tests/cli_integration_tests.rs
//! Command-line integration tests for the `entroscan` binary.
//!
//! These tests execute the compiled binary with `assert_cmd` against files
//! created in temporary directories, and assert on the exact report lines
//! written to stdout and on the exit status.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use rand::RngCore;
use std::fs;
use std::path::Path;
use tempfile::tempdir;
use test_log::test;

/// Builds a `Command` for the `entroscan` binary with logging silenced.
fn entroscan() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("entroscan"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_random(path: &Path, len: usize) -> Result<()> {
    let mut data = vec![0u8; len];
    rand::rng().fill_bytes(&mut data);
    fs::write(path, data)?;
    Ok(())
}

#[test]
fn test_zero_file_is_normal() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("zeros.bin");
    fs::write(&path, vec![0u8; 1_000_000])?;

    entroscan()
        .arg(&path)
        .assert()
        .success()
        .stdout(format!("{}: Entropy = 0.00 → Normal\n", path.display()));
    Ok(())
}

#[test]
fn test_random_file_is_flagged() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("locked.bin");
    write_random(&path, 1_000_000)?;

    let output = entroscan().arg(&path).output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    let prefix = format!("{}: Entropy = ", path.display());
    assert!(stdout.starts_with(&prefix), "{}", stdout);
    assert!(stdout.ends_with(" → POSSIBLY ENCRYPTED\n"), "{}", stdout);
    let value: f64 = stdout[prefix.len()..].split(' ').next().unwrap_or_default().parse()?;
    assert!((7.99..=8.0).contains(&value), "entropy was {}", value);
    Ok(())
}

#[test]
fn test_missing_path_is_skipped() -> Result<()> {
    let dir = tempdir()?;
    entroscan()
        .current_dir(dir.path())
        .arg("nope.bin")
        .assert()
        .success()
        .stdout("Skipping: nope.bin (not found or not a file)\n");
    Ok(())
}

#[test]
fn test_directory_needs_recursive_flag() -> Result<()> {
    let dir = tempdir()?;
    fs::create_dir(dir.path().join("docs"))?;
    fs::write(dir.path().join("docs").join("readme.txt"), b"just some words")?;
    fs::write(dir.path().join("docs").join("notes.txt"), b"more words here")?;

    entroscan()
        .current_dir(dir.path())
        .arg("docs")
        .assert()
        .success()
        .stdout("Skipping: docs (not found or not a file)\n");

    let sep = std::path::MAIN_SEPARATOR;
    entroscan()
        .current_dir(dir.path())
        .args(["-r", "docs"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("docs{sep}notes.txt: Entropy = ")))
        .stdout(predicate::str::contains(format!("docs{sep}readme.txt: Entropy = ")))
        .stdout(predicate::str::contains("Skipping").not());
    Ok(())
}

#[test]
fn test_zero_threshold_flags_everything() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("a.txt"), b"aaaa")?;
    fs::write(dir.path().join("b.txt"), b"")?;

    let output = entroscan()
        .args(["--threshold", "0", "--recursive"])
        .arg(dir.path())
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.lines().count(), 2, "{}", stdout);
    assert!(stdout.lines().all(|l| l.ends_with("→ POSSIBLY ENCRYPTED")), "{}", stdout);
    Ok(())
}

#[test]
fn test_chunk_size_bounds_the_sample() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("prefixed.bin");
    let mut data = vec![b'A'; 1024];
    let mut tail = vec![0u8; 128 * 1024];
    rand::rng().fill_bytes(&mut tail);
    data.extend_from_slice(&tail);
    fs::write(&path, data)?;

    entroscan()
        .args(["--chunk-size", "1024"])
        .arg(&path)
        .assert()
        .success()
        .stdout(format!("{}: Entropy = 0.00 → Normal\n", path.display()));
    Ok(())
}

#[test]
fn test_strict_exit_code_when_nothing_scanned() -> Result<()> {
    let dir = tempdir()?;
    entroscan()
        .current_dir(dir.path())
        .args(["--strict", "missing-one", "missing-two"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("Skipping: missing-one"))
        .stdout(predicate::str::contains("Skipping: missing-two"));

    fs::write(dir.path().join("present"), b"data")?;
    entroscan()
        .current_dir(dir.path())
        .args(["--strict", "missing-one", "present"])
        .assert()
        .success();
    Ok(())
}

#[test]
fn test_lenient_exit_code_by_default() -> Result<()> {
    let dir = tempdir()?;
    entroscan()
        .current_dir(dir.path())
        .arg("missing")
        .assert()
        .success();
    Ok(())
}

#[test]
fn test_usage_errors() -> Result<()> {
    entroscan().assert().failure();
    entroscan().args(["-t", "lots", "x"]).assert().code(2);
    entroscan().args(["-c", "0", "x"]).assert().code(2);
    Ok(())
}

#[test]
fn test_debug_logs_go_to_stderr() -> Result<()> {
    let dir = tempdir()?;
    entroscan()
        .current_dir(dir.path())
        .args(["--debug", "nope.bin"])
        .assert()
        .success()
        .stdout("Skipping: nope.bin (not found or not a file)\n")
        .stderr(predicate::str::contains("Starting entroscan operation."));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_symlink_loops_do_not_hang() -> Result<()> {
    use std::os::unix::fs::symlink;

    let dir = tempdir()?;
    fs::write(dir.path().join("file.txt"), b"content")?;
    symlink(dir.path(), dir.path().join("again"))?;

    for extra in [None, Some("--follow-links")] {
        let mut cmd = entroscan();
        cmd.arg("-r").arg(dir.path());
        if let Some(flag) = extra {
            cmd.arg(flag);
        }
        let output = cmd.output()?;
        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout)?;
        assert_eq!(stdout.lines().count(), 1, "{}", stdout);
        assert!(stdout.contains("file.txt: Entropy = "));
    }
    Ok(())
}

#[cfg(target_os = "linux")]
#[test]
fn test_failing_file_does_not_abort_the_run() -> Result<()> {
    let dir = tempdir()?;
    let good = dir.path().join("ok.txt");
    fs::write(&good, b"aaaa")?;

    let output = entroscan().arg("/proc/self/mem").arg(&good).output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "{}", stdout);
    assert!(lines[0].starts_with("/proc/self/mem: ERROR - "), "{}", stdout);
    assert_eq!(lines[1], format!("{}: Entropy = 0.00 → Normal", good.display()));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_recursive_scan_reports_linked_and_dangling_files() -> Result<()> {
    use std::os::unix::fs::symlink;

    let outside = tempdir()?;
    fs::write(outside.path().join("real.bin"), vec![0u8; 64])?;

    let dir = tempdir()?;
    fs::write(dir.path().join("a.txt"), b"aaaa")?;
    symlink(dir.path().join("gone"), dir.path().join("broken.bin"))?;
    symlink(outside.path().join("real.bin"), dir.path().join("link.bin"))?;

    let output = entroscan().arg("-r").arg(dir.path()).output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "{}", stdout);
    assert_eq!(lines[0], format!("{}: Entropy = 0.00 → Normal", dir.path().join("a.txt").display()));
    assert!(
        lines[1].starts_with(&format!("{}: ERROR - ", dir.path().join("broken.bin").display())),
        "{}",
        stdout
    );
    assert_eq!(lines[2], format!("{}: Entropy = 0.00 → Normal", dir.path().join("link.bin").display()));
    Ok(())
}
