//! Integration tests for the `thread_sweep` binary.
//!
//! The standard `true` and `false` programs stand in for the worker: they accept any arguments
//! and exit with 0 and 1 respectively.

#![cfg(all(unix, not(miri)))]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_sweep(working_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_thread_sweep"))
        .args(args)
        .current_dir(working_dir)
        .output()
        .expect("failed to launch thread_sweep")
}

fn result_lines(stdout: &str) -> Vec<&str> {
    stdout
        .lines()
        .filter(|line| line.starts_with("Threads: "))
        .collect()
}

#[test]
fn default_sweep_with_succeeding_worker() {
    let temp_dir = tempfile::tempdir().unwrap();

    let output = run_sweep(temp_dir.path(), &["--executable", "true"]);

    assert!(
        output.status.success(),
        "sweep failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    for (arrays, elements) in [(5, 5), (10, 100), (100, 1000)] {
        let header = format!("\nResults for {arrays} arrays of size {elements}:\n");
        assert!(stdout.contains(&header), "{stdout}");
    }

    let rows = result_lines(&stdout);
    assert_eq!(rows.len(), 12, "{stdout}");

    let baselines = rows
        .iter()
        .filter(|row| row.starts_with("Threads: 1, "))
        .filter(|row| row.ends_with("Speedup: 1.00, Efficiency: 1.00"))
        .count();
    assert_eq!(baselines, 3, "{stdout}");

    let input_dir = temp_dir.path().join("input_data");
    let input = fs::read_to_string(input_dir.join("input_10_100.txt")).unwrap();
    let lines: Vec<&str> = input.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines.first(), Some(&"10 100"));

    for line in lines.iter().skip(1) {
        let values: Vec<u64> = line
            .split(' ')
            .map(|token| token.parse().unwrap())
            .collect();
        assert_eq!(values, (1..=100).collect::<Vec<u64>>());
    }

    assert!(input_dir.join("input_5_5.txt").is_file());
    assert!(input_dir.join("input_100_1000.txt").is_file());
    assert!(temp_dir.path().join("output_data").is_dir());
}

#[test]
fn config_file_selects_shapes_and_thread_counts() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("sweep.toml"),
        "executable = \"true\"\nthread_counts = [1, 3]\nconfigurations = [[2, 3]]\n",
    )
    .unwrap();

    let output = run_sweep(
        temp_dir.path(),
        &["--config", "sweep.toml", "--input-dir", "inputs"],
    );

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.starts_with("\nResults for 2 arrays of size 3:\n"),
        "{stdout}"
    );

    let rows = result_lines(&stdout);
    assert_eq!(rows.len(), 2, "{stdout}");
    assert!(rows.first().unwrap().starts_with("Threads: 1, Time: "));
    assert!(rows.get(1).unwrap().starts_with("Threads: 3, Time: "));

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("inputs/input_2_3.txt")).unwrap(),
        "2 3\n1 2 3\n1 2 3\n"
    );
}

#[test]
fn failing_worker_leaves_no_baseline() {
    let temp_dir = tempfile::tempdir().unwrap();

    let output = run_sweep(temp_dir.path(), &["--executable", "false"]);

    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let echoed_errors = stdout
        .lines()
        .filter(|line| line.starts_with("Error: "))
        .count();
    assert_eq!(echoed_errors, 12, "{stdout}");
    assert!(result_lines(&stdout).is_empty(), "{stdout}");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: no single-thread baseline for 5 arrays of size 5"),
        "{stderr}"
    );
}

#[test]
fn missing_worker_stops_sweep() {
    let temp_dir = tempfile::tempdir().unwrap();

    let output = run_sweep(temp_dir.path(), &["--executable", "./no-such-worker"]);

    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: failed to launch worker './no-such-worker'"),
        "{stderr}"
    );
}

#[test]
fn invalid_config_is_reported() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("sweep.toml"), "thread_counts = [0]\n").unwrap();

    let output = run_sweep(temp_dir.path(), &["--config", "sweep.toml"]);

    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid sweep configuration"), "{stderr}");
    assert!(!temp_dir.path().join("input_data").exists());
}
