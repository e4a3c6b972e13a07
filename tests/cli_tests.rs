use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_darts501"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn darts501");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().expect("Failed to wait on darts501")
}

const PERFECT: [&str; 6] = ["--single", "100", "--double", "100", "--triple", "100"];

#[test]
fn test_play_nine_darter() {
    let mut args = vec!["play", "--seed", "1"];
    args.extend_from_slice(&PERFECT);

    // Blank aim defaults to t20; blank line after a turn continues.
    let input = "\n\n\n\nt20\nt20\nt20\n\nt20\nt19\nd12\n";
    let output = run_with_stdin(&args, input);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("Aiming for t20 (default)"));
    assert!(stdout.contains("Great shot! You hit Double 12 for 24 points!"));
    assert!(stdout.contains("GAME OVER! You finished with Double 12!"));
    assert!(stdout.contains("167.00"), "stdout: {}", stdout);
    assert!(stdout.contains("Thanks for playing!"));
}

#[test]
fn test_play_rejects_bad_aim_without_using_a_dart() {
    let mut args = vec!["play", "--seed", "1"];
    args.extend_from_slice(&PERFECT);

    let output = run_with_stdin(&args, "t25\nt20\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Invalid input!"));
    // The retry is still the first dart of the turn.
    assert_eq!(stdout.matches("Dart 1/3").count(), 2);
    assert!(stdout.contains("Score remaining: 441"));
    assert!(stdout.contains("Game abandoned."));
}

#[test]
fn test_play_prompts_for_accuracy() {
    let output = run_with_stdin(&["play", "--seed", "3"], "abc\n150\n\n\n\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert_eq!(stdout.matches("Please enter a value between 1 and 100").count(), 2);
    assert!(stdout.contains("Singles: 80% | Doubles: 15% | Triples: 10%"));
}

#[test]
fn test_simulate_json_and_csv() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("legs.csv");

    let output = Command::new(env!("CARGO_BIN_EXE_darts501"))
        .args([
            "simulate",
            "--games",
            "5",
            "--seed",
            "77",
            "--json",
            "--csv",
            csv_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to run darts501");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["games"], 5);
    assert_eq!(json["base_seed"], 77);

    let csv = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().count(), 6);
}

#[test]
fn test_invalid_accuracy_flag_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_darts501"))
        .args(["simulate", "--games", "1", "--double", "0"])
        .output()
        .expect("Failed to run darts501");
    assert!(!output.status.success());
}
