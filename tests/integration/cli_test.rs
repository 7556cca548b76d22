// Integration tests for the syspeek binary: flag validation, exit codes and
// the append-mode log file

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn syspeek(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_syspeek"))
        .args(args)
        .output()
        .expect("failed to run syspeek")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_refresh_without_categories_exits_with_one() {
    let output = syspeek(&["--refresh=5"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output)
        .contains("Error: Refresh is set but no data flags selected. Use --all or individual flags."));
    assert!(!stdout(&output).contains("=== System Info ==="));
}

#[test]
fn test_no_flags_exits_with_one() {
    let output = syspeek(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output)
        .contains("Error: Please specify at least one of --cpu, --mem, --net, --disk, or --all"));
}

#[test]
fn test_validation_failure_does_not_create_log() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("run.log");

    let output = syspeek(&["--refresh=2", &format!("--log={}", log_path.display())]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!log_path.exists());
}

#[test]
fn test_version_exits_with_zero() {
    let output = syspeek(&["--version"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_exits_with_zero() {
    for flag in ["--help", "-h"] {
        let output = syspeek(&[flag]);

        assert_eq!(output.status.code(), Some(0));
        assert!(stdout(&output).contains("--refresh"));
        assert!(stdout(&output).contains("syspeek --cpu --refresh=2"));
    }
}

#[test]
fn test_unopenable_log_exits_with_one() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("missing").join("run.log");

    let output = syspeek(&["--mem", &format!("--log={}", log_path.display())]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Could not open log file"));
    assert!(!stdout(&output).contains("=== Memory Usage ==="));
}

#[test]
fn test_single_pass_without_log() {
    let output = syspeek(&["--mem"]);
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("=== System Info ==="));
    assert!(out.contains("=== Memory Usage ==="));
    assert!(!out.contains("=== CPU Usage ==="));
    assert!(out.contains("🔁 Total refreshes: 1"));
}

#[test]
fn test_log_mirrors_terminal_and_appends() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("run.log");
    let log_flag = format!("--log={}", log_path.display());

    let first = syspeek(&["--mem", &log_flag]);
    assert_eq!(first.status.code(), Some(0));
    let after_first = fs::read_to_string(&log_path).unwrap();

    // Every logged line shows up on the terminal as well
    let terminal = stdout(&first);
    for line in after_first.lines().filter(|line| !line.is_empty()) {
        assert!(terminal.contains(line), "missing on terminal: {}", line);
    }
    assert!(!after_first.contains('\x1b'));
    assert!(!after_first.contains("Your Lightweight System Monitor"));

    let second = syspeek(&["--mem", &log_flag]);
    assert_eq!(second.status.code(), Some(0));
    let after_second = fs::read_to_string(&log_path).unwrap();

    assert!(after_second.starts_with(&after_first));
    assert_eq!(after_second.matches("=== Memory Usage ===").count(), 2);
    assert_eq!(after_second.matches("🔁 Total refreshes: 1").count(), 2);
}

#[cfg(unix)]
#[test]
fn test_interrupt_prints_summary_and_exits_cleanly() {
    use std::process::Stdio;
    use std::thread;
    use std::time::{Duration, Instant};

    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("run.log");

    let mut child = Command::new(env!("CARGO_BIN_EXE_syspeek"))
        .args(["--cpu", "--refresh=5", &format!("--log={}", log_path.display())])
        .stdout(Stdio::null())
        .spawn()
        .expect("failed to spawn syspeek");

    // The handler is installed before the first cycle starts; wait for the
    // CPU line so the loop is sleeping when the signal lands
    let deadline = Instant::now() + Duration::from_secs(20);
    loop {
        let log = fs::read_to_string(&log_path).unwrap_or_default();
        if log.contains("⚙️  CPU") {
            break;
        }
        assert!(Instant::now() < deadline, "first cycle never finished");
        thread::sleep(Duration::from_millis(50));
    }

    let status = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(status.success());

    let exit = child.wait().unwrap();
    let log = fs::read_to_string(&log_path).unwrap();

    assert_eq!(exit.code(), Some(0));
    assert!(log.contains("👋 Exiting SysPeek. Thanks for monitoring with us!"));
    assert!(log.contains("=== Summary ===\n"));
    assert!(log.contains("🔁 Total refreshes: 1\n"));
}

#[cfg(unix)]
#[test]
fn test_closed_stdout_still_completes_log() {
    use std::process::Stdio;

    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("run.log");

    let mut child = Command::new(env!("CARGO_BIN_EXE_syspeek"))
        .args(["--mem", "--net", &format!("--log={}", log_path.display())])
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn syspeek");
    drop(child.stdout.take());

    let exit = child.wait().unwrap();
    let log = fs::read_to_string(&log_path).unwrap();

    assert_eq!(exit.code(), Some(0));
    assert!(log.contains("=== Network I/O ===\n"));
    assert!(log.contains("=== Summary ===\n"));
    assert!(log.ends_with("🔁 Total refreshes: 1\n"));
}
