#![cfg(feature = "cli")]


use anyhow::Result;
use process_harness::{FixtureProcess, RUNAWAY_BIN};
use std::time::Duration;
use worker_fixtures::utils::monitor::ProcessMonitor;

const FAILURE_LINE: &str = "processing request 4242 failed, retrying endlessly";

#[test]
fn test_startup_line_then_failure_line() -> Result<()> {
    let process = FixtureProcess::spawn(RUNAWAY_BIN, &[])?;

    let first = process.next_line(Duration::from_secs(10))?;
    assert_eq!(first.text, "runaway worker started");

    // 200 iterations of the default workload; generous for debug builds.
    let second = process.next_line(Duration::from_secs(60))?;
    assert_eq!(second.text, FAILURE_LINE);

    Ok(())
}

#[test]
fn test_never_exits_on_its_own() -> Result<()> {
    let mut process = FixtureProcess::spawn(RUNAWAY_BIN, &[])?;
    process.next_line(Duration::from_secs(10))?;

    std::thread::sleep(Duration::from_secs(5));
    assert!(process.is_running()?, "runaway worker exited by itself");

    Ok(())
}

#[test]
fn test_saturates_a_core() -> Result<()> {
    let process = FixtureProcess::spawn(RUNAWAY_BIN, &[])?;
    process.next_line(Duration::from_secs(10))?;

    let monitor = ProcessMonitor::attach(process.pid());
    let stats = monitor
        .sample_over(Duration::from_secs(1))
        .expect("runaway process should be visible to sysinfo");

    // Loose bound so a busy CI host does not make this flaky.
    assert!(
        stats.cpu_usage > 50.0,
        "expected a busy core, got {:.1}%",
        stats.cpu_usage
    );

    Ok(())
}

#[test]
fn test_failure_lines_are_evenly_spaced() -> Result<()> {
    let mut process = FixtureProcess::spawn(
        RUNAWAY_BIN,
        &["--workload-size", "10", "--max-iterations", "1000"],
    )?;

    let lines = process.read_to_end(Duration::from_secs(30))?;
    let status = process.wait_timeout(Duration::from_secs(10))?;
    assert!(status.success());

    let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts[0], "runaway worker started");
    assert_eq!(texts[1..], [FAILURE_LINE; 5]);

    Ok(())
}

#[test]
fn test_invalid_override_exits_with_config_error() -> Result<()> {
    let mut process = FixtureProcess::spawn(RUNAWAY_BIN, &["--report-every", "0"])?;

    let status = process.wait_timeout(Duration::from_secs(10))?;
    assert_eq!(status.code(), Some(1));
    assert!(process.read_to_end(Duration::from_secs(5))?.is_empty());

    Ok(())
}
