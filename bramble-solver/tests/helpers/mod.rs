//! Runs the `bramble-solver` binary for the command-line tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::fs::File;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;
use std::time::Duration;

use wait_timeout::ChildExt;

const TEST_TIMEOUT: Duration = Duration::from_secs(60);

/// The exit status and the standard output of a solver run.
#[derive(Debug)]
pub(crate) struct Run {
    pub(crate) success: bool,
    pub(crate) stdout: String,
}

/// Run the solver with `args`, capturing its output in `{name}.log` in the temporary directory.
pub(crate) fn run_solver<'a>(name: &str, args: impl IntoIterator<Item = &'a str>) -> Run {
    let solver = PathBuf::from(env!("CARGO_BIN_EXE_bramble-solver"));
    let log_file_path = std::env::temp_dir().join(format!("bramble-{name}.log"));

    let mut child = Command::new(solver)
        .args(args)
        .stdout(File::create(&log_file_path).expect("Failed to create log file."))
        .stderr(Stdio::null())
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run solver.");

    let success = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(Some(status)) => status.success(),
        Ok(None) => {
            let _ = child.kill();
            panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs())
        }
        Err(e) => panic!("error waiting for the solver: {e}"),
    };

    let stdout = std::fs::read_to_string(&log_file_path).expect("Failed to read log file.");
    std::fs::remove_file(&log_file_path).expect("Failed to remove log file.");

    Run { success, stdout }
}
