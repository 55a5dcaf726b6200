//! Crate to run integration tests for the solver binary.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Duration;

use wait_timeout::ChildExt;

const TEST_TIMEOUT: Duration = Duration::from_secs(60);

static NUM_RUNS: AtomicUsize = AtomicUsize::new(0);

/// What the solver printed for an instance.
#[derive(Debug)]
pub(crate) struct SolverOutput {
    pub(crate) status: ExitStatus,
    pub(crate) stdout: String,
}

impl SolverOutput {
    /// The printed solutions, without the separator lines.
    pub(crate) fn solutions(&self) -> Vec<String> {
        let mut solutions = Vec::new();
        let mut current = String::new();

        for line in self.output_lines() {
            if line == "----------" {
                solutions.push(std::mem::take(&mut current));
            } else if !line.starts_with("=====") && line != "==========" {
                current.push_str(line);
                current.push('\n');
            }
        }

        solutions
    }

    /// The last line which is not a log or statistic line.
    pub(crate) fn last_line(&self) -> Option<&str> {
        self.output_lines().last()
    }

    /// The statistic lines, as `(name, value)` pairs.
    pub(crate) fn statistics(&self) -> Vec<(&str, &str)> {
        self.stdout
            .lines()
            .filter_map(|line| line.strip_prefix("%%%gridcsp-stat: "))
            .filter_map(|statistic| statistic.split_once('='))
            .collect()
    }

    fn output_lines(&self) -> impl Iterator<Item = &str> {
        self.stdout.lines().filter(|line| !line.starts_with('%'))
    }
}

pub(crate) fn instance(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("futoshiki")
        .join(name)
}

pub(crate) fn run_solver(instance_path: impl AsRef<Path>) -> SolverOutput {
    run_solver_with_options(instance_path, std::iter::empty::<&str>())
}

pub(crate) fn run_solver_with_options<'a>(
    instance_path: impl AsRef<Path>,
    args: impl IntoIterator<Item = &'a str>,
) -> SolverOutput {
    let solver = PathBuf::from(env!("CARGO_BIN_EXE_gridcsp-solver"));
    let log_file_path = std::env::temp_dir().join(format!(
        "gridcsp-solver-{}-{}.log",
        std::process::id(),
        NUM_RUNS.fetch_add(1, Ordering::Relaxed)
    ));

    let mut command = Command::new(solver);
    for arg in args {
        let _ = command.arg(arg);
    }

    let mut child = command
        .arg(instance_path.as_ref())
        .stdout(File::create(&log_file_path).expect("Failed to create log file."))
        .stderr(Stdio::null())
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run solver.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs()),
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting solver: {e}"),
    };

    let stdout = std::fs::read_to_string(&log_file_path).expect("Failed to read log file.");
    std::fs::remove_file(&log_file_path).expect("Failed to remove log file.");

    SolverOutput { status, stdout }
}
