//! Test environment builder for isolated Biblio testing.
//!
//! Provides `TestEnv` - an isolated directory holding the store file, a
//! fake home so no user configuration leaks in, and helpers to run the
//! binary with a script on stdin.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Variables the binary reads; cleared so the host environment cannot leak in
const BIBLIO_VARS: &[&str] = &[
    "BIBLIO_LOG",
    "BIBLIO_STORE_PATH",
    "BIBLIO_STORE_BACKEND",
    "BIBLIO_ECHO",
];

/// Result of running the biblio binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if the process exited successfully
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Lines reporting a failed command (`****` or `***`)
    pub fn failures(&self) -> Vec<String> {
        self.stdout
            .lines()
            .filter(|l| l.starts_with("***"))
            .map(str::to_string)
            .collect()
    }

    /// Result lines, without the `> ` echo of each command
    pub fn results(&self) -> Vec<String> {
        self.stdout
            .lines()
            .filter(|l| !l.starts_with("> "))
            .map(str::to_string)
            .collect()
    }
}

/// Isolated test environment.
pub struct TestEnv {
    /// Working directory of the process; holds the store by default
    pub root: TempDir,
    /// Temporary directory for HOME and XDG directories
    pub home_dir: TempDir,
    biblio_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("Failed to create temp dir"),
            home_dir: tempfile::tempdir().expect("Failed to create temp home"),
            biblio_bin: PathBuf::from(env!("CARGO_BIN_EXE_biblio")),
        }
    }

    /// Get path relative to the working directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// The store file used by `run_script`
    pub fn store_path(&self) -> PathBuf {
        self.path("library.toml")
    }

    /// Run a script on stdin against this environment's store file
    pub fn run_script(&self, script: &str) -> TestResult {
        let store = self.store_path();
        let store = store.to_string_lossy();
        self.run(&["--store", store.as_ref()], script)
    }

    /// Run the binary with explicit arguments and stdin
    pub fn run(&self, args: &[&str], stdin: &str) -> TestResult {
        self.run_with_env(args, stdin, &[])
    }

    /// Run the binary with explicit arguments, stdin and extra env vars
    pub fn run_with_env(&self, args: &[&str], stdin: &str, env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command();
        cmd.args(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let mut child = cmd
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to execute biblio");

        // the process may exit before reading everything (startup failures)
        if let Some(mut pipe) = child.stdin.take() {
            let _ = pipe.write_all(stdin.as_bytes());
        }

        let output = child.wait_with_output().expect("Failed to wait for biblio");
        output_to_result(output)
    }

    /// Write a file into the working directory
    pub fn write_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Read the committed store file
    pub fn read_store(&self) -> String {
        std::fs::read_to_string(self.store_path()).unwrap_or_default()
    }

    fn command(&self) -> Command {
        let home = self.home_dir.path();
        let mut cmd = Command::new(&self.biblio_bin);
        cmd.current_dir(self.root.path())
            .env("HOME", home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("XDG_DATA_HOME", home.join(".local/share"));
        for var in BIBLIO_VARS {
            cmd.env_remove(var);
        }
        cmd
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
