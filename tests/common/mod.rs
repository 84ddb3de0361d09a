// Shared test helpers for integration tests.
// Each test gets its own working directory and a cleared environment, so
// nothing from the machine running the tests (GITHUB_*, INPUT_*) leaks in.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub const REPO: &str = "octo-org/widgets";
pub const PR_NUMBER: u64 = 12;
pub const REVIEWS_PATH: &str = "/repos/octo-org/widgets/pulls/12/reviews";

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_required-reviewer-gate"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

/// A temporary checkout the gate runs in.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Workspace {
            dir: TempDir::new().expect("failed to create temp workspace"),
        }
    }

    pub fn with_reviewers(content: &str) -> Self {
        let workspace = Self::new();
        workspace.write("REVIEWERS", content);
        workspace
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        std::fs::write(&path, content).expect("failed to write workspace file");
        path
    }

    pub fn write_event(&self, event: &serde_json::Value) -> PathBuf {
        self.write("event.json", &event.to_string())
    }

    /// Environment of a pull request run against `api_url` with a token.
    pub fn pr_env(&self, api_url: &str) -> Vec<(String, String)> {
        let event_path = self.write_event(&pull_request_event(PR_NUMBER));
        vec![
            env("GITHUB_EVENT_PATH", event_path.to_str().unwrap()),
            env("GITHUB_REPOSITORY", REPO),
            env("GITHUB_API_URL", api_url),
            env("INPUT_GITHUB-TOKEN", "test-token"),
        ]
    }
}

pub fn env(key: &str, value: &str) -> (String, String) {
    (key.to_string(), value.to_string())
}

pub fn pull_request_event(number: u64) -> serde_json::Value {
    serde_json::json!({
        "action": "synchronize",
        "number": number,
        "pull_request": {
            "number": number,
            "state": "open",
            "user": {"login": "bob"}
        },
        "repository": {
            "name": "widgets",
            "full_name": REPO,
            "owner": {"login": "octo-org"}
        }
    })
}

pub fn push_event() -> serde_json::Value {
    serde_json::json!({
        "ref": "refs/heads/main",
        "repository": {
            "name": "widgets",
            "full_name": REPO,
            "owner": {"login": "octo-org"}
        }
    })
}

pub fn reviews_json(reviews: &[(&str, &str)]) -> serde_json::Value {
    let list: Vec<serde_json::Value> = reviews
        .iter()
        .enumerate()
        .map(|(i, (login, state))| {
            serde_json::json!({
                "id": i + 1,
                "user": {"login": login},
                "state": state,
                "submitted_at": "2024-05-01T10:00:00Z"
            })
        })
        .collect();
    serde_json::Value::Array(list)
}

/// Runs `check` in the workspace with exactly the given environment.
/// Returns (stdout, stderr, exit_code).
pub fn run_gate(
    workspace: &Workspace,
    envs: &[(String, String)],
    extra_args: &[&str],
) -> (String, String, i32) {
    let output = Command::new(binary_path())
        .arg("check")
        .args(extra_args)
        .current_dir(workspace.path())
        .env_clear()
        .envs(envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .output()
        .expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

/// Runs the binary with arbitrary arguments and no environment.
pub fn run_args(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(binary_path())
        .args(args)
        .env_clear()
        .output()
        .expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    (stdout, stderr, output.status.code().unwrap_or(-1))
}
