//! Common test utilities shared across integration tests.
//!
//! Clippy cannot track usage across integration test files, hence the
//! `allow(dead_code)`.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const AIROPS_VARS: &[&str] = &[
    "AIROPS_API_KEY",
    "AIROPS_USER_ID",
    "AIROPS_WORKSPACE_ID",
    "AIROPS_HASHED_USER_ID",
    "AIROPS_APP_ID",
    "AIROPS_APP_VERSION",
    "AIROPS_API_BASE",
    "FLOWBOARD_PATH",
];

pub struct TestFixture {
    temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".flowboard");
        fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self { temp_dir, data_dir }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Write a JSON payload into the fixture and return its path
    pub fn write_payload(&self, name: &str, payload: &serde_json::Value) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, serde_json::to_string_pretty(payload).unwrap())
            .expect("Failed to write payload");
        path
    }

    pub fn write_config(&self, toml: &str) {
        fs::write(self.data_dir.join("config.toml"), toml).expect("Failed to write config");
    }

    /// `flowboard` isolated from the caller's AirOps environment and `.env`
    pub fn command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("flowboard");
        for var in AIROPS_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(self.temp_dir.path())
            .arg("--data-dir")
            .arg(self.data_dir());
        cmd
    }
}

/// Execute response with `count` workflows under `output.data`
pub fn sample_payload(count: i64) -> serde_json::Value {
    let rows: Vec<_> = (1..=count)
        .map(|i| {
            serde_json::json!({
                "type": if i % 2 == 0 { "Agent" } else { "Workflow" },
                "name": format!("Flow {:02}", i),
                "tags": if i % 3 == 0 {
                    serde_json::json!([{ "name": "billing", "color": "#ff0000" }])
                } else {
                    serde_json::json!([])
                },
                "lastUpdated": 1_700_000_000 + i * 60,
                "id": i,
            })
        })
        .collect();

    serde_json::json!({ "output": { "data": rows } })
}
