//! Sources of the raw workflow payload.
//!
//! The HTTP client talks to the AirOps app execution endpoint; the file source
//! replays a saved payload for offline use and tests. Both return the raw JSON
//! and leave normalization to the loader.

use std::future::Future;
use std::path::PathBuf;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::{Value, json};

use crate::config::Credentials;
use crate::{Error, Result};

/// Number of workflow items requested from the app
pub const WORKFLOW_COUNT: u32 = 12;

const HEADER_USER_ID: &str = "x-airops-user-id";
const HEADER_WORKSPACE_ID: &str = "x-airops-workspace-id";
const HEADER_HASHED_USER_ID: &str = "x-airops-hashed-user-id";

pub trait WorkflowSource {
    /// Human-readable origin for logs and the loading panel
    fn describe(&self) -> String;

    /// Fetch the raw payload holding (up to) `count` items
    fn fetch(&self, count: u32) -> impl Future<Output = Result<Value>> + Send;
}

/// Pick the app output out of an execution response.
///
/// Accepts `{ "output": ... }`, `{ "result": { "output": ... } }` or a body
/// that is the output itself.
pub fn extract_output(body: Value) -> Value {
    match body {
        Value::Object(mut map) => {
            if let Some(output) = map.remove("output") {
                return output;
            }
            if let Some(Value::Object(mut result)) = map.remove("result") {
                if let Some(output) = result.remove("output") {
                    return output;
                }
                map.insert("result".to_string(), Value::Object(result));
            }
            Value::Object(map)
        }
        other => other,
    }
}

pub struct AirOpsClient {
    client: reqwest::Client,
    credentials: Credentials,
}

impl AirOpsClient {
    pub fn new(credentials: Credentials) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("flowboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            credentials,
        })
    }

    pub fn execute_url(&self) -> String {
        format!(
            "{}/public_api/airops_apps/{}/execute",
            self.credentials.base_url, self.credentials.app_id
        )
    }

    pub fn request_body(&self, count: u32) -> Value {
        let mut body = json!({ "inputs": { "count": count } });
        if let Some(version) = self.credentials.app_version {
            body["version"] = json!(version);
        }
        body
    }

    fn identity_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let pairs = [
            (HEADER_USER_ID, self.credentials.user_id.clone()),
            (HEADER_WORKSPACE_ID, self.credentials.workspace_id.to_string()),
            (HEADER_HASHED_USER_ID, self.credentials.hashed_user_id.clone()),
        ];
        for (name, value) in pairs {
            let value = HeaderValue::from_str(&value).map_err(|_| {
                Error::Config(format!("{} contains invalid header characters", name))
            })?;
            headers.insert(name, value);
        }
        Ok(headers)
    }
}

impl WorkflowSource for AirOpsClient {
    fn describe(&self) -> String {
        format!("AirOps app {}", self.credentials.app_id)
    }

    async fn fetch(&self, count: u32) -> Result<Value> {
        let url = self.execute_url();
        let headers = self.identity_headers()?;
        tracing::info!(%url, count, "executing AirOps app");

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(&self.request_body(count))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status, "AirOps app execution failed");
            return Err(Error::Api { status, body });
        }

        let body: Value = response.json().await?;
        Ok(extract_output(body))
    }
}

/// Payload saved to disk, e.g. a captured execute response
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WorkflowSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self, _count: u32) -> Result<Value> {
        tracing::info!(path = %self.path.display(), "reading workflow payload from file");
        let content = tokio::fs::read_to_string(&self.path).await?;
        let body: Value = serde_json::from_str(&content)?;
        Ok(extract_output(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(app_version: Option<u64>) -> Credentials {
        Credentials {
            user_id: "user-1".to_string(),
            workspace_id: 42,
            hashed_user_id: "deadbeef".to_string(),
            app_id: 7,
            app_version,
            base_url: "https://app.airops.com".to_string(),
        }
    }

    #[test]
    fn test_execute_url() -> Result<()> {
        let client = AirOpsClient::new(credentials(None))?;
        assert_eq!(
            client.execute_url(),
            "https://app.airops.com/public_api/airops_apps/7/execute"
        );
        Ok(())
    }

    #[test]
    fn test_request_body() -> Result<()> {
        let latest = AirOpsClient::new(credentials(None))?;
        assert_eq!(latest.request_body(12), json!({ "inputs": { "count": 12 } }));

        let pinned = AirOpsClient::new(credentials(Some(3)))?;
        assert_eq!(
            pinned.request_body(12),
            json!({ "inputs": { "count": 12 }, "version": 3 })
        );
        Ok(())
    }

    #[test]
    fn test_identity_headers() -> Result<()> {
        let client = AirOpsClient::new(credentials(None))?;
        let headers = client.identity_headers()?;
        assert_eq!(headers[HEADER_WORKSPACE_ID], "42");
        assert_eq!(headers[HEADER_HASHED_USER_ID], "deadbeef");
        Ok(())
    }

    #[test]
    fn test_extract_output() {
        assert_eq!(extract_output(json!({ "output": [1] })), json!([1]));
        assert_eq!(
            extract_output(json!({ "result": { "output": { "data": [] } } })),
            json!({ "data": [] })
        );
        assert_eq!(extract_output(json!({ "data": [2] })), json!({ "data": [2] }));
        assert_eq!(extract_output(json!([3])), json!([3]));
    }
}
