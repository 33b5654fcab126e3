//! One-shot session fetch.
//!
//! The dashboard loads its records exactly once; a failure is terminal for the
//! session and there is no retry, timeout or cancellation.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use flowboard_engine::{normalize_payload, unwrap_envelope};
use flowboard_types::WorkflowItem;

use crate::client::{WORKFLOW_COUNT, WorkflowSource};
use crate::{Error, Result};

/// What the table shows while and after the fetch runs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Loading,
    Loaded(Vec<WorkflowItem>),
    Failed(String),
}

impl FetchState {
    pub fn from_result(result: Result<Vec<WorkflowItem>>) -> Self {
        match result {
            Ok(items) => FetchState::Loaded(items),
            Err(err) => FetchState::Failed(err.to_string()),
        }
    }
}

pub struct WorkflowLoader<S> {
    source: S,
    started: AtomicBool,
}

impl<S: WorkflowSource> WorkflowLoader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            started: AtomicBool::new(false),
        }
    }

    /// Fetch and normalize the session's records.
    ///
    /// Only the first call does any work; later calls get [`Error::AlreadyFetched`].
    pub async fn load(&self) -> Result<Vec<WorkflowItem>> {
        if self.started.swap(true, Ordering::SeqCst) {
            return Err(Error::AlreadyFetched);
        }

        let payload = self.source.fetch(WORKFLOW_COUNT).await.inspect_err(|err| {
            tracing::error!(source = %self.source.describe(), error = %err, "error fetching workflows");
        })?;

        let items = normalize_payload(unwrap_envelope(&payload), Utc::now());
        tracing::info!(count = items.len(), source = %self.source.describe(), "workflows loaded");
        Ok(items)
    }

    /// Run [`load`](Self::load) on a private current-thread runtime
    pub fn load_blocking(&self) -> Result<Vec<WorkflowItem>> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(self.load())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    struct StaticSource(Value);

    impl WorkflowSource for StaticSource {
        fn describe(&self) -> String {
            "static".to_string()
        }

        async fn fetch(&self, count: u32) -> Result<Value> {
            assert_eq!(count, WORKFLOW_COUNT);
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl WorkflowSource for FailingSource {
        fn describe(&self) -> String {
            "failing".to_string()
        }

        async fn fetch(&self, _count: u32) -> Result<Value> {
            Err(Error::Api {
                status: 401,
                body: "bad hash".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_load_unwraps_envelope() {
        let loader = WorkflowLoader::new(StaticSource(json!({
            "data": [{ "type": "Agent", "name": "one", "id": 1, "lastUpdated": 5 }]
        })));

        let items = loader.load().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "one");
    }

    #[tokio::test]
    async fn test_second_load_is_rejected() {
        let loader = WorkflowLoader::new(StaticSource(json!([])));

        assert!(loader.load().await.unwrap().is_empty());
        assert!(matches!(loader.load().await, Err(Error::AlreadyFetched)));
    }

    #[test]
    fn test_failure_becomes_terminal_state() {
        let loader = WorkflowLoader::new(FailingSource);
        let state = FetchState::from_result(loader.load_blocking());

        assert_eq!(
            state,
            FetchState::Failed("AirOps API returned 401: bad hash".to_string())
        );
    }
}
