pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod loader;

pub use auth::hash_user_id;
pub use client::{AirOpsClient, FileSource, WORKFLOW_COUNT, WorkflowSource, extract_output};
pub use config::{ApiConfig, Config, Credentials, EnvLookup, resolve_workspace_path};
pub use error::{Error, Result};
pub use loader::{FetchState, WorkflowLoader};
