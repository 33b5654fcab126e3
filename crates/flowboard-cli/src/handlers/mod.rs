pub mod dashboard;
pub mod hash_user_id;
pub mod list;

use std::path::Path;

use flowboard_runtime::{
    AirOpsClient, Config, EnvLookup, FileSource, WorkflowLoader, WorkflowSource,
};
use flowboard_types::WorkflowItem;

/// Where the session's records come from
pub(crate) enum Source {
    File(FileSource),
    Api(AirOpsClient),
}

impl Source {
    /// `--input` wins; otherwise credentials are resolved from the environment,
    /// `.env` and `config.toml` in the data directory
    pub(crate) fn resolve(data_dir: &Path, input: Option<&Path>) -> flowboard_runtime::Result<Self> {
        if let Some(path) = input {
            return Ok(Source::File(FileSource::new(path)));
        }

        let env = EnvLookup::from_environment()?;
        let credentials = Config::resolve(data_dir, &env)?.credentials()?;
        Ok(Source::Api(AirOpsClient::new(credentials)?))
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Source::File(source) => source.describe(),
            Source::Api(source) => source.describe(),
        }
    }

    /// One-shot fetch on a private runtime
    pub(crate) fn load_blocking(self) -> flowboard_runtime::Result<Vec<WorkflowItem>> {
        match self {
            Source::File(source) => WorkflowLoader::new(source).load_blocking(),
            Source::Api(source) => WorkflowLoader::new(source).load_blocking(),
        }
    }
}
