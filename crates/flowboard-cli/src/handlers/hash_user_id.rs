use std::path::Path;

use anyhow::{Context, Result};
use flowboard_runtime::{Config, EnvLookup, hash_user_id};

use crate::presentation::presenters::present_hashed_user_id;
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;

pub fn handle(data_dir: &Path, format: OutputFormat) -> Result<()> {
    let env = EnvLookup::from_environment()?;
    let (api_key, user_id) = Config::resolve(data_dir, &env)?.signing_inputs()?;

    let hashed = hash_user_id(&api_key, &user_id).context("failed to sign user id")?;
    tracing::debug!(%user_id, "derived hashed user id");

    ConsoleRenderer::for_format(format).render(present_hashed_user_id(user_id, hashed))
}
