use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use flowboard_types::{SortColumn, SortDirection};

use super::Source;
use crate::presentation::presenters::present_list;
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;

#[derive(Debug, Clone)]
pub struct ListOptions {
    pub query: String,
    pub sort: Option<SortColumn>,
    pub desc: bool,
    pub page: usize,
    pub input: Option<PathBuf>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort: None,
            desc: false,
            page: 1,
            input: None,
        }
    }
}

pub fn handle(data_dir: &Path, options: ListOptions, format: OutputFormat) -> Result<()> {
    let source = Source::resolve(data_dir, options.input.as_deref())
        .context("failed to configure workflow source")?;
    let description = source.describe();
    let items = source
        .load_blocking()
        .with_context(|| format!("failed to load workflows from {}", description))?;

    let direction = if options.desc {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    };

    let result = present_list(
        &items,
        &options.query,
        options.sort,
        direction,
        options.page,
        &Local::now(),
    );

    ConsoleRenderer::for_format(format).render(result)
}
