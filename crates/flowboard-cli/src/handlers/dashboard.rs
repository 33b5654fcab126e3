use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use anyhow::Result;
use flowboard_runtime::FetchState;
use is_terminal::IsTerminal;

use super::Source;
use super::list::{self, ListOptions};
use crate::presentation::{TuiEvent, TuiRenderer};
use crate::types::OutputFormat;

pub fn handle(data_dir: &Path, input: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    // Piped output gets the first page instead of a full-screen UI
    if !std::io::stdout().is_terminal() {
        return list::handle(
            data_dir,
            ListOptions {
                input,
                ..ListOptions::default()
            },
            format,
        );
    }

    let label = match &input {
        Some(path) => path.display().to_string(),
        None => "AirOps".to_string(),
    };

    let (tx, rx) = mpsc::channel();
    let data_dir = data_dir.to_path_buf();

    // Configuration problems surface in the error panel like any fetch failure
    thread::spawn(move || {
        let result = Source::resolve(&data_dir, input.as_deref()).and_then(|source| {
            tracing::info!(source = %source.describe(), "fetching workflows");
            source.load_blocking()
        });
        let _ = tx.send(TuiEvent::Fetched(FetchState::from_result(result)));
    });

    TuiRenderer::new(label).run(rx)
}
