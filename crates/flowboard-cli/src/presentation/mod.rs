//! # Presentation Layer
//!
//! Everything the user sees, for both the interactive dashboard and the
//! console commands. Data flows one way:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ View / Renderer ] --> [ Output ]
//! ```
//!
//! - `view_models/`: plain data the views draw; console ones are `Serialize`
//!   so `--format json` prints them as-is.
//! - `presenters/`: pure functions from engine state to view models (tag badge
//!   labels, row actions, pagination summary).
//! - `formatters/`: small string helpers such as the relative date label.
//! - `views/`: `Display` impls for the console and ratatui `Widget`s for the TUI.
//! - `components/`: TUI state plus key handling; the dashboard page lives here.
//! - `renderers/`: the console renderer and the TUI event loop.

pub mod components;
pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiEvent, TuiRenderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
