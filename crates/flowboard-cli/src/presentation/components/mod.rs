//! TUI Components
//!
//! Components own UI state and input handling, and hand view models to the
//! views for drawing. The renderer only routes terminal events to the page
//! component.
//!
//! ## Pattern:
//! ```rust,ignore
//! pub struct FooComponent {
//!     state: SomeState,
//! }
//!
//! impl FooComponent {
//!     pub fn handle_input(&mut self, key: KeyEvent) -> Option<FooAction> { ... }
//!     pub fn render(&mut self, f: &mut Frame, area: Rect) { ... }
//! }
//! ```

pub mod dashboard;
pub mod edit_form;
pub mod search;

pub use dashboard::{DashboardAction, DashboardComponent};
pub use edit_form::{EditFormComponent, FormAction};
pub use search::{SearchAction, SearchComponent};
