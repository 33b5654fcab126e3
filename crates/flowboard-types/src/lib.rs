pub mod view;
pub mod workflow;

pub use view::{ModalContent, SortColumn, SortDirection};
pub use workflow::{DEFAULT_TAG_COLOR, NO_NAME, Tag, WorkflowItem};
