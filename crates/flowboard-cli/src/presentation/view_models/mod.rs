pub mod common;
pub mod dashboard;
pub mod list;
pub mod result;

pub use common::{Guidance, StatusBadge, StatusLevel};
pub use dashboard::{
    BodyViewModel, DashboardViewModel, DeleteModalViewModel, EditModalViewModel,
    FocusViewModel, HeaderViewModel, ModalViewModel, PaginationViewModel, RowActions,
    RowViewModel, SearchBarViewModel, StatusBarViewModel, TableViewModel, TagFieldViewModel,
    TagsBadgeViewModel,
};
pub use list::{HashedUserIdViewModel, ListRowViewModel, ListViewModel};
pub use result::CommandResultViewModel;
