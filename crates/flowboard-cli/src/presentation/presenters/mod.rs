pub mod dashboard;
pub mod list;

pub use dashboard::{
    present_delete_modal, present_edit_modal, present_header, present_pagination, present_row,
    present_status_bar, present_table, present_tags_badge,
};
pub use list::{present_hashed_user_id, present_list};
