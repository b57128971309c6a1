pub mod dialog_utils;
pub mod empty_state;
pub mod footer;
pub mod header;
pub mod logo;
pub mod tabs;
pub mod task_form;
pub mod task_list;
pub mod theme_selector;
pub mod toast;
