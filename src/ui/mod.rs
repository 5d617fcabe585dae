pub mod components;
pub mod screens;

pub use components::TerminalGuard;
pub use screens::{
    run_about, run_charts, run_fetch_progress, run_form, run_main_menu, run_media, run_order,
    run_table_view, run_upload_picker, run_welcome, show_notice, MenuAction, NoticeKind,
    TableView, UploadPicker,
};
