pub mod about;
pub mod charts;
pub mod fetch_progress;
pub mod form;
pub mod main_menu;
pub mod media;
pub mod message;
pub mod order;
pub mod table_view;
pub mod upload_picker;
pub mod welcome;

pub use about::run_about;
pub use charts::run_charts;
pub use fetch_progress::run_fetch_progress;
pub use form::run_form;
pub use main_menu::{run_main_menu, MenuAction};
pub use media::run_media;
pub use message::{show_notice, NoticeKind};
pub use order::run_order;
pub use table_view::{run_table_view, TableView};
pub use upload_picker::{run_upload_picker, UploadPicker};
pub use welcome::run_welcome;
