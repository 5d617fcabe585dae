pub mod file;
pub mod text;
pub mod time;

pub use file::{list_files_with_extensions, FileEntry};
pub use text::{format_rupiah, format_thousands, truncate_to_width};
pub use time::format_file_modified;
