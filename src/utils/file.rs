use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Metadata for a file entry surfaced to the UI pickers.
#[derive(Clone, Debug)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub modified: SystemTime,
    pub size: u64,
}

/// List files in `dir` whose extension (case-insensitive) is in `extensions`, newest first.
pub fn list_files_with_extensions<S: AsRef<str>>(
    dir: impl AsRef<Path>,
    extensions: &[S],
) -> Vec<FileEntry> {
    let mut entries = Vec::new();
    let dir_path = dir.as_ref();

    if let Ok(read_dir) = fs::read_dir(dir_path) {
        for entry in read_dir.flatten() {
            let path = entry.path();
            let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
                continue;
            };
            if !extensions
                .iter()
                .any(|wanted| wanted.as_ref().eq_ignore_ascii_case(ext))
            {
                continue;
            }

            let metadata = match entry.metadata() {
                Ok(meta) if meta.is_file() => meta,
                _ => continue,
            };

            let modified = metadata.modified().unwrap_or(UNIX_EPOCH);
            let size = metadata.len();
            let Some(name) = path
                .file_name()
                .and_then(|segment| segment.to_str())
                .map(|s| s.to_string())
            else {
                continue;
            };

            entries.push(FileEntry {
                name,
                path,
                modified,
                size,
            });
        }
    }

    entries.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.name.cmp(&b.name)));
    entries
}
