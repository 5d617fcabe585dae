use std::path::{Path, PathBuf};

use crate::config::{MediaEntry, MediaSource};

/// What the media screen can tell about a configured video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaStatus {
    LocalAvailable,
    LocalMissing,
    Remote,
}

impl MediaStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MediaStatus::LocalAvailable => "file tersedia",
            MediaStatus::LocalMissing => "file tidak ditemukan",
            MediaStatus::Remote => "tautan",
        }
    }
}

/// Relative paths are taken from the workspace root.
pub fn resolve_local(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

pub fn media_status(entry: &MediaEntry, root: &Path) -> MediaStatus {
    match &entry.source {
        MediaSource::Local(path) => {
            if resolve_local(root, path).is_file() {
                MediaStatus::LocalAvailable
            } else {
                MediaStatus::LocalMissing
            }
        }
        MediaSource::Remote(_) => MediaStatus::Remote,
    }
}

pub fn location(entry: &MediaEntry) -> String {
    match &entry.source {
        MediaSource::Local(path) => path.display().to_string(),
        MediaSource::Remote(url) => url.clone(),
    }
}
