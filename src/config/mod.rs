use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub mod loader;
pub mod validator;

pub use loader::{load_config, ConfigOverrides, CONFIG_FILE_NAME};
pub use validator::validate_config;

/// Public endpoint returning the sample user directory.
pub const DEFAULT_USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Extensions the upload picker advertises. PDF is advertised but has no parser.
pub const DEFAULT_ACCEPTED_EXTENSIONS: &[&str] = &["xlsx", "xls", "csv", "pdf"];

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub users_endpoint: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathsConfig {
    pub uploads_dir: PathBuf,
    pub logs_dir: PathBuf,
    pub log_file_name: String,
}

impl PathsConfig {
    pub fn log_file(&self) -> PathBuf {
        self.logs_dir.join(&self.log_file_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaSource {
    Local(PathBuf),
    Remote(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaEntry {
    pub label: String,
    pub source: MediaSource,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    pub paths: PathsConfig,
    pub accepted_extensions: Vec<String>,
    pub media: Vec<MediaEntry>,
    pub matrix_seed: u64,
}

impl Config {
    pub fn builtin() -> Self {
        Self {
            api: ApiConfig {
                users_endpoint: DEFAULT_USERS_ENDPOINT.to_string(),
                timeout_secs: 10,
            },
            paths: PathsConfig {
                uploads_dir: PathBuf::from("assets/uploads"),
                logs_dir: PathBuf::from("assets/logs"),
                log_file_name: "showcase.log".to_string(),
            },
            accepted_extensions: DEFAULT_ACCEPTED_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
            media: vec![
                MediaEntry {
                    label: "Video promosi (lokal)".to_string(),
                    source: MediaSource::Local(PathBuf::from("assets/media/promosi.mp4")),
                },
                MediaEntry {
                    label: "Video promosi (YouTube)".to_string(),
                    source: MediaSource::Remote(
                        "https://youtu.be/oejoowV-cek?si=gmSZtzjykN1emakh".to_string(),
                    ),
                },
            ],
            matrix_seed: 42,
        }
    }
}
