use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;
use serde::Deserialize;

use crate::error::{Context, Result};

use super::{validator, Config, MediaEntry};

/// File name of the optional JSON overrides under `assets/configs`.
pub const CONFIG_FILE_NAME: &str = "showcase.json";

/// Partial configuration read from disk; every field falls back to the builtin value.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    pub users_endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub uploads_dir: Option<PathBuf>,
    pub logs_dir: Option<PathBuf>,
    pub log_file_name: Option<String>,
    pub accepted_extensions: Option<Vec<String>>,
    pub media: Option<Vec<MediaEntry>>,
    pub matrix_seed: Option<u64>,
}

impl ConfigOverrides {
    /// Merge onto `base`. Relative paths are resolved against `root`.
    pub fn apply(self, mut base: Config, root: &Path) -> Config {
        if let Some(endpoint) = self.users_endpoint {
            base.api.users_endpoint = endpoint.trim().to_string();
        }
        if let Some(timeout) = self.timeout_secs {
            base.api.timeout_secs = timeout;
        }
        if let Some(dir) = self.uploads_dir {
            base.paths.uploads_dir = dir;
        }
        if let Some(dir) = self.logs_dir {
            base.paths.logs_dir = dir;
        }
        if let Some(name) = self.log_file_name {
            base.paths.log_file_name = name;
        }
        if let Some(extensions) = self.accepted_extensions {
            base.accepted_extensions = extensions
                .into_iter()
                .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
                .collect();
        }
        if let Some(media) = self.media {
            base.media = media;
        }
        if let Some(seed) = self.matrix_seed {
            base.matrix_seed = seed;
        }

        base.paths.uploads_dir = resolve(root, &base.paths.uploads_dir);
        base.paths.logs_dir = resolve(root, &base.paths.logs_dir);
        base
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join("assets").join("configs").join(CONFIG_FILE_NAME)
}

/// Build the runtime configuration: builtin defaults, then `assets/configs/showcase.json`
/// when present, then validation.
pub fn load_config(root: &Path) -> Result<Config> {
    let path = config_path(root);
    let overrides = if path.exists() {
        let json = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config JSON at {}", path.display()))?;
        let parsed: ConfigOverrides = serde_json::from_str(&json)
            .with_context(|| format!("failed to parse config JSON at {}", path.display()))?;
        info!("Loaded configuration overrides from {}", path.display());
        parsed
    } else {
        ConfigOverrides::default()
    };

    let config = overrides.apply(Config::builtin(), root);
    validator::validate_config(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MediaSource;

    fn scratch_root(tag: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!(
            "data-showcase-config-{}-{}",
            tag,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("assets").join("configs")).expect("create scratch dirs");
        root
    }

    #[test]
    fn missing_file_yields_builtin_defaults() {
        let root = scratch_root("missing");
        let config = load_config(&root).expect("builtin config is valid");
        assert_eq!(
            config.api.users_endpoint,
            crate::config::DEFAULT_USERS_ENDPOINT
        );
        assert_eq!(config.paths.uploads_dir, root.join("assets/uploads"));
    }

    #[test]
    fn overrides_replace_only_provided_fields() {
        let root = scratch_root("partial");
        fs::write(
            config_path(&root),
            r#"{
                "timeout_secs": 3,
                "accepted_extensions": [".CSV", "xlsx"],
                "media": [{"label": "clip", "source": {"remote": "https://example.com/v.mp4"}}]
            }"#,
        )
        .expect("write overrides");

        let config = load_config(&root).expect("overrides are valid");
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.accepted_extensions, vec!["csv", "xlsx"]);
        assert_eq!(
            config.media[0].source,
            MediaSource::Remote("https://example.com/v.mp4".to_string())
        );
        assert_eq!(config.matrix_seed, Config::builtin().matrix_seed);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let root = scratch_root("unknown");
        fs::write(config_path(&root), r#"{"video_path": "c:/videos/x.mp4"}"#)
            .expect("write overrides");
        let err = load_config(&root).expect_err("unknown key should fail");
        assert!(err.to_string().contains("failed to parse config JSON"));
    }

    #[test]
    fn shipped_config_is_valid() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let config = load_config(root).expect("shipped config loads");
        assert!(!config.media.is_empty());
    }
}
