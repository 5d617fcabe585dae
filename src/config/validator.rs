use crate::error::{AppError, Result};

use super::{Config, MediaSource};

/// Extensions the upload layer knows about, parsable or not.
const KNOWN_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "xlsb", "ods", "csv", "pdf"];

/// Validate a configuration and surface every issue in one message.
pub fn validate_config(config: &Config) -> Result<()> {
    let mut issues = Vec::new();

    validate_api(config, &mut issues);
    validate_paths(config, &mut issues);
    validate_extensions(config, &mut issues);
    validate_media(config, &mut issues);

    if issues.is_empty() {
        Ok(())
    } else {
        Err(AppError::message(format!(
            "configuration invalid:\n  - {}",
            issues.join("\n  - ")
        )))
    }
}

fn validate_api(config: &Config, issues: &mut Vec<String>) {
    let endpoint = config.api.users_endpoint.trim();
    if endpoint.is_empty() {
        issues.push("users_endpoint must not be empty".to_string());
    } else if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
        issues.push(format!(
            "users_endpoint `{endpoint}` must start with http:// or https://"
        ));
    }

    if config.api.timeout_secs == 0 {
        issues.push("timeout_secs must be at least 1".to_string());
    }
}

fn validate_paths(config: &Config, issues: &mut Vec<String>) {
    if config.paths.log_file_name.trim().is_empty() {
        issues.push("log_file_name must not be empty".to_string());
    }
    if config.paths.uploads_dir.as_os_str().is_empty() {
        issues.push("uploads_dir must not be empty".to_string());
    }
}

fn validate_extensions(config: &Config, issues: &mut Vec<String>) {
    if config.accepted_extensions.is_empty() {
        issues.push("accepted_extensions must list at least one type".to_string());
    }

    for ext in &config.accepted_extensions {
        if !KNOWN_EXTENSIONS.contains(&ext.as_str()) {
            issues.push(format!("accepted extension `{ext}` is not a known file type"));
        }
    }
}

fn validate_media(config: &Config, issues: &mut Vec<String>) {
    for (idx, entry) in config.media.iter().enumerate() {
        if entry.label.trim().is_empty() {
            issues.push(format!("media[{idx}] label must not be empty"));
        }
        match &entry.source {
            MediaSource::Local(path) if path.as_os_str().is_empty() => {
                issues.push(format!("media[{idx}] local path must not be empty"));
            }
            MediaSource::Remote(url)
                if !(url.starts_with("http://") || url.starts_with("https://")) =>
            {
                issues.push(format!("media[{idx}] remote url `{url}` is not http(s)"));
            }
            _ => {}
        }
    }
}
