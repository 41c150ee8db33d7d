use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "https://localhost:7293/api/PhoneBookConroller";
pub const SETTINGS_FILE: &str = "phonebook.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub api_url: String,
    pub accept_invalid_certs: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            accept_invalid_certs: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    api_url: Option<String>,
    accept_invalid_certs: Option<bool>,
}

/// Defaults, then `phonebook.toml` in the working directory, then environment.
pub fn load_settings() -> ClientSettings {
    load_settings_from(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok())
}

pub fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> ClientSettings {
    let mut settings = ClientSettings::default();

    match read_settings_file(path) {
        Ok(Some(file_cfg)) => {
            if let Some(v) = file_cfg.api_url {
                settings.api_url = v;
            }
            if let Some(v) = file_cfg.accept_invalid_certs {
                settings.accept_invalid_certs = v;
            }
        }
        Ok(None) => {}
        Err(err) => tracing::warn!("ignoring settings file: {err:#}"),
    }

    for name in ["PHONEBOOK_API_URL", "APP__API_URL"] {
        if let Some(v) = env(name).filter(|v| !v.trim().is_empty()) {
            settings.api_url = v;
        }
    }

    for name in ["PHONEBOOK_ACCEPT_INVALID_CERTS", "APP__ACCEPT_INVALID_CERTS"] {
        if let Some(v) = env(name) {
            match parse_flag(&v) {
                Some(flag) => settings.accept_invalid_certs = flag,
                None => tracing::warn!(var = name, value = %v, "ignoring unparseable flag"),
            }
        }
    }

    settings
}

fn read_settings_file(path: &Path) -> anyhow::Result<Option<SettingsFile>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    let parsed = toml::from_str::<SettingsFile>(&raw)
        .with_context(|| format!("failed to parse '{}'", path.display()))?;
    Ok(Some(parsed))
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
