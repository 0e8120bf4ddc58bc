use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Command used to open dashboard URLs. Unset means the platform
    /// opener (xdg-open, open, or cmd start).
    #[serde(default)]
    pub browser: Option<String>,
}

/// Read the config file, falling back to defaults on any failure. A
/// missing or malformed file never blocks startup.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    toml::from_str::<Config>(&content).unwrap_or_default()
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("PORTADA_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("portada").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("portada").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "portada", "portada")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("portada"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("portada"));
    }
    directories::ProjectDirs::from("io", "portada", "portada")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

/// Where the interactive session writes its diagnostics.
pub fn log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("portada.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_key_parses() {
        let config: Config = toml::from_str("browser = \"firefox\"").unwrap();
        assert_eq!(config.browser.as_deref(), Some("firefox"));
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.browser.is_none());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config: Config = toml::from_str("theme = \"dark\"\n").unwrap();
        assert!(config.browser.is_none());
    }
}
