use serde::Deserialize;
use std::{env, fs, io, path::PathBuf};
use thiserror::Error;

const SETTINGS_FILENAME: &str = "settings.json";
const SETTINGS_PATH_VAR: &str = "ORGANIZER_SETTINGS";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tcp_socket_binding: String,
    pub tcp_socket_port: u16,
    /// redb file backing the task table. `None` keeps tasks in memory.
    pub database_path: Option<String>,
    pub log_filter: String,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot parse settings file {path}: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tcp_socket_binding: "0.0.0.0".to_string(),
            tcp_socket_port: 3000,
            database_path: None,
            log_filter: "organizer_server=debug,tower_http=debug,info".to_string(),
        }
    }
}

impl Settings {
    /// Loads `settings.json` (or `$ORGANIZER_SETTINGS`).
    /// A missing file yields `Ok(None)` so the caller can fall back to defaults.
    pub fn load() -> Result<Option<Settings>, SettingsError> {
        let path = env::var(SETTINGS_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(SETTINGS_FILENAME));
        Self::load_from(path)
    }

    pub fn load_from(path: PathBuf) -> Result<Option<Settings>, SettingsError> {
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(SettingsError::Read { path, source }),
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| SettingsError::Parse { path, source })
    }

    pub fn socket_address(&self) -> String {
        format!("{}:{}", self.tcp_socket_binding, self.tcp_socket_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings(name: &str, content: &str) -> PathBuf {
        let path = PathBuf::from(format!("/tmp/organizer_settings_{name}_{}.json", std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let path = PathBuf::from("/tmp/organizer_settings_definitely_absent.json");
        assert_eq!(Settings::load_from(path).unwrap(), None);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let path = temp_settings("partial", r#"{ "tcp_socket_port": 8080 }"#);

        let settings = Settings::load_from(path.clone()).unwrap().unwrap();
        assert_eq!(settings.tcp_socket_port, 8080);
        assert_eq!(settings.tcp_socket_binding, "0.0.0.0");
        assert_eq!(settings.database_path, None);
        assert_eq!(settings.socket_address(), "0.0.0.0:8080");

        let _ = fs::remove_file(path);
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let path = temp_settings("garbage", "not json");

        let result = Settings::load_from(path.clone());
        assert!(matches!(result, Err(SettingsError::Parse { .. })));

        let _ = fs::remove_file(path);
    }
}
