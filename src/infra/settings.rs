use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// User preferences persisted across runs. Everything here has a working
/// default so a missing or unreadable settings file never blocks startup.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Settings {
    pub wrap_around: bool,
    pub follow_logs: bool,
    pub theme: ThemeChoice,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wrap_around: true,
            follow_logs: true,
            theme: ThemeChoice::Dark,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadSettingsError {
    #[error("failed to read settings: {0}")]
    Read(#[from] io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SaveSettingsError {
    #[error("failed to encode settings: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write settings: {0}")]
    Write(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum ResolveStateDirError {
    #[error("could not determine a state directory for this platform")]
    NoBaseDir,
}

pub fn resolve_state_dir() -> Result<PathBuf, ResolveStateDirError> {
    if let Ok(dir) = std::env::var("OPSDECK_STATE_DIR") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    dirs::data_dir()
        .map(|base| base.join("opsdeck"))
        .ok_or(ResolveStateDirError::NoBaseDir)
}

fn settings_path(state_dir: &Path) -> PathBuf {
    state_dir.join("settings.json")
}

pub fn load_settings(state_dir: &Path) -> Result<Settings, LoadSettingsError> {
    let path = settings_path(state_dir);
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            return Ok(Settings::default());
        }
        Err(error) => return Err(error.into()),
    };

    let file: SettingsFile = serde_json::from_str(&raw)?;
    Ok(file.settings)
}

pub fn save_settings(state_dir: &Path, settings: &Settings) -> Result<(), SaveSettingsError> {
    fs::create_dir_all(state_dir)?;

    let path = settings_path(state_dir);
    let tmp = path.with_extension("json.tmp");
    let file = SettingsFile {
        version: 1,
        settings: *settings,
    };
    let text = serde_json::to_string_pretty(&file)?;
    fs::write(&tmp, text)?;
    fs::rename(tmp, path)?;
    Ok(())
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
struct SettingsFile {
    version: u32,
    settings: Settings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().expect("tempdir");
        let settings = load_settings(dir.path()).expect("load");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn round_trips_settings() {
        let dir = tempdir().expect("tempdir");
        let settings = Settings {
            wrap_around: false,
            follow_logs: true,
            theme: ThemeChoice::Light,
        };
        save_settings(dir.path(), &settings).expect("save");

        let loaded = load_settings(dir.path()).expect("load");
        assert_eq!(loaded, settings);
    }

    #[test]
    fn corrupt_file_is_a_parse_error_not_a_panic() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join("settings.json"), "{not json").expect("write");
        assert!(matches!(
            load_settings(dir.path()),
            Err(LoadSettingsError::Parse(_))
        ));
    }
}
