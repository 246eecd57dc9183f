// CountryBrowser Settings Engine
// Reads `settings.json` once at startup. The file is never written; when it
// is absent every section takes its defaults.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::BrowserSettings;

pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<BrowserSettings, SettingsError>;
    fn get_settings(&self) -> &BrowserSettings;
    fn get_config_path(&self) -> &str;
}

pub struct SettingsEngine {
    config_path: String,
    settings: BrowserSettings,
}

impl SettingsEngine {
    /// `path_override` replaces `<config dir>/settings.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = path_override.unwrap_or_else(|| {
            default_config_file().to_string_lossy().into_owned()
        });
        Self {
            config_path,
            settings: BrowserSettings::default(),
        }
    }

    /// File contents, or `None` when there is no file to read.
    fn read_config(&self) -> Result<Option<String>, SettingsError> {
        match fs::read_to_string(&self.config_path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SettingsError::IoError(format!(
                "cannot read {}: {}",
                self.config_path, e
            ))),
        }
    }
}

fn default_config_file() -> PathBuf {
    platform::get_config_dir().join("settings.json")
}

impl SettingsEngineTrait for SettingsEngine {
    /// Missing file: defaults. Unreadable or malformed file: error.
    fn load(&mut self) -> Result<BrowserSettings, SettingsError> {
        self.settings = match self.read_config()? {
            None => {
                debug!(path = %self.config_path, "no settings file, using defaults");
                BrowserSettings::default()
            }
            Some(text) => {
                let parsed = serde_json::from_str::<BrowserSettings>(&text).map_err(|e| {
                    SettingsError::SerializationError(format!(
                        "invalid settings in {}: {}",
                        self.config_path, e
                    ))
                })?;
                info!(path = %self.config_path, "settings loaded");
                parsed
            }
        };
        Ok(self.settings.clone())
    }

    fn get_settings(&self) -> &BrowserSettings {
        &self.settings
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
