//! App Core for CountryBrowser.
//!
//! Holds the settings, the countries client and the browser state.

use crate::managers::country_browser::CountryBrowser;
use crate::services::country_client::RestCountriesClient;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::AppError;
use crate::types::settings::BrowserSettings;

/// Central application struct.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub client: RestCountriesClient,
    pub browser: CountryBrowser,
}

impl App {
    /// Loads settings (defaults when the file is missing) and builds the client.
    ///
    /// A malformed settings file is an error rather than a silent fallback.
    pub fn new(config_path: Option<String>) -> Result<Self, AppError> {
        let mut settings_engine = SettingsEngine::new(config_path);
        let settings = settings_engine.load()?;
        let client = RestCountriesClient::new(&settings.api)?;

        Ok(Self {
            settings_engine,
            client,
            browser: CountryBrowser::new(),
        })
    }

    pub fn settings(&self) -> &BrowserSettings {
        self.settings_engine.get_settings()
    }
}
