use serde::Deserialize;

/// Fields requested from the countries endpoint.
pub const COUNTRY_FIELDS: [&str; 8] = [
    "flags",
    "name",
    "population",
    "region",
    "capital",
    "subregion",
    "borders",
    "tld",
];

/// Top-level settings container, stored as `settings.json`.
///
/// Every section is optional in the file; missing sections and keys fall
/// back to their defaults.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct BrowserSettings {
    pub api: ApiSettings,
    pub window: WindowSettings,
    pub logging: LoggingSettings,
}

/// Outbound countries API.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiSettings {
    pub base_url: String,
    /// Whole-request timeout. `None` leaves it to the transport.
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://restcountries.com/v3.1/all".to_string(),
            timeout_secs: None,
            user_agent: format!("countrybrowser/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ApiSettings {
    /// Value of the `fields` query parameter. Not configurable: the record
    /// types only model these fields.
    pub fn fields_param() -> String {
        COUNTRY_FIELDS.join(",")
    }
}

/// Main window geometry and title.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub devtools: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Worlds Regions".to_string(),
            width: 1280.0,
            height: 800.0,
            devtools: cfg!(debug_assertions),
        }
    }
}

/// Logging configuration. `RUST_LOG` takes precedence over `filter`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}
