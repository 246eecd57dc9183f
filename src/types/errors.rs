use thiserror::Error;

// === FetchError ===

/// Failure of a single attempt to load the country list.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    #[error("Country fetch network error: {0}")]
    Network(String),
    /// The API answered with a non-success status code.
    #[error("Country fetch returned HTTP {0}")]
    Status(u16),
    /// The body was not a JSON array of country records.
    #[error("Country fetch parse error: {0}")]
    Parse(String),
}

// === SearchMiss ===

/// No loaded country matched the search text.
///
/// The `Display` output is the message shown to the user and embeds the raw,
/// non-case-folded query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{query} doesn't exist. Try again.")]
pub struct SearchMiss {
    pub query: String,
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
}

// === AppError ===

/// Startup failures.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// The HTTP client could not be constructed.
    #[error("HTTP client init failed: {0}")]
    HttpClient(String),
    /// The async runtime could not be started.
    #[error("Runtime init failed: {0}")]
    Runtime(String),
    /// Window or webview creation failed.
    #[error("UI init failed: {0}")]
    Ui(String),
    #[error("Console I/O error: {0}")]
    Console(#[from] std::io::Error),
}
