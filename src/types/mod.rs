// CountryBrowser shared type definitions
// Each submodule defines types used across the application.

pub mod browser_state;
pub mod country;
pub mod errors;
pub mod settings;
