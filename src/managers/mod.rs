// CountryBrowser state managers
// Managers own in-memory state and the transitions applied to it.

pub mod country_browser;
