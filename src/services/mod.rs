// CountryBrowser services
// Services talk to the outside world: the countries API and the settings file.

pub mod country_client;
pub mod settings_engine;
