use tracing::{debug, error, info};

use crate::services::country_client::CountrySource;
use crate::types::browser_state::{BrowserState, FetchOutcome, FetchTicket, Selection};
use crate::types::country::Country;
use crate::types::errors::{FetchError, SearchMiss};

/// Trait defining the country browser state transitions.
pub trait CountryBrowserTrait {
    fn begin_fetch(&mut self) -> FetchTicket;
    fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Country>, FetchError>,
    ) -> FetchOutcome;
    fn set_search_input(&mut self, text: &str);
    fn search_country(&mut self, input_text: &str) -> Result<Country, SearchMiss>;
    fn submit_search(&mut self) -> Result<Country, SearchMiss>;
    fn state(&self) -> &BrowserState;
}

/// Owns the UI state and applies every transition to it.
///
/// Fetches are split in two halves so the network call can run elsewhere:
/// `begin_fetch` hands out a ticket and `complete_fetch` applies the result.
/// A completion older than the newest applied one is dropped, so the most
/// recently issued request that finished wins.
pub struct CountryBrowser {
    state: BrowserState,
    last_issued: u64,
    last_applied: u64,
}

impl CountryBrowser {
    pub fn new() -> Self {
        Self {
            state: BrowserState::default(),
            last_issued: 0,
            last_applied: 0,
        }
    }

    /// Issues one request through `source` and applies its result.
    pub async fn fetch_all_countries<S: CountrySource>(&mut self, source: &S) -> FetchOutcome {
        let ticket = self.begin_fetch();
        let result = source.fetch_countries().await;
        self.complete_fetch(ticket, result)
    }

    fn find_country(&self, query: &str) -> Option<&Country> {
        self.state.countries.iter().find(|c| c.name_matches(query))
    }
}

impl Default for CountryBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryBrowserTrait for CountryBrowser {
    fn begin_fetch(&mut self) -> FetchTicket {
        self.last_issued += 1;
        debug!(ticket = self.last_issued, "fetch issued");
        FetchTicket(self.last_issued)
    }

    fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Country>, FetchError>,
    ) -> FetchOutcome {
        if ticket.0 < self.last_applied {
            debug!(ticket = ticket.0, applied = self.last_applied, "dropping stale fetch result");
            return FetchOutcome::Stale;
        }

        match result {
            Ok(mut countries) => {
                // Stable: equal populations keep response order.
                countries.sort_by_key(|c| c.population);
                let count = countries.len();
                self.state.countries = countries;
                self.last_applied = ticket.0;
                info!(ticket = ticket.0, count, "country list replaced");
                FetchOutcome::Applied { count }
            }
            Err(e) => {
                error!(ticket = ticket.0, error = %e, "failed to fetch countries");
                FetchOutcome::Failed
            }
        }
    }

    fn set_search_input(&mut self, text: &str) {
        self.state.search_input = text.to_string();
    }

    fn search_country(&mut self, input_text: &str) -> Result<Country, SearchMiss> {
        self.state.search_input.clear();

        match self.find_country(input_text).cloned() {
            Some(country) => {
                debug!(query = input_text, "search hit");
                self.state.error_message.clear();
                self.state.selection = Selection::Country(country.clone());
                Ok(country)
            }
            None => {
                debug!(query = input_text, "search miss");
                let miss = SearchMiss {
                    query: input_text.to_string(),
                };
                self.state.selection = Selection::NotFound;
                self.state.error_message = miss.to_string();
                Err(miss)
            }
        }
    }

    fn submit_search(&mut self) -> Result<Country, SearchMiss> {
        let input = std::mem::take(&mut self.state.search_input);
        self.search_country(&input)
    }

    fn state(&self) -> &BrowserState {
        &self.state
    }
}
