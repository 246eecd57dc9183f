use super::country::Country;

/// What the detail panel currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection {
    /// Initial state; nothing has been searched yet.
    #[default]
    Nothing,
    /// The last search missed.
    NotFound,
    Country(Country),
}

impl Selection {
    pub fn country(&self) -> Option<&Country> {
        match self {
            Selection::Country(c) => Some(c),
            _ => None,
        }
    }
}

/// The whole UI state, owned by `CountryBrowser`.
#[derive(Debug, Clone, Default)]
pub struct BrowserState {
    /// Sorted ascending by population. Empty until the first successful fetch.
    pub countries: Vec<Country>,
    pub selection: Selection,
    pub search_input: String,
    /// Empty when there is nothing to report.
    pub error_message: String,
}

impl BrowserState {
    /// The load trigger is offered only while nothing is loaded.
    pub fn show_load_trigger(&self) -> bool {
        self.countries.is_empty()
    }
}

/// Sequence number of a fetch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(pub u64);

/// How a fetch completion was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The list was replaced with `count` countries.
    Applied { count: usize },
    /// The fetch failed; the list was left as it was.
    Failed,
    /// A newer fetch had already been applied; this result was dropped.
    Stale,
}
