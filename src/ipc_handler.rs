//! IPC message handler for the country browser page.
//!
//! Kept outside the `gui` feature so it can be unit-tested without a window.
//! The page posts one JSON object per event:
//!
//! ```text
//! {"cmd":"ui_ready"}
//! {"cmd":"show_all"}
//! {"cmd":"search_input","text":"fra"}
//! {"cmd":"search","text":"France"}
//! ```

use serde::Deserialize;
use tracing::{debug, warn};

use crate::managers::country_browser::{CountryBrowser, CountryBrowserTrait};
use crate::types::browser_state::FetchTicket;

/// A decoded page event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum IpcCommand {
    UiReady,
    ShowAll,
    SearchInput {
        #[serde(default)]
        text: String,
    },
    Search {
        #[serde(default)]
        text: Option<String>,
    },
}

/// What the front-end has to do after a command was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IpcOutcome {
    /// Push the current state into the page. `clear_input` empties the
    /// search box; it is only set once a search has consumed its text.
    Render { clear_input: bool },
    /// Run a fetch for this ticket and hand its result back to the browser.
    StartFetch(FetchTicket),
    /// Nothing visible changed.
    Nothing,
}

/// Decodes a raw IPC body. Unknown commands and bad JSON yield `None`.
pub fn parse_message(message: &str) -> Option<IpcCommand> {
    match serde_json::from_str(message) {
        Ok(cmd) => Some(cmd),
        Err(e) => {
            warn!(error = %e, "ignoring IPC message");
            None
        }
    }
}

/// Applies a command to the browser state.
pub fn handle_command(browser: &mut CountryBrowser, command: IpcCommand) -> IpcOutcome {
    match command {
        IpcCommand::UiReady => IpcOutcome::Render { clear_input: false },
        IpcCommand::ShowAll => IpcOutcome::StartFetch(browser.begin_fetch()),
        IpcCommand::SearchInput { text } => {
            browser.set_search_input(&text);
            IpcOutcome::Nothing
        }
        IpcCommand::Search { text } => {
            if let Some(text) = text {
                browser.set_search_input(&text);
            }
            // A miss is already reflected in the state's error message.
            if let Err(miss) = browser.submit_search() {
                debug!(query = %miss.query, "search reported to page");
            }
            IpcOutcome::Render { clear_input: true }
        }
    }
}

/// Parse and apply in one step.
pub fn handle_ipc(browser: &mut CountryBrowser, message: &str) -> IpcOutcome {
    match parse_message(message) {
        Some(command) => handle_command(browser, command),
        None => IpcOutcome::Nothing,
    }
}
