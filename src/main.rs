//! CountryBrowser entry point.
//!
//! Opens the webview window when built with the `gui` feature, otherwise runs
//! the console front-end on stdin/stdout.
//!
//! An optional first argument overrides the settings file path.

use std::process::ExitCode;

use countrybrowser::app::App;
use countrybrowser::logging;
use countrybrowser::types::errors::AppError;
use tracing::{error, info};

fn main() -> ExitCode {
    let config_path = std::env::args().nth(1);

    let app = match App::new(config_path) {
        Ok(app) => app,
        Err(e) => {
            logging::init("info");
            error!(error = %e, "failed to start");
            return ExitCode::FAILURE;
        }
    };

    logging::init(&app.settings().logging.filter);
    info!(
        version = env!("CARGO_PKG_VERSION"),
        api = app.client.base_url(),
        "starting countrybrowser"
    );

    match run(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "exited with error");
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "gui")]
fn run(app: App) -> Result<(), AppError> {
    countrybrowser::ui::webview_app::run(app)
}

#[cfg(not(feature = "gui"))]
fn run(app: App) -> Result<(), AppError> {
    use std::io;

    let runtime = tokio::runtime::Runtime::new().map_err(|e| AppError::Runtime(e.to_string()))?;
    let App {
        client, mut browser, ..
    } = app;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    countrybrowser::console::run_console(&runtime, &mut browser, &client, stdin.lock(), &mut stdout)?;
    Ok(())
}
