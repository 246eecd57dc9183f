//! Line-oriented front-end, used when the crate is built without `gui`.
//!
//! ```text
//! <empty line> | :load   fetch all countries (offered while nothing is loaded)
//! :list                  print the grid again
//! :quit                  exit
//! anything else          search by name (an empty line too, once loaded)
//! ```

use std::io::{self, BufRead, Write};

use tokio::runtime::Runtime;

use crate::managers::country_browser::{CountryBrowser, CountryBrowserTrait};
use crate::services::country_client::CountrySource;
use crate::types::country::Country;
use crate::view::{detail_summary, format_population, LOAD_TRIGGER_LABEL};

const LOAD_HINT: &str = "(press Enter or type :load)";
const SEARCH_HINT: &str = "Enter the country name here (:list, :quit)";

/// Runs until `:quit` or end of input.
///
/// Fetches are driven to completion on `runtime` before the next line is read.
pub fn run_console<S, R, W>(
    runtime: &Runtime,
    browser: &mut CountryBrowser,
    source: &S,
    input: R,
    output: &mut W,
) -> io::Result<()>
where
    S: CountrySource,
    R: BufRead,
    W: Write,
{
    write_prompt(browser, output)?;

    for line in input.lines() {
        let line = line?;
        // Only the line terminator is stripped; search text is taken as typed.
        let line = line.strip_suffix('\r').unwrap_or(&line);

        match line {
            ":quit" => break,
            ":list" => write_grid(browser.state().countries.as_slice(), output)?,
            ":load" => load(runtime, browser, source, output)?,
            "" if browser.state().show_load_trigger() => load(runtime, browser, source, output)?,
            query => match browser.search_country(query) {
                Ok(country) => write_detail(&country, output)?,
                Err(miss) => writeln!(output, "{}", miss)?,
            },
        }

        write_prompt(browser, output)?;
    }

    output.flush()
}

fn load<S, W>(
    runtime: &Runtime,
    browser: &mut CountryBrowser,
    source: &S,
    output: &mut W,
) -> io::Result<()>
where
    S: CountrySource,
    W: Write,
{
    // Failures are only logged; the load prompt simply comes back.
    runtime.block_on(browser.fetch_all_countries(source));
    if !browser.state().countries.is_empty() {
        write_grid(&browser.state().countries, output)?;
    }
    Ok(())
}

fn write_prompt<W: Write>(browser: &CountryBrowser, output: &mut W) -> io::Result<()> {
    if browser.state().show_load_trigger() {
        writeln!(output, "{} {}", LOAD_TRIGGER_LABEL, LOAD_HINT)?;
    } else {
        writeln!(output, "{}", SEARCH_HINT)?;
    }
    write!(output, "> ")?;
    output.flush()
}

fn write_grid<W: Write>(countries: &[Country], output: &mut W) -> io::Result<()> {
    for country in countries {
        let region = if country.region.is_empty() {
            "-"
        } else {
            country.region.as_str()
        };
        writeln!(
            output,
            "{} [{}]: has a population of {} people",
            country.common_name(),
            region,
            format_population(country.population)
        )?;
    }
    Ok(())
}

fn write_detail<W: Write>(country: &Country, output: &mut W) -> io::Result<()> {
    writeln!(output, "{}", country.common_name())?;
    writeln!(output, "{}", detail_summary(country))?;
    writeln!(output, "Flag: {}", country.flag_url())
}
