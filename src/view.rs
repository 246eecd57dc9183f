//! HTML rendering of `BrowserState`.
//!
//! Everything here is pure so the page can be checked without a webview.
//! The webview shell owns static markup; these functions produce the dynamic
//! fragments it swaps in through `window.__cb_render`.

use serde_json::json;

use crate::types::browser_state::BrowserState;
use crate::types::country::{region_color, Country};

pub const LOAD_TRIGGER_LABEL: &str = "Click to show all countries";

/// Escapes text for use in element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `1234567` -> `"1,234,567"`.
pub fn format_population(population: u64) -> String {
    let digits = population.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Population in millions, rounded half up.
pub fn population_in_millions(population: u64) -> u64 {
    population.saturating_add(500_000) / 1_000_000
}

/// Sentence shown in the detail panel.
pub fn detail_summary(country: &Country) -> String {
    let capital_clause = match country.primary_capital() {
        Some(capital) => format!("the capital is {}", capital),
        None => "it has no capital".to_string(),
    };
    format!(
        "{name} is situated in {subregion}, and {capital_clause}. It has a population of {millions} million people, \
         and it borders with {count} neighboring countries: {borders}. Websites can be found on {tld} domains.",
        name = country.common_name(),
        subregion = country.subregion,
        millions = population_in_millions(country.population),
        count = country.borders.len(),
        borders = country.borders.join(", "),
        tld = country.tld.join(", "),
    )
}

fn flag_alt(country: &Country) -> String {
    country
        .flags
        .alt
        .clone()
        .unwrap_or_else(|| format!("{} flag", country.common_name()))
}

/// One `<li>` per country, in list order.
pub fn render_grid(countries: &[Country]) -> String {
    let mut html = String::new();
    for country in countries {
        html.push_str(&format!(
            "<li><img src=\"{src}\" alt=\"{alt}\" /><div><p class=\"country-name\" style=\"color:{color}\">{name}</p><p>Has a population of {pop} people</p></div></li>",
            src = escape_html(country.flag_url()),
            alt = escape_html(&flag_alt(country)),
            color = region_color(&country.region).hex(),
            name = escape_html(country.common_name()),
            pop = format_population(country.population),
        ));
    }
    html
}

/// Alert paragraph, or nothing when there is no message.
pub fn render_error(message: &str) -> String {
    if message.is_empty() {
        return String::new();
    }
    format!(
        "<p class=\"search-error\" role=\"alert\">{}</p>",
        escape_html(message)
    )
}

pub fn render_detail(country: &Country) -> String {
    format!(
        "<div class=\"country\"><img src=\"{src}\" alt=\"{alt}\" /><h2>{name}</h2><p>{summary}</p></div>",
        src = escape_html(country.flag_url()),
        alt = escape_html(country.common_name()),
        name = escape_html(country.common_name()),
        summary = escape_html(&detail_summary(country)),
    )
}

/// JSON payload consumed by `window.__cb_render` in the page shell.
///
/// The search box is owned by the page while the user types, so its text is
/// never sent; `clearInput` only asks the page to empty it.
pub fn render_payload(state: &BrowserState, clear_input: bool) -> serde_json::Value {
    json!({
        "showTrigger": state.show_load_trigger(),
        "grid": render_grid(&state.countries),
        "error": render_error(&state.error_message),
        "detail": state.selection.country().map(render_detail).unwrap_or_default(),
        "clearInput": clear_input,
    })
}

/// Script that pushes the current state into the page.
pub fn render_script(state: &BrowserState, clear_input: bool) -> String {
    format!(
        "if(window.__cb_render)window.__cb_render({})",
        render_payload(state, clear_input)
    )
}
