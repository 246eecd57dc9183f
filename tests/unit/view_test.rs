//! Unit tests for the HTML view and its derived text.

use countrybrowser::managers::country_browser::{CountryBrowser, CountryBrowserTrait};
use countrybrowser::types::country::{Country, CountryFlags, CountryName};
use countrybrowser::view::{
    detail_summary, escape_html, format_population, population_in_millions, render_detail,
    render_error, render_grid, render_payload, render_script, LOAD_TRIGGER_LABEL,
};
use rstest::rstest;

fn france() -> Country {
    Country {
        name: CountryName {
            common: "France".to_string(),
        },
        flags: CountryFlags {
            png: "https://flagcdn.com/w320/fr.png".to_string(),
            alt: Some("The flag of France".to_string()),
        },
        population: 67_391_582,
        region: "Europe".to_string(),
        subregion: "Western Europe".to_string(),
        capital: vec!["Paris".to_string()],
        borders: vec!["AND".into(), "BEL".into(), "DEU".into()],
        tld: vec![".fr".to_string()],
    }
}

fn bouvet() -> Country {
    Country {
        name: CountryName {
            common: "Bouvet Island".to_string(),
        },
        flags: CountryFlags {
            png: "https://flagcdn.com/w320/bv.png".to_string(),
            alt: None,
        },
        population: 0,
        region: "Antarctic".to_string(),
        subregion: String::new(),
        capital: vec![],
        borders: vec![],
        tld: vec![".bv".to_string(), ".no".to_string()],
    }
}

#[rstest]
#[case(0, "0")]
#[case(999, "999")]
#[case(1_000, "1,000")]
#[case(67_391_582, "67,391,582")]
#[case(1_402_112_000, "1,402,112,000")]
fn test_format_population(#[case] population: u64, #[case] expected: &str) {
    assert_eq!(format_population(population), expected);
}

#[rstest]
#[case(0, 0)]
#[case(499_999, 0)]
#[case(500_000, 1)]
#[case(1_499_999, 1)]
#[case(1_500_000, 2)]
#[case(67_391_582, 67)]
fn test_population_in_millions(#[case] population: u64, #[case] expected: u64) {
    assert_eq!(population_in_millions(population), expected);
}

#[test]
fn test_detail_summary() {
    assert_eq!(
        detail_summary(&france()),
        "France is situated in Western Europe, and the capital is Paris. It has a population of 67 million people, \
         and it borders with 3 neighboring countries: AND, BEL, DEU. Websites can be found on .fr domains."
    );
}

#[test]
fn test_detail_summary_without_capital_or_borders() {
    let text = detail_summary(&bouvet());
    assert!(text.contains("and it has no capital."), "{}", text);
    assert!(text.contains("borders with 0 neighboring countries: ."), "{}", text);
    assert!(text.contains("found on .bv, .no domains"), "{}", text);
}

#[test]
fn test_escape_html() {
    assert_eq!(
        escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
        "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
    );
}

#[test]
fn test_grid_entry_has_flag_colour_and_population() {
    let html = render_grid(&[france()]);
    assert!(html.contains("src=\"https://flagcdn.com/w320/fr.png\""));
    assert!(html.contains("alt=\"The flag of France\""));
    assert!(html.contains("color:#ccaa00"));
    assert!(html.contains(">France</p>"));
    assert!(html.contains("Has a population of 67,391,582 people"));
}

#[test]
fn test_grid_falls_back_to_generated_alt_and_black() {
    let html = render_grid(&[bouvet()]);
    assert!(html.contains("alt=\"Bouvet Island flag\""));
    assert!(html.contains("color:#000000"));
}

#[test]
fn test_grid_escapes_names() {
    let mut country = france();
    country.name.common = "<script>".to_string();
    let html = render_grid(&[country]);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn test_render_error_only_when_present() {
    assert_eq!(render_error(""), "");
    let html = render_error("Atlantis doesn't exist. Try again.");
    assert!(html.contains("role=\"alert\""));
    assert!(html.contains("Atlantis doesn&#39;t exist. Try again."));
}

#[test]
fn test_render_detail() {
    let html = render_detail(&france());
    assert!(html.contains("<h2>France</h2>"));
    assert!(html.contains("the capital is Paris"));
}

#[test]
fn test_payload_before_load_shows_trigger() {
    let browser = CountryBrowser::new();
    let payload = render_payload(browser.state(), false);
    assert_eq!(payload["showTrigger"], true);
    assert_eq!(payload["grid"], "");
    assert_eq!(payload["error"], "");
    assert_eq!(payload["detail"], "");
    assert_eq!(payload["clearInput"], false);
}

#[test]
fn test_payload_after_load_and_search() {
    let mut browser = CountryBrowser::new();
    let ticket = browser.begin_fetch();
    browser.complete_fetch(ticket, Ok(vec![france(), bouvet()]));
    browser.search_country("france").unwrap();

    let payload = render_payload(browser.state(), true);
    assert_eq!(payload["showTrigger"], false);
    let grid = payload["grid"].as_str().unwrap();
    let bouvet_at = grid.find("Bouvet Island").unwrap();
    let france_at = grid.find(">France<").unwrap();
    assert!(bouvet_at < france_at, "grid must be sorted by population");
    assert!(payload["detail"].as_str().unwrap().contains("<h2>France</h2>"));
    assert_eq!(payload["error"], "");
    assert_eq!(payload["clearInput"], true);
}

#[test]
fn test_payload_never_carries_typed_text() {
    let mut browser = CountryBrowser::new();
    browser.set_search_input("fra");
    for clear_input in [false, true] {
        let payload = render_payload(browser.state(), clear_input);
        assert!(payload.get("input").is_none());
        assert!(!payload.to_string().contains("fra"));
    }
}

#[test]
fn test_payload_after_miss_has_error_and_no_detail() {
    let mut browser = CountryBrowser::new();
    let ticket = browser.begin_fetch();
    browser.complete_fetch(ticket, Ok(vec![france()]));
    browser.search_country("France").unwrap();
    browser.search_country("Atlantis").unwrap_err();

    let payload = render_payload(browser.state(), true);
    assert_eq!(payload["detail"], "");
    assert!(payload["error"].as_str().unwrap().contains("Atlantis"));
}

#[test]
fn test_render_script_calls_page_hook() {
    let browser = CountryBrowser::new();
    let script = render_script(browser.state(), false);
    assert!(script.starts_with("if(window.__cb_render)window.__cb_render({"));
    assert!(script.contains("\"showTrigger\":true"));
}

#[test]
fn test_trigger_label() {
    assert_eq!(LOAD_TRIGGER_LABEL, "Click to show all countries");
}
