//! Property-based tests for the loaded list and the region table.

use countrybrowser::managers::country_browser::{CountryBrowser, CountryBrowserTrait};
use countrybrowser::types::browser_state::FetchOutcome;
use countrybrowser::types::country::{region_color, Country, CountryFlags, CountryName, RegionColor};
use countrybrowser::view::{format_population, population_in_millions};
use proptest::prelude::*;

fn country(index: usize, population: u64) -> Country {
    Country {
        name: CountryName {
            common: format!("Country {}", index),
        },
        flags: CountryFlags {
            png: String::new(),
            alt: None,
        },
        population,
        region: String::new(),
        subregion: String::new(),
        capital: vec![],
        borders: vec![],
        tld: vec![],
    }
}

fn arb_payload() -> impl Strategy<Value = Vec<Country>> {
    prop::collection::vec(0u64..10_000_000_000, 0..60).prop_map(|pops| {
        pops.into_iter()
            .enumerate()
            .map(|(i, p)| country(i, p))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn loaded_list_is_sorted_by_population(payload in arb_payload()) {
        let expected_len = payload.len();
        let mut browser = CountryBrowser::new();
        let ticket = browser.begin_fetch();
        let outcome = browser.complete_fetch(ticket, Ok(payload));

        prop_assert_eq!(outcome, FetchOutcome::Applied { count: expected_len });
        let countries = &browser.state().countries;
        prop_assert_eq!(countries.len(), expected_len);
        prop_assert!(countries.windows(2).all(|w| w[0].population <= w[1].population));
        prop_assert_eq!(browser.state().show_load_trigger(), expected_len == 0);
    }

    #[test]
    fn last_issued_completed_fetch_wins(first in arb_payload(), second in arb_payload(), reversed in any::<bool>()) {
        let mut browser = CountryBrowser::new();
        let t1 = browser.begin_fetch();
        let t2 = browser.begin_fetch();
        let second_len = second.len();

        if reversed {
            browser.complete_fetch(t2, Ok(second));
            browser.complete_fetch(t1, Ok(first));
        } else {
            browser.complete_fetch(t1, Ok(first));
            browser.complete_fetch(t2, Ok(second));
        }
        prop_assert_eq!(browser.state().countries.len(), second_len);
    }

    #[test]
    fn region_color_is_total(region in ".*") {
        let color = region_color(&region);
        prop_assert!(color.hex().starts_with('#'));
        let known = ["Africa", "Americas", "Asia", "Europe", "Oceania"];
        if !known.contains(&region.as_str()) {
            prop_assert_eq!(color, RegionColor::Black);
        }
    }

    #[test]
    fn formatted_population_round_trips(population in any::<u64>()) {
        let formatted = format_population(population);
        prop_assert_eq!(formatted.replace(',', "").parse::<u64>().unwrap(), population);
        prop_assert!(formatted.split(',').skip(1).all(|group| group.len() == 3));
    }

    #[test]
    fn millions_are_nearest(population in 0u64..100_000_000_000) {
        let m = population_in_millions(population);
        let diff = (m as i128 * 1_000_000 - population as i128).abs();
        prop_assert!(diff <= 500_000);
    }
}
