//! Unit tests for the region to colour table.

use countrybrowser::types::country::{region_color, Region, RegionColor};
use rstest::rstest;

#[rstest]
#[case("Africa", RegionColor::Blue, "#0066cc")]
#[case("Americas", RegionColor::Green, "#008000")]
#[case("Asia", RegionColor::Red, "#cc0000")]
#[case("Europe", RegionColor::Gold, "#ccaa00")]
#[case("Oceania", RegionColor::Purple, "#800080")]
fn test_known_regions(#[case] region: &str, #[case] color: RegionColor, #[case] hex: &str) {
    assert_eq!(region_color(region), color);
    assert_eq!(region_color(region).hex(), hex);
}

#[rstest]
#[case("")]
#[case("Antarctic")]
#[case("europe")]
#[case(" Asia")]
#[case("Polar")]
fn test_unknown_regions_are_black(#[case] region: &str) {
    assert_eq!(region_color(region), RegionColor::Black);
    assert_eq!(Region::parse(region), Region::Other);
}

#[test]
fn test_parse_known_region() {
    assert_eq!(Region::parse("Oceania"), Region::Oceania);
    assert_eq!(Region::Oceania.color(), RegionColor::Purple);
}
