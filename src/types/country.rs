use serde::Deserialize;

/// A country record as returned by the REST Countries `v3.1` API.
///
/// Only the fields requested through the `fields` query parameter are
/// modelled. `name.common`, `flags.png` and `population` are required; the
/// list-valued fields and the region strings default to empty because the
/// API leaves them out for a handful of territories.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Country {
    pub name: CountryName,
    pub flags: CountryFlags,
    pub population: u64,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: String,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub borders: Vec<String>,
    #[serde(default)]
    pub tld: Vec<String>,
}

/// Nested `name` object. Official and native names are not requested.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CountryName {
    pub common: String,
}

/// Nested `flags` object.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CountryFlags {
    pub png: String,
    #[serde(default)]
    pub alt: Option<String>,
}

impl Country {
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    pub fn flag_url(&self) -> &str {
        &self.flags.png
    }

    /// First listed capital, if any.
    pub fn primary_capital(&self) -> Option<&str> {
        self.capital.first().map(String::as_str)
    }

    /// Case-insensitive comparison of the common name against `query`.
    /// No whitespace trimming is applied to either side.
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.common.to_lowercase() == query.to_lowercase()
    }
}

/// Continental grouping assigned by the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Africa,
    Americas,
    Asia,
    Europe,
    Oceania,
    /// Anything the table does not know, including an empty string
    /// (e.g. "Antarctic").
    Other,
}

impl Region {
    /// Total parse; exact, case-sensitive match on the API spelling.
    pub fn parse(region: &str) -> Self {
        match region {
            "Africa" => Region::Africa,
            "Americas" => Region::Americas,
            "Asia" => Region::Asia,
            "Europe" => Region::Europe,
            "Oceania" => Region::Oceania,
            _ => Region::Other,
        }
    }

    pub fn color(self) -> RegionColor {
        match self {
            Region::Africa => RegionColor::Blue,
            Region::Americas => RegionColor::Green,
            Region::Asia => RegionColor::Red,
            Region::Europe => RegionColor::Gold,
            Region::Oceania => RegionColor::Purple,
            Region::Other => RegionColor::Black,
        }
    }
}

/// Display colour used for a country's name in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionColor {
    Blue,
    Green,
    Red,
    Gold,
    Purple,
    Black,
}

impl RegionColor {
    /// CSS hex value.
    pub fn hex(self) -> &'static str {
        match self {
            RegionColor::Blue => "#0066cc",
            RegionColor::Green => "#008000",
            RegionColor::Red => "#cc0000",
            RegionColor::Gold => "#ccaa00",
            RegionColor::Purple => "#800080",
            RegionColor::Black => "#000000",
        }
    }
}

/// Maps a region string to its display colour. Never fails.
pub fn region_color(region: &str) -> RegionColor {
    Region::parse(region).color()
}
