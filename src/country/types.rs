//! Expected upstream payload shapes.
//!
//! The gateway relays bodies verbatim and never parses live traffic into
//! these types; they document the contracts of the two upstream services and
//! back the test fixtures.

use serde::{Deserialize, Serialize};

/// One entry in the metadata service's available-countries listing.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AvailableCountry {
    pub country_code: String,
    pub name: String,
}

/// Detail record for a single country, including its border neighbours.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CountryInfo {
    pub common_name: String,
    pub official_name: String,
    pub country_code: String,
    pub region: String,
    #[serde(default)]
    pub borders: Option<Vec<CountryInfo>>,
}

/// Envelope wrapping every population/flag service response.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub error: bool,
    pub msg: String,
    pub data: T,
}

/// Population series for one country.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CountryPopulation {
    pub country: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub iso3: Option<String>,
    pub population_counts: Vec<PopulationCount>,
}

/// One year's population count.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PopulationCount {
    pub year: u32,
    pub value: u64,
}

/// Flag image record for one country.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CountryFlag {
    pub name: String,
    pub flag: String,
    #[serde(default)]
    pub iso2: Option<String>,
    #[serde(default)]
    pub iso3: Option<String>,
}
