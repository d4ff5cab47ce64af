/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use crate::Continent;

// Assignment follows the GeoNames continent of each ISO 3166-1 alpha-2 code.
// Transcontinental countries are listed once: RU and CY in Europe, TR, GE,
// AM, AZ and KZ in Asia, EG in Africa, TL in Oceania.

const AFRICA: &[&str] = &[
    "AO", "BF", "BI", "BJ", "BW", "CD", "CF", "CG", "CI", "CM", "CV", "DJ", "DZ", "EG", "EH",
    "ER", "ET", "GA", "GH", "GM", "GN", "GQ", "GW", "KE", "KM", "LR", "LS", "LY", "MA", "MG",
    "ML", "MR", "MU", "MW", "MZ", "NA", "NE", "NG", "RE", "RW", "SC", "SD", "SH", "SL", "SN",
    "SO", "SS", "ST", "SZ", "TD", "TG", "TN", "TZ", "UG", "YT", "ZA", "ZM", "ZW",
];

const ANTARCTICA: &[&str] = &["AQ", "BV", "GS", "HM", "TF"];

const ASIA: &[&str] = &[
    "AE", "AF", "AM", "AZ", "BD", "BH", "BN", "BT", "CC", "CN", "CX", "GE", "HK", "ID", "IL",
    "IN", "IO", "IQ", "IR", "JO", "JP", "KG", "KH", "KP", "KR", "KW", "KZ", "LA", "LB", "LK",
    "MM", "MN", "MO", "MV", "MY", "NP", "OM", "PH", "PK", "PS", "QA", "SA", "SG", "SY", "TH",
    "TJ", "TM", "TR", "TW", "UZ", "VN", "YE",
];

const EUROPE: &[&str] = &[
    "AD", "AL", "AT", "AX", "BA", "BE", "BG", "BY", "CH", "CY", "CZ", "DE", "DK", "EE", "ES",
    "FI", "FO", "FR", "GB", "GG", "GI", "GR", "HR", "HU", "IE", "IM", "IS", "IT", "JE", "LI",
    "LT", "LU", "LV", "MC", "MD", "ME", "MK", "MT", "NL", "NO", "PL", "PT", "RO", "RS", "RU",
    "SE", "SI", "SJ", "SK", "SM", "UA", "VA",
];

const NORTH_AMERICA: &[&str] = &[
    "AG", "AI", "AW", "BB", "BL", "BM", "BQ", "BS", "BZ", "CA", "CR", "CU", "CW", "DM", "DO",
    "GD", "GL", "GP", "GT", "HN", "HT", "JM", "KN", "KY", "LC", "MF", "MQ", "MS", "MX", "NI",
    "PA", "PM", "PR", "SV", "SX", "TC", "TT", "US", "VC", "VG", "VI",
];

const OCEANIA: &[&str] = &[
    "AS", "AU", "CK", "FJ", "FM", "GU", "KI", "MH", "MP", "NC", "NF", "NR", "NU", "NZ", "PF",
    "PG", "PN", "PW", "SB", "TK", "TL", "TO", "TV", "UM", "VU", "WF", "WS",
];

const SOUTH_AMERICA: &[&str] = &[
    "AR", "BO", "BR", "CL", "CO", "EC", "FK", "GF", "GY", "PE", "PY", "SR", "UY", "VE",
];

/// Read only association of every continent to its country codes.
///
/// The codes of one continent keep their declaration order, which is not
/// sorted. Slices handed out are `'static` and can not be modified.
pub struct ContinentCountryMap {
    inner: [&'static [&'static str]; 7],
}

impl ContinentCountryMap {
    /// Build a map from per continent code lists, indexed in the
    /// declaration order of [`Continent`].
    pub const fn new(inner: [&'static [&'static str]; 7]) -> Self {
        ContinentCountryMap { inner }
    }

    pub fn countries(&self, continent: Continent) -> &'static [&'static str] {
        self.inner[continent as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Continent, &'static [&'static str])> + '_ {
        Continent::ALL
            .into_iter()
            .map(|continent| (continent, self.countries(continent)))
    }

    /// Total number of country codes over all continents.
    pub fn len(&self) -> usize {
        self.inner.iter().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find the continent holding `code`, which must already be normalized.
    pub fn find_continent(&self, code: &str) -> Option<Continent> {
        self.iter()
            .find(|(_, countries)| countries.contains(&code))
            .map(|(continent, _)| continent)
    }
}

pub static CONTINENT_COUNTRY_MAP: ContinentCountryMap = ContinentCountryMap::new([
    AFRICA,
    ANTARCTICA,
    ASIA,
    EUROPE,
    NORTH_AMERICA,
    OCEANIA,
    SOUTH_AMERICA,
]);
