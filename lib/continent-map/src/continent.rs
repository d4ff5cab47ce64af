/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::str::FromStr;

use crate::CONTINENT_COUNTRY_MAP;

const ALL_CONTINENT_NAMES: &[&str] = &[
    "Africa",
    "Antarctica",
    "Asia",
    "Europe",
    "North America",
    "Oceania",
    "South America",
];

const ALL_CONTINENT_CODES: &[&str] = &["AF", "AN", "AS", "EU", "NA", "OC", "SA"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Continent {
    Africa,
    Antarctica,
    Asia,
    Europe,
    NorthAmerica,
    Oceania,
    SouthAmerica,
}

impl Continent {
    /// All continents in declaration order, which is also the scan order of
    /// the country table.
    pub const ALL: [Continent; 7] = [
        Continent::Africa,
        Continent::Antarctica,
        Continent::Asia,
        Continent::Europe,
        Continent::NorthAmerica,
        Continent::Oceania,
        Continent::SouthAmerica,
    ];

    pub fn name(&self) -> &'static str {
        ALL_CONTINENT_NAMES[*self as usize]
    }

    pub fn code(&self) -> &'static str {
        ALL_CONTINENT_CODES[*self as usize]
    }

    /// Match the full continent name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Match the two-letter continent code, ignoring ASCII case.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }

    pub fn countries(&self) -> &'static [&'static str] {
        CONTINENT_COUNTRY_MAP.countries(*self)
    }
}

impl FromStr for Continent {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Continent::from_name(s).ok_or(())
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
