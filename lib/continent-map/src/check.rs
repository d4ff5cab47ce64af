/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::collections::HashMap;

use log::debug;
use thiserror::Error;

use crate::{Continent, ContinentCountryMap};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableCheckError {
    #[error("no country code found for continent {0}")]
    EmptyContinent(Continent),
    #[error("malformed country code {code:?} in continent {continent}")]
    MalformedCode {
        continent: Continent,
        code: &'static str,
    },
    #[error("duplicated country code {code} in continent {continent}")]
    DuplicateCode {
        continent: Continent,
        code: &'static str,
    },
    #[error("country code {code} found in both {first} and {second}")]
    OverlappingCode {
        code: &'static str,
        first: Continent,
        second: Continent,
    },
}

fn is_well_formed(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_uppercase())
}

/// Verify that `map` is a disjoint partition of well formed country codes.
///
/// Every continent must hold at least one code, every code must be two
/// ASCII uppercase letters and must appear only once in the whole map.
pub fn check_table(map: &ContinentCountryMap) -> Result<(), TableCheckError> {
    let mut seen: HashMap<&'static str, Continent> = HashMap::with_capacity(map.len());

    for (continent, countries) in map.iter() {
        if countries.is_empty() {
            return Err(TableCheckError::EmptyContinent(continent));
        }

        for &code in countries {
            if !is_well_formed(code) {
                return Err(TableCheckError::MalformedCode { continent, code });
            }

            match seen.insert(code, continent) {
                Some(first) if first == continent => {
                    return Err(TableCheckError::DuplicateCode { continent, code });
                }
                Some(first) => {
                    return Err(TableCheckError::OverlappingCode {
                        code,
                        first,
                        second: continent,
                    });
                }
                None => {}
            }
        }
    }

    debug!(
        "checked {} country codes in {} continents",
        seen.len(),
        Continent::ALL.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CONTINENT_COUNTRY_MAP;

    const FEW: &[&str] = &["XA"];

    #[test]
    fn builtin_table() {
        assert!(check_table(&CONTINENT_COUNTRY_MAP).is_ok());
    }

    #[test]
    fn empty_continent() {
        let map = ContinentCountryMap::new([&["ZA"], &[], FEW, FEW, FEW, FEW, FEW]);
        assert_eq!(
            check_table(&map),
            Err(TableCheckError::EmptyContinent(Continent::Antarctica))
        );
    }

    #[test]
    fn malformed_code() {
        let map = ContinentCountryMap::new([&["ZA"], &["AQ"], &["CN"], &["de"], FEW, FEW, FEW]);
        assert_eq!(
            check_table(&map),
            Err(TableCheckError::MalformedCode {
                continent: Continent::Europe,
                code: "de",
            })
        );

        let map = ContinentCountryMap::new([&["ZAF"], &["AQ"], FEW, FEW, FEW, FEW, FEW]);
        assert!(matches!(
            check_table(&map),
            Err(TableCheckError::MalformedCode { .. })
        ));
    }

    #[test]
    fn duplicate_code() {
        let map =
            ContinentCountryMap::new([&["ZA", "EG", "ZA"], &["AQ"], FEW, FEW, FEW, FEW, FEW]);
        assert_eq!(
            check_table(&map),
            Err(TableCheckError::DuplicateCode {
                continent: Continent::Africa,
                code: "ZA",
            })
        );
    }

    #[test]
    fn overlapping_code() {
        let map = ContinentCountryMap::new([
            &["ZA"],
            &["AQ"],
            &["TR", "CN"],
            &["DE", "TR"],
            &["US"],
            &["AU"],
            &["BR"],
        ]);
        assert_eq!(
            check_table(&map),
            Err(TableCheckError::OverlappingCode {
                code: "TR",
                first: Continent::Asia,
                second: Continent::Europe,
            })
        );
    }

    #[test]
    fn error_message() {
        let e = TableCheckError::OverlappingCode {
            code: "TR",
            first: Continent::Asia,
            second: Continent::Europe,
        };
        assert_eq!(e.to_string(), "country code TR found in both Asia and Europe");
    }
}
