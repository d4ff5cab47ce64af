/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use crate::{CONTINENT_COUNTRY_MAP, Continent};

/// Get the country codes of the continent named `continent_name`.
///
/// The name is matched ignoring ASCII case. A new vector is returned on each
/// call, `None` if the name matches no continent.
pub fn get_countries_by_continent(continent_name: &str) -> Option<Vec<&'static str>> {
    let continent = Continent::from_name(continent_name)?;
    Some(CONTINENT_COUNTRY_MAP.countries(continent).to_vec())
}

/// Get the continent of the ISO 3166-1 alpha-2 `country_code`, ignoring case.
///
/// The code is uppercased with full Unicode mapping, so `"ß"` is taken as
/// `"SS"`.
pub fn get_continent_by_country_code(country_code: &str) -> Option<Continent> {
    let country_code = country_code.to_uppercase();
    CONTINENT_COUNTRY_MAP.find_continent(&country_code)
}

/// Check whether `continent_name` is a continent name, ignoring ASCII case.
/// Use [`Continent::from_name`] to also get the matched continent.
pub fn is_valid_continent(continent_name: &str) -> bool {
    Continent::from_name(continent_name).is_some()
}

/// Check whether `country_code` belongs to the continent named
/// `continent_name`. An unknown continent name simply gives `false`.
pub fn is_country_in_continent(country_code: &str, continent_name: &str) -> bool {
    let Some(continent) = Continent::from_name(continent_name) else {
        return false;
    };
    let country_code = country_code.to_uppercase();
    CONTINENT_COUNTRY_MAP
        .countries(continent)
        .contains(&country_code.as_str())
}
