/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;

use anyhow::{Context, anyhow};
use indexmap::IndexSet;
use log::warn;
use yaml_rust::Yaml;

use continent_map::{Continent, IsoCountryCode};

/// Parse a continent given by its full name or by its two-letter code.
pub fn as_continent(value: &Yaml) -> anyhow::Result<Continent> {
    if let Yaml::String(s) = value {
        Continent::from_name(s)
            .or_else(|| Continent::from_code(s))
            .ok_or_else(|| anyhow!("invalid continent {s}"))
    } else {
        Err(anyhow!("yaml value type for 'continent' should be 'string'"))
    }
}

pub fn as_continent_list(value: &Yaml) -> anyhow::Result<Vec<Continent>> {
    crate::value::as_list(value, as_continent)
}

pub fn as_iso_country_code(value: &Yaml) -> anyhow::Result<IsoCountryCode> {
    if let Yaml::String(s) = value {
        let country =
            IsoCountryCode::from_str(s).map_err(|_| anyhow!("invalid iso country code"))?;
        Ok(country)
    } else {
        Err(anyhow!(
            "yaml value type for 'iso country code' should be 'string'"
        ))
    }
}

fn add_continent(
    set: &mut IndexSet<IsoCountryCode>,
    continent: Continent,
) -> anyhow::Result<()> {
    for code in continent.countries() {
        let country = IsoCountryCode::from_str(code)
            .map_err(|_| anyhow!("invalid country code {code} in continent {continent}"))?;
        if !set.insert(country) {
            warn!("duplicated country {country} from continent {continent} ignored");
        }
    }
    Ok(())
}

fn add_countries(set: &mut IndexSet<IsoCountryCode>, value: &Yaml) -> anyhow::Result<()> {
    let Yaml::String(s) = value else {
        return Err(anyhow!(
            "yaml value type for 'country' should be 'string'"
        ));
    };

    // two letters always mean a country, as continent codes clash with
    // country codes like NA or SA
    if let Some(continent) = Continent::from_name(s) {
        return add_continent(set, continent);
    }

    let country = as_iso_country_code(value)?;
    if !set.insert(country) {
        warn!("duplicated country {country} ignored");
    }
    Ok(())
}

fn collect_countries(set: &mut IndexSet<IsoCountryCode>, value: &Yaml) -> anyhow::Result<()> {
    match value {
        Yaml::Array(seq) => {
            for (i, v) in seq.iter().enumerate() {
                add_countries(set, v).context(format!("invalid value for list element #{i}"))?;
            }
            Ok(())
        }
        _ => add_countries(set, value).context("invalid single value for the list"),
    }
}

/// Parse a list of countries.
///
/// Each entry is either a continent name, which is expanded to all of its
/// countries, or a country code. Duplicated countries are dropped, the order
/// of first appearance is kept.
pub fn as_country_list(value: &Yaml) -> anyhow::Result<Vec<IsoCountryCode>> {
    let mut set = IndexSet::new();
    collect_countries(&mut set, value)?;
    Ok(set.into_iter().collect())
}

/// Parse a country selection map like:
///
/// ```yaml
/// continent: [Europe]
/// country: [US, CA]
/// exclude: [RU]
/// ```
///
/// A plain string or list value is handled as an include list.
pub fn as_country_selection(value: &Yaml) -> anyhow::Result<Vec<IsoCountryCode>> {
    match value {
        Yaml::Hash(map) => {
            let mut include = IndexSet::new();
            let mut exclude = IndexSet::new();

            crate::foreach_kv(map, |k, v| match crate::key::normalize(k).as_str() {
                "continent" | "continents" => {
                    let continents = as_continent_list(v)
                        .context(format!("invalid continent list value for key {k}"))?;
                    for continent in continents {
                        add_continent(&mut include, continent)?;
                    }
                    Ok(())
                }
                "country" | "countries" => collect_countries(&mut include, v)
                    .context(format!("invalid country list value for key {k}")),
                "exclude" | "except" => collect_countries(&mut exclude, v)
                    .context(format!("invalid country list value for key {k}")),
                _ => Err(anyhow!("invalid key {k}")),
            })?;

            include.retain(|c| !exclude.contains(c));
            Ok(include.into_iter().collect())
        }
        Yaml::String(_) | Yaml::Array(_) => as_country_list(value),
        _ => Err(anyhow!(
            "yaml value type for 'country selection' should be 'map', 'list' or 'string'"
        )),
    }
}
