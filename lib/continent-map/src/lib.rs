/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod continent;
pub use continent::Continent;

mod country;
pub use country::IsoCountryCode;

mod table;
pub use table::{CONTINENT_COUNTRY_MAP, ContinentCountryMap};

mod query;
pub use query::{
    get_continent_by_country_code, get_countries_by_continent, is_country_in_continent,
    is_valid_continent,
};

mod check;
pub use check::{TableCheckError, check_table};
