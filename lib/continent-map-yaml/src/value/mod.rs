/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod geo;
mod primary;

pub use geo::{
    as_continent, as_continent_list, as_country_list, as_country_selection, as_iso_country_code,
};
pub use primary::{as_list, as_string};
