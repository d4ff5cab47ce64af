/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::str::FromStr;

use crate::Continent;

/// ISO 3166-1 alpha-2 shaped country code.
///
/// Only the shape (two ASCII letters) is checked when parsing, the value is
/// not looked up in any registry. Use [`IsoCountryCode::continent`] to find
/// out whether the code is known to the country table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoCountryCode([u8; 2]);

impl IsoCountryCode {
    pub fn as_str(&self) -> &str {
        // always two ascii uppercase letters
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    pub fn continent(&self) -> Option<Continent> {
        crate::get_continent_by_country_code(self.as_str())
    }
}

impl FromStr for IsoCountryCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [a, b] if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => Ok(IsoCountryCode([
                a.to_ascii_uppercase(),
                b.to_ascii_uppercase(),
            ])),
            _ => Err(()),
        }
    }
}

impl fmt::Display for IsoCountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
