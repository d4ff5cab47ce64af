/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use anyhow::{Context, anyhow};
use yaml_rust::Yaml;

pub fn as_string(v: &Yaml) -> anyhow::Result<String> {
    match v {
        Yaml::String(s) => Ok(s.to_string()),
        Yaml::Integer(i) => Ok(i.to_string()),
        Yaml::Real(s) => Ok(s.to_string()),
        _ => Err(anyhow!(
            "yaml value type for string should be 'string' / 'integer' / 'real'"
        )),
    }
}

pub fn as_list<T, F>(v: &Yaml, convert: F) -> anyhow::Result<Vec<T>>
where
    F: Fn(&Yaml) -> anyhow::Result<T>,
{
    let mut vec = Vec::new();
    match v {
        Yaml::Array(seq) => {
            for (i, v) in seq.iter().enumerate() {
                let node = convert(v).context(format!("invalid value for list element #{i}"))?;
                vec.push(node);
            }
        }
        _ => {
            let node = convert(v).context("invalid single value for the list")?;
            vec.push(node);
        }
    }
    Ok(vec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string() {
        assert_eq!(as_string(&yaml_doc!("Europe")).unwrap(), "Europe");
        assert_eq!(as_string(&yaml_doc!("42")).unwrap(), "42");
        assert!(as_string(&yaml_doc!("[a, b]")).is_err());
        assert!(as_string(&yaml_doc!("~")).is_err());
    }

    #[test]
    fn list() {
        let v = yaml_doc!("[a, b, c]");
        assert_eq!(as_list(&v, as_string).unwrap(), vec!["a", "b", "c"]);

        let v = yaml_doc!("single");
        assert_eq!(as_list(&v, as_string).unwrap(), vec!["single"]);

        let v = yaml_doc!("[a, [b]]");
        assert!(as_list(&v, as_string).is_err());
    }
}
