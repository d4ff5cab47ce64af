/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use anyhow::{Context, anyhow};
use yaml_rust::{Yaml, yaml};

pub fn foreach_kv<F>(table: &yaml::Hash, mut f: F) -> anyhow::Result<()>
where
    F: FnMut(&str, &Yaml) -> anyhow::Result<()>,
{
    for (k, v) in table.iter() {
        if let Yaml::String(key) = k {
            f(key, v).context(format!("failed to parse value of key {key}"))?;
        } else {
            return Err(anyhow!("key in hash should be string"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreach_kv_ok() {
        let yaml = yaml_doc!("continent: Asia\ncountry: US");
        let hash = yaml.as_hash().unwrap();
        let mut result = Vec::new();
        foreach_kv(hash, |k, v| {
            result.push((k.to_string(), v.as_str().unwrap().to_string()));
            Ok(())
        })
        .unwrap();
        assert_eq!(
            result,
            vec![
                ("continent".to_string(), "Asia".to_string()),
                ("country".to_string(), "US".to_string())
            ]
        );
    }

    #[test]
    fn foreach_kv_err() {
        let yaml = yaml_doc!("123: Asia");
        let hash = yaml.as_hash().unwrap();
        assert!(foreach_kv(hash, |_, _| Ok(())).is_err());

        let yaml = yaml_doc!("continent: Asia");
        let hash = yaml.as_hash().unwrap();
        assert!(foreach_kv(hash, |_, _| Err(anyhow!("rejected"))).is_err());
    }
}
