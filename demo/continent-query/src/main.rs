/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use anyhow::anyhow;
use clap::{Arg, ArgAction, ArgGroup, ArgMatches, Command};

use continent_map::{CONTINENT_COUNTRY_MAP, Continent};

const ARG_CONTINENT: &str = "continent";
const ARG_COUNTRY: &str = "country";
const ARG_MEMBER: &str = "member";
const ARG_LIST: &str = "list";
const ARG_CHECK: &str = "check";

const GROUP_ACTION: &str = "action";

fn build_cli_args() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .arg(
            Arg::new(ARG_CONTINENT)
                .help("Show the country codes of this continent")
                .long(ARG_CONTINENT)
                .num_args(1)
                .value_name("NAME")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new(ARG_COUNTRY)
                .help("Show the continent of this country code")
                .long(ARG_COUNTRY)
                .num_args(1)
                .value_name("CODE")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new(ARG_MEMBER)
                .help("Check whether the country belongs to the continent")
                .long(ARG_MEMBER)
                .num_args(2)
                .value_names(["CODE", "CONTINENT"]),
        )
        .arg(
            Arg::new(ARG_LIST)
                .help("List all continents")
                .long(ARG_LIST)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(ARG_CHECK)
                .help("Check the consistency of the country table")
                .long(ARG_CHECK)
                .action(ArgAction::SetTrue),
        )
        .group(
            ArgGroup::new(GROUP_ACTION)
                .args([ARG_CONTINENT, ARG_COUNTRY, ARG_MEMBER, ARG_LIST, ARG_CHECK])
                .multiple(true)
                .required(true),
        )
}

fn main() -> anyhow::Result<()> {
    let args = build_cli_args().get_matches();

    if args.get_flag(ARG_CHECK) {
        check_table()?;
    }
    if args.get_flag(ARG_LIST) {
        list_continents();
    }
    let lines = query_continent(&args)
        .into_iter()
        .chain(query_country(&args))
        .chain(query_member(&args));
    for line in lines {
        println!("{line}");
    }

    Ok(())
}

fn check_table() -> anyhow::Result<()> {
    continent_map::check_table(&CONTINENT_COUNTRY_MAP)
        .map_err(|e| anyhow!("country table check failed: {e}"))?;
    println!(
        "# country table is ok: {} country codes in {} continents",
        CONTINENT_COUNTRY_MAP.len(),
        Continent::ALL.len()
    );
    Ok(())
}

fn list_continents() {
    for (continent, countries) in CONTINENT_COUNTRY_MAP.iter() {
        println!(
            "{}\t{continent}\t{} countries",
            continent.code(),
            countries.len()
        );
    }
}

fn query_continent(args: &ArgMatches) -> Vec<String> {
    let mut lines = Vec::new();
    let Some(names) = args.get_many::<String>(ARG_CONTINENT) else {
        return lines;
    };
    for name in names {
        lines.push(format!("# check for continent {name}"));
        match continent_map::get_countries_by_continent(name) {
            Some(countries) => lines.push(countries.join(" ")),
            None => lines.push("no continent found".to_string()),
        }
    }
    lines
}

fn query_country(args: &ArgMatches) -> Vec<String> {
    let mut lines = Vec::new();
    let Some(codes) = args.get_many::<String>(ARG_COUNTRY) else {
        return lines;
    };
    for code in codes {
        lines.push(format!("# check for country {code}"));
        match continent_map::get_continent_by_country_code(code) {
            Some(continent) => lines.push(format!("continent: {continent}/{}", continent.code())),
            None => lines.push("no record found".to_string()),
        }
    }
    lines
}

fn query_member(args: &ArgMatches) -> Vec<String> {
    let mut lines = Vec::new();
    let Some(mut values) = args.get_many::<String>(ARG_MEMBER) else {
        return lines;
    };
    if let (Some(code), Some(name)) = (values.next(), values.next()) {
        lines.push(format!("# check if {code} is in {name}"));
        lines.push(continent_map::is_country_in_continent(code, name).to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        build_cli_args().debug_assert();
    }

    #[test]
    fn action_required() {
        assert!(build_cli_args().try_get_matches_from(["continent-query"]).is_err());
    }

    #[test]
    fn parse_member() {
        let args = build_cli_args()
            .try_get_matches_from(["continent-query", "--member", "us", "north america"])
            .unwrap();
        let values: Vec<&String> = args.get_many::<String>(ARG_MEMBER).unwrap().collect();
        assert_eq!(values, ["us", "north america"]);
    }

    #[test]
    fn parse_repeated() {
        let args = build_cli_args()
            .try_get_matches_from([
                "continent-query",
                "--country",
                "us",
                "--country",
                "de",
                "--list",
            ])
            .unwrap();
        assert_eq!(args.get_many::<String>(ARG_COUNTRY).unwrap().count(), 2);
        assert!(args.get_flag(ARG_LIST));
        assert!(!args.get_flag(ARG_CHECK));
    }

    fn matches(argv: &[&str]) -> ArgMatches {
        build_cli_args()
            .try_get_matches_from(std::iter::once("continent-query").chain(argv.iter().copied()))
            .unwrap()
    }

    #[test]
    fn continent_output() {
        let args = matches(&["--continent", "antarctica", "--continent", "Atlantis"]);
        assert_eq!(
            query_continent(&args),
            [
                "# check for continent antarctica",
                "AQ BV GS HM TF",
                "# check for continent Atlantis",
                "no continent found",
            ]
        );
    }

    #[test]
    fn country_output() {
        let args = matches(&["--country", "us", "--country", "XX"]);
        assert_eq!(
            query_country(&args),
            [
                "# check for country us",
                "continent: North America/NA",
                "# check for country XX",
                "no record found",
            ]
        );
        assert!(query_continent(&args).is_empty());
    }

    #[test]
    fn member_output() {
        let args = matches(&["--member", "us", "north america"]);
        assert_eq!(
            query_member(&args),
            ["# check if us is in north america", "true"]
        );

        let args = matches(&["--member", "US", "Europe"]);
        assert_eq!(query_member(&args)[1], "false");
    }
}
