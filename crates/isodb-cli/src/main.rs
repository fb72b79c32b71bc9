//! isodb — Command-line interface for isodb-core
//!
//! This binary provides a simple way to look up ISO reference data from your
//! terminal: countries, country subdivisions, former countries, languages,
//! currencies and script names.
//!
//! Usage examples
//! --------------
//!
//! - Find a country by code (alpha-2 or alpha-3, case-insensitive)
//!   $ isodb countries --code US
//!
//! - Exact or substring name match
//!   $ isodb countries --name Germany --exact
//!   $ isodb countries --name Island
//!
//! - Resolve a former country name
//!   $ isodb countries --former-name Burma
//!
//! - Other datasets
//!   $ isodb languages --code en
//!   $ isodb currencies --code USD
//!   $ isodb subdivisions --country US
//!   $ isodb scripts --code latn
//!
//! - Output control
//!   $ isodb countries --list-all --format json
//!   $ isodb countries --code US --fields name,flag
//!
//! Data source
//! -----------
//!
//! All data comes from the snapshot bundled with the `isodb-core` crate;
//! nothing is fetched at runtime.

mod args;
mod output;

use crate::args::{CliArgs, Commands};
use crate::output::render;
use anyhow::Result;
use clap::Parser;
use isodb_core::IsoRecord;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let fields: Option<Vec<String>> = args.fields.as_ref().map(|list| {
        list.split(',')
            .map(|field| field.trim().to_owned())
            .filter(|field| !field.is_empty())
            .collect()
    });

    let printed = match args.command {
        Commands::Countries(ref query) => {
            let countries = isodb_core::countries()?;
            let mut results: Vec<&isodb_core::Country> = Vec::new();

            if let Some(code) = &query.code {
                let code = code.to_uppercase();
                let hit = countries
                    .find(&[("alpha_2", &code)])?
                    .or(countries.find(&[("alpha_3", &code)])?);
                results.extend(hit);
            } else if let Some(name) = &query.name {
                if query.exact {
                    results.extend(countries.find(&[("name", name)])?);
                } else {
                    results = countries.search(&[("name", name)])?;
                }
            } else if let Some(numeric) = &query.numeric {
                results.extend(countries.find(&[("numeric", numeric)])?);
            } else if let Some(former) = &query.former_name {
                results.extend(countries.get_by_former_name(former));
            } else {
                debug_assert!(query.list_all);
                results = countries.iter().collect();
            }

            finish(results, &args, fields.as_deref())?
        }

        Commands::Subdivisions(ref query) => {
            let subdivisions = isodb_core::subdivisions()?;
            let mut results: Vec<&isodb_core::Subdivision> = Vec::new();

            if let Some(code) = &query.code {
                results.extend(subdivisions.find(&[("code", &code.to_uppercase())])?);
            } else if let Some(name) = &query.name {
                if query.exact {
                    results.extend(subdivisions.find(&[("name", name)])?);
                } else {
                    results = subdivisions.search(&[("name", name)])?;
                }
            } else if let Some(country) = &query.country {
                let prefix = format!("{}-", country.to_uppercase());
                results = subdivisions
                    .iter()
                    .filter(|s| s.code.starts_with(&prefix))
                    .collect();
            } else {
                debug_assert!(query.list_all);
                results = subdivisions.iter().collect();
            }

            finish(results, &args, fields.as_deref())?
        }

        Commands::FormerCountries(ref query) => {
            let former = isodb_core::former_countries()?;
            let mut results: Vec<&isodb_core::FormerCountry> = Vec::new();

            if let Some(code) = &query.code {
                let code = code.to_uppercase();
                let hit = former
                    .find(&[("alpha_2", &code)])?
                    .or(former.find(&[("alpha_3", &code)])?)
                    .or(former.find(&[("alpha_4", &code)])?);
                results.extend(hit);
            } else if let Some(name) = &query.name {
                if query.exact {
                    results.extend(former.find(&[("name", name)])?);
                } else {
                    results = former.search(&[("name", name)])?;
                }
            } else {
                debug_assert!(query.list_all);
                results = former.iter().collect();
            }

            finish(results, &args, fields.as_deref())?
        }

        Commands::Languages(ref query) => {
            let languages = isodb_core::languages()?;
            let mut results: Vec<&isodb_core::Language> = Vec::new();

            if let Some(code) = &query.code {
                let code = code.to_lowercase();
                let hit = languages
                    .find(&[("alpha_2", &code)])?
                    .or(languages.find(&[("alpha_3", &code)])?);
                results.extend(hit);
            } else if let Some(name) = &query.name {
                if query.exact {
                    results.extend(languages.find(&[("name", name)])?);
                } else {
                    results = languages.search(&[("name", name)])?;
                }
            } else {
                debug_assert!(query.list_all);
                results = languages.iter().collect();
            }

            finish(results, &args, fields.as_deref())?
        }

        Commands::Currencies(ref query) => {
            let currencies = isodb_core::currencies()?;
            let mut results: Vec<&isodb_core::Currency> = Vec::new();

            if let Some(code) = &query.code {
                results.extend(currencies.find(&[("alpha_3", &code.to_uppercase())])?);
            } else if let Some(name) = &query.name {
                if query.exact {
                    results.extend(currencies.find(&[("name", name)])?);
                } else {
                    results = currencies.search(&[("name", name)])?;
                }
            } else if let Some(numeric) = &query.numeric {
                results.extend(currencies.find(&[("numeric", numeric)])?);
            } else {
                debug_assert!(query.list_all);
                results = currencies.iter().collect();
            }

            finish(results, &args, fields.as_deref())?
        }

        Commands::Scripts(ref query) => {
            let scripts = isodb_core::script_names()?;
            let mut results: Vec<&isodb_core::ScriptName> = Vec::new();

            if let Some(code) = &query.code {
                results.extend(scripts.find(&[("alpha_4", &title_case(code))])?);
            } else if let Some(name) = &query.name {
                if query.exact {
                    results.extend(scripts.find(&[("name", name)])?);
                } else {
                    results = scripts.search(&[("name", name)])?;
                }
            } else if let Some(numeric) = &query.numeric {
                results.extend(scripts.find(&[("numeric", numeric)])?);
            } else {
                debug_assert!(query.list_all);
                results = scripts.iter().collect();
            }

            finish(results, &args, fields.as_deref())?
        }
    };

    println!("{printed}");
    Ok(())
}

fn finish<R: IsoRecord>(
    mut results: Vec<&R>,
    args: &CliArgs,
    fields: Option<&[String]>,
) -> Result<String> {
    if let Some(limit) = args.limit {
        results.truncate(limit);
    }
    render(&results, args.format, fields)
}

/// ISO 15924 codes are title-cased (`Latn`), but users type `latn`/`LATN`.
fn title_case(code: &str) -> String {
    let mut chars = code.chars();
    match chars.next() {
        Some(first) => {
            first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
        }
        None => String::new(),
    }
}
