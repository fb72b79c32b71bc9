//! Error handling example for isodb-core
//!
//! Shows which outcomes are errors and which are plain "no match" results.

use isodb_core::{Error, Result};

fn main() -> Result<()> {
    let countries = isodb_core::countries()?;

    // "No match" is not an error: branch on the Option.
    match countries.find(&[("alpha_2", "ZZ")])? {
        Some(country) => println!("Found {}", country.name),
        None => println!("ZZ is not an assigned code"),
    }

    // Invalid criteria are reported synchronously.
    match countries.get(&[]) {
        Err(Error::EmptyCriteria) => println!("At least one criterion is required"),
        other => println!("Unexpected: {other:?}"),
    }

    match countries.get(&[("population", "83000000")]) {
        Err(Error::UnknownField { field, standard }) => {
            println!("`{field}` is not a field of ISO {standard}")
        }
        other => println!("Unexpected: {other:?}"),
    }

    // Former-name metadata distinguishes unknown names from dissolved states.
    match countries.get_former_names_info("Atlantis") {
        Err(Error::UnknownFormerName { name }) => println!("`{name}` was never a country"),
        Ok(info) => println!("Known historical name: {}", info.former_name),
        other => println!("Unexpected: {other:?}"),
    }

    let info = countries.get_former_names_info("Czechoslovakia")?;
    println!(
        "Czechoslovakia has no successor: {} ({})",
        info.comment, info.change_date
    );

    Ok(())
}
