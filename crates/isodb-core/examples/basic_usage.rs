//! Basic usage example for isodb-core
//!
//! This example demonstrates how to:
//! - Load the bundled ISO datasets
//! - Look up records by exact criteria
//! - Search by substring
//! - Use the sorted views and former-name resolution

use isodb_core::Result;

fn main() -> Result<()> {
    println!("=== isodb-core Basic Usage Example ===\n");

    // Example 1: Load the countries dataset
    println!("--- Example 1: Load countries ---");
    let countries = isodb_core::countries()?;
    println!("Total countries: {}", countries.len());
    for (i, country) in countries.iter().take(5).enumerate() {
        println!("{}. {} ({})", i + 1, country.name, country.alpha_2);
    }
    println!("... and {} more\n", countries.len() - 5);

    // Example 2: Exact lookup
    println!("--- Example 2: Find a country by code ---");
    if let Some(country) = countries.find(&[("alpha_2", "US")])? {
        println!("Found: {} {}", country.flag, country.name);
        println!("Alpha-3: {}", country.alpha_3);
        println!("Numeric: {}", country.numeric);
        if let Some(official) = &country.official_name {
            println!("Official name: {official}");
        }
    }
    println!();

    // Example 3: Substring search
    println!("--- Example 3: Search by name fragment ---");
    let islands = countries.search(&[("name", "Island")])?;
    println!("Countries matching \"Island\": {}", islands.len());
    for country in islands.iter().take(5) {
        println!("- {}", country.name);
    }
    println!();

    // Example 4: Sorted views
    println!("--- Example 4: Sorted by numeric code ---");
    for (numeric, country) in countries.by_numeric().iter().take(5) {
        println!("{numeric} {}", country.name);
    }
    println!();

    // Example 5: Former names
    println!("--- Example 5: Resolve former names ---");
    for former in ["Burma", "Zaire", "Czechoslovakia"] {
        match countries.get_by_former_name(former) {
            Some(country) => println!("{former} -> {} ({})", country.name, country.alpha_2),
            None => {
                let info = countries.get_former_names_info(former)?;
                println!("{former} -> no successor ({})", info.comment);
            }
        }
    }
    println!();

    // Example 6: Other datasets
    println!("--- Example 6: Other standards ---");
    let currencies = isodb_core::currencies()?;
    if let Some(euro) = currencies.find(&[("alpha_3", "EUR")])? {
        println!("Currency: {} ({})", euro.name, euro.numeric);
    }
    let languages = isodb_core::languages()?;
    if let Some(german) = languages.find(&[("alpha_2", "de")])? {
        println!("Language: {} ({})", german.name, german.alpha_3);
    }
    let scripts = isodb_core::script_names()?;
    if let Some(latin) = scripts.find(&[("alpha_4", "Latn")])? {
        println!("Script: {} ({})", latin.name, latin.numeric);
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
