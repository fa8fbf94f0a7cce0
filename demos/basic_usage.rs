//! Basic usage example for iso3166-rs
//!
//! This example demonstrates how to:
//! - Load the bundled country database
//! - Look up a country by numeric, alpha-2 and alpha-3 code
//! - List the countries of a region and a subregion

use iso3166_rs::prelude::*;

fn main() -> Result<(), IsoError> {
    println!("=== ISO3166-RS Basic Usage Example ===\n");

    // Load the database (parsed and indexed once per process)
    println!("Loading country database...");
    let db = CountryDb::load()?;
    println!("✓ Database loaded successfully\n");

    // Example 1: Get all countries
    println!("--- Example 1: List all countries ---");
    let countries = db.countries();
    println!("Total countries: {}", countries.len());
    for (i, country) in countries.iter().take(5).enumerate() {
        println!("{}. {} ({})", i + 1, country.name(), country.alpha2());
    }
    println!("... and {} more\n", countries.len() - 5);

    // Example 2: One country, three codes
    println!("--- Example 2: Lookup by any code ---");
    for code in ["US", "usa", "840"] {
        if let Some(country) = db.lookup_by_code(code) {
            println!("{code:>4} -> {}", country.name());
        }
    }
    println!();

    // Example 3: Full record
    println!("--- Example 3: Full record ---");
    if let Some(country) = db.lookup_by_code("CH") {
        print!("{country}");
    }
    println!();

    // Example 4: Region and subregion
    println!("--- Example 4: Region and subregion ---");
    let oceania = db.records_by_region("Oceania");
    println!("Countries in Oceania: {}", oceania.len());
    for country in db.records_by_subregion("Melanesia") {
        println!("- {} (capital: {})", country.name(), country.capital().unwrap_or("-"));
    }
    println!();

    // Example 5: The crate-level shortcuts use the same bundled data
    println!("--- Example 5: Crate-level functions ---");
    let (found, jp) = iso3166_rs::try_lookup_by_code("JPN");
    println!("found = {found}, name = {:?}", jp.map(|c| c.name()));

    Ok(())
}
