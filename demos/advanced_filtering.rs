//! Advanced filtering example for iso3166-rs
//!
//! Demonstrates name search with accent folding, calling-code and currency
//! filters, the ranked smart search and dataset statistics.

use iso3166_rs::prelude::*;

fn main() -> Result<(), IsoError> {
    println!("=== ISO3166-RS Advanced Filtering Example ===\n");

    let db = CountryDb::load()?;

    // Example 1: Accent- and case-insensitive names
    println!("--- Example 1: Find by name ---");
    for name in ["cote d'ivoire", "CURACAO", "Deutschland", "aland islands"] {
        match db.find_by_name(name) {
            Some(c) => println!("{name:>15} -> {} ({})", c.name(), c.alpha2()),
            None => println!("{name:>15} -> not found"),
        }
    }
    println!();

    // Example 2: Calling codes
    println!("--- Example 2: Calling code +1 ---");
    let exact = db.find_by_dialing_code("+1");
    let prefixed = db.find_by_dialing_prefix("+1");
    println!("Exactly +1: {}", names(&exact));
    println!("Starting with +1: {} countries", prefixed.len());
    println!();

    // Example 3: Currency and language
    println!("--- Example 3: Euro area and French speakers ---");
    println!("EUR: {} countries", db.find_by_currency("EUR").len());
    println!("French: {}", names(&db.find_by_language("French")));
    println!();

    // Example 4: Ranked search
    println!("--- Example 4: Smart search for \"guinea\" ---");
    for hit in db.smart_search("guinea") {
        println!("{:>3}  {}", hit.score, hit.country.name());
    }
    println!();

    // Example 5: Regions with their subregions
    println!("--- Example 5: Regions ---");
    for region in db.regions() {
        println!("{region}: {}", db.subregions_of(region).join(", "));
    }
    println!();

    let stats = db.stats();
    println!(
        "{} countries, {} regions, {} subregions, {} currencies, {} languages",
        stats.countries, stats.regions, stats.subregions, stats.currencies, stats.languages
    );

    Ok(())
}

fn names(countries: &[&CountryInfo]) -> String {
    countries
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(", ")
}
