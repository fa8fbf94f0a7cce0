//! Error handling example for iso3166-rs
//!
//! Lookups and filters never fail: a missing code is `None` and an unknown
//! region is an empty list. Loading a dataset and strict index construction
//! can fail with `IsoError`.

use iso3166_rs::prelude::*;

fn main() -> Result<(), IsoError> {
    println!("=== ISO3166-RS Error Handling Example ===\n");

    // Example 1: Handling database load errors
    println!("--- Example 1: Loading database with error handling ---");
    let db = match CountryDb::load() {
        Ok(db) => {
            println!("✓ Database loaded successfully");
            println!("  Countries: {}", db.len());
            db
        }
        Err(e) => {
            eprintln!("✗ Failed to load database: {e}");
            return Err(e);
        }
    };
    println!();

    // Example 2: Codes that do not resolve
    println!("--- Example 2: Unknown and malformed codes ---");
    for code in ["XX", "ZZZ", "999", "", "A", "ABCD", "Ü"] {
        match db.lookup_by_code(code) {
            Some(country) => println!("  Found: {} ({})", country.name(), country.alpha2()),
            None => println!("  Not found: {code:?} (shape: {:?})", CodeKind::classify(code)),
        }
    }
    println!();

    // Example 3: `?`-friendly lookup
    println!("--- Example 3: require_by_code ---");
    match db.require_by_code("QQ") {
        Ok(country) => println!("  Found: {}", country.name()),
        Err(e) => println!("  Error: {e}"),
    }
    println!();

    // Example 4: Missing files and unsupported formats
    println!("--- Example 4: Loading from disk ---");
    for path in ["/does/not/exist.json", "countries.csv"] {
        if let Err(e) = CountryDb::load_from_path(path, DuplicatePolicy::LastWins) {
            println!("  {path}: {e}");
        }
    }
    println!();

    // Example 5: Duplicate codes under both policies
    println!("--- Example 5: Duplicate codes ---");
    let mut countries = db.countries().to_vec();
    let mut clone = countries[0].clone();
    clone.common_name = "Shadow".into();
    clone.numeric_code = "999".into();
    clone.three_letter_code = "ZZZ".into();
    countries.push(clone);

    match CountryDb::with_policy(countries.clone(), DuplicatePolicy::Reject) {
        Ok(_) => println!("  Strict build accepted the dataset"),
        Err(e) => println!("  Strict build: {e}"),
    }
    let lenient = CountryDb::from_countries(countries);
    let code = lenient.countries()[0].alpha2().to_string();
    println!(
        "  Last-wins build: {code} -> {}",
        lenient.lookup_by_code(&code).map_or("-", |c| c.name())
    );

    Ok(())
}
