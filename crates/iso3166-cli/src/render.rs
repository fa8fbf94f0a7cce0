//! Text and JSON output for the `iso3166` binary.
//!
//! Every writer takes the output stream and a `json` switch, so the binary
//! and the tests share one code path.

use iso3166_core::{CountryDb, CountryInfo, CountryLookup, DbStats, SearchHit};
use serde::Serialize;
use std::io::Write;

/// Country count for one subregion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubregionSummary<'a> {
    pub name: &'a str,
    pub countries: usize,
}

/// Country count for one region, with its subregions in dataset order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionSummary<'a> {
    pub name: &'a str,
    pub countries: usize,
    pub subregions: Vec<SubregionSummary<'a>>,
}

pub fn region_summaries(db: &CountryDb) -> Vec<RegionSummary<'_>> {
    db.regions()
        .into_iter()
        .map(|region| RegionSummary {
            name: region,
            countries: db.records_by_region(region).len(),
            subregions: db
                .subregions_of(region)
                .into_iter()
                .map(|sub| SubregionSummary {
                    name: sub,
                    countries: db.records_by_subregion(sub).len(),
                })
                .collect(),
        })
        .collect()
}

/// One line per country: `DE  DEU  276  Germany`.
pub fn country_line(c: &CountryInfo) -> String {
    format!(
        "{}  {}  {}  {}",
        c.two_letter_code, c.three_letter_code, c.numeric_code, c.common_name
    )
}

pub fn write_country(out: &mut impl Write, country: &CountryInfo, json: bool) -> anyhow::Result<()> {
    if json {
        return write_json(out, country);
    }
    write!(out, "{country}")?;
    Ok(())
}

pub fn write_countries(
    out: &mut impl Write,
    countries: &[&CountryInfo],
    json: bool,
) -> anyhow::Result<()> {
    if json {
        return write_json(out, &countries);
    }
    if countries.is_empty() {
        writeln!(out, "No countries found")?;
    }
    for c in countries {
        writeln!(out, "{}", country_line(c))?;
    }
    Ok(())
}

pub fn write_hits(out: &mut impl Write, hits: &[SearchHit<'_>], json: bool) -> anyhow::Result<()> {
    if json {
        return write_json(out, &hits);
    }
    if hits.is_empty() {
        writeln!(out, "No countries found")?;
    }
    for hit in hits {
        writeln!(out, "{:>3}  {}", hit.score, country_line(hit.country))?;
    }
    Ok(())
}

pub fn write_regions(
    out: &mut impl Write,
    regions: &[RegionSummary<'_>],
    json: bool,
) -> anyhow::Result<()> {
    if json {
        return write_json(out, &regions);
    }
    for region in regions {
        writeln!(out, "{} ({})", region.name, region.countries)?;
        for sub in &region.subregions {
            writeln!(out, "  {} ({})", sub.name, sub.countries)?;
        }
    }
    Ok(())
}

pub fn write_stats(out: &mut impl Write, stats: &DbStats, json: bool) -> anyhow::Result<()> {
    if json {
        return write_json(out, stats);
    }
    writeln!(out, "Database statistics:")?;
    writeln!(out, "  Countries: {}", stats.countries)?;
    writeln!(out, "  Regions: {}", stats.regions)?;
    writeln!(out, "  Subregions: {}", stats.subregions)?;
    writeln!(out, "  Currencies: {}", stats.currencies)?;
    writeln!(out, "  Languages: {}", stats.languages)?;
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
