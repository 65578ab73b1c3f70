//! Generic catalog normalization.
//!
//! One code path serves all three missions; the differences live in
//! [`MissionProfile`](crate::catalog::MissionProfile). Rows missing any of
//! the profile's required fields are dropped silently; only the aggregate
//! count is observable.

use chrono::Datelike;
use tracing::info;

use crate::catalog::{CatalogResult, CatalogStore, NameRule, RawRow, RawTable, YearRule};
use crate::models::{Mission, PlanetRecord};

/// Read a mission's source file and normalize it.
pub fn load_mission_catalog(
    store: &CatalogStore,
    mission: Mission,
) -> CatalogResult<Vec<PlanetRecord>> {
    let table = store.read_table(mission)?;
    let records = normalize_catalog(&table, mission)?;
    info!(
        mission = %mission,
        raw_rows = table.len(),
        normalized = records.len(),
        "normalized catalog"
    );
    Ok(records)
}

/// Normalize an already-parsed table. Pure; the same input always yields
/// the same output.
pub fn normalize_catalog(table: &RawTable, mission: Mission) -> CatalogResult<Vec<PlanetRecord>> {
    let profile = mission.profile();
    table.require_columns(profile.required)?;

    let mut records = Vec::new();
    for row in table.rows() {
        if !row.has_all(profile.required) {
            continue;
        }
        records.push(normalize_row(&row, mission));
    }
    Ok(records)
}

fn normalize_row(row: &RawRow<'_>, mission: Mission) -> PlanetRecord {
    let profile = mission.profile();
    let cols = &profile.numeric;

    // Required fields are non-empty here, guarded by the caller.
    let pl_name = match profile.name {
        NameRule::Column(column) => row.get_string(column).unwrap_or_default(),
        NameRule::Prefixed { column, prefix } => {
            format!("{}{}", prefix, row.get(column).unwrap_or_default())
        }
    };

    let disposition = profile
        .disposition
        .normalize(row.get(profile.disposition_column));

    PlanetRecord {
        mission,
        pl_name,
        disposition,
        discovery_year: derive_year(row, profile.year, mission.fallback_year()),
        pl_orbper: row.get_f64(cols.orbital_period),
        pl_rade: row.get_f64(cols.planet_radius),
        st_rad: row.get_f64(cols.stellar_radius),
        st_teff: row.get_f64(cols.stellar_teff),
        st_mass: cols.stellar_mass.and_then(|c| row.get_f64(c)),
        pl_insol: cols.insolation.and_then(|c| row.get_f64(c)),
        pl_eqt: cols.equilibrium_temp.and_then(|c| row.get_f64(c)),
        ra: row.get_f64(cols.ra),
        dec: row.get_f64(cols.dec),
        koi_score: match mission {
            Mission::Kepler => row.get_f64("koi_score"),
            _ => None,
        },
        toi: match mission {
            Mission::Tess => row.get_string("toi"),
            _ => None,
        },
        hostname: match mission {
            Mission::K2 => row.get_string("hostname"),
            _ => None,
        },
    }
}

/// Derive the discovery year for one row, applying the mission fallback
/// when the source value is absent, unparseable or outside a sane range.
fn derive_year(row: &RawRow<'_>, rule: YearRule, fallback: i32) -> i32 {
    let parsed = match rule {
        YearRule::Date(column) => row.get(column).and_then(parse_year_text),
        YearRule::Numeric(column) => row.get_f64(column).map(|value| value as i32),
    };
    parsed
        .filter(|year| (1900..=2100).contains(year))
        .unwrap_or(fallback)
}

/// Accepts `YYYY-MM-DD` dates or any value whose leading four characters
/// form a year.
fn parse_year_text(value: &str) -> Option<i32> {
    if let Ok(date) = chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.year());
    }
    value.get(..4)?.parse().ok()
}
