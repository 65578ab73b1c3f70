//! Multi-planet system derivation.
//!
//! Groups confirmed Kepler and K2 rows by host star and assembles the
//! ranked system records consumed by the orrery view. Grouping works on
//! raw rows because it needs fields the unified planet record does not
//! carry (semi-major axis, host-star linkage).

use std::collections::HashMap;

use tracing::warn;

use crate::catalog::{CatalogResult, CatalogStore, DispositionRule, RawTable};
use crate::models::system::{SUN_RADIUS, SUN_TEFF_K};
use crate::models::{
    planet_color, Disposition, Mission, PlanetEntry, SystemRecord, AU_TO_STELLAR_RADII,
};

/// Maximum planets rendered per system.
const MAX_PLANETS_PER_SYSTEM: usize = 8;

/// Number of top-ranked systems returned.
const MAX_SYSTEMS: usize = 20;

/// Columns a Kepler row must fill to participate in grouping.
const KEPLER_SYSTEM_REQUIRED: [&str; 4] = ["kepoi_name", "koi_prad", "koi_period", "koi_sma"];

/// Columns a K2 row must fill to participate in grouping.
const K2_SYSTEM_REQUIRED: [&str; 3] = ["pl_orbper", "pl_rade", "pl_orbsmax"];

/// Derive the multi-planet systems of one mission's table.
///
/// Only Kepler and K2 contribute; other missions yield no systems.
pub fn collect_mission_systems(table: &RawTable, mission: Mission) -> Vec<SystemRecord> {
    match mission {
        Mission::Kepler => collect_kepler_systems(table),
        Mission::K2 => collect_k2_systems(table),
        Mission::Tess => Vec::new(),
    }
}

/// Combine Kepler and K2 systems, deduplicate by display name and return
/// the top systems ranked by planet count.
///
/// A missing source file contributes zero systems; any other read failure
/// still surfaces as an error.
pub fn load_planet_systems(store: &CatalogStore) -> CatalogResult<Vec<SystemRecord>> {
    let mut systems: Vec<SystemRecord> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for mission in [Mission::Kepler, Mission::K2] {
        let collected = match store.read_table(mission) {
            Ok(table) => collect_mission_systems(&table, mission),
            Err(err) if err.is_not_found() => {
                warn!(mission = %mission, %err, "catalog unavailable, skipping mission systems");
                Vec::new()
            }
            Err(err) => return Err(err),
        };

        for system in collected {
            match index.get(&system.name) {
                // Colliding display name across missions: the later
                // mission's entry replaces the earlier one in place.
                // Last-write-wins is kept for output compatibility even
                // though it may mask distinct systems sharing a name.
                Some(&position) => systems[position] = system,
                None => {
                    index.insert(system.name.clone(), systems.len());
                    systems.push(system);
                }
            }
        }
    }

    systems.sort_by(|a, b| b.planet_count.cmp(&a.planet_count));
    systems.truncate(MAX_SYSTEMS);
    Ok(systems)
}

struct Member {
    label: String,
    display_name: Option<String>,
    distance: f64,
    size: f64,
    period: f64,
    mass: Option<f64>,
    star_temp: Option<f64>,
    star_radius: Option<f64>,
}

fn collect_kepler_systems(table: &RawTable) -> Vec<SystemRecord> {
    let mut groups = Grouping::default();

    for row in table.rows() {
        if DispositionRule::Substring.normalize(row.get("koi_disposition"))
            != Disposition::Confirmed
        {
            continue;
        }
        if !row.has_all(&KEPLER_SYSTEM_REQUIRED) {
            continue;
        }
        let (Some(size), Some(period), Some(sma)) = (
            row.get_f64("koi_prad"),
            row.get_f64("koi_period"),
            row.get_f64("koi_sma"),
        ) else {
            continue;
        };

        // `K00001.02` -> host key `K00001`
        let designator = row.get("kepoi_name").unwrap_or_default();
        let key = designator
            .split('.')
            .next()
            .unwrap_or(designator)
            .to_string();

        let kepler_name = row.get_string("kepler_name");
        let label = kepler_name
            .as_deref()
            .and_then(planet_letter)
            .unwrap_or_else(|| {
                designator
                    .split_once('.')
                    .map(|(_, suffix)| suffix.to_string())
                    .unwrap_or_else(|| designator.to_string())
            });

        groups.push(
            key,
            Member {
                label,
                display_name: kepler_name.as_deref().and_then(host_name),
                distance: sma * AU_TO_STELLAR_RADII,
                size,
                period,
                mass: None,
                star_temp: row.get_f64("koi_steff"),
                star_radius: row.get_f64("koi_srad"),
            },
        );
    }

    groups.into_systems(Mission::Kepler)
}

fn collect_k2_systems(table: &RawTable) -> Vec<SystemRecord> {
    let mut groups = Grouping::default();

    for row in table.rows() {
        if DispositionRule::Substring.normalize(row.get("disposition")) != Disposition::Confirmed {
            continue;
        }
        if !row.has_all(&K2_SYSTEM_REQUIRED) {
            continue;
        }
        // Grouping needs an explicit host star; rows without one are skipped.
        let Some(hostname) = row.get_string("hostname") else {
            continue;
        };
        let (Some(size), Some(period), Some(sma)) = (
            row.get_f64("pl_rade"),
            row.get_f64("pl_orbper"),
            row.get_f64("pl_orbsmax"),
        ) else {
            continue;
        };

        let label = row
            .get("pl_name")
            .and_then(planet_letter)
            .unwrap_or_else(|| hostname.clone());

        groups.push(
            hostname,
            Member {
                label,
                display_name: None,
                distance: sma * AU_TO_STELLAR_RADII,
                size,
                period,
                mass: row.get_f64("pl_masse"),
                star_temp: row.get_f64("st_teff"),
                star_radius: row.get_f64("st_rad"),
            },
        );
    }

    groups.into_systems(Mission::K2)
}

/// Grouping accumulator preserving first-seen key order.
#[derive(Default)]
struct Grouping {
    order: Vec<String>,
    members: HashMap<String, Vec<Member>>,
}

impl Grouping {
    fn push(&mut self, key: String, member: Member) {
        let entry = self.members.entry(key.clone()).or_default();
        if entry.is_empty() {
            self.order.push(key);
        }
        entry.push(member);
    }

    fn into_systems(mut self, mission: Mission) -> Vec<SystemRecord> {
        let mut systems = Vec::new();
        for key in self.order {
            let Some(members) = self.members.remove(&key) else {
                continue;
            };
            // A host with a single qualifying planet is not a system.
            if members.len() < 2 {
                continue;
            }

            let name = members
                .iter()
                .find_map(|m| m.display_name.clone())
                .unwrap_or_else(|| key.clone());
            let star_temp = members
                .iter()
                .find_map(|m| m.star_temp)
                .unwrap_or(SUN_TEFF_K);
            let star_radius = members
                .iter()
                .find_map(|m| m.star_radius)
                .unwrap_or(SUN_RADIUS);

            let mut planets: Vec<PlanetEntry> = members
                .into_iter()
                .map(|m| PlanetEntry {
                    name: m.label,
                    distance: m.distance,
                    size: m.size,
                    period: m.period,
                    mass: m.mass,
                    color: planet_color(m.size).to_string(),
                })
                .collect();
            planets.sort_by(|a, b| a.distance.total_cmp(&b.distance));
            planets.truncate(MAX_PLANETS_PER_SYSTEM);

            systems.push(SystemRecord {
                name,
                star_temp,
                star_radius,
                planet_count: planets.len(),
                planets,
                mission,
            });
        }
        systems
    }
}

/// `"Kepler-227 b"` -> `"b"`: the trailing planet-letter token.
fn planet_letter(full_name: &str) -> Option<String> {
    full_name
        .rsplit_once(' ')
        .map(|(_, letter)| letter.to_string())
}

/// `"Kepler-227 b"` -> `"Kepler-227"`: the name without its planet letter.
fn host_name(full_name: &str) -> Option<String> {
    full_name
        .rsplit_once(' ')
        .map(|(host, _)| host.to_string())
}
