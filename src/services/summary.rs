//! Per-mission catalog summaries.
//!
//! Best-effort across all three missions: a missing or unreadable source
//! file marks that mission unavailable instead of failing the request,
//! mirroring the grouper's partial-availability semantics.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::{checksum, CatalogStore};
use crate::models::{Disposition, Mission};

use super::normalizer::load_mission_catalog;

/// Summary of all mission catalogs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub missions: Vec<MissionSummary>,
}

/// Record counts and content fingerprint for one mission's catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionSummary {
    pub mission: Mission,
    pub available: bool,
    pub total: usize,
    pub confirmed: usize,
    pub candidate: usize,
    pub false_positive: usize,
    pub min_discovery_year: Option<i32>,
    pub max_discovery_year: Option<i32>,
    /// SHA-256 of the raw source file, stable across reads.
    pub checksum: Option<String>,
}

impl MissionSummary {
    fn unavailable(mission: Mission) -> Self {
        Self {
            mission,
            available: false,
            total: 0,
            confirmed: 0,
            candidate: 0,
            false_positive: 0,
            min_discovery_year: None,
            max_discovery_year: None,
            checksum: None,
        }
    }
}

/// Summarize every mission catalog. Never fails; unreadable sources are
/// reported as unavailable.
pub fn load_catalog_summary(store: &CatalogStore) -> CatalogSummary {
    let missions = Mission::ALL
        .into_iter()
        .map(|mission| summarize_mission(store, mission))
        .collect();
    CatalogSummary { missions }
}

fn summarize_mission(store: &CatalogStore, mission: Mission) -> MissionSummary {
    let records = match load_mission_catalog(store, mission) {
        Ok(records) => records,
        Err(err) => {
            warn!(mission = %mission, %err, "catalog unavailable for summary");
            return MissionSummary::unavailable(mission);
        }
    };

    let mut summary = MissionSummary {
        mission,
        available: true,
        total: records.len(),
        confirmed: 0,
        candidate: 0,
        false_positive: 0,
        min_discovery_year: None,
        max_discovery_year: None,
        checksum: checksum::checksum_file(&store.mission_path(mission)).ok(),
    };

    for record in &records {
        match record.disposition {
            Disposition::Confirmed => summary.confirmed += 1,
            Disposition::Candidate => summary.candidate += 1,
            Disposition::FalsePositive => summary.false_positive += 1,
        }
        summary.min_discovery_year = Some(match summary.min_discovery_year {
            Some(year) => year.min(record.discovery_year),
            None => record.discovery_year,
        });
        summary.max_discovery_year = Some(match summary.max_discovery_year {
            Some(year) => year.max(record.discovery_year),
            None => record.discovery_year,
        });
    }

    summary
}
