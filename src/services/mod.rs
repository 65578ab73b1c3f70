//! Service layer: catalog normalization, system derivation and summaries.
//!
//! Services sit between the catalog store and the HTTP handlers. Each call
//! re-reads the source files from disk; there is no cached state.

pub mod normalizer;
pub mod summary;
pub mod systems;

pub use normalizer::{load_mission_catalog, normalize_catalog};
pub use summary::{load_catalog_summary, CatalogSummary, MissionSummary};
pub use systems::{collect_mission_systems, load_planet_systems};
