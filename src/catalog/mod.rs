//! Catalog file access: raw CSV parsing, per-mission column profiles and
//! source-file resolution.
//!
//! Everything here is mission-agnostic except [`profile`], which holds the
//! one configuration table that distinguishes Kepler, TESS and K2 sources.

pub mod checksum;
pub mod error;
pub mod profile;
pub mod store;
pub mod table;

pub use error::{CatalogError, CatalogResult};
pub use profile::{DispositionRule, MissionProfile, NameRule, YearRule};
pub use store::CatalogStore;
pub use table::{RawRow, RawTable};
