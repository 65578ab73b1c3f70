//! Source-file resolution and reading.
//!
//! The store owns the data directory layout: where each mission's CSV
//! lives and how a missing or unreadable file maps onto [`CatalogError`].
//! It holds no parsed state; every read goes back to disk.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::config::CatalogSettings;
use crate::models::Mission;

use super::error::{CatalogError, CatalogResult};
use super::table::RawTable;

/// Resolves and reads the per-mission catalog files.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    data_dir: PathBuf,
    kepler_file: String,
    tess_file: String,
    k2_file: String,
}

impl CatalogStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            kepler_file: Mission::Kepler.default_source_file().to_string(),
            tess_file: Mission::Tess.default_source_file().to_string(),
            k2_file: Mission::K2.default_source_file().to_string(),
        }
    }

    pub fn from_settings(settings: &CatalogSettings) -> Self {
        let mut store = Self::new(settings.data_dir.clone());
        if let Some(ref name) = settings.kepler_file {
            store.kepler_file = name.clone();
        }
        if let Some(ref name) = settings.tess_file {
            store.tess_file = name.clone();
        }
        if let Some(ref name) = settings.k2_file {
            store.k2_file = name.clone();
        }
        store
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of a mission's source file.
    pub fn mission_path(&self, mission: Mission) -> PathBuf {
        let file = match mission {
            Mission::Kepler => &self.kepler_file,
            Mission::Tess => &self.tess_file,
            Mission::K2 => &self.k2_file,
        };
        self.data_dir.join(file)
    }

    /// True when the mission's source file exists on disk.
    pub fn is_available(&self, mission: Mission) -> bool {
        self.mission_path(mission).is_file()
    }

    /// Read and parse a mission's source file.
    pub fn read_table(&self, mission: Mission) -> CatalogResult<RawTable> {
        let path = self.mission_path(mission);
        if !path.is_file() {
            return Err(CatalogError::source_not_found(path.display().to_string()));
        }
        let file = File::open(&path).map_err(|e| {
            CatalogError::malformed(format!("failed to open {}: {}", path.display(), e))
        })?;
        RawTable::from_reader(BufReader::new(file))
    }
}
