//! Domain model types shared across the catalog and HTTP layers.

pub mod planet;
pub mod system;

pub use planet::{Disposition, Mission, PlanetRecord};
pub use system::{planet_color, PlanetEntry, SystemRecord, AU_TO_STELLAR_RADII};
