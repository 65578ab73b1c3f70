//! Unified planet record shared by all three mission catalogs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Source mission for a catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mission {
    Kepler,
    #[serde(rename = "TESS")]
    Tess,
    K2,
}

impl Mission {
    /// All missions, in the order they are reported by the summary endpoint.
    pub const ALL: [Mission; 3] = [Mission::Kepler, Mission::Tess, Mission::K2];

    /// Fallback discovery year used when the source column is absent or unparseable.
    pub fn fallback_year(&self) -> i32 {
        match self {
            Mission::Kepler => 2011,
            Mission::Tess => 2019,
            Mission::K2 => 2015,
        }
    }

    /// Default source file name inside the catalog data directory.
    pub fn default_source_file(&self) -> &'static str {
        match self {
            Mission::Kepler => "kepler_koi.csv",
            Mission::Tess => "tess_toi.csv",
            Mission::K2 => "k2_pandc.csv",
        }
    }
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Mission::Kepler => "kepler",
            Mission::Tess => "tess",
            Mission::K2 => "k2",
        };
        write!(f, "{}", token)
    }
}

impl FromStr for Mission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kepler" => Ok(Mission::Kepler),
            "tess" => Ok(Mission::Tess),
            "k2" => Ok(Mission::K2),
            other => Err(format!("unknown mission '{}'", other)),
        }
    }
}

/// Vetting classification of a candidate.
///
/// Normalized records always carry one of these three values, never the raw
/// source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disposition {
    #[serde(rename = "CONFIRMED")]
    Confirmed,
    #[serde(rename = "CANDIDATE")]
    Candidate,
    #[serde(rename = "FALSE_POSITIVE")]
    FalsePositive,
}

impl Disposition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Confirmed => "CONFIRMED",
            Disposition::Candidate => "CANDIDATE",
            Disposition::FalsePositive => "FALSE_POSITIVE",
        }
    }
}

/// One normalized catalog entry in the unified wire shape consumed by the
/// frontend.
///
/// The astrophysical numerics are always present in the JSON output and
/// `null` when the source value was missing or unparseable; the
/// mission-specific extras are omitted entirely when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetRecord {
    pub mission: Mission,
    pub pl_name: String,
    pub disposition: Disposition,
    pub discovery_year: i32,
    /// Orbital period in days.
    pub pl_orbper: Option<f64>,
    /// Planet radius in Earth radii.
    pub pl_rade: Option<f64>,
    /// Stellar radius in solar radii.
    pub st_rad: Option<f64>,
    /// Stellar effective temperature in Kelvin.
    pub st_teff: Option<f64>,
    /// Stellar mass in solar masses.
    pub st_mass: Option<f64>,
    /// Insolation flux in Earth flux units.
    pub pl_insol: Option<f64>,
    /// Equilibrium temperature in Kelvin.
    pub pl_eqt: Option<f64>,
    pub ra: Option<f64>,
    pub dec: Option<f64>,
    /// Kepler vetting score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub koi_score: Option<f64>,
    /// TESS Object of Interest number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toi: Option<String>,
    /// K2 host star name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
}
