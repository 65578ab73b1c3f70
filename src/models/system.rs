//! Multi-planet system records derived from the confirmed-planet subsets.

use serde::{Deserialize, Serialize};

use super::Mission;

/// Visualization scaling factor from semi-major axis (AU) to approximate
/// stellar radii. Not a physical unit conversion; the frontend layout
/// depends on this exact value.
pub const AU_TO_STELLAR_RADII: f64 = 215.0;

/// Effective temperature assumed when the host star has no measured value.
pub const SUN_TEFF_K: f64 = 5778.0;

/// Stellar radius assumed when the host star has no measured value.
pub const SUN_RADIUS: f64 = 1.0;

/// A host star with two or more confirmed planets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemRecord {
    pub name: String,
    pub star_temp: f64,
    pub star_radius: f64,
    pub planet_count: usize,
    /// Sorted ascending by `distance`, at most 8 entries.
    pub planets: Vec<PlanetEntry>,
    pub mission: Mission,
}

/// One planet inside a [`SystemRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetEntry {
    /// Planet designator within the system (letter or ordinal suffix).
    pub name: String,
    /// Semi-major axis scaled by [`AU_TO_STELLAR_RADII`].
    pub distance: f64,
    /// Planet radius in Earth radii.
    pub size: f64,
    /// Orbital period in days.
    pub period: f64,
    /// Planet mass in Earth masses; only populated for K2 rows.
    pub mass: Option<f64>,
    /// Display color derived from `size`, see [`planet_color`].
    pub color: String,
}

/// Map a planet radius (Earth radii) onto the fixed display palette.
///
/// Buckets are exclusive below and inclusive at the threshold, first match
/// wins.
pub fn planet_color(radius: f64) -> &'static str {
    if radius < 1.25 {
        "#e74c3c"
    } else if radius < 2.0 {
        "#3498db"
    } else if radius < 6.0 {
        "#9b59b6"
    } else if radius < 12.0 {
        "#f39c12"
    } else {
        "#1abc9c"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_buckets_interior_values() {
        assert_eq!(planet_color(1.0), "#e74c3c");
        assert_eq!(planet_color(1.5), "#3498db");
        assert_eq!(planet_color(3.0), "#9b59b6");
        assert_eq!(planet_color(8.0), "#f39c12");
        assert_eq!(planet_color(15.0), "#1abc9c");
    }

    #[test]
    fn color_buckets_boundaries_are_inclusive_above() {
        assert_eq!(planet_color(1.25), "#3498db");
        assert_eq!(planet_color(2.0), "#9b59b6");
        assert_eq!(planet_color(6.0), "#f39c12");
        assert_eq!(planet_color(12.0), "#1abc9c");
    }

    #[test]
    fn system_record_wire_shape() {
        let system = SystemRecord {
            name: "Kepler-227".to_string(),
            star_temp: SUN_TEFF_K,
            star_radius: SUN_RADIUS,
            planet_count: 2,
            planets: vec![PlanetEntry {
                name: "b".to_string(),
                distance: 0.05 * AU_TO_STELLAR_RADII,
                size: 2.26,
                period: 9.49,
                mass: None,
                color: planet_color(2.26).to_string(),
            }],
            mission: Mission::Kepler,
        };
        let json = serde_json::to_value(&system).unwrap();
        assert_eq!(json["star_temp"], 5778.0);
        assert_eq!(json["mission"], "Kepler");
        assert_eq!(json["planets"][0]["color"], "#9b59b6");
        assert!(json["planets"][0]["mass"].is_null());
    }
}
