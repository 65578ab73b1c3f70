//! Per-mission catalog configuration.
//!
//! The three mission normalizers share one code path; everything
//! mission-specific lives in this table: column names, required fields,
//! disposition mapping and discovery-year derivation.

use crate::models::{Disposition, Mission};

/// How the unified planet name is built from a raw row.
#[derive(Debug, Clone, Copy)]
pub enum NameRule {
    /// Take the value of a column directly.
    Column(&'static str),
    /// Prepend a fixed prefix to the column value (TESS: `TOI-{toi}`).
    Prefixed {
        column: &'static str,
        prefix: &'static str,
    },
}

/// How the raw disposition string maps onto [`Disposition`].
#[derive(Debug, Clone, Copy)]
pub enum DispositionRule {
    /// Kepler/K2: case-insensitive substring match on the archive wording.
    Substring,
    /// TESS: exact two-letter TFOPWG codes.
    TessCodes,
}

impl DispositionRule {
    /// Normalize a raw source value. Unrecognized or missing values default
    /// to `Candidate`.
    pub fn normalize(&self, raw: Option<&str>) -> Disposition {
        let Some(raw) = raw else {
            return Disposition::Candidate;
        };
        match self {
            DispositionRule::Substring => {
                let upper = raw.to_ascii_uppercase();
                if upper.contains("CONFIRMED") {
                    Disposition::Confirmed
                } else if upper.contains("CANDIDATE") {
                    Disposition::Candidate
                } else if upper.contains("FALSE") {
                    Disposition::FalsePositive
                } else {
                    Disposition::Candidate
                }
            }
            DispositionRule::TessCodes => {
                if raw.eq_ignore_ascii_case("CP") || raw.eq_ignore_ascii_case("KP") {
                    Disposition::Confirmed
                } else if raw.eq_ignore_ascii_case("FP") {
                    Disposition::FalsePositive
                } else {
                    // "PC" and everything unrecognized
                    Disposition::Candidate
                }
            }
        }
    }
}

/// How the discovery year is derived from a raw row.
#[derive(Debug, Clone, Copy)]
pub enum YearRule {
    /// Parse a `YYYY-MM-DD` date column, accepting a bare leading year as a
    /// fallback format.
    Date(&'static str),
    /// Read a direct numeric year column (K2's `disc_year`).
    Numeric(&'static str),
}

/// Source columns for the unified numeric attributes. `None` means the
/// mission's table does not carry the attribute at all.
#[derive(Debug, Clone, Copy)]
pub struct NumericColumns {
    pub orbital_period: &'static str,
    pub planet_radius: &'static str,
    pub stellar_radius: &'static str,
    pub stellar_teff: &'static str,
    pub stellar_mass: Option<&'static str>,
    pub insolation: Option<&'static str>,
    pub equilibrium_temp: Option<&'static str>,
    pub ra: &'static str,
    pub dec: &'static str,
}

/// Everything the generic normalizer needs to know about one mission.
#[derive(Debug, Clone, Copy)]
pub struct MissionProfile {
    pub mission: Mission,
    pub name: NameRule,
    pub disposition_column: &'static str,
    pub disposition: DispositionRule,
    pub year: YearRule,
    /// A row is dropped unless all of these columns are non-empty.
    pub required: &'static [&'static str],
    pub numeric: NumericColumns,
}

const KEPLER: MissionProfile = MissionProfile {
    mission: Mission::Kepler,
    name: NameRule::Column("kepoi_name"),
    disposition_column: "koi_disposition",
    disposition: DispositionRule::Substring,
    year: YearRule::Date("koi_vet_date"),
    required: &["kepoi_name", "koi_disposition", "koi_prad", "koi_period"],
    numeric: NumericColumns {
        orbital_period: "koi_period",
        planet_radius: "koi_prad",
        stellar_radius: "koi_srad",
        stellar_teff: "koi_steff",
        stellar_mass: Some("koi_smass"),
        insolation: Some("koi_insol"),
        equilibrium_temp: Some("koi_teq"),
        ra: "ra",
        dec: "dec",
    },
};

const TESS: MissionProfile = MissionProfile {
    mission: Mission::Tess,
    name: NameRule::Prefixed {
        column: "toi",
        prefix: "TOI-",
    },
    disposition_column: "tfopwg_disp",
    disposition: DispositionRule::TessCodes,
    year: YearRule::Date("toi_created"),
    required: &["toi", "tfopwg_disp", "pl_rade", "pl_orbper"],
    numeric: NumericColumns {
        orbital_period: "pl_orbper",
        planet_radius: "pl_rade",
        stellar_radius: "st_rad",
        stellar_teff: "st_teff",
        stellar_mass: None,
        insolation: Some("pl_insol"),
        equilibrium_temp: Some("pl_eqt"),
        ra: "ra",
        dec: "dec",
    },
};

const K2: MissionProfile = MissionProfile {
    mission: Mission::K2,
    name: NameRule::Column("pl_name"),
    disposition_column: "disposition",
    disposition: DispositionRule::Substring,
    year: YearRule::Numeric("disc_year"),
    required: &["pl_name", "disposition", "pl_rade", "pl_orbper"],
    numeric: NumericColumns {
        orbital_period: "pl_orbper",
        planet_radius: "pl_rade",
        stellar_radius: "st_rad",
        stellar_teff: "st_teff",
        stellar_mass: Some("st_mass"),
        insolation: Some("pl_insol"),
        equilibrium_temp: Some("pl_eqt"),
        ra: "ra",
        dec: "dec",
    },
};

impl Mission {
    /// The normalization profile for this mission.
    pub fn profile(&self) -> &'static MissionProfile {
        match self {
            Mission::Kepler => &KEPLER,
            Mission::Tess => &TESS,
            Mission::K2 => &K2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_rule_matches_archive_wording() {
        let rule = DispositionRule::Substring;
        assert_eq!(rule.normalize(Some("CONFIRMED")), Disposition::Confirmed);
        assert_eq!(rule.normalize(Some("confirmed")), Disposition::Confirmed);
        assert_eq!(rule.normalize(Some("CANDIDATE")), Disposition::Candidate);
        assert_eq!(
            rule.normalize(Some("FALSE POSITIVE")),
            Disposition::FalsePositive
        );
        assert_eq!(rule.normalize(Some("REFUTED")), Disposition::Candidate);
        assert_eq!(rule.normalize(None), Disposition::Candidate);
    }

    #[test]
    fn tess_codes_match_exactly() {
        let rule = DispositionRule::TessCodes;
        assert_eq!(rule.normalize(Some("CP")), Disposition::Confirmed);
        assert_eq!(rule.normalize(Some("KP")), Disposition::Confirmed);
        assert_eq!(rule.normalize(Some("PC")), Disposition::Candidate);
        assert_eq!(rule.normalize(Some("FP")), Disposition::FalsePositive);
        assert_eq!(rule.normalize(Some("APC")), Disposition::Candidate);
        assert_eq!(rule.normalize(None), Disposition::Candidate);
    }

    #[test]
    fn profiles_require_the_documented_fields() {
        assert_eq!(
            Mission::Kepler.profile().required,
            &["kepoi_name", "koi_disposition", "koi_prad", "koi_period"]
        );
        assert_eq!(
            Mission::Tess.profile().required,
            &["toi", "tfopwg_disp", "pl_rade", "pl_orbper"]
        );
        assert_eq!(
            Mission::K2.profile().required,
            &["pl_name", "disposition", "pl_rade", "pl_orbper"]
        );
    }
}
