#![allow(dead_code)]

use std::collections::HashSet;
use std::path::Path;
use std::sync::Mutex;

use exovis::catalog::CatalogStore;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK poisoned");
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

pub const KEPLER_CSV: &str = "\
# This file was produced by the NASA Exoplanet Archive
# COLUMN kepoi_name: KOI Name
kepoi_name,kepler_name,koi_disposition,koi_score,koi_period,koi_prad,koi_sma,koi_srad,koi_steff,koi_smass,koi_insol,koi_teq,koi_vet_date,ra,dec
K00001.01,Kepler-227 b,CONFIRMED,1.0,9.49,2.26,0.085,0.93,5455,0.92,93.6,793,2013-08-16,291.93,48.14
K00001.02,Kepler-227 c,CONFIRMED,0.97,54.42,2.83,0.29,0.93,5455,0.92,9.1,443,2013-08-16,291.93,48.14
K00002.01,,CANDIDATE,0.73,2.20,16.39,0.036,1.99,6350,,,,2014-02-01,292.25,47.97
K00003.01,,FALSE POSITIVE,0.0,4.88,,0.057,0.79,4766,0.81,,,2014-02-01,297.71,48.08
K00004.01,,CONFIRMED,0.99,3.21,1.1,,0.88,5200,,,,,285.61,48.28
";

pub const TESS_CSV: &str = "\
# TESS Objects of Interest
toi,tfopwg_disp,pl_orbper,pl_rade,st_rad,st_teff,pl_insol,pl_eqt,ra,dec,toi_created
700.01,KP,37.42,1.22,0.42,3480,0.87,246,97.09,-65.57,2019-07-24
701.01,PC,9.01,2.9,1.1,5900,,,120.5,-30.2,2020-03-11
702.01,FP,1.43,11.2,0.9,5500,,,130.0,-20.0,2021-06-02
703.01,,5.0,2.0,1.0,5700,,,140.0,-10.0,2021-01-05
";

pub const K2_CSV: &str = "\
# K2 Planets and Candidates
pl_name,hostname,disposition,disc_year,pl_orbper,pl_rade,pl_orbsmax,pl_masse,st_rad,st_teff,st_mass,pl_insol,pl_eqt,ra,dec
K2-3 b,K2-3,CONFIRMED,2015,10.05,2.29,0.0769,6.6,0.56,3896,0.6,10.2,463,172.33,-1.45
K2-3 c,K2-3,CONFIRMED,2015,24.64,1.77,0.1405,2.1,0.56,3896,0.6,3.1,344,172.33,-1.45
K2-18 b,K2-18,CONFIRMED,2015,32.94,2.61,0.1429,8.63,0.41,3457,0.36,1.34,284,172.56,7.59
EPIC 201238110.01,,CANDIDATE,,2.5,1.1,,,,,,,,170.0,-2.0
";

/// Artifact bundle for a small three-class linear model over three Kepler
/// features.
pub const MODEL_JSON: &str = r#"{
  "feature_names": ["koi_period", "koi_prad", "koi_depth"],
  "scaler": {
    "mean": [10.0, 2.0, 500.0],
    "scale": [5.0, 1.0, 250.0]
  },
  "classes": ["CANDIDATE", "CONFIRMED", "FALSE_POSITIVE"],
  "weights": [
    [0.1, -0.2, 0.05],
    [1.5, 0.8, -0.3],
    [-1.2, -0.5, 0.9]
  ],
  "intercepts": [0.2, -0.1, -0.4]
}"#;

/// Write the given mission fixtures into `dir` and build a store over it.
/// `None` omits the mission's file entirely.
pub fn store_with(
    dir: &Path,
    kepler: Option<&str>,
    tess: Option<&str>,
    k2: Option<&str>,
) -> CatalogStore {
    if let Some(content) = kepler {
        std::fs::write(dir.join("kepler_koi.csv"), content).unwrap();
    }
    if let Some(content) = tess {
        std::fs::write(dir.join("tess_toi.csv"), content).unwrap();
    }
    if let Some(content) = k2 {
        std::fs::write(dir.join("k2_pandc.csv"), content).unwrap();
    }
    CatalogStore::new(dir)
}
