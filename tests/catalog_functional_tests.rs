mod support;

use exovis::models::{Disposition, Mission};
use exovis::services::{load_catalog_summary, load_mission_catalog};

#[test]
fn kepler_catalog_normalizes_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let store = support::store_with(dir.path(), Some(support::KEPLER_CSV), None, None);

    let records = load_mission_catalog(&store, Mission::Kepler).unwrap();
    // K00003.01 has no koi_prad and is dropped
    assert_eq!(records.len(), 4);
    assert!(records.iter().all(|r| r.mission == Mission::Kepler));
    assert!(records.iter().all(|r| {
        matches!(
            r.disposition,
            Disposition::Confirmed | Disposition::Candidate | Disposition::FalsePositive
        )
    }));

    let first = &records[0];
    assert_eq!(first.pl_name, "K00001.01");
    assert_eq!(first.discovery_year, 2013);
    assert_eq!(first.pl_orbper, Some(9.49));
    assert_eq!(first.koi_score, Some(1.0));

    // K00004.01 has an empty vet date, fallback year applies
    let fallback = records.iter().find(|r| r.pl_name == "K00004.01").unwrap();
    assert_eq!(fallback.discovery_year, 2011);
}

#[test]
fn tess_catalog_normalizes_codes_and_names() {
    let dir = tempfile::tempdir().unwrap();
    let store = support::store_with(dir.path(), None, Some(support::TESS_CSV), None);

    let records = load_mission_catalog(&store, Mission::Tess).unwrap();
    // 703.01 carries no disposition code and is dropped
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].pl_name, "TOI-700.01");
    assert_eq!(records[0].disposition, Disposition::Confirmed);
    assert_eq!(records[1].disposition, Disposition::Candidate);
    assert_eq!(records[2].disposition, Disposition::FalsePositive);
    assert_eq!(records[0].discovery_year, 2019);
}

#[test]
fn normalization_is_idempotent_across_reads() {
    let dir = tempfile::tempdir().unwrap();
    let store = support::store_with(dir.path(), None, None, Some(support::K2_CSV));

    let first = load_mission_catalog(&store, Mission::K2).unwrap();
    let second = load_mission_catalog(&store, Mission::K2).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_source_is_a_not_found_error_naming_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = support::store_with(dir.path(), Some(support::KEPLER_CSV), None, None);

    let err = load_mission_catalog(&store, Mission::Tess).unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("tess_toi.csv"));
}

#[test]
fn summary_reports_all_missions_best_effort() {
    let dir = tempfile::tempdir().unwrap();
    let store = support::store_with(
        dir.path(),
        Some(support::KEPLER_CSV),
        None,
        Some(support::K2_CSV),
    );

    let summary = load_catalog_summary(&store);
    assert_eq!(summary.missions.len(), 3);

    let kepler = &summary.missions[0];
    assert!(kepler.available);
    assert_eq!(kepler.total, 4);
    assert_eq!(kepler.confirmed, 3);
    assert_eq!(kepler.candidate, 1);
    assert!(kepler.checksum.is_some());
    assert_eq!(kepler.min_discovery_year, Some(2011));
    assert_eq!(kepler.max_discovery_year, Some(2014));

    let tess = &summary.missions[1];
    assert!(!tess.available);
    assert_eq!(tess.total, 0);
    assert!(tess.checksum.is_none());
}

#[test]
fn planet_record_wire_shape_matches_the_frontend_contract() {
    let dir = tempfile::tempdir().unwrap();
    let store = support::store_with(dir.path(), Some(support::KEPLER_CSV), None, None);

    let records = load_mission_catalog(&store, Mission::Kepler).unwrap();
    let json = serde_json::to_value(&records).unwrap();

    let first = &json[0];
    assert_eq!(first["mission"], "Kepler");
    assert_eq!(first["disposition"], "CONFIRMED");
    assert_eq!(first["pl_name"], "K00001.01");
    // nullable numerics are always present
    assert!(first.get("st_mass").is_some());
    // TESS/K2 extras never leak into Kepler records
    assert!(first.get("toi").is_none());
    assert!(first.get("hostname").is_none());

    let candidate = &json[2];
    assert_eq!(candidate["pl_name"], "K00002.01");
    assert!(candidate["st_mass"].is_null());
}
