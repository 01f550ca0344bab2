// tests/unit/test_storage.rs
// ============================================================================
// PERSISTENCE UNIT TESTS
// ============================================================================

use unlockfi::params::STORAGE_KEY;
use unlockfi::{
    load_snapshot, save_snapshot, FileStore, KeyValueStore, Rejection, Template, TokenomicsConfig,
    TokenomicsError,
};

#[test]
fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path().join("nested"));
    let config = Template::VentureBacked.config();

    assert_eq!(load_snapshot(&store).unwrap(), None);

    save_snapshot(&mut store, &config).unwrap();
    assert!(dir.path().join("nested").join(format!("{}.json", STORAGE_KEY)).exists());
    assert_eq!(load_snapshot(&store).unwrap(), Some(config));
}

#[test]
fn test_rejected_save_keeps_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    let saved = TokenomicsConfig::default();
    save_snapshot(&mut store, &saved).unwrap();

    let unbalanced = saved.set_percentage(0, 30.0);
    let err = save_snapshot(&mut store, &unbalanced).unwrap_err();

    assert!(matches!(
        err,
        TokenomicsError::Rejected(Rejection::UnbalancedTotal { total }) if total == 115.0
    ));
    assert_eq!(load_snapshot(&store).unwrap(), Some(saved));
}

#[test]
fn test_malformed_file_loads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(format!("{}.json", STORAGE_KEY)), "[1, 2").unwrap();

    let store = FileStore::new(dir.path());
    assert_eq!(load_snapshot(&store).unwrap(), None);
}

#[test]
fn test_snapshot_is_browser_json() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    save_snapshot(&mut store, &TokenomicsConfig::default()).unwrap();

    let raw = store.get(STORAGE_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["totalSupply"], 1_000_000_000u64);
    assert_eq!(value["marketCondition"], "neutral");
    assert_eq!(value["allocations"][3]["vesting"]["type"], "cliff");
    assert_eq!(value["allocations"][0]["vesting"]["cliff"], 12);
}
