use pill_match::catalog::{self, load_configured};
use pill_match::{PillMatchConfig, PillMatchError};
use tempfile::TempDir;

use crate::utils::{catalog_of, entry};

#[test]
fn test_without_path_uses_reference_catalog() {
    let config = PillMatchConfig::default();

    let catalog = load_configured(&config).unwrap();

    assert_eq!(catalog.len(), 10);
    assert!(catalog.contains("Levonorgestrel (Emergency)"));
}

#[test]
fn test_configured_path_replaces_reference_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clinic.json");
    let custom = catalog_of(vec![entry(
        "Clinic Pill",
        "Progestin-Only Pill",
        &["Adult - BMI Group 4"],
    )]);
    catalog::export_to_path(&custom, &path).unwrap();

    let config = PillMatchConfig::default().with_catalog_path(&path);
    let catalog = load_configured(&config).unwrap();

    assert_eq!(catalog, custom);
    assert!(!catalog.contains("Levonorgestrel (Emergency)"));
}

#[test]
fn test_missing_configured_path_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.json");

    let config = PillMatchConfig::default().with_catalog_path(&path);

    match load_configured(&config) {
        Err(PillMatchError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected io error, got {other:?}"),
    }
}
