//! Loading fixtures from disk

use std::io::Write;

use dashboard_core::{DashboardError, Fixtures, UnitsPage};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("create temp file");
    file.write_all(content.as_bytes()).expect("write fixtures");
    file.flush().expect("flush fixtures");
    file
}

#[test]
fn custom_fixture_file_drives_pages() {
    let file = write_temp(
        r#"{
            "units": [
                {
                    "id": "A1", "building": "Dockside", "floorplan": "Studio",
                    "status": "Reserved", "tenant": null, "rent": "$900/mo",
                    "nextPayment": null, "sqft": 400
                },
                {
                    "id": "A2", "building": "Dockside", "floorplan": "Loft",
                    "status": "Occupied", "tenant": "Ada Park", "rent": "$1,400/mo",
                    "nextPayment": "2025-06-01", "sqft": 820,
                    "amenities": ["AC"], "maintenanceRequests": 1
                }
            ]
        }"#,
    );

    let fixtures = Fixtures::from_file(file.path()).unwrap();
    assert!(fixtures.tenants.is_empty());

    let mut page = UnitsPage::new(&fixtures);
    assert_eq!(page.status_options(), vec!["All", "Reserved", "Occupied"]);

    page.select("status", "Reserved").unwrap();
    let ids: Vec<&str> = page.visible().iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["A1"]);
}

#[test]
fn bundled_file_matches_embedded_copy() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/dashboard.json");
    assert_eq!(Fixtures::from_file(path).unwrap(), Fixtures::bundled().unwrap());
}

#[test]
fn missing_file_reports_path() {
    let err = Fixtures::from_file("/nonexistent/scros/fixtures.json").unwrap_err();
    match err {
        DashboardError::Io { ref path, .. } => {
            assert_eq!(path.to_str(), Some("/nonexistent/scros/fixtures.json"));
        }
        other => panic!("expected Io error, got {:?}", other),
    }
    assert!(err.to_string().starts_with("Failed to read /nonexistent/scros/fixtures.json"));
}

#[test]
fn invalid_enum_value_is_a_fixture_error() {
    let file = write_temp(
        r#"{"buildings": [{
            "id": "1", "name": "X", "status": "ok", "type": "residential",
            "size": "small", "position": {"x": 1, "y": 2}
        }]}"#,
    );
    let err = Fixtures::from_file(file.path()).unwrap_err();
    assert!(matches!(err, DashboardError::Fixtures(_)));
}
