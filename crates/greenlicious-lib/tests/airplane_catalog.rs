use std::io::Write;
use std::path::PathBuf;

use greenlicious_lib::error::Error;
use greenlicious_lib::vessel::{Airplane, AirplaneCatalog, AirplaneSize};
use greenlicious_lib::{Quantity, Unit};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/airplanes.csv")
}

#[test]
fn loads_fixture_catalog_and_lists_models() {
    let catalog = AirplaneCatalog::from_path(&fixture_path()).expect("fixture should load");

    assert_eq!(catalog.model_names(), vec!["A321P2F", "ATR72F"]);
    assert_eq!(catalog.source_path(), Some(fixture_path().as_path()));

    let atr = catalog.get("atr72f").expect("ATR present");
    assert_eq!(atr.specification.size, AirplaneSize::Small);
    assert_eq!(atr.specification.consumption.len(), 4);
    assert_eq!(atr.specification.max_payload_kg, 8600);
}

#[test]
fn standard_catalog_contains_every_standard_model() {
    let catalog = AirplaneCatalog::standard();
    assert_eq!(
        catalog.model_names(),
        vec![
            "F_737_200C",
            "F_747_400F",
            "F_767_300F",
            "P_747_400",
            "P_757_200",
            "P_FOKKER100"
        ]
    );
    assert!(catalog.source_path().is_none());
}

#[test]
fn merged_catalog_prices_custom_models() {
    let mut catalog = AirplaneCatalog::standard();
    catalog
        .merge(AirplaneCatalog::from_path(&fixture_path()).expect("fixture loads"))
        .expect("no duplicates");
    assert_eq!(catalog.len(), 8);

    let entry = catalog.resolve("A321P2F").expect("custom model resolves");
    let plane = Airplane::new(entry.specification.clone());
    let co2e = plane
        .co2e(
            &Quantity::new(1852.0, Unit::Kilometer),
            &Quantity::new(1.0, Unit::Ton),
            false,
        )
        .expect("co2e");
    let expected = 5790.0 * 3.15 * 1000.0 / (27_900.0 * 0.65);
    assert!((co2e.amount() - expected).abs() < 1e-6);
}

#[test]
fn resolve_suggests_close_names() {
    let catalog = AirplaneCatalog::standard();
    match catalog.resolve("P_757_20") {
        Err(Error::UnknownAirplaneModel { name, suggestions }) => {
            assert_eq!(name, "P_757_20");
            assert_eq!(suggestions.first().map(String::as_str), Some("P_757_200"));
        }
        other => panic!("expected UnknownAirplaneModel, got {other:?}"),
    }
}

#[test]
fn rejects_invalid_rows_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "name,size,seats,max_range_km,max_payload_kg,distance_km,fuel_kg"
    )
    .unwrap();
    writeln!(file, "Broken,medium,0,1000,500,-10,300").unwrap();

    let err = AirplaneCatalog::from_path(file.path()).expect_err("negative distance");
    match err {
        Error::InvalidConsumptionEntry { distance_km, .. } => assert_eq!(distance_km, -10.0),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let err = AirplaneCatalog::from_path(&fixture_path().with_file_name("missing.csv"))
        .expect_err("file does not exist");
    assert!(matches!(err, Error::Io(_)));
    assert!(!err.is_invalid_argument());
}
