//! Integration tests for the greenlicious CLI.
//!
//! These tests run the compiled binary with `assert_cmd` and cover:
//! - unit conversion and RFI lookup
//! - airplane catalog listing with and without a custom CSV
//! - air, sea and rail estimates in text and JSON format
//! - exit codes and error messages for invalid input

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture_airplanes() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/airplanes.csv")
        .canonicalize()
        .expect("airplane fixture present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("greenlicious-cli");
    cmd.env("RUST_LOG", "error")
        .env_remove("GREENLICIOUS_AIRPLANE_DATA");
    cmd
}

#[test]
fn converts_quantities() {
    cli()
        .args(["convert", "1.5 t", "kg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.5 t = 1500 kg"));
}

#[test]
fn conversion_across_dimensions_fails() {
    cli()
        .args(["convert", "3 km", "kg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot convert 3 km to kg"));
}

#[test]
fn unknown_unit_is_rejected_by_argument_parser() {
    cli()
        .args(["convert", "3 km", "furlong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("furlong"));
}

#[test]
fn prints_rfi_factor() {
    cli()
        .args(["rfi", "2783 km"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2.6022"));
}

#[test]
fn rfi_json_output() {
    let output = cli()
        .args(["--format", "json", "rfi", "1000km"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["factor"], 2.18);
    assert_eq!(value["distance"]["unit"], "KILOMETER");
}

#[test]
fn lists_standard_airplanes() {
    cli()
        .arg("airplanes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available airplanes (6):"))
        .stdout(predicate::str::contains("F_747_400F"));
}

#[test]
fn custom_airplane_data_from_environment() {
    cli()
        .env("GREENLICIOUS_AIRPLANE_DATA", fixture_airplanes())
        .arg("airplanes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available airplanes (8):"))
        .stdout(predicate::str::contains("ATR72F"));
}

#[test]
fn air_estimate_with_custom_model() {
    cli()
        .arg("--airplane-data")
        .arg(fixture_airplanes())
        .args([
            "air",
            "--model",
            "a321p2f",
            "--distance",
            "1852 km",
            "--payload",
            "1 t",
            "--no-rfi",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("air (A321P2F, without RFI)"))
        .stdout(predicate::str::contains("CO2e:        1005.707 kg CO2e"));
}

#[test]
fn air_estimate_suggests_models() {
    cli()
        .args([
            "air",
            "--model",
            "P_757_20",
            "--distance",
            "1000 km",
            "--payload",
            "10 kg",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("P_757_200"));
}

#[test]
fn rejects_conflicting_airplane_file() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("planes.csv");
    fs::write(
        &path,
        "name,size,seats,max_range_km,max_payload_kg,distance_km,fuel_kg\n\
         F_747_400F,big,0,8230,112600,232,6331\n",
    )
    .expect("write csv");

    cli()
        .arg("--airplane-data")
        .arg(&path)
        .arg("airplanes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate airplane model"));
}

#[test]
fn sea_estimate_json() {
    let output = cli()
        .args([
            "--format",
            "json",
            "sea",
            "--weight",
            "1 kg",
            "--distance",
            "1 km",
            "--class",
            "average",
            "--route",
            "transpacific",
        ])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["vessel"], "sea");
    let co2e = value["co2e"]["amount"].as_f64().expect("amount");
    assert!((co2e - 0.000016 * 0.96).abs() < 1e-12);
}

#[test]
fn rail_estimate_requires_energy_mix() {
    cli()
        .args(["rail", "--weight", "1 t", "--distance", "100 km"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--energy-mix"));
}

#[test]
fn rail_estimate_rejects_negative_energy_mix() {
    cli()
        .args([
            "rail",
            "--weight",
            "1 t",
            "--distance",
            "100 km",
            "--energy-mix=-0.2",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("energy mix"));
}

#[test]
fn rail_estimate_text() {
    cli()
        .args([
            "rail",
            "--weight",
            "1 t",
            "--distance",
            "100 km",
            "--landscape",
            "mountain",
            "--class",
            "volume",
            "--energy-mix",
            "0.5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "rail (european-standard train, mountain landscape, volume goods)",
        ))
        .stdout(predicate::str::contains("Energy       4.555 kWh"));
}
