//! Integration tests that load on-disk fixtures and feed them to the
//! optimizer.

use std::path::{Path, PathBuf};

use bonus_core::optimize;
use bonus_data::{csv_loader, profile, write_search_path};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_load_fixture_csv_succeeds() {
    let employees = csv_loader::load_from_file(&fixture("sample_employees.csv"))
        .expect("fixture file should load without error");

    assert_eq!(employees.len(), 3);
    assert_eq!(employees[1].additional_deductions, dec!(0));
    assert_eq!(employees[2].annual_bonus, dec!(480000));
}

#[test]
fn test_fixture_csv_and_profile_describe_same_employee() {
    let employees = csv_loader::load_from_file(&fixture("sample_employees.csv")).unwrap();
    let profile = profile::load_profile(&fixture("sample_profile.toml")).unwrap();

    assert_eq!(employees[0], profile.employee);
}

#[test]
fn test_every_fixture_row_optimizes_without_loss() {
    let employees = csv_loader::load_from_file(&fixture("sample_employees.csv")).unwrap();

    for employee in &employees {
        let summary = optimize(employee);

        assert!(summary.savings >= dec!(0));
        assert_eq!(
            summary.search_path.last().map(|p| p.bonus_part),
            Some(employee.annual_bonus)
        );
    }
}

#[test]
fn test_profile_search_path_exports_one_row_per_point() {
    let profile = profile::load_profile(&fixture("sample_profile.toml")).unwrap();
    let summary = optimize(&profile.employee);
    let mut buffer = Vec::new();

    write_search_path(&mut buffer, &summary.search_path).expect("write to memory");

    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), summary.search_path.len() + 1);
    assert_eq!(lines[0], "bonus_part,total_tax");
    assert!(lines[19].starts_with("36000,14960"));
}
