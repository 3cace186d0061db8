//! End-to-end masking scenarios through the engine

use std::collections::HashSet;
use std::sync::Arc;
use tabmask::domain::{CellValue, Column, Record};
use tabmask::masking::generators::HEALTH_STATUSES;
use tabmask::masking::{GenericPolicy, MaskingConfig, MaskingEngine, PiiCategory};

fn seeded_engine(seed: u64) -> MaskingEngine {
    let config = MaskingConfig {
        seed: Some(seed),
        ..Default::default()
    };
    MaskingEngine::new(config).unwrap()
}

fn text(values: &[&str]) -> Vec<CellValue> {
    values.iter().map(|v| CellValue::from(*v)).collect()
}

fn selected(headers: &[&str]) -> HashSet<String> {
    headers.iter().map(|h| h.to_string()).collect()
}

fn people() -> Record {
    Record::new(vec![
        Column::new("Full Name", text(&["Aminah Binti Ali", "John Tan", "Siti Noor"])),
        Column::new(
            "Email",
            text(&["aminah@corp.my", "john@corp.my", "siti@corp.my"]),
        ),
        Column::new(
            "Age",
            vec![CellValue::Integer(37), CellValue::Integer(64), CellValue::Missing],
        ),
        Column::new("Gender", text(&["Female", "Male", "Female"])),
        Column::new("Notes", text(&["vip", "call back", "none"])),
    ])
    .unwrap()
}

fn parse_range(value: &CellValue) -> (i64, i64) {
    let s = value.as_text().expect("bucket output is text");
    let (low, high) = s.split_once('-').expect("range has a dash");
    (low.parse().unwrap(), high.parse().unwrap())
}

#[test]
fn test_email_scenario() {
    let engine = seeded_engine(1);
    let masked = engine.mask_column("Email", &text(&["whatever@old.com"]));

    let value = masked[0].as_text().unwrap();
    let (local, domain) = value.rsplit_once('@').unwrap();
    assert_ne!(domain, "old.com");
    assert!(local.contains('*'));
    assert!(!value.contains("whatever"));
}

#[test]
fn test_age_scenario() {
    let engine = seeded_engine(2);
    let masked = engine.mask_column("Age", &[CellValue::Integer(37)]);

    let (low, high) = parse_range(&masked[0]);
    assert_eq!(high - low, 9);
    assert!(low >= 18);
    assert!(high <= 100);
}

#[test]
fn test_salary_bucket_and_text_passthrough() {
    let engine = seeded_engine(3);
    let masked = engine.mask_column(
        "Salary",
        &[CellValue::Integer(4200), CellValue::from("n/a"), CellValue::Missing],
    );

    let (low, high) = parse_range(&masked[0]);
    assert_eq!(high - low, 999);
    assert!(low >= 2000 && high <= 15000);
    assert_eq!(masked[1], CellValue::from("n/a"));
    assert_eq!(masked[2], CellValue::Missing);
}

#[test]
fn test_gender_scenario() {
    let engine = seeded_engine(4);
    let masked = engine.mask_column("Gender", &text(&["Male", "Female", "Male"]));
    assert_eq!(masked, text(&["Gender1", "Gender2", "Gender1"]));
}

#[test]
fn test_pseudonyms_are_stable_across_columns_of_one_run() {
    let engine = seeded_engine(5);
    let first = engine.mask_column("Gender", &text(&["Male", "Female"]));
    let second = engine.mask_column("Sex", &text(&[" female ", "MALE", "Other"]));

    assert_eq!(first, text(&["Gender1", "Gender2"]));
    assert_eq!(second, text(&["Gender2", "Gender1", "Gender3"]));
    assert_eq!(engine.registry().assigned(PiiCategory::Gender), 3);
    assert_eq!(engine.registry().assigned(PiiCategory::Religion), 0);
}

#[test]
fn test_generic_scenario() {
    let engine = seeded_engine(6);
    let masked = engine.mask_column(
        "Notes",
        &[
            CellValue::from("hello"),
            CellValue::Integer(12),
            CellValue::Float(2.5),
            CellValue::Missing,
        ],
    );

    assert_eq!(masked[0], CellValue::from("MASKED"));
    assert_eq!(masked[1], CellValue::Integer(0));
    assert_eq!(masked[2], CellValue::Float(0.0));
    assert_eq!(masked[3], CellValue::Missing);
}

#[test]
fn test_synthetic_generic_keeps_types() {
    let config = MaskingConfig {
        seed: Some(7),
        generic_policy: GenericPolicy::Synthetic,
        ..Default::default()
    };
    let engine = MaskingEngine::new(config).unwrap();
    let masked = engine.mask_column(
        "Remarks",
        &[CellValue::from("hello"), CellValue::Integer(5), CellValue::Float(1.5)],
    );

    assert!(matches!(masked[0], CellValue::Text(ref s) if !s.is_empty() && s != "hello"));
    assert!(matches!(masked[1], CellValue::Integer(n) if (1..=100).contains(&n)));
    assert!(matches!(masked[2], CellValue::Float(f) if (0.0..=100.0).contains(&f)));
}

#[test]
fn test_missing_values_pass_through_every_category() {
    let engine = seeded_engine(8);
    for header in [
        "Full Name",
        "Address",
        "Place of Birth",
        "Email",
        "Phone",
        "IC Number",
        "Age",
        "Salary",
        "Date of Birth",
        "Expiry Date",
        "Gender",
        "Medical Condition",
        "Credit Card",
        "Notes",
    ] {
        let masked = engine.mask_column(header, &[CellValue::Missing]);
        assert_eq!(masked, vec![CellValue::Missing], "header {header}");
    }
}

#[test]
fn test_synthetic_shapes() {
    let engine = seeded_engine(9);

    let phone = engine.mask_column("Phone", &text(&["0123456789"]));
    let phone = phone[0].as_text().unwrap();
    assert!(phone.starts_with("(01"));
    assert!(phone.ends_with(|c: char| c.is_ascii_digit()));
    assert_eq!(phone.len(), "(012)-3456789".len());

    let id = engine.mask_column("IC Number", &text(&["900101-14-5678"]));
    let id = id[0].as_text().unwrap();
    assert_eq!(id.chars().count(), "900101-14-5678".len());
    assert_eq!(id.chars().filter(|&c| c == '*').count(), 12);

    let card = engine.mask_column("Credit Card", &text(&["4111111111111111"]));
    assert_eq!(card[0], CellValue::from("************1111"));

    let health = engine.mask_column("Medical Condition", &text(&["Tuberculosis"]));
    assert!(HEALTH_STATUSES.contains(&health[0].as_text().unwrap()));
}

#[test]
fn test_birth_date_keeps_format_and_passes_unparseable() {
    let engine = seeded_engine(10);
    let masked = engine.mask_column(
        "Date of Birth",
        &text(&["15/08/1985", "1985-08-15", "sometime in 1985"]),
    );

    let dmy = masked[0].as_text().unwrap();
    assert!(chrono::NaiveDate::parse_from_str(dmy, "%d/%m/%Y").is_ok());
    let iso = masked[1].as_text().unwrap();
    assert!(chrono::NaiveDate::parse_from_str(iso, "%Y-%m-%d").is_ok());
    assert_eq!(masked[2], CellValue::from("sometime in 1985"));
}

#[test]
fn test_apply_masking_record() {
    let engine = seeded_engine(11);
    let record = people();
    let outcome = engine
        .apply_masking(&record, &selected(&["Email", "Age", "Gender", "Ghost"]))
        .unwrap();

    assert_eq!(outcome.record.headers(), record.headers());
    assert_eq!(outcome.record.row_count(), 3);
    assert_eq!(outcome.skipped, vec!["Ghost".to_string()]);

    // Unselected columns are untouched
    assert_eq!(outcome.record.column("Full Name"), record.column("Full Name"));
    assert_eq!(outcome.record.column("Notes"), record.column("Notes"));

    let gender = &outcome.record.column("Gender").unwrap().values;
    assert_eq!(gender, &text(&["Gender1", "Gender2", "Gender1"]));

    let age = &outcome.record.column("Age").unwrap().values;
    assert_eq!(age[2], CellValue::Missing);

    let summary = outcome.summary();
    assert_eq!(summary.total_rows, 3);
    assert_eq!(summary.total_columns, 5);
    assert_eq!(summary.columns_masked, 3);
    // Email 3 + Age 2 + Gender 3
    assert_eq!(summary.cells_masked, 8);
    assert!(summary.format_console().contains("MASKING SUMMARY"));
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let record = people();
    let columns = selected(&["Full Name", "Email", "Age"]);

    let first = seeded_engine(42).apply_masking(&record, &columns).unwrap();
    let second = seeded_engine(42).apply_masking(&record, &columns).unwrap();
    assert_eq!(first.record, second.record);
    assert_ne!(first.run_id, second.run_id);
}

#[tokio::test]
async fn test_concurrent_masking_is_reproducible() {
    let record = people();
    let columns = selected(&["Full Name", "Email", "Age", "Gender"]);

    let first = Arc::new(seeded_engine(99))
        .apply_masking_concurrent(record.clone(), columns.clone())
        .await
        .unwrap();
    let second = Arc::new(seeded_engine(99))
        .apply_masking_concurrent(record.clone(), columns)
        .await
        .unwrap();

    assert_eq!(first.record, second.record);
    assert_eq!(first.record.headers(), record.headers());
    assert_eq!(first.columns.len(), 4);
    assert_eq!(
        first.record.column("Gender").unwrap().values,
        text(&["Gender1", "Gender2", "Gender1"])
    );
    assert_eq!(first.record.column("Notes"), record.column("Notes"));
}

#[tokio::test]
async fn test_concurrent_pseudonyms_share_registry() {
    let engine = Arc::new(seeded_engine(12));
    let record = Record::new(vec![
        Column::new("Religion", text(&["Islam", "Buddhism", "Islam", "Hinduism"])),
        Column::new("Race", text(&["Malay", "Chinese", "Malay", "Indian"])),
    ])
    .unwrap();

    let outcome = Arc::clone(&engine)
        .apply_masking_concurrent(record, selected(&["Religion", "Race"]))
        .await
        .unwrap();

    assert_eq!(
        outcome.record.column("Religion").unwrap().values,
        text(&["Religion1", "Religion2", "Religion1", "Religion3"])
    );
    assert_eq!(
        outcome.record.column("Race").unwrap().values,
        text(&["Race1", "Race2", "Race1", "Race3"])
    );
    assert_eq!(engine.registry().assigned(PiiCategory::Race), 3);
}
