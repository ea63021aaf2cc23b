//! Integration tests for synchronous form record extraction.
//!
//! Covers the collection-order walk, the skip rules for incomplete and
//! unchecked controls, multi-checkbox grouping, and select handling.

use form_json::{FormControl, FormExtractor, SelectOption};

#[test]
fn test_scalar_field_extraction() {
    let extractor = FormExtractor::new(vec![
        FormControl::text("user", "alice"),
        FormControl::text("email", "alice@example.com"),
    ]);

    let record = extractor.extract();
    assert_eq!(record.len(), 2);
    assert_eq!(record.get("user").and_then(|v| v.as_text()), Some("alice"));
    assert_eq!(record.get("email").and_then(|v| v.as_text()), Some("alice@example.com"));
}

#[test]
fn test_duplicate_names_last_write_wins() {
    let extractor = FormExtractor::new(vec![
        FormControl::text("color", "red"),
        FormControl::text("color", "blue"),
    ]);

    let record = extractor.extract();
    assert_eq!(record.len(), 1);
    assert_eq!(record.get("color").and_then(|v| v.as_text()), Some("blue"));
}

#[test]
fn test_empty_name_or_value_skipped() {
    let extractor = FormExtractor::new(vec![
        FormControl::text("", "orphan"),
        FormControl::text("blank", ""),
        FormControl::text("kept", "value"),
    ]);

    let record = extractor.extract();
    assert_eq!(record.len(), 1);
    assert!(record.contains("kept"));
}

#[test]
fn test_single_checkbox_checked_yields_scalar() {
    let extractor = FormExtractor::new(vec![FormControl::checkbox("agree", "yes").checked()]);

    let record = extractor.extract();
    let value = record.get("agree").expect("checked checkbox should be present");
    assert!(!value.is_array());
    assert_eq!(value.as_text(), Some("yes"));
}

#[test]
fn test_single_checkbox_unchecked_absent() {
    let extractor = FormExtractor::new(vec![FormControl::checkbox("agree", "yes")]);

    let record = extractor.extract();
    assert!(!record.contains("agree"));
}

#[test]
fn test_shared_checkbox_name_is_group_even_with_one_checked() {
    // "tags" names two checkbox controls, so the field is a group no
    // matter how many of them are actually checked.
    let extractor = FormExtractor::new(vec![
        FormControl::checkbox("tags", "x").checked(),
        FormControl::checkbox("tags", "y"),
    ]);

    let record = extractor.extract();
    let value = record.get("tags").expect("one checked box should surface the field");
    assert!(value.is_array());
    assert_eq!(value.as_array(), Some(&["x".to_string()][..]));
}

#[test]
fn test_checkbox_group_values_in_collection_order() {
    let extractor = FormExtractor::new(vec![
        FormControl::checkbox("tags", "a").checked(),
        FormControl::checkbox("tags", "b"),
        FormControl::checkbox("tags", "c").checked(),
        FormControl::checkbox("tags", "d").checked(),
    ]);

    let record = extractor.extract();
    assert_eq!(
        record.get("tags").and_then(|v| v.as_array()),
        Some(&["a".to_string(), "c".to_string(), "d".to_string()][..])
    );
}

#[test]
fn test_checkbox_group_all_unchecked_absent() {
    let extractor = FormExtractor::new(vec![
        FormControl::checkbox("tags", "a"),
        FormControl::checkbox("tags", "b"),
    ]);

    let record = extractor.extract();
    assert!(!record.contains("tags"));
}

#[test]
fn test_radio_group_checked_value_wins() {
    let extractor = FormExtractor::new(vec![
        FormControl::radio("payment", "credit"),
        FormControl::radio("payment", "paypal").checked(),
        FormControl::radio("payment", "cash"),
    ]);

    let record = extractor.extract();
    assert_eq!(record.get("payment").and_then(|v| v.as_text()), Some("paypal"));
}

#[test]
fn test_radio_group_none_checked_absent() {
    let extractor = FormExtractor::new(vec![
        FormControl::radio("payment", "credit"),
        FormControl::radio("payment", "cash"),
    ]);

    let record = extractor.extract();
    assert!(!record.contains("payment"));
}

#[test]
fn test_multi_select_selected_values_in_option_order() {
    let extractor = FormExtractor::new(vec![FormControl::select("letters")
        .multiple()
        .with_options(vec![
            SelectOption::new("a").selected(),
            SelectOption::new("b"),
            SelectOption::new("c").selected(),
        ])]);

    let record = extractor.extract();
    assert_eq!(
        record.get("letters").and_then(|v| v.as_array()),
        Some(&["a".to_string(), "c".to_string()][..])
    );
}

#[test]
fn test_multi_select_nothing_selected_absent() {
    let extractor = FormExtractor::new(vec![FormControl::select("letters")
        .multiple()
        .with_option(SelectOption::new("a"))]);

    let record = extractor.extract();
    assert!(!record.contains("letters"));
}

#[test]
fn test_single_select_reports_first_selected_value() {
    let extractor = FormExtractor::new(vec![FormControl::select("country").with_options(vec![
        SelectOption::new("us"),
        SelectOption::new("ca").selected(),
    ])]);

    let record = extractor.extract();
    let value = record.get("country").expect("selected option should surface the field");
    assert!(!value.is_array());
    assert_eq!(value.as_text(), Some("ca"));
}

#[test]
fn test_file_controls_excluded() {
    let extractor = FormExtractor::new(vec![
        FormControl::text("user", "alice"),
        FormControl::file("avatar"),
    ]);

    let record = extractor.extract();
    assert_eq!(record.len(), 1);
    assert!(!record.contains("avatar"));
}

#[test]
fn test_round_trip_scenario() {
    let extractor = FormExtractor::new(vec![
        FormControl::text("user", "alice"),
        FormControl::checkbox("tags", "x").checked(),
        FormControl::checkbox("tags", "y"),
    ]);

    let record = extractor.extract();
    assert_eq!(
        serde_json::to_string(&record).expect("record should serialize"),
        r#"{"user":"alice","tags":["x"]}"#
    );
}

#[test]
fn test_extraction_is_repeatable() {
    let extractor = FormExtractor::new(vec![
        FormControl::text("user", "alice"),
        FormControl::checkbox("tags", "x").checked(),
        FormControl::checkbox("tags", "y"),
    ]);

    let first = extractor.extract();
    let second = extractor.extract();
    assert_eq!(first, second);
}

#[test]
fn test_mixed_form() {
    let extractor = FormExtractor::new(vec![
        FormControl::text("user", "alice"),
        FormControl::radio("plan", "basic"),
        FormControl::radio("plan", "pro").checked(),
        FormControl::checkbox("newsletter", "yes").checked(),
        FormControl::select("interests")
            .multiple()
            .with_options(vec![
                SelectOption::new("music").selected(),
                SelectOption::new("sports").selected(),
                SelectOption::new("art"),
            ]),
        FormControl::text("", "ignored"),
    ]);

    let record = extractor.extract();
    assert_eq!(record.len(), 4);
    assert_eq!(record.get("plan").and_then(|v| v.as_text()), Some("pro"));
    assert_eq!(record.get("newsletter").and_then(|v| v.as_text()), Some("yes"));
    assert_eq!(
        record.get("interests").and_then(|v| v.as_array()),
        Some(&["music".to_string(), "sports".to_string()][..])
    );
}
