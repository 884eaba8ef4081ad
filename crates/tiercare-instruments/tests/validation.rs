use serde_json::json;
use tiercare_instruments::instruments::{phq4, phq9};
use tiercare_instruments::responses::ResponseSet;
use tiercare_instruments::validation::{ValidationError, validate};

fn likert(prefix: &str, values: &[i64]) -> ResponseSet {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (format!("{prefix}_q{}", i + 1), *v))
        .collect()
}

#[test]
fn empty_response_set_is_rejected() {
    let err = validate(&ResponseSet::new(), phq4::SCHEMA).unwrap_err();
    assert_eq!(err, ValidationError::Empty);
    assert_eq!(err.to_string(), "No responses were provided.");
}

#[test]
fn missing_item_is_named_exactly() {
    let mut responses = ResponseSet::new();
    responses.insert("phq4_q1", 1);
    responses.insert("phq4_q2", 1);
    responses.insert("phq4_q4", 1);

    let err = validate(&responses, phq4::SCHEMA).unwrap_err();
    assert_eq!(
        err,
        ValidationError::Missing {
            question_ids: vec!["phq4_q3".to_string()]
        }
    );
    assert_eq!(err.to_string(), "Missing responses for: phq4_q3.");
}

#[test]
fn missing_items_are_sorted_and_joined() {
    let mut responses = ResponseSet::new();
    responses.insert("phq4_q2", 0);

    let err = validate(&responses, phq4::SCHEMA).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing responses for: phq4_q1, phq4_q3, phq4_q4."
    );
}

#[test]
fn out_of_range_reports_inclusive_bounds() {
    let mut responses = likert("phq9", &[0; 9]);
    responses.insert("phq9_q1", 4);

    let err = validate(&responses, phq9::SCHEMA).unwrap_err();
    assert_eq!(
        err,
        ValidationError::OutOfRange {
            question_id: "phq9_q1".to_string(),
            min: 0,
            max: 3,
        }
    );
    assert_eq!(err.to_string(), "Response for phq9_q1 must be within 0-3.");
}

#[test]
fn negative_values_are_out_of_range() {
    let mut responses = likert("phq4", &[0; 4]);
    responses.insert("phq4_q2", -1);

    let err = validate(&responses, phq4::SCHEMA).unwrap_err();
    assert_eq!(err.to_string(), "Response for phq4_q2 must be within 0-3.");
}

#[test]
fn non_integer_values_are_rejected() {
    for value in [json!("2"), json!(1.5), json!(true), json!(null), json!([1])] {
        let mut responses = likert("phq4", &[0; 4]);
        responses.insert("phq4_q3", value);

        let err = validate(&responses, phq4::SCHEMA).unwrap_err();
        assert_eq!(err.to_string(), "Response for phq4_q3 must be an integer.");
    }
}

#[test]
fn non_integer_extra_keys_are_still_rejected() {
    let mut responses = likert("phq4", &[0; 4]);
    responses.insert("comment", "fine");

    let err = validate(&responses, phq4::SCHEMA).unwrap_err();
    assert_eq!(
        err,
        ValidationError::NonInteger {
            question_id: "comment".to_string()
        }
    );
}

#[test]
fn range_errors_win_over_missing_errors() {
    let mut responses = ResponseSet::new();
    responses.insert("phq4_q1", 9);

    let err = validate(&responses, phq4::SCHEMA).unwrap_err();
    assert!(matches!(err, ValidationError::OutOfRange { .. }));
}

#[test]
fn first_offending_item_in_input_order_is_reported() {
    let mut responses = ResponseSet::new();
    responses.insert("phq4_q4", 7);
    responses.insert("phq4_q1", 8);

    let err = validate(&responses, phq4::SCHEMA).unwrap_err();
    assert_eq!(err.to_string(), "Response for phq4_q4 must be within 0-3.");
}

#[test]
fn extra_keys_out_of_schema_are_ignored() {
    let mut responses = likert("phq4", &[1, 2, 3, 0]);
    responses.insert("phq9_q1", 42);

    let answers = validate(&responses, phq4::SCHEMA).unwrap();
    assert_eq!(answers.total(), 6);
    assert_eq!(answers.value("phq9_q1"), 0);
}

#[test]
fn response_set_deserializes_from_json_in_input_order() {
    let responses: ResponseSet =
        serde_json::from_value(json!({"phq4_q4": 1, "phq4_q2": 2, "phq4_q1": 0, "phq4_q3": 3}))
            .unwrap();

    let ids: Vec<&str> = responses.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, ["phq4_q4", "phq4_q2", "phq4_q1", "phq4_q3"]);
}

#[test]
fn prefix_filter_keeps_only_matching_keys() {
    let mut responses = likert("phq9", &[1; 9]);
    responses.insert("gad7_q1", 2);

    let filtered = responses.with_prefix("gad7_q");
    assert_eq!(filtered.len(), 1);
    assert!(filtered.contains("gad7_q1"));
}
