use tiercare_instruments::responses::ResponseSet;
use tiercare_instruments::summary::{SummaryRequest, summarize};

#[test]
fn phq4_only_summary_leaves_tier_undetermined() {
    let summary = summarize(&SummaryRequest {
        phq4_depression: 1,
        phq4_anxiety: 2,
        ..Default::default()
    })
    .unwrap();

    assert_eq!(
        summary.screening_summary,
        "PHQ-4 depression subscore 1/6 and anxiety subscore 2/6."
    );
    assert!(summary.recommended_actions.starts_with("Monitor symptoms"));
    assert!(summary.service_tier.starts_with("Not determined"));
    assert_eq!(summary.feedback, None);
}

#[test]
fn supplied_totals_drive_tier_and_cssrs_advice() {
    let summary = summarize(&SummaryRequest {
        phq4_depression: 4,
        phq4_anxiety: 3,
        phq9_total: Some(12),
        gad7_total: Some(16),
        rating: Some(4),
        ..Default::default()
    })
    .unwrap();

    assert!(summary.screening_summary.contains("PHQ-9 total 12/27 (Moderate)."));
    assert!(summary.screening_summary.contains("GAD-7 total 16/21 (Severe)."));
    assert!(summary.recommended_actions.contains("Administer both"));
    assert!(summary.recommended_actions.contains("C-SSRS"));
    assert_eq!(summary.service_tier, "Tier 4: High intensity services");
    assert_eq!(
        summary.feedback.as_deref(),
        Some("Client rated this screening 4 out of 5.")
    );
}

#[test]
fn item_responses_are_scored_when_totals_are_absent() {
    let mut responses = ResponseSet::new();
    for i in 1..=8 {
        responses.insert(format!("phq9_q{i}"), 0);
    }
    responses.insert("phq9_q9", 1);

    let summary = summarize(&SummaryRequest {
        phq4_depression: 3,
        phq4_anxiety: 0,
        responses,
        ..Default::default()
    })
    .unwrap();

    assert!(summary.screening_summary.contains("PHQ-9 total 1/27 (Minimal)."));
    assert!(summary.recommended_actions.contains("C-SSRS"));
    assert_eq!(summary.service_tier, "Tier 1: Self-management and monitoring");
}

#[test]
fn incomplete_item_responses_fail() {
    let mut responses = ResponseSet::new();
    responses.insert("gad7_q1", 2);

    let err = summarize(&SummaryRequest {
        responses,
        ..Default::default()
    })
    .unwrap_err();
    assert!(err.to_string().starts_with("Missing responses for: gad7_q2"));
}

#[test]
fn subscores_and_rating_are_bounded() {
    let err = summarize(&SummaryRequest {
        phq4_depression: 7,
        ..Default::default()
    })
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Response for phq4_depression must be within 0-6."
    );

    let err = summarize(&SummaryRequest {
        rating: Some(0),
        ..Default::default()
    })
    .unwrap_err();
    assert_eq!(err.to_string(), "Response for rating must be within 1-5.");
}
