use tiercare_instruments::instruments::cssrs::{self, RiskLevel};
use tiercare_instruments::responses::ResponseSet;

/// All six items answered "no" except the listed ones.
fn endorsing(yes: &[usize]) -> ResponseSet {
    (1..=6)
        .map(|i| (format!("cssrs_q{i}"), i64::from(yes.contains(&i))))
        .collect()
}

#[test]
fn behavior_item_is_high_risk() {
    let result = cssrs::evaluate(&endorsing(&[6])).unwrap();
    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(result.label, "Suicidal behavior present");
}

#[test]
fn intent_or_plan_is_moderate_risk() {
    for item in [4, 5] {
        let result = cssrs::evaluate(&endorsing(&[item])).unwrap();
        assert_eq!(result.risk_level, RiskLevel::Moderate, "item {item}");
        assert_eq!(result.label, "Suicidal ideation with intent or plan");
    }
}

#[test]
fn ideation_items_are_low_risk() {
    for item in [1, 2, 3] {
        let result = cssrs::evaluate(&endorsing(&[item])).unwrap();
        assert_eq!(result.risk_level, RiskLevel::Low, "item {item}");
    }
}

#[test]
fn no_endorsements_is_no_risk() {
    let result = cssrs::evaluate(&endorsing(&[])).unwrap();
    assert_eq!(result.risk_level, RiskLevel::NoRisk);
    assert_eq!(
        result.description,
        "No items on the C-SSRS screener were endorsed."
    );
}

#[test]
fn most_severe_endorsement_wins() {
    let result = cssrs::evaluate(&endorsing(&[1, 2, 4, 6])).unwrap();
    assert_eq!(result.risk_level, RiskLevel::High);

    let result = cssrs::evaluate(&endorsing(&[1, 5])).unwrap();
    assert_eq!(result.risk_level, RiskLevel::Moderate);
}

#[test]
fn answers_above_one_are_rejected() {
    let mut set = endorsing(&[]);
    set.insert("cssrs_q2", 2);

    let err = cssrs::evaluate(&set).unwrap_err();
    assert_eq!(err.to_string(), "Response for cssrs_q2 must be within 0-1.");
}

#[test]
fn risk_level_serializes_snake_case() {
    let result = cssrs::evaluate(&endorsing(&[])).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["risk_level"], "no_risk");
    assert_eq!(json["label"], "No indicated suicidal ideation");
}
