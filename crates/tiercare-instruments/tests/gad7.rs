use tiercare_instruments::instruments::gad7;
use tiercare_instruments::responses::ResponseSet;
use tiercare_instruments::scoring::Severity;

fn responses(values: [i64; 7]) -> ResponseSet {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (format!("gad7_q{}", i + 1), *v))
        .collect()
}

#[test]
fn severity_boundaries() {
    let cases = [
        (0, Severity::Minimal),
        (4, Severity::Minimal),
        (5, Severity::Mild),
        (9, Severity::Mild),
        (10, Severity::Moderate),
        (14, Severity::Moderate),
        (15, Severity::Severe),
        (21, Severity::Severe),
    ];
    for (total, expected) in cases {
        assert_eq!(gad7::severity(total), expected, "total {total}");
    }
}

#[test]
fn scores_sum_all_items() {
    let result = gad7::score(&responses([1, 2, 3, 0, 1, 2, 3])).unwrap();
    assert_eq!(result.total_score, 12);
    assert_eq!(result.severity, Severity::Moderate);
}

#[test]
fn missing_item_fails() {
    let mut set = ResponseSet::new();
    for i in 1..=6 {
        set.insert(format!("gad7_q{i}"), 1);
    }

    let err = gad7::score(&set).unwrap_err();
    assert_eq!(err.to_string(), "Missing responses for: gad7_q7.");
}

#[test]
fn scoring_is_repeatable() {
    let set = responses([3, 3, 3, 3, 3, 3, 0]);
    assert_eq!(gad7::score(&set).unwrap(), gad7::score(&set).unwrap());
}
