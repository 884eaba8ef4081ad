use tiercare_instruments::error::InstrumentError;
use tiercare_instruments::{all_instruments, get_instrument};

#[test]
fn instruments_are_listed_in_presentation_order() {
    let ids: Vec<String> = all_instruments()
        .iter()
        .map(|i| i.id().to_string())
        .collect();
    assert_eq!(ids, ["phq4", "phq9", "gad7", "cssrs"]);
}

#[test]
fn catalog_questions_match_schema() {
    for instrument in all_instruments() {
        let question_ids: Vec<&str> = instrument
            .questionnaire()
            .questions
            .iter()
            .map(|q| q.id.as_str())
            .collect();
        let schema_ids: Vec<&str> = instrument.schema().iter().map(|item| item.id).collect();
        assert_eq!(question_ids, schema_ids, "{}", instrument.id());

        for (question, item) in instrument.questionnaire().questions.iter().zip(instrument.schema()) {
            let values: Vec<u32> = question.options.iter().map(|o| o.value).collect();
            assert!(values.contains(&item.range.min), "{}", question.id);
            assert!(values.contains(&item.range.max), "{}", question.id);
        }
    }
}

#[test]
fn lookup_ignores_case() {
    let instrument = get_instrument("PHQ9").ok().unwrap();
    assert_eq!(instrument.name(), "PHQ-9");
    assert_eq!(
        instrument.questionnaire().title,
        "Patient Health Questionnaire-9 (PHQ-9)"
    );
}

#[test]
fn unknown_questionnaire_is_reported() {
    let err = get_instrument("audit").err().unwrap();
    assert!(matches!(err, InstrumentError::UnknownInstrument(ref id) if id == "audit"));
    assert_eq!(err.to_string(), "Unknown questionnaire 'audit'.");
}

#[test]
fn only_the_behavior_question_carries_a_note() {
    let cssrs = get_instrument("cssrs").ok().unwrap();
    let notes: Vec<&str> = cssrs
        .questionnaire()
        .questions
        .iter()
        .filter(|q| q.note.is_some())
        .map(|q| q.id.as_str())
        .collect();
    assert_eq!(notes, ["cssrs_q6"]);
}
