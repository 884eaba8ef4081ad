use axum::extract::Path;
use axum::Json;

use tiercare_instruments::catalog::Questionnaire;
use tiercare_instruments::{all_instruments, get_instrument};

use crate::error::ApiError;

pub async fn list_questionnaires() -> Json<Vec<Questionnaire>> {
    let questionnaires: Vec<Questionnaire> = all_instruments()
        .iter()
        .map(|i| i.questionnaire().clone())
        .collect();
    Json(questionnaires)
}

pub async fn get_questionnaire(Path(name): Path<String>) -> Result<Json<Questionnaire>, ApiError> {
    let instrument = get_instrument(&name)?;
    Ok(Json(instrument.questionnaire().clone()))
}
