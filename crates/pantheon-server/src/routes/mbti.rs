//! Quiz endpoints: full-set generation, single-question generation and
//! result computation.

use axum::extract::State;
use axum::{routing::post, Json, Router};
use serde::Deserialize;

use pantheon_core::model::{AnswerTally, Axis, QuestionRecord, QuizSet};
use pantheon_core::persona::PersonaRecord;

use crate::error::AppError;
use crate::extract::AppJson;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/mbti/start", post(start))
        .route("/api/mbti/question", post(question))
        .route("/api/mbti/result", post(result))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRequest {
    pub question_number: usize,
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct ResultRequest {
    pub answers: AnswerTally,
}

/// Generate a complete 20-question set.
pub async fn start(State(state): State<AppState>) -> Result<Json<QuizSet>, AppError> {
    let set = state
        .engine
        .generate_quiz_set()
        .await
        .map_err(AppError::Generation)?;
    Ok(Json(set))
}

/// Generate one question for the client's step-by-step flow.
pub async fn question(
    State(state): State<AppState>,
    AppJson(req): AppJson<QuestionRequest>,
) -> Result<Json<QuestionRecord>, AppError> {
    if req.question_number == 0 {
        return Err(AppError::Validation(
            "questionNumber must be at least 1".to_string(),
        ));
    }
    let axis: Axis = req.category.parse().map_err(|_| {
        AppError::Validation(format!(
            "category must be one of EI, SN, TF, JP (got '{}')",
            req.category
        ))
    })?;

    let record = state
        .engine
        .generate_question(req.question_number, axis)
        .await
        .map_err(AppError::Generation)?;
    Ok(Json(record))
}

/// Score a completed tally and return the matching persona.
pub async fn result(
    State(state): State<AppState>,
    AppJson(req): AppJson<ResultRequest>,
) -> Json<&'static PersonaRecord> {
    Json(state.engine.compute_result(&req.answers))
}
