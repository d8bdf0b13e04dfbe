//! Single-question endpoint
//!
//! Handles POST /ask with `{"question": "..."}`. There is no topic gate:
//! the question goes straight to the upstream models, then to the static
//! fallback.

use crate::error::AppError;
use crate::handlers::AppState;
use crate::handlers::types::{Answer, QuestionRequest};
use crate::metrics::{AnswerSource, RouteLabel};
use crate::middleware::RequestId;
use crate::relay::fallback::NO_QUESTION_ANSWER;
use axum::{Extension, Json, extract::State, extract::rejection::JsonRejection};

/// POST /ask handler
pub async fn handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<Json<Answer>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::error!(
            request_id = %request_id,
            error = %rejection,
            "Malformed /ask request body"
        );
        state.record_answer(RouteLabel::Ask, AnswerSource::InvalidRequest);
        AppError::Internal(format!("malformed request body: {}", rejection))
    })?;

    let question = request.question.trim();
    if question.is_empty() {
        state.record_answer(RouteLabel::Ask, AnswerSource::NoQuestion);
        return Ok(Json(Answer::new(NO_QUESTION_ANSWER)));
    }

    let (answer, source) = match state.upstream().ask(question, request_id).await {
        Some(answer) => (Answer::new(answer.into_content()), AnswerSource::Upstream),
        None => (
            Answer::new(state.fallback().answer(question)),
            AnswerSource::Fallback,
        ),
    };

    state.record_answer(RouteLabel::Ask, source);
    Ok(Json(answer))
}
