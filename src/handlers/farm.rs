//! Farming guide endpoint
//!
//! Handles POST /ask-farm without any upstream call.

use crate::handlers::AppState;
use crate::handlers::types::{Answer, FarmRequest};
use crate::metrics::{AnswerSource, RouteLabel};
use crate::middleware::RequestId;
use crate::relay::farm_guide;
use axum::{Extension, Json, extract::State, extract::rejection::JsonRejection};

/// Returned when the body cannot be parsed as a farm request
pub const MISSING_FIELDS_ANSWER: &str = "Mohon sertakan nama tanaman dan lokasi lahan Anda \
agar panduan budidaya dapat disusun.";

/// POST /ask-farm handler
pub async fn handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<FarmRequest>, JsonRejection>,
) -> Json<Answer> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(
                request_id = %request_id,
                error = %rejection,
                "Malformed /ask-farm request body"
            );
            state.record_answer(RouteLabel::AskFarm, AnswerSource::InvalidRequest);
            return Json(Answer::new(MISSING_FIELDS_ANSWER));
        }
    };

    tracing::info!(
        request_id = %request_id,
        plant = %request.plant,
        location = %request.location,
        has_question = request.question.is_some(),
        "Building farm guide"
    );

    state.record_answer(RouteLabel::AskFarm, AnswerSource::Template);
    Json(Answer::new(farm_guide(&request.plant, &request.location)))
}
