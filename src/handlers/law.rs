//! Legal question endpoints
//!
//! `/ask-law` classifies the conversation, asks the upstream models in order
//! and falls back to a static answer. `/ask-law-simple` (and its alias
//! `/ask-law-mock`) skip the network and always answer statically.

use crate::error::AppError;
use crate::handlers::AppState;
use crate::handlers::types::{Answer, ChatRequest};
use crate::metrics::{AnswerSource, RouteLabel};
use crate::middleware::RequestId;
use crate::relay::Message;
use crate::relay::classifier::latest_user_message;
use crate::relay::fallback::{NO_QUESTION_ANSWER, OUT_OF_SCOPE_ANSWER};
use axum::{Extension, Json, extract::State, extract::rejection::JsonRejection};

/// Whether an in-scope question may be sent to the upstream models
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerMode {
    Live,
    StaticOnly,
}

/// Answer a conversation: classify, pick the latest user question, then
/// generate (live) or look up (static) the reply
pub async fn answer_conversation(
    state: &AppState,
    request_id: RequestId,
    messages: &[Message],
    mode: AnswerMode,
) -> (Answer, AnswerSource) {
    if !state.classifier().is_match(messages) {
        tracing::info!(
            request_id = %request_id,
            message_count = messages.len(),
            "Conversation is not a legal topic"
        );
        return (Answer::new(OUT_OF_SCOPE_ANSWER), AnswerSource::OutOfScope);
    }

    let Some(question) = latest_user_message(messages).filter(|q| !q.trim().is_empty()) else {
        tracing::info!(
            request_id = %request_id,
            message_count = messages.len(),
            "Legal conversation has no non-blank user message"
        );
        return (Answer::new(NO_QUESTION_ANSWER), AnswerSource::NoQuestion);
    };

    if mode == AnswerMode::Live {
        if let Some(answer) = state.upstream().ask(question, request_id).await {
            return (Answer::new(answer.into_content()), AnswerSource::Upstream);
        }
    }

    tracing::info!(
        request_id = %request_id,
        mode = ?mode,
        category = state.fallback().category_for(question).unwrap_or("general"),
        "Answering from static fallback"
    );
    (
        Answer::new(state.fallback().answer(question)),
        AnswerSource::Fallback,
    )
}

/// POST /ask-law handler
///
/// A body that cannot be parsed is the one case that surfaces as HTTP 500.
pub async fn ask_law(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<Answer>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::error!(
            request_id = %request_id,
            error = %rejection,
            "Malformed /ask-law request body"
        );
        state.record_answer(RouteLabel::AskLaw, AnswerSource::InvalidRequest);
        AppError::Internal(format!("malformed request body: {}", rejection))
    })?;

    tracing::debug!(
        request_id = %request_id,
        message_count = request.messages().len(),
        "Received /ask-law request"
    );

    let (answer, source) =
        answer_conversation(&state, request_id, request.messages(), AnswerMode::Live).await;
    state.record_answer(RouteLabel::AskLaw, source);
    Ok(Json(answer))
}

/// POST /ask-law-simple handler
pub async fn ask_law_simple(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Json<Answer> {
    Json(answer_static(&state, request_id, payload, RouteLabel::AskLawSimple).await)
}

/// POST /ask-law-mock handler, same behavior as `/ask-law-simple`
pub async fn ask_law_mock(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Json<Answer> {
    Json(answer_static(&state, request_id, payload, RouteLabel::AskLawMock).await)
}

async fn answer_static(
    state: &AppState,
    request_id: RequestId,
    payload: Result<Json<ChatRequest>, JsonRejection>,
    route: RouteLabel,
) -> Answer {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(
                request_id = %request_id,
                route = route.as_str(),
                error = %rejection,
                "Malformed request body, answering with general fallback"
            );
            state.record_answer(route, AnswerSource::InvalidRequest);
            return Answer::new(state.fallback().default_answer());
        }
    };

    let (answer, source) = answer_conversation(
        state,
        request_id,
        request.messages(),
        AnswerMode::StaticOnly,
    )
    .await;
    state.record_answer(route, source);
    answer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use secrecy::SecretString;
    use std::sync::Arc;

    /// Upstream points at a closed port so any live call fails fast
    fn create_test_state() -> AppState {
        let config: Config = toml::from_str(
            r#"
[upstream]
base_url = "http://127.0.0.1:9/v1"
models = ["unreachable-model"]
timeout_seconds = 2
"#,
        )
        .expect("should parse test config");
        AppState::new(Arc::new(config), SecretString::from("sk-test".to_string()))
            .expect("should create AppState")
    }

    #[tokio::test]
    async fn test_out_of_scope_conversation() {
        let state = create_test_state();
        let messages = [Message::user("Bagaimana cara menanam cabai?")];
        let (answer, source) =
            answer_conversation(&state, RequestId::new(), &messages, AnswerMode::Live).await;
        assert_eq!(answer.text(), OUT_OF_SCOPE_ANSWER);
        assert_eq!(source, AnswerSource::OutOfScope);
    }

    #[tokio::test]
    async fn test_no_user_message() {
        let state = create_test_state();
        let messages = [Message::assistant("Ada pertanyaan tentang hukum?")];
        let (answer, source) = answer_conversation(
            &state,
            RequestId::new(),
            &messages,
            AnswerMode::StaticOnly,
        )
        .await;
        assert_eq!(answer.text(), NO_QUESTION_ANSWER);
        assert_eq!(source, AnswerSource::NoQuestion);
    }

    #[tokio::test]
    async fn test_blank_latest_user_message_is_not_sent_upstream() {
        let state = create_test_state();
        let messages = [
            Message::user("Apa itu pasal karet?"),
            Message::assistant("Silakan lanjutkan."),
            Message::user("   \n"),
        ];
        let (answer, source) =
            answer_conversation(&state, RequestId::new(), &messages, AnswerMode::Live).await;
        assert_eq!(answer.text(), NO_QUESTION_ANSWER);
        assert_eq!(source, AnswerSource::NoQuestion);
        assert_eq!(
            state
                .metrics()
                .upstream_attempts_count("unreachable-model", crate::metrics::AttemptLabel::Retryable),
            0
        );
    }

    #[tokio::test]
    async fn test_static_mode_uses_latest_user_question() {
        let state = create_test_state();
        let messages = [
            Message::user("Apa sanksi pidana pencurian?"),
            Message::assistant("..."),
            Message::user("Bagaimana dengan kontrak sewa?"),
        ];
        let (answer, source) = answer_conversation(
            &state,
            RequestId::new(),
            &messages,
            AnswerMode::StaticOnly,
        )
        .await;
        assert_eq!(source, AnswerSource::Fallback);
        assert_eq!(
            answer.text(),
            state.fallback().answer("Bagaimana dengan kontrak sewa?")
        );
    }

    #[tokio::test]
    async fn test_live_mode_falls_back_when_upstream_unreachable() {
        let state = create_test_state();
        let question = "Apa hukuman untuk korupsi dana desa?";
        let (answer, source) = answer_conversation(
            &state,
            RequestId::new(),
            &[Message::user(question)],
            AnswerMode::Live,
        )
        .await;
        assert_eq!(source, AnswerSource::Fallback);
        assert_eq!(answer.text(), state.fallback().answer(question));
    }

    #[tokio::test]
    async fn test_ask_law_handler_records_metric() {
        let state = create_test_state();
        let request = ChatRequest::new(vec![Message::user("resep rendang")]);
        let Json(answer) = ask_law(
            State(state.clone()),
            Extension(RequestId::new()),
            Ok(Json(request)),
        )
        .await
        .expect("handler should succeed");
        assert_eq!(answer.text(), OUT_OF_SCOPE_ANSWER);
        assert_eq!(
            state
                .metrics()
                .answers_count(RouteLabel::AskLaw, AnswerSource::OutOfScope),
            1
        );
    }
}
