use axum::body::Bytes;
use axum::extract::State;
use axum::response::Response;

use crate::application::ports::{DocumentExtractor, ObjectStorage};
use crate::presentation::state::AppState;

use super::envelope::{Empty, body_field, failure, parse_body, success};

const MSG_MISSING_ACTION: &str = "缺少action参数";
const MSG_INVALID_ACTION: &str = "action参数错误";
const MSG_STORE_FAILED: &str = "计数器操作失败";

/// `POST /api/count` with `{"action": "inc" | "clear"}`.
#[tracing::instrument(skip(state, body))]
pub async fn counter_action_handler<S, E>(
    State(state): State<AppState<S, E>>,
    body: Bytes,
) -> Response
where
    S: ObjectStorage + ?Sized + 'static,
    E: DocumentExtractor + ?Sized + 'static,
{
    let body = parse_body(&body);

    let Some(action) = body_field(&body, "action") else {
        return failure(MSG_MISSING_ACTION);
    };

    match action.as_str() {
        Some("inc") => match state.counter_store.increment().await {
            Ok(count) => success(count),
            Err(e) => {
                tracing::error!(error = %e, "Failed to increment counter");
                failure(MSG_STORE_FAILED)
            }
        },
        Some("clear") => match state.counter_store.clear().await {
            Ok(()) => success(Empty {}),
            Err(e) => {
                tracing::error!(error = %e, "Failed to clear counter");
                failure(MSG_STORE_FAILED)
            }
        },
        _ => {
            tracing::warn!(action = %action, "Unknown counter action");
            failure(MSG_INVALID_ACTION)
        }
    }
}

/// `GET /api/count`
pub async fn counter_read_handler<S, E>(State(state): State<AppState<S, E>>) -> Response
where
    S: ObjectStorage + ?Sized + 'static,
    E: DocumentExtractor + ?Sized + 'static,
{
    match state.counter_store.read().await {
        Ok(count) => success(count),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read counter");
            failure(MSG_STORE_FAILED)
        }
    }
}
