use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{DocumentExtractor, ObjectStorage};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    counter_action_handler, counter_read_handler, health_handler, pdf_parse_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<S, E>(state: AppState<S, E>) -> Router
where
    S: ObjectStorage + ?Sized + 'static,
    E: DocumentExtractor + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/pdf/parse", post(pdf_parse_handler::<S, E>))
        .route(
            "/api/count",
            post(counter_action_handler::<S, E>).get(counter_read_handler::<S, E>),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
