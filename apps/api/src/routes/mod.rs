pub mod health;

use axum::{
    extract::{rejection::BytesRejection, State},
    http::{header, Method},
    routing::{any, get},
    Router,
};
use bytes::Bytes;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::relay::handlers;
use crate::relay::templates::PromptTemplate;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/templates", get(handlers::handle_list_templates))
        .route("/api/v1/generate/:template", any(handlers::handle_generate));

    // One fixed path per template, named after the original function endpoints.
    PromptTemplate::ALL
        .into_iter()
        .fold(router, |router, template| {
            router.route(
                &format!("/api/generate-{}", template.slug()),
                any(
                    move |State(state): State<AppState>,
                          method: Method,
                          body: Result<Bytes, BytesRejection>| {
                        handlers::handle_generate_fixed(state, template, method, body)
                    },
                ),
            )
        })
        .with_state(state)
}

/// Router plus the HTTP layers the server runs with.
///
/// The CORS layer answers every OPTIONS request itself as a preflight, so
/// OPTIONS is the one non-POST method that never reaches the relay handlers.
/// It only advertises GET and POST.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
