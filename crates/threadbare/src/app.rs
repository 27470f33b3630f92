use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    set_header::SetResponseHeader,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        api::{get_item, list_items, run_tests},
        catalog::catalog,
        health::{healthz, livez},
        pages::{access_denied, home, landing, not_found},
        product::product_detail,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    // API routes with CORS
    let api_routes = Router::new()
        .route("/items", get(list_items))
        .route("/items/{id}", get(get_item))
        .layer(cors);

    // Uploaded images, cached by the browser for an hour
    let uploads = SetResponseHeader::if_not_present(
        ServeDir::new(&state.upload_dir),
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=3600"),
    );

    let request_timeout = state.request_timeout;

    // Main application router
    Router::new()
        .route("/", get(home))
        .route("/catalog", get(catalog))
        .route("/product/{id}", get(product_detail))
        .route("/access-denied", get(access_denied))
        .route("/run-tests", get(run_tests))
        .route("/landing", get(landing))
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .nest("/api", api_routes)
        .nest_service("/uploads", uploads)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}
