pub mod routes;

use axum::{
    routing::{get, get_service},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::services::suggestions::SuggestionClient;

/// Assemble the full application router. Kept in the library so tests can
/// drive the exact routes the binary serves.
pub fn router(suggestions: SuggestionClient) -> Router {
    Router::new()
        .route("/", get(routes::home::home_handler))
        .route("/activity/:id", get(routes::activity::activity_detail_handler))
        .route("/category/:name", get(routes::category::category_handler))
        .route("/random", get(routes::random::random_activity_handler))
        .nest_service(
            "/assets",
            get_service(ServeDir::new("assets")).layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            )),
        )
        .layer(CatchPanicLayer::new())
        .with_state(suggestions)
}
