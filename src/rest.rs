use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/me", get(handlers::auth::me))
        .route("/api/dashboard/student", get(handlers::dashboard::student))
        .route("/api/dashboard/teacher", get(handlers::dashboard::teacher))
        .route("/api/files/upload", post(handlers::files::upload))
        .route("/api/files/list", get(handlers::files::list))
        .route(
            "/api/files/download/:filename",
            get(handlers::files::download),
        )
        .route(
            "/api/files/delete/:filename",
            delete(handlers::files::delete),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
