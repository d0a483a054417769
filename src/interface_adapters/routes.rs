use crate::interface_adapters::handlers::auth::{current_user, login, logout, signup};
use crate::interface_adapters::handlers::frontend::serve_frontend;
use crate::interface_adapters::handlers::products::list_products;
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn app(state: Arc<AppState>) -> Router {
    let assets = ServeDir::new(state.frontend_dir.join("static"));

    // Wire the HTTP routes to their handlers.
    Router::new()
        .route("/", get(serve_frontend))
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/me", get(current_user))
        .route("/api/products", get(list_products))
        .nest_service("/static", assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
