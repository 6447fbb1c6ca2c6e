use axum::{
    Router,
    http::HeaderValue,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use http::{Method, header};
use std::time::Duration;
use tower_cookies::CookieManagerLayer;
use tower_http::{
    services::ServeDir,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
    cors::{AllowOrigin, CorsLayer},
};
use tracing::Level;

use crate::{handlers, middleware_layer, state::AppState};

fn cors_layer(port: u16) -> CorsLayer {
    let origins: Vec<HeaderValue> = [
        format!("http://localhost:{}", port),
        format!("http://127.0.0.1:{}", port),
        format!("http://[::1]:{}", port),
    ]
    .iter()
    .filter_map(|origin| HeaderValue::from_str(origin).ok())
    .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::COOKIE,
        ])
        .allow_credentials(true)
        .max_age(Duration::from_secs(86400))
}

/// Builds the complete application router.
pub fn build_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/logout", post(handlers::auth::logout))
        .route("/api/auth/me", get(handlers::auth::me))
        .route("/api/demo/users", get(handlers::demo::list_users))
        .route("/health", get(handlers::health::health))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/api/demo/protected", get(handlers::demo::protected))
        .route("/api/vortex/jwt", post(handlers::vortex::generate_jwt))
        .route(
            "/api/vortex/invitations",
            get(handlers::vortex::get_invitations),
        )
        .route(
            "/api/vortex/invitations/accept",
            post(handlers::vortex::accept_invitations),
        )
        .route(
            "/api/vortex/invitations/{id}",
            get(handlers::vortex::get_invitation).delete(handlers::vortex::revoke_invitation),
        )
        .route(
            "/api/vortex/invitations/{id}/reinvite",
            post(handlers::vortex::reinvite),
        )
        .route(
            "/api/vortex/invitations/by-group/{group_type}/{group_id}",
            get(handlers::vortex::get_invitations_by_group)
                .delete(handlers::vortex::delete_invitations_by_group),
        )
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware_layer::auth::require_auth,
        ))
        .with_state(state.clone());

    let static_dir = state.config.static_dir.clone();

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .nest_service("/static", ServeDir::new(&static_dir))
        .fallback_service(ServeDir::new(&static_dir))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default())
                .on_request(DefaultOnRequest::default().level(Level::DEBUG))
                .on_response(DefaultOnResponse::default().level(Level::DEBUG))
                .on_failure(DefaultOnFailure::default().level(Level::ERROR)),
        )
        .layer(CookieManagerLayer::new())
        .layer(cors_layer(state.config.port))
}
