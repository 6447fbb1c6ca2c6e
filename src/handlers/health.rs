use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::Utc;

pub async fn health() -> Response {
    let body = sonic_rs::to_string(&sonic_rs::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "vortex": {
            "configured": true,
            "routes": [
                "/api/vortex/jwt",
                "/api/vortex/invitations",
                "/api/vortex/invitations/{id}",
                "/api/vortex/invitations/accept",
                "/api/vortex/invitations/by-group/{type}/{id}",
                "/api/vortex/invitations/{id}/reinvite"
            ]
        }
    }))
    .unwrap_or_else(|_| r#"{"status":"healthy"}"#.to_string());

    (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}
