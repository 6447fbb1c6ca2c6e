use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::{RequestBuilder, StatusCode, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use zeroize::Zeroizing;

use crate::models::invitation::{InvitationTarget, VortexUser};

/// How long a minted Vortex token stays valid, in seconds.
const VORTEX_JWT_TTL_SECS: i64 = 60 * 60;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while talking to the Vortex API.
#[derive(Error, Debug)]
pub enum VortexError {
    #[error("Invalid Vortex base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Vortex API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("JWT signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// The invitation operations the HTTP layer forwards to Vortex.
///
/// Invitation payloads are passed through as opaque JSON.
#[async_trait]
pub trait InvitationService: Send + Sync {
    /// Mints a token the frontend widget uses to talk to Vortex as `user`.
    fn generate_jwt(&self, user: &VortexUser) -> Result<String, VortexError>;

    async fn invitations_by_target(
        &self,
        target_type: &str,
        target_value: &str,
    ) -> Result<Vec<Value>, VortexError>;

    async fn invitation(&self, id: &str) -> Result<Value, VortexError>;

    async fn revoke_invitation(&self, id: &str) -> Result<(), VortexError>;

    async fn accept_invitations(
        &self,
        invitation_ids: &[String],
        target: &InvitationTarget,
    ) -> Result<Value, VortexError>;

    async fn invitations_by_group(
        &self,
        group_type: &str,
        group_id: &str,
    ) -> Result<Vec<Value>, VortexError>;

    async fn delete_invitations_by_group(
        &self,
        group_type: &str,
        group_id: &str,
    ) -> Result<(), VortexError>;

    async fn reinvite(&self, id: &str) -> Result<Value, VortexError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VortexClaims {
    user_id: String,
    user_email: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    admin_scopes: Vec<String>,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct InvitationList {
    #[serde(default)]
    invitations: Vec<Value>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AcceptBody<'a> {
    invitation_ids: &'a [String],
    target: &'a InvitationTarget,
}

/// `reqwest`-backed client for the Vortex REST API.
pub struct VortexClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: Zeroizing<String>,
}

impl VortexClient {
    /// Creates a client for the API at `base_url`, authenticating with `api_key`.
    pub fn new(api_key: Zeroizing<String>, base_url: &str) -> Result<Self, VortexError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| VortexError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(VortexError::InvalidBaseUrl(base_url.to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    /// Builds `{base}/api/v1/invitations/{segments...}`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(["api", "v1", "invitations"])
                .extend(segments);
        }
        url
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value, VortexError> {
        let response = request
            .header("x-api-key", self.api_key.as_str())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VortexError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn send_list(&self, request: RequestBuilder) -> Result<Vec<Value>, VortexError> {
        let body = self.send(request).await?;
        if body.is_null() {
            return Ok(Vec::new());
        }

        let list: InvitationList = serde_json::from_value(body)?;
        Ok(list.invitations)
    }
}

#[async_trait]
impl InvitationService for VortexClient {
    fn generate_jwt(&self, user: &VortexUser) -> Result<String, VortexError> {
        let now = Utc::now().timestamp();
        let claims = VortexClaims {
            user_id: user.id.clone(),
            user_email: user.email.clone(),
            admin_scopes: user.admin_scopes.clone(),
            iat: now,
            exp: now + VORTEX_JWT_TTL_SECS,
        };

        let key = EncodingKey::from_secret(self.api_key.as_bytes());
        Ok(jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &key)?)
    }

    async fn invitations_by_target(
        &self,
        target_type: &str,
        target_value: &str,
    ) -> Result<Vec<Value>, VortexError> {
        let request = self
            .http
            .get(self.endpoint(&[]))
            .query(&[("targetType", target_type), ("targetValue", target_value)]);
        self.send_list(request).await
    }

    async fn invitation(&self, id: &str) -> Result<Value, VortexError> {
        self.send(self.http.get(self.endpoint(&[id]))).await
    }

    async fn revoke_invitation(&self, id: &str) -> Result<(), VortexError> {
        self.send(self.http.delete(self.endpoint(&[id]))).await?;
        Ok(())
    }

    async fn accept_invitations(
        &self,
        invitation_ids: &[String],
        target: &InvitationTarget,
    ) -> Result<Value, VortexError> {
        let body = AcceptBody {
            invitation_ids,
            target,
        };
        self.send(self.http.post(self.endpoint(&["accept"])).json(&body))
            .await
    }

    async fn invitations_by_group(
        &self,
        group_type: &str,
        group_id: &str,
    ) -> Result<Vec<Value>, VortexError> {
        let request = self
            .http
            .get(self.endpoint(&["by-group", group_type, group_id]));
        self.send_list(request).await
    }

    async fn delete_invitations_by_group(
        &self,
        group_type: &str,
        group_id: &str,
    ) -> Result<(), VortexError> {
        let request = self
            .http
            .delete(self.endpoint(&["by-group", group_type, group_id]));
        self.send(request).await?;
        Ok(())
    }

    async fn reinvite(&self, id: &str) -> Result<Value, VortexError> {
        self.send(self.http.post(self.endpoint(&[id, "reinvite"])))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{DecodingKey, Validation};

    fn client() -> VortexClient {
        VortexClient::new(
            Zeroizing::new("demo-api-key".to_string()),
            "https://api.example.test",
        )
        .unwrap()
    }

    fn decode(token: &str) -> VortexClaims {
        jsonwebtoken::decode::<VortexClaims>(
            token,
            &DecodingKey::from_secret(b"demo-api-key"),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap()
        .claims
    }

    #[test]
    fn rejects_unusable_base_url() {
        let key = || Zeroizing::new("k".to_string());
        assert!(matches!(
            VortexClient::new(key(), "not a url"),
            Err(VortexError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            VortexClient::new(key(), "mailto:ops@example.com"),
            Err(VortexError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn endpoints_are_percent_encoded() {
        let client = client();

        assert_eq!(
            client.endpoint(&[]).as_str(),
            "https://api.example.test/api/v1/invitations"
        );
        assert_eq!(
            client.endpoint(&["inv 1", "reinvite"]).as_str(),
            "https://api.example.test/api/v1/invitations/inv%201/reinvite"
        );
        assert_eq!(
            client.endpoint(&["by-group", "team", "a/b"]).as_str(),
            "https://api.example.test/api/v1/invitations/by-group/team/a%2Fb"
        );
    }

    #[test]
    fn jwt_carries_admin_scopes() {
        let client = client();
        let user = VortexUser {
            id: "user-1".to_string(),
            email: "admin@example.com".to_string(),
            admin_scopes: vec!["autojoin".to_string()],
        };

        let claims = decode(&client.generate_jwt(&user).unwrap());
        assert_eq!(claims.user_id, "user-1");
        assert_eq!(claims.user_email, "admin@example.com");
        assert_eq!(claims.admin_scopes, vec!["autojoin".to_string()]);
        assert_eq!(claims.exp - claims.iat, VORTEX_JWT_TTL_SECS);
    }

    #[test]
    fn jwt_omits_scopes_for_regular_users() {
        let client = client();
        let user = VortexUser {
            id: "user-2".to_string(),
            email: "user@example.com".to_string(),
            admin_scopes: Vec::new(),
        };

        let token = client.generate_jwt(&user).unwrap();
        assert!(decode(&token).admin_scopes.is_empty());
    }
}
