use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    error::{AppError, Result},
    models::{session::SessionClaims, user::DemoUser},
};

/// The message returned for every rejected token, whatever the reason.
pub const INVALID_TOKEN: &str = "Invalid token";

/// Issues and verifies HMAC-signed session tokens.
///
/// Tokens are self-contained: verification needs only the secret, no
/// server-side lookup.
pub struct SessionCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl SessionCodec {
    /// Creates a codec signing with `secret`; issued tokens live for `ttl`.
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Any HMAC variant is accepted; RSA/EC/none headers are not.
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.leeway = 0;
        validation.validate_exp = true;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// The lifetime of issued tokens.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issues a token for `user`, valid from now until now + ttl.
    pub fn issue(&self, user: &DemoUser) -> Result<String> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::Internal("Session expiry out of range".to_string()))?;

        let claims = SessionClaims::for_user(user, now.timestamp(), expires_at.timestamp());
        self.sign(&claims)
    }

    /// Signs an arbitrary claims set with HS256.
    pub fn sign(&self, claims: &SessionClaims) -> Result<String> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Session token signing failed: {}", e)))
    }

    /// Validates `token` and returns the identity it carries.
    ///
    /// Malformed, tampered, expired and wrong-algorithm tokens all fail with
    /// the same [`INVALID_TOKEN`] error; the cause is only logged.
    pub fn verify(&self, token: &str) -> Result<DemoUser> {
        jsonwebtoken::decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims.into_user())
            .map_err(|e| {
                tracing::debug!("Session token rejected: {}", e);
                AppError::Authentication(INVALID_TOKEN.to_string())
            })
    }
}
