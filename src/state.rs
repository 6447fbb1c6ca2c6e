use std::sync::Arc;

use chrono::Duration;

use crate::config::Config;
use crate::crypto::session_token::SessionCodec;
use crate::error::{AppError, Result};
use crate::repositories::user::UserDirectory;
use crate::services::vortex::{InvitationService, VortexClient};

/// The application's state.
///
/// Everything behind the `Arc`s is read-only once built.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration.
    pub config: Arc<Config>,
    /// The known users.
    pub users: Arc<UserDirectory>,
    /// The session token codec.
    pub sessions: Arc<SessionCodec>,
    /// The invitation API collaborator.
    pub invitations: Arc<dyn InvitationService>,
}

impl AppState {
    /// Creates a new `AppState` backed by the real Vortex client.
    ///
    /// # Arguments
    ///
    /// * `config` - The application's configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let client = VortexClient::new(config.vortex_api_key.clone(), &config.vortex_base_url)
            .map_err(|e| AppError::Internal(format!("Vortex client init failed: {}", e)))?;
        tracing::info!(
            "🔧 Vortex client initialized with API key: {}...",
            config.api_key_preview()
        );

        Ok(Self::with_services(
            config,
            UserDirectory::demo(),
            Arc::new(client),
        ))
    }

    /// Creates a new `AppState` from explicit collaborators.
    pub fn with_services(
        config: &Config,
        users: UserDirectory,
        invitations: Arc<dyn InvitationService>,
    ) -> Self {
        let sessions = SessionCodec::new(
            config.session_secret.as_bytes(),
            Duration::try_hours(config.session_duration_hours).unwrap_or(Duration::MAX),
        );
        tracing::info!("✅ User directory loaded ({} users)", users.len());

        AppState {
            config: Arc::new(config.clone()),
            users: Arc::new(users),
            sessions: Arc::new(sessions),
            invitations,
        }
    }
}
