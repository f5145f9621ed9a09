use std::sync::{Arc, OnceLock};

use chrono::Utc;
use tokio::sync::Mutex;

use crate::{error::ToolError, spotify, types::Token};

/// Refresh margin: a token this close to expiry counts as expired.
const EXPIRY_MARGIN_SECS: u64 = 240;

/// In-process cache for the client-credentials token.
///
/// The token lives only for the lifetime of the process; it is never
/// written to disk. Expiry is derived from the token response's
/// `expires_in`, with an early-refresh margin so a token is not handed out
/// moments before it dies upstream.
pub struct TokenManager {
    token: Option<Token>,
}

impl TokenManager {
    pub fn new() -> Self {
        TokenManager { token: None }
    }

    /// Process-wide shared instance, lock-guarded so concurrent tool calls
    /// reuse one credential exchange instead of racing the token endpoint.
    pub fn shared() -> Arc<Mutex<TokenManager>> {
        static SHARED: OnceLock<Arc<Mutex<TokenManager>>> = OnceLock::new();
        SHARED
            .get_or_init(|| Arc::new(Mutex::new(TokenManager::new())))
            .clone()
    }

    /// Returns a usable access token, exchanging credentials first if none
    /// is cached or the cached one is within the expiry margin.
    pub async fn get_valid_token(&mut self) -> Result<String, ToolError> {
        if self.is_expired() {
            self.token = Some(spotify::auth::request_token().await?);
        }

        Ok(self
            .token
            .as_ref()
            .map(|t| t.access_token.clone())
            .unwrap_or_default())
    }

    fn is_expired(&self) -> bool {
        match &self.token {
            Some(token) => {
                let now = Utc::now().timestamp() as u64;
                now >= token.obtained_at + token.expires_in.saturating_sub(EXPIRY_MARGIN_SECS)
            }
            None => true,
        }
    }
}

impl Default for TokenManager {
    fn default() -> Self {
        Self::new()
    }
}
