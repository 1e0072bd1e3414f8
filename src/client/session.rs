//! Session token lifecycle
//!
//! The bank issues an opaque token that makes the question endpoint skip
//! questions already served under it. The token lives for the client
//! instance's lifetime and is never persisted. Invariant: the token is either
//! absent or a non-empty string; an empty token is never stored and never
//! sent.

use tracing::{debug, info};

use crate::client::config::TOKEN_ENDPOINT;
use crate::client::http::TriviaHttpClient;
use crate::client::protocol::{ResponseCode, TokenEnvelope};
use crate::client::{ClientError, ClientResult};

/// Holds the session token and performs its endpoint operations
#[derive(Debug, Default)]
pub struct SessionToken {
    token: Option<String>,
}

impl SessionToken {
    /// Create an empty session with no token held
    pub fn new() -> Self {
        Self { token: None }
    }

    /// Whether a token is currently held
    pub fn has(&self) -> bool {
        self.token.is_some()
    }

    /// The held token, if any
    pub fn get(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Drop the held token locally without a network call.
    ///
    /// Used when the bank reports the token as unknown; the server-side
    /// session is already gone, so there is nothing to tell it.
    pub fn invalidate(&mut self) {
        if self.token.take().is_some() {
            debug!("Session token invalidated locally");
        }
    }

    /// Acquire a fresh token from the bank and store it.
    ///
    /// # Errors
    /// * [`ClientError::TokenAcquisitionFailed`] when the endpoint answers
    ///   with a non-success code, or with a success code but no usable token
    /// * [`ClientError::NetworkError`] / [`ClientError::DecodeError`] on
    ///   transport or body failures
    pub async fn acquire(&mut self, http: &TriviaHttpClient) -> ClientResult<String> {
        let params = [("command", "request".to_string())];
        let envelope: TokenEnvelope = http.get(TOKEN_ENDPOINT, &params).await?;

        if envelope.response_code == ResponseCode::Success.code() {
            if let Some(token) = envelope.token.filter(|t| !t.is_empty()) {
                info!("Acquired new session token");
                self.token = Some(token.clone());
                return Ok(token);
            }
        }

        Err(ClientError::TokenAcquisitionFailed {
            code: envelope.response_code,
            message: envelope.response_message,
        })
    }

    /// Reset the held token's server-side record of seen questions.
    ///
    /// The token string itself does not change; only the bank's internal
    /// state is cleared.
    ///
    /// # Errors
    /// * [`ClientError::NoTokenToReset`] when no token is held; no network
    ///   call is made
    /// * [`ClientError::TokenResetFailed`] when the endpoint answers with a
    ///   non-success code
    pub async fn reset(&self, http: &TriviaHttpClient) -> ClientResult<()> {
        let Some(token) = self.token.as_ref() else {
            return Err(ClientError::NoTokenToReset);
        };

        let params = [
            ("command", "reset".to_string()),
            ("token", token.clone()),
        ];
        let envelope: TokenEnvelope = http.get(TOKEN_ENDPOINT, &params).await?;

        if envelope.response_code == ResponseCode::Success.code() {
            info!("Session token reset; seen-question record cleared");
            return Ok(());
        }

        Err(ClientError::TokenResetFailed {
            code: envelope.response_code,
            message: envelope.response_message,
        })
    }
}
