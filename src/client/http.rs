//! HTTP dispatch against the question bank
//!
//! One GET per call, decoded into a typed JSON envelope. The dispatcher does
//! not interpret response codes; it only distinguishes transport failures,
//! non-success HTTP statuses, and undecodable bodies.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::{ClientError, ClientResult};
use crate::shutdown::SharedShutdown;

/// HTTP client for all question bank endpoints
pub struct TriviaHttpClient {
    client: Client,
    base_url: String,
    shutdown: Option<SharedShutdown>,
}

impl TriviaHttpClient {
    /// Create a new HTTP client
    ///
    /// # Arguments
    /// * `base_url` - Base URL for bank endpoints (e.g., "<https://opentdb.com>")
    /// * `shutdown` - Optional handle that aborts in-flight network waits
    pub fn new(base_url: impl Into<String>, shutdown: Option<SharedShutdown>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            shutdown,
        }
    }

    /// The base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute one GET request with generic envelope deserialization
    ///
    /// # Arguments
    /// * `endpoint` - Endpoint path (e.g., "/api.php")
    /// * `params` - Query parameters as key-value pairs
    ///
    /// # Errors
    /// * [`ClientError::NetworkError`] on transport failure or a non-2xx
    ///   status - a failed request is never treated as an empty result
    /// * [`ClientError::DecodeError`] when the body is not the expected shape
    /// * [`ClientError::Cancelled`] when shutdown interrupts the wait
    pub async fn get<T>(&self, endpoint: &str, params: &[(&str, String)]) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("GET {} with {} params", url, params.len());

        let request = self.client.get(&url).query(params).send();

        let response = match &self.shutdown {
            Some(shutdown) => {
                tokio::select! {
                    result = request => result,
                    _ = shutdown.wait_for_shutdown() => return Err(ClientError::Cancelled),
                }
            }
            None => request.await,
        }
        .map_err(|e| ClientError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::NetworkError(format!(
                "unexpected status {status} from {endpoint}"
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::DecodeError(e.to_string()))
    }
}
