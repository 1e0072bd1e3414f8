//! Request orchestration against the question bank
//!
//! This module provides the core client with session token management,
//! proactive rate limiting, and bounded retry handling for the bank's
//! recoverable response codes.
//!
//! # Overview
//!
//! A question fetch runs through a small state machine:
//!
//! 1. **Gate**: [`rate_limit::RateLimiter`] enforces the minimum interval
//!    since the previous question dispatch
//! 2. **Dispatch**: [`http::TriviaHttpClient`] issues one GET and decodes the
//!    JSON envelope
//! 3. **Inspect**: the response code either yields the result list, a
//!    terminal error, or one of the two recoverable token conditions
//! 4. **Recover**: token conditions trigger exactly one corrective action
//!    (acquire or reset via [`session::SessionToken`]) and one re-dispatch
//!
//! # Quick Start
//!
//! ```no_run
//! use trivia_question_client::client::TriviaClient;
//! use trivia_question_client::QuestionRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = TriviaClient::new();
//! let questions = client.fetch_questions(&QuestionRequest::new(10)).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All operations return `Result<T, ClientError>`. The only errors handled
//! locally are [`ClientError::TokenNotFound`] and [`ClientError::TokenEmpty`],
//! each at most once per logical fetch; every other error is surfaced
//! verbatim, carrying the original response code where one exists.

pub mod api;
pub mod config;
pub mod http;
pub mod protocol;
pub mod rate_limit;
pub mod session;

pub use api::TriviaClient;
pub use protocol::ResponseCode;
pub use rate_limit::{Clock, RateLimiter, SystemClock};
pub use session::SessionToken;

/// Client errors
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport failure or non-success HTTP status
    #[error("network error: {0}")]
    NetworkError(String),

    /// Response body was not the expected JSON shape
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Request rejected locally before dispatch
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The bank has no questions for the requested filter combination
    #[error("no results for the requested filters")]
    NoResults,

    /// The bank rejected one of the request parameters
    #[error("invalid request parameter")]
    InvalidParameter,

    /// The session token is unknown to the bank and recovery is exhausted
    #[error("session token not found")]
    TokenNotFound,

    /// The session token has served every matching question and recovery is
    /// exhausted or impossible
    #[error("session token has returned all available questions")]
    TokenEmpty,

    /// The bank reported its rate limit despite proactive gating
    #[error("rate limit exceeded at the server")]
    RateLimitExceeded,

    /// The bank answered with a response code outside the documented set
    #[error("unknown response code: {0}")]
    UnknownResponseCode(u32),

    /// Token acquisition was answered with a non-success response code
    #[error("token acquisition failed with code {code}{}", format_server_message(.message))]
    TokenAcquisitionFailed {
        /// Raw response code returned by the token endpoint
        code: u32,
        /// Optional server-provided message
        message: Option<String>,
    },

    /// Token reset was answered with a non-success response code
    #[error("token reset failed with code {code}{}", format_server_message(.message))]
    TokenResetFailed {
        /// Raw response code returned by the token endpoint
        code: u32,
        /// Optional server-provided message
        message: Option<String>,
    },

    /// Reset was requested while no token is held
    #[error("no session token to reset")]
    NoTokenToReset,

    /// A gate or network wait was aborted by shutdown
    #[error("operation cancelled by shutdown")]
    Cancelled,
}

impl ClientError {
    /// The raw response code carried by this error, if any.
    ///
    /// Lets presentation layers pick a message keyed on the bank's own code
    /// without matching every variant.
    pub fn response_code(&self) -> Option<u32> {
        match self {
            ClientError::NoResults => Some(ResponseCode::NoResults.code()),
            ClientError::InvalidParameter => Some(ResponseCode::InvalidParameter.code()),
            ClientError::TokenNotFound => Some(ResponseCode::TokenNotFound.code()),
            ClientError::TokenEmpty => Some(ResponseCode::TokenEmpty.code()),
            ClientError::RateLimitExceeded => Some(ResponseCode::RateLimited.code()),
            ClientError::UnknownResponseCode(code) => Some(*code),
            ClientError::TokenAcquisitionFailed { code, .. } => Some(*code),
            ClientError::TokenResetFailed { code, .. } => Some(*code),
            _ => None,
        }
    }
}

fn format_server_message(message: &Option<String>) -> String {
    match message {
        Some(text) => format!(": {text}"),
        None => String::new(),
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
