//! Wire protocol: response codes and JSON envelopes
//!
//! Every token and question endpoint answers with a `response_code` integer.
//! Envelopes keep the raw value so an undocumented code decodes cleanly and
//! surfaces as [`crate::client::ClientError::UnknownResponseCode`] instead of
//! failing the JSON parse.

use crate::{Category, CategoryQuestionCount, GlobalQuestionCount, Question};
use serde::{Deserialize, Serialize};

/// Response codes returned by the token and question endpoints.
///
/// Closed enumeration; integers outside this set are represented as raw
/// values, never as a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseCode {
    /// Request succeeded and the payload is usable
    Success,
    /// No questions match the requested filter combination
    NoResults,
    /// A request parameter was rejected
    InvalidParameter,
    /// The supplied session token is unknown to the bank
    TokenNotFound,
    /// The session token has served every question matching the filters
    TokenEmpty,
    /// Requests arrived closer together than the bank allows
    RateLimited,
}

impl ResponseCode {
    /// Map a raw wire integer to a documented response code
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(ResponseCode::Success),
            1 => Some(ResponseCode::NoResults),
            2 => Some(ResponseCode::InvalidParameter),
            3 => Some(ResponseCode::TokenNotFound),
            4 => Some(ResponseCode::TokenEmpty),
            5 => Some(ResponseCode::RateLimited),
            _ => None,
        }
    }

    /// The wire integer for this response code
    pub fn code(&self) -> u32 {
        match self {
            ResponseCode::Success => 0,
            ResponseCode::NoResults => 1,
            ResponseCode::InvalidParameter => 2,
            ResponseCode::TokenNotFound => 3,
            ResponseCode::TokenEmpty => 4,
            ResponseCode::RateLimited => 5,
        }
    }
}

impl std::fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResponseCode::Success => "success",
            ResponseCode::NoResults => "no results",
            ResponseCode::InvalidParameter => "invalid parameter",
            ResponseCode::TokenNotFound => "token not found",
            ResponseCode::TokenEmpty => "token empty",
            ResponseCode::RateLimited => "rate limited",
        };
        write!(f, "{s}")
    }
}

/// Envelope returned by the token endpoint for both acquire and reset
#[derive(Debug, Clone, Deserialize)]
pub struct TokenEnvelope {
    /// Raw response code
    pub response_code: u32,
    /// Optional human-readable message accompanying non-success codes
    #[serde(default)]
    pub response_message: Option<String>,
    /// Session token; present on successful acquire
    #[serde(default)]
    pub token: Option<String>,
}

/// Envelope returned by the question endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionsEnvelope {
    /// Raw response code
    pub response_code: u32,
    /// Question records in server order; empty on non-success codes
    #[serde(default)]
    pub results: Vec<Question>,
}

/// Envelope returned by the category list endpoint.
///
/// The category and count endpoints carry no response code; they either
/// decode or fail as a network error.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesEnvelope {
    /// All categories known to the bank
    pub trivia_categories: Vec<Category>,
}

/// Envelope returned by the per-category count endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryCountEnvelope {
    /// Category the counts belong to
    pub category_id: u32,
    /// Question counts broken down by difficulty
    pub category_question_count: CategoryQuestionCount,
}

/// Envelope returned by the global count endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalCountEnvelope {
    /// Bank-wide totals
    pub overall: GlobalQuestionCount,
}
