//! # Trivia Question Client Library
//!
//! A client library for fetching multiple-choice and true/false quiz questions
//! from the Open Trivia DB question bank. Designed for quiz applications that
//! need well-behaved access to the bank's stateful HTTP protocol.
//!
//! ## Features
//!
//! - **Session Tokens**: Automatic acquisition and reset of the bank's
//!   deduplication token, with one bounded recovery retry per fetch
//! - **Rate Limiting**: Proactive client-side throttling to respect the bank's
//!   minimum request interval
//! - **Typed Errors**: Every server response code surfaces as a distinct error
//!   variant carrying the original code
//! - **Cancellation**: Rate-gate and network waits abort cleanly on shutdown
//! - **Type-Safe**: Strong typing with validation for request parameters
//!
//! ## Quick Start
//!
//! ```no_run
//! use trivia_question_client::client::TriviaClient;
//! use trivia_question_client::{Difficulty, QuestionRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = TriviaClient::new();
//!
//! // Fetch ten easy questions from any category
//! let request = QuestionRequest::new(10).with_difficulty(Difficulty::Easy);
//! let questions = client.fetch_questions(&request).await?;
//!
//! for question in questions {
//!     println!("{}", question.question);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into a few core modules:
//!
//! - [`client`] - Request orchestration: session token lifecycle, rate
//!   limiting, and the bounded-retry fetch state machine
//! - [`label`] - Display helpers for decoding and normalizing the HTML-encoded
//!   labels the bank embeds in its payloads
//! - [`shutdown`] - Graceful shutdown coordination shared across modules
//!
//! ## Protocol Notes
//!
//! The bank enforces two stateful protocols: an ephemeral session token that
//! deduplicates questions served to a caller, and a server-side minimum
//! interval between question requests. Both are handled inside
//! [`client::TriviaClient`]; callers only see a list of [`Question`] records
//! or a typed [`client::ClientError`].

#![warn(missing_docs)]
#![warn(clippy::all)]

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Request orchestration against the question bank
pub mod client;

/// CLI command implementations
pub mod cli;

/// Display helpers for HTML-encoded category and question labels
pub mod label;

/// Graceful shutdown coordination shared across modules
pub mod shutdown;

// Re-export commonly used types
pub use client::TriviaClient;

/// Question difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Easy questions
    #[serde(rename = "easy")]
    Easy,
    /// Medium questions
    #[serde(rename = "medium")]
    Medium,
    /// Hard questions
    #[serde(rename = "hard")]
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("Invalid difficulty: {s}")),
        }
    }
}

/// Question format served by the bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    /// Multiple choice (four answers)
    #[serde(rename = "multiple")]
    Multiple,
    /// True / false
    #[serde(rename = "boolean")]
    Boolean,
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            QuestionType::Multiple => "multiple",
            QuestionType::Boolean => "boolean",
        };
        write!(f, "{s}")
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "multiple" => Ok(QuestionType::Multiple),
            "boolean" => Ok(QuestionType::Boolean),
            _ => Err(format!("Invalid question type: {s}")),
        }
    }
}

/// A single quiz question as served by the bank.
///
/// The payload is opaque to the client: text fields arrive HTML-encoded and
/// are passed through verbatim. Use [`label::decode_html_entities`] when
/// rendering them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    /// Category label (e.g., "Entertainment: Video Games")
    pub category: String,
    /// Question format
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Difficulty level
    pub difficulty: Difficulty,
    /// Question text, HTML-encoded
    pub question: String,
    /// The correct answer, HTML-encoded
    pub correct_answer: String,
    /// Incorrect answers in server order, HTML-encoded
    pub incorrect_answers: Vec<String>,
}

/// A question category from the bank's category table.
///
/// Id 0 is reserved to mean "any category" and never appears in
/// server-provided lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Positive category id
    pub id: u32,
    /// Display name, HTML-encoded
    pub name: String,
}

impl Category {
    /// Validate category data integrity
    pub fn validate(&self) -> Result<(), String> {
        if self.id == 0 {
            return Err("Category id 0 is reserved for \"any category\"".to_string());
        }

        if self.name.is_empty() {
            return Err("Category name cannot be empty".to_string());
        }

        Ok(())
    }
}

/// Per-difficulty question counts for one category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryQuestionCount {
    /// Total verified questions in the category
    pub total_question_count: u64,
    /// Easy questions
    pub total_easy_question_count: u64,
    /// Medium questions
    pub total_medium_question_count: u64,
    /// Hard questions
    pub total_hard_question_count: u64,
}

/// Bank-wide question counts across all categories
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GlobalQuestionCount {
    /// All questions ever submitted
    pub total_num_of_questions: u64,
    /// Questions awaiting review
    pub total_num_of_pending_questions: u64,
    /// Questions available to fetch
    pub total_num_of_verified_questions: u64,
    /// Questions rejected by review
    pub total_num_of_rejected_questions: u64,
}

/// Parameters for one question fetch.
///
/// Immutable per call: build it once, pass it by reference. `category`,
/// `difficulty`, and `question_type` are filters; `None` means no filter.
/// A category of `Some(0)` is treated the same as `None` and is never sent
/// to the bank as a literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRequest {
    /// Number of questions to fetch (1..=50)
    pub amount: u32,
    /// Category filter (positive id; 0 or None means any category)
    pub category: Option<u32>,
    /// Difficulty filter
    pub difficulty: Option<Difficulty>,
    /// Question format filter
    pub question_type: Option<QuestionType>,
}

impl QuestionRequest {
    /// Create a request for `amount` questions with no filters
    pub fn new(amount: u32) -> Self {
        Self {
            amount,
            category: None,
            difficulty: None,
            question_type: None,
        }
    }

    /// Restrict the fetch to one category
    pub fn with_category(mut self, category: u32) -> Self {
        self.category = Some(category);
        self
    }

    /// Restrict the fetch to one difficulty
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Restrict the fetch to one question format
    pub fn with_question_type(mut self, question_type: QuestionType) -> Self {
        self.question_type = Some(question_type);
        self
    }

    /// Validate request parameters against the bank's documented bounds
    pub fn validate(&self) -> Result<(), String> {
        if self.amount < client::config::MIN_AMOUNT {
            return Err(format!(
                "Amount must be at least {}, got {}",
                client::config::MIN_AMOUNT,
                self.amount
            ));
        }

        if self.amount > client::config::MAX_AMOUNT {
            return Err(format!(
                "Amount must be at most {}, got {}",
                client::config::MAX_AMOUNT,
                self.amount
            ));
        }

        Ok(())
    }

    /// The effective category filter: `Some` only for positive ids
    pub fn effective_category(&self) -> Option<u32> {
        self.category.filter(|id| *id > 0)
    }
}
