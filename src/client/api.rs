//! The question fetch orchestrator
//!
//! [`TriviaClient`] composes the rate limiter, the HTTP dispatcher, and the
//! session token into the bounded-retry state machine that every fetch runs
//! through. One logical fetch per instance is in flight at a time; token
//! recovery and the dispatch timestamp both live behind the same lock.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::client::config::{
    CATEGORIES_ENDPOINT, CATEGORY_COUNT_ENDPOINT, DEFAULT_BASE_URL, GLOBAL_COUNT_ENDPOINT,
    MAX_FETCH_ATTEMPTS, MIN_REQUEST_INTERVAL, QUESTIONS_ENDPOINT,
};
use crate::client::http::TriviaHttpClient;
use crate::client::protocol::{
    CategoriesEnvelope, CategoryCountEnvelope, GlobalCountEnvelope, QuestionsEnvelope,
    ResponseCode,
};
use crate::client::rate_limit::{Clock, RateLimiter};
use crate::client::session::SessionToken;
use crate::client::{ClientError, ClientResult};
use crate::shutdown::SharedShutdown;
use crate::{Category, GlobalQuestionCount, Question, QuestionRequest};

/// Per-instance mutable state, serialized behind one lock.
///
/// Two concurrent recoveries would otherwise race on the token (the second
/// acquire silently discarding the first) and on the dispatch timestamp.
struct FetchState {
    session: SessionToken,
    limiter: RateLimiter,
}

/// Client for the question bank.
///
/// Owns the session token and the rate-limit state for its lifetime; neither
/// is persisted. All fetches on one instance are serialized, including their
/// recovery retries.
pub struct TriviaClient {
    http: TriviaHttpClient,
    state: Mutex<FetchState>,
    shutdown: Option<SharedShutdown>,
}

impl TriviaClient {
    /// Create a client against the default bank URL with the standard
    /// 5-second request interval
    pub fn new() -> Self {
        Self {
            http: TriviaHttpClient::new(DEFAULT_BASE_URL, None),
            state: Mutex::new(FetchState {
                session: SessionToken::new(),
                limiter: RateLimiter::new(MIN_REQUEST_INTERVAL),
            }),
            shutdown: None,
        }
    }

    /// Point the client at a different base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.http = TriviaHttpClient::new(base_url, self.shutdown.clone());
        self
    }

    /// Override the minimum interval between question dispatches
    pub fn with_min_interval(mut self, min_interval: Duration) -> Self {
        let state = self.state.get_mut();
        state.limiter = RateLimiter::with_clock(min_interval, state.limiter.clock());
        self
    }

    /// Inject an explicit time source for the rate limiter
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        let state = self.state.get_mut();
        state.limiter = RateLimiter::with_clock(state.limiter.min_interval(), clock);
        self
    }

    /// Attach a shared shutdown handle for graceful cancellation.
    ///
    /// Both the rate-gate wait and the network wait abort with
    /// [`ClientError::Cancelled`] once shutdown is requested.
    pub fn with_shutdown(mut self, shutdown: SharedShutdown) -> Self {
        self.http = TriviaHttpClient::new(
            self.http.base_url().to_string(),
            Some(shutdown.clone()),
        );
        self.shutdown = Some(shutdown);
        self
    }

    /// The base URL requests are issued against
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Fetch questions matching the request.
    ///
    /// Runs the bounded-retry state machine: rate gate, dispatch, response
    /// code inspection, and at most one recovery retry for the two token
    /// conditions. The returned list is the server payload verbatim, in
    /// server order, with no local filtering or deduplication.
    ///
    /// # Errors
    /// Every non-success outcome maps to a distinct [`ClientError`] variant;
    /// see the module docs for which codes are recovered locally.
    pub async fn fetch_questions(&self, request: &QuestionRequest) -> ClientResult<Vec<Question>> {
        request.validate().map_err(ClientError::InvalidRequest)?;

        let mut state = self.state.lock().await;
        let mut attempt: u32 = 0;

        loop {
            state.limiter.gate(self.shutdown.as_deref()).await?;

            let params = build_query(request, state.session.get());
            let outcome = self
                .http
                .get::<QuestionsEnvelope>(QUESTIONS_ENDPOINT, &params)
                .await;
            // Stamp at completion so a slow call does not understate the
            // next required gap.
            state.limiter.record_dispatch();
            let envelope = outcome?;

            match ResponseCode::from_code(envelope.response_code) {
                Some(ResponseCode::Success) => return Ok(envelope.results),
                Some(ResponseCode::NoResults) => return Err(ClientError::NoResults),
                Some(ResponseCode::InvalidParameter) => {
                    return Err(ClientError::InvalidParameter)
                }
                Some(ResponseCode::RateLimited) => {
                    // The proactive gate should make this unreachable; seeing
                    // it means clock skew or another client sharing the
                    // server-side limit, which must surface.
                    warn!("Bank reported rate limiting despite proactive gating");
                    return Err(ClientError::RateLimitExceeded);
                }
                Some(ResponseCode::TokenNotFound) => {
                    state.session.invalidate();
                    if attempt + 1 >= MAX_FETCH_ATTEMPTS {
                        return Err(ClientError::TokenNotFound);
                    }
                    info!("Session token unknown to the bank; acquiring a fresh one");
                    state.session.acquire(&self.http).await?;
                    attempt += 1;
                }
                Some(ResponseCode::TokenEmpty) => {
                    if !state.session.has() || attempt + 1 >= MAX_FETCH_ATTEMPTS {
                        return Err(ClientError::TokenEmpty);
                    }
                    info!("Session token exhausted; resetting its seen-question record");
                    state.session.reset(&self.http).await?;
                    attempt += 1;
                }
                None => return Err(ClientError::UnknownResponseCode(envelope.response_code)),
            }
        }
    }

    /// Acquire a session token now instead of waiting for recovery to need
    /// one. Subsequent fetches send it automatically.
    pub async fn request_token(&self) -> ClientResult<String> {
        let mut state = self.state.lock().await;
        state.session.acquire(&self.http).await
    }

    /// Reset the held token's seen-question record at the bank.
    ///
    /// # Errors
    /// [`ClientError::NoTokenToReset`] when no token is held.
    pub async fn reset_token(&self) -> ClientResult<()> {
        let state = self.state.lock().await;
        state.session.reset(&self.http).await
    }

    /// The currently held session token, if any
    pub async fn token(&self) -> Option<String> {
        self.state.lock().await.session.get().map(String::from)
    }

    /// Whether a session token is currently held
    pub async fn has_token(&self) -> bool {
        self.state.lock().await.session.has()
    }

    /// Drop the held token locally without contacting the bank
    pub async fn clear_token(&self) {
        self.state.lock().await.session.invalidate();
    }

    /// List every category the bank knows.
    ///
    /// This endpoint carries no response-code protocol and is not rate
    /// gated; it succeeds or fails with a network or decode error.
    pub async fn categories(&self) -> ClientResult<Vec<Category>> {
        let envelope: CategoriesEnvelope = self.http.get(CATEGORIES_ENDPOINT, &[]).await?;
        Ok(envelope.trivia_categories)
    }

    /// Question counts for one category, broken down by difficulty
    ///
    /// # Arguments
    /// * `category_id` - Positive category id; 0 is the "any category"
    ///   sentinel and is rejected locally
    pub async fn category_question_count(
        &self,
        category_id: u32,
    ) -> ClientResult<CategoryCountEnvelope> {
        if category_id == 0 {
            return Err(ClientError::InvalidRequest(
                "Category id 0 means \"any category\" and has no count entry".to_string(),
            ));
        }

        let params = [("category", category_id.to_string())];
        self.http.get(CATEGORY_COUNT_ENDPOINT, &params).await
    }

    /// Bank-wide question totals
    pub async fn global_question_count(&self) -> ClientResult<GlobalQuestionCount> {
        let envelope: GlobalCountEnvelope = self.http.get(GLOBAL_COUNT_ENDPOINT, &[]).await?;
        Ok(envelope.overall)
    }
}

impl Default for TriviaClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the question endpoint query: amount always, filters only when set,
/// token only when held. Category 0 is never sent as a literal value.
fn build_query(request: &QuestionRequest, token: Option<&str>) -> Vec<(&'static str, String)> {
    let mut params = vec![("amount", request.amount.to_string())];

    if let Some(category) = request.effective_category() {
        params.push(("category", category.to_string()));
    }
    if let Some(difficulty) = request.difficulty {
        params.push(("difficulty", difficulty.to_string()));
    }
    if let Some(question_type) = request.question_type {
        params.push(("type", question_type.to_string()));
    }
    if let Some(token) = token {
        params.push(("token", token.to_string()));
    }

    params
}
