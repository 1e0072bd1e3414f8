//! Client configuration constants

use std::time::Duration;

/// Default base URL of the question bank.
pub const DEFAULT_BASE_URL: &str = "https://opentdb.com";

/// Question fetch endpoint path.
pub const QUESTIONS_ENDPOINT: &str = "/api.php";

/// Session token endpoint path (acquire and reset).
pub const TOKEN_ENDPOINT: &str = "/api_token.php";

/// Category list endpoint path.
pub const CATEGORIES_ENDPOINT: &str = "/api_category.php";

/// Per-category question count endpoint path.
pub const CATEGORY_COUNT_ENDPOINT: &str = "/api_count.php";

/// Global question count endpoint path.
pub const GLOBAL_COUNT_ENDPOINT: &str = "/api_count_global.php";

/// Minimum wall-clock interval between two question-endpoint dispatches.
/// The bank rejects requests issued closer together than 5 seconds; gating
/// client-side keeps that rejection from ever being observed.
pub const MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(5000);

/// Maximum attempts for one logical question fetch.
/// 2 means the initial dispatch plus at most one recovery retry: both
/// recoverable token conditions are resolved by exactly one corrective
/// action, so a second occurrence indicates a persistent problem that must
/// surface instead of looping.
pub const MAX_FETCH_ATTEMPTS: u32 = 2;

/// Smallest accepted question amount per fetch.
pub const MIN_AMOUNT: u32 = 1;

/// Largest question amount the bank serves in one request.
pub const MAX_AMOUNT: u32 = 50;
