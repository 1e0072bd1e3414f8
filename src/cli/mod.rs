//! CLI command implementations

pub mod categories;
pub mod error;
pub mod questions;
pub mod token;

pub use categories::{CategoriesCommand, CountsCommand};
pub use error::CliError;
pub use questions::{Cli, Commands, OutputFormat, QuestionsArgs};
pub use token::TokenCommand;

use crate::client::TriviaClient;
use crate::shutdown::SharedShutdown;
use std::time::Duration;

/// Build a client from the global CLI flags.
pub(crate) fn client_from_cli(cli: &Cli, shutdown: SharedShutdown) -> TriviaClient {
    TriviaClient::new()
        .with_base_url(cli.base_url.clone())
        .with_min_interval(Duration::from_millis(cli.min_interval_ms))
        .with_shutdown(shutdown)
}
