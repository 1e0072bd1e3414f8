//! Session token command

use clap::{Parser, Subcommand};

use crate::shutdown::SharedShutdown;

use super::questions::{Cli, OutputFormat};
use super::CliError;

/// Arguments for token operations
#[derive(Parser, Debug)]
pub struct TokenCommand {
    /// Token operation to perform
    #[command(subcommand)]
    pub operation: TokenOperation,
}

/// Token operations.
///
/// Tokens are scoped to one client instance and are never persisted, so the
/// only standalone operation is acquiring one; resets happen inside the
/// fetch recovery path and through the library API.
#[derive(Subcommand, Debug)]
pub enum TokenOperation {
    /// Acquire a fresh session token and print it
    Request,
}

impl TokenCommand {
    /// Execute the token command
    pub async fn execute(&self, cli: &Cli, shutdown: SharedShutdown) -> Result<(), CliError> {
        let client = super::client_from_cli(cli, shutdown);

        match self.operation {
            TokenOperation::Request => {
                let token = client.request_token().await?;

                match cli.output_format {
                    OutputFormat::Json => {
                        let json = serde_json::json!({ "token": token });
                        println!("{json}");
                    }
                    OutputFormat::Human => {
                        println!("{token}");
                    }
                }
            }
        }

        Ok(())
    }
}
