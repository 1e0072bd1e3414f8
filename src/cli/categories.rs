//! Category listing and question count commands

use clap::Parser;

use crate::label::decode_html_entities;
use crate::shutdown::SharedShutdown;

use super::questions::{Cli, OutputFormat};
use super::CliError;

/// Arguments for listing categories
#[derive(Parser, Debug)]
pub struct CategoriesCommand {}

impl CategoriesCommand {
    /// Execute the categories command
    pub async fn execute(&self, cli: &Cli, shutdown: SharedShutdown) -> Result<(), CliError> {
        let client = super::client_from_cli(cli, shutdown);
        let categories = client.categories().await?;

        match cli.output_format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&categories)
                    .map_err(|e| CliError::OutputError(e.to_string()))?;
                println!("{json}");
            }
            OutputFormat::Human => {
                for category in &categories {
                    println!("{:>4}  {}", category.id, decode_html_entities(&category.name));
                }
                println!("{} categories", categories.len());
            }
        }

        Ok(())
    }
}

/// Arguments for showing question counts
#[derive(Parser, Debug)]
pub struct CountsCommand {
    /// Category id to count; omit for bank-wide totals
    #[arg(long)]
    pub category: Option<u32>,
}

impl CountsCommand {
    /// Execute the counts command
    pub async fn execute(&self, cli: &Cli, shutdown: SharedShutdown) -> Result<(), CliError> {
        let client = super::client_from_cli(cli, shutdown);

        match self.category {
            Some(category_id) => {
                let counts = client.category_question_count(category_id).await?;

                match cli.output_format {
                    OutputFormat::Json => {
                        let json = serde_json::json!({
                            "category_id": counts.category_id,
                            "category_question_count": counts.category_question_count,
                        });
                        println!("{}", serde_json::to_string_pretty(&json)
                            .map_err(|e| CliError::OutputError(e.to_string()))?);
                    }
                    OutputFormat::Human => {
                        let breakdown = &counts.category_question_count;
                        println!("Category {}", counts.category_id);
                        println!("  total:  {}", breakdown.total_question_count);
                        println!("  easy:   {}", breakdown.total_easy_question_count);
                        println!("  medium: {}", breakdown.total_medium_question_count);
                        println!("  hard:   {}", breakdown.total_hard_question_count);
                    }
                }
            }
            None => {
                let overall = client.global_question_count().await?;

                match cli.output_format {
                    OutputFormat::Json => {
                        let json = serde_json::to_string_pretty(&overall)
                            .map_err(|e| CliError::OutputError(e.to_string()))?;
                        println!("{json}");
                    }
                    OutputFormat::Human => {
                        println!("Bank totals");
                        println!("  questions: {}", overall.total_num_of_questions);
                        println!("  verified:  {}", overall.total_num_of_verified_questions);
                        println!("  pending:   {}", overall.total_num_of_pending_questions);
                        println!("  rejected:  {}", overall.total_num_of_rejected_questions);
                    }
                }
            }
        }

        Ok(())
    }
}
