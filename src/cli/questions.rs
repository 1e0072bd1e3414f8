//! Questions command implementation

use clap::{Parser, Subcommand};
use std::str::FromStr;
use tracing::info;

use crate::client::config::DEFAULT_BASE_URL;
use crate::label::decode_html_entities;
use crate::shutdown::SharedShutdown;
use crate::{Difficulty, Question, QuestionRequest, QuestionType};

use super::CliError;

/// Maximum fetch rounds per invocation. Each round after the first waits out
/// the full rate-limit interval, so large values mostly spend wall-clock.
const MAX_ROUNDS: u32 = 100;

/// Parse and validate the rounds flag
fn parse_rounds(s: &str) -> Result<u32, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if value == 0 {
        return Err("rounds must be at least 1".to_string());
    }
    if value > MAX_ROUNDS {
        return Err(format!("rounds {value} exceeds maximum of {MAX_ROUNDS}"));
    }
    Ok(value)
}

/// Output formats for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// Raw JSON payloads
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {s}. Valid options: human, json")),
        }
    }
}

/// Trivia Question Client CLI
#[derive(Parser, Debug)]
#[command(name = "trivia-question-client")]
#[command(about = "Fetch quiz questions from the Open Trivia DB question bank", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the question bank
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Output format (json or human)
    #[arg(long, global = true, default_value = "human")]
    pub output_format: OutputFormat,

    /// Minimum milliseconds between question requests
    ///
    /// The bank rejects question requests spaced closer than 5 seconds.
    /// Lowering this is only useful against a private bank instance.
    #[arg(long, global = true, default_value_t = 5000)]
    pub min_interval_ms: u64,
}

/// CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch quiz questions
    Questions(QuestionsArgs),

    /// List the bank's category table
    Categories(super::CategoriesCommand),

    /// Show question counts for a category or the whole bank
    Counts(super::CountsCommand),

    /// Manage the session token
    Token(super::TokenCommand),
}

/// Arguments for fetching questions
#[derive(Parser, Debug)]
pub struct QuestionsArgs {
    /// Number of questions per round (1-50)
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=50))]
    pub amount: u32,

    /// Category id filter (see the categories command; omit for any)
    #[arg(long)]
    pub category: Option<u32>,

    /// Difficulty filter: easy, medium, or hard
    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    /// Question format filter: multiple or boolean
    #[arg(long = "type")]
    pub question_type: Option<QuestionType>,

    /// Number of fetch rounds; later rounds wait out the rate-limit interval
    #[arg(long, default_value = "1", value_parser = parse_rounds)]
    pub rounds: u32,

    /// Acquire a session token first so rounds never repeat a question
    #[arg(long, default_value_t = false)]
    pub with_session: bool,
}

impl QuestionsArgs {
    /// Execute the questions command
    pub async fn execute(&self, cli: &Cli, shutdown: SharedShutdown) -> Result<(), CliError> {
        let client = super::client_from_cli(cli, shutdown);

        if self.with_session {
            let token = client.request_token().await?;
            info!("Using session token {token}");
        }

        let mut request = QuestionRequest::new(self.amount);
        if let Some(category) = self.category {
            request = request.with_category(category);
        }
        if let Some(difficulty) = self.difficulty {
            request = request.with_difficulty(difficulty);
        }
        if let Some(question_type) = self.question_type {
            request = request.with_question_type(question_type);
        }

        let mut fetched: Vec<Question> = Vec::new();
        for round in 1..=self.rounds {
            if self.rounds > 1 {
                info!("Fetching round {round}/{}", self.rounds);
            }
            let questions = client.fetch_questions(&request).await?;
            fetched.extend(questions);
        }

        match cli.output_format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&fetched)
                    .map_err(|e| CliError::OutputError(e.to_string()))?;
                println!("{json}");
            }
            OutputFormat::Human => {
                for (index, question) in fetched.iter().enumerate() {
                    print_question(index + 1, question);
                }
                println!("{} question(s) fetched", fetched.len());
            }
        }

        Ok(())
    }
}

fn print_question(number: usize, question: &Question) {
    println!(
        "{number}. [{}/{}] {}",
        question.difficulty,
        question.question_type,
        decode_html_entities(&question.category)
    );
    println!("   Q: {}", decode_html_entities(&question.question));
    println!("   A: {}", decode_html_entities(&question.correct_answer));

    let wrong: Vec<String> = question
        .incorrect_answers
        .iter()
        .map(|answer| decode_html_entities(answer))
        .collect();
    println!("   Wrong: {}", wrong.join(", "));
}
