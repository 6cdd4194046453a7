//! `policyduel` - compare LLM backends at generating Azure Policy JSON.
//!
//! `compare` sends one policy requirement to every configured backend,
//! scores each raw output with the deterministic engine, and prints a
//! side-by-side comparison matrix. `score` runs the engine offline on a
//! saved output.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use policyduel_core::evaluate;
use policyduel_runtime::{
    comparison::{Comparison, ComparisonRunner, Contender},
    providers::{CompletionConfig, GroqProvider, OpenAiProvider},
};

mod render;

#[derive(Parser)]
#[command(name = "policyduel", version, about = "Compare LLM-generated Azure Policy JSON")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a policy with every configured model and compare the results
    Compare {
        /// The policy requirement, e.g. "Deny creation of VMs with public IPs"
        requirement: String,

        /// OpenAI model to enter into the comparison
        #[arg(long, default_value = "gpt-4o-mini")]
        openai_model: String,

        /// Groq model to enter into the comparison
        #[arg(long, default_value = "llama-3.3-70b-versatile")]
        groq_model: String,

        /// Per-model request timeout (e.g. "30s", "2m")
        #[arg(long, default_value = "60s", value_parser = humantime::parse_duration)]
        timeout: Duration,

        /// Emit the full comparison as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Score a saved model output without calling any provider
    Score {
        /// File containing the raw model output, or "-" for stdin
        path: PathBuf,

        /// Label for the report's model column
        #[arg(long, default_value = "offline")]
        model: String,

        /// Measured response time in seconds, if known
        #[arg(long, default_value_t = 0.0)]
        elapsed: f64,

        /// Emit the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Compare {
            requirement,
            openai_model,
            groq_model,
            timeout,
            json,
        } => {
            let comparison = run_comparison(&requirement, &openai_model, &groq_model, timeout).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            } else {
                print_comparison(&comparison);
            }
        }
        Command::Score {
            path,
            model,
            elapsed,
            json,
        } => {
            let raw = read_input(&path)?;
            let report = evaluate(model, &raw, elapsed);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render::comparison_table(std::slice::from_ref(&report)));
            }
        }
    }

    Ok(())
}

async fn run_comparison(
    requirement: &str,
    openai_model: &str,
    groq_model: &str,
    timeout: Duration,
) -> Result<Comparison> {
    let openai = OpenAiProvider::from_env().context("OpenAI provider not configured")?;
    let groq = GroqProvider::from_env().context("Groq provider not configured")?;

    let contenders = vec![
        Contender::new(
            openai_model,
            Arc::new(openai),
            CompletionConfig::for_model(openai_model).with_timeout(timeout),
        ),
        Contender::new(
            groq_model,
            Arc::new(groq),
            CompletionConfig::for_model(groq_model).with_timeout(timeout),
        ),
    ];

    Ok(ComparisonRunner::new().run(requirement, &contenders).await)
}

fn print_comparison(comparison: &Comparison) {
    for outcome in &comparison.outcomes {
        println!("=== {} ===", outcome.report.model);
        match (&outcome.document, &outcome.error) {
            (Some(document), _) => match serde_json::to_string_pretty(document) {
                Ok(pretty) => println!("{pretty}"),
                Err(_) => println!("{document}"),
            },
            (None, Some(error)) => println!("(call failed: {error})"),
            (None, None) => println!("(no parseable JSON in output)"),
        }
        println!();
    }

    let reports: Vec<_> = comparison
        .outcomes
        .iter()
        .map(|outcome| outcome.report.clone())
        .collect();
    print!("{}", render::comparison_table(&reports));
}

fn read_input(path: &PathBuf) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))
    }
}
