//! PromptCraft CLI - Prompt refinement in the terminal
//!
//! Interactive session by default, plus one-shot commands for scripting.

mod config;
mod pages;
mod session;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Password;
use promptcraft::{
    AppConfig, FeedbackRelay, FeedbackService, GeminiClient, GenerationService, HttpFeedbackRelay,
    Language, LengthTier, PromptRequest, PromptService, SessionState,
};
use std::fs;
use std::sync::Arc;

use config::Config;
use session::Session;

#[derive(Parser)]
#[command(name = "promptcraft")]
#[command(about = "PromptCraft CLI - Refine and evaluate prompts", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    Session,

    /// Refine a prompt for a target model
    Refine {
        /// Prompt text (or use -f for file)
        prompt: Option<String>,
        /// Read prompt from file
        #[arg(short, long)]
        file: Option<String>,
        /// Length: short, medium, long
        #[arg(short, long, default_value = "medium")]
        length: String,
        /// Target model the refined prompt is written for
        #[arg(short, long)]
        model: Option<String>,
        /// Tags to weave in (comma-separated, e.g., "technical,concise")
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
        /// Show metadata on stderr
        #[arg(long)]
        verbose: bool,
    },

    /// Evaluate a prompt and get suggestions
    Evaluate {
        /// Prompt text (or use -f for file)
        prompt: Option<String>,
        /// Read prompt from file
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Send feedback
    Feedback {
        /// Feedback text
        text: String,
        /// Contact email (optional)
        #[arg(short, long)]
        email: Option<String>,
        /// Language: English, Spanish, French, Hindi
        #[arg(short, long, default_value = "English")]
        language: String,
    },

    /// Store the Gemini API key
    Login {
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => cmd_session().await,
        Commands::Refine { prompt, file, length, model, tags, verbose } => {
            cmd_refine(prompt, file, length, model, tags, verbose).await
        }
        Commands::Evaluate { prompt, file } => cmd_evaluate(prompt, file).await,
        Commands::Feedback { text, email, language } => cmd_feedback(text, email, language).await,
        Commands::Login { key } => cmd_login(key),
        Commands::Config => cmd_config(),
    }
}

// ============================================
// Service Wiring
// ============================================

fn load_runtime() -> Result<(Config, AppConfig)> {
    let config = Config::load()?;
    let app_config = config
        .resolve()
        .context("Not configured. Run 'promptcraft login' or set GEMINI_API_KEY.")?;
    Ok((config, app_config))
}

fn prompt_service(app_config: &AppConfig) -> PromptService<dyn GenerationService> {
    let generator: Arc<dyn GenerationService> =
        Arc::new(GeminiClient::from_config(&app_config.generation));
    PromptService::new(generator)
}

fn feedback_service(app_config: &AppConfig) -> Option<FeedbackService<dyn FeedbackRelay>> {
    app_config.feedback.as_ref().map(|feedback| {
        let relay: Arc<dyn FeedbackRelay> = Arc::new(HttpFeedbackRelay::from_config(feedback));
        FeedbackService::new(relay)
    })
}

/// Prompt text from the argument or a file, never both
fn read_prompt(prompt: Option<String>, file: Option<String>) -> Result<String> {
    match (prompt, file) {
        (Some(p), None) => Ok(p),
        (None, Some(f)) => {
            fs::read_to_string(&f).with_context(|| format!("Failed to read file: {}", f))
        }
        (Some(_), Some(_)) => bail!("Cannot specify both a prompt and --file"),
        (None, None) => bail!("Provide a prompt or --file"),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_session() -> Result<()> {
    let (config, app_config) = load_runtime()?;

    let prompts = prompt_service(&app_config);
    let feedback = feedback_service(&app_config);

    let mut state = SessionState::new();
    state.target_model = config.target_model();

    Session::new(&prompts, feedback.as_ref()).run(state).await
}

async fn cmd_refine(
    prompt: Option<String>,
    file: Option<String>,
    length: String,
    model: Option<String>,
    tags: Vec<String>,
    verbose: bool,
) -> Result<()> {
    let (config, app_config) = load_runtime()?;
    let text = read_prompt(prompt, file)?;

    let request = PromptRequest::new(text)
        .with_length(LengthTier::from_label(&length))
        .with_target_model(model.unwrap_or_else(|| config.target_model()))
        .with_tags(tags);

    let service = prompt_service(&app_config);
    let refinement = service.refine(request).await?;

    if verbose {
        // Metadata to stderr so stdout is clean for piping
        eprintln!(
            "{} {} {}",
            "Refined for".dimmed(),
            refinement.target_model.cyan(),
            format!("via {}", service.model_id()).dimmed()
        );
        eprintln!("{}", "---".dimmed());
    }

    println!("{}", refinement.refined_output());

    Ok(())
}

async fn cmd_evaluate(prompt: Option<String>, file: Option<String>) -> Result<()> {
    let (_, app_config) = load_runtime()?;
    let text = read_prompt(prompt, file)?;

    let evaluation = prompt_service(&app_config).evaluate(&text).await?;

    println!("{}", evaluation.text());

    Ok(())
}

async fn cmd_feedback(text: String, email: Option<String>, language: String) -> Result<()> {
    let (_, app_config) = load_runtime()?;
    let language: Language = language.parse().map_err(anyhow::Error::msg)?;

    let service = feedback_service(&app_config)
        .context("Feedback is not configured. Set FEEDBACK_ENDPOINT first.")?;

    match service.submit(&text, email, language).await {
        Ok(()) => {
            println!("{} Thank you for your feedback!", "✓".green());
            Ok(())
        }
        Err(e) => {
            session::print_error(&e);
            bail!("Feedback was not sent");
        }
    }
}

fn cmd_login(key: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("Gemini API Key")
            .interact()
            .context("Failed to read API key")?,
    };

    if api_key.trim().is_empty() {
        bail!("API key cannot be empty");
    }

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("{} API key saved to {:?}", "✓".green(), Config::config_path()?);

    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;
    let resolved = config.resolve();

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    match &resolved {
        Ok(app_config) => {
            println!("  API Key: {}", "Set".green());
            println!("  Model: {}", app_config.generation.model.cyan());
            println!(
                "  Feedback: {}",
                app_config
                    .feedback
                    .as_ref()
                    .map(|f| f.endpoint.as_str())
                    .unwrap_or("Disabled")
            );
        }
        Err(e) => {
            println!("  API Key: {} {}", "Not set".red(), format!("({})", e).dimmed());
        }
    }
    println!("  Default Target: {}", config.target_model().cyan());

    Ok(())
}

/// Truncate string safely for UTF-8 (by char count, not bytes)
pub(crate) fn truncate_string(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        format!("{}...", chars.into_iter().collect::<String>())
    } else {
        s.to_string()
    }
}
