//! Interactive session
//!
//! A terminal rendition of the page-based app: a sidebar menu to switch
//! pages, a Home page that keeps the draft prompt, tags and last outputs,
//! and a Feedback form. All state lives in one `SessionState` owned here.

use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use promptcraft::{
    DomainError, FeedbackRelay, FeedbackService, GenerationService, Language, LengthTier, Page,
    PromptService, SessionState,
};

use crate::pages;

const TARGET_MODELS: &[&str] = &["ChatGPT", "Gemini", "Claude", "Llama"];

/// What the loop does after a page handler returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Next {
    /// Show the sidebar
    Sidebar,
    /// The page changed programmatically; render it directly
    Render,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HomeAction {
    EditPrompt,
    AddTags,
    ClearTags,
    TargetModel,
    Length,
    Refine,
    Evaluate,
    Navigate,
    Quit,
}

impl HomeAction {
    const ALL: [HomeAction; 9] = [
        HomeAction::EditPrompt,
        HomeAction::AddTags,
        HomeAction::ClearTags,
        HomeAction::TargetModel,
        HomeAction::Length,
        HomeAction::Refine,
        HomeAction::Evaluate,
        HomeAction::Navigate,
        HomeAction::Quit,
    ];

    fn label(self, state: &SessionState) -> String {
        match self {
            HomeAction::EditPrompt => "Edit prompt".to_string(),
            HomeAction::AddTags => "Add tags".to_string(),
            HomeAction::ClearTags => "Clear tags".to_string(),
            HomeAction::TargetModel => format!("Target model: {}", state.target_model),
            HomeAction::Length => format!("Length: {}", state.length),
            HomeAction::Refine => "Refine prompt".to_string(),
            HomeAction::Evaluate => "Evaluate prompt".to_string(),
            HomeAction::Navigate => "Go to another page".to_string(),
            HomeAction::Quit => "Quit".to_string(),
        }
    }
}

/// Services one session talks to
pub struct Session<'a> {
    prompts: &'a PromptService<dyn GenerationService>,
    feedback: Option<&'a FeedbackService<dyn FeedbackRelay>>,
}

impl<'a> Session<'a> {
    pub fn new(
        prompts: &'a PromptService<dyn GenerationService>,
        feedback: Option<&'a FeedbackService<dyn FeedbackRelay>>,
    ) -> Self {
        Self { prompts, feedback }
    }

    /// Run until the user quits; the state is dropped with the session
    pub async fn run(&self, mut state: SessionState) -> Result<()> {
        println!(
            "{} {}",
            "PromptCraft".bold().cyan(),
            format!("(model: {})", self.prompts.model_id()).dimmed()
        );

        loop {
            let next = match state.page {
                Page::Home => self.home(&mut state).await?,
                Page::Feedback => self.feedback_page().await?,
                page => {
                    pages::render_static(page);
                    Next::Sidebar
                }
            };

            if !advance(&mut state, next, sidebar)? {
                break;
            }
        }

        println!("{}", "Bye!".dimmed());
        Ok(())
    }

    async fn home(&self, state: &mut SessionState) -> Result<Next> {
        loop {
            pages::heading(Page::Home);
            print_summary(state);

            let labels: Vec<String> = HomeAction::ALL.iter().map(|a| a.label(state)).collect();
            let choice = Select::new()
                .with_prompt("What next?")
                .items(&labels)
                .default(0)
                .interact()
                .context("Failed to read selection")?;

            match HomeAction::ALL[choice] {
                HomeAction::EditPrompt => {
                    state.prompt = Input::new()
                        .with_prompt("Prompt")
                        .with_initial_text(state.prompt.clone())
                        .allow_empty(true)
                        .interact_text()
                        .context("Failed to read input")?;
                }
                HomeAction::AddTags => {
                    let input: String = Input::new()
                        .with_prompt("Tags (comma-separated)")
                        .allow_empty(true)
                        .interact_text()
                        .context("Failed to read input")?;
                    let added = state.add_tags(&input);
                    println!("{} {} new tag(s)", "✓".green(), added);
                }
                HomeAction::ClearTags => {
                    state.clear_tags();
                    println!("{} Tags cleared", "✓".green());
                }
                HomeAction::TargetModel => {
                    state.target_model = pick_target_model(&state.target_model)?;
                }
                HomeAction::Length => {
                    let labels: Vec<String> = LengthTier::ALL
                        .iter()
                        .map(|t| format!("{} ({})", t, t.word_range()))
                        .collect();
                    let current = LengthTier::ALL
                        .iter()
                        .position(|t| *t == state.length)
                        .unwrap_or(1);
                    let choice = Select::new()
                        .with_prompt("Length")
                        .items(&labels)
                        .default(current)
                        .interact()
                        .context("Failed to read selection")?;
                    state.length = LengthTier::ALL[choice];
                }
                HomeAction::Refine => self.refine(state).await,
                HomeAction::Evaluate => {
                    if let Some(next) = self.evaluate(state).await? {
                        return Ok(next);
                    }
                }
                HomeAction::Navigate => return Ok(Next::Sidebar),
                HomeAction::Quit => return Ok(Next::Quit),
            }
        }
    }

    async fn refine(&self, state: &mut SessionState) {
        eprintln!("{}", format!("Refining with {}...", self.prompts.model_id()).dimmed());

        match self.prompts.refine(state.to_request()).await {
            Ok(refinement) => {
                state.record_refinement(&refinement);
                println!(
                    "\n{} {}\n",
                    "Refined prompt for".bold(),
                    refinement.target_model.cyan()
                );
                println!("{}", refinement.refined_output());
            }
            Err(e) => print_error(&e),
        }
    }

    /// Some when the user jumped to the Learn page
    async fn evaluate(&self, state: &mut SessionState) -> Result<Option<Next>> {
        eprintln!("{}", format!("Evaluating with {}...", self.prompts.model_id()).dimmed());

        match self.prompts.evaluate(&state.prompt).await {
            Ok(evaluation) => {
                state.record_evaluation(&evaluation);
                println!("\n{}\n", "Evaluation".bold());
                println!("{}", evaluation.text());

                let learn = Confirm::new()
                    .with_prompt("Open the Learn page for tips?")
                    .default(false)
                    .interact()
                    .context("Failed to read confirmation")?;
                Ok(after_evaluation(state, learn))
            }
            Err(e) => {
                print_error(&e);
                Ok(None)
            }
        }
    }

    async fn feedback_page(&self) -> Result<Next> {
        pages::heading(Page::Feedback);

        let Some(service) = self.feedback else {
            println!(
                "{}",
                "Feedback is not configured. Set FEEDBACK_ENDPOINT to enable it.".yellow()
            );
            return Ok(Next::Sidebar);
        };

        let feedback: String = Input::new()
            .with_prompt("Your feedback")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?;
        let email: String = Input::new()
            .with_prompt("Email (optional)")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?;
        let language = pick_language()?;

        match service.submit(&feedback, Some(email), language).await {
            Ok(()) => println!("{} Thank you for your feedback!", "✓".green()),
            Err(e) => print_error(&e),
        }

        Ok(Next::Sidebar)
    }
}

/// Apply a page handler's outcome; false ends the session.
/// `pick` is asked only when the sidebar is shown.
fn advance<F>(state: &mut SessionState, next: Next, pick: F) -> Result<bool>
where
    F: FnOnce(&SessionState) -> Result<Option<Page>>,
{
    match next {
        Next::Render => Ok(true),
        Next::Quit => Ok(false),
        Next::Sidebar => match pick(state)? {
            Some(page) => {
                state.navigate(page);
                Ok(true)
            }
            None => Ok(false),
        },
    }
}

/// Render Learn directly when the user asked for it after an evaluation
fn after_evaluation(state: &mut SessionState, open_learn: bool) -> Option<Next> {
    (open_learn && state.open_learn_from_evaluation()).then_some(Next::Render)
}

/// Sidebar navigation; None means quit
fn sidebar(state: &SessionState) -> Result<Option<Page>> {
    let mut items: Vec<String> = Page::ALL.iter().map(|p| p.to_string()).collect();
    items.push("Quit".to_string());

    let current = Page::ALL.iter().position(|p| *p == state.page).unwrap_or(0);
    let choice = Select::new()
        .with_prompt("Navigate")
        .items(&items)
        .default(current)
        .interact()
        .context("Failed to read selection")?;

    Ok(Page::ALL.get(choice).copied())
}

fn pick_target_model(current: &str) -> Result<String> {
    let mut items: Vec<&str> = TARGET_MODELS.to_vec();
    items.push("Other...");

    let default = TARGET_MODELS
        .iter()
        .position(|m| *m == current)
        .unwrap_or(items.len() - 1);
    let choice = Select::new()
        .with_prompt("Target model")
        .items(&items)
        .default(default)
        .interact()
        .context("Failed to read selection")?;

    match TARGET_MODELS.get(choice) {
        Some(model) => Ok(model.to_string()),
        None => Input::new()
            .with_prompt("Model name")
            .with_initial_text(current.to_string())
            .interact_text()
            .context("Failed to read input"),
    }
}

fn pick_language() -> Result<Language> {
    let items: Vec<String> = Language::ALL.iter().map(|l| l.to_string()).collect();
    let choice = Select::new()
        .with_prompt("Language")
        .items(&items)
        .default(0)
        .interact()
        .context("Failed to read selection")?;
    Ok(Language::ALL[choice])
}

fn print_summary(state: &SessionState) {
    let prompt = if state.prompt.trim().is_empty() {
        "(empty)".dimmed().to_string()
    } else {
        crate::truncate_string(&state.prompt, 70)
    };
    let tags = if state.tags().is_empty() {
        "None".to_string()
    } else {
        state.tags().join(", ")
    };

    println!("  {} {}", "Prompt:".bold(), prompt);
    println!("  {} {}", "Tags:".bold(), tags.cyan());
    if let Some(output) = &state.last_output {
        println!("  {} {}", "Last output:".bold(), crate::truncate_string(output, 70).dimmed());
    }
    if let Some(evaluation) = &state.last_evaluation {
        println!(
            "  {} {}",
            "Last evaluation:".bold(),
            crate::truncate_string(evaluation, 70).dimmed()
        );
    }
}

pub fn print_error(err: &DomainError) {
    match err {
        DomainError::Validation(msg) => println!("{} {}", "!".yellow(), msg.yellow()),
        DomainError::ExternalService(msg) => println!("{} {}", "✗".red(), msg.red()),
        DomainError::Relay(msg) => println!("{} {}", "✗".red(), msg.red()),
    }
}
