//! Static page content for the interactive session

use colored::Colorize;
use promptcraft::Page;

const LEARN: &[(&str, &str)] = &[
    ("Objective", "Say what you want to achieve and why."),
    ("Structure", "Break the request into sections or steps."),
    ("Specificity", "Name the details, examples and constraints that matter."),
    ("Tone", "State the audience and the voice you expect."),
    ("Length", "Give a word range so the answer fits your use."),
];

const LEARN_EXAMPLE: &str = "Before: Tell me about recursion.

After:  Explain recursion to a first-year programming student. Start with a
        plain-language definition, then walk through a factorial example in
        Python, then cover base cases and stack overflow. Keep it under 500 words.";

const TECHNIQUES: &[(&str, &str)] = &[
    ("Zero-shot", "Ask directly, with no examples. Works for common, well-defined tasks."),
    ("Few-shot", "Show two or three input/output examples before the real input."),
    ("Chain of thought", "Ask the model to reason step by step before answering."),
    ("Role prompting", "Give the model a persona to set vocabulary and depth."),
    ("Output constraints", "Spell out format, length and audience."),
];

const ABOUT: &str = "PromptCraft helps you write better prompts for large language models.
Describe what you want in plain words; PromptCraft rewrites it into a structured
prompt aimed at the model you plan to use, sized to the length you need, and
weaving in the tags you care about.

The evaluator reviews an existing prompt for clarity, specificity, structure and
tone, and suggests concrete improvements.

Prompts are sent to a hosted language model. Nothing you type is stored.";

/// Print a page heading
pub fn heading(page: Page) {
    println!("\n{}", format!("━━ {} ━━", page).bold().cyan());
}

/// Render a page that has no interaction of its own
pub fn render_static(page: Page) {
    heading(page);
    match page {
        Page::Learn => {
            for (i, (title, text)) in LEARN.iter().enumerate() {
                println!("  {}. {} {}", i + 1, format!("{}:", title).bold(), text);
            }
            println!("\n{}", "Before and after".bold());
            println!("{}", LEARN_EXAMPLE.dimmed());
        }
        Page::Techniques => {
            for (title, text) in TECHNIQUES {
                println!("  {} {}", format!("{}:", title).bold(), text);
            }
        }
        Page::About => println!("{}", ABOUT),
        Page::Home | Page::Feedback => {}
    }
}
