//! Readiness Compass terminal runner.
//!
//! Drives the full assessment journey on stdin/stdout: intro, the
//! dimension-by-dimension questionnaire, the scored result, the contact
//! form that unlocks the action list, and the statistics dashboard.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use readiness_compass::adapters::{ChannelKind, JsonFileStore, WebhookChannel, WebhookNotifier};
use readiness_compass::application::{
    CompleteAssessmentCommand, CompleteAssessmentHandler, GetDashboardHandler,
    SubmitContactCommand, SubmitContactHandler,
};
use readiness_compass::config::{AppConfig, NotifyConfig};
use readiness_compass::domain::assessment::{AssessmentFlow, NextOutcome};
use readiness_compass::domain::catalog::{Catalog, QuestionId, CATALOG, CATEGORIES};
use readiness_compass::domain::lead::ContactDetails;
use readiness_compass::domain::scoring::ScoredResult;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let store = Arc::new(JsonFileStore::new(&config.storage.data_dir));
    let notifier = Arc::new(WebhookNotifier::new(
        build_channels(&config.notify),
        Duration::from_secs(config.notify.timeout_secs),
    ));

    let catalog = Arc::new(CATALOG.clone());
    let categories = Arc::new(CATEGORIES.clone());

    let complete = CompleteAssessmentHandler::new(store.clone(), catalog.clone(), categories.clone());
    let submit = SubmitContactHandler::new(store.clone(), notifier, config.notify.source.clone());
    let dashboard = GetDashboardHandler::new(store, categories);

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    loop {
        println!();
        println!("=== Export Readiness Self-Assessment ===");
        println!(
            "{} dimensions, {} questions, maximum score {}",
            catalog.dimension_count(),
            catalog.total_question_count(),
            catalog.max_possible_score()
        );
        println!("[enter] start   [d] dashboard   [q] quit");

        let line = match prompt(&mut input, "> ")? {
            Some(line) => line,
            None => break,
        };
        match line.as_str() {
            "" => {
                if let Some(scored) = run_assessment(&catalog, &complete, &mut input).await? {
                    run_contact_form(&scored, &submit, &mut input).await?;
                    render_dashboard(&dashboard).await?;
                }
            }
            "d" => render_dashboard(&dashboard).await?,
            "q" => break,
            other => println!("Unknown command '{}'", other),
        }
    }

    Ok(())
}

fn build_channels(notify: &NotifyConfig) -> Vec<WebhookChannel> {
    let mut channels = Vec::new();
    if let Some(url) = &notify.record_webhook_url {
        channels.push(WebhookChannel::new("record_sync", url.clone(), ChannelKind::RecordSync));
    }
    if let Some(url) = &notify.email_webhook_url {
        channels.push(WebhookChannel::new("email_alert", url.clone(), ChannelKind::EmailAlert));
    }
    channels
}

async fn run_assessment(
    catalog: &Arc<Catalog>,
    complete: &CompleteAssessmentHandler,
    input: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Option<ScoredResult>, Box<dyn Error>> {
    let mut flow = AssessmentFlow::new(catalog.clone());
    flow.start()?;

    loop {
        render_dimension(&flow)?;
        let line = match prompt(input, "answer as '<question> <option>', [n]ext, [p]revious, [q]uit > ")? {
            Some(line) => line,
            None => return Ok(None),
        };

        match line.as_str() {
            "q" => return Ok(None),
            "n" => match flow.next()? {
                NextOutcome::Blocked => {
                    println!("Answer every question in this dimension first.");
                }
                NextOutcome::Advanced { .. } => {}
                NextOutcome::Completed => break,
            },
            "p" => {
                if !flow.previous()? {
                    println!("Already at the first dimension.");
                }
            }
            "" => {}
            answer => match parse_selection(answer) {
                Some((question, option_index)) => {
                    if let Err(e) = flow.select(QuestionId::new(question), option_index) {
                        println!("{}", e);
                    }
                }
                None => println!("Could not read '{}'; use e.g. '3 2'.", answer),
            },
        }
    }

    let answers = flow.into_answers()?;
    let result = complete.handle(CompleteAssessmentCommand { answers }).await?;
    render_result(&result.scored);
    Ok(Some(result.scored))
}

fn render_dimension(flow: &AssessmentFlow) -> Result<(), Box<dyn Error>> {
    let dimension = flow.current_dimension()?;
    let progress = flow.progress();

    println!();
    println!("--- {} ---", dimension.title);
    println!("{}", dimension.description);
    println!(
        "Progress: {}/{} questions ({})",
        progress.answered,
        progress.total,
        progress.percent()
    );

    for question in &dimension.questions {
        let marker = if question.is_multiple() { " (select all that apply)" } else { "" };
        println!();
        println!("{}. {}{}", question.id, question.text, marker);
        for (index, option) in question.options.iter().enumerate() {
            let selected = flow
                .answers()
                .selected(question.id)
                .map(|s| s.contains(&index))
                .unwrap_or(false);
            println!("  [{}] {}. {}", if selected { "x" } else { " " }, index + 1, option.label);
        }
    }
    Ok(())
}

fn parse_selection(line: &str) -> Option<(u32, usize)> {
    let mut parts = line.split_whitespace();
    let question: u32 = parts.next()?.parse().ok()?;
    let option: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() || option == 0 {
        return None;
    }
    Some((question, option - 1))
}

fn render_result(scored: &ScoredResult) {
    let category = &scored.category;
    println!();
    println!("=== Your Readiness Score: {} ===", scored.total);
    println!("{}  {}", category.stars, category.title);
    println!("Profile: {}", category.priority_label);
    println!("{}", category.description);
    println!("Outlook: \"{}\"", category.outcome_statement);
    println!();
    println!("Per dimension:");
    for (dimension, points) in &scored.per_dimension {
        println!("  {:>6}  {}", points.to_string(), dimension);
    }
}

async fn run_contact_form(
    scored: &ScoredResult,
    submit: &SubmitContactHandler,
    input: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<(), Box<dyn Error>> {
    println!();
    println!("Unlock your tailored action list by leaving contact details.");
    let name = match prompt(input, "Name (blank to skip): ")? {
        Some(name) if !name.is_empty() => name,
        _ => {
            println!("Action list stays locked. Restart any time.");
            return Ok(());
        }
    };
    let phone = prompt(input, "Phone / WeChat: ")?.unwrap_or_default();
    let company = prompt(input, "Company (optional): ")?
        .filter(|c| !c.is_empty());

    let contact = match ContactDetails::new(name, phone, company) {
        Ok(contact) => contact,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };

    let result = submit
        .handle(SubmitContactCommand {
            contact,
            scored: scored.clone(),
        })
        .await?;

    for report in &result.reports {
        let status = if report.is_delivered() { "ok" } else { "failed" };
        println!("  channel {:<12} {}", report.channel, status);
    }

    println!();
    println!("=== Action Items (unlocked) ===");
    for (index, item) in result.advice.iter().enumerate() {
        println!("  {}. {}", index + 1, item);
    }
    Ok(())
}

async fn render_dashboard(dashboard: &GetDashboardHandler) -> Result<(), Box<dyn Error>> {
    let overview = dashboard.handle().await?;

    println!();
    println!("=== Readiness Dashboard ===");
    println!("Assessments recorded: {}", overview.total_assessments);
    println!("Average score: {}", overview.average_score);
    println!("Distribution:");
    for slice in &overview.distribution {
        println!("  {:<24} {:>4}  ({})", slice.title, slice.count, slice.share);
    }
    Ok(())
}

/// Reads one trimmed line; `None` means stdin is exhausted.
fn prompt(
    input: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;
    match input.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}
