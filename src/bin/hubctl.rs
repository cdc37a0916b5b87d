//! Command-line front end for htaccess-hub.
//!
//! Talks to a running service over HTTP: checks domains through its
//! `/status` endpoint and manages the rule library through `/rules`.
//!
//! # Usage
//!
//! ```bash
//! # Status of the four http/https × bare/www variants
//! hubctl check example.com
//!
//! # Rule library
//! hubctl rules list --search https
//! hubctl rules add --title "Force HTTPS" --code-file force-https.conf
//! hubctl rules edit 3 --title "Force HTTPS (301)"
//! hubctl rules delete 3 -y
//! ```
//!
//! # Environment Variables
//!
//! - `HUB_URL`: service location (default `http://127.0.0.1:3000`)
//! - `ADMIN_TOKEN`: sent as a bearer token on rule requests

use htaccess_hub::application::services::{DomainCheck, StatusService};
use htaccess_hub::client::{
    Console, DEFAULT_HUB_URL, HttpRuleTransport, StatusBoard, StatusClient,
};
use htaccess_hub::domain::classify::BadgeKind;
use htaccess_hub::domain::entities::Rule;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// CLI for the htaccess-hub service.
#[derive(Parser)]
#[command(name = "hubctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Service base URL
    #[arg(long, env = "HUB_URL", default_value = DEFAULT_HUB_URL, global = true)]
    hub_url: String,

    /// Bearer token for rule mutations
    #[arg(long, env = "ADMIN_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the status of every variant of a domain
    Check {
        /// Domain or URL, e.g. `example.com` or `https://www.example.com/path`
        domain: String,
    },

    /// Manage the rule library
    Rules {
        #[command(subcommand)]
        action: RuleAction,
    },
}

#[derive(Subcommand)]
enum RuleAction {
    /// List rules
    List {
        /// Only rules whose title or description contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Print the code of every rule
        #[arg(short, long)]
        full: bool,
    },

    /// Add a rule
    Add {
        #[command(flatten)]
        fields: RuleFields,
    },

    /// Replace a rule's title, code and description
    Edit {
        id: i64,

        #[command(flatten)]
        fields: RuleFields,
    },

    /// Delete a rule
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(clap::Args)]
struct RuleFields {
    #[arg(short, long)]
    title: Option<String>,

    /// Snippet body
    #[arg(short, long, conflicts_with = "code_file")]
    code: Option<String>,

    /// Read the snippet body from a file
    #[arg(long)]
    code_file: Option<PathBuf>,

    #[arg(short, long)]
    description: Option<String>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", "✗".red().bold(), format!("{e:#}").red());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Check { domain } => check(&cli.hub_url, &domain).await,
        Commands::Rules { action } => {
            let transport = HttpRuleTransport::new(&cli.hub_url, cli.token)?;
            let mut console = Console::new(Arc::new(transport));
            handle_rule_action(action, &mut console).await
        }
    }
}

/// Probes the four variants through the service and prints one line each.
async fn check(hub_url: &str, domain: &str) -> Result<()> {
    let service = StatusService::new(Arc::new(StatusClient::new(hub_url)?));
    let mut board = StatusBoard::new();

    let token = board.begin();
    let result = service.check_domain(domain).await;
    board.complete(token, result);

    if let Some(check) = board.current() {
        print_check(check);
    }
    Ok(())
}

fn print_check(check: &DomainCheck) {
    println!("{} {}", "🔎 Status of".bright_blue().bold(), check.host.cyan());
    println!();

    for row in &check.rows {
        let label = format!(" {} ", row.classification.primary_label);
        let badge = match row.classification.badge_kind {
            BadgeKind::Ok => label.black().on_green(),
            BadgeKind::Redirect => label.black().on_yellow(),
            BadgeKind::Error => label.white().on_red(),
        };

        let mut line = format!("  {:<40} {}", row.result.url, badge);
        if let Some(secondary) = &row.classification.secondary_badge {
            line.push_str(&format!(
                " → {} {}",
                secondary.tooltip.bright_black(),
                format!(" {} ", secondary.label).black().on_green()
            ));
        }
        println!("{line}");
    }
    println!();
}

async fn handle_rule_action(
    action: RuleAction,
    console: &mut Console<HttpRuleTransport>,
) -> Result<()> {
    match action {
        RuleAction::List { search, full } => list_rules(console, search, full).await,
        RuleAction::Add { fields } => add_rule(console, fields).await,
        RuleAction::Edit { id, fields } => edit_rule(console, id, fields).await,
        RuleAction::Delete { id, yes } => delete_rule(console, id, yes).await,
    }
}

async fn list_rules(
    console: &mut Console<HttpRuleTransport>,
    search: Option<String>,
    full: bool,
) -> Result<()> {
    println!("{}", "📋 Rules".bright_blue().bold());
    println!();

    console.load_rules().await;
    if !console.store_available() {
        println!("{}", "  Rule store unavailable".yellow());
        return Ok(());
    }

    let rules = console.filter(search.as_deref().unwrap_or(""));
    if rules.is_empty() {
        println!("{}", "  No rules found.".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<40} {}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Description".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for rule in &rules {
        print_rule(rule, full);
    }

    println!();
    println!("  Total: {}", rules.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

fn print_rule(rule: &Rule, full: bool) {
    println!(
        "  {:<5} {:<40} {}",
        rule.id.to_string().bright_black(),
        rule.title.cyan(),
        rule.description.as_deref().unwrap_or("").bright_black()
    );

    if full {
        for line in rule.code.lines() {
            println!("        {}", line.bright_yellow());
        }
        println!();
    }
}

async fn add_rule(console: &mut Console<HttpRuleTransport>, fields: RuleFields) -> Result<()> {
    println!("{}", "➕ Add Rule".bright_blue().bold());
    println!();

    let (title, code, description) = resolve_fields(fields, None)?;

    let id = console
        .create_rule(&title, &code, description.as_deref())
        .await
        .context("Failed to create rule")?;

    println!(
        "{} {}",
        "✅ Rule created with id".green().bold(),
        id.to_string().bright_white().bold()
    );
    Ok(())
}

async fn edit_rule(
    console: &mut Console<HttpRuleTransport>,
    id: i64,
    fields: RuleFields,
) -> Result<()> {
    println!("{}", "✏️  Edit Rule".bright_blue().bold());
    println!();

    console.load_rules().await;
    let existing = console.rules().iter().find(|r| r.id == id).cloned();
    if existing.is_none() && console.store_available() {
        println!("{}", format!("⚠️  Rule {id} is not in the list").yellow());
    }

    let (title, code, description) = resolve_fields(fields, existing.as_ref())?;

    console
        .update_rule(id, &title, &code, description.as_deref())
        .await
        .context("Failed to update rule")?;

    println!("{}", "✅ Rule updated".green().bold());
    Ok(())
}

async fn delete_rule(console: &mut Console<HttpRuleTransport>, id: i64, yes: bool) -> Result<()> {
    println!("{}", "🗑  Delete Rule".bright_blue().bold());
    println!();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Are you sure you want to delete rule {id}?"))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    console
        .delete_rule(id)
        .await
        .context("Failed to delete rule")?;

    println!("{}", "✅ Rule deleted".green().bold());
    Ok(())
}

/// Fills missing fields interactively, offering the current values of
/// `existing` as defaults.
fn resolve_fields(
    fields: RuleFields,
    existing: Option<&Rule>,
) -> Result<(String, String, Option<String>)> {
    let title = match fields.title {
        Some(t) => t,
        None => {
            let mut input = Input::<String>::new().with_prompt("Title");
            if let Some(rule) = existing {
                input = input.with_initial_text(rule.title.clone());
            }
            input.interact_text()?
        }
    };

    let code = match (fields.code, fields.code_file) {
        (Some(c), _) => c,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => match existing {
            Some(rule) => rule.code.clone(),
            None => Input::<String>::new()
                .with_prompt("Code")
                .interact_text()?,
        },
    };

    let description = match fields.description {
        Some(d) => Some(d),
        None => {
            let mut input = Input::<String>::new()
                .with_prompt("Description (optional)")
                .allow_empty(true);
            if let Some(d) = existing.and_then(|r| r.description.clone()) {
                input = input.with_initial_text(d);
            }
            Some(input.interact_text()?)
        }
    };

    Ok((title, code, description))
}
