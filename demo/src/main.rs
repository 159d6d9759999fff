//! COVENANT audit gate demo CLI.
//!
//! Wires the stock keyword reviewer and the logging sinks into an audit gate
//! and drives a planner agent through it.
//!
//! Usage:
//!   cargo run -p demo -- run
//!   cargo run -p demo -- --audit run
//!   cargo run -p demo -- review "execute risky transaction with harm"
//!   cargo run -p demo -- mandate A_NON_HARM
//!   cargo run -p demo -- principles

mod planner;

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use covenant_audit::{FanoutSink, InMemoryGateSink, TracingSink};
use covenant_contracts::{
    error::{CovenantError, CovenantResult},
    intent::{Intent, ReviewVerdict},
};
use covenant_core::{traits::IntentReviewer, AuditGate};
use covenant_policy::{
    catalog::{GENESIS_DEFINITION, GENESIS_MANDATE},
    KeywordReviewer, PolicyCatalog,
};

use crate::planner::PlannerAgent;

// ── CLI definition ────────────────────────────────────────────────────────────

/// COVENANT: intent review before every agent action.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "COVENANT audit gate demo",
    long_about = "Runs a planner agent through the COVENANT audit gate, showing\n\
                  approved and blocked intents, principle lookups, and the\n\
                  hash-chained gate trail."
)]
struct Cli {
    /// Load keyword checks from this TOML file instead of the stock ones.
    #[arg(long, global = true, value_name = "PATH")]
    policy: Option<PathBuf>,

    /// Print the hash-chained gate trail after `run`.
    #[arg(long, global = true)]
    audit: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the planner through an approved task and a harmful one.
    Run,
    /// Review a single intent without executing anything.
    Review {
        /// Intent text. Omit to review the `unknown_intent` placeholder.
        intent: Option<String>,
    },
    /// Print the mandate for a principle (e.g. A_NON_HARM).
    Mandate { principle: String },
    /// List every principle in the catalog.
    Principles,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug to also see reviewer and gate internals.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Run => run(cli.policy.as_deref(), cli.audit),
        Command::Review { intent } => review(cli.policy.as_deref(), intent),
        Command::Mandate { principle } => mandate(&principle),
        Command::Principles => {
            principles();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn load_reviewer(policy: Option<&Path>) -> CovenantResult<KeywordReviewer> {
    match policy {
        Some(path) => KeywordReviewer::from_file(path),
        None => Ok(KeywordReviewer::default()),
    }
}

fn run(policy: Option<&Path>, audit: bool) -> CovenantResult<()> {
    print_banner();

    let trail = Arc::new(InMemoryGateSink::new());
    let sink = FanoutSink::default()
        .with(Arc::new(TracingSink))
        .with(trail.clone());
    let gate = AuditGate::new(Arc::new(load_reviewer(policy)?), Arc::new(sink));

    let agent = PlannerAgent::new("Planner-Alpha", gate);
    let tasks = [
        ("optimize_database_query", "Re-indexing for Zero Waste performance."),
        ("execute_risky_economic_transaction_with_harm", "High risk speculative trade."),
    ];

    for (intent, payload) in tasks {
        match agent.execute_task(intent, payload) {
            Ok(_) => {}
            Err(CovenantError::PolicyViolation(violation)) => {
                warn!(intent = %violation.intent, "system intervention");
                println!("  INTERVENTION: {violation}");
                // The first violation ends the run; later tasks are not attempted.
                break;
            }
            Err(other) => return Err(other),
        }
    }

    if audit {
        print_trail(&trail);
    }
    Ok(())
}

fn review(policy: Option<&Path>, intent: Option<String>) -> CovenantResult<()> {
    let intent = Intent::from(intent);
    match load_reviewer(policy)?.review(&intent) {
        ReviewVerdict::Accepted => println!("accepted: '{intent}'"),
        ReviewVerdict::Rejected { reason, .. } => println!("rejected: {reason}"),
    }
    Ok(())
}

fn mandate(principle: &str) -> CovenantResult<()> {
    println!("{}", PolicyCatalog::mandate_for(principle)?);
    Ok(())
}

fn principles() {
    for principle in PolicyCatalog::principles() {
        println!("{:<15} {}", principle.id, principle.title);
        println!("{:<15} {}", "", principle.mandate);
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_trail(trail: &InMemoryGateSink) {
    let log = trail.export_log();
    println!();
    println!("Gate trail ({} records)", log.records.len());
    for record in &log.records {
        println!(
            "  #{:<3} {:<11} {:<48} {}",
            record.sequence,
            record.event.label(),
            record.event.intent,
            record.this_hash.get(..12).unwrap_or_default()
        );
    }
    println!(
        "  integrity: {}",
        if trail.verify_integrity() { "verified" } else { "BROKEN" }
    );
}

fn print_banner() {
    println!();
    println!("COVENANT — Audit Gate Demo");
    println!("==========================");
    println!("  {GENESIS_DEFINITION}");
    println!("  Mandate: {GENESIS_MANDATE}");
    println!();
    println!("Per task:");
    println!("  [1] Gate intercepts the declared intent");
    println!("  [2] Reviewer checks it against the principles");
    println!("  [3] Task runs ONLY if the intent was accepted");
    println!();
}
