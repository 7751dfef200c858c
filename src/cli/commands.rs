// Top-level commands: the interactive screen and one-shot lookups

use anyhow::Result;
use std::io::Write;
use std::sync::Arc;

use super::event_loop::EventLoop;
use super::session::{format_definition, InteractiveSession, STATUS_PARSE_FAILED};
use super::tui::{spawn_input_task, TerminalGuard};
use crate::client::{QueryExecutor, QueryOutcome, SlangLookup};
use crate::config::Config;

/// Run the interactive query screen until the user quits.
pub async fn run_interactive(config: &Config) -> Result<()> {
    let executor = QueryExecutor::from_config(&config.client)?;
    let session = InteractiveSession::new(Arc::new(executor));

    tracing::info!("Starting session against {}", config.client.address());

    let mut guard = TerminalGuard::enter()?;
    let input_rx = spawn_input_task();
    let event_loop = EventLoop::new(
        session,
        input_rx,
        config.colors.clone(),
        config.client.address(),
        config.client.shutdown_grace(),
    );

    let result = event_loop.run(guard.terminal()).await;
    drop(guard);

    tracing::info!("Session ended");
    result
}

/// Look up a single term and print the result. Returns whether it succeeded.
pub async fn run_lookup(config: &Config, term: &str) -> Result<bool> {
    let term = term.trim();
    if term.is_empty() {
        anyhow::bail!("query term must not be empty");
    }

    let executor = QueryExecutor::from_config(&config.client)?;
    let outcome = executor.execute(term).await;

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    print_outcome(&outcome, &mut stdout.lock(), &mut stderr.lock())?;
    Ok(outcome.is_success())
}

/// Write a successful definition to `out`, anything else to `err`.
pub fn print_outcome(
    outcome: &QueryOutcome,
    out: &mut impl Write,
    err: &mut impl Write,
) -> std::io::Result<()> {
    match outcome {
        QueryOutcome::Success(definition) => writeln!(out, "{}", format_definition(definition)),
        QueryOutcome::NotFound(term) => writeln!(err, "slang not found: {}", term),
        QueryOutcome::ParseError(_) => writeln!(err, "{}", STATUS_PARSE_FAILED),
        QueryOutcome::TransportError(reason) => writeln!(err, "{}", reason),
    }
}
