//! ccstatus - Claude Code status line renderer
//!
//! Invoked fresh on every prompt redraw: reads one session payload
//! from stdin, scans the transcript and the git working tree, and
//! prints a single two-line ANSI status block to stdout.

use anyhow::Result;
use ccstatus_core::{format, GitCli, ModelNameResolver, RepoStatus, StatusInput};
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ccstatus",
    version,
    about = "Claude Code status line renderer",
    long_about = "Renders a two-line status block for Claude Code's statusLine hook.\n\
                  \n\
                  Reads the session payload JSON from stdin and prints model, working\n\
                  directory, git state, token consumption, context pressure, and spend.\n\
                  \n\
                  Examples:\n\
                    claude-code settings: \"statusLine\": { \"command\": \"ccstatus\" }\n\
                    echo '{}' | ccstatus             # Render with defaults\n\
                  \n\
                  Environment Variables:\n\
                    NO_COLOR                         # Disable ANSI colors\n\
                    RUST_LOG                         # Diagnostic logging to stderr"
)]
struct Cli {
    /// Disable ANSI colors (also respects NO_COLOR)
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr and only when RUST_LOG asks for them;
    // stdout carries the status block alone.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Claude Code pipes stdout, so color auto-detection would strip
    // everything; force colors on unless explicitly disabled.
    let no_color = cli.no_color || std::env::var_os("NO_COLOR").is_some();
    colored::control::set_override(!no_color);

    // Malformed stdin is the one fatal condition: exit non-zero with
    // nothing on stdout rather than emit a corrupted line.
    let input = StatusInput::from_reader(io::stdin().lock())?;
    tracing::debug!(
        model = %input.model.display_name,
        cwd = %input.workspace.current_dir,
        transcript = ?input.transcript_path,
        "status payload parsed"
    );

    let usage = ccstatus_core::last_usage(input.transcript_path.as_deref());

    let inspector = GitCli::new(&input.workspace.current_dir);
    let repo = RepoStatus::collect(&inspector);

    let resolver = ModelNameResolver::default();
    let model_name = resolver.resolve(&input.model.display_name);

    let home = dirs::home_dir();
    let directory = format::shorten_path(&input.workspace.current_dir, home.as_deref());

    let block = format::render(&format::StatusLine {
        model_name: &model_name,
        directory: &directory,
        repo: &repo,
        usage: &usage,
        cost_usd: input.cost.total_cost_usd,
        version: input.version.as_deref().filter(|v| !v.is_empty()),
    });

    println!("{}", block);
    Ok(())
}
