//! Status line presentation
//!
//! Pure formatting: no I/O happens here. Color codes come from the
//! `colored` crate; the binary decides whether they are emitted at all
//! (stdout is a pipe under Claude Code, so detection is overridden).

use crate::models::{RepoStatus, TokenUsage};
use crate::transcript;
use colored::Colorize;
use std::fmt::Write;
use std::path::Path;

/// Context pressure tier, inclusive lower bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageTier {
    /// Below 70%
    Nominal,
    /// 70-89%
    Caution,
    /// 90% and above
    Critical,
}

/// Stepwise tier selection; never interpolated
pub fn usage_tier(percent: u64) -> UsageTier {
    if percent >= 90 {
        UsageTier::Critical
    } else if percent >= 70 {
        UsageTier::Caution
    } else {
        UsageTier::Nominal
    }
}

/// Collapse a directory under the home directory to `~` notation
///
/// Outside home the path is shown unmodified. Inside home, paths two
/// or more segments deep collapse to `~/…/<last>` so deep trees never
/// widen the line.
pub fn shorten_path(dir: &str, home: Option<&Path>) -> String {
    let Some(home) = home else {
        return dir.to_string();
    };
    let Ok(relative) = Path::new(dir).strip_prefix(home) else {
        return dir.to_string();
    };

    let segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    match segments.as_slice() {
        [] => "~".to_string(),
        [only] => format!("~/{}", only),
        [.., last] => format!("~/…/{}", last),
    }
}

/// Human-suffixed token count: raw below 1k, then `X.Yk` / `X.YM`
pub fn format_tokens(total: u64) -> String {
    if total < 1_000 {
        format!("{} tok", total)
    } else if total < 1_000_000 {
        format!("{:.1}k tok", total as f64 / 1_000.0)
    } else {
        format!("{:.1}M tok", total as f64 / 1_000_000.0)
    }
}

/// Everything the formatter needs, already resolved upstream
pub struct StatusLine<'a> {
    /// Friendly model name from the resolver
    pub model_name: &'a str,
    /// Working directory, already shortened
    pub directory: &'a str,
    pub repo: &'a RepoStatus,
    pub usage: &'a TokenUsage,
    pub cost_usd: f64,
    /// Hosting tool version, when the payload carried one
    pub version: Option<&'a str>,
}

fn paint_percent(percent: u64) -> String {
    let text = format!("{}%", percent);
    match usage_tier(percent) {
        UsageTier::Nominal => text.green().to_string(),
        UsageTier::Caution => text.yellow().to_string(),
        UsageTier::Critical => text.red().to_string(),
    }
}

/// Render the two-line status block
pub fn render(status: &StatusLine) -> String {
    let sep = format!(" {} ", "|".dimmed());
    let mut line1 = String::with_capacity(128);
    let mut line2 = String::with_capacity(128);

    let _ = write!(
        line1,
        "{}{}{}",
        status.model_name.bold(),
        sep,
        status.directory.cyan()
    );

    if !status.repo.branch.is_empty() {
        let _ = write!(line1, "{}{}", sep, status.repo.branch.magenta());
        if status.repo.lines_added + status.repo.lines_deleted > 0 {
            let _ = write!(
                line1,
                " {} {}",
                format!("+{}", status.repo.lines_added).green(),
                format!("-{}", status.repo.lines_deleted).red()
            );
        }
    }

    let percent = transcript::context_percent(status.usage);
    let _ = write!(
        line2,
        "{}{}{}{}{:.2} USD",
        format_tokens(status.usage.total()),
        sep,
        paint_percent(percent),
        sep,
        status.cost_usd
    );

    if let Some(version) = status.version {
        let _ = write!(line2, "{}{}", sep, format!("v{}", version).dimmed());
    }

    format!("{}\n{}", line1, line2)
}
