//! Repository inspection via the git binary
//!
//! Repository state is best-effort decoration for the status line. A
//! missing git binary, a non-repo directory, or a failed subcommand
//! must never abort the render; each query degrades to an empty or
//! zero result on its own.

use crate::models::RepoStatus;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Line-change counts from `git diff --numstat`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub added: u64,
    pub deleted: u64,
}

/// Source of repository information for the working directory
///
/// Production uses [`GitCli`]; tests substitute canned output without
/// invoking a real git binary.
pub trait RepoInspector {
    /// Active branch name; empty string on any failure
    fn branch(&self) -> String;

    /// Summed working-tree line changes; zeros on any failure
    fn diff_stats(&self) -> DiffStats;
}

impl RepoStatus {
    /// Run both inspector queries, each individually fault-tolerant
    pub fn collect(inspector: &dyn RepoInspector) -> Self {
        let branch = inspector.branch();
        let stats = inspector.diff_stats();
        Self {
            branch,
            lines_added: stats.added,
            lines_deleted: stats.deleted,
        }
    }
}

/// `RepoInspector` backed by git subprocess invocations
pub struct GitCli {
    cwd: PathBuf,
}

impl GitCli {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    /// Run a git subcommand in the working directory, returning stdout
    /// only when the command ran and exited zero
    fn run(&self, args: &[&str]) -> Option<String> {
        let output = match Command::new("git")
            .args(args)
            .current_dir(&self.cwd)
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                debug!(cwd = %self.cwd.display(), error = %e, "git invocation failed");
                return None;
            }
        };

        if !output.status.success() {
            return None;
        }

        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl RepoInspector for GitCli {
    fn branch(&self) -> String {
        self.run(&["rev-parse", "--abbrev-ref", "HEAD"])
            .map(|out| out.trim().to_string())
            .unwrap_or_default()
    }

    fn diff_stats(&self) -> DiffStats {
        self.run(&["diff", "--numstat"])
            .map(|out| parse_numstat(&out))
            .unwrap_or_default()
    }
}

/// Sum additions and deletions from `git diff --numstat` output
///
/// Each line is `<added>\t<deleted>\t<path>`. Binary files report `-`
/// for both counts; those lines are skipped entirely, not counted as
/// zero.
pub fn parse_numstat(output: &str) -> DiffStats {
    let mut stats = DiffStats::default();

    for line in output.lines() {
        let mut fields = line.split('\t');
        let (Some(added), Some(deleted)) = (fields.next(), fields.next()) else {
            continue;
        };
        let (Ok(added), Ok(deleted)) = (added.trim().parse::<u64>(), deleted.trim().parse::<u64>())
        else {
            continue;
        };
        stats.added += added;
        stats.deleted += deleted;
    }

    stats
}
