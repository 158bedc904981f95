//! End-to-end pipeline test: payload JSON + transcript file -> block
//!
//! Exercises the same path the binary takes, with a canned repository
//! inspector standing in for the git binary.

use ccstatus_core::git::{DiffStats, RepoInspector};
use ccstatus_core::{format, ModelNameResolver, RepoStatus, StatusInput, TokenUsage};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

struct CannedRepo;

impl RepoInspector for CannedRepo {
    fn branch(&self) -> String {
        "feature/statusline".to_string()
    }

    fn diff_stats(&self) -> DiffStats {
        DiffStats {
            added: 3,
            deleted: 2,
        }
    }
}

#[test]
fn renders_example_session_end_to_end() {
    colored::control::set_override(false);

    let mut transcript = NamedTempFile::new().unwrap();
    writeln!(transcript, "{}", r#"{"type":"user","message":{"role":"user"}}"#).unwrap();
    writeln!(
        transcript,
        "{}",
        r#"{"type":"assistant","message":{"role":"assistant","usage":{"input_tokens":1000,"output_tokens":500}}}"#
    )
    .unwrap();

    let payload = format!(
        r#"{{
            "model": {{ "display_name": "claude-x" }},
            "workspace": {{ "current_dir": "/home/alice/proj" }},
            "cost": {{ "total_cost_usd": 1.234 }},
            "transcript_path": "{}"
        }}"#,
        transcript.path().display()
    );

    let input = StatusInput::from_reader(payload.as_bytes()).unwrap();

    let usage = ccstatus_core::last_usage(input.transcript_path.as_deref());
    assert_eq!(usage.total(), 1500);

    let repo = RepoStatus::collect(&CannedRepo);
    let model_name = ModelNameResolver::default().resolve(&input.model.display_name);
    let directory = format::shorten_path(
        &input.workspace.current_dir,
        Some(Path::new("/home/alice")),
    );

    let block = format::render(&format::StatusLine {
        model_name: &model_name,
        directory: &directory,
        repo: &repo,
        usage: &usage,
        cost_usd: input.cost.total_cost_usd,
        version: input.version.as_deref(),
    });

    let mut lines = block.lines();
    let line1 = lines.next().unwrap();
    let line2 = lines.next().unwrap();
    assert!(lines.next().is_none());

    assert!(line1.contains("claude-x"));
    assert!(line1.contains("~/proj"));
    assert!(line1.contains("feature/statusline"));
    assert!(line1.contains("+3"));
    assert!(line1.contains("-2"));

    // 1500 / 160000 rounds to 1%
    assert!(line2.contains("1.5k tok"));
    assert!(line2.contains("1%"));
    assert!(line2.contains("1.23 USD"));
}

#[test]
fn renders_zeroed_block_for_fresh_session() {
    colored::control::set_override(false);

    let input = StatusInput::from_reader("{}".as_bytes()).unwrap();
    let usage = ccstatus_core::last_usage(input.transcript_path.as_deref());
    assert_eq!(usage, TokenUsage::default());

    let block = format::render(&format::StatusLine {
        model_name: &ModelNameResolver::default().resolve(&input.model.display_name),
        directory: &input.workspace.current_dir,
        repo: &RepoStatus::default(),
        usage: &usage,
        cost_usd: input.cost.total_cost_usd,
        version: None,
    });

    assert!(block.contains("Unknown"));
    assert!(block.contains("0 tok"));
    assert!(block.contains("0%"));
    assert!(block.contains("0.00 USD"));
}
