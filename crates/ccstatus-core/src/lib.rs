//! ccstatus-core - Core library for ccstatus
//!
//! Provides the session payload model, transcript aggregation, git
//! inspection, model name resolution, and status line formatting.

pub mod error;
pub mod format;
pub mod git;
pub mod model_names;
pub mod models;
pub mod transcript;

pub use error::StatusError;
pub use format::{render, StatusLine, UsageTier};
pub use git::{GitCli, RepoInspector};
pub use model_names::ModelNameResolver;
pub use models::{RepoStatus, StatusInput, TokenUsage};
pub use transcript::{context_percent, last_usage, AUTO_COMPACT_THRESHOLD};
