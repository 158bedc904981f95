//! Error types for ccstatus-core
//!
//! Only the stdin payload is load-bearing: a render aborts when it
//! cannot be read or parsed. Every other input (transcript, git,
//! model table) degrades its own segment instead of erroring.

use thiserror::Error;

/// Fatal errors for a render invocation
#[derive(Error, Debug)]
pub enum StatusError {
    #[error("failed to read status payload from stdin")]
    PayloadRead {
        #[source]
        source: std::io::Error,
    },

    #[error("malformed status payload: {message}")]
    PayloadParse {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}
