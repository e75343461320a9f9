//! Error kinds for the simulation kernel.
//!
//! Every fallible operation in this crate returns `Result<T, SimError>` rather than
//! panicking or returning an out-parameter sentinel. All variants are fatal to the
//! current run: the caller logs the diagnostic and aborts (see `main.rs`).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("could not open '{path}': {source}")]
    IoOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read failed on '{path}': {source}")]
    IoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write failed on '{path}': {source}")]
    IoWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed input at line {line} ({context}): {detail}")]
    Parse {
        line: usize,
        context: &'static str,
        detail: String,
    },

    /// Reserved for a future numeric failure mode. Nothing raises it today: a
    /// pair distance below the floor is silently skipped (see `potential.rs`)
    /// rather than treated as an error, by design.
    #[error("numeric error: {0}")]
    Numeric(String),
}

pub type SimResult<T> = Result<T, SimError>;
