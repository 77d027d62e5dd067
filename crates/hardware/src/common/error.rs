//! Simulator error definitions.
//!
//! This module defines the error taxonomy for the simulator. Every failure is
//! local and synchronous; there are no transient classes and nothing is retried.
//! A usage error (no instruction files at all) is handled by the binary before
//! any simulation starts and therefore does not appear here.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while preparing or executing a core's instruction stream.
///
/// `SourceUnavailable` is fatal for the affected core (it never starts).
/// `MalformedInstruction` and `AddressOutOfRange` are fatal for a single
/// instruction; the executor reports them and continues with the next line.
#[derive(Debug, Error)]
pub enum SimError {
    /// An instruction source file could not be opened or read.
    #[error("cannot read instruction source '{}': {source}", .path.display())]
    SourceUnavailable {
        /// Path of the source that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A line did not match the `RD <addr>` / `WR <addr> <value>` grammar.
    #[error("malformed instruction '{line}': {reason}")]
    MalformedInstruction {
        /// The offending line, trimmed.
        line: String,
        /// What was wrong with it.
        reason: String,
    },

    /// An instruction addressed a byte outside the shared memory store.
    #[error("address {address} is outside the {memory_bytes}-byte memory store")]
    AddressOutOfRange {
        /// The out-of-range address, after truncation to the byte width.
        address: u8,
        /// Size of the memory store the address was checked against.
        memory_bytes: usize,
    },
}

impl SimError {
    /// Builds a `MalformedInstruction` for the given line and reason.
    pub(crate) fn malformed(line: &str, reason: impl Into<String>) -> Self {
        Self::MalformedInstruction {
            line: line.to_owned(),
            reason: reason.into(),
        }
    }
}
