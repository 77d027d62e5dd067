//! Instruction source loading.
//!
//! A source is one newline-delimited text file of instruction lines, one file
//! per simulated core. The whole file is read before the core starts, so the
//! execution loop itself never blocks on I/O.

use std::fs;
use std::path::Path;

use crate::common::error::SimError;

/// Reads one instruction source into an ordered line vector.
///
/// # Errors
///
/// Returns [`SimError::SourceUnavailable`] if the file cannot be read. That
/// is fatal for the core this source was destined for, and for that core
/// only.
pub fn read_lines(path: &Path) -> Result<Vec<String>, SimError> {
    let text = fs::read_to_string(path).map_err(|source| SimError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.lines().map(str::to_owned).collect())
}
