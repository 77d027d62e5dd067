//! Configuration system for the coherence simulator.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline constants for the shared memory and per-core caches.
//! 2. **Structures:** Hierarchical config for the memory store and cache geometry.
//!
//! Configuration is supplied as JSON (see the CLI's `--config`) or via
//! `Config::default()`. Both sizes are fixed for the lifetime of a run.

use serde::Deserialize;

/// Default configuration constants for the simulator.
mod defaults {
    /// Size of the shared memory store in bytes.
    ///
    /// Every instruction address is checked against this bound; accesses
    /// beyond it fault the offending instruction.
    pub const MEMORY_BYTES: usize = 24;

    /// Number of lines in each core's private cache.
    ///
    /// Placement is direct-mapped: an address always lands in slot
    /// `address % CACHE_LINES`.
    pub const CACHE_LINES: usize = 2;
}

/// Root configuration for a simulation run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Shared memory store configuration.
    pub memory: MemoryConfig,
    /// Per-core cache configuration.
    pub cache: CacheConfig,
}

/// Shared memory store configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Total size of the store in bytes.
    pub size_bytes: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size_bytes: defaults::MEMORY_BYTES,
        }
    }
}

/// Per-core cache configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Number of cache lines (direct-mapped slots) per core.
    pub lines: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            lines: defaults::CACHE_LINES,
        }
    }
}
