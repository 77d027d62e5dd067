//! Per-core in-order execution loop.
//!
//! A `CoreExecutor` owns one private cache for its whole run and drains an
//! ordered sequence of instruction lines against it: decode, apply, emit one
//! trace record. There is no reordering, no early termination, and no
//! cancellation — the core finishes exactly when its source is exhausted.

use crate::core::cache::CacheSet;
use crate::core::trace::{TraceRecord, TraceSink};
use crate::isa::decode::decode;
use crate::soc::memory::MemoryStore;
use crate::stats::CoreStats;

/// One simulated core: identifier, private cache, and access counters.
#[derive(Debug)]
pub struct CoreExecutor {
    id: usize,
    cache: CacheSet,
    stats: CoreStats,
}

impl CoreExecutor {
    /// Creates a core with the given identifier and cache capacity.
    pub fn new(id: usize, cache_lines: usize) -> Self {
        Self {
            id,
            cache: CacheSet::new(cache_lines),
            stats: CoreStats::default(),
        }
    }

    /// Returns this core's identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the core's private cache for inspection.
    pub fn cache(&self) -> &CacheSet {
        &self.cache
    }

    /// Returns the counters accumulated so far.
    pub fn stats(&self) -> &CoreStats {
        &self.stats
    }

    /// Consumes the core, yielding its final counters.
    pub fn into_stats(self) -> CoreStats {
        self.stats
    }

    /// Executes an ordered sequence of instruction lines to completion.
    pub fn run<I>(&mut self, lines: I, memory: &MemoryStore, sink: &dyn TraceSink)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for line in lines {
            self.step(line.as_ref(), memory, sink);
        }
    }

    /// Executes one instruction line.
    ///
    /// Blank lines are skipped silently. A malformed line or an out-of-range
    /// address is reported and counted, and the core moves on — a bad
    /// instruction is fatal only to itself.
    pub fn step(&mut self, line: &str, memory: &MemoryStore, sink: &dyn TraceSink) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        let instruction = match decode(line) {
            Ok(instruction) => instruction,
            Err(err) => {
                tracing::warn!(core = self.id, %err, "skipping malformed line");
                self.stats.skipped += 1;
                return;
            }
        };

        let access = match self.cache.apply(&instruction, memory) {
            Ok(access) => access,
            Err(err) => {
                tracing::warn!(core = self.id, %err, "instruction abandoned");
                self.stats.faulted += 1;
                return;
            }
        };

        self.stats.tally(&instruction, &access);
        let record = TraceRecord {
            core: self.id,
            kind: instruction.kind(),
            address: instruction.address(),
            value: access.value,
        };
        sink.record(&record);
        tracing::trace!(core = self.id, cache = ?self.cache, "cache state");
    }
}
