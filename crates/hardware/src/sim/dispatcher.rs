//! Multi-core dispatcher.
//!
//! The dispatcher owns a run: it builds the one shared memory store, spawns
//! one OS thread per instruction source, and joins every thread before the
//! store is released. The scoped-thread join barrier makes the lifetime
//! relationship structural — a core cannot outlive the memory it executes
//! against. Every provided source runs; there is no worker-pool cap that
//! silently drops the excess.

use std::path::PathBuf;
use std::thread;

use crate::common::error::SimError;
use crate::config::Config;
use crate::core::executor::CoreExecutor;
use crate::core::trace::TraceSink;
use crate::sim::source::read_lines;
use crate::soc::memory::MemoryStore;
use crate::stats::{CoreStats, SimStats};

/// Outcome of one core's run: its counters, or the error that kept it from
/// running at all.
#[derive(Debug)]
pub struct CoreReport {
    /// Core identifier (index of its source in the run's source list).
    pub core: usize,
    /// Final counters, or the source failure.
    pub outcome: Result<CoreStats, SimError>,
}

/// Results of a whole run, available once every core has finished.
#[derive(Debug)]
pub struct RunSummary {
    /// One report per provided source, in source order.
    pub reports: Vec<CoreReport>,
    /// Counters merged across the cores that ran.
    pub stats: SimStats,
}

impl RunSummary {
    /// Returns `true` if every source was opened and executed.
    pub fn all_sources_ran(&self) -> bool {
        self.reports.iter().all(|report| report.outcome.is_ok())
    }
}

/// Constructs and runs multi-core simulations.
#[derive(Debug)]
pub struct Dispatcher {
    config: Config,
}

impl Dispatcher {
    /// Creates a dispatcher with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs one core per source concurrently and waits for all of them.
    ///
    /// Cores share the memory store and nothing else; records reach `sink`
    /// in each core's own order, interleaved arbitrarily across cores. A
    /// source that cannot be read is reported in the summary while the
    /// remaining cores run to completion.
    pub fn run(&self, sources: &[PathBuf], sink: &dyn TraceSink) -> RunSummary {
        let memory = MemoryStore::new(self.config.memory.size_bytes);
        let cache_lines = self.config.cache.lines;

        let reports: Vec<CoreReport> = thread::scope(|scope| {
            let handles: Vec<_> = sources
                .iter()
                .enumerate()
                .map(|(core, path)| {
                    let memory = &memory;
                    scope.spawn(move || match read_lines(path) {
                        Ok(lines) => {
                            let mut executor = CoreExecutor::new(core, cache_lines);
                            executor.run(lines, memory, sink);
                            CoreReport {
                                core,
                                outcome: Ok(executor.into_stats()),
                            }
                        }
                        Err(err) => {
                            tracing::error!(core, %err, "core did not run");
                            CoreReport {
                                core,
                                outcome: Err(err),
                            }
                        }
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(report) => report,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        });
        // The scope has joined every core; the store is released on return.

        let mut stats = SimStats::default();
        for report in &reports {
            if let Ok(core_stats) = &report.outcome {
                stats.absorb(core_stats);
            }
        }
        RunSummary { reports, stats }
    }
}
