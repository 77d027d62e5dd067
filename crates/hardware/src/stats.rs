//! Simulation statistics collection and reporting.
//!
//! This module tracks access counters for the simulator. It provides:
//! 1. **Per-core counters:** Instructions, reads, writes, hits, misses, and write-backs.
//! 2. **Line disposition:** Malformed lines skipped and instructions faulted.
//! 3. **Run aggregation:** Merged totals across cores and a printable report.
//!
//! Counts only — the simulator models no cycles or latency, so neither do its
//! statistics.

use crate::core::cache::Access;
use crate::isa::instruction::Instruction;

/// Access counters for one core's run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CoreStats {
    /// Instructions executed to completion (traced).
    pub instructions: u64,
    /// Read instructions executed.
    pub reads: u64,
    /// Write instructions executed.
    pub writes: u64,
    /// Accesses whose target address was already resident.
    pub hits: u64,
    /// Accesses that had to (re)load their line from memory.
    pub misses: u64,
    /// Dirty lines committed to memory during eviction.
    pub writebacks: u64,
    /// Malformed lines skipped by the decoder policy.
    pub skipped: u64,
    /// Instructions abandoned on an out-of-range address.
    pub faulted: u64,
}

impl CoreStats {
    /// Folds one completed access into the counters.
    pub(crate) fn tally(&mut self, instruction: &Instruction, access: &Access) {
        self.instructions += 1;
        match instruction {
            Instruction::Read { .. } => self.reads += 1,
            Instruction::Write { .. } => self.writes += 1,
        }
        if access.hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        if access.wrote_back {
            self.writebacks += 1;
        }
    }
}

/// Aggregated statistics for a whole run.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimStats {
    /// Number of cores whose counters were merged in.
    pub cores: usize,
    /// Summed counters across those cores.
    pub total: CoreStats,
}

impl SimStats {
    /// Merges one core's counters into the run totals.
    pub fn absorb(&mut self, core: &CoreStats) {
        self.cores += 1;
        self.total.instructions += core.instructions;
        self.total.reads += core.reads;
        self.total.writes += core.writes;
        self.total.hits += core.hits;
        self.total.misses += core.misses;
        self.total.writebacks += core.writebacks;
        self.total.skipped += core.skipped;
        self.total.faulted += core.faulted;
    }

    /// Prints the run report to stdout.
    pub fn print(&self) {
        let accesses = self.total.hits + self.total.misses;
        let hit_rate = if accesses == 0 {
            0.0
        } else {
            (self.total.hits as f64 / accesses as f64) * 100.0
        };
        println!("\n==========================================================");
        println!("MESI COHERENCE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("cores                    {}", self.cores);
        println!("sim_insts                {}", self.total.instructions);
        println!("op.reads                 {}", self.total.reads);
        println!("op.writes                {}", self.total.writes);
        println!("----------------------------------------------------------");
        println!("cache.hits               {}", self.total.hits);
        println!("cache.misses             {}", self.total.misses);
        println!("cache.hit_rate           {:.2}%", hit_rate);
        println!("cache.writebacks         {}", self.total.writebacks);
        println!("----------------------------------------------------------");
        println!("lines.skipped            {}", self.total.skipped);
        println!("insts.faulted            {}", self.total.faulted);
        println!("==========================================================");
    }
}
