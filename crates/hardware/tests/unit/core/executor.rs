//! Core Executor Unit Tests.
//!
//! Verifies the decode → apply → trace loop: exact trace line formats,
//! strict source ordering, the skip policies for blank and malformed lines,
//! and counter accounting.

use pretty_assertions::assert_eq;

use crate::common::TestCore;
use mesisim_core::core::cache::MesiState;

// ══════════════════════════════════════════════════════════
// 1. Trace output
// ══════════════════════════════════════════════════════════

#[test]
fn write_then_read_traces_exactly() {
    let mut core = TestCore::new();
    core.feed(&["WR 3 42", "RD 3"]);
    assert_eq!(
        core.sink.lines(),
        vec![
            "Thread 0: Writing to address 3: 42".to_owned(),
            "Thread 0: Reading from address 3: 42".to_owned(),
        ]
    );
}

#[test]
fn fresh_read_reports_initial_memory() {
    let mut core = TestCore::new();
    core.feed(&["RD 1"]);
    assert_eq!(
        core.sink.lines(),
        vec!["Thread 0: Reading from address 1: 0".to_owned()]
    );
}

#[test]
fn records_carry_the_core_id() {
    let mut core = TestCore::new();
    let mut other = mesisim_core::core::executor::CoreExecutor::new(3, 2);
    other.run(["RD 0"], &core.memory, &core.sink);
    assert_eq!(
        core.sink.lines(),
        vec!["Thread 3: Reading from address 0: 0".to_owned()]
    );
}

#[test]
fn trace_preserves_source_order() {
    let mut core = TestCore::new();
    core.feed(&["WR 0 1", "WR 1 2", "RD 0", "RD 1", "WR 0 3"]);
    let addresses: Vec<u8> = core.sink.records().iter().map(|r| r.address).collect();
    assert_eq!(addresses, vec![0, 1, 0, 1, 0]);
}

// ══════════════════════════════════════════════════════════
// 2. Line policies
// ══════════════════════════════════════════════════════════

#[test]
fn blank_lines_are_skipped_silently() {
    let mut core = TestCore::new();
    core.feed(&["", "   ", "RD 1", "\t"]);
    assert_eq!(core.sink.records().len(), 1);
    assert_eq!(core.executor.stats().skipped, 0);
}

#[test]
fn malformed_lines_are_skipped_and_counted() {
    let mut core = TestCore::new();
    core.feed(&["HCF 1", "RD 1", "WR 2"]);
    assert_eq!(core.sink.records().len(), 1);
    assert_eq!(core.executor.stats().skipped, 2);
    assert_eq!(core.executor.stats().instructions, 1);
}

#[test]
fn out_of_range_instruction_is_abandoned_and_counted() {
    let mut core = TestCore::new();
    core.feed(&["RD 200", "RD 1"]);
    assert_eq!(core.sink.records().len(), 1);
    assert_eq!(core.executor.stats().faulted, 1);
    assert_eq!(core.sink.records()[0].address, 1);
}

// ══════════════════════════════════════════════════════════
// 3. Cache interaction through the loop
// ══════════════════════════════════════════════════════════

#[test]
fn eviction_commits_are_observable_on_later_reads() {
    let mut core = TestCore::new();
    // WR 1 commits to memory when RD 3 claims slot 1; RD 1 then reloads it.
    core.feed(&["WR 1 7", "RD 3", "RD 1"]);
    assert_eq!(
        core.sink.lines().last().map(String::as_str),
        Some("Thread 0: Reading from address 1: 7")
    );
    assert_eq!(core.memory.read(1), 7);
}

#[test]
fn executor_owns_its_cache_for_the_whole_run() {
    let mut core = TestCore::new();
    core.feed(&["WR 5 9"]);
    assert_eq!(core.executor.cache().line_state(5), MesiState::Modified);
    core.feed(&["RD 5"]);
    assert_eq!(core.executor.cache().line_state(5), MesiState::Modified);
}

// ══════════════════════════════════════════════════════════
// 4. Counters
// ══════════════════════════════════════════════════════════

#[test]
fn stats_account_for_hits_misses_and_writebacks() {
    let mut core = TestCore::new();
    core.feed(&["WR 3 42", "RD 3", "RD 5", "RD 3"]);
    let stats = core.executor.stats();
    assert_eq!(stats.instructions, 4);
    assert_eq!(stats.reads, 3);
    assert_eq!(stats.writes, 1);
    // WR 3 misses (cold), RD 3 hits, RD 5 misses (evicts dirty 3), RD 3 misses.
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 3);
    assert_eq!(stats.writebacks, 1);
}
