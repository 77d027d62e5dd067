//! Multi-core MESI cache coherence simulator library.
//!
//! This crate implements a pedagogical model of cache coherence with the following:
//! 1. **Memory:** A fixed-size shared byte store with unsynchronized cross-core access.
//! 2. **ISA:** Decoding of the two-operation load/store instruction grammar (`RD`/`WR`).
//! 3. **Core:** A private direct-mapped cache per core driven through the MESI state machine,
//!    and the in-order execution loop that applies instructions against it.
//! 4. **Simulation:** Instruction-source loading, thread-per-core dispatch, and a join
//!    barrier that holds the shared store alive until every core has finished.
//! 5. **Statistics:** Per-core and aggregated access counters.

/// Common types shared across the simulator (errors).
pub mod common;
/// Simulator configuration (defaults, memory and cache sizing).
pub mod config;
/// CPU core (MESI cache, execution loop, trace records).
pub mod core;
/// Instruction set (decode, instruction representation).
pub mod isa;
/// Instruction sources and the multi-core dispatcher.
pub mod sim;
/// Shared system memory.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Multi-core run orchestrator; construct with `Dispatcher::new`.
pub use crate::sim::dispatcher::Dispatcher;
/// Shared byte-addressable memory; one instance spans a whole run.
pub use crate::soc::memory::MemoryStore;
