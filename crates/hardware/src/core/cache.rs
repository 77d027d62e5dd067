//! Direct-mapped private cache with MESI line states.
//!
//! This module implements the cache-line state machine at the heart of the
//! simulator. Each core owns one [`CacheSet`]: a fixed array of lines where an
//! address always maps to slot `address % capacity`. Applying an instruction
//! first resolves residency (load on a cold slot, write back a dirty victim,
//! silently drop a clean one), then performs the read or write against the
//! resident line.
//!
//! No coherence bus is modeled: caches never observe each other, so a freshly
//! loaded line is always `Exclusive` and the `Shared` state, while handled by
//! every transition, is never produced here. A real bus would downgrade lines
//! on remote reads and invalidate on remote writes; until one exists the MESI
//! labels are purely local.

use crate::common::error::SimError;
use crate::isa::instruction::Instruction;
use crate::soc::memory::MemoryStore;

/// MESI coherence state of one cache line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum MesiState {
    /// Line holds no data; address and value are meaningless.
    Invalid = 0,
    /// Line is dirty and must be written back before the slot is reused.
    Modified = 1,
    /// Line is clean and this core is its only holder.
    Exclusive = 2,
    /// Line is clean and may be held by another cache. Reachable only once a
    /// coherence bus exists; accepted by the state machine regardless.
    Shared = 3,
}

/// One cache line: the address it mirrors, the cached byte, and its state.
#[derive(Clone, Copy, Debug)]
struct CacheLine {
    address: u8,
    value: u8,
    state: MesiState,
}

impl Default for CacheLine {
    fn default() -> Self {
        Self {
            address: 0,
            value: 0,
            state: MesiState::Invalid,
        }
    }
}

/// Outcome of applying one instruction against the cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Access {
    /// Byte served to the core (read) or committed to the line (write).
    pub value: u8,
    /// The target address was already resident in its slot.
    pub hit: bool,
    /// A dirty victim was committed to memory while resolving residency.
    pub wrote_back: bool,
}

/// A core's private direct-mapped cache.
///
/// Created when the core starts and dropped when it finishes; nothing else
/// ever holds a reference to it, so no locking is involved.
#[derive(Debug)]
pub struct CacheSet {
    lines: Vec<CacheLine>,
}

impl CacheSet {
    /// Creates an empty cache with the given number of line slots.
    ///
    /// A zero capacity is normalized to one line so the modulo placement is
    /// always defined.
    pub fn new(capacity: usize) -> Self {
        let safe_capacity = if capacity == 0 { 1 } else { capacity };
        Self {
            lines: vec![CacheLine::default(); safe_capacity],
        }
    }

    /// Returns the number of line slots.
    pub fn capacity(&self) -> usize {
        self.lines.len()
    }

    /// Slot an address maps to: direct-mapped, no associativity.
    fn slot(&self, address: u8) -> usize {
        usize::from(address) % self.lines.len()
    }

    /// Returns the MESI state the cache holds for `address`.
    ///
    /// `Invalid` both when the slot is empty and when it is occupied by a
    /// different address.
    pub fn line_state(&self, address: u8) -> MesiState {
        let line = self.lines[self.slot(address)];
        if line.state != MesiState::Invalid && line.address == address {
            line.state
        } else {
            MesiState::Invalid
        }
    }

    /// Returns the cached byte for `address`, if resident.
    pub fn resident_value(&self, address: u8) -> Option<u8> {
        let line = self.lines[self.slot(address)];
        if line.state != MesiState::Invalid && line.address == address {
            Some(line.value)
        } else {
            None
        }
    }

    /// Applies one instruction: resolves residency, then reads or writes.
    ///
    /// Residency resolution follows the MESI table: an `Invalid` slot loads
    /// from memory and becomes `Exclusive`; a `Modified` slot holding a
    /// different address writes its line back first; `Exclusive`/`Shared`
    /// slots holding a different address reload without a write-back. A read
    /// then serves the resident value unchanged; a write stores the operand
    /// and marks the line `Modified` whatever its prior state.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::AddressOutOfRange`] if the instruction addresses a
    /// byte beyond the store, before any cache state is touched.
    pub fn apply(
        &mut self,
        instruction: &Instruction,
        memory: &MemoryStore,
    ) -> Result<Access, SimError> {
        let address = instruction.address();
        if usize::from(address) >= memory.len() {
            return Err(SimError::AddressOutOfRange {
                address,
                memory_bytes: memory.len(),
            });
        }

        let slot = self.slot(address);
        let line = &mut self.lines[slot];
        let mut hit = true;
        let mut wrote_back = false;

        match line.state {
            MesiState::Invalid => {
                *line = CacheLine {
                    address,
                    value: memory.read(address),
                    state: MesiState::Exclusive,
                };
                hit = false;
            }
            MesiState::Modified if line.address != address => {
                memory.write(line.address, line.value);
                wrote_back = true;
                *line = CacheLine {
                    address,
                    value: memory.read(address),
                    state: MesiState::Exclusive,
                };
                hit = false;
            }
            MesiState::Exclusive | MesiState::Shared if line.address != address => {
                // Clean victim: no write-back needed.
                *line = CacheLine {
                    address,
                    value: memory.read(address),
                    state: MesiState::Exclusive,
                };
                hit = false;
            }
            MesiState::Modified | MesiState::Exclusive | MesiState::Shared => {}
        }

        match *instruction {
            Instruction::Read { .. } => Ok(Access {
                value: line.value,
                hit,
                wrote_back,
            }),
            Instruction::Write { value, .. } => {
                line.value = value;
                line.state = MesiState::Modified;
                Ok(Access {
                    value,
                    hit,
                    wrote_back,
                })
            }
        }
    }
}
