//! Instruction set for the simulated cores.
//!
//! Two operations exist: `RD <address>` and `WR <address> <value>`, one per
//! text line. Decoding turns a line into a typed [`Instruction`](instruction::Instruction).

/// Text-line instruction decoder.
pub mod decode;
/// Typed instruction representation.
pub mod instruction;
