//! Instruction Decoder Unit Tests.
//!
//! Verifies the `RD`/`WR` grammar, operand parsing and truncation,
//! and rejection of malformed lines.

use mesisim_core::common::error::SimError;
use mesisim_core::isa::decode::decode;
use mesisim_core::isa::instruction::Instruction;

// ══════════════════════════════════════════════════════════
// 1. Read decoding
// ══════════════════════════════════════════════════════════

#[test]
fn decode_read() {
    assert_eq!(decode("RD 5").unwrap(), Instruction::Read { address: 5 });
}

#[test]
fn decode_read_surrounding_whitespace() {
    assert_eq!(
        decode("   RD \t 7  ").unwrap(),
        Instruction::Read { address: 7 }
    );
}

#[test]
fn decode_read_ignores_extra_tokens() {
    // Tokens past the required operands are ignored, as in the original grammar.
    assert_eq!(decode("RD 5 99").unwrap(), Instruction::Read { address: 5 });
}

// ══════════════════════════════════════════════════════════
// 2. Write decoding
// ══════════════════════════════════════════════════════════

#[test]
fn decode_write() {
    assert_eq!(
        decode("WR 5 9").unwrap(),
        Instruction::Write {
            address: 5,
            value: 9
        }
    );
}

#[test]
fn decode_write_negative_value_truncates() {
    assert_eq!(
        decode("WR 3 -1").unwrap(),
        Instruction::Write {
            address: 3,
            value: 255
        }
    );
}

#[test]
fn decode_write_wide_value_truncates() {
    assert_eq!(
        decode("WR 3 300").unwrap(),
        Instruction::Write {
            address: 3,
            value: 44
        }
    );
}

#[test]
fn decode_wide_address_truncates() {
    assert_eq!(
        decode("RD 260").unwrap(),
        Instruction::Read { address: 4 }
    );
}

// ══════════════════════════════════════════════════════════
// 3. Malformed lines
// ══════════════════════════════════════════════════════════

#[test]
fn decode_unknown_operation() {
    let err = decode("LD 5").unwrap_err();
    assert!(matches!(err, SimError::MalformedInstruction { .. }));
}

#[test]
fn decode_read_missing_address() {
    let err = decode("RD").unwrap_err();
    assert!(matches!(err, SimError::MalformedInstruction { .. }));
}

#[test]
fn decode_write_missing_value() {
    let err = decode("WR 5").unwrap_err();
    assert!(matches!(err, SimError::MalformedInstruction { .. }));
}

#[test]
fn decode_non_integer_operand() {
    let err = decode("RD five").unwrap_err();
    assert!(matches!(err, SimError::MalformedInstruction { .. }));
}

#[test]
fn decode_empty_line() {
    let err = decode("").unwrap_err();
    assert!(matches!(err, SimError::MalformedInstruction { .. }));
}

#[test]
fn decode_error_reports_the_line() {
    let err = decode("LD 5").unwrap_err();
    assert!(err.to_string().contains("LD 5"));
}
