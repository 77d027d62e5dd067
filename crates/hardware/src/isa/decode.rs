//! Text-line instruction decoder.
//!
//! Grammar, per line: the first whitespace-delimited token selects the
//! operation. `RD` requires one further integer token (address); `WR`
//! requires two (address, value). Tokens past the required ones are ignored.
//! Integer operands are parsed at full width and truncated to a byte, the
//! element width of the memory store; a write of `-1` therefore stores `255`.

use crate::common::error::SimError;
use crate::isa::instruction::Instruction;

/// Decodes one line of text into an [`Instruction`].
///
/// # Errors
///
/// Returns [`SimError::MalformedInstruction`] when the operation token is
/// unknown or a required operand is missing or not an integer. The caller
/// chooses what a decode failure means for the stream; the executor's policy
/// is to skip the line and keep the core running.
pub fn decode(line: &str) -> Result<Instruction, SimError> {
    let mut tokens = line.split_whitespace();
    let Some(operation) = tokens.next() else {
        return Err(SimError::malformed(line, "empty line"));
    };

    match operation {
        "RD" => {
            let address = operand(line, tokens.next(), "address")?;
            Ok(Instruction::Read { address })
        }
        "WR" => {
            let address = operand(line, tokens.next(), "address")?;
            let value = operand(line, tokens.next(), "value")?;
            Ok(Instruction::Write { address, value })
        }
        other => Err(SimError::malformed(
            line,
            format!("unknown operation '{other}'"),
        )),
    }
}

/// Parses one required integer operand, truncating to the byte width.
fn operand(line: &str, token: Option<&str>, name: &str) -> Result<u8, SimError> {
    let Some(token) = token else {
        return Err(SimError::malformed(line, format!("missing {name}")));
    };
    let wide: i64 = token
        .parse()
        .map_err(|_| SimError::malformed(line, format!("{name} '{token}' is not an integer")))?;
    Ok(wide as u8)
}
