//! Errors for disassembly and program-counter traversal.
//!
//! Decode failures carry the byte offset into the raw bytecode; traversal
//! failures carry the entry index that was requested.

use thiserror::Error;

/// Errors produced while disassembling or traversing a program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmError {
    /// A byte that is not in the opcode catalogue.
    #[error("invalid opcode {byte:#04x} at offset {offset}")]
    InvalidOpcode { byte: u8, offset: usize },

    /// A PUSH whose operand runs past the end of the bytecode.
    #[error("truncated operand for PUSH at offset {offset}: expected {expected} bytes, found {available}")]
    TruncatedOperand {
        offset: usize,
        expected: usize,
        available: usize,
    },

    /// A jump to an index past the last entry.
    ///
    /// Callers are expected to check targets with `validate_jump_dst`
    /// first, so this indicates a bug in the caller rather than bad input.
    #[error("invalid jump target {target} (program has {len} entries)")]
    InvalidJumpTarget { target: usize, len: usize },
}
