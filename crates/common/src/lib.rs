//! Koa common types: the opcode catalogue and instruction entries.
//!
//! - [`Opcode`]: the 27 one-byte opcodes of Koa bytecode
//! - [`Entry`]: one element of a disassembled program (opcode or operand)
//! - [`Data`]: the 8-byte inline operand of `PUSH`
//! - [`DecodeError`]: catalogue lookup failures
//!
//! # Dependencies
//!
//! This crate uses `thiserror` and has no other dependencies.

pub mod entry;
pub mod error;
pub mod opcode;

// Re-export commonly used types at the crate root.
pub use entry::{Data, Entry, OPERAND_LEN};
pub use error::DecodeError;
pub use opcode::{Opcode, ALL_OPCODES};
