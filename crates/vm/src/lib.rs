//! Koa bytecode front end for execution engines.
//!
//! Turns raw bytecode into an [`Asm`]: a list of decoded entries with a
//! program counter an interpreter can step through and jump around in.
//!
//! # Usage
//!
//! ```
//! use koa_common::{Entry, Opcode};
//! use koa_vm::{disassemble, AsmReader};
//!
//! // JUMPDST, PUSH 42, POP, EXIT
//! let bytes = [0x29, 0x21, 0, 0, 0, 0, 0, 0, 0, 42, 0x20, 0x3A];
//! let mut asm = disassemble(&bytes).unwrap();
//!
//! assert_eq!(asm.current(), Some(&Entry::Op(Opcode::JumpDst)));
//! assert_eq!(asm.next(), Some(&Entry::Op(Opcode::Push)));
//! assert!(asm.validate_jump_dst(0));
//! asm.jump(0).unwrap();
//! ```
//!
//! # Traversal
//!
//! The program counter starts on entry 0, which is read with
//! [`Asm::current`]. [`AsmReader::next`] moves to the following entry and
//! returns it, or returns `None` once the last entry is current. Jumps must
//! be checked with [`AsmReader::validate_jump_dst`]; an out-of-range
//! [`AsmReader::jump`] is reported as [`VmError::InvalidJumpTarget`].

pub mod analysis;
pub mod asm;
pub mod disassembler;
pub mod error;

pub use asm::{Asm, AsmReader};
pub use disassembler::disassemble;
pub use error::VmError;
