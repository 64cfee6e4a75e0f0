//! Opcode catalogue for Koa bytecode.
//!
//! Every opcode is encoded as exactly one byte. Only `PUSH` carries an
//! inline operand, which follows the opcode byte in the stream.

use crate::entry::OPERAND_LEN;
use crate::error::DecodeError;

/// Identifies the instruction kind.
///
/// The `#[repr(u8)]` attribute pins each variant to its byte value, which
/// is the wire encoding shared with the compiler.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // 0x0 range: arithmetic
    /// Pop two values, push their sum.
    Add = 0x01,
    /// Pop two values, push their product.
    Mul = 0x02,
    /// Pop two values, push their difference.
    Sub = 0x03,
    /// Pop two values, push their quotient.
    Div = 0x04,
    /// Pop two values, push the remainder.
    Mod = 0x05,
    /// Pop two values, push their bitwise AND.
    And = 0x06,
    /// Pop two values, push their bitwise OR.
    Or = 0x07,

    // 0x10 range: comparison
    Lt = 0x10,
    Lte = 0x11,
    Gt = 0x12,
    Gte = 0x13,
    Eq = 0x14,
    Not = 0x15,

    // 0x20 range: stack, memory, functions
    /// Discard the top of stack.
    Pop = 0x20,
    /// Push the 8-byte operand that follows this opcode.
    Push = 0x21,
    Mload = 0x22,
    Mstore = 0x23,
    Msize = 0x24,
    /// Load the function selector of the current call.
    LoadFunc = 0x25,
    /// Load the arguments of the current call.
    LoadArgs = 0x26,
    /// Return from the current function.
    Returning = 0x27,
    /// Unconditional jump to the index on top of stack.
    Jump = 0x28,
    /// Marks a legal jump target. No effect when executed.
    JumpDst = 0x29,

    // 0x30 range: control
    /// Conditional jump.
    Jumpi = 0x30,
    Dup = 0x31,
    Swap = 0x32,
    /// Stop execution.
    Exit = 0x3A,
}

/// All valid opcodes, in definition order. Useful for exhaustive testing.
pub const ALL_OPCODES: [Opcode; 27] = [
    Opcode::Add,
    Opcode::Mul,
    Opcode::Sub,
    Opcode::Div,
    Opcode::Mod,
    Opcode::And,
    Opcode::Or,
    Opcode::Lt,
    Opcode::Lte,
    Opcode::Gt,
    Opcode::Gte,
    Opcode::Eq,
    Opcode::Not,
    Opcode::Pop,
    Opcode::Push,
    Opcode::Mload,
    Opcode::Mstore,
    Opcode::Msize,
    Opcode::LoadFunc,
    Opcode::LoadArgs,
    Opcode::Returning,
    Opcode::Jump,
    Opcode::JumpDst,
    Opcode::Jumpi,
    Opcode::Dup,
    Opcode::Swap,
    Opcode::Exit,
];

impl TryFrom<u8> for Opcode {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x01 => Ok(Opcode::Add),
            0x02 => Ok(Opcode::Mul),
            0x03 => Ok(Opcode::Sub),
            0x04 => Ok(Opcode::Div),
            0x05 => Ok(Opcode::Mod),
            0x06 => Ok(Opcode::And),
            0x07 => Ok(Opcode::Or),

            0x10 => Ok(Opcode::Lt),
            0x11 => Ok(Opcode::Lte),
            0x12 => Ok(Opcode::Gt),
            0x13 => Ok(Opcode::Gte),
            0x14 => Ok(Opcode::Eq),
            0x15 => Ok(Opcode::Not),

            0x20 => Ok(Opcode::Pop),
            0x21 => Ok(Opcode::Push),
            0x22 => Ok(Opcode::Mload),
            0x23 => Ok(Opcode::Mstore),
            0x24 => Ok(Opcode::Msize),
            0x25 => Ok(Opcode::LoadFunc),
            0x26 => Ok(Opcode::LoadArgs),
            0x27 => Ok(Opcode::Returning),
            0x28 => Ok(Opcode::Jump),
            0x29 => Ok(Opcode::JumpDst),

            0x30 => Ok(Opcode::Jumpi),
            0x31 => Ok(Opcode::Dup),
            0x32 => Ok(Opcode::Swap),
            0x3A => Ok(Opcode::Exit),

            _ => Err(DecodeError::InvalidOpcode(value)),
        }
    }
}

impl Opcode {
    /// Returns the assembly mnemonic for this opcode.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Add => "ADD",
            Opcode::Mul => "MUL",
            Opcode::Sub => "SUB",
            Opcode::Div => "DIV",
            Opcode::Mod => "MOD",
            Opcode::And => "AND",
            Opcode::Or => "OR",
            Opcode::Lt => "LT",
            Opcode::Lte => "LTE",
            Opcode::Gt => "GT",
            Opcode::Gte => "GTE",
            Opcode::Eq => "EQ",
            Opcode::Not => "NOT",
            Opcode::Pop => "POP",
            Opcode::Push => "PUSH",
            Opcode::Mload => "MLOAD",
            Opcode::Mstore => "MSTORE",
            Opcode::Msize => "MSIZE",
            Opcode::LoadFunc => "LOADFUNC",
            Opcode::LoadArgs => "LOADARGS",
            Opcode::Returning => "RETURNING",
            Opcode::Jump => "JUMP",
            Opcode::JumpDst => "JUMPDST",
            Opcode::Jumpi => "JUMPI",
            Opcode::Dup => "DUP",
            Opcode::Swap => "SWAP",
            Opcode::Exit => "EXIT",
        }
    }

    /// Number of inline operand bytes that follow this opcode in the stream.
    pub fn operand_len(&self) -> usize {
        match self {
            Opcode::Push => OPERAND_LEN,
            _ => 0,
        }
    }
}
