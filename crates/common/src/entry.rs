//! Instruction entries: the unit a disassembled program is made of.
//!
//! A program decodes into a flat list of entries. Most entries are a single
//! opcode; a `PUSH` opcode is followed by one [`Data`] entry holding its
//! inline operand:
//! ```text
//! Byte 0:    PUSH (0x21)
//! Bytes 1-8: operand (u64, big-endian)
//! ```
//! The operand occupies its own entry, so it also has its own index.

use crate::opcode::Opcode;

/// Width in bytes of the inline operand that follows `PUSH`.
pub const OPERAND_LEN: usize = 8;

/// Inline operand bytes captured verbatim after a `PUSH` opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Data(pub [u8; OPERAND_LEN]);

impl Data {
    /// Build an operand from a numeric value, big-endian.
    pub fn from_u64(value: u64) -> Self {
        Self(value.to_be_bytes())
    }

    /// Interpret the operand as a big-endian `u64`.
    pub fn as_u64(&self) -> u64 {
        u64::from_be_bytes(self.0)
    }

    /// The raw operand bytes, in stream order.
    pub fn as_bytes(&self) -> &[u8; OPERAND_LEN] {
        &self.0
    }
}

impl From<[u8; OPERAND_LEN]> for Data {
    fn from(bytes: [u8; OPERAND_LEN]) -> Self {
        Self(bytes)
    }
}

/// One entry of a disassembled program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entry {
    /// A decoded opcode.
    Op(Opcode),
    /// The operand of the preceding `PUSH`.
    Data(Data),
}

impl Entry {
    /// First raw byte of this entry.
    pub fn first_byte(&self) -> u8 {
        match self {
            Entry::Op(op) => *op as u8,
            Entry::Data(data) => data.0[0],
        }
    }

    /// Number of bytes this entry occupies in the bytecode.
    pub fn width(&self) -> usize {
        match self {
            Entry::Op(_) => 1,
            Entry::Data(_) => OPERAND_LEN,
        }
    }

    /// Append the raw byte representation of this entry to `buf`.
    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        match self {
            Entry::Op(op) => buf.push(*op as u8),
            Entry::Data(data) => buf.extend_from_slice(&data.0),
        }
    }

    /// Raw byte representation of this entry.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.width());
        self.encode_into(&mut buf);
        buf
    }

    /// The opcode, if this entry is one.
    pub fn opcode(&self) -> Option<Opcode> {
        match self {
            Entry::Op(op) => Some(*op),
            Entry::Data(_) => None,
        }
    }

    /// Returns true if this entry is the jump-destination marker.
    pub fn is_jump_dst(&self) -> bool {
        matches!(self, Entry::Op(Opcode::JumpDst))
    }
}

impl From<Opcode> for Entry {
    fn from(op: Opcode) -> Self {
        Entry::Op(op)
    }
}

impl From<Data> for Entry {
    fn from(data: Data) -> Self {
        Entry::Data(data)
    }
}
