//! Disassembled program and its program counter.

use crate::error::VmError;
use koa_common::Entry;
use tracing::trace;

/// Sequential and indexed access to a disassembled program.
///
/// This is the surface an execution engine drives: step forward with
/// [`next`](AsmReader::next), and before every [`jump`](AsmReader::jump)
/// check the target with [`validate_jump_dst`](AsmReader::validate_jump_dst).
pub trait AsmReader {
    /// Advance the program counter by one and return the entry there.
    ///
    /// Returns `None` when the program counter is already on the last
    /// entry (or the program is empty). The program counter does not move
    /// in that case.
    fn next(&mut self) -> Option<&Entry>;

    /// Move the program counter to `target`.
    ///
    /// # Errors
    ///
    /// [`VmError::InvalidJumpTarget`] if `target` is not an index of the
    /// program. The program counter is left where it was.
    fn jump(&mut self, target: usize) -> Result<(), VmError>;

    /// Returns true if `target` holds the jump-destination marker.
    ///
    /// Operand payloads never qualify, whatever their bytes. Targets past
    /// the end yield `false`.
    fn validate_jump_dst(&self, target: usize) -> bool;
}

/// A disassembled program: entries in address order, a cost accumulator
/// and a program counter.
///
/// Built only by [`disassemble`](crate::disassemble). The entries never
/// change afterwards; traversal only moves the program counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asm {
    /// Entries in bytecode order. Index is the jump address.
    code: Vec<Entry>,
    /// Static cost from the analysis pass.
    cost: u64,
    /// Program counter (entry index). Starts at 0.
    pc: usize,
}

impl Asm {
    pub(crate) fn new(code: Vec<Entry>, cost: u64) -> Self {
        Self { code, cost, pc: 0 }
    }

    /// The entry under the program counter, `None` for an empty program.
    pub fn current(&self) -> Option<&Entry> {
        self.code.get(self.pc)
    }

    /// Current program counter.
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Accumulated static cost.
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.code.len()
    }

    /// Returns true if the program has no entries.
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// All entries in address order.
    pub fn entries(&self) -> &[Entry] {
        &self.code
    }

    /// The entry at `index`, without moving the program counter.
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.code.get(index)
    }

    /// Indices of every jump-destination marker, in ascending order.
    pub fn jump_destinations(&self) -> impl Iterator<Item = usize> + '_ {
        self.code
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.is_jump_dst())
            .map(|(i, _)| i)
    }

    /// Re-encode the program. Always equal to the disassembled input.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.code.iter().map(Entry::width).sum());
        for entry in &self.code {
            entry.encode_into(&mut bytes);
        }
        bytes
    }
}

impl AsmReader for Asm {
    fn next(&mut self) -> Option<&Entry> {
        let next_pc = self.pc + 1;
        if next_pc >= self.code.len() {
            return None;
        }
        self.pc = next_pc;
        self.code.get(next_pc)
    }

    fn jump(&mut self, target: usize) -> Result<(), VmError> {
        if target >= self.code.len() {
            trace!(target, len = self.code.len(), "rejected jump");
            return Err(VmError::InvalidJumpTarget {
                target,
                len: self.code.len(),
            });
        }
        self.pc = target;
        Ok(())
    }

    fn validate_jump_dst(&self, target: usize) -> bool {
        self.code.get(target).is_some_and(Entry::is_jump_dst)
    }
}
