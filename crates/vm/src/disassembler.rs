//! Disassembler: raw bytecode → [`Asm`].
//!
//! One pass, left to right. Every byte is looked up in the opcode
//! catalogue; a PUSH consumes its 8 operand bytes as a separate entry.
//! The first bad byte aborts the pass, so a caller either gets the whole
//! program or an error.

use crate::analysis;
use crate::asm::Asm;
use crate::error::VmError;
use koa_common::{Data, Entry, Opcode, OPERAND_LEN};
use tracing::{debug, instrument};

/// Disassemble raw bytecode into a program ready for traversal.
#[instrument(level = "debug", skip_all, fields(len = bytes.len()))]
pub fn disassemble(bytes: &[u8]) -> Result<Asm, VmError> {
    match decode_entries(bytes) {
        Ok(code) => {
            let cost = analysis::analyze(&code);
            debug!(entries = code.len(), cost, "disassembled");
            Ok(Asm::new(code, cost))
        }
        Err(err) => {
            debug!(%err, "disassembly aborted");
            Err(err)
        }
    }
}

fn decode_entries(bytes: &[u8]) -> Result<Vec<Entry>, VmError> {
    let mut code = Vec::with_capacity(bytes.len());
    let mut offset = 0;

    while offset < bytes.len() {
        let byte = bytes[offset];
        let op = Opcode::try_from(byte).map_err(|_| VmError::InvalidOpcode { byte, offset })?;
        code.push(Entry::Op(op));

        if op == Opcode::Push {
            code.push(Entry::Data(read_operand(bytes, offset)?));
        }
        offset += 1 + op.operand_len();
    }

    Ok(code)
}

/// Read the operand of the PUSH at `offset`.
fn read_operand(bytes: &[u8], offset: usize) -> Result<Data, VmError> {
    let start = offset + 1;
    let operand = bytes
        .get(start..start + OPERAND_LEN)
        .ok_or(VmError::TruncatedOperand {
            offset,
            expected: OPERAND_LEN,
            available: bytes.len() - start,
        })?;

    let mut buf = [0u8; OPERAND_LEN];
    buf.copy_from_slice(operand);
    Ok(Data(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asm::AsmReader;

    fn push_bytes(value: u64) -> Vec<u8> {
        let mut bytes = vec![Opcode::Push as u8];
        bytes.extend_from_slice(&value.to_be_bytes());
        bytes
    }

    #[test]
    fn empty_input() {
        let asm = disassemble(&[]).unwrap();
        assert!(asm.is_empty());
        assert_eq!(asm.cost(), 0);
    }

    #[test]
    fn pop_exit() {
        let mut asm = disassemble(&[0x20, 0x3A]).unwrap();
        assert_eq!(
            asm.entries(),
            &[Entry::Op(Opcode::Pop), Entry::Op(Opcode::Exit)]
        );
        assert_eq!(asm.next(), Some(&Entry::Op(Opcode::Exit)));
        assert_eq!(asm.next(), None);
    }

    #[test]
    fn push_captures_operand_as_separate_entry() {
        let asm = disassemble(&[0x21, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(
            asm.entries(),
            &[
                Entry::Op(Opcode::Push),
                Entry::Data(Data([1, 2, 3, 4, 5, 6, 7, 8])),
            ]
        );
    }

    #[test]
    fn operand_bytes_are_not_decoded_as_opcodes() {
        // 0x00 and 0xFF are not opcodes, but inside an operand they are data.
        let mut bytes = vec![0x21, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF];
        bytes.push(Opcode::Exit as u8);
        let asm = disassemble(&bytes).unwrap();
        assert_eq!(asm.len(), 3);
        assert_eq!(asm.get(2), Some(&Entry::Op(Opcode::Exit)));
    }

    #[test]
    fn push_followed_by_more_code() {
        let mut bytes = push_bytes(7);
        bytes.extend_from_slice(&push_bytes(9));
        bytes.push(Opcode::Add as u8);
        bytes.push(Opcode::Exit as u8);

        let asm = disassemble(&bytes).unwrap();
        assert_eq!(asm.len(), 6);
        assert_eq!(asm.get(1), Some(&Entry::Data(Data::from_u64(7))));
        assert_eq!(asm.get(3), Some(&Entry::Data(Data::from_u64(9))));
        assert_eq!(asm.get(4), Some(&Entry::Op(Opcode::Add)));
    }

    #[test]
    fn invalid_opcode_reports_offset() {
        let err = disassemble(&[0x20, 0x20, 0x00, 0x3A]).unwrap_err();
        assert_eq!(
            err,
            VmError::InvalidOpcode {
                byte: 0x00,
                offset: 2
            }
        );
    }

    #[test]
    fn invalid_opcode_after_push_operand() {
        let mut bytes = push_bytes(1);
        bytes.push(0xEE);
        let err = disassemble(&bytes).unwrap_err();
        assert_eq!(
            err,
            VmError::InvalidOpcode {
                byte: 0xEE,
                offset: 9
            }
        );
    }

    #[test]
    fn truncated_operand() {
        let err = disassemble(&[0x20, 0x21, 1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            VmError::TruncatedOperand {
                offset: 1,
                expected: 8,
                available: 3
            }
        );
    }

    #[test]
    fn push_at_end_of_input() {
        let err = disassemble(&[0x21]).unwrap_err();
        assert_eq!(
            err,
            VmError::TruncatedOperand {
                offset: 0,
                expected: 8,
                available: 0
            }
        );
    }

    #[test]
    fn seven_operand_bytes_is_still_truncated() {
        let bytes = [0x21, 0, 0, 0, 0, 0, 0, 0];
        assert!(matches!(
            disassemble(&bytes),
            Err(VmError::TruncatedOperand { available: 7, .. })
        ));
    }

    #[test]
    fn roundtrip_reproduces_input() {
        let mut bytes = vec![Opcode::JumpDst as u8];
        bytes.extend_from_slice(&push_bytes(u64::MAX));
        bytes.extend_from_slice(&[0x28, 0x01, 0x14, 0x3A]);
        assert_eq!(disassemble(&bytes).unwrap().to_bytes(), bytes);
    }
}
