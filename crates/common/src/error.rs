//! Decode errors for Koa bytecode.

use thiserror::Error;

/// Errors that occur when decoding a single byte against the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Byte value is not registered in the opcode catalogue.
    #[error("invalid opcode: {0:#04x}")]
    InvalidOpcode(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_opcode() {
        assert_eq!(
            DecodeError::InvalidOpcode(0x08).to_string(),
            "invalid opcode: 0x08"
        );
    }

    #[test]
    fn display_uses_lowercase_hex() {
        assert_eq!(
            DecodeError::InvalidOpcode(0xAB).to_string(),
            "invalid opcode: 0xab"
        );
    }
}
