/*++

Licensed under the Apache-2.0 license.

File Name:

    error.rs

Abstract:

    File contains the error type surfaced by the instruction codec.

--*/

use crate::ir_enum;

ir_enum! {
    /// Instruction codec error cause
    #[derive(Debug, PartialOrd, Ord, PartialEq, Eq, Clone, Copy)]
    pub CodecErrorCause;
    u32;
    {
        /// The first 16 bits match no known length-prefix pattern
        UnclassifiableWidth = 0,

        /// The byte stream ended before the classified width was available
        TruncatedInstr = 1,

        /// No opcode matches the raw word (dispatch miss or match/mask
        /// validation failure)
        UnknownInstr = 2,

        /// A field codec could not decode its operand
        OperandFault = 3,

        /// A descriptor index or operand-slot tag is out of range
        BadDescriptor = 4,

        /// A PC-relative operand has no concrete target address yet
        UnresolvedTarget = 5,

        /// An immediate or displacement does not fit its encoding field
        OperandOutOfRange = 6,

        /// The record operand kind does not match the descriptor slot
        OperandMismatch = 7,
    };
    Invalid
}

/// Instruction codec error
///
/// Errors carry the offending raw word, descriptor index or operand value in
/// `info`. All recovery policy belongs to the caller; the codec never retries
/// or substitutes a default instruction.
#[derive(Debug, Eq, PartialEq)]
pub struct CodecError {
    /// Error cause
    cause: CodecErrorCause,

    /// Info
    info: u64,
}

impl CodecError {
    /// Create a new unclassifiable width error
    pub fn unclassifiable_width(first_half: u16) -> Self {
        CodecError::new(CodecErrorCause::UnclassifiableWidth, first_half.into())
    }

    /// Create a new truncated instruction error
    pub fn truncated_instr(avail: usize) -> Self {
        CodecError::new(CodecErrorCause::TruncatedInstr, avail as u64)
    }

    /// Create a new unknown instruction error
    pub fn unknown_instr(word: u32) -> Self {
        CodecError::new(CodecErrorCause::UnknownInstr, word.into())
    }

    /// Create a new operand fault error
    pub fn operand_fault(word: u32) -> Self {
        CodecError::new(CodecErrorCause::OperandFault, word.into())
    }

    /// Create a new bad descriptor error
    pub fn bad_descriptor(index: u64) -> Self {
        CodecError::new(CodecErrorCause::BadDescriptor, index)
    }

    /// Create a new unresolved target error
    pub fn unresolved_target() -> Self {
        CodecError::new(CodecErrorCause::UnresolvedTarget, 0)
    }

    /// Create a new operand out of range error
    pub fn operand_out_of_range(value: i64) -> Self {
        CodecError::new(CodecErrorCause::OperandOutOfRange, value as u64)
    }

    /// Create a new operand mismatch error
    pub fn operand_mismatch(slot: usize) -> Self {
        CodecError::new(CodecErrorCause::OperandMismatch, slot as u64)
    }

    /// Returns the error cause
    pub fn cause(&self) -> CodecErrorCause {
        self.cause
    }

    /// Returns the error info
    pub fn info(&self) -> u64 {
        self.info
    }

    /// Create new error
    ///
    /// # Arguments
    ///
    /// * `cause` - Error cause
    /// * `info` - Information associated with the error
    fn new(cause: CodecErrorCause, info: u64) -> Self {
        Self { cause, info }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unclassifiable_width() {
        let e = CodecError::unclassifiable_width(u16::MAX);
        assert_eq!(e.cause(), CodecErrorCause::UnclassifiableWidth);
        assert_eq!(e.info(), u16::MAX as u64);
    }

    #[test]
    fn test_truncated_instr() {
        let e = CodecError::truncated_instr(3);
        assert_eq!(e.cause(), CodecErrorCause::TruncatedInstr);
        assert_eq!(e.info(), 3);
    }

    #[test]
    fn test_unknown_instr() {
        let e = CodecError::unknown_instr(u32::MAX);
        assert_eq!(e.cause(), CodecErrorCause::UnknownInstr);
        assert_eq!(e.info(), u32::MAX as u64);
    }

    #[test]
    fn test_operand_fault() {
        let e = CodecError::operand_fault(u32::MAX);
        assert_eq!(e.cause(), CodecErrorCause::OperandFault);
        assert_eq!(e.info(), u32::MAX as u64);
    }

    #[test]
    fn test_bad_descriptor() {
        let e = CodecError::bad_descriptor(42);
        assert_eq!(e.cause(), CodecErrorCause::BadDescriptor);
        assert_eq!(e.info(), 42);
    }

    #[test]
    fn test_unresolved_target() {
        let e = CodecError::unresolved_target();
        assert_eq!(e.cause(), CodecErrorCause::UnresolvedTarget);
        assert_eq!(e.info(), 0);
    }

    #[test]
    fn test_operand_out_of_range() {
        let e = CodecError::operand_out_of_range(-1);
        assert_eq!(e.cause(), CodecErrorCause::OperandOutOfRange);
        assert_eq!(e.info(), u64::MAX);
    }

    #[test]
    fn test_operand_mismatch() {
        let e = CodecError::operand_mismatch(2);
        assert_eq!(e.cause(), CodecErrorCause::OperandMismatch);
        assert_eq!(e.info(), 2);
    }
}
