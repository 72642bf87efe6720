/*++

Licensed under the Apache-2.0 license.

File Name:

    instr.rs

Abstract:

    File contains the decoded instruction record.

--*/

use crate::descriptor::lookup_descriptor;
use crate::opcode::{IsaExt, Opcode};
use crate::operand::Operand;
use rvdbt_ir_types::{RvAddr, RvWord};

/// Maximum destination operand slots of any instruction.
pub const MAX_DSTS: usize = 2;

/// Maximum source operand slots of any instruction.
pub const MAX_SRCS: usize = 4;

/// A decoded (or synthesized) instruction.
///
/// `pc` is always the logical address the instruction belongs to, even when
/// the bytes were read from a relocated copy. `raw` caches the encoded word
/// and is only present when the record still matches bytes decoded in place.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Instr {
    pub(crate) opcode: Opcode,
    pub(crate) dsts: [Operand; MAX_DSTS],
    pub(crate) srcs: [Operand; MAX_SRCS],
    pub(crate) ndst: u8,
    pub(crate) nsrc: u8,
    pub(crate) length: u8,
    pub(crate) pc: RvAddr,
    pub(crate) raw: Option<RvWord>,
}

impl Instr {
    /// Create an empty record for `opcode` with operand counts taken from its
    /// descriptor. Operand slots start out as `Operand::None` and must be
    /// filled in before encoding.
    pub fn new(opcode: Opcode) -> Self {
        let (ndst, nsrc, length) = match lookup_descriptor(opcode) {
            Some(desc) => {
                let length = if desc.ext == IsaExt::C { 2 } else { 4 };
                (desc.dsts.len() as u8, desc.srcs.len() as u8, length)
            }
            None => (0, 0, 0),
        };
        Self {
            opcode,
            dsts: [Operand::None; MAX_DSTS],
            srcs: [Operand::None; MAX_SRCS],
            ndst,
            nsrc,
            length,
            pc: 0,
            raw: None,
        }
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn num_dsts(&self) -> usize {
        self.ndst as usize
    }

    pub fn num_srcs(&self) -> usize {
        self.nsrc as usize
    }

    pub fn dst(&self, index: usize) -> Option<&Operand> {
        if index < self.num_dsts() {
            self.dsts.get(index)
        } else {
            None
        }
    }

    pub fn src(&self, index: usize) -> Option<&Operand> {
        if index < self.num_srcs() {
            self.srcs.get(index)
        } else {
            None
        }
    }

    /// Replace a destination operand. Invalidates the raw-bits cache.
    pub fn set_dst(&mut self, index: usize, opnd: Operand) {
        if index < self.num_dsts() {
            self.dsts[index] = opnd;
            self.raw = None;
        }
    }

    /// Replace a source operand. Invalidates the raw-bits cache.
    pub fn set_src(&mut self, index: usize, opnd: Operand) {
        if index < self.num_srcs() {
            self.srcs[index] = opnd;
            self.raw = None;
        }
    }

    /// Encoded length in bytes.
    pub fn length(&self) -> usize {
        self.length as usize
    }

    /// Logical address of the instruction.
    pub fn pc(&self) -> RvAddr {
        self.pc
    }

    pub fn set_pc(&mut self, pc: RvAddr) {
        self.pc = pc;
    }

    /// The raw encoding, if the record was decoded in place and has not been
    /// modified since.
    pub fn raw_bits(&self) -> Option<RvWord> {
        self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operand::{Operand, OpndSize};
    use crate::reg::XReg;

    #[test]
    fn test_new_record() {
        let instr = Instr::new(Opcode::Add);
        assert_eq!(instr.opcode(), Opcode::Add);
        assert_eq!(instr.num_dsts(), 1);
        assert_eq!(instr.num_srcs(), 2);
        assert_eq!(instr.length(), 4);
        assert_eq!(instr.dst(0), Some(&Operand::None));
        assert_eq!(instr.src(2), None);
        assert_eq!(instr.raw_bits(), None);
    }

    #[test]
    fn test_compressed_length() {
        let instr = Instr::new(Opcode::CAddi);
        assert_eq!(instr.length(), 2);
    }

    #[test]
    fn test_set_operand_invalidates_raw() {
        let mut instr = Instr::new(Opcode::Addi);
        instr.raw = Some(0x0000_0013);
        instr.set_src(0, Operand::reg_x(XReg::X7));
        assert_eq!(instr.raw_bits(), None);

        instr.raw = Some(0x0000_0013);
        instr.set_src(1, Operand::imm(1, OpndSize::Bits12));
        assert_eq!(instr.raw_bits(), None);
    }

    #[test]
    fn test_out_of_range_slot_ignored() {
        let mut instr = Instr::new(Opcode::Addi);
        instr.raw = Some(0x0000_0013);
        instr.set_src(3, Operand::reg_x(XReg::X7));
        assert_eq!(instr.raw_bits(), Some(0x0000_0013));
    }
}
