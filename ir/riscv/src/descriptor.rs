/*++

Licensed under the Apache-2.0 license.

File Name:

    descriptor.rs

Abstract:

    File contains the instruction descriptor model. A descriptor pairs an
    opcode's match/mask pattern with the field codecs of its operand slots.

--*/

use crate::opcode::{IsaExt, Opcode};
use crate::operand::OpndSize;
use crate::table::INSTR_TABLE;
use rvdbt_ir_types::CodecError;

/// Field codec selector. Names the bit layout an operand is scattered over.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Fld {
    None,

    // 32-bit register fields
    Rd,
    RdFp,
    Rs1,
    Rs1Fp,
    Base,
    Rs2,
    Rs2Fp,
    Rs3,

    // 32-bit immediate-like fields
    Fm,
    Pred,
    Succ,
    Aqrl,
    Csr,
    Rm,
    Shamt,
    Shamt5,
    Shamt6,
    IImm,
    SImm,
    BImm,
    UImm,
    UImmPc,
    JImm,

    // compressed register fields
    Crd,
    CrdFp,
    Crs1,
    Crs2,
    Crs2Fp,
    CrdLim,
    CrdLimFp,
    Crs1Lim,
    Crs2Lim,
    Crs2LimFp,
    CrdCa,

    // compressed immediate fields
    Cshamt,
    CsrImm,
    Caddi16spImm,
    ClwspImm,
    CldspImm,
    CluiImm,
    CswspImm,
    CsdspImm,
    CiwImm,
    ClwImm,
    CldImm,
    CswImm,
    CsdImm,
    Cimm5,
    CbImm,
    CjImm,

    // virtual fields folding a base register and displacement into one
    // memory operand
    VlRs1Disp,
    VsRs1Disp,
}

/// One operand slot of a descriptor.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct OpndSpec {
    pub fld: Fld,
    pub size: OpndSize,
}

/// Descriptor of a single instruction pattern.
#[derive(Debug, PartialEq, Eq)]
pub struct InstrDescriptor {
    pub opcode: Opcode,
    pub name: &'static str,
    pub ext: IsaExt,
    /// Fixed bits of the encoding.
    pub match_bits: u32,
    /// Mask selecting the fixed bits. `word & mask == match` identifies the
    /// instruction.
    pub mask_bits: u32,
    pub dsts: &'static [OpndSpec],
    pub srcs: &'static [OpndSpec],
}

impl InstrDescriptor {
    /// Check the raw word against this descriptor's fixed bits.
    pub fn matches(&self, word: u32) -> bool {
        (word & self.mask_bits) == self.match_bits
    }

    pub fn is_compressed(&self) -> bool {
        self.ext == IsaExt::C
    }
}

/// Fetch a descriptor by table index, as produced by dispatch.
pub(crate) fn lookup(index: usize) -> Result<&'static InstrDescriptor, CodecError> {
    INSTR_TABLE
        .get(index)
        .ok_or_else(|| CodecError::bad_descriptor(index as u64))
}

/// Fetch the descriptor of an opcode, or `None` for the invalid sentinel.
pub fn lookup_descriptor(opcode: Opcode) -> Option<&'static InstrDescriptor> {
    if opcode == Opcode::Invalid {
        return None;
    }
    INSTR_TABLE.get(u32::from(opcode) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instr::{MAX_DSTS, MAX_SRCS};

    #[test]
    fn test_lookup_by_opcode() {
        let desc = lookup_descriptor(Opcode::Add).unwrap();
        assert_eq!(desc.opcode, Opcode::Add);
        assert_eq!(desc.name, "add");
        assert!(lookup_descriptor(Opcode::Invalid).is_none());
    }

    #[test]
    fn test_lookup_by_index() {
        assert_eq!(lookup(0).unwrap().opcode, Opcode::Unimp);
        assert!(lookup(INSTR_TABLE.len()).is_err());
    }

    #[test]
    fn test_matches() {
        let desc = lookup_descriptor(Opcode::Addi).unwrap();
        assert!(desc.matches(0x0017_0793)); // addi a5, a4, 1
        assert!(!desc.matches(0x0017_1793)); // slli a5, a4, 1
    }

    #[test]
    fn test_table_invariants() {
        for (index, desc) in INSTR_TABLE.iter().enumerate() {
            // table position is the opcode value
            assert_eq!(u32::from(desc.opcode) as usize, index, "{}", desc.name);
            // fixed bits must lie inside the mask
            assert_eq!(
                desc.match_bits & !desc.mask_bits,
                0,
                "{}: match bits outside mask",
                desc.name
            );
            assert!(desc.dsts.len() <= MAX_DSTS, "{}", desc.name);
            assert!(desc.srcs.len() <= MAX_SRCS, "{}", desc.name);
            // no slot is the unset sentinel
            for spec in desc.dsts.iter().chain(desc.srcs.iter()) {
                assert_ne!(spec.fld, Fld::None, "{}", desc.name);
            }
            if desc.is_compressed() {
                assert_eq!(desc.match_bits >> 16, 0, "{}", desc.name);
                assert_eq!(desc.mask_bits >> 16, 0, "{}", desc.name);
            } else {
                // uncompressed encodings keep the 32-bit length prefix
                assert_eq!(desc.match_bits & 0b11, 0b11, "{}", desc.name);
            }
        }
    }
}
