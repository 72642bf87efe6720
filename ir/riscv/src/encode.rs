/*++

Licensed under the Apache-2.0 license.

File Name:

    encode.rs

Abstract:

    File contains the encode orchestrator. Encoding starts from the
    descriptor's fixed bits and scatters each operand slot into place.

--*/

use crate::descriptor::lookup_descriptor;
use crate::fields::encode_fld;
use crate::instr::Instr;
use crate::operand::Operand;
use rvdbt_ir_types::{CodecError, RvAddr, RvWord};

/// Encode `instr` for placement at `pc`.
///
/// Compressed instructions occupy the low 16 bits of the returned word; the
/// caller emits `instr.length()` bytes, little-endian.
pub fn encode(instr: &Instr, pc: RvAddr) -> Result<RvWord, CodecError> {
    let desc = lookup_descriptor(instr.opcode())
        .ok_or_else(|| CodecError::bad_descriptor(u64::MAX))?;
    if instr.num_dsts() != desc.dsts.len() || instr.num_srcs() != desc.srcs.len() {
        return Err(CodecError::operand_mismatch(0));
    }

    let mut word = desc.match_bits;
    for (slot, spec) in desc.dsts.iter().enumerate() {
        let opnd = instr.dst(slot).unwrap_or(&Operand::None);
        encode_fld(spec.fld, opnd, pc, slot, &mut word)?;
    }
    for (slot, spec) in desc.srcs.iter().enumerate() {
        let opnd = instr.src(slot).unwrap_or(&Operand::None);
        encode_fld(spec.fld, opnd, pc, slot, &mut word)?;
    }
    if desc.is_compressed() {
        word &= 0xffff;
    }
    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcode::Opcode;
    use crate::operand::{OpndSize, Target};
    use crate::reg::XReg;
    use rvdbt_ir_types::CodecErrorCause;

    #[test]
    fn test_encode_addi() {
        let mut instr = Instr::new(Opcode::Addi);
        instr.set_dst(0, Operand::reg_x(XReg::X10));
        instr.set_src(0, Operand::reg_x(XReg::X10));
        instr.set_src(1, Operand::imm(1, OpndSize::Bits12));
        assert_eq!(encode(&instr, 0).unwrap(), 0x0015_0513);
    }

    #[test]
    fn test_encode_compressed_clears_high_half() {
        let mut instr = Instr::new(Opcode::CLi);
        instr.set_dst(0, Operand::reg_x(XReg::X10));
        instr.set_src(0, Operand::imm(0, OpndSize::Bits6));
        let word = encode(&instr, 0).unwrap();
        assert_eq!(word, 0x4501);
        assert_eq!(word >> 16, 0);
    }

    #[test]
    fn test_encode_no_operand_opcodes() {
        assert_eq!(encode(&Instr::new(Opcode::Ecall), 0).unwrap(), 0x0000_0073);
        assert_eq!(encode(&Instr::new(Opcode::Unimp), 0).unwrap(), 0x0000);
        assert_eq!(encode(&Instr::new(Opcode::CEbreak), 0).unwrap(), 0x9002);
    }

    #[test]
    fn test_encode_branch_pc_sensitive() {
        let mut instr = Instr::new(Opcode::Jal);
        instr.set_dst(0, Operand::reg_x(XReg::X1));
        instr.set_src(
            0,
            Operand::pcrel(0, Target::Resolved(0x5800), OpndSize::Half),
        );
        assert_eq!(encode(&instr, 0x5000).unwrap(), 0x0010_00ef);
        // same record placed elsewhere produces a different displacement
        assert_eq!(encode(&instr, 0x5800).unwrap(), 0x0000_00ef);
    }

    #[test]
    fn test_encode_rejects_unset_slot() {
        let mut instr = Instr::new(Opcode::Addi);
        instr.set_dst(0, Operand::reg_x(XReg::X10));
        instr.set_src(0, Operand::reg_x(XReg::X10));
        // src 1 left as Operand::None
        let err = encode(&instr, 0).unwrap_err();
        assert_eq!(err.cause(), CodecErrorCause::OperandMismatch);
    }

    #[test]
    fn test_encode_invalid_opcode() {
        let err = encode(&Instr::new(Opcode::Invalid), 0).unwrap_err();
        assert_eq!(err.cause(), CodecErrorCause::BadDescriptor);
    }
}
