/*++

Licensed under the Apache-2.0 license.

File Name:

    fields.rs

Abstract:

    File contains the field codecs. Each `Fld` tag names one bit layout; the
    decoder turns the raw bits into an operand and the encoder scatters an
    operand back, rejecting values the field cannot represent.

--*/

use crate::bits::{fits_signed, fits_unsigned, get_field, set_field};
use crate::descriptor::Fld;
use crate::fmt16::{CAddi16spFmt, CbFmt, CiFmt, CiSpFmt, CiwFmt, CjFmt, ClsFmt, CrFmt, CssFmt};
use crate::fmt32::{FmtB, FmtI, FmtJ, FmtR, FmtS, FmtU};
use crate::operand::{Operand, OpndSize, RvReg, Target};
use crate::reg::{FReg, XReg};
use rvdbt_ir_types::{CodecError, RvAddr};

fn xreg(val: u32) -> XReg {
    XReg::from(val)
}

fn freg(val: u32) -> FReg {
    FReg::from(val)
}

/// Limited register fields encode x8..x15 (f8..f15) in three bits.
fn xreg_lim(val: u32) -> XReg {
    XReg::from(val + 8)
}

fn freg_lim(val: u32) -> FReg {
    FReg::from(val + 8)
}

fn pcrel(offset: i32, orig_pc: RvAddr, size: OpndSize) -> Operand {
    let target = orig_pc.wrapping_add(offset as i64 as u64);
    Operand::pcrel(offset, Target::Resolved(target), size)
}

/// Decode the field `fld` of `word` into an operand.
///
/// `orig_pc` anchors PC-relative fields; it differs from the address the
/// bytes were read at only when decoding a relocated copy.
pub(crate) fn decode_fld(
    fld: Fld,
    word: u32,
    size: OpndSize,
    _pc: RvAddr,
    orig_pc: RvAddr,
) -> Result<Operand, CodecError> {
    let opnd = match fld {
        Fld::None => return Err(CodecError::bad_descriptor(word as u64)),

        Fld::Rd => Operand::reg_x(xreg(FmtR(word).rd())),
        Fld::RdFp => Operand::reg_f(freg(FmtR(word).rd())),
        Fld::Rs1 => Operand::reg_x(xreg(FmtR(word).rs1())),
        Fld::Rs1Fp => Operand::reg_f(freg(FmtR(word).rs1())),
        Fld::Base => Operand::base_disp(xreg(FmtR(word).rs1()), 0, size),
        Fld::Rs2 => Operand::reg_x(xreg(FmtR(word).rs2())),
        Fld::Rs2Fp => Operand::reg_f(freg(FmtR(word).rs2())),
        Fld::Rs3 => Operand::reg_f(freg(FmtR(word).rs3())),

        Fld::Fm => Operand::imm_dec(FmtI(word).fm() as i64, size),
        Fld::Pred => Operand::imm_dec(FmtI(word).pred() as i64, size),
        Fld::Succ => Operand::imm_dec(FmtI(word).succ() as i64, size),
        Fld::Aqrl => Operand::imm_dec(FmtR(word).aqrl() as i64, size),
        Fld::Csr => Operand::imm(FmtI(word).uimm() as i64, size),
        Fld::Rm => {
            let rm = FmtR(word).rm();
            // 0b101 and 0b110 are reserved rounding modes
            if rm == 0b101 || rm == 0b110 {
                return Err(CodecError::operand_fault(word));
            }
            Operand::imm_dec(rm as i64, size)
        }
        Fld::Shamt => Operand::imm_dec(FmtI(word).shamt() as i64, size),
        Fld::Shamt5 => Operand::imm_dec(FmtI(word).shamt5() as i64, size),
        Fld::Shamt6 => Operand::imm_dec(FmtI(word).shamt6() as i64, size),
        Fld::IImm => Operand::imm(FmtI(word).imm() as i64, size),
        Fld::SImm => Operand::imm(FmtS(word).imm() as i64, size),
        Fld::BImm => pcrel(FmtB(word).imm(), orig_pc, size),
        Fld::UImm => Operand::imm(FmtU(word).imm() as i64, size),
        Fld::UImmPc => pcrel((FmtU(word).imm() << 12) as i32, orig_pc, size),
        Fld::JImm => pcrel(FmtJ(word).imm(), orig_pc, size),

        Fld::Crd | Fld::Crs1 => Operand::reg_x(xreg(CrFmt(word).rd())),
        Fld::CrdFp => Operand::reg_f(freg(CrFmt(word).rd())),
        Fld::Crs2 => Operand::reg_x(xreg(CrFmt(word).rs2())),
        Fld::Crs2Fp => Operand::reg_f(freg(CrFmt(word).rs2())),
        Fld::CrdLim | Fld::Crs2Lim => Operand::reg_x(xreg_lim(ClsFmt(word).reg_lim())),
        Fld::CrdLimFp | Fld::Crs2LimFp => Operand::reg_f(freg_lim(ClsFmt(word).reg_lim())),
        Fld::Crs1Lim | Fld::CrdCa => Operand::reg_x(xreg_lim(ClsFmt(word).rs1_lim())),

        Fld::Cshamt => Operand::imm_dec(CiFmt(word).uimm() as i64, size),
        Fld::CsrImm => Operand::imm_dec(get_field(word, 19, 15) as i64, size),
        Fld::Caddi16spImm => {
            let imm = CAddi16spFmt(word).imm();
            // zero is a reserved encoding
            if imm == 0 {
                return Err(CodecError::operand_fault(word));
            }
            Operand::imm(imm as i64, size)
        }
        Fld::ClwspImm => Operand::base_disp(XReg::X2, CiSpFmt(word).uimm_w() as i32, size),
        Fld::CldspImm => Operand::base_disp(XReg::X2, CiSpFmt(word).uimm_d() as i32, size),
        Fld::CluiImm => {
            let imm = CiFmt(word).imm();
            // zero is a reserved encoding
            if imm == 0 {
                return Err(CodecError::operand_fault(word));
            }
            Operand::imm(imm as i64, size)
        }
        Fld::CswspImm => Operand::base_disp(XReg::X2, CssFmt(word).uimm_w() as i32, size),
        Fld::CsdspImm => Operand::base_disp(XReg::X2, CssFmt(word).uimm_d() as i32, size),
        Fld::CiwImm => {
            let uimm = CiwFmt(word).uimm();
            // zero would alias the canonical illegal instruction
            if uimm == 0 {
                return Err(CodecError::operand_fault(word));
            }
            Operand::imm(uimm as i64, size)
        }
        Fld::ClwImm | Fld::CswImm => {
            Operand::base_disp(xreg_lim(ClsFmt(word).rs1_lim()), ClsFmt(word).uimm_w() as i32, size)
        }
        Fld::CldImm | Fld::CsdImm => {
            Operand::base_disp(xreg_lim(ClsFmt(word).rs1_lim()), ClsFmt(word).uimm_d() as i32, size)
        }
        Fld::Cimm5 => Operand::imm(CiFmt(word).imm() as i64, size),
        Fld::CbImm => pcrel(CbFmt(word).offset(), orig_pc, size),
        Fld::CjImm => pcrel(CjFmt(word).offset(), orig_pc, size),

        Fld::VlRs1Disp => Operand::base_disp(xreg(FmtR(word).rs1()), FmtI(word).imm(), size),
        Fld::VsRs1Disp => Operand::base_disp(xreg(FmtR(word).rs1()), FmtS(word).imm(), size),
    };
    Ok(opnd)
}

fn expect_xreg(opnd: &Operand, slot: usize) -> Result<u32, CodecError> {
    match opnd {
        Operand::Reg(RvReg::X(reg)) if *reg != XReg::Invalid => Ok(u32::from(*reg)),
        _ => Err(CodecError::operand_mismatch(slot)),
    }
}

fn expect_freg(opnd: &Operand, slot: usize) -> Result<u32, CodecError> {
    match opnd {
        Operand::Reg(RvReg::F(reg)) if *reg != FReg::Invalid => Ok(u32::from(*reg)),
        _ => Err(CodecError::operand_mismatch(slot)),
    }
}

fn expect_xreg_lim(opnd: &Operand, slot: usize) -> Result<u32, CodecError> {
    let val = expect_xreg(opnd, slot)?;
    if !(8..=15).contains(&val) {
        return Err(CodecError::operand_out_of_range(val as i64));
    }
    Ok(val - 8)
}

fn expect_freg_lim(opnd: &Operand, slot: usize) -> Result<u32, CodecError> {
    let val = expect_freg(opnd, slot)?;
    if !(8..=15).contains(&val) {
        return Err(CodecError::operand_out_of_range(val as i64));
    }
    Ok(val - 8)
}

fn expect_imm(opnd: &Operand, slot: usize) -> Result<i64, CodecError> {
    match opnd {
        Operand::Imm { value, .. } => Ok(*value),
        _ => Err(CodecError::operand_mismatch(slot)),
    }
}

fn expect_base_disp(opnd: &Operand, slot: usize) -> Result<(XReg, i64), CodecError> {
    match opnd {
        Operand::BaseDisp { base, disp, .. } if *base != XReg::Invalid => {
            Ok((*base, *disp as i64))
        }
        _ => Err(CodecError::operand_mismatch(slot)),
    }
}

fn expect_sp_disp(opnd: &Operand, slot: usize) -> Result<i64, CodecError> {
    let (base, disp) = expect_base_disp(opnd, slot)?;
    // stack-pointer-relative layouts have no base register bits
    if base != XReg::X2 {
        return Err(CodecError::operand_mismatch(slot));
    }
    Ok(disp)
}

/// Distance from `pc` to the resolved target of a PC-relative operand.
fn expect_target(opnd: &Operand, pc: RvAddr, slot: usize) -> Result<i64, CodecError> {
    match opnd {
        Operand::Pcrel {
            target: Target::Resolved(addr),
            ..
        } => Ok(addr.wrapping_sub(pc) as i64),
        Operand::Pcrel {
            target: Target::Pending,
            ..
        } => Err(CodecError::unresolved_target()),
        _ => Err(CodecError::operand_mismatch(slot)),
    }
}

fn check_signed(val: i64, bits: u32, align: i64) -> Result<i64, CodecError> {
    if !fits_signed(val, bits) || val & (align - 1) != 0 {
        return Err(CodecError::operand_out_of_range(val));
    }
    Ok(val)
}

fn check_unsigned(val: i64, bits: u32, align: i64) -> Result<i64, CodecError> {
    if !fits_unsigned(val, bits) || val & (align - 1) != 0 {
        return Err(CodecError::operand_out_of_range(val));
    }
    Ok(val)
}

fn check_unsigned_nz(val: i64, bits: u32, align: i64) -> Result<i64, CodecError> {
    if val == 0 {
        return Err(CodecError::operand_out_of_range(val));
    }
    check_unsigned(val, bits, align)
}

/// Encode operand `opnd` into the field `fld` of `word`.
///
/// Values that do not fit the field are rejected, never truncated. `pc` is
/// the address the encoded instruction will live at.
pub(crate) fn encode_fld(
    fld: Fld,
    opnd: &Operand,
    pc: RvAddr,
    slot: usize,
    word: &mut u32,
) -> Result<(), CodecError> {
    match fld {
        Fld::None => return Err(CodecError::bad_descriptor(slot as u64)),

        Fld::Rd => {
            let val = expect_xreg(opnd, slot)?;
            let mut fmt = FmtR(*word);
            fmt.set_rd(val);
            *word = fmt.0;
        }
        Fld::RdFp => {
            let val = expect_freg(opnd, slot)?;
            let mut fmt = FmtR(*word);
            fmt.set_rd(val);
            *word = fmt.0;
        }
        Fld::Rs1 => {
            let val = expect_xreg(opnd, slot)?;
            let mut fmt = FmtR(*word);
            fmt.set_rs1(val);
            *word = fmt.0;
        }
        Fld::Rs1Fp => {
            let val = expect_freg(opnd, slot)?;
            let mut fmt = FmtR(*word);
            fmt.set_rs1(val);
            *word = fmt.0;
        }
        Fld::Base => {
            let (base, disp) = expect_base_disp(opnd, slot)?;
            if disp != 0 {
                return Err(CodecError::operand_out_of_range(disp));
            }
            let mut fmt = FmtR(*word);
            fmt.set_rs1(u32::from(base));
            *word = fmt.0;
        }
        Fld::Rs2 => {
            let val = expect_xreg(opnd, slot)?;
            let mut fmt = FmtR(*word);
            fmt.set_rs2(val);
            *word = fmt.0;
        }
        Fld::Rs2Fp => {
            let val = expect_freg(opnd, slot)?;
            let mut fmt = FmtR(*word);
            fmt.set_rs2(val);
            *word = fmt.0;
        }
        Fld::Rs3 => {
            let val = expect_freg(opnd, slot)?;
            let mut fmt = FmtR(*word);
            fmt.set_rs3(val);
            *word = fmt.0;
        }

        Fld::Fm => {
            let val = check_unsigned(expect_imm(opnd, slot)?, 4, 1)?;
            let mut fmt = FmtI(*word);
            fmt.set_fm(val as u32);
            *word = fmt.0;
        }
        Fld::Pred => {
            let val = check_unsigned(expect_imm(opnd, slot)?, 4, 1)?;
            let mut fmt = FmtI(*word);
            fmt.set_pred(val as u32);
            *word = fmt.0;
        }
        Fld::Succ => {
            let val = check_unsigned(expect_imm(opnd, slot)?, 4, 1)?;
            let mut fmt = FmtI(*word);
            fmt.set_succ(val as u32);
            *word = fmt.0;
        }
        Fld::Aqrl => {
            let val = check_unsigned(expect_imm(opnd, slot)?, 2, 1)?;
            let mut fmt = FmtR(*word);
            fmt.set_aqrl(val as u32);
            *word = fmt.0;
        }
        Fld::Csr => {
            let val = check_unsigned(expect_imm(opnd, slot)?, 12, 1)?;
            let mut fmt = FmtI(*word);
            fmt.set_uimm(val as u32);
            *word = fmt.0;
        }
        Fld::Rm => {
            let val = check_unsigned(expect_imm(opnd, slot)?, 3, 1)?;
            if val == 0b101 || val == 0b110 {
                return Err(CodecError::operand_out_of_range(val));
            }
            let mut fmt = FmtR(*word);
            fmt.set_rm(val as u32);
            *word = fmt.0;
        }
        Fld::Shamt => {
            let val = check_unsigned(expect_imm(opnd, slot)?, 6, 1)?;
            let mut fmt = FmtI(*word);
            fmt.set_shamt(val as u32);
            *word = fmt.0;
        }
        Fld::Shamt5 => {
            let val = check_unsigned(expect_imm(opnd, slot)?, 5, 1)?;
            let mut fmt = FmtI(*word);
            fmt.set_shamt5(val as u32);
            *word = fmt.0;
        }
        Fld::Shamt6 => {
            let val = check_unsigned(expect_imm(opnd, slot)?, 7, 1)?;
            let mut fmt = FmtI(*word);
            fmt.set_shamt6(val as u32);
            *word = fmt.0;
        }
        Fld::IImm => {
            let val = check_signed(expect_imm(opnd, slot)?, 12, 1)?;
            let mut fmt = FmtI(*word);
            fmt.set_imm(val as i32);
            *word = fmt.0;
        }
        Fld::SImm => {
            let val = check_signed(expect_imm(opnd, slot)?, 12, 1)?;
            let mut fmt = FmtS(*word);
            fmt.set_imm(val as i32);
            *word = fmt.0;
        }
        Fld::BImm => {
            let delta = check_signed(expect_target(opnd, pc, slot)?, 13, 2)?;
            let mut fmt = FmtB(*word);
            fmt.set_imm(delta as i32);
            *word = fmt.0;
        }
        Fld::UImm => {
            let val = check_unsigned(expect_imm(opnd, slot)?, 20, 1)?;
            let mut fmt = FmtU(*word);
            fmt.set_imm(val as u32);
            *word = fmt.0;
        }
        Fld::UImmPc => {
            let delta = check_signed(expect_target(opnd, pc, slot)?, 32, 0x1000)?;
            let mut fmt = FmtU(*word);
            fmt.set_imm(((delta >> 12) as u32) & 0xfffff);
            *word = fmt.0;
        }
        Fld::JImm => {
            let delta = check_signed(expect_target(opnd, pc, slot)?, 21, 2)?;
            let mut fmt = FmtJ(*word);
            fmt.set_imm(delta as i32);
            *word = fmt.0;
        }

        Fld::Crd | Fld::Crs1 => {
            let val = expect_xreg(opnd, slot)?;
            let mut fmt = CrFmt(*word);
            fmt.set_rd(val);
            *word = fmt.0;
        }
        Fld::CrdFp => {
            let val = expect_freg(opnd, slot)?;
            let mut fmt = CrFmt(*word);
            fmt.set_rd(val);
            *word = fmt.0;
        }
        Fld::Crs2 => {
            let val = expect_xreg(opnd, slot)?;
            let mut fmt = CrFmt(*word);
            fmt.set_rs2(val);
            *word = fmt.0;
        }
        Fld::Crs2Fp => {
            let val = expect_freg(opnd, slot)?;
            let mut fmt = CrFmt(*word);
            fmt.set_rs2(val);
            *word = fmt.0;
        }
        Fld::CrdLim | Fld::Crs2Lim => {
            let val = expect_xreg_lim(opnd, slot)?;
            let mut fmt = ClsFmt(*word);
            fmt.set_reg_lim(val);
            *word = fmt.0;
        }
        Fld::CrdLimFp | Fld::Crs2LimFp => {
            let val = expect_freg_lim(opnd, slot)?;
            let mut fmt = ClsFmt(*word);
            fmt.set_reg_lim(val);
            *word = fmt.0;
        }
        Fld::Crs1Lim | Fld::CrdCa => {
            let val = expect_xreg_lim(opnd, slot)?;
            let mut fmt = ClsFmt(*word);
            fmt.set_rs1_lim(val);
            *word = fmt.0;
        }

        Fld::Cshamt => {
            let val = check_unsigned(expect_imm(opnd, slot)?, 6, 1)?;
            let mut fmt = CiFmt(*word);
            fmt.set_uimm(val as u32);
            *word = fmt.0;
        }
        Fld::CsrImm => {
            let val = check_unsigned(expect_imm(opnd, slot)?, 5, 1)?;
            set_field(word, 19, 15, val as u32);
        }
        Fld::Caddi16spImm => {
            let val = expect_imm(opnd, slot)?;
            // zero is a reserved encoding
            if val == 0 {
                return Err(CodecError::operand_out_of_range(val));
            }
            let val = check_signed(val, 10, 16)?;
            let mut fmt = CAddi16spFmt(*word);
            fmt.set_imm(val as i32);
            *word = fmt.0;
        }
        Fld::ClwspImm => {
            let disp = check_unsigned(expect_sp_disp(opnd, slot)?, 8, 4)?;
            let mut fmt = CiSpFmt(*word);
            fmt.set_uimm_w(disp as u32);
            *word = fmt.0;
        }
        Fld::CldspImm => {
            let disp = check_unsigned(expect_sp_disp(opnd, slot)?, 9, 8)?;
            let mut fmt = CiSpFmt(*word);
            fmt.set_uimm_d(disp as u32);
            *word = fmt.0;
        }
        Fld::CluiImm => {
            let val = expect_imm(opnd, slot)?;
            // zero is a reserved encoding
            if val == 0 {
                return Err(CodecError::operand_out_of_range(val));
            }
            let val = check_signed(val, 6, 1)?;
            let mut fmt = CiFmt(*word);
            fmt.set_imm(val as i32);
            *word = fmt.0;
        }
        Fld::CswspImm => {
            let disp = check_unsigned(expect_sp_disp(opnd, slot)?, 8, 4)?;
            let mut fmt = CssFmt(*word);
            fmt.set_uimm_w(disp as u32);
            *word = fmt.0;
        }
        Fld::CsdspImm => {
            let disp = check_unsigned(expect_sp_disp(opnd, slot)?, 9, 8)?;
            let mut fmt = CssFmt(*word);
            fmt.set_uimm_d(disp as u32);
            *word = fmt.0;
        }
        Fld::CiwImm => {
            // zero would alias the canonical illegal instruction
            let val = check_unsigned_nz(expect_imm(opnd, slot)?, 10, 4)?;
            let mut fmt = CiwFmt(*word);
            fmt.set_uimm(val as u32);
            *word = fmt.0;
        }
        Fld::ClwImm | Fld::CswImm => {
            let (base, disp) = expect_base_disp(opnd, slot)?;
            let base = u32::from(base);
            if !(8..=15).contains(&base) {
                return Err(CodecError::operand_out_of_range(base as i64));
            }
            let disp = check_unsigned(disp, 7, 4)?;
            let mut fmt = ClsFmt(*word);
            fmt.set_rs1_lim(base - 8);
            fmt.set_uimm_w(disp as u32);
            *word = fmt.0;
        }
        Fld::CldImm | Fld::CsdImm => {
            let (base, disp) = expect_base_disp(opnd, slot)?;
            let base = u32::from(base);
            if !(8..=15).contains(&base) {
                return Err(CodecError::operand_out_of_range(base as i64));
            }
            let disp = check_unsigned(disp, 8, 8)?;
            let mut fmt = ClsFmt(*word);
            fmt.set_rs1_lim(base - 8);
            fmt.set_uimm_d(disp as u32);
            *word = fmt.0;
        }
        Fld::Cimm5 => {
            let val = check_signed(expect_imm(opnd, slot)?, 6, 1)?;
            let mut fmt = CiFmt(*word);
            fmt.set_imm(val as i32);
            *word = fmt.0;
        }
        Fld::CbImm => {
            let delta = check_signed(expect_target(opnd, pc, slot)?, 9, 2)?;
            let mut fmt = CbFmt(*word);
            fmt.set_offset(delta as i32);
            *word = fmt.0;
        }
        Fld::CjImm => {
            let delta = check_signed(expect_target(opnd, pc, slot)?, 12, 2)?;
            let mut fmt = CjFmt(*word);
            fmt.set_offset(delta as i32);
            *word = fmt.0;
        }

        Fld::VlRs1Disp => {
            let (base, disp) = expect_base_disp(opnd, slot)?;
            let disp = check_signed(disp, 12, 1)?;
            let mut fmt = FmtR(*word);
            fmt.set_rs1(u32::from(base));
            *word = fmt.0;
            let mut fmt = FmtI(*word);
            fmt.set_imm(disp as i32);
            *word = fmt.0;
        }
        Fld::VsRs1Disp => {
            let (base, disp) = expect_base_disp(opnd, slot)?;
            let disp = check_signed(disp, 12, 1)?;
            let mut fmt = FmtR(*word);
            fmt.set_rs1(u32::from(base));
            *word = fmt.0;
            let mut fmt = FmtS(*word);
            fmt.set_imm(disp as i32);
            *word = fmt.0;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rvdbt_ir_types::CodecErrorCause;

    #[test]
    fn test_decode_i_imm() {
        // addi a0, a0, -1 == 0xfff50513
        let opnd = decode_fld(Fld::IImm, 0xfff5_0513, OpndSize::Bits12, 0, 0).unwrap();
        assert_eq!(opnd, Operand::imm(-1, OpndSize::Bits12));
        let opnd = decode_fld(Fld::Rs1, 0xfff5_0513, OpndSize::Ptr, 0, 0).unwrap();
        assert_eq!(opnd, Operand::reg_x(XReg::X10));
    }

    #[test]
    fn test_decode_s_imm() {
        // sd a5, -8(s0) == 0xfef43c23
        let opnd = decode_fld(Fld::VsRs1Disp, 0xfef4_3c23, OpndSize::Double, 0, 0).unwrap();
        assert_eq!(opnd, Operand::base_disp(XReg::X8, -8, OpndSize::Double));
    }

    #[test]
    fn test_decode_branch_target_uses_orig_pc() {
        // beq x1, x2, -4096 == 0x80208063, decoded from a copy
        let opnd = decode_fld(Fld::BImm, 0x8020_8063, OpndSize::Half, 0x9000, 0x5000).unwrap();
        assert_eq!(
            opnd,
            Operand::pcrel(-4096, Target::Resolved(0x4000), OpndSize::Half)
        );
    }

    #[test]
    fn test_decode_reserved_rounding_mode() {
        // fadd.s with rm == 0b101
        let word = 0x0000_5053;
        let err = decode_fld(Fld::Rm, word, OpndSize::Bits3, 0, 0).unwrap_err();
        assert_eq!(err.cause(), CodecErrorCause::OperandFault);
    }

    #[test]
    fn test_decode_compressed_regs() {
        // c.ld a2, 8(a0) == 0x6510
        let opnd = decode_fld(Fld::CrdLim, 0x6510, OpndSize::Ptr, 0, 0).unwrap();
        assert_eq!(opnd, Operand::reg_x(XReg::X12));
        let opnd = decode_fld(Fld::CldImm, 0x6510, OpndSize::Double, 0, 0).unwrap();
        assert_eq!(opnd, Operand::base_disp(XReg::X10, 8, OpndSize::Double));
    }

    #[test]
    fn test_encode_i_imm_range() {
        let mut word = 0x0000_0013;
        encode_fld(
            Fld::IImm,
            &Operand::imm(-2048, OpndSize::Bits12),
            0,
            1,
            &mut word,
        )
        .unwrap();
        assert_eq!(word, 0x8000_0013);

        let mut word = 0x0000_0013;
        let err = encode_fld(
            Fld::IImm,
            &Operand::imm(2048, OpndSize::Bits12),
            0,
            1,
            &mut word,
        )
        .unwrap_err();
        assert_eq!(err.cause(), CodecErrorCause::OperandOutOfRange);
    }

    #[test]
    fn test_encode_kind_mismatch() {
        let mut word = 0x0000_0013;
        let err = encode_fld(Fld::IImm, &Operand::reg_x(XReg::X1), 0, 1, &mut word).unwrap_err();
        assert_eq!(err.cause(), CodecErrorCause::OperandMismatch);
        assert_eq!(err.info(), 1);

        // integer register where a float register is required
        let err = encode_fld(Fld::RdFp, &Operand::reg_x(XReg::X1), 0, 0, &mut word).unwrap_err();
        assert_eq!(err.cause(), CodecErrorCause::OperandMismatch);
    }

    #[test]
    fn test_encode_branch_target() {
        let mut word = 0x0000_0063;
        encode_fld(
            Fld::BImm,
            &Operand::pcrel(0, Target::Resolved(0x7000), OpndSize::Half),
            0x8000,
            2,
            &mut word,
        )
        .unwrap();
        assert_eq!(FmtB(word).imm(), -4096);

        // distance outside the 13-bit field
        let err = encode_fld(
            Fld::BImm,
            &Operand::pcrel(0, Target::Resolved(0x4000), OpndSize::Half),
            0x8000,
            2,
            &mut word,
        )
        .unwrap_err();
        assert_eq!(err.cause(), CodecErrorCause::OperandOutOfRange);

        // unresolved targets cannot be encoded
        let err = encode_fld(
            Fld::BImm,
            &Operand::pcrel(0, Target::Pending, OpndSize::Half),
            0x8000,
            2,
            &mut word,
        )
        .unwrap_err();
        assert_eq!(err.cause(), CodecErrorCause::UnresolvedTarget);

        // odd distances are rejected
        let err = encode_fld(
            Fld::BImm,
            &Operand::pcrel(0, Target::Resolved(0x8001), OpndSize::Half),
            0x8000,
            2,
            &mut word,
        )
        .unwrap_err();
        assert_eq!(err.cause(), CodecErrorCause::OperandOutOfRange);
    }

    #[test]
    fn test_encode_sp_relative() {
        // c.lwsp requires the stack pointer as base
        let mut word = 0x4002;
        let err = encode_fld(
            Fld::ClwspImm,
            &Operand::base_disp(XReg::X10, 0, OpndSize::Word),
            0,
            0,
            &mut word,
        )
        .unwrap_err();
        assert_eq!(err.cause(), CodecErrorCause::OperandMismatch);

        // displacement beyond the scaled field
        let err = encode_fld(
            Fld::ClwspImm,
            &Operand::base_disp(XReg::X2, 256, OpndSize::Word),
            0,
            0,
            &mut word,
        )
        .unwrap_err();
        assert_eq!(err.cause(), CodecErrorCause::OperandOutOfRange);

        // misaligned displacement
        let err = encode_fld(
            Fld::ClwspImm,
            &Operand::base_disp(XReg::X2, 6, OpndSize::Word),
            0,
            0,
            &mut word,
        )
        .unwrap_err();
        assert_eq!(err.cause(), CodecErrorCause::OperandOutOfRange);

        encode_fld(
            Fld::ClwspImm,
            &Operand::base_disp(XReg::X2, 252, OpndSize::Word),
            0,
            0,
            &mut word,
        )
        .unwrap();
        assert_eq!(CiSpFmt(word).uimm_w(), 252);
    }

    #[test]
    fn test_encode_limited_reg_range() {
        let mut word = 0x0000;
        let err = encode_fld(Fld::CrdLim, &Operand::reg_x(XReg::X16), 0, 0, &mut word).unwrap_err();
        assert_eq!(err.cause(), CodecErrorCause::OperandOutOfRange);

        encode_fld(Fld::CrdLim, &Operand::reg_x(XReg::X15), 0, 0, &mut word).unwrap();
        assert_eq!(ClsFmt(word).reg_lim(), 7);
    }

    #[test]
    fn test_encode_upper_imm_pc() {
        // auipc reaching forward 0x1000 from 0x8000
        let mut word = 0x0000_0017;
        encode_fld(
            Fld::UImmPc,
            &Operand::pcrel(0, Target::Resolved(0x9000), OpndSize::Ptr),
            0x8000,
            0,
            &mut word,
        )
        .unwrap();
        assert_eq!(word, 0x0000_1017);

        // targets must sit on a 4 KiB boundary relative to pc
        let err = encode_fld(
            Fld::UImmPc,
            &Operand::pcrel(0, Target::Resolved(0x9004), OpndSize::Ptr),
            0x8000,
            0,
            &mut word,
        )
        .unwrap_err();
        assert_eq!(err.cause(), CodecErrorCause::OperandOutOfRange);
    }

    #[test]
    fn test_decode_reserved_zero_imms() {
        // c.addi4spn a5, sp, 0 / c.addi16sp sp, 0 / c.lui ra, 0
        let cases = [
            (Fld::CiwImm, 0x0004_u32, OpndSize::Bits10),
            (Fld::Caddi16spImm, 0x6101, OpndSize::Bits10),
            (Fld::CluiImm, 0x6081, OpndSize::Bits6),
        ];
        for (fld, word, size) in cases {
            let err = decode_fld(fld, word, size, 0, 0).unwrap_err();
            assert_eq!(err.cause(), CodecErrorCause::OperandFault, "{fld:?}");
        }
    }

    #[test]
    fn test_encode_reserved_zero_imms() {
        let mut word = 0x0000;
        for fld in [Fld::CiwImm, Fld::Caddi16spImm, Fld::CluiImm] {
            let err = encode_fld(fld, &Operand::imm(0, OpndSize::Bits10), 0, 0, &mut word)
                .unwrap_err();
            assert_eq!(err.cause(), CodecErrorCause::OperandOutOfRange);
        }
    }
}
