/*++

Licensed under the Apache-2.0 license.

File Name:

    table.rs

Abstract:

    File contains the instruction descriptor table for RV64IMAFDC plus the
    Zicsr and Zifencei extensions. Table order matches the opcode values.

--*/

use crate::descriptor::{Fld, InstrDescriptor, OpndSpec};
use crate::opcode::{IsaExt, Opcode};
use crate::operand::OpndSize;

const fn spec(fld: Fld, size: OpndSize) -> OpndSpec {
    OpndSpec { fld, size }
}

// 32-bit register slots
const RD: OpndSpec = spec(Fld::Rd, OpndSize::Ptr);
const RDFP: OpndSpec = spec(Fld::RdFp, OpndSize::Ptr);
const RS1: OpndSpec = spec(Fld::Rs1, OpndSize::Ptr);
const RS1FP: OpndSpec = spec(Fld::Rs1Fp, OpndSize::Ptr);
const RS2: OpndSpec = spec(Fld::Rs2, OpndSize::Ptr);
const RS2FP: OpndSpec = spec(Fld::Rs2Fp, OpndSize::Ptr);
const RS3: OpndSpec = spec(Fld::Rs3, OpndSize::Ptr);

// 32-bit memory slots
const BASE4: OpndSpec = spec(Fld::Base, OpndSize::Word);
const BASE8: OpndSpec = spec(Fld::Base, OpndSize::Double);
const VL1: OpndSpec = spec(Fld::VlRs1Disp, OpndSize::Byte);
const VL2: OpndSpec = spec(Fld::VlRs1Disp, OpndSize::Half);
const VL4: OpndSpec = spec(Fld::VlRs1Disp, OpndSize::Word);
const VL8: OpndSpec = spec(Fld::VlRs1Disp, OpndSize::Double);
const VS1: OpndSpec = spec(Fld::VsRs1Disp, OpndSize::Byte);
const VS2: OpndSpec = spec(Fld::VsRs1Disp, OpndSize::Half);
const VS4: OpndSpec = spec(Fld::VsRs1Disp, OpndSize::Word);
const VS8: OpndSpec = spec(Fld::VsRs1Disp, OpndSize::Double);

// 32-bit immediate slots
const FM: OpndSpec = spec(Fld::Fm, OpndSize::Bits4);
const PRED: OpndSpec = spec(Fld::Pred, OpndSize::Bits4);
const SUCC: OpndSpec = spec(Fld::Succ, OpndSize::Bits4);
const AQRL: OpndSpec = spec(Fld::Aqrl, OpndSize::Bits2);
const CSR: OpndSpec = spec(Fld::Csr, OpndSize::Bits12);
const RM: OpndSpec = spec(Fld::Rm, OpndSize::Bits3);
const SHAMT: OpndSpec = spec(Fld::Shamt, OpndSize::Bits6);
const SHAMT5: OpndSpec = spec(Fld::Shamt5, OpndSize::Bits5);
const I_IMM: OpndSpec = spec(Fld::IImm, OpndSize::Bits12);
const B_IMM: OpndSpec = spec(Fld::BImm, OpndSize::Half);
const U_IMM: OpndSpec = spec(Fld::UImm, OpndSize::Bits20);
const U_PC: OpndSpec = spec(Fld::UImmPc, OpndSize::Ptr);
const J_IMM: OpndSpec = spec(Fld::JImm, OpndSize::Half);

// compressed register slots
const CRD: OpndSpec = spec(Fld::Crd, OpndSize::Ptr);
const CRDFP: OpndSpec = spec(Fld::CrdFp, OpndSize::Ptr);
const CRS1: OpndSpec = spec(Fld::Crs1, OpndSize::Ptr);
const CRS2: OpndSpec = spec(Fld::Crs2, OpndSize::Ptr);
const CRS2FP: OpndSpec = spec(Fld::Crs2Fp, OpndSize::Ptr);
const CRD_L: OpndSpec = spec(Fld::CrdLim, OpndSize::Ptr);
const CRD_LFP: OpndSpec = spec(Fld::CrdLimFp, OpndSize::Ptr);
const CRS1_L: OpndSpec = spec(Fld::Crs1Lim, OpndSize::Ptr);
const CRS2_L: OpndSpec = spec(Fld::Crs2Lim, OpndSize::Ptr);
const CRS2_LFP: OpndSpec = spec(Fld::Crs2LimFp, OpndSize::Ptr);
const CRD_CA: OpndSpec = spec(Fld::CrdCa, OpndSize::Ptr);

// compressed immediate and memory slots
const CSHAMT: OpndSpec = spec(Fld::Cshamt, OpndSize::Bits6);
const CSR_IMM: OpndSpec = spec(Fld::CsrImm, OpndSize::Bits5);
const CA16SP: OpndSpec = spec(Fld::Caddi16spImm, OpndSize::Bits10);
const CLWSP: OpndSpec = spec(Fld::ClwspImm, OpndSize::Word);
const CLDSP: OpndSpec = spec(Fld::CldspImm, OpndSize::Double);
const CLUI: OpndSpec = spec(Fld::CluiImm, OpndSize::Bits6);
const CSWSP: OpndSpec = spec(Fld::CswspImm, OpndSize::Word);
const CSDSP: OpndSpec = spec(Fld::CsdspImm, OpndSize::Double);
const CIW: OpndSpec = spec(Fld::CiwImm, OpndSize::Bits10);
const CLW: OpndSpec = spec(Fld::ClwImm, OpndSize::Word);
const CLD: OpndSpec = spec(Fld::CldImm, OpndSize::Double);
const CSW: OpndSpec = spec(Fld::CswImm, OpndSize::Word);
const CSD: OpndSpec = spec(Fld::CsdImm, OpndSize::Double);
const CIMM5: OpndSpec = spec(Fld::Cimm5, OpndSize::Bits6);
const CB_IMM: OpndSpec = spec(Fld::CbImm, OpndSize::Half);
const CJ_IMM: OpndSpec = spec(Fld::CjImm, OpndSize::Half);

macro_rules! instr {
    ($op:ident, $name:literal, $ext:ident, $match_:literal, $mask:literal,
     [$($dst:expr),*], [$($src:expr),*]) => {
        InstrDescriptor {
            opcode: Opcode::$op,
            name: $name,
            ext: IsaExt::$ext,
            match_bits: $match_,
            mask_bits: $mask,
            dsts: &[$($dst),*],
            srcs: &[$($src),*],
        }
    };
}

#[rustfmt::skip]
pub(crate) static INSTR_TABLE: [InstrDescriptor; 181] = [
    instr!(Unimp, "unimp", C, 0x0000, 0xffff, [], []),

    // RV64I
    instr!(Lui, "lui", I, 0x0000_0037, 0x0000_007f, [RD], [U_IMM]),
    instr!(Auipc, "auipc", I, 0x0000_0017, 0x0000_007f, [RD], [U_PC]),
    instr!(Jal, "jal", I, 0x0000_006f, 0x0000_007f, [RD], [J_IMM]),
    instr!(Jalr, "jalr", I, 0x0000_0067, 0x0000_707f, [RD], [RS1, I_IMM]),
    instr!(Beq, "beq", I, 0x0000_0063, 0x0000_707f, [], [RS1, RS2, B_IMM]),
    instr!(Bne, "bne", I, 0x0000_1063, 0x0000_707f, [], [RS1, RS2, B_IMM]),
    instr!(Blt, "blt", I, 0x0000_4063, 0x0000_707f, [], [RS1, RS2, B_IMM]),
    instr!(Bge, "bge", I, 0x0000_5063, 0x0000_707f, [], [RS1, RS2, B_IMM]),
    instr!(Bltu, "bltu", I, 0x0000_6063, 0x0000_707f, [], [RS1, RS2, B_IMM]),
    instr!(Bgeu, "bgeu", I, 0x0000_7063, 0x0000_707f, [], [RS1, RS2, B_IMM]),
    instr!(Lb, "lb", I, 0x0000_0003, 0x0000_707f, [RD], [VL1]),
    instr!(Lh, "lh", I, 0x0000_1003, 0x0000_707f, [RD], [VL2]),
    instr!(Lw, "lw", I, 0x0000_2003, 0x0000_707f, [RD], [VL4]),
    instr!(Ld, "ld", I, 0x0000_3003, 0x0000_707f, [RD], [VL8]),
    instr!(Lbu, "lbu", I, 0x0000_4003, 0x0000_707f, [RD], [VL1]),
    instr!(Lhu, "lhu", I, 0x0000_5003, 0x0000_707f, [RD], [VL2]),
    instr!(Lwu, "lwu", I, 0x0000_6003, 0x0000_707f, [RD], [VL4]),
    instr!(Sb, "sb", I, 0x0000_0023, 0x0000_707f, [VS1], [RS2]),
    instr!(Sh, "sh", I, 0x0000_1023, 0x0000_707f, [VS2], [RS2]),
    instr!(Sw, "sw", I, 0x0000_2023, 0x0000_707f, [VS4], [RS2]),
    instr!(Sd, "sd", I, 0x0000_3023, 0x0000_707f, [VS8], [RS2]),
    instr!(Addi, "addi", I, 0x0000_0013, 0x0000_707f, [RD], [RS1, I_IMM]),
    instr!(Slti, "slti", I, 0x0000_2013, 0x0000_707f, [RD], [RS1, I_IMM]),
    instr!(Sltiu, "sltiu", I, 0x0000_3013, 0x0000_707f, [RD], [RS1, I_IMM]),
    instr!(Xori, "xori", I, 0x0000_4013, 0x0000_707f, [RD], [RS1, I_IMM]),
    instr!(Ori, "ori", I, 0x0000_6013, 0x0000_707f, [RD], [RS1, I_IMM]),
    instr!(Andi, "andi", I, 0x0000_7013, 0x0000_707f, [RD], [RS1, I_IMM]),
    instr!(Slli, "slli", I, 0x0000_1013, 0xfc00_707f, [RD], [RS1, SHAMT]),
    instr!(Srli, "srli", I, 0x0000_5013, 0xfc00_707f, [RD], [RS1, SHAMT]),
    instr!(Srai, "srai", I, 0x4000_5013, 0xfc00_707f, [RD], [RS1, SHAMT]),
    instr!(Addiw, "addiw", I, 0x0000_001b, 0x0000_707f, [RD], [RS1, I_IMM]),
    instr!(Slliw, "slliw", I, 0x0000_101b, 0xfe00_707f, [RD], [RS1, SHAMT5]),
    instr!(Srliw, "srliw", I, 0x0000_501b, 0xfe00_707f, [RD], [RS1, SHAMT5]),
    instr!(Sraiw, "sraiw", I, 0x4000_501b, 0xfe00_707f, [RD], [RS1, SHAMT5]),
    instr!(Add, "add", I, 0x0000_0033, 0xfe00_707f, [RD], [RS1, RS2]),
    instr!(Sub, "sub", I, 0x4000_0033, 0xfe00_707f, [RD], [RS1, RS2]),
    instr!(Sll, "sll", I, 0x0000_1033, 0xfe00_707f, [RD], [RS1, RS2]),
    instr!(Slt, "slt", I, 0x0000_2033, 0xfe00_707f, [RD], [RS1, RS2]),
    instr!(Sltu, "sltu", I, 0x0000_3033, 0xfe00_707f, [RD], [RS1, RS2]),
    instr!(Xor, "xor", I, 0x0000_4033, 0xfe00_707f, [RD], [RS1, RS2]),
    instr!(Srl, "srl", I, 0x0000_5033, 0xfe00_707f, [RD], [RS1, RS2]),
    instr!(Sra, "sra", I, 0x4000_5033, 0xfe00_707f, [RD], [RS1, RS2]),
    instr!(Or, "or", I, 0x0000_6033, 0xfe00_707f, [RD], [RS1, RS2]),
    instr!(And, "and", I, 0x0000_7033, 0xfe00_707f, [RD], [RS1, RS2]),
    instr!(Addw, "addw", I, 0x0000_003b, 0xfe00_707f, [RD], [RS1, RS2]),
    instr!(Subw, "subw", I, 0x4000_003b, 0xfe00_707f, [RD], [RS1, RS2]),
    instr!(Sllw, "sllw", I, 0x0000_103b, 0xfe00_707f, [RD], [RS1, RS2]),
    instr!(Srlw, "srlw", I, 0x0000_503b, 0xfe00_707f, [RD], [RS1, RS2]),
    instr!(Sraw, "sraw", I, 0x4000_503b, 0xfe00_707f, [RD], [RS1, RS2]),
    instr!(Fence, "fence", I, 0x0000_000f, 0x0000_707f, [RD], [FM, PRED, SUCC, RS1]),
    instr!(FenceI, "fence.i", Zifencei, 0x0000_100f, 0x0000_707f, [RD], [RS1, I_IMM]),
    instr!(Ecall, "ecall", I, 0x0000_0073, 0xffff_ffff, [], []),
    instr!(Ebreak, "ebreak", I, 0x0010_0073, 0xffff_ffff, [], []),
    instr!(Sret, "sret", I, 0x1020_0073, 0xffff_ffff, [], []),
    instr!(Mret, "mret", I, 0x3020_0073, 0xffff_ffff, [], []),
    instr!(Wfi, "wfi", I, 0x1050_0073, 0xffff_ffff, [], []),

    // Zicsr
    instr!(Csrrw, "csrrw", Zicsr, 0x0000_1073, 0x0000_707f, [RD], [CSR, RS1]),
    instr!(Csrrs, "csrrs", Zicsr, 0x0000_2073, 0x0000_707f, [RD], [CSR, RS1]),
    instr!(Csrrc, "csrrc", Zicsr, 0x0000_3073, 0x0000_707f, [RD], [CSR, RS1]),
    instr!(Csrrwi, "csrrwi", Zicsr, 0x0000_5073, 0x0000_707f, [RD], [CSR, CSR_IMM]),
    instr!(Csrrsi, "csrrsi", Zicsr, 0x0000_6073, 0x0000_707f, [RD], [CSR, CSR_IMM]),
    instr!(Csrrci, "csrrci", Zicsr, 0x0000_7073, 0x0000_707f, [RD], [CSR, CSR_IMM]),

    // RV64M
    instr!(Mul, "mul", M, 0x0200_0033, 0xfe00_707f, [RD], [RS1, RS2]),
    instr!(Mulh, "mulh", M, 0x0200_1033, 0xfe00_707f, [RD], [RS1, RS2]),
    instr!(Mulhsu, "mulhsu", M, 0x0200_2033, 0xfe00_707f, [RD], [RS1, RS2]),
    instr!(Mulhu, "mulhu", M, 0x0200_3033, 0xfe00_707f, [RD], [RS1, RS2]),
    instr!(Div, "div", M, 0x0200_4033, 0xfe00_707f, [RD], [RS1, RS2]),
    instr!(Divu, "divu", M, 0x0200_5033, 0xfe00_707f, [RD], [RS1, RS2]),
    instr!(Rem, "rem", M, 0x0200_6033, 0xfe00_707f, [RD], [RS1, RS2]),
    instr!(Remu, "remu", M, 0x0200_7033, 0xfe00_707f, [RD], [RS1, RS2]),
    instr!(Mulw, "mulw", M, 0x0200_003b, 0xfe00_707f, [RD], [RS1, RS2]),
    instr!(Divw, "divw", M, 0x0200_403b, 0xfe00_707f, [RD], [RS1, RS2]),
    instr!(Divuw, "divuw", M, 0x0200_503b, 0xfe00_707f, [RD], [RS1, RS2]),
    instr!(Remw, "remw", M, 0x0200_603b, 0xfe00_707f, [RD], [RS1, RS2]),
    instr!(Remuw, "remuw", M, 0x0200_703b, 0xfe00_707f, [RD], [RS1, RS2]),

    // RV64A
    instr!(LrW, "lr.w", A, 0x1000_202f, 0xf9f0_707f, [RD], [BASE4, AQRL]),
    instr!(ScW, "sc.w", A, 0x1800_202f, 0xf800_707f, [RD, BASE4], [RS2, AQRL]),
    instr!(AmoswapW, "amoswap.w", A, 0x0800_202f, 0xf800_707f, [RD, BASE4], [RS2, AQRL]),
    instr!(AmoaddW, "amoadd.w", A, 0x0000_202f, 0xf800_707f, [RD, BASE4], [RS2, AQRL]),
    instr!(AmoxorW, "amoxor.w", A, 0x2000_202f, 0xf800_707f, [RD, BASE4], [RS2, AQRL]),
    instr!(AmoandW, "amoand.w", A, 0x6000_202f, 0xf800_707f, [RD, BASE4], [RS2, AQRL]),
    instr!(AmoorW, "amoor.w", A, 0x4000_202f, 0xf800_707f, [RD, BASE4], [RS2, AQRL]),
    instr!(AmominW, "amomin.w", A, 0x8000_202f, 0xf800_707f, [RD, BASE4], [RS2, AQRL]),
    instr!(AmomaxW, "amomax.w", A, 0xa000_202f, 0xf800_707f, [RD, BASE4], [RS2, AQRL]),
    instr!(AmominuW, "amominu.w", A, 0xc000_202f, 0xf800_707f, [RD, BASE4], [RS2, AQRL]),
    instr!(AmomaxuW, "amomaxu.w", A, 0xe000_202f, 0xf800_707f, [RD, BASE4], [RS2, AQRL]),
    instr!(LrD, "lr.d", A, 0x1000_302f, 0xf9f0_707f, [RD], [BASE8, AQRL]),
    instr!(ScD, "sc.d", A, 0x1800_302f, 0xf800_707f, [RD, BASE8], [RS2, AQRL]),
    instr!(AmoswapD, "amoswap.d", A, 0x0800_302f, 0xf800_707f, [RD, BASE8], [RS2, AQRL]),
    instr!(AmoaddD, "amoadd.d", A, 0x0000_302f, 0xf800_707f, [RD, BASE8], [RS2, AQRL]),
    instr!(AmoxorD, "amoxor.d", A, 0x2000_302f, 0xf800_707f, [RD, BASE8], [RS2, AQRL]),
    instr!(AmoandD, "amoand.d", A, 0x6000_302f, 0xf800_707f, [RD, BASE8], [RS2, AQRL]),
    instr!(AmoorD, "amoor.d", A, 0x4000_302f, 0xf800_707f, [RD, BASE8], [RS2, AQRL]),
    instr!(AmominD, "amomin.d", A, 0x8000_302f, 0xf800_707f, [RD, BASE8], [RS2, AQRL]),
    instr!(AmomaxD, "amomax.d", A, 0xa000_302f, 0xf800_707f, [RD, BASE8], [RS2, AQRL]),
    instr!(AmominuD, "amominu.d", A, 0xc000_302f, 0xf800_707f, [RD, BASE8], [RS2, AQRL]),
    instr!(AmomaxuD, "amomaxu.d", A, 0xe000_302f, 0xf800_707f, [RD, BASE8], [RS2, AQRL]),

    // RV64F
    instr!(Flw, "flw", F, 0x0000_2007, 0x0000_707f, [RDFP], [VL4]),
    instr!(Fsw, "fsw", F, 0x0000_2027, 0x0000_707f, [VS4], [RS2FP]),
    instr!(FmaddS, "fmadd.s", F, 0x0000_0043, 0x0600_007f, [RDFP], [RS1FP, RS2FP, RS3, RM]),
    instr!(FmsubS, "fmsub.s", F, 0x0000_0047, 0x0600_007f, [RDFP], [RS1FP, RS2FP, RS3, RM]),
    instr!(FnmsubS, "fnmsub.s", F, 0x0000_004b, 0x0600_007f, [RDFP], [RS1FP, RS2FP, RS3, RM]),
    instr!(FnmaddS, "fnmadd.s", F, 0x0000_004f, 0x0600_007f, [RDFP], [RS1FP, RS2FP, RS3, RM]),
    instr!(FaddS, "fadd.s", F, 0x0000_0053, 0xfe00_007f, [RDFP], [RS1FP, RS2FP, RM]),
    instr!(FsubS, "fsub.s", F, 0x0800_0053, 0xfe00_007f, [RDFP], [RS1FP, RS2FP, RM]),
    instr!(FmulS, "fmul.s", F, 0x1000_0053, 0xfe00_007f, [RDFP], [RS1FP, RS2FP, RM]),
    instr!(FdivS, "fdiv.s", F, 0x1800_0053, 0xfe00_007f, [RDFP], [RS1FP, RS2FP, RM]),
    instr!(FsqrtS, "fsqrt.s", F, 0x5800_0053, 0xfff0_007f, [RDFP], [RS1FP, RM]),
    instr!(FsgnjS, "fsgnj.s", F, 0x2000_0053, 0xfe00_707f, [RDFP], [RS1FP, RS2FP]),
    instr!(FsgnjnS, "fsgnjn.s", F, 0x2000_1053, 0xfe00_707f, [RDFP], [RS1FP, RS2FP]),
    instr!(FsgnjxS, "fsgnjx.s", F, 0x2000_2053, 0xfe00_707f, [RDFP], [RS1FP, RS2FP]),
    instr!(FminS, "fmin.s", F, 0x2800_0053, 0xfe00_707f, [RDFP], [RS1FP, RS2FP]),
    instr!(FmaxS, "fmax.s", F, 0x2800_1053, 0xfe00_707f, [RDFP], [RS1FP, RS2FP]),
    instr!(FeqS, "feq.s", F, 0xa000_2053, 0xfe00_707f, [RD], [RS1FP, RS2FP]),
    instr!(FltS, "flt.s", F, 0xa000_1053, 0xfe00_707f, [RD], [RS1FP, RS2FP]),
    instr!(FleS, "fle.s", F, 0xa000_0053, 0xfe00_707f, [RD], [RS1FP, RS2FP]),
    instr!(FcvtWS, "fcvt.w.s", F, 0xc000_0053, 0xfff0_007f, [RD], [RS1FP, RM]),
    instr!(FcvtSW, "fcvt.s.w", F, 0xd000_0053, 0xfff0_007f, [RDFP], [RS1, RM]),
    instr!(FmvXW, "fmv.x.w", F, 0xe000_0053, 0xfff0_707f, [RD], [RS1FP]),
    instr!(FmvWX, "fmv.w.x", F, 0xf000_0053, 0xfff0_707f, [RDFP], [RS1]),

    // RV64D
    instr!(Fld, "fld", D, 0x0000_3007, 0x0000_707f, [RDFP], [VL8]),
    instr!(Fsd, "fsd", D, 0x0000_3027, 0x0000_707f, [VS8], [RS2FP]),
    instr!(FmaddD, "fmadd.d", D, 0x0200_0043, 0x0600_007f, [RDFP], [RS1FP, RS2FP, RS3, RM]),
    instr!(FmsubD, "fmsub.d", D, 0x0200_0047, 0x0600_007f, [RDFP], [RS1FP, RS2FP, RS3, RM]),
    instr!(FnmsubD, "fnmsub.d", D, 0x0200_004b, 0x0600_007f, [RDFP], [RS1FP, RS2FP, RS3, RM]),
    instr!(FnmaddD, "fnmadd.d", D, 0x0200_004f, 0x0600_007f, [RDFP], [RS1FP, RS2FP, RS3, RM]),
    instr!(FaddD, "fadd.d", D, 0x0200_0053, 0xfe00_007f, [RDFP], [RS1FP, RS2FP, RM]),
    instr!(FsubD, "fsub.d", D, 0x0a00_0053, 0xfe00_007f, [RDFP], [RS1FP, RS2FP, RM]),
    instr!(FmulD, "fmul.d", D, 0x1200_0053, 0xfe00_007f, [RDFP], [RS1FP, RS2FP, RM]),
    instr!(FdivD, "fdiv.d", D, 0x1a00_0053, 0xfe00_007f, [RDFP], [RS1FP, RS2FP, RM]),
    instr!(FsqrtD, "fsqrt.d", D, 0x5a00_0053, 0xfff0_007f, [RDFP], [RS1FP, RM]),
    instr!(FsgnjD, "fsgnj.d", D, 0x2200_0053, 0xfe00_707f, [RDFP], [RS1FP, RS2FP]),
    instr!(FsgnjnD, "fsgnjn.d", D, 0x2200_1053, 0xfe00_707f, [RDFP], [RS1FP, RS2FP]),
    instr!(FsgnjxD, "fsgnjx.d", D, 0x2200_2053, 0xfe00_707f, [RDFP], [RS1FP, RS2FP]),
    instr!(FminD, "fmin.d", D, 0x2a00_0053, 0xfe00_707f, [RDFP], [RS1FP, RS2FP]),
    instr!(FmaxD, "fmax.d", D, 0x2a00_1053, 0xfe00_707f, [RDFP], [RS1FP, RS2FP]),
    instr!(FeqD, "feq.d", D, 0xa200_2053, 0xfe00_707f, [RD], [RS1FP, RS2FP]),
    instr!(FltD, "flt.d", D, 0xa200_1053, 0xfe00_707f, [RD], [RS1FP, RS2FP]),
    instr!(FleD, "fle.d", D, 0xa200_0053, 0xfe00_707f, [RD], [RS1FP, RS2FP]),
    instr!(FcvtDS, "fcvt.d.s", D, 0x4200_0053, 0xfff0_007f, [RDFP], [RS1FP, RM]),
    instr!(FcvtSD, "fcvt.s.d", D, 0x4010_0053, 0xfff0_007f, [RDFP], [RS1FP, RM]),
    instr!(FmvXD, "fmv.x.d", D, 0xe200_0053, 0xfff0_707f, [RD], [RS1FP]),
    instr!(FmvDX, "fmv.d.x", D, 0xf200_0053, 0xfff0_707f, [RDFP], [RS1]),

    // RV64C, quadrant 0
    instr!(CAddi4spn, "c.addi4spn", C, 0x0000, 0xe003, [CRD_L], [CIW]),
    instr!(CFld, "c.fld", C, 0x2000, 0xe003, [CRD_LFP], [CLD]),
    instr!(CLw, "c.lw", C, 0x4000, 0xe003, [CRD_L], [CLW]),
    instr!(CLd, "c.ld", C, 0x6000, 0xe003, [CRD_L], [CLD]),
    instr!(CFsd, "c.fsd", C, 0xa000, 0xe003, [CSD], [CRS2_LFP]),
    instr!(CSw, "c.sw", C, 0xc000, 0xe003, [CSW], [CRS2_L]),
    instr!(CSd, "c.sd", C, 0xe000, 0xe003, [CSD], [CRS2_L]),

    // RV64C, quadrant 1
    instr!(CNop, "c.nop", C, 0x0001, 0xef83, [], [CIMM5]),
    instr!(CAddi, "c.addi", C, 0x0001, 0xe003, [CRD], [CIMM5]),
    instr!(CAddiw, "c.addiw", C, 0x2001, 0xe003, [CRD], [CIMM5]),
    instr!(CLi, "c.li", C, 0x4001, 0xe003, [CRD], [CIMM5]),
    instr!(CAddi16sp, "c.addi16sp", C, 0x6101, 0xef83, [], [CA16SP]),
    instr!(CLui, "c.lui", C, 0x6001, 0xe003, [CRD], [CLUI]),
    instr!(CSrli, "c.srli", C, 0x8001, 0xec03, [CRD_CA], [CSHAMT]),
    instr!(CSrai, "c.srai", C, 0x8401, 0xec03, [CRD_CA], [CSHAMT]),
    instr!(CAndi, "c.andi", C, 0x8801, 0xec03, [CRD_CA], [CIMM5]),
    instr!(CSub, "c.sub", C, 0x8c01, 0xfc63, [CRD_CA], [CRS2_L]),
    instr!(CXor, "c.xor", C, 0x8c21, 0xfc63, [CRD_CA], [CRS2_L]),
    instr!(COr, "c.or", C, 0x8c41, 0xfc63, [CRD_CA], [CRS2_L]),
    instr!(CAnd, "c.and", C, 0x8c61, 0xfc63, [CRD_CA], [CRS2_L]),
    instr!(CSubw, "c.subw", C, 0x9c01, 0xfc63, [CRD_CA], [CRS2_L]),
    instr!(CAddw, "c.addw", C, 0x9c21, 0xfc63, [CRD_CA], [CRS2_L]),
    instr!(CJ, "c.j", C, 0xa001, 0xe003, [], [CJ_IMM]),
    instr!(CBeqz, "c.beqz", C, 0xc001, 0xe003, [], [CRS1_L, CB_IMM]),
    instr!(CBnez, "c.bnez", C, 0xe001, 0xe003, [], [CRS1_L, CB_IMM]),

    // RV64C, quadrant 2
    instr!(CSlli, "c.slli", C, 0x0002, 0xe003, [CRD], [CSHAMT]),
    instr!(CFldsp, "c.fldsp", C, 0x2002, 0xe003, [CRDFP], [CLDSP]),
    instr!(CLwsp, "c.lwsp", C, 0x4002, 0xe003, [CRD], [CLWSP]),
    instr!(CLdsp, "c.ldsp", C, 0x6002, 0xe003, [CRD], [CLDSP]),
    instr!(CJr, "c.jr", C, 0x8002, 0xf07f, [], [CRS1]),
    instr!(CMv, "c.mv", C, 0x8002, 0xf003, [CRD], [CRS2]),
    instr!(CEbreak, "c.ebreak", C, 0x9002, 0xffff, [], []),
    instr!(CJalr, "c.jalr", C, 0x9002, 0xf07f, [], [CRS1]),
    instr!(CAdd, "c.add", C, 0x9002, 0xf003, [CRD], [CRS2]),
    instr!(CFsdsp, "c.fsdsp", C, 0xa002, 0xe003, [CSDSP], [CRS2FP]),
    instr!(CSwsp, "c.swsp", C, 0xc002, 0xe003, [CSWSP], [CRS2]),
    instr!(CSdsp, "c.sdsp", C, 0xe002, 0xe003, [CSDSP], [CRS2]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size_matches_opcode_space() {
        assert_eq!(Opcode::from(INSTR_TABLE.len() as u32), Opcode::Invalid);
        assert_ne!(
            Opcode::from((INSTR_TABLE.len() - 1) as u32),
            Opcode::Invalid
        );
    }

    #[test]
    fn test_uncompressed_patterns_are_unique() {
        for (i, a) in INSTR_TABLE.iter().enumerate() {
            if a.is_compressed() {
                continue;
            }
            for b in INSTR_TABLE.iter().skip(i + 1) {
                if b.is_compressed() {
                    continue;
                }
                // no encoding may satisfy both patterns
                let shared = a.mask_bits & b.mask_bits;
                assert_ne!(
                    a.match_bits & shared,
                    b.match_bits & shared,
                    "{} and {} overlap",
                    a.name,
                    b.name
                );
            }
        }
    }

    #[test]
    fn test_known_encodings_match() {
        let cases: &[(Opcode, u32)] = &[
            (Opcode::Lui, 0x0001_0537),  // lui a0, 0x10
            (Opcode::Jal, 0x0000_00ef),  // jal ra, 0
            (Opcode::Addi, 0x0015_0513), // addi a0, a0, 1
            (Opcode::Srai, 0x4030_d593), // srai a1, ra, 3
            (Opcode::Mul, 0x02b5_0533),  // mul a0, a0, a1
            (Opcode::LrW, 0x1005_252f),  // lr.w a0, (a0)
            (Opcode::FmaddD, 0x6ac5_f543),
            (Opcode::Ecall, 0x0000_0073),
        ];
        for (opcode, word) in cases {
            let desc = crate::descriptor::lookup_descriptor(*opcode).unwrap();
            assert!(desc.matches(*word), "{}", desc.name);
        }
    }
}
