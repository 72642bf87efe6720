/*++

Licensed under the Apache-2.0 license.

File Name:

    fmt32.rs

Abstract:

    File contains bitfield views of the 32-bit instruction formats. Scrambled
    immediates are exposed as whole values via the combining accessors.

--*/

use crate::bits::sign_extend32;
use bitfield::bitfield;

bitfield! {
    /// I-type format
    pub struct FmtI(u32);
    impl Debug;
    pub u32, rd, set_rd: 11, 7;
    pub u32, rs1, set_rs1: 19, 15;
    pub i32, imm, set_imm: 31, 20;
    pub u32, uimm, set_uimm: 31, 20;
    pub u32, shamt, set_shamt: 25, 20;
    pub u32, shamt5, set_shamt5: 24, 20;
    pub u32, shamt6, set_shamt6: 26, 20;
    pub u32, fm, set_fm: 31, 28;
    pub u32, pred, set_pred: 27, 24;
    pub u32, succ, set_succ: 23, 20;
}

bitfield! {
    /// S-type format
    pub struct FmtS(u32);
    impl Debug;
    pub u32, rs1, set_rs1: 19, 15;
    pub u32, rs2, set_rs2: 24, 20;
    u32, imm11_5, set_imm11_5: 31, 25;
    u32, imm4_0, set_imm4_0: 11, 7;
}

impl FmtS {
    pub fn imm(&self) -> i32 {
        sign_extend32((self.imm11_5() << 5) | self.imm4_0(), 12)
    }

    pub fn set_imm(&mut self, imm: i32) {
        let imm = imm as u32;
        self.set_imm11_5((imm >> 5) & 0x7f);
        self.set_imm4_0(imm & 0x1f);
    }
}

bitfield! {
    /// B-type format
    pub struct FmtB(u32);
    impl Debug;
    pub u32, rs1, set_rs1: 19, 15;
    pub u32, rs2, set_rs2: 24, 20;
    u32, imm12, set_imm12: 31, 31;
    u32, imm11, set_imm11: 7, 7;
    u32, imm10_5, set_imm10_5: 30, 25;
    u32, imm4_1, set_imm4_1: 11, 8;
}

impl FmtB {
    pub fn imm(&self) -> i32 {
        sign_extend32(
            (self.imm12() << 12) | (self.imm11() << 11) | (self.imm10_5() << 5) | (self.imm4_1() << 1),
            13,
        )
    }

    pub fn set_imm(&mut self, imm: i32) {
        let imm = imm as u32;
        self.set_imm12((imm >> 12) & 1);
        self.set_imm11((imm >> 11) & 1);
        self.set_imm10_5((imm >> 5) & 0x3f);
        self.set_imm4_1((imm >> 1) & 0xf);
    }
}

bitfield! {
    /// U-type format
    pub struct FmtU(u32);
    impl Debug;
    pub u32, rd, set_rd: 11, 7;
    pub u32, imm, set_imm: 31, 12;
}

bitfield! {
    /// J-type format
    pub struct FmtJ(u32);
    impl Debug;
    pub u32, rd, set_rd: 11, 7;
    u32, imm20, set_imm20: 31, 31;
    u32, imm19_12, set_imm19_12: 19, 12;
    u32, imm11, set_imm11: 20, 20;
    u32, imm10_1, set_imm10_1: 30, 21;
}

impl FmtJ {
    pub fn imm(&self) -> i32 {
        sign_extend32(
            (self.imm20() << 20)
                | (self.imm19_12() << 12)
                | (self.imm11() << 11)
                | (self.imm10_1() << 1),
            21,
        )
    }

    pub fn set_imm(&mut self, imm: i32) {
        let imm = imm as u32;
        self.set_imm20((imm >> 20) & 1);
        self.set_imm19_12((imm >> 12) & 0xff);
        self.set_imm11((imm >> 11) & 1);
        self.set_imm10_1((imm >> 1) & 0x3ff);
    }
}

bitfield! {
    /// R-type format, including the R4 and AMO variants
    pub struct FmtR(u32);
    impl Debug;
    pub u32, rd, set_rd: 11, 7;
    pub u32, rs1, set_rs1: 19, 15;
    pub u32, rs2, set_rs2: 24, 20;
    pub u32, rs3, set_rs3: 31, 27;
    pub u32, rm, set_rm: 14, 12;
    pub u32, aqrl, set_aqrl: 26, 25;
}
