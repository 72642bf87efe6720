/*++

Licensed under the Apache-2.0 license.

File Name:

    fmt16.rs

Abstract:

    File contains bitfield views of the compressed (16-bit) instruction
    formats. Only the low 16 bits of the wrapped word are meaningful.
    Combining accessors name immediate bits by their position in the decoded
    value, not in the encoding.

--*/

use crate::bits::sign_extend32;
use bitfield::bitfield;

bitfield! {
    /// CR format: register/register ops in quadrant 2
    pub struct CrFmt(u32);
    impl Debug;
    pub u32, rd, set_rd: 11, 7;
    pub u32, rs2, set_rs2: 6, 2;
}

bitfield! {
    /// CI format: full-register ops with a 6-bit immediate
    pub struct CiFmt(u32);
    impl Debug;
    pub u32, rd, set_rd: 11, 7;
    u32, imm5, set_imm5: 12, 12;
    u32, imm4_0, set_imm4_0: 6, 2;
}

impl CiFmt {
    pub fn imm(&self) -> i32 {
        sign_extend32(self.uimm(), 6)
    }

    pub fn set_imm(&mut self, imm: i32) {
        self.set_uimm(imm as u32 & 0x3f);
    }

    pub fn uimm(&self) -> u32 {
        (self.imm5() << 5) | self.imm4_0()
    }

    pub fn set_uimm(&mut self, uimm: u32) {
        self.set_imm5((uimm >> 5) & 1);
        self.set_imm4_0(uimm & 0x1f);
    }
}

bitfield! {
    /// CI format variant used by c.addi16sp
    pub struct CAddi16spFmt(u32);
    impl Debug;
    u32, imm9, set_imm9: 12, 12;
    u32, imm8_7, set_imm8_7: 4, 3;
    u32, imm6, set_imm6: 5, 5;
    u32, imm5, set_imm5: 2, 2;
    u32, imm4, set_imm4: 6, 6;
}

impl CAddi16spFmt {
    pub fn imm(&self) -> i32 {
        sign_extend32(
            (self.imm9() << 9)
                | (self.imm8_7() << 7)
                | (self.imm6() << 6)
                | (self.imm5() << 5)
                | (self.imm4() << 4),
            10,
        )
    }

    pub fn set_imm(&mut self, imm: i32) {
        let imm = imm as u32;
        self.set_imm9((imm >> 9) & 1);
        self.set_imm8_7((imm >> 7) & 3);
        self.set_imm6((imm >> 6) & 1);
        self.set_imm5((imm >> 5) & 1);
        self.set_imm4((imm >> 4) & 1);
    }
}

bitfield! {
    /// CI format variants used by the stack-pointer-relative loads
    pub struct CiSpFmt(u32);
    impl Debug;
    pub u32, rd, set_rd: 11, 7;
    u32, imm5, set_imm5: 12, 12;
    // word form
    u32, w4_2, set_w4_2: 6, 4;
    u32, w7_6, set_w7_6: 3, 2;
    // double form
    u32, d4_3, set_d4_3: 6, 5;
    u32, d8_6, set_d8_6: 4, 2;
}

impl CiSpFmt {
    pub fn uimm_w(&self) -> u32 {
        (self.w7_6() << 6) | (self.imm5() << 5) | (self.w4_2() << 2)
    }

    pub fn set_uimm_w(&mut self, uimm: u32) {
        self.set_w7_6((uimm >> 6) & 3);
        self.set_imm5((uimm >> 5) & 1);
        self.set_w4_2((uimm >> 2) & 7);
    }

    pub fn uimm_d(&self) -> u32 {
        (self.d8_6() << 6) | (self.imm5() << 5) | (self.d4_3() << 3)
    }

    pub fn set_uimm_d(&mut self, uimm: u32) {
        self.set_d8_6((uimm >> 6) & 7);
        self.set_imm5((uimm >> 5) & 1);
        self.set_d4_3((uimm >> 3) & 3);
    }
}

bitfield! {
    /// CSS format: stack-pointer-relative stores
    pub struct CssFmt(u32);
    impl Debug;
    pub u32, rs2, set_rs2: 6, 2;
    // word form
    u32, w5_2, set_w5_2: 12, 9;
    u32, w7_6, set_w7_6: 8, 7;
    // double form
    u32, d5_3, set_d5_3: 12, 10;
    u32, d8_6, set_d8_6: 9, 7;
}

impl CssFmt {
    pub fn uimm_w(&self) -> u32 {
        (self.w7_6() << 6) | (self.w5_2() << 2)
    }

    pub fn set_uimm_w(&mut self, uimm: u32) {
        self.set_w7_6((uimm >> 6) & 3);
        self.set_w5_2((uimm >> 2) & 0xf);
    }

    pub fn uimm_d(&self) -> u32 {
        (self.d8_6() << 6) | (self.d5_3() << 3)
    }

    pub fn set_uimm_d(&mut self, uimm: u32) {
        self.set_d8_6((uimm >> 6) & 7);
        self.set_d5_3((uimm >> 3) & 7);
    }
}

bitfield! {
    /// CIW format: c.addi4spn
    pub struct CiwFmt(u32);
    impl Debug;
    pub u32, rd_lim, set_rd_lim: 4, 2;
    u32, imm9_6, set_imm9_6: 10, 7;
    u32, imm5_4, set_imm5_4: 12, 11;
    u32, imm3, set_imm3: 5, 5;
    u32, imm2, set_imm2: 6, 6;
}

impl CiwFmt {
    pub fn uimm(&self) -> u32 {
        (self.imm9_6() << 6) | (self.imm5_4() << 4) | (self.imm3() << 3) | (self.imm2() << 2)
    }

    pub fn set_uimm(&mut self, uimm: u32) {
        self.set_imm9_6((uimm >> 6) & 0xf);
        self.set_imm5_4((uimm >> 4) & 3);
        self.set_imm3((uimm >> 3) & 1);
        self.set_imm2((uimm >> 2) & 1);
    }
}

bitfield! {
    /// CL/CS format: limited-register loads and stores
    pub struct ClsFmt(u32);
    impl Debug;
    pub u32, rs1_lim, set_rs1_lim: 9, 7;
    pub u32, reg_lim, set_reg_lim: 4, 2;
    u32, imm5_3, set_imm5_3: 12, 10;
    // word form
    u32, w2, set_w2: 6, 6;
    u32, w6, set_w6: 5, 5;
    // double form
    u32, d7_6, set_d7_6: 6, 5;
}

impl ClsFmt {
    pub fn uimm_w(&self) -> u32 {
        (self.w6() << 6) | (self.imm5_3() << 3) | (self.w2() << 2)
    }

    pub fn set_uimm_w(&mut self, uimm: u32) {
        self.set_w6((uimm >> 6) & 1);
        self.set_imm5_3((uimm >> 3) & 7);
        self.set_w2((uimm >> 2) & 1);
    }

    pub fn uimm_d(&self) -> u32 {
        (self.d7_6() << 6) | (self.imm5_3() << 3)
    }

    pub fn set_uimm_d(&mut self, uimm: u32) {
        self.set_d7_6((uimm >> 6) & 3);
        self.set_imm5_3((uimm >> 3) & 7);
    }
}

bitfield! {
    /// CB format: compressed conditional branches
    pub struct CbFmt(u32);
    impl Debug;
    pub u32, rs1_lim, set_rs1_lim: 9, 7;
    u32, off8, set_off8: 12, 12;
    u32, off7_6, set_off7_6: 6, 5;
    u32, off5, set_off5: 2, 2;
    u32, off4_3, set_off4_3: 11, 10;
    u32, off2_1, set_off2_1: 4, 3;
}

impl CbFmt {
    pub fn offset(&self) -> i32 {
        sign_extend32(
            (self.off8() << 8)
                | (self.off7_6() << 6)
                | (self.off5() << 5)
                | (self.off4_3() << 3)
                | (self.off2_1() << 1),
            9,
        )
    }

    pub fn set_offset(&mut self, offset: i32) {
        let offset = offset as u32;
        self.set_off8((offset >> 8) & 1);
        self.set_off7_6((offset >> 6) & 3);
        self.set_off5((offset >> 5) & 1);
        self.set_off4_3((offset >> 3) & 3);
        self.set_off2_1((offset >> 1) & 3);
    }
}

bitfield! {
    /// CJ format: compressed jumps
    pub struct CjFmt(u32);
    impl Debug;
    u32, off11, set_off11: 12, 12;
    u32, off10, set_off10: 8, 8;
    u32, off9_8, set_off9_8: 10, 9;
    u32, off7, set_off7: 6, 6;
    u32, off6, set_off6: 7, 7;
    u32, off5, set_off5: 2, 2;
    u32, off4, set_off4: 11, 11;
    u32, off3_1, set_off3_1: 5, 3;
}

impl CjFmt {
    pub fn offset(&self) -> i32 {
        sign_extend32(
            (self.off11() << 11)
                | (self.off10() << 10)
                | (self.off9_8() << 8)
                | (self.off7() << 7)
                | (self.off6() << 6)
                | (self.off5() << 5)
                | (self.off4() << 4)
                | (self.off3_1() << 1),
            12,
        )
    }

    pub fn set_offset(&mut self, offset: i32) {
        let offset = offset as u32;
        self.set_off11((offset >> 11) & 1);
        self.set_off10((offset >> 10) & 1);
        self.set_off9_8((offset >> 8) & 3);
        self.set_off7((offset >> 7) & 1);
        self.set_off6((offset >> 6) & 1);
        self.set_off5((offset >> 5) & 1);
        self.set_off4((offset >> 4) & 1);
        self.set_off3_1((offset >> 1) & 7);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ci_imm() {
        // c.li a0, -1 == 0x557d
        let fmt = CiFmt(0x557d);
        assert_eq!(fmt.rd(), 10);
        assert_eq!(fmt.imm(), -1);
        assert_eq!(fmt.uimm(), 0x3f);

        let mut fmt = CiFmt(0x4001);
        fmt.set_rd(10);
        fmt.set_imm(-1);
        assert_eq!(fmt.0, 0x557d);
    }

    #[test]
    fn test_caddi16sp_imm() {
        // c.addi16sp sp, -64 == 0x7139
        let fmt = CAddi16spFmt(0x7139);
        assert_eq!(fmt.imm(), -64);

        let mut fmt = CAddi16spFmt(0x6101);
        fmt.set_imm(-64);
        assert_eq!(fmt.0, 0x7139);

        for imm in [-512, -16, 16, 496] {
            let mut fmt = CAddi16spFmt(0x6101);
            fmt.set_imm(imm);
            assert_eq!(fmt.imm(), imm);
        }
    }

    #[test]
    fn test_cisp_imm() {
        // c.lwsp a5, 0(sp) == 0x4782
        let fmt = CiSpFmt(0x4782);
        assert_eq!(fmt.rd(), 15);
        assert_eq!(fmt.uimm_w(), 0);

        // c.ldsp s0, 16(sp) == 0x6442
        let fmt = CiSpFmt(0x6442);
        assert_eq!(fmt.rd(), 8);
        assert_eq!(fmt.uimm_d(), 16);

        for uimm in [0u32, 4, 60, 252] {
            let mut fmt = CiSpFmt(0x4002);
            fmt.set_uimm_w(uimm);
            assert_eq!(fmt.uimm_w(), uimm);
        }
        for uimm in [0u32, 8, 120, 504] {
            let mut fmt = CiSpFmt(0x6002);
            fmt.set_uimm_d(uimm);
            assert_eq!(fmt.uimm_d(), uimm);
        }
    }

    #[test]
    fn test_css_imm() {
        // c.sdsp s0, 16(sp) == 0xe822
        let fmt = CssFmt(0xe822);
        assert_eq!(fmt.rs2(), 8);
        assert_eq!(fmt.uimm_d(), 16);

        for uimm in [0u32, 4, 60, 252] {
            let mut fmt = CssFmt(0xc002);
            fmt.set_uimm_w(uimm);
            assert_eq!(fmt.uimm_w(), uimm);
        }
        for uimm in [0u32, 8, 120, 504] {
            let mut fmt = CssFmt(0xe002);
            fmt.set_uimm_d(uimm);
            assert_eq!(fmt.uimm_d(), uimm);
        }
    }

    #[test]
    fn test_ciw_imm() {
        // c.addi4spn a0, sp, 16 == 0x0808
        let fmt = CiwFmt(0x0808);
        assert_eq!(fmt.rd_lim(), 2);
        assert_eq!(fmt.uimm(), 16);

        for uimm in [4u32, 8, 16, 1020] {
            let mut fmt = CiwFmt(0);
            fmt.set_uimm(uimm);
            assert_eq!(fmt.uimm(), uimm);
        }
    }

    #[test]
    fn test_cls_imm() {
        // c.ld a2, 8(a0) == 0x6510
        let fmt = ClsFmt(0x6510);
        assert_eq!(fmt.rs1_lim(), 2);
        assert_eq!(fmt.reg_lim(), 4);
        assert_eq!(fmt.uimm_d(), 8);

        for uimm in [0u32, 4, 64, 124] {
            let mut fmt = ClsFmt(0x4000);
            fmt.set_uimm_w(uimm);
            assert_eq!(fmt.uimm_w(), uimm);
        }
        for uimm in [0u32, 8, 64, 248] {
            let mut fmt = ClsFmt(0x6000);
            fmt.set_uimm_d(uimm);
            assert_eq!(fmt.uimm_d(), uimm);
        }
    }

    #[test]
    fn test_cb_offset() {
        // c.beqz a0, -6 == 0xdd6d
        let fmt = CbFmt(0xdd6d);
        assert_eq!(fmt.rs1_lim(), 2);
        assert_eq!(fmt.offset(), -6);

        for offset in [-256, -2, 0, 2, 254] {
            let mut fmt = CbFmt(0xc001);
            fmt.set_offset(offset);
            assert_eq!(fmt.offset(), offset);
        }
    }

    #[test]
    fn test_cj_offset() {
        // c.j -6 == 0xbfed
        let fmt = CjFmt(0xbfed);
        assert_eq!(fmt.offset(), -6);

        for offset in [-2048, -2, 0, 2, 2046] {
            let mut fmt = CjFmt(0xa001);
            fmt.set_offset(offset);
            assert_eq!(fmt.offset(), offset);
        }
    }
}
