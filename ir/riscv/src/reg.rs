/*++

Licensed under the Apache-2.0 license.

File Name:

    reg.rs

Abstract:

    File contains the RISC-V integer and floating point register names.

--*/

use rvdbt_ir_types::ir_enum;

ir_enum! {
    /// RISCV Integer Register
    #[derive(Debug, PartialOrd, Ord, PartialEq, Eq, Clone, Copy)]
    pub XReg;
    u32;
    {
        X0 = 0,
        X1 = 1,
        X2 = 2,
        X3 = 3,
        X4 = 4,
        X5 = 5,
        X6 = 6,
        X7 = 7,
        X8 = 8,
        X9 = 9,
        X10 = 10,
        X11 = 11,
        X12 = 12,
        X13 = 13,
        X14 = 14,
        X15 = 15,
        X16 = 16,
        X17 = 17,
        X18 = 18,
        X19 = 19,
        X20 = 20,
        X21 = 21,
        X22 = 22,
        X23 = 23,
        X24 = 24,
        X25 = 25,
        X26 = 26,
        X27 = 27,
        X28 = 28,
        X29 = 29,
        X30 = 30,
        X31 = 31,
    };
    Invalid
}

ir_enum! {
    /// RISCV Floating Point Register
    #[derive(Debug, PartialOrd, Ord, PartialEq, Eq, Clone, Copy)]
    pub FReg;
    u32;
    {
        F0 = 0,
        F1 = 1,
        F2 = 2,
        F3 = 3,
        F4 = 4,
        F5 = 5,
        F6 = 6,
        F7 = 7,
        F8 = 8,
        F9 = 9,
        F10 = 10,
        F11 = 11,
        F12 = 12,
        F13 = 13,
        F14 = 14,
        F15 = 15,
        F16 = 16,
        F17 = 17,
        F18 = 18,
        F19 = 19,
        F20 = 20,
        F21 = 21,
        F22 = 22,
        F23 = 23,
        F24 = 24,
        F25 = 25,
        F26 = 26,
        F27 = 27,
        F28 = 28,
        F29 = 29,
        F30 = 30,
        F31 = 31,
    };
    Invalid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xreg_conversions() {
        assert_eq!(XReg::from(0u32), XReg::X0);
        assert_eq!(XReg::from(31u32), XReg::X31);
        assert_eq!(XReg::from(32u32), XReg::Invalid);
        assert_eq!(u32::from(XReg::X10), 10);
    }

    #[test]
    fn test_freg_conversions() {
        assert_eq!(FReg::from(8u32), FReg::F8);
        assert_eq!(FReg::from(100u32), FReg::Invalid);
        assert_eq!(u32::from(FReg::F31), 31);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", XReg::X2), "X2");
        assert_eq!(format!("{}", FReg::F0), "F0");
    }
}
