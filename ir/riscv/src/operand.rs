/*++

Licensed under the Apache-2.0 license.

File Name:

    operand.rs

Abstract:

    File contains the machine-independent operand model produced by the
    decoder and consumed by the encoder.

--*/

use crate::reg::{FReg, XReg};
use rvdbt_ir_types::RvAddr;

/// Data size attached to an operand.
///
/// Register and memory operands carry their access width; immediates carry
/// their encoded bit width.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OpndSize {
    NA,
    Bits2,
    Bits3,
    Bits4,
    Bits5,
    Bits6,
    Bits7,
    Bits9,
    Bits10,
    Bits12,
    Bits20,
    Byte,
    Half,
    Word,
    Double,
    Ptr,
}

impl OpndSize {
    pub fn bits(&self) -> u32 {
        match self {
            OpndSize::NA => 0,
            OpndSize::Bits2 => 2,
            OpndSize::Bits3 => 3,
            OpndSize::Bits4 => 4,
            OpndSize::Bits5 => 5,
            OpndSize::Bits6 => 6,
            OpndSize::Bits7 => 7,
            OpndSize::Bits9 => 9,
            OpndSize::Bits10 => 10,
            OpndSize::Bits12 => 12,
            OpndSize::Bits20 => 20,
            OpndSize::Byte => 8,
            OpndSize::Half => 16,
            OpndSize::Word => 32,
            OpndSize::Double => 64,
            OpndSize::Ptr => 64,
        }
    }
}

/// Register operand, either bank.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RvReg {
    X(XReg),
    F(FReg),
}

/// Target of a PC-relative operand.
///
/// Decoded operands are always `Resolved`. A caller synthesizing an
/// instruction may leave the target `Pending`; the encoder refuses such
/// operands until a concrete address is filled in.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Target {
    Resolved(RvAddr),
    Pending,
}

/// A single operand slot of an instruction record.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operand {
    None,
    Reg(RvReg),
    Imm {
        value: i64,
        size: OpndSize,
        /// Disassembly hint: print in decimal rather than hex.
        decimal: bool,
    },
    BaseDisp {
        base: XReg,
        disp: i32,
        size: OpndSize,
    },
    Pcrel {
        offset: i32,
        target: Target,
        size: OpndSize,
    },
}

impl Operand {
    pub fn reg_x(reg: XReg) -> Self {
        Operand::Reg(RvReg::X(reg))
    }

    pub fn reg_f(reg: FReg) -> Self {
        Operand::Reg(RvReg::F(reg))
    }

    pub fn imm(value: i64, size: OpndSize) -> Self {
        Operand::Imm {
            value,
            size,
            decimal: false,
        }
    }

    pub fn imm_dec(value: i64, size: OpndSize) -> Self {
        Operand::Imm {
            value,
            size,
            decimal: true,
        }
    }

    pub fn base_disp(base: XReg, disp: i32, size: OpndSize) -> Self {
        Operand::BaseDisp { base, disp, size }
    }

    pub fn pcrel(offset: i32, target: Target, size: OpndSize) -> Self {
        Operand::Pcrel {
            offset,
            target,
            size,
        }
    }

    /// Returns the resolved target address of a PC-relative operand.
    pub fn target(&self) -> Option<RvAddr> {
        match self {
            Operand::Pcrel {
                target: Target::Resolved(addr),
                ..
            } => Some(*addr),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_bits() {
        assert_eq!(OpndSize::NA.bits(), 0);
        assert_eq!(OpndSize::Bits12.bits(), 12);
        assert_eq!(OpndSize::Word.bits(), 32);
        assert_eq!(OpndSize::Ptr.bits(), 64);
    }

    #[test]
    fn test_target() {
        let opnd = Operand::pcrel(-8, Target::Resolved(0x1000), OpndSize::Half);
        assert_eq!(opnd.target(), Some(0x1000));

        let opnd = Operand::pcrel(0, Target::Pending, OpndSize::Half);
        assert_eq!(opnd.target(), None);
        assert_eq!(Operand::reg_x(XReg::X5).target(), None);
    }
}
