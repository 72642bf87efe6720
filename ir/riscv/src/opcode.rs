/*++

Licensed under the Apache-2.0 license.

File Name:

    opcode.rs

Abstract:

    File contains the opcode name space of the codec. Each opcode's value is
    its index in the instruction descriptor table.

--*/

use rvdbt_ir_types::ir_enum;

/// ISA extension an opcode belongs to.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum IsaExt {
    I,
    M,
    A,
    F,
    D,
    Zicsr,
    Zifencei,
    C,
}

ir_enum! {
    /// RISCV Opcode
    #[derive(Debug, PartialOrd, Ord, PartialEq, Eq, Clone, Copy)]
    pub Opcode;
    u32;
    {
        // All-zero parcel, guaranteed illegal
        Unimp = 0,

        // RV64I
        Lui = 1,
        Auipc = 2,
        Jal = 3,
        Jalr = 4,
        Beq = 5,
        Bne = 6,
        Blt = 7,
        Bge = 8,
        Bltu = 9,
        Bgeu = 10,
        Lb = 11,
        Lh = 12,
        Lw = 13,
        Ld = 14,
        Lbu = 15,
        Lhu = 16,
        Lwu = 17,
        Sb = 18,
        Sh = 19,
        Sw = 20,
        Sd = 21,
        Addi = 22,
        Slti = 23,
        Sltiu = 24,
        Xori = 25,
        Ori = 26,
        Andi = 27,
        Slli = 28,
        Srli = 29,
        Srai = 30,
        Addiw = 31,
        Slliw = 32,
        Srliw = 33,
        Sraiw = 34,
        Add = 35,
        Sub = 36,
        Sll = 37,
        Slt = 38,
        Sltu = 39,
        Xor = 40,
        Srl = 41,
        Sra = 42,
        Or = 43,
        And = 44,
        Addw = 45,
        Subw = 46,
        Sllw = 47,
        Srlw = 48,
        Sraw = 49,
        Fence = 50,
        FenceI = 51,
        Ecall = 52,
        Ebreak = 53,
        Sret = 54,
        Mret = 55,
        Wfi = 56,

        // Zicsr
        Csrrw = 57,
        Csrrs = 58,
        Csrrc = 59,
        Csrrwi = 60,
        Csrrsi = 61,
        Csrrci = 62,

        // RV64M
        Mul = 63,
        Mulh = 64,
        Mulhsu = 65,
        Mulhu = 66,
        Div = 67,
        Divu = 68,
        Rem = 69,
        Remu = 70,
        Mulw = 71,
        Divw = 72,
        Divuw = 73,
        Remw = 74,
        Remuw = 75,

        // RV64A
        LrW = 76,
        ScW = 77,
        AmoswapW = 78,
        AmoaddW = 79,
        AmoxorW = 80,
        AmoandW = 81,
        AmoorW = 82,
        AmominW = 83,
        AmomaxW = 84,
        AmominuW = 85,
        AmomaxuW = 86,
        LrD = 87,
        ScD = 88,
        AmoswapD = 89,
        AmoaddD = 90,
        AmoxorD = 91,
        AmoandD = 92,
        AmoorD = 93,
        AmominD = 94,
        AmomaxD = 95,
        AmominuD = 96,
        AmomaxuD = 97,

        // RV64F
        Flw = 98,
        Fsw = 99,
        FmaddS = 100,
        FmsubS = 101,
        FnmsubS = 102,
        FnmaddS = 103,
        FaddS = 104,
        FsubS = 105,
        FmulS = 106,
        FdivS = 107,
        FsqrtS = 108,
        FsgnjS = 109,
        FsgnjnS = 110,
        FsgnjxS = 111,
        FminS = 112,
        FmaxS = 113,
        FeqS = 114,
        FltS = 115,
        FleS = 116,
        FcvtWS = 117,
        FcvtSW = 118,
        FmvXW = 119,
        FmvWX = 120,

        // RV64D
        Fld = 121,
        Fsd = 122,
        FmaddD = 123,
        FmsubD = 124,
        FnmsubD = 125,
        FnmaddD = 126,
        FaddD = 127,
        FsubD = 128,
        FmulD = 129,
        FdivD = 130,
        FsqrtD = 131,
        FsgnjD = 132,
        FsgnjnD = 133,
        FsgnjxD = 134,
        FminD = 135,
        FmaxD = 136,
        FeqD = 137,
        FltD = 138,
        FleD = 139,
        FcvtDS = 140,
        FcvtSD = 141,
        FmvXD = 142,
        FmvDX = 143,

        // RV64C, quadrant 0
        CAddi4spn = 144,
        CFld = 145,
        CLw = 146,
        CLd = 147,
        CFsd = 148,
        CSw = 149,
        CSd = 150,

        // RV64C, quadrant 1
        CNop = 151,
        CAddi = 152,
        CAddiw = 153,
        CLi = 154,
        CAddi16sp = 155,
        CLui = 156,
        CSrli = 157,
        CSrai = 158,
        CAndi = 159,
        CSub = 160,
        CXor = 161,
        COr = 162,
        CAnd = 163,
        CSubw = 164,
        CAddw = 165,
        CJ = 166,
        CBeqz = 167,
        CBnez = 168,

        // RV64C, quadrant 2
        CSlli = 169,
        CFldsp = 170,
        CLwsp = 171,
        CLdsp = 172,
        CJr = 173,
        CMv = 174,
        CEbreak = 175,
        CJalr = 176,
        CAdd = 177,
        CFsdsp = 178,
        CSwsp = 179,
        CSdsp = 180,
    };
    Invalid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(Opcode::from(0u32), Opcode::Unimp);
        assert_eq!(Opcode::from(35u32), Opcode::Add);
        assert_eq!(Opcode::from(180u32), Opcode::CSdsp);
        assert_eq!(Opcode::from(181u32), Opcode::Invalid);
        assert_eq!(u32::from(Opcode::CAddi4spn), 144);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Opcode::Addiw), "Addiw");
        assert_eq!(format!("{}", Opcode::CLwsp), "CLwsp");
    }
}
