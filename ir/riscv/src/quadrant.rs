/*++

Licensed under the Apache-2.0 license.

File Name:

    quadrant.rs

Abstract:

    File contains the dispatcher for compressed encodings. The compressed
    space is small enough that a hand-written quadrant/funct3 decision tree
    beats a trie, and several encodings alias on funct4 alone (c.jr/c.mv,
    c.ebreak/c.jalr/c.add), which a match/mask trie cannot separate.

--*/

use crate::bits::{get_bit, get_field};
use crate::opcode::Opcode;

/// Map a 16-bit parcel to its descriptor table index.
pub(crate) fn lookup(word: u16) -> Option<u16> {
    // the all-zero parcel is the canonical illegal instruction
    if word == 0 {
        return Some(Opcode::Unimp as u16);
    }
    let word = word as u32;
    let funct3 = get_field(word, 15, 13);
    let rd = get_field(word, 11, 7);
    let rs2 = get_field(word, 6, 2);

    let opcode = match word & 0b11 {
        0b00 => match funct3 {
            0 => Opcode::CAddi4spn,
            1 => Opcode::CFld,
            2 => Opcode::CLw,
            3 => Opcode::CLd,
            5 => Opcode::CFsd,
            6 => Opcode::CSw,
            7 => Opcode::CSd,
            _ => return None,
        },
        0b01 => match funct3 {
            0 => {
                if rd == 0 {
                    Opcode::CNop
                } else {
                    Opcode::CAddi
                }
            }
            1 => Opcode::CAddiw,
            2 => Opcode::CLi,
            3 => {
                if rd == 2 {
                    Opcode::CAddi16sp
                } else {
                    Opcode::CLui
                }
            }
            4 => match get_field(word, 11, 10) {
                0 => Opcode::CSrli,
                1 => Opcode::CSrai,
                2 => Opcode::CAndi,
                _ => {
                    let funct2 = get_field(word, 6, 5);
                    if get_bit(word, 12) == 0 {
                        match funct2 {
                            0 => Opcode::CSub,
                            1 => Opcode::CXor,
                            2 => Opcode::COr,
                            _ => Opcode::CAnd,
                        }
                    } else {
                        match funct2 {
                            0 => Opcode::CSubw,
                            1 => Opcode::CAddw,
                            _ => return None,
                        }
                    }
                }
            },
            5 => Opcode::CJ,
            6 => Opcode::CBeqz,
            _ => Opcode::CBnez,
        },
        0b10 => match funct3 {
            0 => Opcode::CSlli,
            1 => Opcode::CFldsp,
            2 => Opcode::CLwsp,
            3 => Opcode::CLdsp,
            4 => {
                if get_bit(word, 12) == 0 {
                    if rs2 == 0 {
                        Opcode::CJr
                    } else {
                        Opcode::CMv
                    }
                } else if rd == 0 && rs2 == 0 {
                    Opcode::CEbreak
                } else if rs2 == 0 {
                    Opcode::CJalr
                } else {
                    Opcode::CAdd
                }
            }
            5 => Opcode::CFsdsp,
            6 => Opcode::CSwsp,
            _ => Opcode::CSdsp,
        },
        // quadrant 3 is the uncompressed space
        _ => return None,
    };
    Some(opcode as u16)
}
