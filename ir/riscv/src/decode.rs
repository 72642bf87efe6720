/*++

Licensed under the Apache-2.0 license.

File Name:

    decode.rs

Abstract:

    File contains the decode orchestrator: width classification, dispatch,
    pattern validation and operand extraction. Any failure discards the
    partially built record.

--*/

use crate::descriptor;
use crate::fields::decode_fld;
use crate::instr::{Instr, MAX_DSTS, MAX_SRCS};
use crate::operand::Operand;
use crate::quadrant;
use crate::trie;
use crate::width::instr_width;
use rvdbt_ir_types::{CodecError, RvAddr, RvWord};

/// Decode one instruction from `bytes` located at `pc`.
///
/// Returns the record and the address of the next instruction.
pub fn decode(bytes: &[u8], pc: RvAddr) -> Result<(Instr, RvAddr), CodecError> {
    decode_common(bytes, pc, pc)
}

/// Decode one instruction whose bytes live at `copy_pc` but logically belong
/// at `orig_pc`. PC-relative operands resolve against `orig_pc`; the
/// returned next-instruction address advances from `copy_pc`.
pub fn decode_from_copy(
    bytes: &[u8],
    copy_pc: RvAddr,
    orig_pc: RvAddr,
) -> Result<(Instr, RvAddr), CodecError> {
    decode_common(bytes, copy_pc, orig_pc)
}

fn decode_common(
    bytes: &[u8],
    copy_pc: RvAddr,
    orig_pc: RvAddr,
) -> Result<(Instr, RvAddr), CodecError> {
    if bytes.len() < 2 {
        return Err(CodecError::truncated_instr(bytes.len()));
    }
    let first = u16::from_le_bytes([bytes[0], bytes[1]]);
    let width = instr_width(first).ok_or_else(|| CodecError::unclassifiable_width(first))?;

    let (word, index): (RvWord, u16) = match width {
        2 => {
            let word = first as u32;
            let index = quadrant::lookup(first).ok_or_else(|| CodecError::unknown_instr(word))?;
            (word, index)
        }
        4 => {
            if bytes.len() < 4 {
                return Err(CodecError::truncated_instr(bytes.len()));
            }
            let word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
            let index = trie::lookup(word).ok_or_else(|| CodecError::unknown_instr(word))?;
            (word, index)
        }
        // classifiable longer widths carry no defined opcodes
        _ => return Err(CodecError::unknown_instr(first as u32)),
    };

    let desc = descriptor::lookup(index as usize)?;
    // dispatch narrows, the pattern check decides
    if !desc.matches(word) {
        return Err(CodecError::unknown_instr(word));
    }
    if desc.dsts.len() > MAX_DSTS || desc.srcs.len() > MAX_SRCS {
        return Err(CodecError::bad_descriptor(index as u64));
    }

    let mut instr = Instr {
        opcode: desc.opcode,
        dsts: [Operand::None; MAX_DSTS],
        srcs: [Operand::None; MAX_SRCS],
        ndst: desc.dsts.len() as u8,
        nsrc: desc.srcs.len() as u8,
        length: width as u8,
        pc: orig_pc,
        raw: None,
    };
    for (slot, spec) in desc.dsts.iter().enumerate() {
        instr.dsts[slot] = decode_fld(spec.fld, word, spec.size, copy_pc, orig_pc)?;
    }
    for (slot, spec) in desc.srcs.iter().enumerate().rev() {
        instr.srcs[slot] = decode_fld(spec.fld, word, spec.size, copy_pc, orig_pc)?;
    }
    // the raw cache is only valid for bytes decoded in place
    if copy_pc == orig_pc {
        instr.raw = Some(word);
    }
    Ok((instr, copy_pc.wrapping_add(width as u64)))
}
