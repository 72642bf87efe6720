/*++

Licensed under the Apache-2.0 license.

File Name:

    width.rs

Abstract:

    File contains the instruction width classifier. The width of a RISC-V
    instruction is fully determined by its first 16 bits.

--*/

/// Classify the byte width of an instruction from its first parcel.
///
/// Returns `None` when the parcel matches the reserved length prefix
/// (bits `[6:0]` all ones with bits `[14:12]` all ones).
pub fn instr_width(first: u16) -> Option<usize> {
    if first & 0b11 != 0b11 {
        return Some(2);
    }
    if first & 0b1_1100 != 0b1_1100 {
        return Some(4);
    }
    if first & 0b11_1111 == 0b01_1111 {
        return Some(6);
    }
    if first & 0b111_1111 == 0b011_1111 {
        return Some(8);
    }
    // (80 + 16 * n) bit encodings, n in 0..=6
    let n = (first >> 12) & 0b111;
    if first & 0b111_1111 == 0b111_1111 && n != 0b111 {
        return Some(10 + 2 * n as usize);
    }
    None
}
