/*++

Licensed under the Apache-2.0 license.

File Name:

    bits.rs

Abstract:

    File contains bit-level primitives shared by the instruction codec.

--*/

/// Extract the inclusive bit range `[hi:lo]` of `val`, shifted down to bit 0.
pub fn get_field(val: u32, hi: u32, lo: u32) -> u32 {
    debug_assert!(hi >= lo && hi < 32);
    ((val >> lo) as u64 & ((1u64 << (hi - lo + 1)) - 1)) as u32
}

/// Extract a single bit of `val`.
pub fn get_bit(val: u32, bit: u32) -> u32 {
    debug_assert!(bit < 32);
    (val >> bit) & 1
}

/// Overwrite the inclusive bit range `[hi:lo]` of `word` with the low bits of
/// `field`.
pub fn set_field(word: &mut u32, hi: u32, lo: u32, field: u32) {
    debug_assert!(hi >= lo && hi < 32);
    let mask = (((1u64 << (hi - lo + 1)) - 1) as u32) << lo;
    *word = (*word & !mask) | ((field << lo) & mask);
}

/// Sign-extend the low `bits` bits of `val`.
pub fn sign_extend32(val: u32, bits: u32) -> i32 {
    debug_assert!(bits >= 1 && bits < 32);
    ((val << (32 - bits)) as i32) >> (32 - bits)
}

/// Returns true if `val` is representable as a `bits`-bit two's complement
/// integer.
pub fn fits_signed(val: i64, bits: u32) -> bool {
    debug_assert!(bits >= 1 && bits < 64);
    val >= -(1i64 << (bits - 1)) && val < (1i64 << (bits - 1))
}

/// Returns true if `val` is representable as a `bits`-bit unsigned integer.
pub fn fits_unsigned(val: i64, bits: u32) -> bool {
    debug_assert!(bits >= 1 && bits < 64);
    val >= 0 && val < (1i64 << bits)
}
