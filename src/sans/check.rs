//! Helper for computing cyclic redundancy checks.

/// Result of [`crc8`] over a message carrying a correct check byte.
pub const CHECK_VALUE: u8 = 0x80;

/// Compute an MSB-first CRC-8 (polynomial `x^8 + x^5 + x^3 + x^2 + x + 1`)
/// over the low 28 bits of a word.
///
/// The upper four bits (the address class) do not participate. The seed is
/// non-zero, so a valid message checks to [`CHECK_VALUE`] rather than zero.
pub const fn crc8(message: u32) -> u8 {
    const BITS: u32 = 28;
    const SEED: u32 = 0x54a9_abf8;
    const GENERATOR: u32 = 0x12f << 23;

    let mut crc = SEED ^ (message << (32 - BITS));

    let mut i = 0;
    while i < BITS {
        if crc & (1 << 31) != 0 {
            crc ^= GENERATOR;
        }
        crc <<= 1;
        i += 1;
    }

    (crc >> 24) as u8
}
