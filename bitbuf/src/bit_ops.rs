//! Byte-level helpers for MSB-first bit sequences.
//!
//! "Left" and "right" follow the rendered bit string: shifting left moves
//! bits toward position 0, shifting right moves them toward the end.

use crate::BitOffset;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Number of bytes needed to hold `bits` bits.
#[inline]
pub const fn byte_len(bits: usize) -> usize {
    bits.div_ceil(8)
}

/// Mask selecting the valid bits of the final byte of a `bits`-long sequence.
#[inline]
pub const fn tail_mask(bits: usize) -> u8 {
    match bits & 7 {
        0 => 0xFF,
        r => 0xFF << (8 - r),
    }
}

#[inline]
pub fn get_bit(slice: &[u8], pos: usize) -> bool {
    let o = BitOffset::new(pos);
    (slice[o.byte] >> o.shift) & 1 == 1
}

#[inline]
pub fn set_bit(slice: &mut [u8], pos: usize, value: bool) {
    let o = BitOffset::new(pos);
    if value {
        slice[o.byte] |= o.mask();
    } else {
        slice[o.byte] &= !o.mask();
    }
}

#[inline]
pub fn toggle_bit(slice: &mut [u8], pos: usize) {
    let o = BitOffset::new(pos);
    slice[o.byte] ^= o.mask();
}

/// Moves every bit of `src` `n` positions toward index 0, producing
/// `out_len` bytes. Bits read from past the end of `src` are zero.
pub fn shl_bits(src: &[u8], n: usize, out_len: usize) -> Vec<u8> {
    let (q, r) = (n / 8, (n % 8) as u32);
    let at = |i: usize| src.get(i).copied().unwrap_or(0);

    (0..out_len)
        .map(|j| {
            let hi = at(j + q) << r;
            if r == 0 {
                hi
            } else {
                hi | (at(j + q + 1) >> (8 - r))
            }
        })
        .collect()
}

/// Moves every bit of `src` `n` positions toward the end, producing
/// `out_len` bytes. Vacated leading bits are zero.
pub fn shr_bits(src: &[u8], n: usize, out_len: usize) -> Vec<u8> {
    let (q, r) = (n / 8, (n % 8) as u32);
    let back = |j: usize, k: usize| {
        j.checked_sub(k)
            .and_then(|i| src.get(i).copied())
            .unwrap_or(0)
    };

    (0..out_len)
        .map(|j| {
            let lo = back(j, q) >> r;
            if r == 0 {
                lo
            } else {
                lo | (back(j, q + 1) << (8 - r))
            }
        })
        .collect()
}
