//! BitBuf: a fixed-length, bit-addressable sequence over packed bytes.
//!
//! # Examples
//!
//! ```rust
//! use bitbuf::BitBuf;
//!
//! let mut bits = BitBuf::from_uint(5, Some(8)).unwrap();
//! assert_eq!(bits.to_string(), "00000101");
//!
//! bits.rot(2).unwrap();
//! assert_eq!(bits.to_string(), "01000001");
//! assert_eq!(bits.to_integer().unwrap(), 65);
//! ```
//!
//! ## Padding bits
//!
//! The final byte of a buffer whose length is not a multiple of eight holds
//! padding bits. Several operations leave them set; [`BitBuf::trim`] clears
//! them, and everything that exports or compares bytes looks past them.
//!
//! ```rust
//! use bitbuf::BitBuf;
//!
//! let mut ones = BitBuf::new(4, true).unwrap();
//! assert_eq!(ones.buffer(), &[0b1111_0000]);
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec, vec::Vec};

use crate::bit_ops::{self, byte_len, tail_mask};
use crate::error::{BitBufError, Result};
use crate::{BitOffset, BitSource, pad};

#[derive(Clone, Default)]
pub struct BitBuf {
    data: Vec<u8>,
    len: usize,
}

/// Rejects shift and rotate amounts outside the safe-integer domain.
#[inline]
fn check_amount(n: i64) -> Result<usize> {
    if n.unsigned_abs() > BitBuf::MAX_SAFE_OFFSET as u64 {
        return Err(BitBufError::InvalidOffset(n));
    }
    Ok(usize::try_from(n.unsigned_abs()).unwrap_or(usize::MAX))
}

impl BitBuf {
    /// Largest supported length: 16 MiB worth of bits.
    pub const MAX_SIZE: usize = 16 * 1024 * 1024 * 8;

    /// Longest buffer [`to_integer`](Self::to_integer) will export.
    pub const MAX_INTEGER_BITS: usize = 52;

    /// Largest magnitude accepted for shift amounts and slice bounds.
    pub const MAX_SAFE_OFFSET: i64 = (1 << 53) - 1;

    /// Creates a buffer of `bit_len` bits, all clear or all set.
    ///
    /// With `fill` set, the padding bits of the final byte are set too until
    /// the next [`trim`](Self::trim).
    ///
    /// # Examples
    ///
    /// ```
    /// use bitbuf::BitBuf;
    ///
    /// let bits = BitBuf::new(12, false).unwrap();
    /// assert_eq!(bits.len(), 12);
    /// assert_eq!(bits.to_string(), "000000000000");
    /// ```
    pub fn new(bit_len: usize, fill: bool) -> Result<Self> {
        if bit_len > Self::MAX_SIZE {
            return Err(BitBufError::InvalidLength(bit_len));
        }
        let byte = if fill { 0xFF } else { 0x00 };
        Ok(Self {
            data: vec![byte; byte_len(bit_len)],
            len: bit_len,
        })
    }

    fn from_parts(data: Vec<u8>, len: usize) -> Self {
        debug_assert!(data.len() >= byte_len(len));
        Self { data, len }
    }

    /// Builds a buffer from any supported [`BitSource`].
    ///
    /// `hint` is a requested bit length. Integers are left-padded with zeros
    /// up to it; byte sources are cut down to it. Other sources ignore it.
    ///
    /// ```
    /// use bitbuf::BitBuf;
    ///
    /// let a = BitBuf::from_source(5u64, Some(8)).unwrap();
    /// let b = BitBuf::from_source("00000101", None).unwrap();
    /// let c = BitBuf::from_source(&[0b0000_0101u8], None).unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(b, c);
    /// ```
    pub fn from_source<'a>(
        source: impl Into<BitSource<'a>>,
        hint: Option<usize>,
    ) -> Result<Self> {
        match source.into() {
            BitSource::Integer(value) => Self::from_uint(value, hint),
            BitSource::Bits(bits) => Ok(bits.clone()),
            BitSource::Text(text) => Self::from_bit_str(text),
            BitSource::Bytes(bytes) => Self::from_bytes(bytes, hint),
            BitSource::Flags(flags) => Self::from_bools(flags.iter().copied()),
        }
    }

    /// Binary digits of `value`, most significant first. Zero yields the
    /// single bit `0`.
    pub fn from_uint(value: u64, hint: Option<usize>) -> Result<Self> {
        let digits = format!("{:b}", value);
        match hint {
            Some(width) if width > digits.len() && width <= Self::MAX_SIZE => {
                Self::from_bit_str(&pad::pad_start(&digits, width, '0'))
            }
            _ => Self::from_bit_str(&digits),
        }
    }

    /// Parses a string of `'0'` and `'1'` characters.
    pub fn from_bit_str(text: &str) -> Result<Self> {
        let mut bits = Self::new(text.len(), false)?;
        for (pos, c) in text.bytes().enumerate() {
            match c {
                b'1' => bit_ops::set_bit(&mut bits.data, pos, true),
                b'0' => {}
                _ => {
                    return Err(BitBufError::InvalidInput(
                        "bit strings may only contain '0' and '1'",
                    ));
                }
            }
        }
        Ok(bits)
    }

    /// Copies packed bytes.
    ///
    /// A `hint` shorter than the source keeps that many bits (plus one byte
    /// of slack that [`trim`](Self::trim) drops). Any other hint is ignored
    /// and every byte is kept.
    pub fn from_bytes(bytes: &[u8], hint: Option<usize>) -> Result<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        let source_bits = bytes.len().saturating_mul(8);
        match hint {
            Some(0) => Ok(Self::default()),
            Some(bits) if bits < source_bits && bits <= Self::MAX_SIZE => {
                let take = (byte_len(bits) + 1).min(bytes.len());
                Ok(Self::from_parts(bytes[..take].to_vec(), bits))
            }
            _ => {
                if let Some(bits) = hint {
                    log::debug!(
                        "ignoring bit length hint {} for {}-byte source",
                        bits,
                        bytes.len()
                    );
                }
                if source_bits > Self::MAX_SIZE {
                    return Err(BitBufError::InvalidLength(source_bits));
                }
                Ok(Self::from_parts(bytes.to_vec(), source_bits))
            }
        }
    }

    /// One bit per flag, in order.
    pub fn from_bools<I>(flags: I) -> Result<Self>
    where
        I: IntoIterator<Item = bool>,
    {
        let mut data = Vec::new();
        let mut len = 0;
        for flag in flags {
            if len == Self::MAX_SIZE {
                return Err(BitBufError::InvalidLength(len + 1));
            }
            if len & 7 == 0 {
                data.push(0);
            }
            if flag {
                bit_ops::set_bit(&mut data, len, true);
            }
            len += 1;
        }
        Ok(Self::from_parts(data, len))
    }

    /// Joins buffers end to end.
    pub fn concat<'a, I>(parts: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a BitBuf>,
    {
        let parts: Vec<&BitBuf> = parts.into_iter().collect();
        if parts.iter().any(|part| !part.is_valid()) {
            return Err(BitBufError::InvalidInput(
                "concat requires valid BitBuf elements",
            ));
        }
        let total: usize = parts.iter().map(|part| part.len).sum();

        let mut out = Self::new(total, false)?;
        let mut offset = 0;
        for part in parts {
            let r = offset & 7;
            let shifted = bit_ops::shr_bits(&part.to_bytes(), r, byte_len(part.len + r));
            for (dst, src) in out.data[offset >> 3..].iter_mut().zip(shifted) {
                *dst |= src;
            }
            offset += part.len;
        }
        Ok(out)
    }

    #[inline]
    pub const fn bit_offset(pos: usize) -> BitOffset {
        BitOffset::new(pos)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when the length is in range and storage covers every bit.
    pub fn is_valid(&self) -> bool {
        self.len <= Self::MAX_SIZE && self.data.len() >= byte_len(self.len)
    }

    #[inline]
    pub fn contains_offset(&self, pos: usize) -> bool {
        pos < self.len
    }

    pub fn check_offset(&self, pos: usize) -> Result<()> {
        if self.contains_offset(pos) {
            Ok(())
        } else {
            Err(BitBufError::OutOfRange {
                pos: i64::try_from(pos).unwrap_or(i64::MAX),
                len: self.len,
            })
        }
    }

    pub fn get(&self, pos: usize) -> Result<bool> {
        self.check_offset(pos)?;
        Ok(bit_ops::get_bit(&self.data, pos))
    }

    pub fn set(&mut self, pos: usize, value: bool) -> Result<()> {
        self.check_offset(pos)?;
        bit_ops::set_bit(&mut self.data, pos, value);
        Ok(())
    }

    pub fn toggle(&mut self, pos: usize) -> Result<()> {
        self.check_offset(pos)?;
        bit_ops::toggle_bit(&mut self.data, pos);
        Ok(())
    }

    /// Drops storage beyond the last meaningful byte and clears the padding
    /// bits in it.
    pub fn trim(&mut self) -> &mut Self {
        let needed = byte_len(self.len);
        if self.data.len() > needed {
            log::trace!(
                "trimming BitBuf storage from {} to {} bytes",
                self.data.len(),
                needed
            );
            self.data.truncate(needed);
            self.data.shrink_to_fit();
        }
        if self.len & 7 != 0 {
            self.data[needed - 1] &= tail_mask(self.len);
        }
        self
    }

    /// Canonical packed bytes. Trims first.
    pub fn buffer(&mut self) -> &[u8] {
        self.trim();
        &self.data
    }

    /// Canonical packed bytes, without trimming `self`.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.canonical().collect()
    }

    pub fn into_bytes(mut self) -> Vec<u8> {
        self.trim();
        self.data
    }

    fn canonical(&self) -> impl Iterator<Item = u8> + '_ {
        let n = byte_len(self.len);
        let mask = tail_mask(self.len);
        self.data[..n]
            .iter()
            .enumerate()
            .map(move |(i, &b)| if i + 1 == n { b & mask } else { b })
    }

    /// Reads the bits as an unsigned big-endian integer.
    ///
    /// Buffers longer than [`MAX_INTEGER_BITS`](Self::MAX_INTEGER_BITS) are
    /// rejected so the value always fits a double without loss.
    pub fn to_integer(&self) -> Result<u64> {
        if self.len == 0 {
            return Ok(0);
        }
        if self.len > Self::MAX_INTEGER_BITS {
            return Err(BitBufError::ExportTooLarge(self.len));
        }
        let last = BitOffset::new(self.len - 1);
        let whole = self.data[..last.byte]
            .iter()
            .fold(0u64, |acc, &b| (acc << 8) | u64::from(b));
        let tail = self.data[last.byte];
        Ok((last.shift..8)
            .rev()
            .fold(whole, |acc, i| (acc << 1) | u64::from((tail >> i) & 1)))
    }

    pub fn count_ones(&self) -> usize {
        self.canonical().map(|b| b.count_ones() as usize).sum()
    }

    /// Trimmed deep copy. Unlike `clone`, canonicalizes `self` as well.
    pub fn copy(&mut self) -> BitBuf {
        self.trim();
        self.clone()
    }

    /// Extracts bits `start..end` into a new buffer.
    ///
    /// A bound of `None` or `Some(0)` takes its default: 0 for `start`,
    /// `len` for `end`. A negative bound `v` is read as `len - v`, which
    /// lands past the end and is rejected.
    ///
    /// ```
    /// use bitbuf::BitBuf;
    ///
    /// let bits = BitBuf::from_bit_str("0110100111").unwrap();
    /// assert_eq!(bits.slice(Some(3), Some(9)).unwrap().to_string(), "010011");
    /// assert_eq!(bits.slice(Some(4), None).unwrap().to_string(), "100111");
    /// assert_eq!(bits.slice(None, Some(2)).unwrap().to_string(), "01");
    /// assert!(bits.slice(Some(-2), None).is_err());
    /// ```
    pub fn slice(&self, start: Option<i64>, end: Option<i64>) -> Result<Self> {
        let len = self.len as i64;
        let out_of_range = |pos: i64| BitBufError::OutOfRange { pos, len: self.len };

        let start = match start.unwrap_or(0) {
            0 => 0,
            s if s.unsigned_abs() > Self::MAX_SAFE_OFFSET as u64 || s > len => {
                return Err(out_of_range(s));
            }
            s if s < 0 => len - s,
            s => s,
        };
        let end = match end.unwrap_or(0) {
            0 => len,
            e if e.unsigned_abs() > Self::MAX_SAFE_OFFSET as u64 || e > len => {
                return Err(out_of_range(e));
            }
            e if e < 0 => len - e,
            e => e,
        };
        if end < start {
            return Err(out_of_range(end));
        }
        // a reinterpreted negative bound ends up here
        if start > len || end > len {
            return Err(out_of_range(start.max(end)));
        }

        let (start, end) = (start as usize, end as usize);
        let first = start >> 3;
        let last = ((end >> 3) + 1).min(self.data.len());
        let window = &self.data[first..last];
        let data = bit_ops::shl_bits(window, start & 7, window.len());
        Ok(Self::from_parts(data, end - start))
    }

    fn ensure_compatible(&self, other: &BitBuf) -> Result<()> {
        if !other.is_valid() {
            return Err(BitBufError::NotABitBuf);
        }
        if self.len != other.len {
            return Err(BitBufError::LengthMismatch {
                expected: self.len,
                found: other.len,
            });
        }
        Ok(())
    }

    fn combine(&mut self, other: &BitBuf, op: impl Fn(u8, u8) -> u8) -> Result<&mut Self> {
        self.ensure_compatible(other)?;
        for (dst, &src) in self.data.iter_mut().zip(&other.data) {
            *dst = op(*dst, src);
        }
        Ok(self)
    }

    pub fn xor(&mut self, other: &BitBuf) -> Result<&mut Self> {
        self.combine(other, |a, b| a ^ b)
    }

    pub fn and(&mut self, other: &BitBuf) -> Result<&mut Self> {
        self.combine(other, |a, b| a & b)
    }

    pub fn or(&mut self, other: &BitBuf) -> Result<&mut Self> {
        self.combine(other, |a, b| a | b)
    }

    /// Complements every stored byte, padding bits included.
    pub fn not(&mut self) -> &mut Self {
        for b in &mut self.data {
            *b = !*b;
        }
        self
    }

    /// Lexicographic comparison of the canonical bytes of two equally long
    /// buffers.
    pub fn compare(&self, other: &BitBuf) -> Result<Ordering> {
        self.ensure_compatible(other)?;
        Ok(self.canonical().cmp(other.canonical()))
    }

    /// Logical shift. Positive `n` moves bits toward the end, filling zeros
    /// in at position 0; negative `n` moves them toward position 0.
    ///
    /// ```
    /// use bitbuf::BitBuf;
    ///
    /// let mut bits = BitBuf::new(4, true).unwrap();
    /// bits.shift(2).unwrap();
    /// assert_eq!(bits.to_string(), "0011");
    /// bits.shift(-3).unwrap();
    /// assert_eq!(bits.to_string(), "1000");
    /// ```
    pub fn shift(&mut self, n: i64) -> Result<&mut Self> {
        let amount = check_amount(n)?;
        self.trim();
        if amount == 0 {
            return Ok(self);
        }
        if amount >= self.len {
            log::trace!("shift by {} clears {}-bit buffer", n, self.len);
            self.data.fill(0);
            return Ok(self);
        }
        let bytes = byte_len(self.len);
        self.data = if n > 0 {
            bit_ops::shr_bits(&self.data, amount, bytes)
        } else {
            bit_ops::shl_bits(&self.data, amount, bytes)
        };
        Ok(self.trim())
    }

    /// Circular shift. Positive `n` moves bits toward the end; bits leaving
    /// the end come back in at position 0.
    pub fn rot(&mut self, n: i64) -> Result<&mut Self> {
        check_amount(n)?;
        self.trim();
        if self.len == 0 {
            return Ok(self);
        }
        let amount = n.rem_euclid(self.len as i64) as usize;
        if amount == 0 {
            return Ok(self);
        }
        let bytes = byte_len(self.len);
        let moved = bit_ops::shr_bits(&self.data, amount, bytes);
        let wrapped = bit_ops::shl_bits(&self.data, self.len - amount, bytes);
        self.data = moved.into_iter().zip(wrapped).map(|(a, b)| a | b).collect();
        Ok(self.trim())
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            bits: self,
            front: 0,
            back: self.len,
        }
    }
}

impl PartialEq for BitBuf {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.canonical().eq(other.canonical())
    }
}

impl Eq for BitBuf {}

impl PartialOrd for BitBuf {
    /// `None` when the lengths differ.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl Hash for BitBuf {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for b in self.canonical() {
            b.hash(state);
        }
    }
}

impl fmt::Display for BitBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.iter().map(|bit| if bit { '1' } else { '0' }).collect();
        f.pad(&text)
    }
}

impl fmt::Debug for BitBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitBuf")
            .field("len", &self.len)
            .field("bits", &format_args!("{}", self))
            .finish()
    }
}

impl FromStr for BitBuf {
    type Err = BitBufError;

    fn from_str(text: &str) -> Result<Self> {
        Self::from_bit_str(text)
    }
}

impl TryFrom<&str> for BitBuf {
    type Error = BitBufError;

    fn try_from(text: &str) -> Result<Self> {
        Self::from_bit_str(text)
    }
}

impl TryFrom<&[u8]> for BitBuf {
    type Error = BitBufError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes, None)
    }
}

impl TryFrom<&[bool]> for BitBuf {
    type Error = BitBufError;

    fn try_from(flags: &[bool]) -> Result<Self> {
        Self::from_bools(flags.iter().copied())
    }
}

impl TryFrom<u64> for BitBuf {
    type Error = BitBufError;

    fn try_from(value: u64) -> Result<Self> {
        Self::from_uint(value, None)
    }
}

pub struct Iter<'a> {
    bits: &'a BitBuf,
    front: usize,
    back: usize,
}

impl Iterator for Iter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.front >= self.back {
            return None;
        }
        let bit = bit_ops::get_bit(&self.bits.data, self.front);
        self.front += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<bool> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(bit_ops::get_bit(&self.bits.data, self.back))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a BitBuf {
    type Item = bool;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn bits(text: &str) -> BitBuf {
        BitBuf::from_bit_str(text).unwrap()
    }

    fn hash_of(b: &BitBuf) -> u64 {
        let mut hasher = DefaultHasher::new();
        b.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn new_zero_and_one_filled() -> Result<()> {
        let zeros = BitBuf::new(10, false)?;
        assert_eq!(zeros.len(), 10);
        assert_eq!(zeros.to_string(), "0000000000");

        let mut ones = BitBuf::new(10, true)?;
        assert_eq!(ones.data, vec![0xFF, 0xFF]);
        assert_eq!(ones.buffer(), &[0xFF, 0b1100_0000]);
        assert_eq!(ones.count_ones(), 10);
        Ok(())
    }

    #[test]
    fn new_rejects_oversized_lengths() {
        assert_eq!(
            BitBuf::new(BitBuf::MAX_SIZE, false).map(|b| b.len()),
            Ok(BitBuf::MAX_SIZE)
        );
        assert_eq!(
            BitBuf::new(BitBuf::MAX_SIZE + 1, false),
            Err(BitBufError::InvalidLength(BitBuf::MAX_SIZE + 1))
        );
        assert!(matches!(
            BitBuf::new(usize::MAX, true),
            Err(BitBufError::InvalidLength(_))
        ));
    }

    #[test]
    fn from_integer() -> Result<()> {
        assert_eq!(BitBuf::from_uint(5, Some(8))?.to_string(), "00000101");
        assert_eq!(BitBuf::from_uint(5, None)?.to_string(), "101");
        // a hint shorter than the digits is ignored
        assert_eq!(BitBuf::from_uint(5, Some(2))?.to_string(), "101");
        assert_eq!(BitBuf::from_uint(0, None)?.to_string(), "0");
        assert_eq!(BitBuf::from_source(255u64, Some(10))?.to_string(), "0011111111");
        Ok(())
    }

    #[test]
    fn from_text_rejects_other_characters() {
        assert_eq!(bits("1011").to_string(), "1011");
        assert_eq!(bits("").len(), 0);
        assert!(matches!(
            BitBuf::from_bit_str("10a1"),
            Err(BitBufError::InvalidInput(_))
        ));
        assert!("0 1".parse::<BitBuf>().is_err());
    }

    #[test]
    fn from_bytes_with_and_without_hint() -> Result<()> {
        let src = [0b1010_1010, 0b1111_0000, 0b0000_1111];

        let whole = BitBuf::from_bytes(&src, None)?;
        assert_eq!(whole.len(), 24);
        assert_eq!(whole.to_string(), "101010101111000000001111");

        let mut cut = BitBuf::from_bytes(&src, Some(10))?;
        assert_eq!(cut.len(), 10);
        // ceil(10 / 8) + 1 bytes copied before trimming
        assert_eq!(cut.data.len(), 3);
        assert_eq!(cut.buffer(), &[0b1010_1010, 0b1100_0000]);

        assert_eq!(BitBuf::from_bytes(&src, Some(0))?.len(), 0);
        assert_eq!(BitBuf::from_bytes(&src, Some(24))?.len(), 24);
        assert_eq!(BitBuf::from_bytes(&src, Some(99))?.len(), 24);
        assert_eq!(BitBuf::from_bytes(&[], Some(4))?.len(), 0);
        Ok(())
    }

    #[test]
    fn from_flags_and_copies() -> Result<()> {
        let flags = [true, false, false, true, true];
        let b = BitBuf::from_source(&flags[..], None)?;
        assert_eq!(b.to_string(), "10011");

        let mut copied = BitBuf::from_source(&b, None)?;
        copied.toggle(0)?;
        assert_eq!(b.to_string(), "10011");
        assert_eq!(copied.to_string(), "00011");
        Ok(())
    }

    #[test]
    fn addressing_checks_bounds() -> Result<()> {
        let mut b = BitBuf::new(9, false)?;
        b.set(8, true)?;
        assert!(b.get(8)?);
        b.toggle(8)?;
        assert!(!b.get(8)?);
        b.toggle(0)?;
        assert_eq!(b.to_string(), "100000000");

        assert!(b.contains_offset(8));
        assert!(!b.contains_offset(9));
        assert_eq!(b.get(9), Err(BitBufError::OutOfRange { pos: 9, len: 9 }));
        assert!(b.set(9, true).is_err());
        assert!(b.toggle(100).is_err());
        assert_eq!(b.to_string(), "100000000");
        Ok(())
    }

    #[test]
    fn integer_export() -> Result<()> {
        assert_eq!(bits("1011").to_integer()?, 11);
        assert_eq!(BitBuf::default().to_integer()?, 0);
        assert_eq!(bits("100000001").to_integer()?, 257);

        let widest = BitBuf::new(52, true)?;
        assert_eq!(widest.to_integer()?, (1 << 52) - 1);
        assert_eq!(
            BitBuf::new(53, false)?.to_integer(),
            Err(BitBufError::ExportTooLarge(53))
        );
        Ok(())
    }

    #[test]
    fn slicing() -> Result<()> {
        let b = bits("1101001110001");
        assert_eq!(b.slice(None, None)?, b);
        assert_eq!(b.slice(Some(0), Some(0))?, b);
        assert_eq!(b.slice(Some(3), Some(11))?.to_string(), "10011100");
        assert_eq!(b.slice(Some(8), Some(13))?.to_string(), "10001");
        assert_eq!(b.slice(Some(13), None)?.len(), 0);
        assert_eq!(b.slice(Some(5), Some(5))?.len(), 0);

        assert!(b.slice(Some(14), None).is_err());
        assert!(b.slice(Some(0), Some(14)).is_err());
        assert!(b.slice(Some(6), Some(5)).is_err());
        assert!(b.slice(Some(-1), None).is_err());
        assert!(b.slice(Some(0), Some(-1)).is_err());
        assert!(b.slice(Some(i64::MIN), None).is_err());
        Ok(())
    }

    #[test]
    fn slice_keeps_raw_tail_until_trim() -> Result<()> {
        let b = BitBuf::new(16, true)?;
        let mut s = b.slice(Some(2), Some(5))?;
        assert_eq!(s.data.len(), 1);
        assert_eq!(s.data[0], 0b1111_1100);
        assert_eq!(s.buffer(), &[0b1110_0000]);
        Ok(())
    }

    #[test]
    fn logical_ops() -> Result<()> {
        let mut a = bits("1100");
        a.xor(&bits("1010"))?;
        assert_eq!(a.to_string(), "0110");
        a.and(&bits("0011"))?;
        assert_eq!(a.to_string(), "0010");
        a.or(&bits("1000"))?.not();
        assert_eq!(a.to_string(), "0101");
        assert_eq!(a.data[0] & 0x0F, 0x0F);

        assert_eq!(
            a.xor(&bits("101")).map(|_| ()),
            Err(BitBufError::LengthMismatch { expected: 4, found: 3 })
        );
        assert_eq!(a.to_string(), "0101");
        Ok(())
    }

    #[test]
    fn comparisons_ignore_padding() -> Result<()> {
        assert_eq!(bits("1100").compare(&bits("1100"))?, Ordering::Equal);
        assert_eq!(bits("0001").compare(&bits("1000"))?, Ordering::Less);
        assert!(bits("11").compare(&bits("110")).is_err());

        let mut dirty = bits("1010");
        dirty.not().not();
        dirty.data[0] |= 0x0F;
        assert_eq!(dirty, bits("1010"));
        assert_eq!(bits("11").partial_cmp(&bits("110")), None);
        assert!(bits("0111") < bits("1000"));
        Ok(())
    }

    #[test]
    fn concatenation() -> Result<()> {
        let joined = BitBuf::concat([&bits("101"), &bits(""), &bits("0110011"), &bits("1")])?;
        assert_eq!(joined.to_string(), "10101100111");

        let mut dirty = BitBuf::new(3, true)?;
        dirty.set(1, false)?;
        let joined = BitBuf::concat([&dirty, &bits("000")])?;
        assert_eq!(joined.to_string(), "101000");

        assert_eq!(BitBuf::concat(Vec::<&BitBuf>::new())?.len(), 0);
        Ok(())
    }

    #[test]
    fn shifting() -> Result<()> {
        let mut b = BitBuf::new(4, true)?;
        b.shift(2)?;
        assert_eq!(b.to_string(), "0011");

        let mut b = bits("1011001110");
        b.shift(3)?;
        assert_eq!(b.to_string(), "0001011001");
        b.shift(-4)?;
        assert_eq!(b.to_string(), "0110010000");
        b.shift(0)?;
        assert_eq!(b.to_string(), "0110010000");
        b.shift(-10)?;
        assert_eq!(b, BitBuf::new(10, false)?);

        assert_eq!(
            bits("1").shift(i64::MAX).map(|_| ()),
            Err(BitBufError::InvalidOffset(i64::MAX))
        );
        Ok(())
    }

    #[test]
    fn rotating() -> Result<()> {
        let mut b = bits("1011001110");
        b.rot(3)?;
        assert_eq!(b.to_string(), "1101011001");
        b.rot(-3)?;
        assert_eq!(b.to_string(), "1011001110");
        b.rot(23)?;
        assert_eq!(b.to_string(), "1101011001");
        b.rot(-10)?;
        assert_eq!(b.to_string(), "1101011001");

        let mut empty = BitBuf::default();
        empty.rot(5)?;
        assert!(empty.is_empty());
        Ok(())
    }

    #[test]
    fn display_and_iteration() {
        let b = bits("10110");
        assert_eq!(format!("{:>7}", b), "  10110");
        assert_eq!(
            b.iter().rev().collect::<Vec<_>>(),
            [false, true, true, false, true]
        );
        assert_eq!((&b).into_iter().len(), 5);
        assert_eq!(format!("{:?}", b), "BitBuf { len: 5, bits: 10110 }");
    }

    #[test]
    fn oversized_sources_rejected() -> Result<()> {
        let bytes = vec![0u8; BitBuf::MAX_SIZE / 8 + 1];
        assert_eq!(
            BitBuf::from_bytes(&bytes, None),
            Err(BitBufError::InvalidLength(BitBuf::MAX_SIZE + 8))
        );
        // a usable hint still cuts the source down
        assert_eq!(BitBuf::from_bytes(&bytes, Some(12))?.len(), 12);

        let half = BitBuf::new(BitBuf::MAX_SIZE / 2 + 1, false)?;
        assert_eq!(
            BitBuf::concat([&half, &half]),
            Err(BitBufError::InvalidLength(BitBuf::MAX_SIZE + 2))
        );

        let flags = core::iter::repeat_n(false, BitBuf::MAX_SIZE + 1);
        assert_eq!(
            BitBuf::from_bools(flags),
            Err(BitBufError::InvalidLength(BitBuf::MAX_SIZE + 1))
        );
        Ok(())
    }

    #[test]
    fn hash_ignores_padding() {
        let clean = bits("1010");
        let mut dirty = bits("1010");
        dirty.not().not();
        dirty.data[0] |= 0x0F;

        assert_eq!(dirty, clean);
        assert_eq!(hash_of(&dirty), hash_of(&clean));
    }

    #[test]
    fn conversions() -> Result<()> {
        assert_eq!(BitBuf::try_from("0110")?.to_string(), "0110");
        assert!(BitBuf::try_from("012").is_err());
        assert_eq!(
            BitBuf::try_from(&[0xA5u8, 0x0F][..])?.to_string(),
            "1010010100001111"
        );
        assert_eq!(BitBuf::try_from(&[true, false, true][..])?.to_string(), "101");
        assert_eq!(BitBuf::try_from(6u64)?.to_string(), "110");

        assert_eq!(BitBuf::new(11, true)?.into_bytes(), [0xFF, 0b1110_0000]);
        // the slack byte from a hinted copy is dropped too
        let hinted = BitBuf::from_bytes(&[0xFF, 0xFF, 0xFF], Some(3))?;
        assert_eq!(hinted.into_bytes(), [0b1110_0000]);

        assert_eq!(BitBuf::bit_offset(13), BitOffset { byte: 1, shift: 2 });
        Ok(())
    }
}
