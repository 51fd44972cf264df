/// A bit position split into its backing byte and the bit's distance from
/// that byte's LSB. Storage is MSB-first, so position 0 has `shift == 7`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitOffset {
    pub byte: usize,
    pub shift: u32,
}

impl BitOffset {
    #[inline]
    pub const fn new(pos: usize) -> Self {
        BitOffset {
            byte: pos >> 3,
            shift: 7 - (pos & 7) as u32,
        }
    }

    #[inline]
    pub const fn mask(self) -> u8 {
        1 << self.shift
    }
}

impl From<usize> for BitOffset {
    #[inline]
    fn from(pos: usize) -> Self {
        BitOffset::new(pos)
    }
}
