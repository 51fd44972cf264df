use crate::BitBuf;

/// The shapes a [`BitBuf`] can be built from with [`BitBuf::from_source`].
#[derive(Copy, Clone, Debug)]
pub enum BitSource<'a> {
    /// Binary representation of the value, most significant digit first.
    Integer(u64),
    /// Deep copy of another buffer.
    Bits(&'a BitBuf),
    /// A string of `'0'` and `'1'` characters.
    Text(&'a str),
    /// Packed MSB-first bytes.
    Bytes(&'a [u8]),
    /// One bit per element.
    Flags(&'a [bool]),
}

impl From<u64> for BitSource<'_> {
    fn from(value: u64) -> Self {
        BitSource::Integer(value)
    }
}

impl<'a> From<&'a BitBuf> for BitSource<'a> {
    fn from(bits: &'a BitBuf) -> Self {
        BitSource::Bits(bits)
    }
}

impl<'a> From<&'a str> for BitSource<'a> {
    fn from(text: &'a str) -> Self {
        BitSource::Text(text)
    }
}

impl<'a> From<&'a [u8]> for BitSource<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        BitSource::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for BitSource<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        BitSource::Bytes(bytes)
    }
}

impl<'a> From<&'a [bool]> for BitSource<'a> {
    fn from(flags: &'a [bool]) -> Self {
        BitSource::Flags(flags)
    }
}
