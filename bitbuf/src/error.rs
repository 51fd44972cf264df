#[cfg(feature = "std")]
use thiserror::Error;

/// Errors raised by [`BitBuf`](crate::BitBuf) operations.
///
/// Every operation validates its arguments before touching storage, so a
/// returned error never leaves a buffer partially modified.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBufError {
    #[cfg_attr(feature = "std", error("Illegal length {0} for BitBuf"))]
    InvalidLength(usize),

    #[cfg_attr(feature = "std", error("Illegal BitBuf input: {0}"))]
    InvalidInput(&'static str),

    #[cfg_attr(
        feature = "std",
        error("Illegal BitBuf offset {pos} for length {len}")
    )]
    OutOfRange { pos: i64, len: usize },

    #[cfg_attr(feature = "std", error("Illegal BitBuf shift amount {0}"))]
    InvalidOffset(i64),

    #[cfg_attr(feature = "std", error("operand is not a valid BitBuf"))]
    NotABitBuf,

    #[cfg_attr(
        feature = "std",
        error("BitBuf size mismatch: expected {expected}, found {found}")
    )]
    LengthMismatch { expected: usize, found: usize },

    #[cfg_attr(
        feature = "std",
        error("BitBuf size {0} too long for integer export")
    )]
    ExportTooLarge(usize),
}

pub type Result<T> = core::result::Result<T, BitBufError>;

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitBufError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitBufError::InvalidLength(n) => write!(f, "Illegal length {} for BitBuf", n),
            BitBufError::InvalidInput(what) => write!(f, "Illegal BitBuf input: {}", what),
            BitBufError::OutOfRange { pos, len } => {
                write!(f, "Illegal BitBuf offset {} for length {}", pos, len)
            }
            BitBufError::InvalidOffset(n) => write!(f, "Illegal BitBuf shift amount {}", n),
            BitBufError::NotABitBuf => write!(f, "operand is not a valid BitBuf"),
            BitBufError::LengthMismatch { expected, found } => {
                write!(f, "BitBuf size mismatch: expected {}, found {}", expected, found)
            }
            BitBufError::ExportTooLarge(n) => {
                write!(f, "BitBuf size {} too long for integer export", n)
            }
        }
    }
}
