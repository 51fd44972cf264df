//! # bitbuf
//!
//! A `no_std` compatible, fixed-length bit buffer. Bits are addressed from
//! position 0 (the most significant bit of the first byte) and packed
//! MSB-first into bytes.
//!
//! ```rust
//! use bitbuf::BitBuf;
//!
//! let mut flags = BitBuf::new(10, false).unwrap();
//! flags.set(0, true).unwrap();
//! flags.set(9, true).unwrap();
//! assert_eq!(flags.to_string(), "1000000001");
//!
//! let head = flags.slice(None, Some(4)).unwrap();
//! assert_eq!(head.to_integer().unwrap(), 8);
//! ```
//!
//! ## Building from other shapes
//!
//! ```rust
//! use bitbuf::BitBuf;
//!
//! let a = BitBuf::from_uint(11, None).unwrap();
//! let b: BitBuf = "1011".parse().unwrap();
//! let c = BitBuf::from_bools([true, false, true, true]).unwrap();
//! assert_eq!(a, b);
//! assert_eq!(b, c);
//!
//! let joined = BitBuf::concat([&a, &b]).unwrap();
//! assert_eq!(joined.to_string(), "10111011");
//! ```
//!

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub use error::{BitBufError, Result};

mod bit_ops;
pub mod bitbuf;
pub mod index;
pub mod pad;
pub mod source;

pub use crate::bitbuf::{BitBuf, Iter};
pub use index::BitOffset;
pub use source::BitSource;
