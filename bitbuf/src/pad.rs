//! Fixed-width string padding.
//!
//! Lengths are counted in characters. Text that is already at least
//! `target_len` characters long is returned unchanged.

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};

pub fn pad_start(text: &str, target_len: usize, fill: char) -> String {
    let missing = target_len.saturating_sub(text.chars().count());
    if missing == 0 {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + missing * fill.len_utf8());
    out.extend(core::iter::repeat_n(fill, missing));
    out.push_str(text);
    out
}

pub fn pad_end(text: &str, target_len: usize, fill: char) -> String {
    let missing = target_len.saturating_sub(text.chars().count());
    let mut out = String::with_capacity(text.len() + missing * fill.len_utf8());
    out.push_str(text);
    out.extend(core::iter::repeat_n(fill, missing));
    out
}
