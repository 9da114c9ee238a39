//! Truncation and 32-bit sub-register helpers.
//!
//! The sub-register of a 64-bit value is its low 32 bits.

use crate::bitwise::{lshift, or, rshift};
use crate::tnum::Tnum;

/// Keeps the low `size` bytes of `a`; the rest become known zeros.
///
/// # Panics
///
/// Panics if `size > 8`.
pub fn cast(a: Tnum, size: u32) -> Tnum {
    assert!(size <= 8, "cast size {} exceeds 8 bytes", size);
    if size == 8 {
        return a;
    }
    let keep = (1u64 << (size * 8)) - 1;
    Tnum::raw(a.value() & keep, a.mask() & keep)
}

/// The low 32 bits of `a`.
pub fn subreg(a: Tnum) -> Tnum {
    cast(a, 4)
}

/// `a` with its low 32 bits cleared to known zeros.
pub fn clear_subreg(a: Tnum) -> Tnum {
    lshift(rshift(a, 32), 32)
}

/// The high 32 bits of `reg` combined with the low 32 bits of `sub`.
pub fn with_subreg(reg: Tnum, sub: Tnum) -> Tnum {
    or(clear_subreg(reg), subreg(sub))
}

/// The high 32 bits of `a` with a constant low word.
pub fn const_subreg(a: Tnum, value: u32) -> Tnum {
    with_subreg(a, Tnum::constant(value as u64))
}
