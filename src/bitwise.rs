//! Bitwise operations and shifts.
//!
//! The binary operations are the per-bit truth tables over `{0, 1, x}`
//! packed into the `(value, mask)` representation:
//!
//! ```text
//!  AND | 0 1 x     OR | 0 1 x     XOR | 0 1 x
//!  ----+------    ----+------    -----+------
//!   0  | 0 0 0     0  | 0 1 x      0  | 0 1 x
//!   1  | 0 1 x     1  | 1 1 1      1  | 1 0 x
//!   x  | 0 x x     x  | x 1 x      x  | x x x
//! ```

use crate::tnum::Tnum;

/// Tracked bitwise AND.
///
/// A result bit is unknown iff both operands may be 1 there and it is not
/// certainly 1.
pub fn and(a: Tnum, b: Tnum) -> Tnum {
    let alpha = a.value() | a.mask();
    let beta = b.value() | b.mask();
    let v = a.value() & b.value();
    Tnum::raw(v, alpha & beta & !v)
}

/// Tracked bitwise OR.
///
/// A known 1 on either side wins over an unknown.
pub fn or(a: Tnum, b: Tnum) -> Tnum {
    let v = a.value() | b.value();
    let mu = a.mask() | b.mask();
    Tnum::raw(v, mu & !v)
}

/// Tracked bitwise XOR.
pub fn xor(a: Tnum, b: Tnum) -> Tnum {
    let v = a.value() ^ b.value();
    let mu = a.mask() | b.mask();
    Tnum::raw(v & !mu, mu)
}

/// Logical left shift; vacated low bits become known zeros.
///
/// # Panics
///
/// Panics if `shift >= 64`.
pub fn lshift(a: Tnum, shift: u32) -> Tnum {
    assert!(shift < u64::BITS, "shift amount {} out of range", shift);
    Tnum::raw(a.value() << shift, a.mask() << shift)
}

/// Logical right shift; vacated high bits become known zeros.
///
/// # Panics
///
/// Panics if `shift >= 64`.
pub fn rshift(a: Tnum, shift: u32) -> Tnum {
    assert!(shift < u64::BITS, "shift amount {} out of range", shift);
    Tnum::raw(a.value() >> shift, a.mask() >> shift)
}

/// Arithmetic right shift of a 32- or 64-bit operand.
///
/// The sign bit is replicated in both fields: a known sign fills with known
/// bits, an unknown sign fills with unknown bits. In 32-bit mode only the low
/// word takes part and the result is zero-extended.
///
/// # Panics
///
/// Panics if `bitness` is neither 32 nor 64, or if `shift >= bitness`.
pub fn arshift(a: Tnum, shift: u32, bitness: u32) -> Tnum {
    assert!(
        bitness == 32 || bitness == 64,
        "unsupported operand width {}",
        bitness
    );
    assert!(shift < bitness, "shift amount {} out of range", shift);
    match bitness {
        32 => {
            let value = ((a.value() as i32) >> shift) as u32;
            let mask = ((a.mask() as i32) >> shift) as u32;
            Tnum::raw(value as u64, mask as u64)
        }
        _ => {
            let value = ((a.value() as i64) >> shift) as u64;
            let mask = ((a.mask() as i64) >> shift) as u64;
            Tnum::raw(value, mask)
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_and() {
        assert_eq!(and(Tnum::UNKNOWN, Tnum::UNKNOWN), Tnum::UNKNOWN);
        assert_eq!(and(Tnum::UNKNOWN, Tnum::constant(0)), Tnum::constant(0));
        assert_eq!(and(Tnum::UNKNOWN, Tnum::constant(0xff)), Tnum::new(0, 0xff));
        // 1x0x & 11xx = 1x0x
        let a = Tnum::new(0b1000, 0b0101);
        let b = Tnum::new(0b1100, 0b0011);
        assert_eq!(and(a, b), Tnum::new(0b1000, 0b0101));
    }

    #[test]
    fn test_or() {
        assert_eq!(or(Tnum::UNKNOWN, Tnum::constant(0)), Tnum::UNKNOWN);
        assert_eq!(or(Tnum::UNKNOWN, Tnum::constant(u64::MAX)), Tnum::constant(u64::MAX));
        // 0x1 | x00 = xx1
        let a = Tnum::new(0b001, 0b010);
        let b = Tnum::new(0b000, 0b100);
        assert_eq!(or(a, b), Tnum::new(0b001, 0b110));
    }

    #[test]
    fn test_xor() {
        assert_eq!(xor(Tnum::constant(0b1100), Tnum::constant(0b1010)), Tnum::constant(0b0110));
        // 1x ^ 11 = 0x
        let a = Tnum::new(0b10, 0b01);
        let b = Tnum::constant(0b11);
        assert_eq!(xor(a, b), Tnum::new(0b00, 0b01));
        assert_eq!(xor(Tnum::UNKNOWN, Tnum::constant(5)), Tnum::UNKNOWN);
    }

    #[test]
    fn test_shifts() {
        let a = Tnum::new(0b1000, 0b0011);
        assert_eq!(lshift(a, 2), Tnum::new(0b100000, 0b1100));
        assert_eq!(rshift(a, 1), Tnum::new(0b100, 0b001));
        assert_eq!(rshift(a, 4), Tnum::constant(0));
        assert_eq!(lshift(Tnum::UNKNOWN, 63), Tnum::new(0, 1 << 63));
        assert_eq!(rshift(Tnum::UNKNOWN, 63), Tnum::new(0, 1));
    }

    #[test]
    #[should_panic(expected = "shift amount 64 out of range")]
    fn test_lshift_out_of_range() {
        lshift(Tnum::constant(1), 64);
    }

    #[test]
    fn test_arshift_64() {
        let neg = Tnum::constant(0x8000_0000_0000_0000);
        assert_eq!(arshift(neg, 4, 64), Tnum::constant(0xf800_0000_0000_0000));

        // Unknown sign bit: the vacated bits are unknown too.
        let a = Tnum::new(0, 1 << 63);
        assert_eq!(arshift(a, 4, 64), Tnum::new(0, 0xf800_0000_0000_0000));
    }

    #[test]
    fn test_arshift_32() {
        let a = Tnum::new(0xffff_ffff_8000_0000, 0);
        assert_eq!(arshift(a, 4, 32), Tnum::constant(0xf800_0000));

        let b = Tnum::new(0x10, 0x8000_0000);
        assert_eq!(arshift(b, 4, 32), Tnum::new(0x1, 0xf800_0000));
    }

    #[test]
    #[should_panic(expected = "unsupported operand width")]
    fn test_arshift_bad_width() {
        arshift(Tnum::constant(1), 1, 16);
    }
}
