//! Arithmetic on tracked numbers.
//!
//! All operations are modulo `2^64`. Each result is a tnum containing
//! `x ∘ y` for every member `x` of the left operand and every member `y` of
//! the right operand.

use log::{debug, trace};

use crate::bitwise::{lshift, rshift};
use crate::tnum::Tnum;

/// Tracked addition.
///
/// `chi` marks every position where a carry could have come out of an
/// unknown bit or a carry chain started below it.
pub fn add(a: Tnum, b: Tnum) -> Tnum {
    let sm = a.mask().wrapping_add(b.mask());
    let sv = a.value().wrapping_add(b.value());
    let sigma = sm.wrapping_add(sv);
    let chi = sigma ^ sv;
    let mu = chi | a.mask() | b.mask();
    Tnum::raw(sv & !mu, mu)
}

/// Tracked subtraction.
pub fn sub(a: Tnum, b: Tnum) -> Tnum {
    let dv = a.value().wrapping_sub(b.value());
    let alpha = dv.wrapping_add(a.mask());
    let beta = dv.wrapping_sub(b.mask());
    let chi = alpha ^ beta;
    let mu = chi | a.mask() | b.mask();
    Tnum::raw(dv & !mu, mu)
}

/// Tracked multiplication.
///
/// Walks the multiplier `a` from its least significant bit, shifting the
/// multiplicand `b` along. The certain part of every partial product is
/// collected at once in `acc_v = a.value * b.value`; only the uncertain part
/// of each partial product is summed into `acc_m`:
///
/// - multiplier bit known 1: the partial product is `b`, uncertain in
///   `b.mask`;
/// - multiplier bit unknown: the partial product is either 0 or `b`,
///   uncertain in `b.value | b.mask`;
/// - multiplier bit known 0: nothing.
///
/// The result is `acc_v + acc_m`. Adding the full partial products directly
/// would count the certain contributions twice.
///
/// ```
/// use tnum_rs::arith::mul;
/// use tnum_rs::tnum::Tnum;
///
/// // {2, 3} * {4} = {8, 12}
/// assert_eq!(mul(Tnum::new(2, 1), Tnum::constant(4)), Tnum::new(8, 4));
/// ```
pub fn mul(mut a: Tnum, mut b: Tnum) -> Tnum {
    debug!("mul(a = {}, b = {})", a, b);

    let acc_v = a.value().wrapping_mul(b.value());
    let mut acc_m = Tnum::constant(0);

    // One step per bit of the multiplier; `a` is shifted right each step, so
    // it reaches zero after at most 64 of them.
    for step in 0..u64::BITS {
        if a.value() | a.mask() == 0 {
            break;
        }
        if a.value() & 1 != 0 {
            acc_m = add(acc_m, Tnum::raw(0, b.mask()));
        } else if a.mask() & 1 != 0 {
            acc_m = add(acc_m, Tnum::raw(0, b.value() | b.mask()));
        }
        trace!("mul: step {}, acc_m = {}", step, acc_m);
        a = rshift(a, 1);
        b = lshift(b, 1);
    }
    debug_assert_eq!(a, Tnum::constant(0));

    add(Tnum::constant(acc_v), acc_m)
}

/// Multiplication with shortcuts for cheap operands.
///
/// A constant power of two `2^k` turns the product into a shift by `k`, which
/// is exact. Otherwise [`mul`] runs with the operand having fewer possibly-set
/// bits as the multiplier, which shortens its loop.
pub fn mul_opt(a: Tnum, b: Tnum) -> Tnum {
    if a.is_const() && a.value().is_power_of_two() {
        debug!("mul_opt: {} is 2^{}", a, a.value().trailing_zeros());
        return lshift(b, a.value().trailing_zeros());
    }
    if b.is_const() && b.value().is_power_of_two() {
        debug!("mul_opt: {} is 2^{}", b, b.value().trailing_zeros());
        return lshift(a, b.value().trailing_zeros());
    }
    if a.max().count_ones() <= b.max().count_ones() {
        mul(a, b)
    } else {
        mul(b, a)
    }
}
