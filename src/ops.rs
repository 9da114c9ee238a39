//! Operator overloads for [`Tnum`].
//!
//! ```
//! use tnum_rs::tnum::Tnum;
//!
//! let a = Tnum::new(2, 1);
//! let b = Tnum::constant(4);
//! assert_eq!(a * b, Tnum::new(8, 4));
//! assert_eq!((a << 1) | b, Tnum::new(0b100, 0b010));
//! ```

use std::ops::{Add, BitAnd, BitOr, BitXor, Mul, Shl, Shr, Sub};

use crate::arith::{add, mul, sub};
use crate::bitwise::{and, lshift, or, rshift, xor};
use crate::tnum::Tnum;

impl Add for Tnum {
    type Output = Tnum;

    fn add(self, rhs: Self) -> Self::Output {
        add(self, rhs)
    }
}

impl Sub for Tnum {
    type Output = Tnum;

    fn sub(self, rhs: Self) -> Self::Output {
        sub(self, rhs)
    }
}

impl Mul for Tnum {
    type Output = Tnum;

    fn mul(self, rhs: Self) -> Self::Output {
        mul(self, rhs)
    }
}

impl BitAnd for Tnum {
    type Output = Tnum;

    fn bitand(self, rhs: Self) -> Self::Output {
        and(self, rhs)
    }
}

impl BitOr for Tnum {
    type Output = Tnum;

    fn bitor(self, rhs: Self) -> Self::Output {
        or(self, rhs)
    }
}

impl BitXor for Tnum {
    type Output = Tnum;

    fn bitxor(self, rhs: Self) -> Self::Output {
        xor(self, rhs)
    }
}

impl Shl<u32> for Tnum {
    type Output = Tnum;

    fn shl(self, rhs: u32) -> Self::Output {
        lshift(self, rhs)
    }
}

impl Shr<u32> for Tnum {
    type Output = Tnum;

    fn shr(self, rhs: u32) -> Self::Output {
        rshift(self, rhs)
    }
}
