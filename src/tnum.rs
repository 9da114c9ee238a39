//! The tracked number type.
//!
//! A [`Tnum`] is a pair `(value, mask)` describing a set of 64-bit integers.
//! Every bit where `mask` is 0 is *known* and equal to the corresponding bit
//! of `value`; every bit where `mask` is 1 is *unknown* and may be 0 or 1
//! independently of all other bits.
//!
//! ```text
//! value = 0b1000, mask = 0b0011   =>   1 0 x x   =>   {8, 9, 10, 11}
//! ```
//!
//! # Invariants
//!
//! - `value & mask == 0`: an unknown bit never carries a value. Fields are
//!   private, so the only way to build a `Tnum` from raw parts is through
//!   [`Tnum::new`] (which asserts it) or [`Tnum::try_new`] (which checks it).
//! - Every well-formed set has exactly one representation, hence structural
//!   equality (`==`) coincides with set equality.

use log::debug;
use num_bigint::BigUint;

/// A tracked (tristate) 64-bit number.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Tnum {
    value: u64,
    mask: u64,
}

// Constructors
impl Tnum {
    /// The completely unknown number: every 64-bit integer is a member.
    pub const UNKNOWN: Tnum = Tnum::raw(0, u64::MAX);

    /// Builds a tnum from raw parts without checking them.
    ///
    /// Crate-internal: every operation funnels its result through here, so the
    /// well-formedness check lives in one place.
    #[inline]
    pub(crate) const fn raw(value: u64, mask: u64) -> Self {
        debug_assert!(value & mask == 0, "tnum value and mask must not overlap");
        Self { value, mask }
    }

    /// Creates a tnum from a `(value, mask)` pair.
    ///
    /// # Panics
    ///
    /// Panics if `value & mask != 0`.
    pub fn new(value: u64, mask: u64) -> Self {
        assert_eq!(
            value & mask,
            0,
            "malformed tnum: value {:#x} overlaps mask {:#x}",
            value,
            mask
        );
        Self::raw(value, mask)
    }

    /// Creates a tnum from a `(value, mask)` pair, or returns `None` if the
    /// pair is malformed.
    pub fn try_new(value: u64, mask: u64) -> Option<Self> {
        if value & mask == 0 {
            Some(Self::raw(value, mask))
        } else {
            None
        }
    }

    /// Creates a constant: exactly one member, `value`.
    pub const fn constant(value: u64) -> Self {
        Self::raw(value, 0)
    }

    /// Returns [`Tnum::UNKNOWN`].
    pub const fn unknown() -> Self {
        Self::UNKNOWN
    }

    /// Creates the most precise tnum covering every integer in `min..=max`.
    ///
    /// All bits from position 0 up to and including the highest bit in which
    /// `min` and `max` differ become unknown; the bits above are copied from
    /// `min`.
    ///
    /// ```
    /// use tnum_rs::tnum::Tnum;
    ///
    /// assert_eq!(Tnum::range(4, 7), Tnum::new(4, 3));
    /// assert_eq!(Tnum::range(5, 5), Tnum::constant(5));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn range(min: u64, max: u64) -> Self {
        assert!(min <= max, "empty range: min {} > max {}", min, max);
        debug!("range(min = {}, max = {})", min, max);

        let chi = min ^ max;
        let bits = u64::BITS - chi.leading_zeros();
        if bits >= u64::BITS {
            return Self::UNKNOWN;
        }
        let delta = (1u64 << bits) - 1;
        Self::raw(min & !delta, delta)
    }
}

// Getters
impl Tnum {
    /// The known bits that are set. Bits under the mask are always 0 here.
    pub const fn value(self) -> u64 {
        self.value
    }

    /// The unknown bits.
    pub const fn mask(self) -> u64 {
        self.mask
    }

    /// Positions of all known bits, whether 0 or 1.
    pub const fn known_bits(self) -> u64 {
        !self.mask
    }

    /// Number of unknown bits.
    pub const fn unknown_count(self) -> u32 {
        self.mask.count_ones()
    }

    /// The smallest member.
    pub const fn min(self) -> u64 {
        self.value
    }

    /// The largest member.
    pub const fn max(self) -> u64 {
        self.value | self.mask
    }

    /// Number of members, `2^unknown_count`.
    ///
    /// This reaches `2^64` for [`Tnum::UNKNOWN`], so it does not fit a `u64`.
    pub fn count(self) -> BigUint {
        BigUint::from(1u8) << self.unknown_count()
    }
}

// Checks
impl Tnum {
    /// Returns true if this tnum has exactly one member.
    pub const fn is_const(self) -> bool {
        self.mask == 0
    }

    /// Returns true if this is [`Tnum::UNKNOWN`].
    pub const fn is_unknown(self) -> bool {
        self.value == 0 && self.mask == u64::MAX
    }

    /// Returns true if every member of `self` is a member of `haystack`.
    ///
    /// `self` must not be unknown where `haystack` is known, and must agree
    /// with `haystack` on every bit `haystack` knows.
    pub const fn is_within(self, haystack: Tnum) -> bool {
        if self.mask & !haystack.mask != 0 {
            return false;
        }
        self.value & !haystack.mask == haystack.value
    }

    /// Returns true if every member of `needle` is a member of `self`.
    pub const fn contains(self, needle: Tnum) -> bool {
        needle.is_within(self)
    }

    /// Returns true if the concrete integer `v` is a member of `self`.
    pub const fn contains_value(self, v: u64) -> bool {
        Tnum::constant(v).is_within(self)
    }

    /// Returns true if every member is a multiple of `size`.
    ///
    /// `size` is expected to be a power of two; `0` counts as trivially
    /// aligned.
    pub fn is_aligned(self, size: u64) -> bool {
        debug_assert!(
            size == 0 || size.is_power_of_two(),
            "alignment {} is not a power of two",
            size
        );
        if size == 0 {
            return true;
        }
        (self.value | self.mask) & (size - 1) == 0
    }
}
