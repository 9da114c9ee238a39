//! Lattice operations.
//!
//! Tnums are ordered by set inclusion ([`Tnum::is_within`]), with
//! [`Tnum::UNKNOWN`] on top. There is no bottom element: every well-formed
//! tnum has at least one member.

use log::debug;

use crate::tnum::Tnum;

/// Join (`⊔`): the smallest tnum containing every member of both inputs.
///
/// Bits known in both and equal stay known; everything else is unknown.
pub fn join(a: Tnum, b: Tnum) -> Tnum {
    let v = a.value() ^ b.value();
    let m = a.mask() | b.mask() | v;
    Tnum::raw((a.value() | b.value()) & !m, m)
}

/// Returns true if `a` and `b` share at least one member, i.e. they agree
/// on every bit known in both.
pub fn overlaps(a: Tnum, b: Tnum) -> bool {
    (a.value() ^ b.value()) & !(a.mask() | b.mask()) == 0
}

/// Meet (`⊓`): the tnum of members common to `a` and `b`.
///
/// Only meaningful when [`overlaps`]`(a, b)`; for disjoint inputs the result
/// is well-formed but arbitrary.
pub fn intersect(a: Tnum, b: Tnum) -> Tnum {
    if !overlaps(a, b) {
        debug!("intersect(a = {}, b = {}): disjoint operands", a, b);
    }
    let v = a.value() | b.value();
    let mu = a.mask() & b.mask();
    Tnum::raw(v & !mu, mu)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_join() {
        let a = Tnum::constant(0b1000);
        let b = Tnum::constant(0b1010);
        let j = join(a, b);
        assert_eq!(j, Tnum::new(0b1000, 0b0010));
        assert!(a.is_within(j));
        assert!(b.is_within(j));

        assert_eq!(join(a, a), a);
        assert_eq!(join(a, Tnum::UNKNOWN), Tnum::UNKNOWN);
    }

    #[test]
    fn test_join_is_upper_bound() {
        let samples = [
            Tnum::constant(0),
            Tnum::constant(7),
            Tnum::new(4, 3),
            Tnum::new(0x10, 0x0f),
            Tnum::new(1 << 40, 0xff00),
            Tnum::UNKNOWN,
        ];
        for a in samples {
            for b in samples {
                let j = join(a, b);
                assert!(a.is_within(j), "{} not within {} ⊔ {}", a, a, b);
                assert!(b.is_within(j), "{} not within {} ⊔ {}", b, a, b);
                assert_eq!(j, join(b, a));
            }
        }
    }

    #[test]
    fn test_intersect() {
        let a = Tnum::new(0b1000, 0b0011);
        let b = Tnum::new(0b0001, 0b1010);
        assert!(overlaps(a, b));
        let m = intersect(a, b);
        assert_eq!(m, Tnum::new(0b1001, 0b0010));
        assert!(m.is_within(a));
        assert!(m.is_within(b));

        assert_eq!(intersect(a, Tnum::UNKNOWN), a);
    }

    #[test]
    fn test_overlaps() {
        assert!(overlaps(Tnum::constant(3), Tnum::new(2, 1)));
        assert!(!overlaps(Tnum::constant(4), Tnum::new(2, 1)));
        assert!(overlaps(Tnum::UNKNOWN, Tnum::constant(42)));
    }
}
