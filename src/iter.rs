//! Enumeration of the concrete members of a tnum.

use crate::tnum::Tnum;

/// Iterator over the members of a [`Tnum`], in ascending order.
///
/// Walks every submask of the unknown bits. A tnum with `n` unknown bits has
/// `2^n` members, so this is only practical for narrow masks.
#[derive(Debug, Clone)]
pub struct Members {
    value: u64,
    mask: u64,
    /// Next submask of `mask` to yield, `None` once all have been.
    next: Option<u64>,
}

impl Iterator for Members {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        // Next larger submask; wraps back to 0 after the full mask.
        let succ = current.wrapping_sub(self.mask) & self.mask;
        self.next = if succ == 0 { None } else { Some(succ) };
        Some(self.value | current)
    }
}

impl Tnum {
    /// Returns an iterator over all members.
    ///
    /// ```
    /// use tnum_rs::tnum::Tnum;
    ///
    /// let t = Tnum::new(0b1000, 0b0101);
    /// let members: Vec<_> = t.members().collect();
    /// assert_eq!(members, vec![0b1000, 0b1001, 0b1100, 0b1101]);
    /// ```
    pub fn members(self) -> Members {
        Members {
            value: self.value(),
            mask: self.mask(),
            next: Some(0),
        }
    }
}
