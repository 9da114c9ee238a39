//! Tristate binary text form.
//!
//! Each bit is written MSB first as `0`, `1` or `x` (unknown):
//!
//! ```
//! use tnum_rs::tnum::Tnum;
//!
//! let t = Tnum::new(0b1000, 0b0011);
//! assert_eq!(t.to_string(), "10xx");
//! assert_eq!(format!("{:#}", t), "0b10xx");
//! assert_eq!(t.to_sbin(6), "0010xx");
//! assert_eq!("0b10xx".parse::<Tnum>().unwrap(), t);
//! ```

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::tnum::Tnum;

impl Tnum {
    /// Writes the low `width` bits, MSB first.
    ///
    /// # Panics
    ///
    /// Panics unless `1 <= width <= 64`.
    pub fn to_sbin(self, width: u32) -> String {
        assert!(
            (1..=u64::BITS).contains(&width),
            "sbin width {} out of range",
            width
        );
        (0..width)
            .rev()
            .map(|i| {
                let bit = 1u64 << i;
                if self.mask() & bit != 0 {
                    'x'
                } else if self.value() & bit != 0 {
                    '1'
                } else {
                    '0'
                }
            })
            .collect()
    }

    /// Smallest width that shows every bit that is not a known zero.
    fn sbin_width(self) -> u32 {
        let significant = self.value() | self.mask();
        (u64::BITS - significant.leading_zeros()).max(1)
    }
}

impl Display for Tnum {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            write!(f, "0b")?;
        }
        write!(f, "{}", self.to_sbin(self.sbin_width()))
    }
}

/// Error returned when parsing a [`Tnum`] from its text form fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseTnumError {
    /// No digits.
    Empty,
    /// More than 64 digits; holds the digit count.
    TooLong(usize),
    /// A character other than `0`, `1`, `x`, `X`, `?` or `_`.
    InvalidDigit(char),
}

impl Display for ParseTnumError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseTnumError::Empty => write!(f, "empty tnum literal"),
            ParseTnumError::TooLong(n) => write!(f, "tnum literal has {} digits, at most 64 allowed", n),
            ParseTnumError::InvalidDigit(c) => write!(f, "invalid tnum digit {:?}", c),
        }
    }
}

impl std::error::Error for ParseTnumError {}

impl FromStr for Tnum {
    type Err = ParseTnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix("0b").unwrap_or(s);

        let mut value = 0u64;
        let mut mask = 0u64;
        let mut count = 0usize;
        for c in digits.chars().filter(|&c| c != '_') {
            let (v, m) = match c {
                '0' => (0, 0),
                '1' => (1, 0),
                'x' | 'X' | '?' => (0, 1),
                _ => return Err(ParseTnumError::InvalidDigit(c)),
            };
            count += 1;
            if count > u64::BITS as usize {
                continue;
            }
            value = (value << 1) | v;
            mask = (mask << 1) | m;
        }

        match count {
            0 => Err(ParseTnumError::Empty),
            n if n > u64::BITS as usize => Err(ParseTnumError::TooLong(n)),
            _ => Ok(Tnum::raw(value, mask)),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Tnum::constant(0).to_string(), "0");
        assert_eq!(Tnum::constant(5).to_string(), "101");
        assert_eq!(Tnum::new(2, 1).to_string(), "1x");
        assert_eq!(Tnum::new(8, 4).to_string(), "1x00");
        assert_eq!(Tnum::UNKNOWN.to_string(), "x".repeat(64));
        assert_eq!(format!("{:#}", Tnum::new(0, 1)), "0bx");
    }

    #[test]
    fn test_to_sbin() {
        let t = Tnum::new(0b1000, 0b0011);
        assert_eq!(t.to_sbin(1), "x");
        assert_eq!(t.to_sbin(8), "000010xx");
        assert_eq!(Tnum::constant(u64::MAX).to_sbin(64), "1".repeat(64));
    }

    #[test]
    #[should_panic(expected = "sbin width 0 out of range")]
    fn test_to_sbin_zero_width() {
        Tnum::constant(1).to_sbin(0);
    }

    #[test]
    fn test_parse() {
        assert_eq!("101".parse::<Tnum>(), Ok(Tnum::constant(5)));
        assert_eq!("0b1x".parse::<Tnum>(), Ok(Tnum::new(2, 1)));
        assert_eq!("1X_?0".parse::<Tnum>(), Ok(Tnum::new(0b1000, 0b0110)));
        assert_eq!(" 0 ".parse::<Tnum>(), Ok(Tnum::constant(0)));
        assert_eq!("x".repeat(64).parse::<Tnum>(), Ok(Tnum::UNKNOWN));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Tnum>(), Err(ParseTnumError::Empty));
        assert_eq!("0b".parse::<Tnum>(), Err(ParseTnumError::Empty));
        assert_eq!("__".parse::<Tnum>(), Err(ParseTnumError::Empty));
        assert_eq!("10z1".parse::<Tnum>(), Err(ParseTnumError::InvalidDigit('z')));
        assert_eq!("1".repeat(65).parse::<Tnum>(), Err(ParseTnumError::TooLong(65)));
    }

    #[test]
    fn test_parse_display_inverse() {
        for t in [
            Tnum::constant(0),
            Tnum::constant(0xdead_beef),
            Tnum::new(0x8000_0000_0000_0000, 0x0f0f),
            Tnum::range(100, 200),
            Tnum::UNKNOWN,
        ] {
            assert_eq!(t.to_string().parse::<Tnum>(), Ok(t));
        }
    }

    #[test]
    fn test_error_display() {
        assert_eq!(ParseTnumError::InvalidDigit('z').to_string(), "invalid tnum digit 'z'");
        assert_eq!(
            ParseTnumError::TooLong(65).to_string(),
            "tnum literal has 65 digits, at most 64 allowed"
        );
    }
}
