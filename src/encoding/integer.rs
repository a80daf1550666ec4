use std::{fmt, str::FromStr, time::Duration};

use crate::encoding::Error;

/// A value that can be formatted as a decimal integer
pub trait PrintableInteger: Copy + fmt::Display {
    /// Convert the value into its canonical bencode integer
    fn to_integer(self) -> Integer {
        // `Display` for the primitive integers never pads and never prints `-0`
        Integer(self.to_string())
    }
}

macro_rules! impl_integer {
    ($($type:ty)*) => {$(
        impl PrintableInteger for $type {}

        impl From<$type> for Integer {
            fn from(value: $type) -> Self {
                value.to_integer()
            }
        }
    )*}
}

impl_integer!(u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize);

/// A bencode integer of arbitrary size.
///
/// The value is kept as canonical decimal text: an optional `-` followed by digits without
/// leading zeros, where zero is always `0` and never `-0`. Every primitive integer type
/// converts into it losslessly, and larger values can be parsed from text:
///
/// ```
/// use bencanon::{encoding::Integer, marshal};
///
/// let big: Integer = "123456789012345678901234567890".parse().unwrap();
/// assert_eq!(marshal(&big).unwrap(), b"i123456789012345678901234567890e");
/// assert!("-0".parse::<Integer>().is_err());
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Integer(String);

impl Integer {
    /// The decimal digits, including a leading `-` for negative values
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the value is below zero
    pub fn is_negative(&self) -> bool {
        self.0.starts_with('-')
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl FromStr for Integer {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let digits = text.strip_prefix('-').unwrap_or(text);

        let canonical = match digits.as_bytes() {
            [] => false,
            [b'0'] => digits.len() == text.len(),
            [b'0', ..] => false,
            bytes => bytes.iter().all(u8::is_ascii_digit),
        };

        if canonical {
            Ok(Integer(text.to_owned()))
        } else {
            Err(Error::InvalidInteger(text.to_owned()))
        }
    }
}

/// Durations are counted in whole seconds; the sub-second part is dropped.
impl From<Duration> for Integer {
    fn from(duration: Duration) -> Self {
        duration.as_secs().to_integer()
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn primitive_extremes_are_exact() {
        assert_eq!(Integer::from(u128::MAX).as_str(), u128::MAX.to_string());
        assert_eq!(Integer::from(i128::MIN).as_str(), i128::MIN.to_string());
        assert_eq!(Integer::from(0i8).as_str(), "0");
        assert_eq!(Integer::from(-42isize).as_str(), "-42");
    }

    #[test]
    fn big_literals_parse() {
        let text = "-123456789012345678901234567890123456789012345678901234567890";
        let integer: Integer = text.parse().unwrap();
        assert_eq!(integer.as_str(), text);
        assert!(integer.is_negative());
    }

    #[test]
    fn non_canonical_literals_are_rejected() {
        for text in ["", "-", "-0", "00", "007", "-07", "+1", "1.5", "1e3", " 1"] {
            assert!(
                matches!(text.parse::<Integer>(), Err(Error::InvalidInteger(_))),
                "{:?} should be rejected",
                text
            );
        }
    }

    #[test]
    fn zero_parses() {
        assert_eq!("0".parse::<Integer>().unwrap(), Integer::from(0u8));
    }

    #[test]
    fn durations_count_seconds() {
        assert_eq!(
            Integer::from(Duration::from_secs(30 * 60)).as_str(),
            "1800"
        );
        assert_eq!(Integer::from(Duration::from_millis(2_999)).as_str(), "2");
    }
}
