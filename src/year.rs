//! Model year normalization
//!
//! Datasets store model years as text, while users like to query them as
//! integers. Both representations go through [`ModelYear::parse()`] or an
//! integer conversion, so that `2019`, `"2019"` and `" 2019 "` all compare
//! equal.

use crate::error::DatasetError;
use std::{fmt, str::FromStr};

/// Canonical comparison key for a vehicle model year
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ModelYear(u16);
//
impl ModelYear {
    /// Normalize the textual form of a year
    ///
    /// Surrounding whitespace is ignored, anything else must be a
    /// non-negative decimal integer that fits a calendar year.
    pub fn parse(input: &str) -> Result<Self, DatasetError> {
        input
            .trim()
            .parse::<u16>()
            .map(Self)
            .map_err(|_| DatasetError::InvalidYear {
                input: input.into(),
            })
    }
}
//
impl fmt::Display for ModelYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
//
impl FromStr for ModelYear {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
//
impl From<u16> for ModelYear {
    fn from(value: u16) -> Self {
        Self(value)
    }
}
//
impl TryFrom<i32> for ModelYear {
    type Error = DatasetError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u16::try_from(value)
            .map(Self)
            .map_err(|_| DatasetError::InvalidYear {
                input: value.to_string().into(),
            })
    }
}
//
impl TryFrom<&str> for ModelYear {
    type Error = DatasetError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
//
impl TryFrom<String> for ModelYear {
    type Error = DatasetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_and_strings_agree() {
        let from_int = ModelYear::try_from(2019).unwrap();
        let from_str = ModelYear::try_from("2019").unwrap();
        let from_string = ModelYear::try_from(String::from("2019")).unwrap();
        assert_eq!(from_int, from_str);
        assert_eq!(from_str, from_string);
        assert_eq!(from_int, ModelYear::from(2019u16));
        assert_eq!(from_int.to_string(), "2019");
    }

    #[test]
    fn whitespace_and_leading_zeros_are_normalized() {
        assert_eq!(ModelYear::parse(" 2019\t").unwrap(), ModelYear::from(2019));
        assert_eq!(ModelYear::parse("02019").unwrap().to_string(), "2019");
    }

    #[test]
    fn malformed_years_are_rejected() {
        for input in ["", "twenty", "2019.5", "-1", "70000"] {
            assert_eq!(
                ModelYear::parse(input),
                Err(DatasetError::InvalidYear {
                    input: input.into()
                }),
            );
        }
        assert!(matches!(
            ModelYear::try_from(-2019),
            Err(DatasetError::InvalidYear { .. })
        ));
        assert!(ModelYear::try_from(i32::MAX).is_err());
    }
}
