//! Parsing of ratios from their text form.

use crate::ratio_trait::parse_decimal;
use crate::{FractionError, Ratio, RatioInteger, Result};
use core::str::FromStr;

/// Parses the forms produced by `Display` (`"3 / 4"`, `"-7"`, `"0"`) as well as
/// unspaced `"3/4"`. The parsed pair is reduced.
impl<T: RatioInteger> FromStr for Ratio<T> {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || FractionError::InvalidArgument(format!("cannot parse {s:?} as a fraction"));

        let (numer, denom) = match s.split_once('/') {
            Some((numer, denom)) => (numer.trim(), denom.trim()),
            None => (s.trim(), "1"),
        };
        let numer = parse_decimal::<T>(numer).ok_or_else(invalid)?;
        let denom = parse_decimal::<T>(denom).ok_or_else(invalid)?;

        Self::new(numer, denom)
    }
}
