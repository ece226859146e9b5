//! Trait system for overflow-checked rational arithmetic over primitive signed integers.
//!
//! This module provides the foundational traits that enable `Ratio<T>` to work
//! with any signed primitive integer from `i8` to `i64`.
//!
//! # Architecture
//!
//! The trait system uses two levels:
//!
//! - [`WideInteger`]: Operations needed for intermediate results
//! - [`RatioInteger`]: The stored integer type, paired with a `Wide` type at least
//!   twice its width
//!
//! Every product of two stored values fits in the wide type, so cross
//! multiplication never overflows there. Results are narrowed back with
//! [`RatioInteger::from_wide_checked`], which is the single place where an
//! overflow of the stored representation is detected.
//!
//! # Example
//!
//! ```
//! use checked_ratio::RatioInteger;
//!
//! let wide = 40_000i32.to_wide() * 60_000i32.to_wide();
//! assert_eq!(wide, 2_400_000_000i64);
//! assert_eq!(i32::from_wide_checked(wide), None);
//! ```

use core::fmt::{Debug, Display};
use core::hash::Hash;
use num_integer::Integer;
use num_traits::{AsPrimitive, CheckedNeg, FromPrimitive, Num, PrimInt, Signed};

/// Operations for types used in overflow arithmetic.
///
/// Implemented for every signed primitive integer through a blanket impl.
/// `i128` only ever appears as a wide type.
pub trait WideInteger:
    PrimInt
    + Signed
    + Integer
    + CheckedNeg
    + FromPrimitive
    + AsPrimitive<f64>
    + AsPrimitive<i128>
    + Hash
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
}

impl<T> WideInteger for T where
    T: PrimInt
        + Signed
        + Integer
        + CheckedNeg
        + FromPrimitive
        + AsPrimitive<f64>
        + AsPrimitive<i128>
        + Hash
        + Debug
        + Display
        + Send
        + Sync
        + 'static
{
}

/// Integer type suitable for use in `Ratio<T>`.
///
/// # Associated Type: Wide
///
/// The `Wide` type must hold the product of any two values of type `Self`
/// plus one more addition of such a product. Doubling the width satisfies
/// this for every pair:
///
/// | Stored | Wide   |
/// |--------|--------|
/// | `i8`   | `i16`  |
/// | `i16`  | `i32`  |
/// | `i32`  | `i64`  |
/// | `i64`  | `i128` |
pub trait RatioInteger: WideInteger + AsPrimitive<f32> + AsPrimitive<i64> {
    /// The wide type for intermediate arithmetic.
    type Wide: WideInteger;

    /// Convert to the wide type. Never fails.
    fn to_wide(self) -> Self::Wide;

    /// Try to convert from the wide type, returning `None` if the value doesn't fit.
    fn from_wide_checked(wide: Self::Wide) -> Option<Self>;
}

/// Macro to implement RatioInteger for a (narrow, wide) type pair.
macro_rules! impl_ratio_integer {
    ($narrow:ty, $wide:ty) => {
        impl RatioInteger for $narrow {
            type Wide = $wide;

            #[inline(always)]
            fn to_wide(self) -> $wide {
                <$wide>::from(self)
            }

            #[inline(always)]
            fn from_wide_checked(wide: $wide) -> Option<Self> {
                <$narrow>::try_from(wide).ok()
            }
        }
    };
}

impl_ratio_integer!(i8, i16);
impl_ratio_integer!(i16, i32);
impl_ratio_integer!(i32, i64);
impl_ratio_integer!(i64, i128);

/// Greatest common divisor of the magnitudes of `a` and `b`.
///
/// By convention `gcd(0, x) = |x|` and `gcd(x, 0) = |x|`. The result is always
/// non-negative; callers never pass the wide type's minimum value, whose
/// magnitude has no positive counterpart.
///
/// # Examples
///
/// ```
/// use checked_ratio::gcd;
///
/// assert_eq!(gcd(48i64, -18i64), 6);
/// assert_eq!(gcd(0i64, -7i64), 7);
/// ```
#[inline]
pub fn gcd<W: WideInteger>(a: W, b: W) -> W {
    Integer::gcd(&a, &b)
}

/// Parse a decimal integer of any stored width.
#[inline]
pub(crate) fn parse_decimal<T: Num>(text: &str) -> Option<T> {
    T::from_str_radix(text, 10).ok()
}
