//! Overflow-checked rational number arithmetic over fixed-width signed integers.
//!
//! This library provides `Ratio<T>`, an immutable rational number type that is
//! always kept in lowest terms, for any signed primitive integer from `i8` to
//! `i64`. [`Fraction`] (`Ratio<i32>`) is the common choice.
//!
//! # Features
//!
//! - **Always reduced**: every constructor and operation returns lowest terms
//!   with a positive denominator, so equality and hashing are structural
//! - **Overflow detection**: intermediates are computed in a type twice as wide
//!   and narrowed with a check; results that do not fit are reported as
//!   [`FractionError::Overflow`] instead of wrapping
//! - **Double conversion**: continued-fraction expansion with either an epsilon
//!   or a maximum-denominator stopping rule
//!
//! # Design Philosophy
//!
//! Every fallible operation returns [`Result`]. The `std::ops` operators are
//! also implemented and panic on failure, the same contract primitive integer
//! operators follow.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use checked_ratio::Fraction;
//!
//! let a = Fraction::new(3, 4)?;
//! let b = Fraction::new(2, 5)?;
//!
//! let sum = a.add(&b)?;
//! assert_eq!(sum, Fraction::new(23, 20)?);
//! assert_eq!(sum.to_string(), "23 / 20");
//!
//! // Reduction is mandatory
//! assert_eq!(Fraction::new(2, 4)?, Fraction::ONE_HALF);
//! # Ok::<(), checked_ratio::FractionError>(())
//! ```
//!
//! ## Overflow Handling
//!
//! ```
//! use checked_ratio::{Fraction, FractionError};
//!
//! let big = Fraction::from_integer(i32::MAX / 2 + 1);
//! assert_eq!(big.mul_integer(2), Err(FractionError::Overflow));
//!
//! let min = Fraction::from_integer(i32::MIN);
//! assert_eq!(min.negate(), Err(FractionError::Overflow));
//! ```
//!
//! ## Double Conversion
//!
//! ```
//! use checked_ratio::Fraction;
//!
//! let third = Fraction::from_f64_with_epsilon(0.3333, 1.0e-4, 100)?;
//! assert_eq!((third.numer(), third.denom()), (1, 3));
//!
//! let pi = Fraction::from_f64_with_max_denominator(std::f64::consts::PI, 1000)?;
//! assert_eq!(pi, Fraction::new(355, 113)?);
//! # Ok::<(), checked_ratio::FractionError>(())
//! ```

pub mod convert;
pub mod error;
mod parse;
pub mod ratio_trait;

pub use crate::convert::{ConversionOptions, DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS};
pub use crate::error::{FractionError, Result};
pub use crate::ratio_trait::{gcd, RatioInteger, WideInteger};

use core::cmp::Ordering;
use core::fmt;
use log::debug;
use num_traits::{
    AsPrimitive, CheckedAdd, CheckedDiv, CheckedMul, CheckedNeg, CheckedSub, One,
    Signed, Zero,
};

/// A rational number in lowest terms with a positive denominator.
///
/// # Type Parameter
///
/// `T` must implement [`RatioInteger`]: `i8`, `i16`, `i32` or `i64`.
///
/// # Invariants
///
/// - Denominator is always positive
/// - `gcd(|numer|, denom) == 1`
/// - Zero is always represented as `0/1`
///
/// # Examples
///
/// ```
/// use checked_ratio::Ratio;
///
/// let r = Ratio::<i64>::new(6, -8)?;
/// assert_eq!(r.numer(), -3);
/// assert_eq!(r.denom(), 4);
/// # Ok::<(), checked_ratio::FractionError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ratio<T: RatioInteger> {
    numer: T,
    denom: T,
}

impl<T: RatioInteger> Ratio<T> {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Build a ratio from a pair that is already reduced and has a positive
    /// denominator.
    #[inline(always)]
    const fn new_raw(numer: T, denom: T) -> Self {
        Self { numer, denom }
    }

    /// Create a ratio, reducing it to lowest terms.
    ///
    /// # Errors
    ///
    /// - [`FractionError::DivisionByZero`] if `denom` is zero
    /// - [`FractionError::Overflow`] if moving the sign to the numerator does
    ///   not fit, e.g. `i32::MIN / -1`
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_ratio::Fraction;
    ///
    /// let r = Fraction::new(3, -4)?;
    /// assert_eq!((r.numer(), r.denom()), (-3, 4));
    /// # Ok::<(), checked_ratio::FractionError>(())
    /// ```
    #[inline]
    pub fn new(numer: T, denom: T) -> Result<Self> {
        Self::reduced(numer, denom)
    }

    /// Reduce a numerator/denominator pair to lowest terms with a positive
    /// denominator.
    ///
    /// Both values are divided by their gcd before the sign is normalized, so
    /// `reduced(i32::MIN, -2)` succeeds while `reduced(i32::MIN, -1)` fails.
    pub fn reduced(numer: T, denom: T) -> Result<Self> {
        Self::from_wide(numer.to_wide(), denom.to_wide())
    }

    /// Create the ratio `value / 1`.
    #[inline]
    pub fn from_integer(value: T) -> Self {
        Self::new_raw(value, T::one())
    }

    /// Create a ratio representing 0.
    #[inline(always)]
    pub fn zero() -> Self {
        Self::new_raw(T::zero(), T::one())
    }

    /// Create a ratio representing 1.
    #[inline(always)]
    pub fn one() -> Self {
        Self::new_raw(T::one(), T::one())
    }

    /// Reduce a wide pair and narrow it back to the stored width.
    ///
    /// Every arithmetic result funnels through here.
    pub(crate) fn from_wide(numer: T::Wide, denom: T::Wide) -> Result<Self> {
        if denom.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        if numer.is_zero() {
            return Ok(Self::zero());
        }

        let g = gcd(numer, denom);
        let (mut numer, mut denom) = (numer / g, denom / g);
        if denom.is_negative() {
            numer = numer.checked_neg().ok_or(FractionError::Overflow)?;
            denom = denom.checked_neg().ok_or(FractionError::Overflow)?;
        }

        match (T::from_wide_checked(numer), T::from_wide_checked(denom)) {
            (Some(numer), Some(denom)) => Ok(Self::new_raw(numer, denom)),
            _ => {
                debug!(
                    "{numer}/{denom} does not fit in {}",
                    core::any::type_name::<T>()
                );
                Err(FractionError::Overflow)
            }
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// The numerator, carrying the sign.
    #[inline(always)]
    pub fn numer(&self) -> T {
        self.numer
    }

    /// The denominator, always positive.
    #[inline(always)]
    pub fn denom(&self) -> T {
        self.denom
    }

    /// Check if the ratio is zero.
    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    /// Check if the ratio is positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.numer.is_positive()
    }

    /// Check if the ratio is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    /// Check if the ratio represents an integer (denominator is 1).
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    // ========================================================================
    // ARITHMETIC
    // ========================================================================

    /// Add two ratios.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_ratio::Fraction;
    ///
    /// let sum = Fraction::ONE_THIRD.add(&Fraction::new(1, 6)?)?;
    /// assert_eq!(sum, Fraction::ONE_HALF);
    /// # Ok::<(), checked_ratio::FractionError>(())
    /// ```
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.add_sub(other, false)
    }

    /// Subtract another ratio.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.add_sub(other, true)
    }

    fn add_sub(&self, other: &Self, subtract: bool) -> Result<Self> {
        let combine = |a: T::Wide, b: T::Wide| {
            if subtract {
                a.checked_sub(&b)
            } else {
                a.checked_add(&b)
            }
        };

        if self.denom == other.denom {
            let numer = combine(self.numer.to_wide(), other.numer.to_wide())
                .ok_or(FractionError::Overflow)?;
            return Self::from_wide(numer, self.denom.to_wide());
        }

        let ad = self.numer.to_wide() * other.denom.to_wide();
        let bc = other.numer.to_wide() * self.denom.to_wide();
        let bd = self.denom.to_wide() * other.denom.to_wide();
        let numer = combine(ad, bc).ok_or(FractionError::Overflow)?;

        Self::from_wide(numer, bd)
    }

    /// Multiply two ratios.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_ratio::Fraction;
    ///
    /// let product = Fraction::TWO_THIRDS.mul(&Fraction::THREE_QUARTERS)?;
    /// assert_eq!(product, Fraction::ONE_HALF);
    /// # Ok::<(), checked_ratio::FractionError>(())
    /// ```
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn mul(&self, other: &Self) -> Result<Self> {
        let numer = self.numer.to_wide() * other.numer.to_wide();
        let denom = self.denom.to_wide() * other.denom.to_wide();
        Self::from_wide(numer, denom)
    }

    /// Divide by another ratio.
    ///
    /// Computes `self * other.recip()` in one step, so a divisor whose
    /// reciprocal does not fit (such as `i32::MIN / 3`) can still divide.
    ///
    /// # Errors
    ///
    /// - [`FractionError::DivisionByZero`] if `other` is zero
    /// - [`FractionError::Overflow`] only if the reduced quotient does not fit.
    ///   Unlike `self.mul(&other.recip()?)`, this does not fail when only the
    ///   reciprocal of `other` is out of range.
    #[allow(clippy::should_implement_trait)]
    pub fn div(&self, other: &Self) -> Result<Self> {
        if other.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        let numer = self.numer.to_wide() * other.denom.to_wide();
        let denom = self.denom.to_wide() * other.numer.to_wide();
        Self::from_wide(numer, denom)
    }

    /// Add an integer.
    #[inline]
    pub fn add_integer(&self, value: T) -> Result<Self> {
        self.add(&Self::from_integer(value))
    }

    /// Subtract an integer.
    #[inline]
    pub fn sub_integer(&self, value: T) -> Result<Self> {
        self.sub(&Self::from_integer(value))
    }

    /// Multiply by an integer.
    #[inline]
    pub fn mul_integer(&self, value: T) -> Result<Self> {
        self.mul(&Self::from_integer(value))
    }

    /// Divide by an integer.
    ///
    /// # Errors
    ///
    /// [`FractionError::DivisionByZero`] if `value` is zero.
    #[inline]
    pub fn div_integer(&self, value: T) -> Result<Self> {
        self.div(&Self::from_integer(value))
    }

    /// Get the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// - [`FractionError::DivisionByZero`] if the ratio is zero
    /// - [`FractionError::Overflow`] if the numerator is `T::MIN` and its
    ///   magnitude cannot become the denominator
    pub fn recip(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        Self::from_wide(self.denom.to_wide(), self.numer.to_wide())
    }

    /// Negate the ratio.
    ///
    /// # Errors
    ///
    /// [`FractionError::Overflow`] if the numerator is `T::MIN`.
    #[inline]
    pub fn negate(&self) -> Result<Self> {
        self.numer
            .checked_neg()
            .map(|numer| Self::new_raw(numer, self.denom))
            .ok_or(FractionError::Overflow)
    }

    /// Get the absolute value.
    ///
    /// # Errors
    ///
    /// [`FractionError::Overflow`] if the numerator is `T::MIN`.
    #[inline]
    pub fn abs(&self) -> Result<Self> {
        if self.is_negative() {
            self.negate()
        } else {
            Ok(*self)
        }
    }

    // ========================================================================
    // CONVERSIONS
    // ========================================================================

    /// Convert to `f64` by floating-point division.
    #[inline]
    pub fn to_f64(&self) -> f64 {
        AsPrimitive::<f64>::as_(self.numer) / AsPrimitive::<f64>::as_(self.denom)
    }

    /// Convert to `f32` by floating-point division.
    #[inline]
    pub fn to_f32(&self) -> f32 {
        AsPrimitive::<f32>::as_(self.numer) / AsPrimitive::<f32>::as_(self.denom)
    }

    /// The integer part, truncated toward zero.
    #[inline]
    pub fn to_integer(&self) -> T {
        self.numer / self.denom
    }

    /// The integer part as `i64`, truncated toward zero.
    #[inline]
    pub fn to_i64(&self) -> i64 {
        AsPrimitive::<i64>::as_(self.to_integer())
    }

    /// The value multiplied by 100, as `f64`.
    ///
    /// # Errors
    ///
    /// [`FractionError::Overflow`] if the scaled ratio does not fit.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_ratio::Fraction;
    ///
    /// assert_eq!(Fraction::ONE_HALF.to_percentage()?, 50.0);
    /// # Ok::<(), checked_ratio::FractionError>(())
    /// ```
    pub fn to_percentage(&self) -> Result<f64> {
        let hundred = T::from_u8(100).ok_or(FractionError::Overflow)?;
        Ok(self.mul_integer(hundred)?.to_f64())
    }
}

impl<T: RatioInteger> Default for Ratio<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: RatioInteger> From<T> for Ratio<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::from_integer(value)
    }
}

// ============================================================================
// COMPARISONS AND FORMATTING
// ============================================================================

impl<T: RatioInteger> PartialOrd for Ratio<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: RatioInteger> Ord for Ratio<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.denom == other.denom {
            return self.numer.cmp(&other.numer);
        }
        // Denominators are positive, so cross multiplication keeps the order.
        let ad = self.numer.to_wide() * other.denom.to_wide();
        let bc = other.numer.to_wide() * self.denom.to_wide();
        ad.cmp(&bc)
    }
}

impl<T: RatioInteger> fmt::Display for Ratio<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            f.write_str("0")
        } else if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{} / {}", self.numer, self.denom)
        }
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

/// Forward a `std::ops` operator to the checked method of the same name.
///
/// Like primitive integer operators, the result panics when the checked
/// method fails.
macro_rules! forward_binop {
    ($imp:path, $method:ident) => {
        impl<T: RatioInteger> $imp for Ratio<T> {
            type Output = Self;
            #[inline]
            fn $method(self, other: Self) -> Self {
                match Ratio::$method(&self, &other) {
                    Ok(r) => r,
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl<T: RatioInteger> $imp for &Ratio<T> {
            type Output = Ratio<T>;
            #[inline]
            fn $method(self, other: Self) -> Ratio<T> {
                match Ratio::$method(self, other) {
                    Ok(r) => r,
                    Err(e) => panic!("{e}"),
                }
            }
        }
    };
}

forward_binop!(core::ops::Add, add);
forward_binop!(core::ops::Sub, sub);
forward_binop!(core::ops::Mul, mul);
forward_binop!(core::ops::Div, div);

impl<T: RatioInteger> core::ops::Neg for Ratio<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        match self.negate() {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: RatioInteger> core::ops::Neg for &Ratio<T> {
    type Output = Ratio<T>;
    #[inline]
    fn neg(self) -> Ratio<T> {
        -*self
    }
}

impl<T: RatioInteger> Zero for Ratio<T> {
    fn zero() -> Self {
        Ratio::zero()
    }

    fn is_zero(&self) -> bool {
        Ratio::is_zero(self)
    }
}

impl<T: RatioInteger> One for Ratio<T> {
    fn one() -> Self {
        Ratio::one()
    }
}

impl<T: RatioInteger> CheckedAdd for Ratio<T> {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        Ratio::add(self, v).ok()
    }
}

impl<T: RatioInteger> CheckedSub for Ratio<T> {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        Ratio::sub(self, v).ok()
    }
}

impl<T: RatioInteger> CheckedMul for Ratio<T> {
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        Ratio::mul(self, v).ok()
    }
}

impl<T: RatioInteger> CheckedDiv for Ratio<T> {
    fn checked_div(&self, v: &Self) -> Option<Self> {
        Ratio::div(self, v).ok()
    }
}

impl<T: RatioInteger> CheckedNeg for Ratio<T> {
    fn checked_neg(&self) -> Option<Self> {
        self.negate().ok()
    }
}

// ============================================================================
// NAMED CONSTANTS
// ============================================================================

macro_rules! impl_named_constants {
    ($int:ty) => {
        impl Ratio<$int> {
            /// `0`, the additive identity.
            pub const ZERO: Self = Self::new_raw(0, 1);
            /// `1`, the multiplicative identity.
            pub const ONE: Self = Self::new_raw(1, 1);
            /// `2`
            pub const TWO: Self = Self::new_raw(2, 1);
            /// `-1`
            pub const MINUS_ONE: Self = Self::new_raw(-1, 1);
            /// `1 / 2`
            pub const ONE_HALF: Self = Self::new_raw(1, 2);
            /// `1 / 3`
            pub const ONE_THIRD: Self = Self::new_raw(1, 3);
            /// `2 / 3`
            pub const TWO_THIRDS: Self = Self::new_raw(2, 3);
            /// `1 / 4`
            pub const ONE_QUARTER: Self = Self::new_raw(1, 4);
            /// `3 / 4`
            pub const THREE_QUARTERS: Self = Self::new_raw(3, 4);
            /// `1 / 5`
            pub const ONE_FIFTH: Self = Self::new_raw(1, 5);
            /// `2 / 5`
            pub const TWO_FIFTHS: Self = Self::new_raw(2, 5);
            /// `3 / 5`
            pub const THREE_FIFTHS: Self = Self::new_raw(3, 5);
            /// `4 / 5`
            pub const FOUR_FIFTHS: Self = Self::new_raw(4, 5);
        }
    };
}

impl_named_constants!(i8);
impl_named_constants!(i16);
impl_named_constants!(i32);
impl_named_constants!(i64);

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Ratio over `i32` with `i64` intermediates.
pub type Fraction = Ratio<i32>;

/// Ratio over `i8`.
pub type Fraction8 = Ratio<i8>;

/// Ratio over `i16`.
pub type Fraction16 = Ratio<i16>;

/// Ratio over `i64` with `i128` intermediates.
pub type Fraction64 = Ratio<i64>;
