//! Conversion of `f64` values to ratios by continued-fraction expansion.
//!
//! Both public entry points share one expansion loop. They differ only in the
//! stopping rule that decides when a convergent is accepted:
//!
//! - **Epsilon**: accept the first convergent within `epsilon` of the value;
//!   fail with [`FractionError::ConversionFailed`] after `max_iterations` steps.
//! - **Max denominator**: keep expanding while denominators stay within the
//!   bound and return the last convergent that does.
//!
//! Convergents are accumulated in the wide type and must narrow into the
//! stored type at every step.
//!
//! # Examples
//!
//! ```
//! use checked_ratio::{ConversionOptions, Fraction};
//!
//! let half = Fraction::from_f64(0.5)?;
//! assert_eq!(half, Fraction::ONE_HALF);
//!
//! let coarse = ConversionOptions::default().with_epsilon(1e-2);
//! let approx = Fraction::from_f64_with_options(std::f64::consts::PI, &coarse)?;
//! assert_eq!(approx, Fraction::new(22, 7)?);
//! # Ok::<(), checked_ratio::FractionError>(())
//! ```

use crate::{FractionError, Ratio, RatioInteger, Result, WideInteger};
use log::{debug, trace};
use num_traits::{AsPrimitive, CheckedAdd, CheckedMul, FromPrimitive, One, Zero};

/// Tolerance used by [`Ratio::from_f64`].
pub const DEFAULT_EPSILON: f64 = 1e-5;

/// Iteration bound used by [`Ratio::from_f64`] and
/// [`Ratio::from_f64_with_max_denominator`].
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Parameters of the epsilon-based conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionOptions {
    /// Maximum accepted distance between the value and the convergent.
    pub epsilon: f64,
    /// Maximum number of expansion steps before giving up.
    pub max_iterations: u32,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl ConversionOptions {
    /// Options with the given tolerance and iteration bound.
    pub fn new(epsilon: f64, max_iterations: u32) -> Self {
        Self {
            epsilon,
            max_iterations,
        }
    }

    /// Replace the tolerance.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Replace the iteration bound.
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Decides when the expansion stops.
#[derive(Debug, Clone, Copy)]
enum StoppingRule<W> {
    Epsilon(f64),
    MaxDenominator(W),
}

impl<T: RatioInteger> Ratio<T> {
    /// Convert an `f64` with [`DEFAULT_EPSILON`] and [`DEFAULT_MAX_ITERATIONS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_ratio::Fraction;
    ///
    /// let r = Fraction::from_f64(0.75)?;
    /// assert_eq!((r.numer(), r.denom()), (3, 4));
    ///
    /// let third = Fraction::from_f64(0.3333333333333333)?;
    /// assert_eq!(third, Fraction::ONE_THIRD);
    /// # Ok::<(), checked_ratio::FractionError>(())
    /// ```
    pub fn from_f64(value: f64) -> Result<Self> {
        Self::from_f64_with_options(value, &ConversionOptions::default())
    }

    /// Convert an `f64` with explicit [`ConversionOptions`].
    pub fn from_f64_with_options(value: f64, options: &ConversionOptions) -> Result<Self> {
        Self::from_f64_with_epsilon(value, options.epsilon, options.max_iterations)
    }

    /// Convert an `f64`, accepting the first convergent within `epsilon`.
    ///
    /// # Errors
    ///
    /// - [`FractionError::InvalidArgument`] if `value` is not finite or
    ///   `epsilon` is negative or NaN
    /// - [`FractionError::ConversionFailed`] if no convergent is close enough
    ///   after `max_iterations` steps
    /// - [`FractionError::ConversionOverflow`] if a convergent stops fitting
    ///   the stored type before one is close enough, or if the expansion
    ///   terminates on a convergent that is not within `epsilon`
    pub fn from_f64_with_epsilon(value: f64, epsilon: f64, max_iterations: u32) -> Result<Self> {
        if epsilon.is_nan() || epsilon < 0.0 {
            return Err(FractionError::InvalidArgument(format!(
                "epsilon must be a non-negative number, got {epsilon}"
            )));
        }
        expand(value, max_iterations, StoppingRule::Epsilon(epsilon))
    }

    /// Convert an `f64` to the closest convergent whose denominator does not
    /// exceed `max_denominator`.
    ///
    /// # Errors
    ///
    /// - [`FractionError::InvalidArgument`] if `value` is not finite or
    ///   `max_denominator` is not positive
    /// - [`FractionError::ConversionOverflow`] if the integer part of `value`
    ///   does not fit the stored type
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_ratio::Fraction;
    ///
    /// let r = Fraction::from_f64_with_max_denominator(0.25, 10)?;
    /// assert_eq!(r, Fraction::ONE_QUARTER);
    /// # Ok::<(), checked_ratio::FractionError>(())
    /// ```
    pub fn from_f64_with_max_denominator(value: f64, max_denominator: T) -> Result<Self> {
        if max_denominator < T::one() {
            return Err(FractionError::InvalidArgument(format!(
                "max denominator must be positive, got {max_denominator}"
            )));
        }
        expand(
            value,
            DEFAULT_MAX_ITERATIONS,
            StoppingRule::MaxDenominator(max_denominator.to_wide()),
        )
    }
}

impl<T: RatioInteger> FromPrimitive for Ratio<T> {
    fn from_i64(n: i64) -> Option<Self> {
        T::from_i64(n).map(Self::from_integer)
    }

    fn from_u64(n: u64) -> Option<Self> {
        T::from_u64(n).map(Self::from_integer)
    }

    fn from_f64(n: f64) -> Option<Self> {
        Ratio::from_f64(n).ok()
    }
}

#[inline]
fn to_f64<W: WideInteger>(w: W) -> f64 {
    AsPrimitive::<f64>::as_(w)
}

fn conversion_overflow(value: f64, numerator: i128, denominator: i128) -> FractionError {
    debug!("convergent {numerator}/{denominator} of {value} overflows");
    FractionError::ConversionOverflow {
        value,
        numerator,
        denominator,
    }
}

/// Next convergent `(a·p1 + p0, a·q1 + q0)`, if it fits the stored type.
fn next_convergent<T: RatioInteger>(
    term: T::Wide,
    (p0, q0): (T::Wide, T::Wide),
    (p1, q1): (T::Wide, T::Wide),
) -> Option<(T::Wide, T::Wide)> {
    let p2 = term.checked_mul(&p1)?.checked_add(&p0)?;
    let q2 = term.checked_mul(&q1)?.checked_add(&q0)?;
    T::from_wide_checked(p2)?;
    T::from_wide_checked(q2)?;
    Some((p2, q2))
}

fn expand<T: RatioInteger>(
    value: f64,
    max_iterations: u32,
    rule: StoppingRule<T::Wide>,
) -> Result<Ratio<T>> {
    if !value.is_finite() {
        return Err(FractionError::InvalidArgument(format!(
            "cannot convert non-finite value {value} to a fraction"
        )));
    }

    let floor = value.floor();
    let a0 = <T::Wide as FromPrimitive>::from_f64(floor)
        .filter(|a| T::from_wide_checked(*a).is_some())
        .ok_or_else(|| conversion_overflow(value, floor as i128, 1))?;

    let one = T::Wide::one();
    let (mut p0, mut q0) = (one, T::Wide::zero());
    let (mut p1, mut q1) = (a0, one);

    let mut remainder = value - floor;
    let integral = match rule {
        StoppingRule::Epsilon(epsilon) => remainder <= epsilon,
        StoppingRule::MaxDenominator(_) => remainder == 0.0,
    };
    if integral {
        return Ratio::from_wide(p1, q1);
    }

    for iteration in 1..=max_iterations {
        let inverted = 1.0 / remainder;
        let term = inverted.floor();

        let next = <T::Wide as FromPrimitive>::from_f64(term)
            .and_then(|a| next_convergent::<T>(a, (p0, q0), (p1, q1)));
        let (p2, q2) = match (next, rule) {
            (Some(pair), _) => pair,
            (None, StoppingRule::MaxDenominator(_)) => {
                debug!("convergent after {p1}/{q1} overflows, keeping {p1}/{q1}");
                return Ratio::from_wide(p1, q1);
            }
            (None, StoppingRule::Epsilon(_)) => {
                let p2 = term * to_f64(p1) + to_f64(p0);
                let q2 = term * to_f64(q1) + to_f64(q0);
                return Err(conversion_overflow(value, p2 as i128, q2 as i128));
            }
        };
        trace!("convergent {iteration} of {value}: {p2}/{q2}");

        match rule {
            StoppingRule::Epsilon(epsilon) => {
                if (value - to_f64(p2) / to_f64(q2)).abs() <= epsilon {
                    return Ratio::from_wide(p2, q2);
                }
            }
            StoppingRule::MaxDenominator(max_denominator) => {
                if q2 > max_denominator {
                    return Ratio::from_wide(p1, q1);
                }
            }
        }

        remainder = inverted - term;
        if remainder == 0.0 {
            return match rule {
                StoppingRule::MaxDenominator(_) => Ratio::from_wide(p2, q2),
                // The expansion cannot continue and p2/q2 is not within epsilon.
                StoppingRule::Epsilon(_) => Err(conversion_overflow(
                    value,
                    AsPrimitive::<i128>::as_(p2),
                    AsPrimitive::<i128>::as_(q2),
                )),
            };
        }
        (p0, q0, p1, q1) = (p1, q1, p2, q2);
    }

    match rule {
        StoppingRule::Epsilon(_) => {
            debug!("{value} did not converge in {max_iterations} iterations");
            Err(FractionError::ConversionFailed {
                value,
                max_iterations,
            })
        }
        StoppingRule::MaxDenominator(_) => Ratio::from_wide(p1, q1),
    }
}
