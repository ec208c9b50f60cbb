//! The scalar type of the physics core and the math vocabulary that goes with it.
//!
//! The core is compiled at either single or double precision. Nothing outside this
//! module names `f32` or `f64`; positions, velocities, masses and time steps are all
//! declared as [`Real`], and every square root, sine or power goes through the `r_*`
//! functions below so that the width-correct routine is always the one called.
//!
//! Narrow (single) precision is the default. Wide precision is selected with
//! `--features f64`; `--features f32` forces narrow and cannot be combined with it.

use crate::precision::Precision;
use crate::traits::RealField;
use static_assertions::assert_eq_size;

/// Single precision scalar.
pub type Real32 = f32;
/// Double precision scalar.
pub type Real64 = f64;

// Our Real scalar type:
#[cfg(not(feature = "f64"))]
pub type Real = Real32;
#[cfg(feature = "f64")]
pub type Real = Real64;

#[cfg(not(feature = "f64"))]
assert_eq_size!(Real, f32);
#[cfg(feature = "f64")]
assert_eq_size!(Real, f64);

/// The precision this build of the core was compiled at.
#[cfg(not(feature = "f64"))]
pub const PRECISION: Precision = Precision::Single;
/// The precision this build of the core was compiled at.
#[cfg(feature = "f64")]
pub const PRECISION: Precision = Precision::Double;

/// Set when the core runs at single precision, for code that needs to branch on it.
pub const SINGLE_PRECISION: bool = matches!(PRECISION, Precision::Single);
/// Set when the core runs at double precision, for code that needs to branch on it.
pub const DOUBLE_PRECISION: bool = matches!(PRECISION, Precision::Double);

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Limits
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

// Limits and constants are read from the active width's `RealField` impl.

/// The highest finite value of [`Real`]. Used as "infinite" mass or inertia.
pub const REAL_MAX: Real = <Real as RealField>::MAX;

/// The lowest finite value of [`Real`].
pub const REAL_MIN: Real = <Real as RealField>::MIN;

/// The smallest positive normal value of [`Real`].
pub const REAL_MIN_POSITIVE: Real = <Real as RealField>::MIN_POSITIVE;

/// A small epsilon for comparisons, adjusted per precision.
pub const EPSILON: Real = <Real as RealField>::EPSILON;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Constants
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// Archimedes' constant (π) at the active precision.
pub const R_PI: Real = <Real as RealField>::PI;

/// π/2
pub const FRAC_PI_2: Real = <Real as RealField>::FRAC_PI_2;

/// The full circle constant (τ)
pub const TAU: Real = <Real as RealField>::TAU;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Operations
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

// Free-function spelling of the `RealField` methods, so call sites can write
// `r_sqrt(x)` whatever the active width is.
macro_rules! real_unary_ops {
    ( $( $(#[$doc:meta])* $name:ident ),* $(,)? ) => ( $(
        $(#[$doc])*
        #[inline]
        pub fn $name(x: Real) -> Real {
            <Real as RealField>::$name(x)
        }
    )* )
}

real_unary_ops! {
    /// Square root at the active precision.
    r_sqrt,
    /// Absolute value at the active precision.
    r_abs,
    /// Sine (radians) at the active precision.
    r_sin,
    /// Cosine (radians) at the active precision.
    r_cos,
    /// `e^x` at the active precision.
    r_exp,
}

/// `base` raised to the floating point power `exp`, at the active precision.
#[inline]
pub fn r_pow(base: Real, exp: Real) -> Real {
    base.r_pow(exp)
}

/// Floating point remainder of `dividend / divisor`, with the sign of `dividend`.
#[inline]
pub fn r_mod(dividend: Real, divisor: Real) -> Real {
    dividend.r_mod(divisor)
}
