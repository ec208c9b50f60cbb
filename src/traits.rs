use crate::precision::Precision;
use core::fmt::{Debug, Display};

/// A floating point width the physics core can be compiled against.
///
/// Both `f32` and `f64` implement the full vocabulary in every build, whichever
/// one [`Real`](crate::Real) is bound to. Each method forwards to the standard
/// routine of the same width, so NaN and infinity propagate unchanged.
pub trait RealField: Copy + PartialOrd + Debug + Display + Send + Sync + 'static {
    /// Highest finite value.
    const MAX: Self;
    /// Lowest finite value.
    const MIN: Self;
    /// Smallest positive normal value.
    const MIN_POSITIVE: Self;
    /// Comparison tolerance used by the core at this width.
    const EPSILON: Self;
    const PI: Self;
    const FRAC_PI_2: Self;
    const TAU: Self;
    /// Storage width in bits.
    const BITS: u32;
    const PRECISION: Precision;

    fn r_sqrt(self) -> Self;
    fn r_abs(self) -> Self;
    fn r_sin(self) -> Self;
    fn r_cos(self) -> Self;
    fn r_exp(self) -> Self;
    fn r_pow(self, exp: Self) -> Self;
    /// Remainder of `self / divisor`, truncated toward zero (C `fmod`).
    fn r_mod(self, divisor: Self) -> Self;
}

macro_rules! impl_real_field {
    ($t:ident, $precision:expr, $epsilon:expr) => {
        impl RealField for $t {
            const MAX: Self = <$t>::MAX;
            const MIN: Self = <$t>::MIN;
            const MIN_POSITIVE: Self = <$t>::MIN_POSITIVE;
            const EPSILON: Self = $epsilon;
            const PI: Self = core::$t::consts::PI;
            const FRAC_PI_2: Self = core::$t::consts::FRAC_PI_2;
            const TAU: Self = core::$t::consts::TAU;
            const BITS: u32 = (core::mem::size_of::<$t>() * 8) as u32;
            const PRECISION: Precision = $precision;

            #[inline]
            fn r_sqrt(self) -> Self {
                <$t>::sqrt(self)
            }
            #[inline]
            fn r_abs(self) -> Self {
                <$t>::abs(self)
            }
            #[inline]
            fn r_sin(self) -> Self {
                <$t>::sin(self)
            }
            #[inline]
            fn r_cos(self) -> Self {
                <$t>::cos(self)
            }
            #[inline]
            fn r_exp(self) -> Self {
                <$t>::exp(self)
            }
            #[inline]
            fn r_pow(self, exp: Self) -> Self {
                <$t>::powf(self, exp)
            }
            #[inline]
            fn r_mod(self, divisor: Self) -> Self {
                self % divisor
            }
        }
    };
}

impl_real_field!(f32, Precision::Single, 1e-5);
impl_real_field!(f64, Precision::Double, 1e-10);
