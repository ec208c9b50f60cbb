//! Numeric precision layer of the Cyclone physics core.
//!
//! Every quantity in the simulation is a [`Real`], and every math routine the core
//! needs is reached through the `r_*` functions, [`REAL_MAX`] and [`R_PI`]. The width
//! behind them is chosen once per build through Cargo features:
//!
//! ```sh
//! $> cargo build                                        # single precision (default)
//! $> cargo build --features f64                         # double precision
//! ```
//!
//! `f32` forces single precision explicitly. Enabling `f32` and `f64` together is
//! rejected at compile time.

#![forbid(unsafe_code)]

#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "Features 'f32' and 'f64' are mutually exclusive: enable 'f64' for double precision, \
     or 'f32' (or neither) for single precision"
);

#[cfg(not(all(feature = "f32", feature = "f64")))]
pub mod errors;
#[cfg(not(all(feature = "f32", feature = "f64")))]
pub mod float_types;
#[cfg(not(all(feature = "f32", feature = "f64")))]
pub mod precision;
#[cfg(not(all(feature = "f32", feature = "f64")))]
pub mod traits;

#[cfg(not(all(feature = "f32", feature = "f64")))]
pub use crate::{
    errors::PrecisionError,
    float_types::{
        DOUBLE_PRECISION, EPSILON, FRAC_PI_2, PRECISION, R_PI, REAL_MAX, REAL_MIN,
        REAL_MIN_POSITIVE, Real, Real32, Real64, SINGLE_PRECISION, TAU, r_abs, r_cos, r_exp,
        r_mod, r_pow, r_sin, r_sqrt,
    },
    precision::Precision,
    traits::RealField,
};
