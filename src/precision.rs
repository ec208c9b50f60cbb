use crate::errors::PrecisionError;
use crate::float_types::PRECISION;
use core::fmt;
use core::str::FromStr;

/// The two floating point widths the core can be built at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// 32-bit `f32`, the default.
    Single,
    /// 64-bit `f64`.
    Double,
}

impl Precision {
    /// Precision of this build, same as [`PRECISION`].
    pub const fn active() -> Self {
        PRECISION
    }

    pub const fn bits(self) -> u32 {
        match self {
            Precision::Single => 32,
            Precision::Double => 64,
        }
    }

    pub const fn bytes(self) -> usize {
        self.bits() as usize / 8
    }

    /// Name of the Cargo feature that selects this precision.
    pub const fn feature_name(self) -> &'static str {
        match self {
            Precision::Single => "f32",
            Precision::Double => "f64",
        }
    }

    pub const fn is_active(self) -> bool {
        matches!(
            (self, PRECISION),
            (Precision::Single, Precision::Single) | (Precision::Double, Precision::Double)
        )
    }

    /// Checks that this build was compiled at `self` precision.
    pub fn expect_active(self) -> Result<(), PrecisionError> {
        log::debug!("checking requested {} precision against active {}", self, PRECISION);
        if self.is_active() {
            Ok(())
        } else {
            Err(PrecisionError::Mismatch {
                expected: self,
                active: PRECISION,
            })
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::Single => f.write_str("single"),
            Precision::Double => f.write_str("double"),
        }
    }
}

impl FromStr for Precision {
    type Err = PrecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "f32" | "narrow" | "float" => Ok(Precision::Single),
            "double" | "f64" | "wide" => Ok(Precision::Double),
            _ => Err(PrecisionError::UnknownPrecision(s.to_string())),
        }
    }
}
