use libm::{cos, cosf, log10, log10f};

// Minimal float trait for generic Goertzel filters (no_std, libm only)
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + core::fmt::Debug
    + core::fmt::Display
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    /// Convert a constant into the floating-point type, rounding if needed.
    fn from_f64(x: f64) -> Self;
    /// Convert a sample count into the floating-point type.
    ///
    /// Counts above the exactly representable range are rounded.
    fn from_usize(x: usize) -> Self;
    fn cos(self) -> Self;
    fn log10(self) -> Self;
    fn pi() -> Self;
    fn is_finite(self) -> bool;
    fn is_nan(self) -> bool;
}

impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    fn from_usize(x: usize) -> Self {
        x as f32
    }
    fn cos(self) -> Self {
        cosf(self)
    }
    fn log10(self) -> Self {
        log10f(self)
    }
    fn pi() -> Self {
        core::f32::consts::PI
    }
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
}

impl Float for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f64(x: f64) -> Self {
        x
    }
    fn from_usize(x: usize) -> Self {
        x as f64
    }
    fn cos(self) -> Self {
        cos(self)
    }
    fn log10(self) -> Self {
        log10(self)
    }
    fn pi() -> Self {
        core::f64::consts::PI
    }
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
}
