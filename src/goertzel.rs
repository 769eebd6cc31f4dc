//! Goertzel algorithm: single-bin power detector
//! no_std compatible
//!
//! The recursion is the second-order IIR filter
//! ```text
//! v[n] = x[n] + k * v[n-1] - v[n-2],    k = 2 * cos(2π f / fs)
//! ```
//! and the power of the target bin after `n` samples is
//! ```text
//! (v1² + v2² - k * v1 * v2) / n²
//! ```
//! where `v1`, `v2` are the last two values of the recursion.

use crate::num::Float;

/// Floor applied to the raw (un-normalized) power.
///
/// Floating-point cancellation can make the raw power of a silent or
/// rejected input zero or slightly negative. Clamping to this value keeps
/// the result positive so [`dbm`] is always defined.
pub const EPSILON: f64 = 1e-9;

/// Reference impedance in ohms used by [`dbm`].
pub const REFERENCE_IMPEDANCE: f64 = 600.0;

/// Errors reported by Goertzel construction and one-shot detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoertzelError {
    /// No samples were supplied or accumulated.
    EmptyInput,
    /// The sample rate was non-positive or non-finite.
    InvalidSampleRate,
    /// The target frequency was non-positive or non-finite.
    InvalidFrequency,
    /// The target frequency was not strictly below half the sample rate.
    AboveNyquist,
}

impl core::fmt::Display for GoertzelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GoertzelError::EmptyInput => write!(f, "no samples to measure"),
            GoertzelError::InvalidSampleRate => {
                write!(f, "sample rate must be finite and positive")
            }
            GoertzelError::InvalidFrequency => {
                write!(f, "target frequency must be finite and positive")
            }
            GoertzelError::AboveNyquist => {
                write!(f, "target frequency must be below half the sample rate")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GoertzelError {}

/// The last two values of the Goertzel recursion.
///
/// `v1` is the most recent intermediate result, `v2` the one before it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vn<T: Float> {
    pub v1: T,
    pub v2: T,
}

impl<T: Float> Vn<T> {
    /// Recursion state before any sample has been processed.
    pub fn zero() -> Self {
        Self {
            v1: T::zero(),
            v2: T::zero(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.v1 == T::zero() && self.v2 == T::zero()
    }
}

impl<T: Float> Default for Vn<T> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Goertzel coefficient `2 * cos(2π * frequency / sample_rate)`.
///
/// The caller must keep `0 < frequency < sample_rate / 2`; use
/// [`FilterConfig::new`](crate::filter::FilterConfig::new) to have that
/// checked. The result always lies in `[-2, 2]`.
#[inline]
pub fn coefficient<T: Float>(frequency: T, sample_rate: T) -> T {
    let two = T::from_f64(2.0);
    two * (two * T::pi() * frequency / sample_rate).cos()
}

/// Advance the recursion by one sample.
#[inline(always)]
pub fn kernel_step<T: Float>(sample: T, k: T, vn: Vn<T>) -> Vn<T> {
    Vn {
        v1: k * vn.v1 - vn.v2 + sample,
        v2: vn.v1,
    }
}

/// Fold every sample of `samples`, in order, through [`kernel_step`].
pub fn kernel<T: Float>(samples: &[T], k: T, vn: Vn<T>) -> Vn<T> {
    samples
        .iter()
        .fold(vn, |state, &x| kernel_step(x, k, state))
}

/// Power of the signal that produced `vn`, normalized by the `n` samples
/// that went into it.
///
/// # Panics
/// Panics if `n` is zero: an empty window has no defined power.
pub fn power<T: Float>(k: T, vn: Vn<T>, n: usize) -> T {
    assert!(n > 0, "Goertzel power needs at least one sample");
    let floor = T::from_f64(EPSILON);
    let mut raw = vn.v1 * vn.v1 + vn.v2 * vn.v2 - k * vn.v1 * vn.v2;
    if raw.is_nan() || raw < floor {
        raw = floor;
    }
    let n = T::from_usize(n);
    raw / (n * n)
}

/// Convert a power reading into dBm, referenced to 1 mW across 600 Ω.
///
/// Only defined for `power > 0`, which [`power`] always satisfies.
pub fn dbm<T: Float>(power: T) -> T {
    let ratio =
        T::from_f64(2.0) * power * T::from_f64(1000.0) / T::from_f64(REFERENCE_IMPEDANCE);
    T::from_f64(10.0) * ratio.log10()
}

/// Power of `frequency` in `samples`, computed in one pass from a zero state.
///
/// # Errors
/// Returns [`GoertzelError::EmptyInput`] for an empty slice, and the
/// configuration errors of
/// [`FilterConfig::new`](crate::filter::FilterConfig::new) for an invalid
/// `frequency`/`sample_rate` pair.
///
/// # Examples
/// ```
/// use goertzel::goertzel::detect;
/// let tone: Vec<f64> = (0..8)
///     .map(|i| (2.0 * core::f64::consts::PI * 1000.0 * i as f64 / 8000.0).sin())
///     .collect();
/// let p = detect(&tone, 1000.0, 8000.0).unwrap();
/// assert!((p - 0.25).abs() < 1e-9);
/// ```
pub fn detect<T: Float>(samples: &[T], frequency: T, sample_rate: T) -> Result<T, GoertzelError> {
    let config = crate::filter::FilterConfig::new(frequency, sample_rate)?;
    if samples.is_empty() {
        return Err(GoertzelError::EmptyInput);
    }
    let k = config.coefficient();
    Ok(power(k, kernel(samples, k, Vn::zero()), samples.len()))
}

/// Like [`detect`], but returns the level in dBm.
pub fn detect_dbm<T: Float>(
    samples: &[T],
    frequency: T,
    sample_rate: T,
) -> Result<T, GoertzelError> {
    detect(samples, frequency, sample_rate).map(dbm)
}


#[cfg(all(feature = "internal-tests", test))]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;
    use std::vec::Vec;

    proptest! {
        #[test]
        fn prop_coefficient_in_range(sample_rate in 1.0f64..192_000.0, frac in 0.0001f64..0.4999) {
            let k = coefficient(sample_rate * frac, sample_rate);
            prop_assert!((-2.0..=2.0).contains(&k));
        }

        #[test]
        fn prop_dbm_monotonic(a in 1e-12f64..1e6, b in 1e-12f64..1e6) {
            prop_assume!(a < b);
            prop_assert!(dbm(a) < dbm(b));
        }

        #[test]
        fn prop_power_never_below_floor(ref signal in proptest::collection::vec(-10.0f64..10.0, 1..256)) {
            let k = coefficient(1209.0, 8000.0);
            let n = signal.len();
            let p = power(k, kernel(signal, k, Vn::zero()), n);
            let floor = EPSILON / (n * n) as f64;
            prop_assert!(p >= floor);
            prop_assert!(dbm(p).is_finite());
        }

        #[test]
        fn prop_split_kernel_matches_whole(ref signal in proptest::collection::vec(-1.0f64..1.0, 2..128), cut in 0usize..128) {
            let cut = cut % signal.len();
            let k = coefficient(941.0, 8000.0);
            let whole = kernel(signal, k, Vn::zero());
            let (head, tail) = signal.split_at(cut);
            let split = kernel(tail, k, kernel(head, k, Vn::zero()));
            prop_assert_eq!(whole, split);
        }
    }

    #[test]
    fn random_noise_is_weaker_than_tone() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};
        let mut rng = StdRng::seed_from_u64(42);
        let n = 400;
        let noise: Vec<f64> = (0..n).map(|_| rng.gen_range(-0.1..0.1)).collect();
        let tone: Vec<f64> = (0..n)
            .map(|i| (2.0 * core::f64::consts::PI * 1000.0 * i as f64 / 8000.0).sin())
            .collect();
        let noisy = detect(&noise, 1000.0, 8000.0).unwrap();
        let clean = detect(&tone, 1000.0, 8000.0).unwrap();
        assert!(clean > 100.0 * noisy);
    }
}
