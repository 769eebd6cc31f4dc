//! Stateful Goertzel filter tracking one frequency across many sample blocks.

use crate::goertzel::{self, GoertzelError, Vn};
use crate::num::Float;

/// Validated target frequency and sample rate of a filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterConfig<T: Float> {
    frequency: T,
    sample_rate: T,
}

impl<T: Float> FilterConfig<T> {
    /// Check `0 < frequency < sample_rate / 2` and build the configuration.
    ///
    /// # Errors
    /// * [`GoertzelError::InvalidSampleRate`] if `sample_rate` is not finite and positive.
    /// * [`GoertzelError::InvalidFrequency`] if `frequency` is not finite and positive.
    /// * [`GoertzelError::AboveNyquist`] if `frequency >= sample_rate / 2`.
    pub fn new(frequency: T, sample_rate: T) -> Result<Self, GoertzelError> {
        let err = if !sample_rate.is_finite() || sample_rate <= T::zero() {
            Some(GoertzelError::InvalidSampleRate)
        } else if !frequency.is_finite() || frequency <= T::zero() {
            Some(GoertzelError::InvalidFrequency)
        } else if frequency >= sample_rate / T::from_f64(2.0) {
            Some(GoertzelError::AboveNyquist)
        } else {
            None
        };
        if let Some(err) = err {
            #[cfg(feature = "verbose-logging")]
            log::debug!(
                "rejected Goertzel config f={} fs={}: {}",
                frequency,
                sample_rate,
                err
            );
            return Err(err);
        }
        Ok(Self {
            frequency,
            sample_rate,
        })
    }

    pub fn frequency(&self) -> T {
        self.frequency
    }

    pub fn sample_rate(&self) -> T {
        self.sample_rate
    }

    /// Goertzel coefficient for this configuration.
    pub fn coefficient(&self) -> T {
        goertzel::coefficient(self.frequency, self.sample_rate)
    }
}

/// A Goertzel filter for a single target frequency.
///
/// The filter keeps the recursion state and the number of samples fed since
/// construction or the last [`reset`](Self::reset), so [`process`](Self::process)
/// always reports the power of the whole window seen so far. Use
/// [`power_over`](Self::power_over) to normalize by a different count.
///
/// # Examples
/// ```
/// use goertzel::GoertzelFilter;
/// let mut filter = GoertzelFilter::new(1000.0f64, 8000.0).unwrap();
/// let tone: Vec<f64> = (0..8)
///     .map(|i| (2.0 * core::f64::consts::PI * 1000.0 * i as f64 / 8000.0).sin())
///     .collect();
/// let power = filter.process(&tone).unwrap();
/// assert!((power - 0.25).abs() < 1e-9);
/// filter.reset();
/// assert!(filter.is_fresh());
/// ```
#[derive(Debug, Clone)]
pub struct GoertzelFilter<T: Float> {
    config: FilterConfig<T>,
    k: T,
    vn: Vn<T>,
    samples: usize,
}

impl<T: Float> GoertzelFilter<T> {
    /// Create a filter for `frequency` on a stream sampled at `sample_rate` (both in Hz).
    ///
    /// # Errors
    /// Propagates the configuration errors of [`FilterConfig::new`].
    pub fn new(frequency: T, sample_rate: T) -> Result<Self, GoertzelError> {
        FilterConfig::new(frequency, sample_rate).map(Self::from_config)
    }

    pub fn from_config(config: FilterConfig<T>) -> Self {
        let k = config.coefficient();
        #[cfg(feature = "verbose-logging")]
        log::debug!(
            "Goertzel filter f={} fs={} k={}",
            config.frequency(),
            config.sample_rate(),
            k
        );
        Self {
            config,
            k,
            vn: Vn::zero(),
            samples: 0,
        }
    }

    /// Start a new measurement window. Configuration is kept.
    pub fn reset(&mut self) {
        #[cfg(feature = "verbose-logging")]
        log::trace!(
            "reset Goertzel filter f={} after {} samples",
            self.config.frequency(),
            self.samples
        );
        self.vn = Vn::zero();
        self.samples = 0;
    }

    /// Run `samples` through the filter without computing the power.
    pub fn feed(&mut self, samples: &[T]) {
        self.vn = goertzel::kernel(samples, self.k, self.vn);
        self.samples += samples.len();
    }

    /// Run a single sample through the filter.
    #[inline]
    pub fn push(&mut self, sample: T) {
        self.vn = goertzel::kernel_step(sample, self.k, self.vn);
        self.samples += 1;
    }

    /// Run `samples` through the filter and return the power of everything
    /// fed since the last reset.
    ///
    /// # Errors
    /// Returns [`GoertzelError::EmptyInput`] if no sample has been fed since
    /// the last reset, including this call.
    pub fn process(&mut self, samples: &[T]) -> Result<T, GoertzelError> {
        self.feed(samples);
        self.power()
    }

    /// Power of everything fed since the last reset.
    ///
    /// # Errors
    /// Returns [`GoertzelError::EmptyInput`] on a fresh filter.
    pub fn power(&self) -> Result<T, GoertzelError> {
        if self.samples == 0 {
            return Err(GoertzelError::EmptyInput);
        }
        Ok(goertzel::power(self.k, self.vn, self.samples))
    }

    /// Power of the current state normalized by a caller-supplied count `n`.
    ///
    /// # Panics
    /// Panics if `n` is zero.
    pub fn power_over(&self, n: usize) -> T {
        goertzel::power(self.k, self.vn, n)
    }

    /// [`power`](Self::power) expressed in dBm.
    pub fn dbm(&self) -> Result<T, GoertzelError> {
        self.power().map(goertzel::dbm)
    }

    pub fn config(&self) -> FilterConfig<T> {
        self.config
    }

    pub fn frequency(&self) -> T {
        self.config.frequency()
    }

    pub fn sample_rate(&self) -> T {
        self.config.sample_rate()
    }

    pub fn coefficient(&self) -> T {
        self.k
    }

    /// Current recursion state.
    pub fn state(&self) -> Vn<T> {
        self.vn
    }

    /// Number of samples fed since construction or the last reset.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// `true` until the first sample after construction or a reset.
    pub fn is_fresh(&self) -> bool {
        self.samples == 0
    }
}
