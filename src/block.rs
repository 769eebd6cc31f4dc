//! Sample-by-sample Goertzel detection over fixed-length blocks.

use crate::filter::GoertzelFilter;
use crate::goertzel::{self, GoertzelError};
use crate::num::Float;

/// Level of the target frequency over one completed block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading<T: Float> {
    /// Linear power, normalized by the block length.
    pub power: T,
    /// `power` in dBm.
    pub dbm: T,
}

/// Feeds a filter one sample at a time and reports a [`Reading`] every
/// `block_len` samples.
///
/// After each completed block the inner filter is reset, so consecutive
/// readings cover disjoint windows.
///
/// # Examples
/// ```
/// use goertzel::BlockDetector;
/// let mut det = BlockDetector::new(1000.0f64, 8000.0, 8).unwrap();
/// let mut readings = Vec::new();
/// for i in 0..16 {
///     let x = (2.0 * core::f64::consts::PI * 1000.0 * i as f64 / 8000.0).sin();
///     if let Some(r) = det.push(x) {
///         readings.push(r);
///     }
/// }
/// assert_eq!(readings.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct BlockDetector<T: Float> {
    filter: GoertzelFilter<T>,
    block_len: usize,
}

impl<T: Float> BlockDetector<T> {
    /// # Errors
    /// Returns [`GoertzelError::EmptyInput`] if `block_len` is zero, or the
    /// configuration errors of [`GoertzelFilter::new`].
    pub fn new(frequency: T, sample_rate: T, block_len: usize) -> Result<Self, GoertzelError> {
        let filter = GoertzelFilter::new(frequency, sample_rate)?;
        Self::from_filter(filter, block_len)
    }

    /// Wrap an existing filter. The filter is reset so the first block
    /// starts clean.
    pub fn from_filter(mut filter: GoertzelFilter<T>, block_len: usize) -> Result<Self, GoertzelError> {
        if block_len == 0 {
            return Err(GoertzelError::EmptyInput);
        }
        filter.reset();
        Ok(Self { filter, block_len })
    }

    /// Feed one sample; returns the reading when it completes a block.
    pub fn push(&mut self, sample: T) -> Option<Reading<T>> {
        self.filter.push(sample);
        if self.filter.samples() < self.block_len {
            return None;
        }
        let power = self.filter.power_over(self.block_len);
        let reading = Reading {
            power,
            dbm: goertzel::dbm(power),
        };
        #[cfg(feature = "verbose-logging")]
        log::trace!(
            "Goertzel block f={} n={} dBm={}",
            self.filter.frequency(),
            self.block_len,
            reading.dbm
        );
        self.filter.reset();
        Some(reading)
    }

    /// Feed a slice, returning the reading of the last block it completed.
    pub fn push_slice(&mut self, samples: &[T]) -> Option<Reading<T>> {
        samples.iter().fold(None, |last, &x| self.push(x).or(last))
    }

    /// Drop any partially accumulated block.
    pub fn reset(&mut self) {
        self.filter.reset();
    }

    pub fn block_len(&self) -> usize {
        self.block_len
    }

    /// Samples accumulated in the current, incomplete block.
    pub fn pending(&self) -> usize {
        self.filter.samples()
    }

    pub fn filter(&self) -> &GoertzelFilter<T> {
        &self.filter
    }
}
