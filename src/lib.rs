//! # goertzel - Single-bin tone power detection for Rust
//!
//! Measures the power of one known frequency in a stream of samples with the
//! Goertzel algorithm, a second-order recursive filter that evaluates a single
//! DFT bin in O(N) without a full FFT. Typical uses are DTMF decoding, pilot
//! tone detection and narrowband signal presence checks.
//!
//! ## Features
//!
//! - **Pure functions** for the coefficient, the recursion, power and dBm
//! - **Stateful filter** accumulating across sample blocks, with explicit reset
//! - **Block detector** reporting a level every N samples, one sample at a time
//! - **Generic** over `f32` and `f64`
//! - **no_std** with `libm` math
//!
//! ## Cargo Features
//!
//! - `std` (default): implement `std::error::Error` for [`GoertzelError`]
//! - `verbose-logging`: log filter construction, resets and block readings via `log`
//! - `internal-tests`: property tests backed by `proptest` and `rand`
//!
//! ## Examples
//!
//! ```
//! use goertzel::{dbm, GoertzelFilter};
//!
//! let mut filter = GoertzelFilter::new(1000.0f64, 8000.0).unwrap();
//! let tone: Vec<f64> = (0..80)
//!     .map(|i| (2.0 * core::f64::consts::PI * 1000.0 * i as f64 / 8000.0).sin())
//!     .collect();
//! let power = filter.process(&tone).unwrap();
//! assert!(dbm(power) > -1.0);
//! ```
//!
//! Run the demos with:
//! ```bash
//! cargo run --example goertzel
//! cargo run --example block_detector
//! cargo run --example verbose_logging --features verbose-logging
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#![no_std]
#[cfg(any(feature = "std", test))]
extern crate std;

/// Minimal float abstraction over `f32` and `f64`.
pub mod num;

/// Goertzel kernel
///
/// Coefficient, recursion, power and dBm as free functions.
pub mod goertzel;

/// Stateful single-frequency filter and its validated configuration.
pub mod filter;

/// Fixed-length block detection, fed one sample at a time.
pub mod block;

pub use block::{BlockDetector, Reading};
pub use filter::{FilterConfig, GoertzelFilter};
pub use goertzel::{
    coefficient, dbm, detect, detect_dbm, kernel, kernel_step, power, GoertzelError, Vn, EPSILON,
};
pub use num::Float;
