//! Per-sample oscillators built around a phase accumulator that counts in units of
//! one cycle, kept centered in `[-0.5, 0.5]`.
//!
//! The flagship waveform is [`osc::sine::Sine`], which folds the phase into a
//! triangle and shapes that through an odd polynomial ([`math::sin_pi`]) instead of
//! calling `sin` per sample. Every oscillator produces one sample per
//! [`osc::Oscillator::tick`] call and is meant to live on the audio thread:
//! past construction, nothing locks, allocates, or fails.

pub mod math;
pub mod osc;

use std::fmt;

/// Error returned when an oscillator cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// The sample rate was zero, negative, or not finite.
    InvalidSampleRate(f32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSampleRate(rate) => {
                write!(f, "invalid sample rate: {} (must be finite and > 0)", rate)
            }
        }
    }
}

impl std::error::Error for Error {}

pub(crate) fn check_sample_rate(sample_rate: f32) -> Result<f32, Error> {
    if sample_rate.is_finite() && sample_rate > 0.0 {
        Ok(sample_rate)
    } else {
        Err(Error::InvalidSampleRate(sample_rate))
    }
}
