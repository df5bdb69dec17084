use super::{fold, Oscillator};
use crate::{check_sample_rate, math, Error};

/// Sine oscillator: a centered phase accumulator folded into a triangle and
/// shaped through [`math::sin_pi`].
///
/// Feeding the polynomial a triangle instead of the raw phase ramp is
/// load-bearing, not cosmetic: the fit's residual error then bends smoothly
/// with the wave rather than creasing at the wrap point, which keeps the
/// error's harmonics low. The shaped sample is held in a one-stage pipeline register,
/// so every [`tick`](Oscillator::tick) returns the sample computed by the
/// previous call: exactly one sample of latency against the phase state.
#[derive(Debug, Clone, PartialEq)]
pub struct Sine {
    sample_rate: f32,
    /// Target frequency in Hz, stored verbatim and read once per tick.
    frequency: f32,
    /// Phase in cycles, centered in `[-0.5, 0.5]`.
    phase: f32,
    /// Per-tick phase step, recomputed and clamped to `[-0.5, 0.5]` each tick.
    increment: f32,
    /// The pipeline register: sample computed this tick, returned next tick.
    delayed: f32,
}

impl Sine {
    /// Create a silent oscillator (frequency and phase zero) at the given
    /// sample rate.
    pub fn new(sample_rate: f32) -> Result<Self, Error> {
        Ok(Self {
            sample_rate: check_sample_rate(sample_rate)?,
            frequency: 0.0,
            phase: 0.0,
            increment: 0.0,
            delayed: 0.0,
        })
    }
}

impl Oscillator for Sine {
    fn tick(&mut self) -> f32 {
        // Refresh the increment from the latest frequency. No slew: a
        // frequency change lands in full on this tick. The clamp caps the
        // step at half a cycle, which both stops energy past Nyquist and
        // guarantees the single-step wrap below is sufficient.
        self.increment = (self.frequency / self.sample_rate).clamp(-0.5, 0.5);

        let out = self.delayed;
        self.delayed = math::sin_pi(fold(self.phase));

        self.phase -= self.increment;
        if self.phase.abs() > 0.5 {
            // The increment bound means the overshoot is at most one width.
            self.phase -= self.phase.signum();
        }

        out
    }

    /// Store the frequency verbatim; the clamp in `tick` bounds its effect.
    ///
    /// An infinite frequency clamps to a half-cycle step. A NaN frequency
    /// survives the clamp and poisons the phase accumulator; keeping NaNs out
    /// is the caller's job, this real-time path does not check for them.
    fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
    }

    /// Map an external `0..1` cycle fraction onto the centered accumulator:
    /// shift by half a cycle, then wrap to the nearest-integer residue.
    ///
    /// The half-cycle shift re-centers "phase 0 = start of cycle" onto the
    /// triangle driver's zero-crossing reference. `f32::round` ties away from
    /// zero, so `set_phase(0.0)` lands on +0.5 rather than -0.5; the two fold
    /// identically.
    fn set_phase(&mut self, phase: f32) {
        let p = phase - 0.5;
        self.phase = p - p.round();
    }
}
