use super::{fold, Oscillator};
use crate::{check_sample_rate, Error};

/// Triangle oscillator: the sine's driving waveform on its own, scaled to
/// `[-1, 1]`.
///
/// Shares the [`Sine`](super::sine::Sine) phase conventions, from the centered
/// accumulator down to the external `0..1` phase mapping, but has no shaping
/// stage and therefore no pipeline register: each tick returns the sample for
/// the current phase.
#[derive(Debug, Clone)]
pub struct Triangle {
    sample_rate: f32,
    frequency: f32,
    /// Phase in cycles, centered in `[-0.5, 0.5]`.
    phase: f32,
    increment: f32,
}

impl Triangle {
    pub fn new(sample_rate: f32) -> Result<Self, Error> {
        Ok(Self {
            sample_rate: check_sample_rate(sample_rate)?,
            frequency: 0.0,
            phase: 0.0,
            increment: 0.0,
        })
    }
}

impl Oscillator for Triangle {
    fn tick(&mut self) -> f32 {
        self.increment = (self.frequency / self.sample_rate).clamp(-0.5, 0.5);

        let out = 2.0 * fold(self.phase);

        self.phase -= self.increment;
        if self.phase.abs() > 0.5 {
            self.phase -= self.phase.signum();
        }

        out
    }

    fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
    }

    fn set_phase(&mut self, phase: f32) {
        let p = phase - 0.5;
        self.phase = p - p.round();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rejects_bad_sample_rates() {
        assert!(Triangle::new(0.0).is_err());
        assert!(Triangle::new(f32::NEG_INFINITY).is_err());
        assert!(Triangle::new(44100.0).is_ok());
    }

    #[test]
    fn quarter_points_of_the_cycle() {
        let mut osc = Triangle::new(48000.0).unwrap();

        // Frequency is zero, so each tick samples the phase left by set_phase.
        for (external, expected) in [(0.0, 0.0), (0.25, -1.0), (0.5, 0.0), (0.75, 1.0)] {
            osc.set_phase(external);
            assert_eq!(osc.tick(), expected, "at external phase {}", external);
        }
    }

    #[test]
    fn ramps_linearly_between_peaks() {
        let mut osc = Triangle::new(48000.0).unwrap();
        osc.set_frequency(480.0); // 100 ticks per cycle
        osc.set_phase(0.75); // start at the peak

        // A full cycle from the peak: down for half the period, back up.
        let samples: Vec<f32> = (0..100).map(|_| osc.tick()).collect();
        let step = 4.0 * 480.0 / 48000.0;
        for (n, sample) in samples.iter().enumerate().take(50) {
            assert_abs_diff_eq!(*sample, 1.0 - n as f32 * step, epsilon = 1e-4);
        }
        for (n, sample) in samples.iter().enumerate().skip(50) {
            assert_abs_diff_eq!(*sample, -1.0 + (n - 50) as f32 * step, epsilon = 1e-4);
        }
    }

    #[test]
    fn phase_stays_bounded() {
        let mut osc = Triangle::new(48000.0).unwrap();
        osc.set_frequency(-30000.0);
        for _ in 0..500 {
            osc.tick();
            assert!(osc.phase.abs() <= 0.5);
        }
    }
}
