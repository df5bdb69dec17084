pub mod sine;
pub mod triangle;

/// A per-sample waveform generator.
///
/// Each instance owns its state outright; `&mut self` is the entire
/// synchronization story. One caller context ticks an instance at the audio
/// rate, and parameter setters must happen on that same context or be
/// externally synchronized. The sample path takes no locks and never
/// allocates.
pub trait Oscillator {
    /// Advance the oscillator by one sample and return a sample in `[-1, 1]`.
    fn tick(&mut self) -> f32;

    /// Set the target frequency, in the same unit per second as the sample
    /// rate (Hz against Hz). Takes effect on the next tick.
    fn set_frequency(&mut self, frequency: f32);

    /// Set the phase from a `0..1` fraction of one cycle. Takes effect on the
    /// next tick.
    fn set_phase(&mut self, phase: f32);
}

/// Fold a centered phase into a triangle over `[-0.5, 0.5]`, period 1.
///
/// The quarter-cycle offset lines the triangle's zero crossing up with phase 0,
/// so shaping the result through [`crate::math::sin_pi`] lands in proper sine
/// phase. The round-to-nearest wrap accepts any finite input, not just the
/// accumulator's centered range.
pub(crate) fn fold(phase: f32) -> f32 {
    let mut s = phase - 0.25;
    s -= s.round();
    s += s;
    0.5 - s.abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn fold_hits_the_triangle_corners() {
        assert_eq!(fold(0.0), 0.0);
        assert_eq!(fold(0.25), 0.5);
        assert_eq!(fold(-0.25), -0.5);
        assert_eq!(fold(0.125), 0.25);
        // Half a cycle apart folds to the negation.
        assert_eq!(fold(0.5), 0.0);
        assert_eq!(fold(-0.5), 0.0);
    }

    #[test]
    fn fold_is_periodic() {
        for i in -20..=20 {
            let p = i as f32 / 7.0;
            assert_abs_diff_eq!(fold(p), fold(p + 1.0), epsilon = 1e-6);
            assert_abs_diff_eq!(fold(p), fold(p - 2.0), epsilon = 1e-6);
        }
    }

    #[test]
    fn fold_stays_bounded() {
        for i in -1000..=1000 {
            let p = i as f32 / 617.0;
            assert!(fold(p).abs() <= 0.5);
        }
    }
}
