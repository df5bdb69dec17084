//! Polynomial stand-ins for libm calls on the per-sample path.

/// Approximate `sin(pi * x)` for `x` in `[-0.5, 0.5]` with a 7th-order odd
/// polynomial (minimax fit, max error below f32 resolution).
///
/// Half a unit of input covers a quarter period, so the endpoints map to the
/// sine's peaks: `sin_pi(0.5)` is as close to `1.0` as the fit allows. Odd
/// symmetry is exact, since the sign of `x` factors out of the polynomial.
/// Outside `[-0.5, 0.5]` the polynomial diverges from the sine; callers keep
/// the input folded into range.
#[inline]
pub fn sin_pi(x: f32) -> f32 {
    const A1: f32 = 3.141_582;
    const A3: f32 = -5.167_143_3;
    const A5: f32 = 2.541_903_4;
    const A7: f32 = -0.554_647_2;

    let x2 = x * x;
    x * (A1 + x2 * (A3 + x2 * (A5 + x2 * A7)))
}
