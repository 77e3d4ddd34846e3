//! Unary and binary elementwise maps over sample buffers.
//!
//! One-call-per-sample wrappers around the libm transcendentals, all
//! obeying the crate-wide truncation contract. Domain errors (log of a
//! negative, asin outside [-1, 1]) propagate NaN per IEEE 754 rather
//! than signaling.

use crate::Sample;
use libm::{
    acosf, asinf, atan2f, atanf, ceilf, cosf, expf, fabsf, floorf, logf, powf, roundf, sinf,
    sqrtf, tanf,
};

/// `dst[i] = |x[i]|`
#[inline]
pub fn abs(dst: &mut [Sample], x: &[Sample]) {
    for (d, &a) in dst.iter_mut().zip(x) {
        *d = fabsf(a);
    }
}

/// `dst[i] = sin(x[i])`
#[inline]
pub fn sin(dst: &mut [Sample], x: &[Sample]) {
    for (d, &a) in dst.iter_mut().zip(x) {
        *d = sinf(a);
    }
}

/// `dst[i] = cos(x[i])`
#[inline]
pub fn cos(dst: &mut [Sample], x: &[Sample]) {
    for (d, &a) in dst.iter_mut().zip(x) {
        *d = cosf(a);
    }
}

/// `dst[i] = tan(x[i])`
#[inline]
pub fn tan(dst: &mut [Sample], x: &[Sample]) {
    for (d, &a) in dst.iter_mut().zip(x) {
        *d = tanf(a);
    }
}

/// `dst[i] = asin(x[i])`
#[inline]
pub fn asin(dst: &mut [Sample], x: &[Sample]) {
    for (d, &a) in dst.iter_mut().zip(x) {
        *d = asinf(a);
    }
}

/// `dst[i] = acos(x[i])`
#[inline]
pub fn acos(dst: &mut [Sample], x: &[Sample]) {
    for (d, &a) in dst.iter_mut().zip(x) {
        *d = acosf(a);
    }
}

/// `dst[i] = atan(x[i])`
#[inline]
pub fn atan(dst: &mut [Sample], x: &[Sample]) {
    for (d, &a) in dst.iter_mut().zip(x) {
        *d = atanf(a);
    }
}

/// `dst[i] = atan2(y[i], x[i])` - four-quadrant arctangent.
#[inline]
pub fn atan2(dst: &mut [Sample], y: &[Sample], x: &[Sample]) {
    for (d, (&b, &a)) in dst.iter_mut().zip(y.iter().zip(x)) {
        *d = atan2f(b, a);
    }
}

/// `dst[i] = ceil(x[i])`
#[inline]
pub fn ceil(dst: &mut [Sample], x: &[Sample]) {
    for (d, &a) in dst.iter_mut().zip(x) {
        *d = ceilf(a);
    }
}

/// `dst[i] = floor(x[i])`
#[inline]
pub fn floor(dst: &mut [Sample], x: &[Sample]) {
    for (d, &a) in dst.iter_mut().zip(x) {
        *d = floorf(a);
    }
}

/// `dst[i] = round(x[i])` - half-away-from-zero rounding.
#[inline]
pub fn round(dst: &mut [Sample], x: &[Sample]) {
    for (d, &a) in dst.iter_mut().zip(x) {
        *d = roundf(a);
    }
}

/// `dst[i] = e^x[i]`
#[inline]
pub fn exp(dst: &mut [Sample], x: &[Sample]) {
    for (d, &a) in dst.iter_mut().zip(x) {
        *d = expf(a);
    }
}

/// `dst[i] = ln(x[i])` - natural log; negative input yields NaN.
#[inline]
pub fn log(dst: &mut [Sample], x: &[Sample]) {
    for (d, &a) in dst.iter_mut().zip(x) {
        *d = logf(a);
    }
}

/// `dst[i] = sqrt(x[i])` - negative input yields NaN.
#[inline]
pub fn sqrt(dst: &mut [Sample], x: &[Sample]) {
    for (d, &a) in dst.iter_mut().zip(x) {
        *d = sqrtf(a);
    }
}

/// `dst[i] = x[i] ^ y`
#[inline]
pub fn pow_scalar(dst: &mut [Sample], x: &[Sample], y: Sample) {
    for (d, &a) in dst.iter_mut().zip(x) {
        *d = powf(a, y);
    }
}

/// `dst[i] = x[i] ^ y[i]`
#[inline]
pub fn pow(dst: &mut [Sample], x: &[Sample], y: &[Sample]) {
    for (d, (&a, &b)) in dst.iter_mut().zip(x.iter().zip(y)) {
        *d = powf(a, b);
    }
}

/// `dst[i] = x[i] - floor(x[i])` - fractional part, in `[0, 1)` for finite input.
#[inline]
pub fn fract(dst: &mut [Sample], x: &[Sample]) {
    for (d, &a) in dst.iter_mut().zip(x) {
        *d = a - floorf(a);
    }
}

/// `dst[i] = x[i]` saturated into `[x_min, x_max]`.
#[inline]
pub fn clamp(dst: &mut [Sample], x: &[Sample], x_min: Sample, x_max: Sample) {
    for (d, &a) in dst.iter_mut().zip(x) {
        *d = a.clamp(x_min, x_max);
    }
}

/// `dst[i] = ±1.0` by the sign of `x[i]`, including the sign of zero.
///
/// Zero is resolved through its reciprocal: `1.0 / +0.0` is `+∞` and
/// `1.0 / -0.0` is `-∞`, which recovers the IEEE sign bit without a
/// dedicated bit test. `+0.0` maps to `1.0` and `-0.0` to `-1.0`;
/// NaN falls through to `-1.0`.
#[inline]
pub fn sign(dst: &mut [Sample], x: &[Sample]) {
    for (d, &a) in dst.iter_mut().zip(x) {
        *d = if a > 0.0 {
            1.0
        } else if a < 0.0 {
            -1.0
        } else if 1.0 / a == Sample::INFINITY {
            1.0
        } else {
            -1.0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f32 = 1e-6;

    #[test]
    fn trig_at_known_angles() {
        let x = [0.0, core::f32::consts::FRAC_PI_2, core::f32::consts::PI];
        let mut dst = [0.0; 3];

        sin(&mut dst, &x);
        assert!((dst[0] - 0.0).abs() < TOL);
        assert!((dst[1] - 1.0).abs() < TOL);

        cos(&mut dst, &x);
        assert!((dst[0] - 1.0).abs() < TOL);
        assert!((dst[2] + 1.0).abs() < TOL);
    }

    #[test]
    fn atan2_quadrants() {
        let mut dst = [0.0; 2];
        atan2(&mut dst, &[1.0, -1.0], &[1.0, -1.0]);
        assert!((dst[0] - core::f32::consts::FRAC_PI_4).abs() < TOL);
        assert!((dst[1] + 3.0 * core::f32::consts::FRAC_PI_4).abs() < TOL);
    }

    #[test]
    fn rounding_family() {
        let x = [1.2, -1.2, 2.5, -2.5];
        let mut dst = [0.0; 4];

        floor(&mut dst, &x);
        assert_eq!(dst, [1.0, -2.0, 2.0, -3.0]);

        ceil(&mut dst, &x);
        assert_eq!(dst, [2.0, -1.0, 3.0, -2.0]);

        round(&mut dst, &x);
        assert_eq!(dst, [1.0, -1.0, 3.0, -3.0], "round halves away from zero");

        fract(&mut dst, &x);
        assert!((dst[0] - 0.2).abs() < TOL);
        assert!((dst[1] - 0.8).abs() < TOL, "fract(-1.2) = 0.8, got {}", dst[1]);
    }

    #[test]
    fn exp_log_inverse() {
        let x = [0.25, 1.0, 4.0, 100.0];
        let mut logs = [0.0; 4];
        let mut back = [0.0; 4];
        log(&mut logs, &x);
        exp(&mut back, &logs);
        for i in 0..4 {
            assert!((back[i] - x[i]).abs() / x[i] < 1e-5, "exp(log({}))={}", x[i], back[i]);
        }
    }

    #[test]
    fn domain_errors_propagate_nan() {
        let mut dst = [0.0; 2];
        log(&mut dst, &[-1.0, -0.5]);
        assert!(dst[0].is_nan());

        sqrt(&mut dst, &[-4.0, -1.0]);
        assert!(dst[0].is_nan());

        asin(&mut dst, &[2.0, -2.0]);
        assert!(dst[0].is_nan());
        assert!(dst[1].is_nan());
    }

    #[test]
    fn pow_forms() {
        let mut dst = [0.0; 3];
        pow_scalar(&mut dst, &[2.0, 3.0, 4.0], 2.0);
        assert_eq!(dst, [4.0, 9.0, 16.0]);

        pow(&mut dst, &[2.0, 2.0, 9.0], &[0.0, 10.0, 0.5]);
        assert_eq!(dst, [1.0, 1024.0, 3.0]);
    }

    #[test]
    fn clamp_saturates_both_ends() {
        let mut dst = [0.0; 4];
        clamp(&mut dst, &[-2.0, -0.5, 0.5, 2.0], -1.0, 1.0);
        assert_eq!(dst, [-1.0, -0.5, 0.5, 1.0]);
    }

    #[test]
    fn sign_distinguishes_signed_zero() {
        let x = [3.0, -3.0, 0.0, -0.0, f32::INFINITY, f32::NEG_INFINITY];
        let mut dst = [0.0; 6];
        sign(&mut dst, &x);
        assert_eq!(dst, [1.0, -1.0, 1.0, -1.0, 1.0, -1.0]);
    }

    #[test]
    fn maps_truncate_like_everything_else() {
        let mut dst = [7.0; 3];
        abs(&mut dst, &[-1.0, -2.0]);
        assert_eq!(dst, [1.0, 2.0, 7.0]);
    }
}
