//! Complex-pair arithmetic over parallel (real, imag) buffers.
//!
//! A complex signal is not a distinct type here: it is a pair of
//! same-length sample buffers aligned by index, one holding real parts
//! and one holding imaginary parts. This is the layout FFT bins and
//! transfer functions naturally arrive in, and it keeps the kernels
//! allocation-free.
//!
//! The effective length of a call is the minimum length over **all**
//! participating buffers - both destination halves, both halves of each
//! operand - so a caller that lets a pair diverge in length gets the
//! shorter half processed and nothing else touched.
//!
//! Division multiplies by the conjugate over the squared magnitude. A
//! zero-magnitude divisor yields IEEE infinities/NaNs, not a guarded
//! error.

use crate::Sample;
use libm::sqrtf;

/// Complex multiply by a single scalar complex number.
///
/// `dst[i] = x[i] * (y_re + i*y_im)`, expanded as:
///
/// ```text
/// re' = x_re*y_re - x_im*y_im
/// im' = x_re*y_im + x_im*y_re
/// ```
#[inline]
pub fn mul_complex_scalar(
    dst_re: &mut [Sample],
    dst_im: &mut [Sample],
    x_re: &[Sample],
    x_im: &[Sample],
    y_re: Sample,
    y_im: Sample,
) {
    let n = dst_re
        .len()
        .min(dst_im.len())
        .min(x_re.len())
        .min(x_im.len());

    for i in 0..n {
        let (xr, xi) = (x_re[i], x_im[i]);
        dst_re[i] = xr * y_re - xi * y_im;
        dst_im[i] = xr * y_im + xi * y_re;
    }
}

/// Per-element complex multiply of two buffer pairs.
///
/// `dst[i] = x[i] * y[i]` with the standard expansion; effective length
/// is the minimum over all six buffers.
#[inline]
pub fn mul_complex(
    dst_re: &mut [Sample],
    dst_im: &mut [Sample],
    x_re: &[Sample],
    x_im: &[Sample],
    y_re: &[Sample],
    y_im: &[Sample],
) {
    let n = dst_re
        .len()
        .min(dst_im.len())
        .min(x_re.len())
        .min(x_im.len())
        .min(y_re.len())
        .min(y_im.len());

    for i in 0..n {
        let (xr, xi) = (x_re[i], x_im[i]);
        let (yr, yi) = (y_re[i], y_im[i]);
        dst_re[i] = xr * yr - xi * yi;
        dst_im[i] = xr * yi + xi * yr;
    }
}

/// Complex divide by a single scalar complex number.
///
/// Multiplies by the conjugate over the squared magnitude:
///
/// ```text
/// denom = y_re² + y_im²
/// re' = (x_re*y_re + x_im*y_im) / denom
/// im' = (x_im*y_re - x_re*y_im) / denom
/// ```
///
/// The divisor is constant, so `denom` is computed once per call.
#[inline]
pub fn div_complex_scalar(
    dst_re: &mut [Sample],
    dst_im: &mut [Sample],
    x_re: &[Sample],
    x_im: &[Sample],
    y_re: Sample,
    y_im: Sample,
) {
    let n = dst_re
        .len()
        .min(dst_im.len())
        .min(x_re.len())
        .min(x_im.len());

    let denom = y_re * y_re + y_im * y_im;

    for i in 0..n {
        let (xr, xi) = (x_re[i], x_im[i]);
        dst_re[i] = (xr * y_re + xi * y_im) / denom;
        dst_im[i] = (xi * y_re - xr * y_im) / denom;
    }
}

/// Per-element complex divide of two buffer pairs.
///
/// Same conjugate formulation as [`div_complex_scalar`], but the divisor
/// varies per sample, so the squared magnitude is computed per index.
#[inline]
pub fn div_complex(
    dst_re: &mut [Sample],
    dst_im: &mut [Sample],
    x_re: &[Sample],
    x_im: &[Sample],
    y_re: &[Sample],
    y_im: &[Sample],
) {
    let n = dst_re
        .len()
        .min(dst_im.len())
        .min(x_re.len())
        .min(x_im.len())
        .min(y_re.len())
        .min(y_im.len());

    for i in 0..n {
        let (xr, xi) = (x_re[i], x_im[i]);
        let (yr, yi) = (y_re[i], y_im[i]);
        let denom = yr * yr + yi * yi;
        dst_re[i] = (xr * yr + xi * yi) / denom;
        dst_im[i] = (xi * yr - xr * yi) / denom;
    }
}

/// Complex magnitude: `dst[i] = sqrt(x_re[i]² + x_im[i]²)`.
#[inline]
pub fn abs_complex(dst: &mut [Sample], x_re: &[Sample], x_im: &[Sample]) {
    for (d, (&re, &im)) in dst.iter_mut().zip(x_re.iter().zip(x_im)) {
        *d = sqrtf(re * re + im * im);
    }
}
