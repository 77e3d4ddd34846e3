//! Channel interleaving: pack planar channels into one strided buffer and back.
//!
//! An interleaved buffer stores N channels in one slice with a fixed
//! `stride` between consecutive samples of the same channel. Channel `k`
//! occupies lane `offset + k`, so a stereo frame at stride 2 looks like
//! `[L0, R0, L1, R1, ...]`. [`pack`] writes planar channels into that
//! layout; [`unpack`] is its exact inverse.
//!
//! The usable frame count is `(len - offset) / stride` on the interleaved
//! side, further truncated by the planar channel length - the shared
//! minimum-length contract, applied per call.
//!
//! # Shape Errors Are Silent No-ops
//!
//! Unlike the elementwise kernels, pack/unpack cannot meaningfully
//! truncate when their *shape* arguments disagree, so a malformed call
//! leaves the destination completely untouched instead:
//!
//! - planar channels of differing lengths
//! - `offset >= stride`, or `stride == 0`
//! - more channels than `stride` lanes (they cannot fit a frame)
//! - no channels at all
//!
//! The caller gets no error value. This mirrors the rest of the
//! crate's no-panic shape policy; enable the `tracing` feature to get a
//! trace event when a call is rejected.
//!
//! # Example
//!
//! ```rust
//! use onda_kernels::{pack, unpack};
//!
//! let left = [1.0, 2.0, 3.0, 4.0];
//! let right = [5.0, 6.0, 7.0, 8.0];
//!
//! let mut stereo = [0.0; 8];
//! pack(&mut stereo, 0, 2, &[&left, &right]);
//! assert_eq!(stereo, [1.0, 5.0, 2.0, 6.0, 3.0, 7.0, 4.0, 8.0]);
//!
//! let mut l = [0.0; 4];
//! let mut r = [0.0; 4];
//! unpack(&stereo, 0, 2, &mut [&mut l, &mut r]);
//! assert_eq!(l, left);
//! assert_eq!(r, right);
//! ```

use crate::Sample;

/// Interleave up to `stride` planar channels into one strided buffer.
///
/// Channel `k` is written at positions `offset + k`, `offset + k + stride`,
/// `offset + k + 2*stride`, ... The frame count is
/// `min((dst.len() - offset) / stride, channel_len)`; destination samples
/// outside the written lanes keep their prior value. Typical use is up to
/// four channels, one per lane of a stride-4 frame.
///
/// All source channels must share one length, `offset` must be less than
/// `stride`, and at most `stride` channels fit; any violation makes the
/// call a silent no-op (see module docs).
///
/// # Arguments
/// * `dst` - Interleaved destination buffer
/// * `offset` - Lane of the first channel within a frame, `< stride`
/// * `stride` - Distance between consecutive samples of one channel
/// * `sources` - Planar source channels, equal lengths
pub fn pack(dst: &mut [Sample], offset: usize, stride: usize, sources: &[&[Sample]]) {
    let Some((first, rest)) = sources.split_first() else {
        #[cfg(feature = "tracing")]
        tracing::trace!("pack: rejected, no source channels");
        return;
    };
    if stride == 0 || offset >= stride || sources.len() > stride {
        #[cfg(feature = "tracing")]
        tracing::trace!(offset, stride, channels = sources.len(), "pack: rejected, bad frame shape");
        return;
    }
    if rest.iter().any(|src| src.len() != first.len()) {
        #[cfg(feature = "tracing")]
        tracing::trace!("pack: rejected, source lengths differ");
        return;
    }

    let frames = (dst.len().saturating_sub(offset) / stride).min(first.len());
    if frames == 0 {
        return;
    }

    for (k, src) in sources.iter().enumerate() {
        let lane = dst[offset + k..].iter_mut().step_by(stride);
        for (d, &s) in lane.zip(&src[..frames]) {
            *d = s;
        }
    }
}

/// Split an interleaved buffer back into planar channels.
///
/// The exact inverse of [`pack`]: destination channel `k` receives every
/// `stride`-th sample of `src` starting at `offset + k`. The frame count
/// is `min((src.len() - offset) / stride, channel_len)`; planar samples
/// beyond it keep their prior value.
///
/// The same shape preconditions as [`pack`] apply, with the same silent
/// no-op on violation.
///
/// # Arguments
/// * `src` - Interleaved source buffer
/// * `offset` - Lane of the first channel within a frame, `< stride`
/// * `stride` - Distance between consecutive samples of one channel
/// * `destinations` - Planar destination channels, equal lengths
pub fn unpack(src: &[Sample], offset: usize, stride: usize, destinations: &mut [&mut [Sample]]) {
    let Some(first) = destinations.first() else {
        #[cfg(feature = "tracing")]
        tracing::trace!("unpack: rejected, no destination channels");
        return;
    };
    let channel_len = first.len();
    if stride == 0 || offset >= stride || destinations.len() > stride {
        #[cfg(feature = "tracing")]
        tracing::trace!(offset, stride, channels = destinations.len(), "unpack: rejected, bad frame shape");
        return;
    }
    if destinations.iter().any(|dst| dst.len() != channel_len) {
        #[cfg(feature = "tracing")]
        tracing::trace!("unpack: rejected, destination lengths differ");
        return;
    }

    let frames = (src.len().saturating_sub(offset) / stride).min(channel_len);
    if frames == 0 {
        return;
    }

    for (k, dst) in destinations.iter_mut().enumerate() {
        let lane = src[offset + k..].iter().step_by(stride);
        for (d, &s) in dst[..frames].iter_mut().zip(lane) {
            *d = s;
        }
    }
}
