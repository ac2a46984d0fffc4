//! Degree arithmetic for the wheel.
//!
//! Convention, fixed once for the whole crate: the wheel rotates clockwise
//! under a stationary pointer at the top (0 degrees). Increasing rotation
//! moves slices backwards past the pointer, so the pointer's angle in wheel
//! coordinates is `normalize(360 - normalize(rotation))`. Slot `k` spans
//! `[k * slice, (k + 1) * slice)` in wheel coordinates.

use rand::Rng;

/// Normalize an angle in degrees into `[0, 360)`.
///
/// Idempotent: `normalize_deg(normalize_deg(x)) == normalize_deg(x)`.
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// The segment slot index aligned with the pointer at the given rotation.
///
/// Accepts any rotation angle, including cumulative multi-turn values. The
/// result is clamped into `[0, n - 1]` to absorb floating-point overshoot at
/// slice boundaries. Exact inverse of [spin_target]: feeding a computed
/// target back through this function recovers the chosen index.
pub fn slice_index(rotation: f64, n: usize) -> usize {
    debug_assert!(n > 0);
    let slice = 360.0 / n as f64;
    let pointer = normalize_deg(360.0 - normalize_deg(rotation));
    ((pointer / slice) as usize).min(n - 1)
}

/// A computed landing rotation for one spin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinTarget {
    /// Absolute rotation the wheel must animate to.
    pub rotation: f64,
    /// Forward rotation from the base, in degrees. Always positive and at
    /// least `(full_turns - 1) * 360`.
    pub delta: f64,
}

/// Compute the absolute rotation that parks the pointer inside slot `k` of
/// an `n`-slot wheel after at least `full_turns - 1` whole forward turns.
///
/// The landing point is offset randomly within the slice, but kept away
/// from both slice edges by a dead-zone margin of `max(2, slice * 0.15)`
/// degrees so the rest position is never visually ambiguous. When the wheel
/// is so dense that the margins meet, the offset degenerates to the slice
/// midpoint.
///
/// The residual of `base` is subtracted from the advance so the landing
/// angle is absolute: `slice_index(target.rotation, n) == k` holds for any
/// base rotation. The wheel only ever advances forward.
pub fn spin_target<R: Rng>(
    k: usize,
    n: usize,
    base: f64,
    full_turns: u32,
    rng: &mut R,
) -> SpinTarget {
    debug_assert!(k < n);
    let slice = 360.0 / n as f64;
    let margin = (slice * 0.15).max(2.0);
    let span = slice - 2.0 * margin;
    let offset = if span > 0.0 {
        margin + rng.random_range(0.0..span)
    } else {
        slice / 2.0
    };

    let within = k as f64 * slice + offset;
    let delta = f64::from(full_turns) * 360.0 + (360.0 - within) - normalize_deg(base);
    SpinTarget {
        rotation: base + delta,
        delta,
    }
}
