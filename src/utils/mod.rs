//! Utility functions shared by the DSP code.

pub mod parameter_interpolator;
pub mod units;

/// Linear crossfade between two samples.
#[inline]
pub fn crossfade(a: f32, b: f32, fade: f32) -> f32 {
    a + (b - a) * fade
}
