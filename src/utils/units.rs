//! Pitch and frequency conversions.

#[allow(unused_imports)]
use num_traits::float::Float;

/// Frequency of middle C (C4) in Hz, the reference for a 0V pitch input.
pub const FREQ_C4: f32 = 261.6256;

/// Frequency ratio between two pitches a given number of semitones apart.
#[inline]
pub fn semitones_to_ratio(semitones: f32) -> f32 {
    f32::exp2(semitones / 12.0)
}

/// Frequency in Hz of a 1V/octave pitch voltage, referenced to middle C at 0V.
#[inline]
pub fn voct_to_frequency(volts: f32) -> f32 {
    FREQ_C4 * f32::exp2(volts)
}
