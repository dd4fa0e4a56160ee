//! RectVCO module: parameter and CV processing around the oscillator core.

// Based on the original C++ implementation of the RectVCO module.

use crate::oscillator::rect_saw_oscillator::{RectSawOscillator, MAX_PULSE_WIDTH};
use crate::utils::crossfade;
use crate::utils::units::{semitones_to_ratio, voct_to_frequency};
use crate::ProcessArgs;

/// Nominal full-scale output level in volts.
pub const OUTPUT_LEVEL: f32 = 5.0;

/// CV input voltage mapping to a modulation of 1.0 at full amount.
pub const CV_FULL_SCALE: f32 = 5.0;

/// Panel parameters.
#[derive(Debug, Clone)]
pub struct Params {
    /// Pulse width in the range from `0.01` to `0.99`. Default is `0.5` (square).
    pub pulse_width: f32,

    /// Pulse width CV amount in the range from `-0.5` to `0.5`. Default is `0.0`.
    pub pulse_width_cv_amount: f32,

    /// Blend between rectangle and sawtooth in the range from `0.0` to `1.0`.
    /// Default is `0.5`.
    pub mix: f32,

    /// Mix CV amount in the range from `-0.5` to `0.5`. Default is `0.0`.
    pub mix_cv_amount: f32,

    /// Pitch offset in semitones in the range from `-12.0` to `12.0`.
    /// Default is `0.0`.
    pub interval: f32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            pulse_width: 0.5,
            pulse_width_cv_amount: 0.0,
            mix: 0.5,
            mix_cv_amount: 0.0,
            interval: 0.0,
        }
    }
}

/// Input jack voltages.
#[derive(Debug, Default, Clone)]
pub struct Inputs {
    /// Pitch input in volts, 1V/octave, middle C at 0V.
    pub pitch: f32,

    /// Pulse width modulation input in volts.
    pub pulse_width_cv: f32,

    /// Mix modulation input in volts.
    pub mix_cv: f32,
}

/// One sample of output voltages.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Rectangle output in volts
    pub rectangle: f32,

    /// Sawtooth output in volts
    pub sawtooth: f32,

    /// Crossfade of the two per the mix setting, in volts
    pub mix: f32,
}

/// Per-sample processing contract invoked by the host on its audio thread.
///
/// Implementations must be real-time safe: no allocation, no locks, bounded
/// execution time, and deterministic output for identical state and inputs.
pub trait AudioProcessor {
    type Frame;

    /// Return the processor to its initial state.
    fn reset(&mut self);

    /// Advance by one sample and produce the output voltages.
    fn process(&mut self, args: &ProcessArgs) -> Self::Frame;
}

/// The RectVCO module.
#[derive(Debug, Default, Clone)]
pub struct RectVco {
    pub params: Params,
    pub inputs: Inputs,
    osc: RectSawOscillator,
}

impl RectVco {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current oscillator phase in `[-0.5, 0.5)`.
    pub fn phase(&self) -> f32 {
        self.osc.phase()
    }
}

impl AudioProcessor for RectVco {
    type Frame = Frame;

    fn reset(&mut self) {
        self.osc.init();
    }

    #[inline]
    fn process(&mut self, args: &ProcessArgs) -> Frame {
        let interval = self.params.interval.clamp(-12.0, 12.0);
        let frequency = voct_to_frequency(self.inputs.pitch) * semitones_to_ratio(interval);

        let base_pw = self.params.pulse_width.clamp(0.01, 0.99) - 0.5;
        let pw_cv = self.inputs.pulse_width_cv / CV_FULL_SCALE * self.params.pulse_width_cv_amount;
        let pw = (base_pw + pw_cv).clamp(-MAX_PULSE_WIDTH, MAX_PULSE_WIDTH);

        let mix_cv = self.inputs.mix_cv / CV_FULL_SCALE * self.params.mix_cv_amount;
        let mix = (self.params.mix + mix_cv).clamp(0.0, 1.0);

        let (rect, saw) = self.osc.next(frequency * args.sample_time, pw);

        Frame {
            rectangle: OUTPUT_LEVEL * rect,
            sawtooth: OUTPUT_LEVEL * saw,
            mix: OUTPUT_LEVEL * crossfade(rect, saw, mix),
        }
    }
}
