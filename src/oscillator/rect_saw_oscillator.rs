//! Rectangle/sawtooth oscillator with variable pulse width.
//!
//! Naive (non-band-limited) implementation. The rectangle steps from high to
//! low at the pulse width threshold; the sawtooth is a piecewise linear ramp
//! whose breakpoint tracks the pulse width, degenerating to a plain sawtooth
//! as the pulse width approaches the lower bound.

// Based on the original C++ implementation of the RectVCO module.

use crate::utils::parameter_interpolator::ParameterInterpolator;

/// Maximum normalized frequency accepted by the block renderer.
pub const MAX_FREQUENCY: f32 = 0.25;

/// Widest pulse width reachable by parameter and CV combined. Keeps the
/// sawtooth slope denominators at least `0.01` away from zero.
pub const MAX_PULSE_WIDTH: f32 = 0.49;

#[derive(Debug, Default, Clone)]
pub struct RectSawOscillator {
    // Oscillator state.
    phase: f32,

    // For interpolation of parameters.
    frequency: f32,
    pw: f32,
}

impl RectSawOscillator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self) {
        self.phase = 0.0;

        self.frequency = 0.0;
        self.pw = 0.0;
    }

    /// Current phase in `[-0.5, 0.5)`.
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Advance the phase by one sample and return the rectangle and sawtooth
    /// samples in ±1.
    ///
    /// `frequency` is normalized (Hz × sample time) and must stay below 1 for
    /// the single wrap check to hold; `pw` must lie within
    /// `[-MAX_PULSE_WIDTH, MAX_PULSE_WIDTH]`.
    #[inline]
    pub fn next(&mut self, frequency: f32, pw: f32) -> (f32, f32) {
        self.phase += frequency;
        if self.phase >= 0.5 {
            self.phase -= 1.0;
        }

        compute_naive_sample(self.phase, pw)
    }

    /// Render a block of samples, smoothing frequency and pulse width over
    /// its length. The rectangle goes to `out`, the sawtooth to `aux`.
    #[inline]
    pub fn render(&mut self, mut frequency: f32, mut pw: f32, out: &mut [f32], aux: &mut [f32]) {
        if frequency >= MAX_FREQUENCY {
            frequency = MAX_FREQUENCY;
        }
        pw = pw.clamp(-MAX_PULSE_WIDTH, MAX_PULSE_WIDTH);

        let mut fm = ParameterInterpolator::new(&mut self.frequency, frequency, out.len());
        let mut pwm = ParameterInterpolator::new(&mut self.pw, pw, out.len());

        for (out_sample, aux_sample) in out.iter_mut().zip(aux.iter_mut()) {
            let frequency = fm.next();
            let pw = pwm.next();

            self.phase += frequency;
            if self.phase >= 0.5 {
                self.phase -= 1.0;
            }

            let (rect, saw) = compute_naive_sample(self.phase, pw);
            *out_sample = rect;
            *aux_sample = saw;
        }
    }
}

#[inline]
fn compute_naive_sample(phase: f32, pw: f32) -> (f32, f32) {
    let rect = if phase < pw { 1.0 } else { -1.0 };
    let saw = if phase < pw {
        (phase + 0.5) / (pw + 0.5)
    } else {
        (phase - pw) / (0.5 - pw) - 1.0
    };

    (rect, saw)
}
