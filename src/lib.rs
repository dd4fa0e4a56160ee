#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

pub mod descriptor;
pub mod module;
pub mod oscillator;
pub mod utils;

/// Timing context for DSP calculations, passed to every process call.
#[derive(Debug, Clone, Copy)]
pub struct ProcessArgs {
    /// Sample rate in Hz
    pub sample_rate: f32,
    /// Duration of one sample in seconds (1.0 / sample_rate)
    pub sample_time: f32,
}

impl ProcessArgs {
    /// Create a new timing context.
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            sample_time: 1.0 / sample_rate,
        }
    }
}
