//! Top-level module for the oscillator cores.

pub mod rect_saw_oscillator;
