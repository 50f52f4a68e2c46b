//! Bongo hi - tight, high-pitched hand drum.
//!
//! A small drum head rings close to a single mode, so a decaying sine gets
//! most of the way there. The pitch sags slightly over the first few
//! milliseconds as the virtual skin relaxes after the strike, which is what
//! separates "drum" from "beep".
//!
//! # How It Works
//!
//! 1. Sine oscillator starting at 420 Hz, settling to 330 Hz
//! 2. Exponential amplitude decay (~45ms time constant)
//! 3. Short total length (180ms) so retriggers always start clean

use std::f32::consts::TAU;

/// Render the bongo-hi one-shot at the given sample rate.
pub fn bongo_hi(sample_rate: f32) -> Vec<f32> {
    let len = (0.18 * sample_rate) as usize;
    let mut out = Vec::with_capacity(len);
    let mut phase = 0.0f32;

    for n in 0..len {
        let t = n as f32 / sample_rate;
        let freq = 330.0 + 90.0 * (-t / 0.015).exp();
        phase = (phase + freq / sample_rate).fract();
        let env = (-t / 0.045).exp();
        out.push((phase * TAU).sin() * env * 0.8);
    }
    out
}
