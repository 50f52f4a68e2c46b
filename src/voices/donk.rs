//! Donk - round, pitched thump.
//!
//! A sine an octave below the bongos with a steep pitch drop and a touch of
//! soft saturation. The tanh stage adds just enough harmonics to make it
//! poke through the claps without turning harsh.

use std::f32::consts::TAU;

/// Render the donk one-shot at the given sample rate.
pub fn donk(sample_rate: f32) -> Vec<f32> {
    let len = (0.15 * sample_rate) as usize;
    let mut out = Vec::with_capacity(len);
    let mut phase = 0.0f32;

    for n in 0..len {
        let t = n as f32 / sample_rate;
        let freq = 150.0 + 180.0 * (-t / 0.01).exp();
        phase = (phase + freq / sample_rate).fract();
        let env = (-t / 0.04).exp();
        let raw = (phase * TAU).sin() * env * 2.0;
        out.push(raw.tanh() * 0.85);
    }
    out
}
