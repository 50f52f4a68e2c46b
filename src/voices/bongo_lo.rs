//! Bongo lo - the hi bongo's bigger sibling.
//!
//! Same construction as `bongo_hi`, tuned down and allowed to ring a little
//! longer. The lower head also sags further on the strike, so the pitch
//! envelope is deeper.

use std::f32::consts::TAU;

/// Render the bongo-lo one-shot at the given sample rate.
pub fn bongo_lo(sample_rate: f32) -> Vec<f32> {
    let len = (0.28 * sample_rate) as usize;
    let mut out = Vec::with_capacity(len);
    let mut phase = 0.0f32;

    for n in 0..len {
        let t = n as f32 / sample_rate;
        let freq = 185.0 + 70.0 * (-t / 0.02).exp();
        phase = (phase + freq / sample_rate).fract();
        let env = (-t / 0.07).exp();
        out.push((phase * TAU).sin() * env * 0.85);
    }
    out
}
