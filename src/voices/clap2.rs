//! Clap 2 - snappier, drier clap variant.
//!
//! Two bursts instead of three, tighter spacing, almost no tail. Reads as a
//! finger snap next to `clap`'s full hand clap.

use rand::Rng;

/// Render the clap-2 one-shot at the given sample rate.
pub fn clap2(sample_rate: f32) -> Vec<f32> {
    let len = (0.12 * sample_rate) as usize;
    let mut rng = rand::thread_rng();
    let mut out = Vec::with_capacity(len);

    let mut prev_in = 0.0f32;
    let mut prev_out = 0.0f32;

    for n in 0..len {
        let t = n as f32 / sample_rate;

        let mut env = (-t / 0.006).exp();
        if t >= 0.008 {
            env = env.max((-(t - 0.008) / 0.015).exp() * 0.8);
        }

        let noise: f32 = rng.gen_range(-1.0..1.0);
        let x = noise * env;
        let hp = 0.98 * (prev_out + x - prev_in);
        prev_in = x;
        prev_out = hp;

        out.push((hp * 0.9).clamp(-1.0, 1.0));
    }
    out
}
