//! Clap - layered noise bursts.
//!
//! A real clap is several near-simultaneous impacts, not one. Three noise
//! bursts about 11ms apart, each with a very fast decay, followed by a
//! longer "room" tail. A one-pole high-pass thins out the rumble and leaves
//! the characteristic crack.
//!
//! # Variations
//!
//! - Wider burst spacing = sloppier, bigger-room clap
//! - Longer tail = more reverberant feel

use rand::Rng;

const BURSTS: [f32; 3] = [0.0, 0.011, 0.022];

/// Render the clap one-shot at the given sample rate.
pub fn clap(sample_rate: f32) -> Vec<f32> {
    let len = (0.25 * sample_rate) as usize;
    let mut rng = rand::thread_rng();
    let mut out = Vec::with_capacity(len);

    // One-pole high-pass state
    let mut prev_in = 0.0f32;
    let mut prev_out = 0.0f32;

    for n in 0..len {
        let t = n as f32 / sample_rate;

        let mut env = 0.0f32;
        for &start in &BURSTS {
            if t >= start {
                env = env.max((-(t - start) / 0.008).exp());
            }
        }
        // Room tail hangs off the last burst
        let last = BURSTS[BURSTS.len() - 1];
        if t >= last {
            env = env.max((-(t - last) / 0.06).exp() * 0.4);
        }

        let noise: f32 = rng.gen_range(-1.0..1.0);
        let x = noise * env;
        let hp = 0.96 * (prev_out + x - prev_in);
        prev_in = x;
        prev_out = hp;

        out.push((hp * 0.9).clamp(-1.0, 1.0));
    }
    out
}
