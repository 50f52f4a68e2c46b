//! One-shot playback for the voice bank.
//!
//! Each voice's sound is rendered to a PCM buffer once at startup; playback
//! is just a playhead per voice. Triggering rewinds the playhead to 0 —
//! restart, not resume — so every repetition sounds identical no matter how
//! far the previous one got through its decay.

use polyr::engine::TriggerSink;
use polyr::voices::VoiceId;
use rtrb::Producer;

struct OneShot {
    pcm: Vec<f32>,
    /// Index of the next sample to play; `pcm.len()` means silent.
    playhead: usize,
}

/// The five voices plus the pulse channel to the UI.
///
/// Lives on the audio side of the shared state; `render` and
/// `trigger_voice` never allocate.
pub struct VoiceBank {
    voices: Vec<OneShot>,
    pulse_tx: Producer<VoiceId>,
}

impl VoiceBank {
    /// Render every voice's one-shot. Voices start silent.
    pub fn new(sample_rate: f32, pulse_tx: Producer<VoiceId>) -> Self {
        let voices = VoiceId::ALL
            .iter()
            .map(|voice| {
                let pcm = voice.render_one_shot(sample_rate);
                let playhead = pcm.len();
                OneShot { pcm, playhead }
            })
            .collect();

        Self { voices, pulse_tx }
    }

    /// Mix every playing voice into `out`, advancing playheads.
    pub fn render(&mut self, out: &mut [f32]) {
        for voice in &mut self.voices {
            let remaining = voice.pcm.len() - voice.playhead;
            let frames = remaining.min(out.len());
            let src = &voice.pcm[voice.playhead..voice.playhead + frames];
            for (dst, &sample) in out[..frames].iter_mut().zip(src) {
                *dst += sample;
            }
            voice.playhead += frames;
        }
    }
}

impl TriggerSink for VoiceBank {
    fn trigger_voice(&mut self, voice: VoiceId) {
        self.voices[voice.index()].playhead = 0;
        // UI flash; dropped silently if the ring is full.
        let _ = self.pulse_tx.push(voice);
    }
}
