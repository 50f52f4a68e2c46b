//! Application wiring: audio stream setup and TUI handoff.

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::{Arc, Mutex};

use polyr::engine::{PolyrhythmEngine, SampleClockScheduler};
use polyr::MAX_BLOCK_SIZE;

use super::sampler::VoiceBank;
use super::ui::UiApp;

/// Capacity of the audio→UI pulse ring. Generous: the UI drains it every
/// frame and a full ring only costs a missed flash.
const PULSE_RING_CAPACITY: usize = 256;

/// Everything the audio callback and the UI thread share.
///
/// The UI mutates the engine, the callback advances its scheduler and
/// renders the bank; the mutex makes every rescheduling pass atomic to the
/// audio thread.
pub struct SharedState {
    pub engine: PolyrhythmEngine<SampleClockScheduler>,
    pub bank: VoiceBank,
}

/// Run the application (takes over the terminal, plays audio).
pub fn run() -> EyreResult<()> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let config = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;

    let sample_rate = config.sample_rate().0 as f32;
    let channels = config.channels() as usize;

    let (pulse_tx, pulse_rx) = rtrb::RingBuffer::new(PULSE_RING_CAPACITY);

    let bank = VoiceBank::new(sample_rate, pulse_tx);
    let engine = PolyrhythmEngine::new(SampleClockScheduler::new(f64::from(sample_rate)));
    let state = Arc::new(Mutex::new(SharedState { engine, bank }));

    let state_clone = state.clone();
    let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

    let stream = device
        .build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                let mut state = state_clone.lock().unwrap();
                // Destructure to allow simultaneous mutable borrows
                let SharedState { engine, bank } = &mut *state;

                let total_frames = data.len() / channels;
                let mut frames_written = 0;

                while frames_written < total_frames {
                    let frames = (total_frames - frames_written).min(MAX_BLOCK_SIZE);

                    // Deliver due fires, then render the block they started
                    engine.scheduler_mut().advance(frames, bank);

                    let block = &mut render_buf[..frames];
                    block.fill(0.0);
                    bank.render(block);

                    // Mono to all channels
                    let out_off = frames_written * channels;
                    for (i, &sample) in block.iter().enumerate() {
                        for ch in 0..channels {
                            data[out_off + i * channels + ch] = sample;
                        }
                    }

                    frames_written += frames;
                }
            },
            |err| eprintln!("audio error: {err}"),
            None,
        )
        .wrap_err("failed to build output stream")?;

    stream.play().wrap_err("failed to start output stream")?;

    let mut terminal = ratatui::init();
    let result = UiApp::new(state, pulse_rx).run(&mut terminal);
    ratatui::restore();
    result
}
