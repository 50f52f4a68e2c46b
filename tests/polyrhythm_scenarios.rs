//! End-to-end timing scenarios driven through the public API.
//!
//! These run the production sample-clock scheduler over simulated audio
//! blocks and count delivered fires, so they verify both the rescheduling
//! passes and the clock's drift-free accounting.

use polyr::engine::{PolyrhythmEngine, SampleClockScheduler, Scheduler, TriggerSink};
use polyr::voices::{VoiceId, VOICE_COUNT};

const SAMPLE_RATE: f64 = 48_000.0;
const BLOCK: usize = 480; // 10ms

struct CountingSink {
    counts: [usize; VOICE_COUNT],
}

impl CountingSink {
    fn new() -> Self {
        Self {
            counts: [0; VOICE_COUNT],
        }
    }
}

impl TriggerSink for CountingSink {
    fn trigger_voice(&mut self, voice: VoiceId) {
        self.counts[voice.index()] += 1;
    }
}

fn engine() -> PolyrhythmEngine<SampleClockScheduler> {
    PolyrhythmEngine::new(SampleClockScheduler::new(SAMPLE_RATE))
}

fn advance_secs(
    engine: &mut PolyrhythmEngine<SampleClockScheduler>,
    sink: &mut CountingSink,
    secs: usize,
) {
    let blocks = secs * SAMPLE_RATE as usize / BLOCK;
    for _ in 0..blocks {
        engine.scheduler_mut().advance(BLOCK, sink);
    }
}

#[test]
fn four_against_three_fires_eighty_and_sixty_times_in_a_minute() {
    // Defaults: divisions [4, 3, 0, 0, 0] at 20 BPM. One minute holds 20
    // beats, so exactly 80 hi fires against 60 lo fires — no drift allowed.
    let mut engine = engine();
    let mut sink = CountingSink::new();

    advance_secs(&mut engine, &mut sink, 60);
    assert_eq!(sink.counts, [80, 60, 0, 0, 0]);
}

#[test]
fn tempo_change_swaps_schedule_generations() {
    let mut engine = engine();
    let mut sink = CountingSink::new();

    engine.set_tempo(40.0);
    assert_eq!(engine.scheduler().live_count(), 2);

    // Periods are now 0.375s and 0.5s: 16 and 12 fires over 6 seconds.
    advance_secs(&mut engine, &mut sink, 6);
    assert_eq!(sink.counts, [16, 12, 0, 0, 0]);
}

#[test]
fn woken_voice_joins_the_running_generation() {
    let mut engine = engine();
    let mut sink = CountingSink::new();

    engine.set_tempo(40.0);
    engine.set_division(VoiceId::Clap, 2); // 60/40/2 = 0.75s
    assert_eq!(engine.scheduler().live_count(), 3);

    advance_secs(&mut engine, &mut sink, 3);
    assert_eq!(sink.counts, [8, 6, 4, 0, 0]);
}

#[test]
fn silencing_every_voice_stops_all_fires() {
    let mut engine = engine();
    let mut sink = CountingSink::new();

    for voice in VoiceId::ALL {
        engine.set_division(voice, 0);
    }
    assert_eq!(engine.scheduler().live_count(), 0);

    advance_secs(&mut engine, &mut sink, 10);
    assert_eq!(sink.counts, [0; VOICE_COUNT]);
}

#[test]
fn rapid_division_stepping_settles_on_exact_periods() {
    let mut engine = engine();
    let mut sink = CountingSink::new();

    // A burst of changes; only the settled state matters.
    for _ in 0..5 {
        engine.increment_division(VoiceId::Donk);
    }
    engine.decrement_division(VoiceId::Donk); // settles at 4 -> 0.75s
    engine.set_division(VoiceId::BongoHi, 0);
    engine.set_division(VoiceId::BongoLo, 0);
    assert_eq!(engine.scheduler().live_count(), 1);

    advance_secs(&mut engine, &mut sink, 6);
    assert_eq!(sink.counts, [0, 0, 0, 0, 8]);
}
