//! Polyrhythm timing core.
//!
//! [`PolyrhythmEngine`] owns the tempo and the per-voice division map and
//! keeps one repeating trigger alive per sounding voice. Every mutation runs
//! the same explicit rescheduling pass: cancel every live schedule, recompute
//! every period, reinstall a fresh schedule for every voice with a nonzero
//! division. There are no reactive subscriptions and no hidden side effects;
//! the pass is an ordinary method you can call and test.

pub mod rotation;
pub mod scheduler;

pub use rotation::RotationClock;
pub use scheduler::{SampleClockScheduler, ScheduleId, Scheduler, TriggerSink};

use crate::voices::{VoiceId, VOICE_COUNT};
use crate::DEFAULT_TEMPO;

/// Floor for the tempo, in BPM. The tempo can never reach 0; a schedule
/// period is therefore always finite and positive.
pub const MIN_TEMPO: f64 = 10.0;

/// Step applied by the tempo increment/decrement conveniences, in BPM.
pub const TEMPO_STEP: f64 = 5.0;

/// Read-only view of engine state for rendering. Taking one has no side
/// effects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineSnapshot {
    /// Tempo in beats per minute.
    pub tempo: f64,
    /// Division count per voice, index-aligned with [`VoiceId::ALL`].
    pub divisions: [u32; VOICE_COUNT],
    /// Current rotation-hand state.
    pub rotation: RotationClock,
}

/// The polyrhythm engine.
///
/// Generic over the [`Scheduler`] so the timing logic is independent of any
/// particular event loop; the binary plugs in a [`SampleClockScheduler`],
/// tests plug in a recording fake.
pub struct PolyrhythmEngine<S: Scheduler> {
    tempo: f64,
    divisions: [u32; VOICE_COUNT],
    active: [Option<ScheduleId>; VOICE_COUNT],
    rotation: RotationClock,
    scheduler: S,
}

impl<S: Scheduler> PolyrhythmEngine<S> {
    /// Create an engine at [`DEFAULT_TEMPO`] with each voice's default
    /// division count, and start the initial schedule generation.
    pub fn new(scheduler: S) -> Self {
        let mut divisions = [0; VOICE_COUNT];
        for voice in VoiceId::ALL {
            divisions[voice.index()] = voice.default_divisions();
        }

        let mut engine = Self {
            tempo: DEFAULT_TEMPO,
            divisions,
            active: [None; VOICE_COUNT],
            rotation: RotationClock::new(),
            scheduler,
        };
        engine.rotation.restart(engine.tempo);
        engine.reschedule_all();
        engine
    }

    /// Replace the tempo, restart the rotation hand, and rerun the
    /// rescheduling pass.
    ///
    /// Clamped to [`MIN_TEMPO`]; a non-finite value clamps too. Setting the
    /// current value again is legal and still restarts every schedule and
    /// the hand.
    pub fn set_tempo(&mut self, bpm: f64) {
        self.tempo = if bpm.is_finite() { bpm.max(MIN_TEMPO) } else { MIN_TEMPO };
        self.rotation.restart(self.tempo);
        self.reschedule_all();
    }

    /// Step the tempo up by [`TEMPO_STEP`].
    pub fn increment_tempo(&mut self) {
        self.set_tempo(self.tempo + TEMPO_STEP);
    }

    /// Step the tempo down by [`TEMPO_STEP`], stopping at [`MIN_TEMPO`].
    pub fn decrement_tempo(&mut self) {
        self.set_tempo(self.tempo - TEMPO_STEP);
    }

    /// Replace one voice's division count and rerun the rescheduling pass.
    /// 0 silences the voice.
    pub fn set_division(&mut self, voice: VoiceId, count: u32) {
        self.divisions[voice.index()] = count;
        self.reschedule_all();
    }

    pub fn increment_division(&mut self, voice: VoiceId) {
        self.set_division(voice, self.divisions[voice.index()] + 1);
    }

    /// No-op when the voice is already at 0.
    pub fn decrement_division(&mut self, voice: VoiceId) {
        let current = self.divisions[voice.index()];
        if current > 0 {
            self.set_division(voice, current - 1);
        }
    }

    /// The rescheduling pass: cancel every live schedule, then install a
    /// fresh one per sounding voice at its recomputed period.
    ///
    /// All cancellations happen before any installation, so a stale-period
    /// fire can never be delivered once a change has been requested, and at
    /// most one schedule per voice is ever live.
    pub fn reschedule_all(&mut self) {
        for slot in &mut self.active {
            if let Some(id) = slot.take() {
                self.scheduler.cancel(id);
            }
        }

        for voice in VoiceId::ALL {
            if let Some(period) = self.period_secs(voice) {
                self.active[voice.index()] =
                    Some(self.scheduler.schedule_repeating(voice, period));
            }
        }
    }

    /// Seconds between fires for one voice: `60 / tempo / divisions`.
    /// `None` when the voice is silenced, checked before the division so a
    /// zero count can never divide.
    pub fn period_secs(&self, voice: VoiceId) -> Option<f64> {
        let divisions = self.divisions[voice.index()];
        if divisions == 0 {
            return None;
        }
        Some(60.0 / self.tempo / f64::from(divisions))
    }

    pub fn tempo(&self) -> f64 {
        self.tempo
    }

    pub fn division(&self, voice: VoiceId) -> u32 {
        self.divisions[voice.index()]
    }

    pub fn rotation(&self) -> &RotationClock {
        &self.rotation
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            tempo: self.tempo,
            divisions: self.divisions,
            rotation: self.rotation,
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl<S: Scheduler> Drop for PolyrhythmEngine<S> {
    fn drop(&mut self) {
        for slot in &mut self.active {
            if let Some(id) = slot.take() {
                self.scheduler.cancel(id);
            }
        }
    }
}
