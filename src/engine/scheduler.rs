//! Repeating-trigger scheduling.
//!
//! The engine only needs "cancellable repeating timer" semantics, so that
//! contract lives in the [`Scheduler`] trait and the engine stays independent
//! of any particular event loop. The production implementation,
//! [`SampleClockScheduler`], counts periods in audio samples with fractional
//! carry and is advanced from the audio callback, so repeated fires within
//! one schedule generation accumulate no drift at any period, including
//! sub-100ms ones.

use crate::voices::VoiceId;

/// Opaque handle to one installed repeating trigger.
///
/// Handles are never reused: every call to
/// [`Scheduler::schedule_repeating`] mints a fresh id, so a cancelled
/// generation can never be confused with its replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduleId(u64);

impl ScheduleId {
    /// Mint a handle from a raw counter value. For [`Scheduler`]
    /// implementors; the engine treats handles as opaque.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Receiver for schedule fires: "restart this voice's sound and play it."
///
/// Restart semantics, not queueing — triggering a voice whose previous
/// playback has not finished rewinds it to the start.
pub trait TriggerSink {
    fn trigger_voice(&mut self, voice: VoiceId);
}

/// Cancellable repeating-trigger capability consumed by the engine.
pub trait Scheduler {
    /// Install a repeating trigger for `voice`, firing every `period_secs`.
    ///
    /// The first fire happens one full period after installation.
    fn schedule_repeating(&mut self, voice: VoiceId, period_secs: f64) -> ScheduleId;

    /// Cancel a schedule. Idempotent: cancelling an unknown or
    /// already-cancelled handle is a no-op. Once this returns, the handle
    /// can never fire again.
    fn cancel(&mut self, id: ScheduleId);

    /// Number of currently live schedules.
    fn live_count(&self) -> usize;
}

/// One live repeating trigger, counted in samples.
struct Slot {
    id: ScheduleId,
    voice: VoiceId,
    period_samples: f64,
    /// Samples until the next fire. Fractional carry keeps long runs exact.
    countdown: f64,
}

/// Sample-domain scheduler driven from the audio callback.
///
/// Each audio block, [`advance`](SampleClockScheduler::advance) subtracts the
/// block length from every slot's countdown and fires each slot as many times
/// as whole periods elapsed. Because the countdown carries its fractional
/// remainder across blocks, the average fire rate matches the requested
/// period exactly over any number of fires.
pub struct SampleClockScheduler {
    sample_rate: f64,
    slots: Vec<Slot>,
    next_id: u64,
}

impl SampleClockScheduler {
    pub fn new(sample_rate: f64) -> Self {
        Self {
            sample_rate,
            slots: Vec::new(),
            next_id: 0,
        }
    }

    /// Advance the clock by `frames` samples, delivering any due fires.
    ///
    /// Called from the audio callback once per rendered block, before the
    /// block is rendered. A period shorter than the block fires multiple
    /// times within it.
    pub fn advance(&mut self, frames: usize, sink: &mut dyn TriggerSink) {
        let frames = frames as f64;
        for slot in &mut self.slots {
            slot.countdown -= frames;
            while slot.countdown <= 0.0 {
                sink.trigger_voice(slot.voice);
                slot.countdown += slot.period_samples;
            }
        }
    }
}

impl Scheduler for SampleClockScheduler {
    fn schedule_repeating(&mut self, voice: VoiceId, period_secs: f64) -> ScheduleId {
        let id = ScheduleId::new(self.next_id);
        self.next_id += 1;

        // Floor of one sample keeps a degenerate period from spinning the
        // fire loop forever.
        let period_samples = (period_secs * self.sample_rate).max(1.0);

        self.slots.push(Slot {
            id,
            voice,
            period_samples,
            countdown: period_samples,
        });
        id
    }

    fn cancel(&mut self, id: ScheduleId) {
        self.slots.retain(|slot| slot.id != id);
    }

    fn live_count(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every fire it receives.
    struct CountingSink {
        fires: Vec<VoiceId>,
    }

    impl CountingSink {
        fn new() -> Self {
            Self { fires: Vec::new() }
        }

        fn count_for(&self, voice: VoiceId) -> usize {
            self.fires.iter().filter(|&&v| v == voice).count()
        }
    }

    impl TriggerSink for CountingSink {
        fn trigger_voice(&mut self, voice: VoiceId) {
            self.fires.push(voice);
        }
    }

    #[test]
    fn first_fire_lands_one_period_after_install() {
        let mut clock = SampleClockScheduler::new(48_000.0);
        let mut sink = CountingSink::new();

        // 0.5s period = 24_000 samples
        clock.schedule_repeating(VoiceId::BongoHi, 0.5);

        clock.advance(23_999, &mut sink);
        assert_eq!(sink.fires.len(), 0);

        clock.advance(1, &mut sink);
        assert_eq!(sink.fires.len(), 1);
    }

    #[test]
    fn short_period_fires_multiple_times_per_block() {
        let mut clock = SampleClockScheduler::new(48_000.0);
        let mut sink = CountingSink::new();

        // 10ms period = 480 samples; one 2048-frame block spans 4 periods.
        clock.schedule_repeating(VoiceId::Clap, 0.010);
        clock.advance(2048, &mut sink);
        assert_eq!(sink.fires.len(), 4);
    }

    #[test]
    fn fractional_carry_accumulates_no_drift() {
        let mut clock = SampleClockScheduler::new(44_100.0);
        let mut sink = CountingSink::new();

        // 10ms at 44.1kHz = 441 samples; advance in awkward 100-frame blocks
        // for 10 seconds and expect exactly 1000 fires.
        clock.schedule_repeating(VoiceId::Donk, 0.010);
        for _ in 0..4410 {
            clock.advance(100, &mut sink);
        }
        assert_eq!(sink.fires.len(), 1000);
    }

    #[test]
    fn cancel_is_idempotent_and_stops_fires() {
        let mut clock = SampleClockScheduler::new(48_000.0);
        let mut sink = CountingSink::new();

        let id = clock.schedule_repeating(VoiceId::BongoLo, 0.25);
        clock.advance(12_000, &mut sink);
        assert_eq!(sink.fires.len(), 1);

        clock.cancel(id);
        clock.cancel(id); // second cancel is a no-op
        assert_eq!(clock.live_count(), 0);

        clock.advance(48_000, &mut sink);
        assert_eq!(sink.fires.len(), 1);
    }

    #[test]
    fn independent_slots_fire_at_their_own_rates() {
        let mut clock = SampleClockScheduler::new(48_000.0);
        let mut sink = CountingSink::new();

        // 20 BPM: hi at 4 divisions = 0.75s, lo at 3 divisions = 1.0s.
        clock.schedule_repeating(VoiceId::BongoHi, 0.75);
        clock.schedule_repeating(VoiceId::BongoLo, 1.0);

        // 12 seconds = 16 hi periods, 12 lo periods.
        for _ in 0..1200 {
            clock.advance(480, &mut sink);
        }
        assert_eq!(sink.count_for(VoiceId::BongoHi), 16);
        assert_eq!(sink.count_for(VoiceId::BongoLo), 12);
    }

    #[test]
    fn handles_are_never_reused() {
        let mut clock = SampleClockScheduler::new(48_000.0);
        let a = clock.schedule_repeating(VoiceId::Clap, 1.0);
        clock.cancel(a);
        let b = clock.schedule_repeating(VoiceId::Clap, 1.0);
        assert_ne!(a, b);
    }
}
