//! The rotating reference hand.
//!
//! Purely derived visual state: the hand completes one full turn per beat
//! (60/BPM seconds), and is reset then restarted on every tempo change so it
//! re-synchronizes to the new tempo with no drift carried over from the
//! previous cycle. The clock stores nothing beyond the turn duration and
//! whether the hand is running; callers supply elapsed time since the last
//! restart.

/// Rotation state for the dial hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationClock {
    secs_per_turn: f64,
    running: bool,
}

impl RotationClock {
    /// A stopped clock. Starts on the first [`restart`](Self::restart).
    pub fn new() -> Self {
        Self {
            secs_per_turn: 0.0,
            running: false,
        }
    }

    /// Reset the hand to 12 o'clock and restart it at one turn per beat.
    pub fn restart(&mut self, bpm: f64) {
        self.secs_per_turn = 60.0 / bpm;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Duration of one full turn in seconds (one base-tempo beat).
    pub fn secs_per_turn(&self) -> f64 {
        self.secs_per_turn
    }

    /// Hand position in `[0, 1)` turns, `elapsed_secs` after the last
    /// restart. A stopped clock holds at 12 o'clock.
    pub fn fraction(&self, elapsed_secs: f64) -> f64 {
        if !self.running || self.secs_per_turn <= 0.0 {
            return 0.0;
        }
        (elapsed_secs / self.secs_per_turn).fract()
    }
}

impl Default for RotationClock {
    fn default() -> Self {
        Self::new()
    }
}
