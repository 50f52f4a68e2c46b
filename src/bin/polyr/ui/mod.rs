//! TUI module for polyr
//!
//! Rendering is a pure function of the engine's snapshot; the UI never
//! drives the engine except through its setters in response to key input.

mod controls;
mod dial;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    DefaultTerminal, Frame,
};
use rtrb::Consumer;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use polyr::engine::EngineSnapshot;
use polyr::voices::{VoiceId, VOICE_COUNT};

use super::app::SharedState;

/// Draw frames a fired voice stays lit in the stepper panel.
const FLASH_FRAMES: u8 = 6;

/// Selectable rows: BPM plus one per voice.
const ROWS: usize = VOICE_COUNT + 1;

/// UI application state
pub struct UiApp {
    state: Arc<Mutex<SharedState>>,
    /// Ring buffer receiver for voice-fire pulses
    pulse_rx: Consumer<VoiceId>,
    /// Currently selected stepper row (0 = BPM)
    selected: usize,
    /// Moment the rotation hand last restarted
    hand_epoch: Instant,
    /// Per-voice flash countdowns
    flash: [u8; VOICE_COUNT],
    should_quit: bool,
}

impl UiApp {
    pub fn new(state: Arc<Mutex<SharedState>>, pulse_rx: Consumer<VoiceId>) -> Self {
        Self {
            state,
            pulse_rx,
            selected: 0,
            hand_epoch: Instant::now(),
            flash: [0; VOICE_COUNT],
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_pulses();

            let snapshot = self.state.lock().unwrap().engine.snapshot();
            let hand = snapshot
                .rotation
                .fraction(self.hand_epoch.elapsed().as_secs_f64());

            terminal.draw(|frame| self.render(frame, &snapshot, hand))?;

            for countdown in &mut self.flash {
                *countdown = countdown.saturating_sub(1);
            }

            // Handle keyboard input (non-blocking, ~60fps)
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Drain fire pulses from the audio thread into flash countdowns.
    fn poll_pulses(&mut self) {
        while let Ok(voice) = self.pulse_rx.pop() {
            self.flash[voice.index()] = FLASH_FRAMES;
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(ROWS - 1);
            }
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => self.adjust(1),
            KeyCode::Left | KeyCode::Char('-') => self.adjust(-1),
            KeyCode::Char('r') => {
                // Force a clean schedule restart without touching anything
                self.state.lock().unwrap().engine.reschedule_all();
            }
            _ => {}
        }
    }

    /// Step the selected row. Tempo rows restart the hand; the engine holds
    /// both floors, so out-of-range steps are safe no-ops.
    fn adjust(&mut self, delta: i32) {
        let mut state = self.state.lock().unwrap();
        if self.selected == 0 {
            if delta > 0 {
                state.engine.increment_tempo();
            } else {
                state.engine.decrement_tempo();
            }
            drop(state);
            self.hand_epoch = Instant::now();
        } else if let Some(voice) = VoiceId::from_index(self.selected - 1) {
            if delta > 0 {
                state.engine.increment_division(voice);
            } else {
                state.engine.decrement_division(voice);
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame, snapshot: &EngineSnapshot, hand: f64) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),   // Main area
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(26), // Stepper panel
                Constraint::Min(20),    // Dial
            ])
            .split(chunks[0]);

        controls::render_controls(frame, columns[0], snapshot, self.selected, &self.flash);
        dial::render_dial(frame, columns[1], snapshot, hand);

        let help = ratatui::widgets::Paragraph::new(
            " [Q] Quit  [↑/↓] Select  [←/→] Adjust  [R] Restart schedules",
        )
        .style(ratatui::style::Style::default().fg(ratatui::style::Color::DarkGray));
        frame.render_widget(help, chunks[1]);
    }
}
