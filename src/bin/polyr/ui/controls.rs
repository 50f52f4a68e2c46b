//! Stepper panel - BPM row plus one row per voice.
//!
//! Mirrors the engine's snapshot: a silenced voice reads "off", a recently
//! fired voice's marker lights up in its dial color.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use polyr::engine::EngineSnapshot;
use polyr::voices::{Rgb, VoiceId, VOICE_COUNT};

pub fn voice_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub fn render_controls(
    frame: &mut Frame,
    area: Rect,
    snapshot: &EngineSnapshot,
    selected: usize,
    flash: &[u8; VOICE_COUNT],
) {
    let row_style = |row: usize| {
        if row == selected {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        }
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" BPM: {:<4.0}", snapshot.tempo),
            row_style(0).fg(Color::Cyan),
        )),
        Line::raw(""),
    ];

    for voice in VoiceId::ALL {
        let index = voice.index();
        let value = snapshot.divisions[index];
        let shown = if value > 0 {
            value.to_string()
        } else {
            "off".to_string()
        };

        let marker_color = if flash[index] > 0 {
            voice_color(voice.style().color)
        } else {
            Color::DarkGray
        };

        lines.push(Line::from(vec![
            Span::styled(" ● ", Style::default().fg(marker_color)),
            Span::styled(
                format!("{:<9} {shown}", voice.label()),
                row_style(index + 1),
            ),
        ]));
    }

    let block = Block::default().title(" polyr ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
