//! Radial dial widget.
//!
//! Each sounding voice draws one spoke per division, evenly spaced around
//! the circle in its color and dash pattern; a solid hand sweeps one full
//! turn per beat. 12 o'clock is position 0 and angles run clockwise.

use ratatui::{
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle, Context, Line},
        Block, Borders,
    },
    Frame,
};
use std::f64::consts::TAU;

use polyr::engine::EngineSnapshot;
use polyr::voices::{VoiceId, VoiceStyle};

use super::controls::voice_color;

/// Canvas units per dash-pattern point.
const DASH_SCALE: f64 = 1.0 / 40.0;

pub fn render_dial(frame: &mut Frame, area: Rect, snapshot: &EngineSnapshot, hand: f64) {
    let canvas = Canvas::default()
        .block(Block::default().title(" dial ").borders(Borders::ALL))
        .marker(Marker::Braille)
        .x_bounds([-1.1, 1.1])
        .y_bounds([-1.1, 1.1])
        .paint(|ctx| {
            for voice in VoiceId::ALL {
                let divisions = snapshot.divisions[voice.index()];
                if divisions == 0 {
                    continue;
                }
                let style = voice.style();
                let color = voice_color(style.color);
                for n in 0..divisions {
                    let angle = f64::from(n) / f64::from(divisions) * TAU;
                    draw_spoke(ctx, angle, &style, color);
                }
            }

            let angle = hand * TAU;
            ctx.draw(&Line {
                x1: 0.0,
                y1: 0.0,
                x2: angle.sin(),
                y2: angle.cos(),
                color: Color::White,
            });
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: 0.05,
                color: Color::White,
            });
        });

    frame.render_widget(canvas, area);
}

fn draw_spoke(ctx: &mut Context, angle: f64, style: &VoiceStyle, color: Color) {
    let (dx, dy) = (angle.sin(), angle.cos());

    if style.dash.is_empty() {
        ctx.draw(&Line {
            x1: 0.0,
            y1: 0.0,
            x2: dx,
            y2: dy,
            color,
        });
        return;
    }

    // Walk the spoke alternating on/off segments from the dash pattern.
    let mut t = 0.0;
    let mut pen_down = true;
    let mut i = 0;
    while t < 1.0 {
        let segment = f64::from(style.dash[i % style.dash.len()]) * DASH_SCALE;
        let end = (t + segment).min(1.0);
        if pen_down {
            ctx.draw(&Line {
                x1: dx * t,
                y1: dy * t,
                x2: dx * end,
                y2: dy * end,
                color,
            });
        }
        t = end;
        pen_down = !pen_down;
        i += 1;
    }
}
