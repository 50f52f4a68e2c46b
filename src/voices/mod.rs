//! The fixed voice set.
//!
//! Five percussion voices, created once at startup and immutable for the
//! process lifetime. Each voice carries a default division count (used only
//! to seed the engine's division map), a dial color, and a stroke pattern
//! for its spokes. All per-voice properties are match-based lookup tables on
//! [`VoiceId`] — fixed data, not polymorphic behavior.
//!
//! Each voice's sound lives in its own file as a one-shot renderer:
//!
//! ```ignore
//! use polyr::voices::VoiceId;
//!
//! let pcm = VoiceId::BongoHi.render_one_shot(48_000.0);
//! ```

mod bongo_hi;
mod bongo_lo;
mod clap;
mod clap2;
mod donk;

pub use bongo_hi::bongo_hi;
pub use bongo_lo::bongo_lo;
pub use clap::clap;
pub use clap2::clap2;
pub use donk::donk;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of voices. The voice list never grows or shrinks at runtime.
pub const VOICE_COUNT: usize = 5;

/// Identity of one percussion voice.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoiceId {
    BongoHi,
    BongoLo,
    Clap,
    Clap2,
    Donk,
}

/// Line cap for dial spokes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
}

/// Line join for dial spokes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Bevel,
}

/// sRGB color, 8 bits per channel.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// How a voice's dial spokes are drawn.
///
/// `dash` alternates on/off segment lengths, in the same units as
/// `line_width`; an empty dash means a solid line. Serialize-only: the
/// tables are static, so there is nothing to deserialize into.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceStyle {
    pub color: Rgb,
    pub line_width: f32,
    pub cap: LineCap,
    pub join: LineJoin,
    pub dash: &'static [f32],
}

impl VoiceId {
    /// Every voice, in dial order. Index-aligned with the engine's
    /// division map.
    pub const ALL: [VoiceId; VOICE_COUNT] = [
        VoiceId::BongoHi,
        VoiceId::BongoLo,
        VoiceId::Clap,
        VoiceId::Clap2,
        VoiceId::Donk,
    ];

    /// Position in [`VoiceId::ALL`].
    pub fn index(self) -> usize {
        match self {
            VoiceId::BongoHi => 0,
            VoiceId::BongoLo => 1,
            VoiceId::Clap => 2,
            VoiceId::Clap2 => 3,
            VoiceId::Donk => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<VoiceId> {
        VoiceId::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            VoiceId::BongoHi => "bongo hi",
            VoiceId::BongoLo => "bongo lo",
            VoiceId::Clap => "clap",
            VoiceId::Clap2 => "clap 2",
            VoiceId::Donk => "donk",
        }
    }

    /// Division count this voice starts with. Only the bongos play out of
    /// the box; the rest wait at 0 ("off").
    pub fn default_divisions(self) -> u32 {
        match self {
            VoiceId::BongoHi => 4,
            VoiceId::BongoLo => 3,
            _ => 0,
        }
    }

    pub fn style(self) -> VoiceStyle {
        match self {
            VoiceId::BongoHi => VoiceStyle {
                color: Rgb(230, 70, 70),
                line_width: 5.0,
                cap: LineCap::Butt,
                join: LineJoin::Miter,
                dash: &[],
            },
            VoiceId::BongoLo => VoiceStyle {
                color: Rgb(240, 160, 60),
                line_width: 5.0,
                cap: LineCap::Round,
                join: LineJoin::Bevel,
                dash: &[5.0, 10.0],
            },
            VoiceId::Clap => VoiceStyle {
                color: Rgb(90, 200, 90),
                line_width: 2.0,
                cap: LineCap::Round,
                join: LineJoin::Miter,
                dash: &[1.0, 3.0],
            },
            VoiceId::Clap2 => VoiceStyle {
                color: Rgb(90, 130, 230),
                line_width: 5.0,
                cap: LineCap::Round,
                join: LineJoin::Bevel,
                dash: &[5.0, 10.0],
            },
            VoiceId::Donk => VoiceStyle {
                color: Rgb(170, 90, 220),
                line_width: 2.0,
                cap: LineCap::Round,
                join: LineJoin::Miter,
                dash: &[1.0, 3.0],
            },
        }
    }

    /// Render this voice's one-shot sound to a mono PCM buffer.
    ///
    /// Called once per voice at startup; never from the audio callback.
    pub fn render_one_shot(self, sample_rate: f32) -> Vec<f32> {
        match self {
            VoiceId::BongoHi => bongo_hi(sample_rate),
            VoiceId::BongoLo => bongo_lo(sample_rate),
            VoiceId::Clap => clap(sample_rate),
            VoiceId::Clap2 => clap2(sample_rate),
            VoiceId::Donk => donk(sample_rate),
        }
    }
}
