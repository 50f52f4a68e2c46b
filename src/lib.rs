pub mod engine; // Polyrhythm timing core
pub mod voices; // Static voice set and one-shot synthesis

/// Largest number of frames rendered per audio-callback chunk.
pub const MAX_BLOCK_SIZE: usize = 2048;

/// Tempo the toy starts at, in beats per minute.
pub const DEFAULT_TEMPO: f64 = 20.0;
