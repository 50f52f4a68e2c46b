//! polyr - terminal polyrhythm toy
//!
//! Five percussion voices loop on independent subdivisions of a shared
//! tempo while a radial dial marks their beat positions and a hand sweeps
//! one turn per beat.
//!
//! Run with: cargo run

mod app;
mod sampler;
mod ui;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    app::run()
}
