//! Animation module for the level-by-level tree reveal
//!
//! Levels are revealed one at a time, each growing out from its
//! parent's tip at a fixed distance per tick.

mod reveal;

pub use reveal::RevealAnimation;
