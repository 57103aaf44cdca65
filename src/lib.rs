//! Generates colorized variants of a set of base pattern images.
//!
//! Each variant pairs a pattern, assigned round-robin, with a palette color
//! drawn at random. The pattern is reduced to luminance and multiply-blended
//! with a flat layer of that color.

pub mod colorize;
pub mod colors;
pub mod config;
pub mod constants;
pub mod error;
pub mod generator;
pub mod types;
pub mod utils;
