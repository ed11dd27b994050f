//! pantheon-core: Quiz parsing, scoring, and persona resolution.
//!
//! This crate defines the data model, the prompt and parser pair that turns
//! generated text into quiz questions, and the deterministic scorer that
//! maps answer tallies to one of sixteen personas.

pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod persona;
pub mod prompt;
pub mod scoring;
pub mod topics;
pub mod traits;
