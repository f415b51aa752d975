//! Structured-turn protocol
//!
//! The chat model is instructed to answer with two tagged fields:
//! `<falar>` for what the interviewer says out loud and `<codigo>` for the
//! question/code shown on screen. This module extracts them.

mod parser;

pub use parser::{parse_turn, Turn};
