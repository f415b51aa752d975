//! Rolling conversation context
//!
//! Keeps the last N candidate/interviewer exchanges per session so the chat
//! model sees a bounded slice of history instead of the whole interview.

mod window;

pub use window::{ContextWindow, Exchange};
