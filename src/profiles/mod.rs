//! Interviewer personas
//!
//! A fixed table of experience-level/area profiles, each carrying the
//! Portuguese system instruction that steers the chat model. Built once at
//! startup, never mutated.

mod registry;

pub use registry::{Profile, ProfileRegistry, ProfileSummary, DEFAULT_PROFILE};
