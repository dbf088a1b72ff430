//! Session telemetry.
//!
//! # SAFETY INVARIANT
//! Telemetry is a READ-ONLY side-effect layer.
//! It must **NEVER** be read inside decision logic (classifier, responder or dispatch).
//!
//! # PRIVACY INVARIANT
//! Telemetry events must **NEVER** contain user content (text, frames, landmarks).
//! Only labels, ids and counts are allowed.

pub mod event;
pub mod metrics;
pub mod recorder;
