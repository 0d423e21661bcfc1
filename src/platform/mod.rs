//! Thin wrappers over the host's speech and microphone services. Both are
//! best-effort: when a service is missing the game keeps working and tells
//! the player, it never retries.

pub mod recorder;
pub mod speech;
