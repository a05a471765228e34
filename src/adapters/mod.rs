//! Adapter implementations for the port traits.
//!
//! - `live/` — real API implementations over the network
//! - `recording/` — wrap a live adapter and capture interactions to cassettes
//! - `replaying/` — serve recorded interactions from cassettes

pub mod live;
pub mod recording;
pub mod replaying;
