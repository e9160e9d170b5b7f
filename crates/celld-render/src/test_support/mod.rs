#![forbid(unsafe_code)]

//! Deterministic test sinks for the celld render pipeline.
//!
//! These [`DisplaySink`] implementations back the engine's test suites:
//!
//! - [`RecordingSink`] captures every sink call in order, for asserting on
//!   the exact call sequence a render produces.
//! - [`GridSink`] materializes draw calls into a character grid, for
//!   snapshot-style assertions on what a display would actually show.
//!
//! They live in this crate (behind the `test-support` feature, and always
//! available to this crate's own `cfg(test)` unit tests) so that in-crate
//! tests use the same `DisplaySink` instance they are exercising. The
//! `celld-harness` crate re-exports them for integration tests and benches.
//!
//! [`DisplaySink`]: crate::DisplaySink

mod grid;
mod recording;

pub use grid::GridSink;
pub use recording::{RecordingSink, SinkCall};
