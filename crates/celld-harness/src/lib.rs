#![forbid(unsafe_code)]

//! Deterministic test sinks for the celld render pipeline.
//!
//! Two [`DisplaySink`] implementations back the engine's test suites:
//!
//! - [`RecordingSink`] captures every sink call in order, for asserting on
//!   the exact call sequence a render produces.
//! - [`GridSink`] materializes draw calls into a character grid, for
//!   snapshot-style assertions on what a display would actually show.
//!
//! The sinks themselves live in `celld_render::test_support` (behind its
//! `test-support` feature) so that `celld-render`'s own in-crate unit tests
//! exercise the exact same `DisplaySink` trait instance they implement; this
//! crate re-exports them for integration tests and benches.
//!
//! [`DisplaySink`]: celld_render::DisplaySink

pub use celld_render::test_support::{GridSink, RecordingSink, SinkCall};
