//! Shared test utilities used across weft crates.
//!
//! [`recording`] captures tracing spans and events so tests can assert on
//! instrumentation, and [`ci`] holds environment-driven run profiles.

pub mod ci;
pub mod recording;
