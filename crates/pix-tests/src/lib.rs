//! Integration tests for the pix crates.
//!
//! End-to-end pipelines that cross crate boundaries: draw, process,
//! composite, and round-trip through PNG files.
