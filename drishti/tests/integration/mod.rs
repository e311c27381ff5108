//! Integration tests for drishti
//!
//! These tests run the full offline build and query path on small synthetic
//! venues: rasterization, visibility sweeps, index construction,
//! persistence, recognition replay and rendering.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p drishti --test integration
//! ```

mod common;
mod persistence;
mod properties;
mod scenario;
