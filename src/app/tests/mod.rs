//! Tests for the interactive loop.
//!
//! This module is organized into submodules by functionality:
//! - `helpers` - Shared test utilities
//! - `flow` - Menu dispatch and end-to-end command scenarios
//! - `recovery` - Store recovery and error reporting scenarios

#[allow(clippy::unwrap_used, clippy::expect_used)]
pub mod helpers;
