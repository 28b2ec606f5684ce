//! Utility functions and helpers for the transgate gateway.
//!
//! This module provides cross-cutting concerns like structured logging,
//! credential sanitization, and the opt-in retry policy.
//!
//! # Submodules
//!
//! - `logging`: Tracing initialization and credential scrubbing.
//! - `retry`: Backoff-based retries for transient upstream failures.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod logging;
pub mod retry;
