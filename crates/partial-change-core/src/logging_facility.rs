//! Structured logging facility
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use partial_change_core::logging_facility::{init, Profile};
//!
//! // Initialize once, e.g. from a test harness setup function
//! init(Profile::Development);
//! ```
//!
//! The `RUST_LOG` environment filter overrides each profile's default level.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
