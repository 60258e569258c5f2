//! Core types shared across partial-change facilities
//!
//! This crate holds the canonical schema constants used by the logging
//! facility and by log assertions in tests:
//!
//! - **Schema constants**: canonical field keys and event names

pub mod schema;
