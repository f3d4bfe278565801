//! Utility functions and helpers for vision-node.
//!
//! # Submodules
//!
//! - `logging`: Tracing initialization and secret redaction.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod logging;
