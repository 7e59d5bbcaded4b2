//! Color Nearest Match Library
//!
//! This library provides the core of the Color Nearest Match tool: hex color
//! validation and normalization, the nearest-color match session with its
//! notifications, pluggable match/clipboard/notification services, and the
//! CLI and web front ends built on them.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
#[cfg(feature = "web")]
pub mod web;

pub use error::{Error, Result};
