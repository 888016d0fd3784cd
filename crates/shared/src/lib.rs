//! Shared types and configuration for Tally.
//!
//! This crate provides the common pieces used across all other crates:
//! - Account number newtype for type-safe account references
//! - Configuration management

pub mod config;
pub mod types;

pub use config::AppConfig;
