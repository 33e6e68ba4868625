//! Configuration models shared across the application.

pub mod config;
