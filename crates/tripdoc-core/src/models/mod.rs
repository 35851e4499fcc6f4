//! Data models for travel documents and configuration.

pub mod config;
pub mod document;
