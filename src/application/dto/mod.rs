//! # Data Transfer Objects

pub mod list_config;
