//! # Domain Services

pub mod field_listing;
