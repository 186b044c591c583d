//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`).
//! Keep it lean: no I/O and no logic beyond defaults, just data.

pub mod config;
pub mod keys;
