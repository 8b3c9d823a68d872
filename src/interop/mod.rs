//! Interoperability with other value representations.
//!
//! This module provides conversion between [`Value`](crate::Value) and
//! `serde_json::Value`, so documents parsed by serde_json can be read and
//! written values can be serialized.

pub mod json;

pub use json::ConversionError;
