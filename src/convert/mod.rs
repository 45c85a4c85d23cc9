//! Loosely-typed input converters to markup trees.
//!
//! This module provides converters from dynamic data formats to [`Node`]
//! trees. Each converter is feature-gated and lives in its own submodule.
//!
//! # Supported Formats
//!
//! | Format | Feature | Module | Function |
//! |--------|---------|--------|----------|
//! | JSON | `json` | [`json`] | [`from_json()`] |
//!
//! A converter is the only place a structural or type error can arise; once
//! a [`Node`] exists, rendering cannot fail.
//!
//! [`Node`]: crate::node::Node

// =============================================================================
// JSON converter
// =============================================================================

#[cfg(feature = "json")]
pub mod json;

#[cfg(feature = "json")]
pub use self::json::{from_json, json_to_html};
