pub mod config;
pub mod yaml_include;

/// Common utilities shared across the auto-categorization workspace
///
/// This crate provides functionality used by both the `autocat` engine and the
/// `gamelib` application crate:
///
/// - YAML configuration loading with `!include` support
/// - Shared test helpers (unique ids, scratch files)

// Test helpers module - available for both development and test builds
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

#[cfg(any(test, feature = "test-helpers"))]
pub use test_helpers::{generate_unique_id, scratch_dir, write_scratch_file};
