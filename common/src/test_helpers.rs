/// Shared Test Helpers for Cross-Crate Use
///
/// This module provides centralized test utilities that can be used across
/// both the `autocat` and `gamelib` crates to avoid code duplication.
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

// Global counter for unique test identifiers across parallel tests
static GLOBAL_TEST_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generate globally unique test identifiers that won't conflict across parallel tests
///
/// # Arguments
/// * `prefix` - A string prefix to identify the test artifact (e.g., "library", "profile")
///
/// # Returns
/// A unique string in the format: "{prefix}-{pid}-{timestamp}-{counter}"
pub fn generate_unique_id(prefix: &str) -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let counter = GLOBAL_TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{}-{}-{}-{}", prefix, std::process::id(), timestamp, counter)
}

/// Directory shared by every scratch file of the current test process.
pub fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("autocat-tests-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("Failed to create scratch directory");
    dir
}

/// Write `contents` to a uniquely named file inside [`scratch_dir`].
///
/// The file name ends with `name`, so extensions are preserved.
pub fn write_scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = scratch_dir().join(format!("{}-{}", generate_unique_id("scratch"), name));
    fs::write(&path, contents).expect("Failed to write scratch file");
    path
}
