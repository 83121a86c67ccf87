// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timing**: Auto-close duration and closing-transition delay
//! - **Presets**: Values carried by the built-in presets
//! - **Diagnostics**: Event buffer capacity bounds

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Delay before a displayed toast closes itself (in milliseconds).
pub const DEFAULT_SHOW_DURATION_MS: u64 = 5_000;

/// Delay between the closing transition and detaching the toast from the
/// document (in milliseconds).
pub const DEFAULT_TIMEOUT_ON_REMOVE_MS: u64 = 1_000;

// ==========================================================================
// Preset Defaults
// ==========================================================================

/// Name of the preset used when no options are given.
pub const DEFAULT_PRESET: &str = "notify";

/// Name of the built-in error preset.
pub const ERROR_PRESET: &str = "error";

/// Extra toast class applied by the error preset.
pub const ERROR_TOAST_CLASS: &str = "toast--error";

/// Errors stay on screen a little longer (in milliseconds).
pub const ERROR_SHOW_DURATION_MS: u64 = 8_000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default capacity of the diagnostics event buffer.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum capacity of the diagnostics event buffer.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 100;

/// Maximum capacity of the diagnostics event buffer.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_SHOW_DURATION_MS > 0);
    assert!(DEFAULT_TIMEOUT_ON_REMOVE_MS > 0);
    assert!(ERROR_SHOW_DURATION_MS >= DEFAULT_SHOW_DURATION_MS);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults_are_nonzero() {
        assert_eq!(DEFAULT_SHOW_DURATION_MS, 5_000);
        assert_eq!(DEFAULT_TIMEOUT_ON_REMOVE_MS, 1_000);
    }

    #[test]
    fn preset_names_are_distinct() {
        assert_ne!(DEFAULT_PRESET, ERROR_PRESET);
    }
}
