// SPDX-License-Identifier: MPL-2.0
//! Toast newtypes.
//!
//! Timing values follow the "zero means unset" rule: a zero millisecond
//! value resolves to the default instead of closing instantly.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::defaults::{DEFAULT_SHOW_DURATION_MS, DEFAULT_TIMEOUT_ON_REMOVE_MS};

// =============================================================================
// Position
// =============================================================================

/// Screen slot a toast is rendered into. Each position owns one container.
///
/// Parsing is lenient: `"bottom"` (any case) selects [`Position::Bottom`],
/// every other string falls back to [`Position::Top`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Position {
    #[default]
    Top,
    Bottom,
}

impl Position {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::Top => "top",
            Position::Bottom => "bottom",
        }
    }

    #[must_use]
    pub fn is_bottom(self) -> bool {
        self == Position::Bottom
    }

    /// Parses a position name, falling back to [`Position::Top`].
    #[must_use]
    pub fn parse_lossy(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("bottom") {
            Position::Bottom
        } else {
            Position::Top
        }
    }
}

impl From<String> for Position {
    fn from(name: String) -> Self {
        Self::parse_lossy(&name)
    }
}

impl From<Position> for &'static str {
    fn from(position: Position) -> Self {
        position.as_str()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// ShowDuration
// =============================================================================

/// How long a toast stays displayed before closing itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowDuration(u64);

impl ShowDuration {
    /// Creates a duration from milliseconds. Zero resolves to the default.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        if ms == 0 {
            Self::default()
        } else {
            Self(ms)
        }
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ShowDuration {
    fn default() -> Self {
        Self(DEFAULT_SHOW_DURATION_MS)
    }
}

// =============================================================================
// RemovalDelay
// =============================================================================

/// Delay between a toast entering its closing transition and its removal
/// from the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalDelay(u64);

impl RemovalDelay {
    /// Creates a delay from milliseconds. Zero resolves to the default.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        if ms == 0 {
            Self::default()
        } else {
            Self(ms)
        }
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for RemovalDelay {
    fn default() -> Self {
        Self(DEFAULT_TIMEOUT_ON_REMOVE_MS)
    }
}

// =============================================================================
// Tests
// =============================================================================
