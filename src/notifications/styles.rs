// SPDX-License-Identifier: MPL-2.0
//! Styling contract.
//!
//! The core never styles anything itself; it only toggles class names that
//! an external stylesheet gives meaning to. Every identifier it references
//! lives in [`ClassNames`] so hosts can rename them from configuration.

use serde::{Deserialize, Serialize};

/// Stable class identifiers referenced by the toast core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    /// Outer container, one per position.
    pub container: String,
    /// Modifier added to the bottom container.
    pub container_bottom: String,
    /// Toast root element.
    pub toast: String,
    /// Modifier added to toasts rendered at the bottom.
    pub toast_bottom: String,
    pub message: String,
    pub action: String,
    pub close: String,
    /// Shared by the action and close buttons.
    pub button: String,
    /// Applied to the close button of non-closeable toasts.
    pub hidden: String,
    /// Applied to the root once the closing transition starts.
    pub remove: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            container: "toast-container".to_string(),
            container_bottom: "toast-container--bottom".to_string(),
            toast: "toast".to_string(),
            toast_bottom: "toast--bottom".to_string(),
            message: "toast__message".to_string(),
            action: "toast__action".to_string(),
            close: "toast__close".to_string(),
            button: "toast__button".to_string(),
            hidden: "toast--hidden".to_string(),
            remove: "toast--removing".to_string(),
        }
    }
}
