// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle events captured for diagnostics.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::domain::toast::Position;
use crate::notifications::ToastId;

/// Why a toast entered its closing transition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    /// The auto-close timer fired.
    Timeout,
    /// The user clicked the close button.
    CloseButton,
    /// The user clicked the action button.
    Action,
    /// Another toast cleared its position before being shown.
    Cleared,
    /// The host called `close` directly.
    Programmatic,
}

/// What happened to a toast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ToastEventKind {
    /// A toast was attached to its container.
    Shown {
        toast: ToastId,
        position: Position,
        /// Length of the message in characters (the text itself is not kept).
        content_chars: usize,
    },
    /// Pointer entered the toast; auto-close suspended.
    Paused { toast: ToastId },
    /// Pointer left the toast; auto-close re-armed with a full duration.
    Resumed { toast: ToastId },
    /// The action button callback ran.
    ActionInvoked { toast: ToastId, label: String },
    /// Closing transition started.
    Closing { toast: ToastId, reason: CloseReason },
    /// The toast left the document and was dropped.
    Detached { toast: ToastId },
    /// A position was cleared before showing a new toast.
    Cleared { position: Position, count: usize },
}

/// A captured event with its monotonic timestamp.
#[derive(Debug, Clone)]
pub struct ToastEvent {
    pub timestamp: Instant,
    pub kind: ToastEventKind,
}

impl ToastEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(kind: ToastEventKind) -> Self {
        Self::at(Instant::now(), kind)
    }

    /// Creates an event stamped with a caller-supplied time, typically the
    /// deadline that triggered it.
    #[must_use]
    pub fn at(timestamp: Instant, kind: ToastEventKind) -> Self {
        Self { timestamp, kind }
    }
}
