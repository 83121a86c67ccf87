// SPDX-License-Identifier: MPL-2.0
//! `toaster` shows transient notifications ("toasts") inside a host document.
//!
//! Toasts auto-close after a configurable duration, pause while hovered, can
//! carry one action button, and leave the document after a short closing
//! transition. Only one toast is visible per screen position unless asked
//! otherwise.
//!
//! The host document is reached through [`document::Document`];
//! [`document::MemoryDocument`] is a ready-made in-memory implementation.

#![doc(html_root_url = "https://docs.rs/toaster/0.1.0")]

pub mod config;
pub mod diagnostics;
pub mod document;
pub mod domain;
pub mod error;
pub mod notifications;

pub use document::{Document, MemoryDocument, NodeId};
pub use notifications::{
    OptionsSource, PartialOptions, PointerEvent, ToastAction, ToastId, ToastState, Toaster,
};
