// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the toast lifecycle.
//!
//! Every lifecycle step of a toast (shown, paused, resumed, closing,
//! detached, position cleared) can be captured as a [`ToastEvent`] and kept
//! in a memory-bounded ring buffer, then exported as a JSON report.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticsCollector`]: Owns the buffer and drains the event channel
//! - [`DiagnosticsHandle`]: Non-blocking sender handed to the [`Toaster`](crate::notifications::Toaster)
//!
//! Message text is never recorded, only its length.

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{CloseReason, ToastEvent, ToastEventKind};
pub use report::{DiagnosticReport, ReportMetadata, SerializableEvent};
