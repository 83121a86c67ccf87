// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for toast lifecycle events.
//!
//! Producers hold a [`DiagnosticsHandle`] and push events through a bounded
//! channel; the owner of the [`DiagnosticsCollector`] drains the channel into
//! a ring buffer whenever convenient.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use crate::config::Config;

use super::{
    BufferCapacity, CircularBuffer, DiagnosticReport, ReportMetadata, SerializableEvent,
    ToastEvent, ToastEventKind,
};

/// Channel slots between handles and the collector.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Cheap, cloneable sender of diagnostic events.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<ToastEvent>,
}

impl DiagnosticsHandle {
    /// Records an event. Never blocks; the event is dropped if the channel
    /// is full or the collector is gone.
    pub fn log(&self, kind: ToastEventKind) {
        let _ = self.event_tx.try_send(ToastEvent::new(kind));
    }

    /// Records an event stamped with `timestamp` instead of the current time.
    pub fn log_at(&self, timestamp: Instant, kind: ToastEventKind) {
        let _ = self.event_tx.try_send(ToastEvent::at(timestamp, kind));
    }

    /// Like [`log`](Self::log) but reports whether the event was accepted.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` if the channel buffer is full, or
    /// `TrySendError::Disconnected` if the collector has been dropped.
    pub fn try_log(&self, kind: ToastEventKind) -> Result<(), TrySendError<ToastEvent>> {
        self.event_tx.try_send(ToastEvent::new(kind))
    }
}

/// Stores diagnostic events in a memory-bounded ring buffer.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<ToastEvent>,
    event_rx: Receiver<ToastEvent>,
    event_tx: Sender<ToastEvent>,
    /// Monotonic start, for event offsets.
    collection_started_at: Instant,
    /// Wall-clock start, for report metadata.
    collection_started_at_utc: DateTime<Utc>,
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    /// Creates a collector sized by `diagnostics_capacity` from `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.buffer_capacity())
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every pending event from the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Records an event directly, bypassing the channel.
    pub fn log(&mut self, kind: ToastEventKind) {
        self.buffer.push(ToastEvent::new(kind));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ToastEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Events evicted from the buffer since the last [`clear`](Self::clear).
    #[must_use]
    pub fn evicted(&self) -> u64 {
        self.buffer.evicted()
    }

    #[must_use]
    pub fn collection_duration(&self) -> Duration {
        self.collection_started_at.elapsed()
    }

    /// Exports the stored events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    fn build_report(&self) -> DiagnosticReport {
        let collection_duration_ms = self.collection_started_at.elapsed().as_millis() as u64;
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at,
                    event.kind.clone(),
                )
            })
            .collect();
        let metadata = ReportMetadata::new(
            self.collection_started_at_utc,
            collection_duration_ms,
            events.len(),
            self.buffer.evicted(),
        );
        DiagnosticReport::new(metadata, events)
    }
}
