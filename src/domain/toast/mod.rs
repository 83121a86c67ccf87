// SPDX-License-Identifier: MPL-2.0
//! Toast domain types.
//!
//! Value objects used by the options model, independent of any document
//! backend.

pub mod newtypes;

pub use newtypes::{Position, RemovalDelay, ShowDuration};
