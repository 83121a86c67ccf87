// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Toasts are small transient panels that inform users about an action
//! (saved, failed, undo available) without blocking interaction. Each one
//! closes itself after a while, pauses while hovered, and can carry one
//! action button next to its close button.
//!
//! # Components
//!
//! - [`manager`] - [`Toaster`], lifecycle management and event routing
//! - [`toast`] - a single toast, its subtree and its state machine
//! - [`container`] - one container node per screen position
//! - [`options`] - resolved options, partial overlays and presets
//! - [`styles`] - the class names the stylesheet must define
//! - [`clock`] - time source driving the timers
//!
//! # Usage
//!
//! ```
//! use toaster::document::MemoryDocument;
//! use toaster::notifications::{PointerEvent, ToastAction, ToastState, Toaster};
//!
//! let mut toaster = Toaster::new(MemoryDocument::new());
//! let id = toaster.show("Item deleted", "notify", Some(ToastAction::new("Undo", || {})));
//!
//! let undo = toaster.get(id).and_then(|t| t.action_button()).unwrap();
//! toaster.dispatch(undo, PointerEvent::Click);
//! assert_eq!(toaster.state(id), ToastState::Closing);
//!
//! // Drive timers from the host loop.
//! toaster.tick();
//! ```
//!
//! # Design Considerations
//!
//! - Only one toast is visible per position: showing a new one closes the
//!   others unless its options set `show_all`.
//! - Closing is a two step affair: a class marks the transition, then the
//!   node is detached after `timeout_on_remove`.

pub mod clock;
pub mod container;
pub mod manager;
pub mod options;
pub mod styles;
pub mod toast;

pub use clock::{Clock, ManualClock, SystemClock};
pub use container::ContainerRegistry;
pub use manager::{Message as ToastMessage, PointerEvent, Toaster};
pub use options::{OptionsSource, PartialOptions, Presets, ToastOptions};
pub use styles::ClassNames;
pub use toast::{Toast, ToastAction, ToastId, ToastState};
