// SPDX-License-Identifier: MPL-2.0
//! A single toast: its node subtree, its action and its lifecycle phase.
//!
//! The lifecycle is `Displayed -> Closing -> Removed`. While displayed, the
//! toast holds at most one auto-close deadline (absent while paused). Once
//! closing it holds exactly one detach deadline and ignores timer restarts.
//! "Removed" has no representation here: the manager drops the instance
//! after detaching it, so a stale [`ToastId`] simply stops matching.

use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::options::ToastOptions;
use super::styles::ClassNames;
use crate::document::{Document, NodeId};

/// Title of the close button.
const CLOSE_TITLE: &str = "Close";

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast#{}", self.0)
    }
}

/// Custom button shown next to the message.
///
/// Clicking it runs the callback, then closes the toast. Clicks that land
/// while the toast is already closing do not run the callback again.
pub struct ToastAction {
    label: String,
    class: Option<String>,
    callback: Box<dyn FnMut()>,
}

impl ToastAction {
    pub fn new(label: impl Into<String>, callback: impl FnMut() + 'static) -> Self {
        Self {
            label: label.into(),
            class: None,
            callback: Box::new(callback),
        }
    }

    /// Adds an extra class to the action button.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    fn invoke(&mut self) {
        (self.callback)();
    }
}

impl fmt::Debug for ToastAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastAction")
            .field("label", &self.label)
            .field("class", &self.class)
            .finish_non_exhaustive()
    }
}

/// Externally observable lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastState {
    /// Visible with a running auto-close timer.
    Displayed,
    /// Visible, auto-close suspended (pointer hovering).
    Paused,
    /// Closing transition running; detachment is scheduled.
    Closing,
    /// Detached and dropped. Also reported for unknown ids.
    Removed,
}

/// Which part of a toast a node is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Control {
    Root,
    Action,
    Close,
}

/// A deadline that has come due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Due {
    AutoClose(Instant),
    Detach(Instant),
}

impl Due {
    pub(crate) fn at(self) -> Instant {
        match self {
            Due::AutoClose(at) | Due::Detach(at) => at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Displayed { auto_close: Option<Instant> },
    Closing { detach_at: Instant },
}

#[derive(Debug, Clone, Copy)]
struct Nodes {
    root: NodeId,
    message: NodeId,
    action: Option<NodeId>,
    close: NodeId,
}

/// A live toast owned by the [`Toaster`](super::Toaster).
#[derive(Debug)]
pub struct Toast {
    id: ToastId,
    options: ToastOptions,
    content: String,
    nodes: Nodes,
    action: Option<ToastAction>,
    phase: Phase,
}

impl Toast {
    /// Builds the toast subtree. The root is left detached; the caller
    /// appends it to a container.
    pub(crate) fn build<D: Document>(
        document: &mut D,
        classes: &ClassNames,
        options: ToastOptions,
        content: String,
        action: Option<ToastAction>,
    ) -> Self {
        let root = document.create_element("div");
        document.add_class(root, &classes.toast);
        if let Some(class) = &options.toast_class {
            document.add_class(root, class);
        }
        if options.position.is_bottom() {
            document.add_class(root, &classes.toast_bottom);
        }
        document.set_title(root, &content);

        let message = document.create_element("div");
        document.add_class(message, &classes.message);
        document.set_text(message, &content);
        document.set_title(message, &content);
        document.append_child(root, message);

        let action_node = action.as_ref().map(|action| {
            let node = document.create_element("button");
            document.add_class(node, &classes.action);
            document.add_class(node, &classes.button);
            if let Some(class) = action.class() {
                document.add_class(node, class);
            }
            document.set_text(node, action.label());
            document.set_title(node, action.label());
            document.append_child(root, node);
            node
        });

        let close = document.create_element("button");
        document.add_class(close, &classes.close);
        document.add_class(close, &classes.button);
        if !options.closeable {
            document.add_class(close, &classes.hidden);
        }
        document.set_title(close, CLOSE_TITLE);
        document.append_child(root, close);

        Self {
            id: ToastId::new(),
            options,
            content,
            nodes: Nodes {
                root,
                message,
                action: action_node,
                close,
            },
            action,
            phase: Phase::Displayed { auto_close: None },
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn options(&self) -> &ToastOptions {
        &self.options
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.nodes.root
    }

    #[must_use]
    pub fn message_node(&self) -> NodeId {
        self.nodes.message
    }

    #[must_use]
    pub fn action_button(&self) -> Option<NodeId> {
        self.nodes.action
    }

    #[must_use]
    pub fn close_button(&self) -> NodeId {
        self.nodes.close
    }

    #[must_use]
    pub fn state(&self) -> ToastState {
        match self.phase {
            Phase::Displayed {
                auto_close: Some(_),
            } => ToastState::Displayed,
            Phase::Displayed { auto_close: None } => ToastState::Paused,
            Phase::Closing { .. } => ToastState::Closing,
        }
    }

    /// Nodes that carry listeners, with their role.
    pub(crate) fn controls(&self) -> impl Iterator<Item = (NodeId, Control)> {
        let nodes = self.nodes;
        [
            Some((nodes.root, Control::Root)),
            nodes.action.map(|node| (node, Control::Action)),
            Some((nodes.close, Control::Close)),
        ]
        .into_iter()
        .flatten()
    }

    /// (Re)arms the auto-close timer, replacing any pending one.
    ///
    /// Returns `false` once closing has begun; a closing toast is never
    /// brought back.
    pub(crate) fn start_timer(&mut self, now: Instant) -> bool {
        self.stop_timer();
        match &mut self.phase {
            Phase::Displayed { auto_close } => {
                *auto_close = Some(now + self.options.duration.as_duration());
                true
            }
            Phase::Closing { .. } => false,
        }
    }

    /// Cancels the pending auto-close timer. Returns whether one was pending.
    pub(crate) fn stop_timer(&mut self) -> bool {
        match &mut self.phase {
            Phase::Displayed { auto_close } => auto_close.take().is_some(),
            Phase::Closing { .. } => false,
        }
    }

    /// Starts the closing transition.
    ///
    /// Returns `false` if the toast was already closing, in which case
    /// nothing is rescheduled.
    pub(crate) fn begin_close<D: Document>(
        &mut self,
        document: &mut D,
        classes: &ClassNames,
        now: Instant,
    ) -> bool {
        self.stop_timer();
        if matches!(self.phase, Phase::Closing { .. }) {
            return false;
        }

        document.add_class(self.nodes.root, &classes.remove);
        if let Some(class) = &self.options.removed_toast_class {
            document.add_class(self.nodes.root, class);
        }
        self.phase = Phase::Closing {
            detach_at: now + self.options.timeout_on_remove.as_duration(),
        };
        true
    }

    /// Removes the root from the document and frees its subtree. The node
    /// ids held by this toast are stale afterwards.
    pub(crate) fn detach<D: Document>(&self, document: &mut D) {
        document.release(self.nodes.root);
    }

    /// Runs the action callback. Returns `false` if the toast has none or is
    /// already closing.
    pub(crate) fn invoke_action(&mut self) -> bool {
        if matches!(self.phase, Phase::Closing { .. }) {
            return false;
        }
        match &mut self.action {
            Some(action) => {
                action.invoke();
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub(crate) fn action_label(&self) -> Option<&str> {
        self.action.as_ref().map(ToastAction::label)
    }

    /// The pending deadline, whichever kind it is.
    pub(crate) fn pending(&self) -> Option<Due> {
        match self.phase {
            Phase::Displayed { auto_close } => auto_close.map(Due::AutoClose),
            Phase::Closing { detach_at } => Some(Due::Detach(detach_at)),
        }
    }
}
