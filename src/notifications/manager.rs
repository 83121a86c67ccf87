// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The [`Toaster`] owns the document, the container registry, the live
//! toasts and the listener table that maps interactive nodes back to their
//! toast. Hosts feed it pointer events and periodic ticks; it turns them
//! into pause/resume, closing transitions and detachment.

use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

use super::clock::{Clock, SystemClock};
use super::container::ContainerRegistry;
use super::options::{OptionsSource, Presets, ToastOptions};
use super::styles::ClassNames;
use super::toast::{Control, Due, Toast, ToastAction, ToastId, ToastState};
use crate::config::defaults::ERROR_PRESET;
use crate::config::Config;
use crate::diagnostics::{CloseReason, DiagnosticsHandle, ToastEventKind};
use crate::document::{Document, NodeId};
use crate::domain::toast::Position;

/// Pointer interaction delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Click,
    /// Pointer entered the node (`mouseenter`).
    Enter,
    /// Pointer left the node (`mouseleave`).
    Leave,
}

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// A pointer event on a document node.
    Pointer(NodeId, PointerEvent),
    /// Close a specific toast.
    Close(ToastId),
    /// Close every toast at a position.
    ClearAll(Position),
    /// Fire due timers.
    Tick,
}

#[derive(Debug, Clone, Copy)]
struct Listener {
    toast: ToastId,
    control: Control,
}

/// Creates, tracks and retires toasts inside a [`Document`].
pub struct Toaster<D: Document> {
    document: D,
    classes: ClassNames,
    base: ToastOptions,
    presets: Presets,
    containers: ContainerRegistry,
    toasts: BTreeMap<ToastId, Toast>,
    listeners: HashMap<NodeId, Listener>,
    clock: Box<dyn Clock>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<D: Document> Toaster<D> {
    /// Creates a manager with default options, the built-in presets and the
    /// system clock.
    pub fn new(document: D) -> Self {
        Self {
            document,
            classes: ClassNames::default(),
            base: ToastOptions::default(),
            presets: Presets::builtin(),
            containers: ContainerRegistry::new(),
            toasts: BTreeMap::new(),
            listeners: HashMap::new(),
            clock: Box::new(SystemClock),
            diagnostics: None,
        }
    }

    /// Creates a manager whose base options, presets and class names come
    /// from `config`.
    pub fn from_config(document: D, config: &Config) -> Self {
        let mut toaster = Self::new(document);
        toaster.base = ToastOptions::default().merged(&config.defaults);
        toaster
            .presets
            .extend(config.presets.iter().map(|(k, v)| (k.clone(), v.clone())));
        toaster.classes = config.classes.clone();
        toaster
    }

    /// Replaces the time source.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Sets the diagnostics handle for recording lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn classes(&self) -> &ClassNames {
        &self.classes
    }

    pub fn presets(&self) -> &Presets {
        &self.presets
    }

    pub fn presets_mut(&mut self) -> &mut Presets {
        &mut self.presets
    }

    /// Options every source is resolved on top of.
    pub fn base_options(&self) -> &ToastOptions {
        &self.base
    }

    /// Shows a new toast and returns its handle.
    ///
    /// Unless the resolved options set `show_all`, every toast already at the
    /// same position is closed first.
    pub fn show(
        &mut self,
        content: impl Into<String>,
        source: impl Into<OptionsSource>,
        action: Option<ToastAction>,
    ) -> ToastId {
        let options = self.presets.resolve(&self.base, &source.into());
        let position = options.position;

        if !options.show_all {
            self.remove_all(position);
        }

        let toast = Toast::build(
            &mut self.document,
            &self.classes,
            options,
            content.into(),
            action,
        );
        let id = toast.id();
        let container = self
            .containers
            .get_container(&mut self.document, &self.classes, position);
        self.document.append_child(container, toast.root());

        for (node, control) in toast.controls() {
            self.listeners.insert(node, Listener { toast: id, control });
        }
        let content_chars = toast.content().chars().count();
        self.toasts.insert(id, toast);

        let now = self.clock.now();
        self.log(
            now,
            ToastEventKind::Shown {
                toast: id,
                position,
                content_chars,
            },
        );
        self.start_timer(id);
        id
    }

    /// Shows a toast with the default preset.
    pub fn notify(&mut self, content: impl Into<String>) -> ToastId {
        self.show(content, OptionsSource::Default, None)
    }

    /// Shows a toast with the error preset.
    pub fn error(&mut self, content: impl Into<String>) -> ToastId {
        self.show(content, ERROR_PRESET, None)
    }

    /// Starts the closing transition of a toast.
    ///
    /// Returns `true` if the toast was displayed and is now closing. Closing
    /// an already closing or removed toast does nothing.
    pub fn close(&mut self, id: ToastId) -> bool {
        let now = self.clock.now();
        self.close_at(id, now, CloseReason::Programmatic)
    }

    /// Clicks every close button inside the container of `position`.
    ///
    /// Returns how many toasts entered their closing transition.
    pub fn remove_all(&mut self, position: Position) -> usize {
        let container = self
            .containers
            .get_container(&mut self.document, &self.classes, position);
        let close_buttons = self.document.find_by_class(container, &self.classes.close);

        let now = self.clock.now();
        let mut count = 0;
        for node in close_buttons {
            if let Some(listener) = self.listeners.get(&node).copied() {
                if self.close_at(listener.toast, now, CloseReason::Cleared) {
                    count += 1;
                }
            }
        }

        if count > 0 {
            self.log(now, ToastEventKind::Cleared { position, count });
        }
        count
    }

    /// Routes a pointer event on `node` to the toast it belongs to.
    ///
    /// Returns `false` if no toast listens on that node.
    pub fn dispatch(&mut self, node: NodeId, event: PointerEvent) -> bool {
        let Some(listener) = self.listeners.get(&node).copied() else {
            return false;
        };
        let id = listener.toast;
        let now = self.clock.now();

        match (listener.control, event) {
            (Control::Root, PointerEvent::Enter) => {
                let stopped = self.toasts.get_mut(&id).is_some_and(Toast::stop_timer);
                if stopped {
                    self.log(now, ToastEventKind::Paused { toast: id });
                }
            }
            (Control::Root, PointerEvent::Leave) => {
                if self.start_timer(id) {
                    self.log(now, ToastEventKind::Resumed { toast: id });
                }
            }
            (Control::Close, PointerEvent::Click) => {
                self.close_at(id, now, CloseReason::CloseButton);
            }
            (Control::Action, PointerEvent::Click) => {
                let label = self.toasts.get_mut(&id).and_then(|toast| {
                    toast
                        .invoke_action()
                        .then(|| toast.action_label().unwrap_or_default().to_string())
                });
                if let Some(label) = label {
                    self.log(now, ToastEventKind::ActionInvoked { toast: id, label });
                }
                self.close_at(id, now, CloseReason::Action);
            }
            _ => return false,
        }
        true
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Pointer(node, event) => {
                self.dispatch(*node, *event);
            }
            Message::Close(id) => {
                self.close(*id);
            }
            Message::ClearAll(position) => {
                self.remove_all(*position);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Fires every timer that is due, in deadline order.
    ///
    /// A fired auto-close schedules its detach relative to its own deadline,
    /// not to the time of the tick, so a late tick still detaches on time.
    /// Returns the number of timers fired.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;
        while let Some((id, due)) = self.earliest_due(now) {
            match due {
                Due::AutoClose(at) => {
                    self.close_at(id, at, CloseReason::Timeout);
                }
                Due::Detach(at) => self.detach(id, at),
            }
            fired += 1;
        }
        fired
    }

    /// The earliest pending deadline across all toasts, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.toasts
            .values()
            .filter_map(Toast::pending)
            .map(Due::at)
            .min()
    }

    /// Lifecycle state of a toast. Unknown ids report [`ToastState::Removed`].
    pub fn state(&self, id: ToastId) -> ToastState {
        self.toasts.get(&id).map_or(ToastState::Removed, Toast::state)
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.get(&id)
    }

    /// Live toasts (displayed, paused or closing), oldest first.
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.values()
    }

    /// Number of toasts at `position` that are not closing.
    pub fn visible_count(&self, position: Position) -> usize {
        self.toasts
            .values()
            .filter(|t| t.options().position == position)
            .filter(|t| t.state() != ToastState::Closing)
            .count()
    }

    /// Number of live toasts, closing ones included.
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Container node for `position`, created on demand.
    pub fn container(&mut self, position: Position) -> NodeId {
        self.containers
            .get_container(&mut self.document, &self.classes, position)
    }

    fn start_timer(&mut self, id: ToastId) -> bool {
        let now = self.clock.now();
        self.toasts
            .get_mut(&id)
            .is_some_and(|toast| toast.start_timer(now))
    }

    fn close_at(&mut self, id: ToastId, at: Instant, reason: CloseReason) -> bool {
        let Some(toast) = self.toasts.get_mut(&id) else {
            return false;
        };
        let started = toast.begin_close(&mut self.document, &self.classes, at);
        if started {
            self.log(at, ToastEventKind::Closing { toast: id, reason });
        }
        started
    }

    fn detach(&mut self, id: ToastId, at: Instant) {
        let Some(toast) = self.toasts.remove(&id) else {
            return;
        };
        toast.detach(&mut self.document);
        for (node, _) in toast.controls() {
            self.listeners.remove(&node);
        }
        self.log(at, ToastEventKind::Detached { toast: id });
    }

    // Ties go to the lower id, i.e. the older toast.
    fn earliest_due(&self, now: Instant) -> Option<(ToastId, Due)> {
        self.toasts
            .iter()
            .filter_map(|(&id, toast)| toast.pending().map(|due| (id, due)))
            .filter(|(_, due)| due.at() <= now)
            .min_by_key(|&(id, due)| (due.at(), id))
    }

    // Timestamps come from the manager's clock, not the wall clock.
    fn log(&self, at: Instant, kind: ToastEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log_at(at, kind);
        }
    }
}

impl<D: Document + Default> Default for Toaster<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticsCollector;
    use crate::document::MemoryDocument;
    use crate::notifications::clock::ManualClock;
    use crate::notifications::options::PartialOptions;
    use std::time::Duration;

    fn toaster() -> (Toaster<MemoryDocument>, ManualClock) {
        let clock = ManualClock::new();
        let toaster = Toaster::new(MemoryDocument::new()).with_clock(clock.clone());
        (toaster, clock)
    }

    #[test]
    fn new_manager_is_empty() {
        let (toaster, _) = toaster();
        assert!(toaster.is_empty());
        assert_eq!(toaster.next_deadline(), None);
        assert_eq!(toaster.visible_count(Position::Top), 0);
    }

    #[test]
    fn show_attaches_to_container_and_arms_timer() {
        let (mut toaster, clock) = toaster();
        let id = toaster.notify("Saved");
        let container = toaster.container(Position::Top);
        let root = toaster.get(id).expect("live toast").root();

        assert_eq!(toaster.document().children(container), &[root]);
        assert_eq!(toaster.state(id), ToastState::Displayed);
        assert_eq!(
            toaster.next_deadline(),
            Some(clock.now() + toaster.base_options().duration.as_duration())
        );
    }

    #[test]
    fn close_twice_schedules_one_detach() {
        let (mut toaster, clock) = toaster();
        let id = toaster.notify("Saved");

        assert!(toaster.close(id));
        clock.advance_ms(10);
        assert!(!toaster.close(id));

        let delay = toaster.base_options().timeout_on_remove.as_duration();
        assert_eq!(toaster.tick(), 0);
        clock.advance(delay);
        assert_eq!(toaster.tick(), 1);
        assert_eq!(toaster.state(id), ToastState::Removed);
        assert!(!toaster.close(id));
    }

    #[test]
    fn hover_pauses_and_leave_rearms_full_duration() {
        let (mut toaster, clock) = toaster();
        let id = toaster.notify("Saved");
        let root = toaster.get(id).expect("live toast").root();
        let duration = toaster.base_options().duration.as_duration();

        clock.advance(duration / 2);
        assert!(toaster.dispatch(root, PointerEvent::Enter));
        assert_eq!(toaster.state(id), ToastState::Paused);

        clock.advance(duration * 10);
        assert_eq!(toaster.tick(), 0);
        assert_eq!(toaster.state(id), ToastState::Paused);

        toaster.dispatch(root, PointerEvent::Leave);
        assert_eq!(toaster.next_deadline(), Some(clock.now() + duration));
    }

    #[test]
    fn leave_after_close_does_not_revive() {
        let (mut toaster, clock) = toaster();
        let id = toaster.notify("Saved");
        let root = toaster.get(id).expect("live toast").root();

        toaster.close(id);
        toaster.dispatch(root, PointerEvent::Leave);
        assert_eq!(toaster.state(id), ToastState::Closing);

        clock.advance(toaster.base_options().timeout_on_remove.as_duration());
        toaster.tick();
        assert!(!toaster.document().is_connected(root));
        assert!(!toaster.dispatch(root, PointerEvent::Leave));
    }

    #[test]
    fn late_tick_fires_close_and_detach_together() {
        let (mut toaster, clock) = toaster();
        let id = toaster.notify("Saved");
        let options = toaster.base_options().clone();

        clock.advance(options.duration.as_duration() + options.timeout_on_remove.as_duration());
        assert_eq!(toaster.tick(), 2);
        assert_eq!(toaster.state(id), ToastState::Removed);
    }

    #[test]
    fn show_all_keeps_previous_toasts() {
        let (mut toaster, _) = toaster();
        let first = toaster.notify("first");
        let second = toaster.show(
            "second",
            PartialOptions::new().with_show_all(true),
            None,
        );

        assert_eq!(toaster.state(first), ToastState::Displayed);
        assert_eq!(toaster.state(second), ToastState::Displayed);
        assert_eq!(toaster.visible_count(Position::Top), 2);

        toaster.notify("third");
        assert_eq!(toaster.visible_count(Position::Top), 1);
        assert_eq!(toaster.state(first), ToastState::Closing);
        assert_eq!(toaster.state(second), ToastState::Closing);
    }

    #[test]
    fn positions_are_cleared_independently() {
        let (mut toaster, _) = toaster();
        let top = toaster.notify("top");
        let bottom = toaster.show(
            "bottom",
            PartialOptions::new().with_position(Position::Bottom),
            None,
        );

        assert_eq!(toaster.state(top), ToastState::Displayed);
        assert_eq!(toaster.state(bottom), ToastState::Displayed);
        assert_eq!(toaster.remove_all(Position::Bottom), 1);
        assert_eq!(toaster.state(top), ToastState::Displayed);
    }

    #[test]
    fn dispatch_on_unknown_node_is_ignored() {
        let (mut toaster, _) = toaster();
        let id = toaster.notify("Saved");
        let message = toaster.get(id).expect("live toast").message_node();

        assert!(!toaster.dispatch(message, PointerEvent::Click));
        let body = toaster.document().body();
        assert!(!toaster.dispatch(body, PointerEvent::Enter));
        assert_eq!(toaster.state(id), ToastState::Displayed);
    }

    #[test]
    fn handle_message_routes_to_operations() {
        let (mut toaster, clock) = toaster();
        let id = toaster.notify("Saved");

        toaster.handle_message(&Message::Close(id));
        assert_eq!(toaster.state(id), ToastState::Closing);

        clock.advance(toaster.base_options().timeout_on_remove.as_duration());
        toaster.handle_message(&Message::Tick);
        assert_eq!(toaster.state(id), ToastState::Removed);

        let other = toaster.notify("again");
        toaster.handle_message(&Message::ClearAll(Position::Top));
        assert_eq!(toaster.state(other), ToastState::Closing);
    }

    #[test]
    fn lifecycle_is_reported_to_diagnostics() {
        let (mut toaster, clock) = toaster();
        let mut collector = DiagnosticsCollector::default();
        toaster.set_diagnostics(collector.handle());

        let id = toaster.notify("Saved");
        clock.advance(toaster.base_options().duration.as_duration());
        toaster.tick();
        clock.advance(toaster.base_options().timeout_on_remove.as_duration());
        toaster.tick();

        collector.process_pending();
        let kinds: Vec<_> = collector.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                ToastEventKind::Shown {
                    toast: id,
                    position: Position::Top,
                    content_chars: 5,
                },
                ToastEventKind::Closing {
                    toast: id,
                    reason: CloseReason::Timeout,
                },
                ToastEventKind::Detached { toast: id },
            ]
        );
    }

    #[test]
    fn event_timestamps_follow_manager_clock() {
        let (mut toaster, clock) = toaster();
        let mut collector = DiagnosticsCollector::default();
        toaster.set_diagnostics(collector.handle());
        let shown_at = clock.now();

        toaster.notify("Saved");
        clock.advance_ms(5_000);
        toaster.tick();
        clock.advance_ms(1_000);
        toaster.tick();

        collector.process_pending();
        let offsets: Vec<_> = collector
            .iter()
            .map(|e| e.timestamp.duration_since(shown_at).as_millis())
            .collect();
        assert_eq!(offsets, vec![0, 5_000, 6_000]);
    }

    #[test]
    fn late_tick_stamps_events_at_their_deadlines() {
        let (mut toaster, clock) = toaster();
        let mut collector = DiagnosticsCollector::default();
        toaster.set_diagnostics(collector.handle());
        let shown_at = clock.now();

        toaster.notify("Saved");
        clock.advance_ms(60_000);
        toaster.tick();

        collector.process_pending();
        let offsets: Vec<_> = collector
            .iter()
            .map(|e| e.timestamp.duration_since(shown_at).as_millis())
            .collect();
        assert_eq!(offsets, vec![0, 5_000, 6_000]);
    }

    #[test]
    fn action_clicks_during_closing_run_callback_once() {
        let (mut toaster, _) = toaster();
        let calls = std::rc::Rc::new(std::cell::Cell::new(0));
        let counter = std::rc::Rc::clone(&calls);
        let undo = ToastAction::new("Undo", move || counter.set(counter.get() + 1));
        let id = toaster.show("Item deleted", "notify", Some(undo));
        let button = toaster
            .get(id)
            .and_then(Toast::action_button)
            .expect("action button");

        toaster.dispatch(button, PointerEvent::Click);
        toaster.dispatch(button, PointerEvent::Click);
        assert_eq!(calls.get(), 1);
        assert_eq!(toaster.state(id), ToastState::Closing);
    }

    #[test]
    fn detached_toasts_release_their_nodes() {
        let (mut toaster, clock) = toaster();
        toaster.container(Position::Top);
        let baseline = toaster.document().node_count();

        for _ in 0..1000 {
            toaster.notify("x");
            clock.advance_ms(10_000);
            toaster.tick();
        }

        assert!(toaster.is_empty());
        assert_eq!(toaster.document().node_count(), baseline);
        assert!(toaster.document().slot_count() <= baseline + 3);
    }

    #[test]
    fn from_config_applies_defaults_presets_and_classes() {
        let mut config = Config::default();
        config.defaults = PartialOptions::new().with_duration_ms(1234);
        config
            .presets
            .insert("saved".to_string(), PartialOptions::new().with_toast_class("ok"));
        config.classes.toast = "snack".to_string();

        let mut toaster = Toaster::from_config(MemoryDocument::new(), &config)
            .with_clock(ManualClock::new());
        let id = toaster.show("Saved", "saved", None);
        let toast = toaster.get(id).expect("live toast");

        assert_eq!(toast.options().duration.as_millis(), 1234);
        assert_eq!(toast.options().toast_class.as_deref(), Some("ok"));
        assert!(toaster.document().has_class(toast.root(), "snack"));
        assert!(toaster.presets().get("error").is_some());
    }

    #[test]
    fn error_preset_uses_longer_duration() {
        let (mut toaster, clock) = toaster();
        let id = toaster.error("Failed");
        let error_ms = toaster.get(id).expect("live toast").options().duration.as_millis();
        let base_ms = toaster.base_options().duration.as_millis();

        assert!(error_ms > base_ms);
        clock.advance_ms(base_ms);
        toaster.tick();
        assert_eq!(toaster.state(id), ToastState::Displayed);
        clock.advance(Duration::from_millis(error_ms - base_ms));
        toaster.tick();
        assert_eq!(toaster.state(id), ToastState::Closing);
    }
}
