// SPDX-License-Identifier: MPL-2.0
use std::cell::Cell;
use std::rc::Rc;

use tempfile::tempdir;
use toaster::config::{self, Config};
use toaster::diagnostics::{CloseReason, DiagnosticsCollector, ToastEventKind};
use toaster::document::{Document, MemoryDocument};
use toaster::domain::toast::Position;
use toaster::notifications::{
    ManualClock, PartialOptions, PointerEvent, ToastAction, ToastState, Toaster,
};

fn setup() -> (Toaster<MemoryDocument>, ManualClock) {
    let clock = ManualClock::new();
    let toaster = Toaster::new(MemoryDocument::new()).with_clock(clock.clone());
    (toaster, clock)
}

#[test]
fn container_lookup_returns_same_node() {
    let (mut toaster, _) = setup();
    for position in [Position::Top, Position::Bottom] {
        let first = toaster.container(position);
        let second = toaster.container(position);
        assert_eq!(first, second);
    }
    let body = toaster.document().body();
    assert_eq!(toaster.document().children(body).len(), 2);
}

#[test]
fn saved_toast_closes_then_detaches() {
    let (mut toaster, clock) = setup();
    let id = toaster.notify("Saved");
    let options = toaster.base_options().clone();
    let classes = toaster.classes().clone();

    let container = toaster.container(Position::Top);
    let root = toaster.get(id).expect("live toast").root();
    let doc = toaster.document();
    assert_eq!(doc.children(container), &[root]);
    let message = doc.children(root)[0];
    assert_eq!(doc.text(message), Some("Saved"));
    assert_eq!(doc.title(message), Some("Saved"));

    clock.advance(options.duration.as_duration());
    toaster.tick();
    assert!(toaster.document().has_class(root, &classes.remove));
    assert!(toaster.document().is_connected(root));

    clock.advance(options.timeout_on_remove.as_duration());
    toaster.tick();
    assert!(!toaster.document().is_connected(root));
    assert!(toaster.document().children(container).is_empty());
    assert_eq!(toaster.state(id), ToastState::Removed);
}

#[test]
fn action_runs_once_then_closes() {
    let (mut toaster, _) = setup();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let undo = ToastAction::new("Undo", move || counter.set(counter.get() + 1));

    let id = toaster.show("Item deleted", "notify", Some(undo));
    let button = toaster
        .get(id)
        .and_then(|toast| toast.action_button())
        .expect("action button");

    assert!(toaster.dispatch(button, PointerEvent::Click));
    assert_eq!(calls.get(), 1);
    assert_eq!(toaster.state(id), ToastState::Closing);
}

#[test]
fn second_toast_replaces_first() {
    let (mut toaster, clock) = setup();
    let first = toaster.notify("first");
    let second = toaster.notify("second");

    assert_eq!(toaster.visible_count(Position::Top), 1);
    assert_eq!(toaster.state(first), ToastState::Closing);
    assert_eq!(toaster.state(second), ToastState::Displayed);

    clock.advance(toaster.base_options().timeout_on_remove.as_duration());
    toaster.tick();

    let container = toaster.container(Position::Top);
    let second_root = toaster.get(second).expect("live toast").root();
    assert_eq!(toaster.document().children(container), &[second_root]);
}

#[test]
fn long_running_document_stays_bounded() {
    let (mut toaster, clock) = setup();
    let undo_calls = Rc::new(Cell::new(0));

    for i in 0..1000 {
        let counter = Rc::clone(&undo_calls);
        let undo = ToastAction::new("Undo", move || counter.set(counter.get() + 1));
        let id = toaster.show(format!("toast {i}"), "notify", Some(undo));
        let button = toaster
            .get(id)
            .and_then(|toast| toast.action_button())
            .expect("action button");
        toaster.dispatch(button, PointerEvent::Click);
        toaster.dispatch(button, PointerEvent::Click);
        clock.advance_ms(10_000);
        toaster.tick();
        assert!(!toaster.document().contains(button));
    }

    assert_eq!(undo_calls.get(), 1000);
    assert!(toaster.is_empty());
    // body + top container
    assert_eq!(toaster.document().node_count(), 2);
    assert!(toaster.document().slot_count() <= 6);
}

#[test]
fn remove_all_leaves_no_visible_toast() {
    let (mut toaster, _) = setup();
    let shared = PartialOptions::new().with_show_all(true);
    let ids: Vec<_> = (0..3)
        .map(|i| toaster.show(format!("toast {i}"), shared.clone(), None))
        .collect();
    assert_eq!(toaster.visible_count(Position::Top), 3);

    assert_eq!(toaster.remove_all(Position::Top), 3);
    assert_eq!(toaster.visible_count(Position::Top), 0);
    for id in ids {
        assert_eq!(toaster.state(id), ToastState::Closing);
    }

    // Closing toasts are not counted twice
    assert_eq!(toaster.remove_all(Position::Top), 0);
}

#[test]
fn hover_holds_toast_indefinitely() {
    let (mut toaster, clock) = setup();
    let id = toaster.notify("Saved");
    let root = toaster.get(id).expect("live toast").root();
    let duration = toaster.base_options().duration.as_duration();

    clock.advance(duration / 2);
    toaster.dispatch(root, PointerEvent::Enter);
    clock.advance(duration * 100);
    toaster.tick();
    assert_eq!(toaster.state(id), ToastState::Paused);

    toaster.dispatch(root, PointerEvent::Leave);
    clock.advance(duration - duration / 10);
    toaster.tick();
    assert_eq!(toaster.state(id), ToastState::Displayed);

    clock.advance(duration / 10);
    toaster.tick();
    assert_eq!(toaster.state(id), ToastState::Closing);
}

#[test]
fn hidden_close_button_still_closes() {
    let (mut toaster, _) = setup();
    let id = toaster.show("Sticky", PartialOptions::new().with_closeable(false), None);
    let close = toaster.get(id).expect("live toast").close_button();
    let hidden = toaster.classes().hidden.clone();

    assert!(toaster.document().has_class(close, &hidden));
    assert!(toaster.dispatch(close, PointerEvent::Click));
    assert_eq!(toaster.state(id), ToastState::Closing);
}

#[test]
fn bottom_toasts_use_bottom_container() {
    let (mut toaster, _) = setup();
    let id = toaster.show(
        "Below",
        PartialOptions::new().with_position(Position::Bottom),
        None,
    );
    let classes = toaster.classes().clone();
    let root = toaster.get(id).expect("live toast").root();
    let bottom = toaster.container(Position::Bottom);

    assert_eq!(toaster.document().parent(root), Some(bottom));
    assert!(toaster.document().has_class(root, &classes.toast_bottom));
    assert!(toaster.document().has_class(bottom, &classes.container_bottom));
}

#[test]
fn diagnostics_record_clear_and_reasons() {
    let (mut toaster, _) = setup();
    let mut collector = DiagnosticsCollector::default();
    toaster.set_diagnostics(collector.handle());

    let first = toaster.notify("first");
    toaster.notify("second");
    collector.process_pending();

    let kinds: Vec<_> = collector.iter().map(|e| e.kind.clone()).collect();
    assert!(kinds.contains(&ToastEventKind::Closing {
        toast: first,
        reason: CloseReason::Cleared,
    }));
    assert!(kinds.contains(&ToastEventKind::Cleared {
        position: Position::Top,
        count: 1,
    }));

    let json = collector.export_json().expect("export should succeed");
    assert!(json.contains("\"event\": \"cleared\""));
}

#[test]
fn configured_toaster_from_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("toasts.toml");
    std::fs::write(
        &path,
        r#"
diagnostics_capacity = 150

[defaults]
position = "bottom"
duration = 1500

[presets.warning]
toast_class = "toast--warning"
removed_toast_class = "toast--fade"

[classes]
remove = "is-leaving"
"#,
    )
    .expect("Failed to write config file");

    let loaded: Config = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.buffer_capacity().value(), 150);
    assert_eq!(DiagnosticsCollector::from_config(&loaded).capacity(), 150);

    let clock = ManualClock::new();
    let mut toaster =
        Toaster::from_config(MemoryDocument::new(), &loaded).with_clock(clock.clone());
    let id = toaster.show("Disk almost full", "warning", None);
    let root = toaster.get(id).expect("live toast").root();
    assert_eq!(toaster.get(id).map(|t| t.options().position), Some(Position::Bottom));

    clock.advance_ms(1500);
    toaster.tick();
    assert!(toaster.document().has_class(root, "is-leaving"));
    assert!(toaster.document().has_class(root, "toast--fade"));
    assert!(toaster.document().has_class(root, "toast--warning"));

    dir.close().expect("Failed to close temporary directory");
}
