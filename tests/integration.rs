//! Integration tests for hostlink.
//!
//! These tests exercise the public API from outside the crate: building a
//! widget tree against the in-memory host, attribute synchronization in both
//! lifecycle states, callback dispatch, and cascading deletion.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use hostlink::kinds::{BUTTON, GROUP, INPUT_INT, MENU, MENU_BAR, TEXT, WINDOW};
use hostlink::testing::{tree_to_string, FakeHost};
use hostlink::{Context, Error, Host, Value};

fn ctx() -> Context<FakeHost> {
    Context::new(FakeHost::new())
}

// ---------------------------------------------------------------------------
// Tree construction
// ---------------------------------------------------------------------------

#[test]
fn builds_a_nested_tree_through_the_container_stack() {
    let mut ctx = ctx();

    let window = ctx.create_with_id(&WINDOW, "main").unwrap();
    ctx.set(&window, "label", "Main Window").unwrap();
    ctx.add(&window).unwrap();

    let menu_bar = ctx.create_with_id(&MENU_BAR, "bar").unwrap();
    ctx.add(&menu_bar).unwrap();
    let menu = ctx.create_with_id(&MENU, "file").unwrap();
    ctx.add(&menu).unwrap();
    ctx.end().unwrap(); // menu
    ctx.end().unwrap(); // menu bar

    let group = ctx.create_with_id(&GROUP, "controls").unwrap();
    ctx.add(&group).unwrap();
    let button = ctx.create_with_id(&BUTTON, "ok").unwrap();
    ctx.add(&button).unwrap();
    let text = ctx.create_with_id(&TEXT, "status").unwrap();
    ctx.add(&text).unwrap();
    ctx.end().unwrap(); // group
    ctx.end().unwrap(); // window

    insta::assert_snapshot!(tree_to_string(ctx.host()), @r###"
    main (Window)
      bar (MenuBar)
        file (Menu)
      controls (Group)
        ok (Button)
        status (Text)
    "###);
}

#[test]
fn generated_and_explicit_ids_share_one_namespace() {
    let mut ctx = ctx();
    let first = ctx.create(&BUTTON).unwrap();
    ctx.create_with_id(&BUTTON, "Button<1>").unwrap();
    let third = ctx.create(&BUTTON).unwrap();

    assert_eq!(first.id(), "Button<0>");
    assert_eq!(third.id(), "Button<2>");

    let err = ctx.create_with_id(&BUTTON, "Button<0>").unwrap_err();
    assert_eq!(err, Error::DuplicateId("Button<0>".to_owned()));
}

// ---------------------------------------------------------------------------
// Attribute synchronization
// ---------------------------------------------------------------------------

#[test]
fn full_cached_state_is_delivered_at_materialization() {
    let mut ctx = ctx();
    let window = ctx.create(&WINDOW).unwrap();
    ctx.add(&window).unwrap();

    let input = ctx.create_with_id(&INPUT_INT, "age").unwrap();
    ctx.set(&input, "min_value", 0).unwrap();
    ctx.set(&input, "max_value", 130).unwrap();
    ctx.set(&input, "tip", "years").unwrap();
    assert!(!ctx.is_valid(&input));

    ctx.add(&input).unwrap();
    ctx.end().unwrap();

    assert!(ctx.is_valid(&input));
    let host = ctx.host();
    assert_eq!(host.config("age", "max_value").unwrap(), Value::Int(130));
    assert_eq!(host.config("age", "tip").unwrap(), Value::from("years"));
    // Untouched attributes arrive with their kind defaults.
    assert_eq!(host.config("age", "step").unwrap(), Value::Int(1));
    assert_eq!(host.config("age", "enabled").unwrap(), Value::Bool(true));
}

#[test]
fn host_side_changes_win_on_read() {
    let mut ctx = ctx();
    let window = ctx.create_with_id(&WINDOW, "w").unwrap();
    ctx.add(&window).unwrap();
    ctx.end().unwrap();

    ctx.set(&window, "width", 800).unwrap();
    // The host resizes the window behind the binding layer's back.
    ctx.host_mut()
        .set_config("w", "width", &Value::Int(640))
        .unwrap();

    assert_eq!(ctx.get(&window, "width").unwrap(), Value::Int(640));
}

#[test]
fn local_only_attributes_never_reach_the_host() {
    let mut ctx = ctx();
    let window = ctx.create_with_id(&WINDOW, "w").unwrap();
    ctx.add(&window).unwrap();

    let text = ctx.create_with_id(&TEXT, "t").unwrap();
    ctx.add(&text).unwrap();
    ctx.end().unwrap();

    ctx.set(&text, "default_value", "fixed at creation").unwrap();
    assert_eq!(
        ctx.get(&text, "default_value").unwrap(),
        Value::from("fixed at creation")
    );
}

// ---------------------------------------------------------------------------
// Callbacks
// ---------------------------------------------------------------------------

#[test]
fn callback_fires_with_sender_and_cached_data() {
    let mut ctx = ctx();
    let window = ctx.create(&WINDOW).unwrap();
    ctx.add(&window).unwrap();

    let clicks: Rc<RefCell<Vec<(String, Value)>>> = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&clicks);

    let button = ctx.create_with_id(&BUTTON, "save").unwrap();
    ctx.set(&button, "callback_data", 42).unwrap();
    ctx.set(
        &button,
        "callback",
        Value::callback(move |sender, data| {
            log.borrow_mut().push((sender.to_owned(), data.clone()));
        }),
    )
    .unwrap();
    ctx.add(&button).unwrap();
    ctx.end().unwrap();

    ctx.host().invoke("save").unwrap();
    ctx.host().invoke("save").unwrap();

    let clicks = clicks.borrow();
    assert_eq!(clicks.len(), 2);
    assert_eq!(clicks[0], ("save".to_owned(), Value::Int(42)));
}

#[test]
fn rebinding_callback_on_live_widget_pairs_with_current_data() {
    let mut ctx = ctx();
    let window = ctx.create(&WINDOW).unwrap();
    ctx.add(&window).unwrap();
    let button = ctx.create_with_id(&BUTTON, "b").unwrap();
    ctx.add(&button).unwrap();
    ctx.end().unwrap();

    let seen: Rc<RefCell<Option<Value>>> = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);

    ctx.set(&button, "callback_data", "payload").unwrap();
    ctx.set(
        &button,
        "callback",
        Value::callback(move |_, data| {
            *sink.borrow_mut() = Some(data.clone());
        }),
    )
    .unwrap();

    ctx.host().invoke("b").unwrap();
    assert_eq!(*seen.borrow(), Some(Value::from("payload")));
}

// ---------------------------------------------------------------------------
// Moves and deletion
// ---------------------------------------------------------------------------

#[test]
fn live_reparenting_and_sibling_placement() {
    let mut ctx = ctx();
    let window = ctx.create_with_id(&WINDOW, "w").unwrap();
    ctx.add(&window).unwrap();
    let left = ctx.create_with_id(&GROUP, "left").unwrap();
    ctx.add(&left).unwrap();
    ctx.end().unwrap(); // left
    let right = ctx.create_with_id(&GROUP, "right").unwrap();
    ctx.add(&right).unwrap();
    let button = ctx.create_with_id(&BUTTON, "b").unwrap();
    ctx.add(&button).unwrap();
    ctx.end().unwrap(); // right
    ctx.end().unwrap(); // window

    assert_eq!(ctx.parent(&button).unwrap(), "right");
    ctx.set_parent(&button, "left").unwrap();
    assert_eq!(ctx.parent(&button).unwrap(), "left");

    ctx.move_node(&right, "w", "left").unwrap();
    insta::assert_snapshot!(tree_to_string(ctx.host()), @r###"
    w (Window)
      right (Group)
      left (Group)
        b (Button)
    "###);
}

#[test]
fn deleting_a_container_cascades_through_registered_descendants() {
    let mut ctx = ctx();
    let window = ctx.create_with_id(&WINDOW, "w").unwrap();
    ctx.add(&window).unwrap();
    let group = ctx.create_with_id(&GROUP, "g").unwrap();
    ctx.add(&group).unwrap();
    for id in ["a", "b", "c"] {
        let button = ctx.create_with_id(&BUTTON, id).unwrap();
        ctx.add(&button).unwrap();
    }
    ctx.end().unwrap();
    ctx.end().unwrap();

    assert_eq!(ctx.len(), 5);
    assert_eq!(ctx.host().widget_count(), 5);

    ctx.delete(&group).unwrap();

    assert_eq!(ctx.len(), 1);
    assert_eq!(ctx.host().widget_count(), 1);
    for id in ["g", "a", "b", "c"] {
        assert!(!ctx.contains(id));
        assert!(matches!(
            ctx.get(id, "show").unwrap_err(),
            Error::InvalidReference(_)
        ));
    }
}

#[test]
fn callback_driven_tree_mutation() {
    let mut ctx = ctx();
    let window = ctx.create_with_id(&WINDOW, "w").unwrap();
    ctx.add(&window).unwrap();
    let button = ctx.create_with_id(&BUTTON, "spawn").unwrap();
    ctx.add(&button).unwrap();
    ctx.end().unwrap();

    // The callback records what to build; the app loop applies it after
    // dispatch, the same turn of the single-threaded loop.
    let pending: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let queue = Rc::clone(&pending);
    ctx.set(
        &button,
        "callback",
        Value::callback(move |sender, _| {
            queue.borrow_mut().push(format!("text under {sender}"));
        }),
    )
    .unwrap();

    ctx.host().invoke("spawn").unwrap();

    for _ in pending.borrow().iter() {
        let text = ctx.create(&TEXT).unwrap();
        ctx.set_parent(&text, "w").unwrap();
        ctx.add(&text).unwrap();
    }

    assert!(ctx.contains("Text<0>"));
    assert_eq!(ctx.parent("Text<0>").unwrap(), "w");
    assert_eq!(
        ctx.children("w").unwrap(),
        vec!["spawn".to_owned(), "Text<0>".to_owned()]
    );
}
