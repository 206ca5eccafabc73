//! Container kinds: windows and everything that can hold children.
//!
//! `Window` is the only non-dependent kind: windows are top-level and every
//! other kind must end up inside one, directly or through intermediate
//! containers.

use crate::binding::schema::{Binding, KindDef, CALLBACK, CALLBACK_DATA};
use crate::value::Value;

// ---------------------------------------------------------------------------
// Window
// ---------------------------------------------------------------------------

fn window_defaults() -> Vec<(&'static str, Value)> {
    vec![
        ("width", Value::Int(50)),
        ("height", Value::Int(50)),
        ("x_pos", Value::Int(0)),
        ("y_pos", Value::Int(0)),
        ("autosize", Value::Bool(false)),
        ("no_resize", Value::Bool(false)),
        ("no_title_bar", Value::Bool(false)),
        ("no_move", Value::Bool(false)),
        ("no_scrollbar", Value::Bool(false)),
        ("no_collapse", Value::Bool(false)),
        ("collapsed", Value::Bool(false)),
        ("horizontal_scrollbar", Value::Bool(false)),
        ("no_focus_on_appearing", Value::Bool(false)),
        ("no_bring_to_front_on_focus", Value::Bool(false)),
        ("menubar", Value::Bool(false)),
        ("no_close", Value::Bool(false)),
        ("no_background", Value::Bool(false)),
        ("show", Value::Bool(true)),
    ]
}

/// A top-level window. The `on_close` handler is consumed by the host at
/// creation and cannot be re-queried, so it stays local.
pub static WINDOW: KindDef = KindDef {
    name: "Window",
    container: true,
    dependent: false,
    schema: &[
        ("width", Binding::Synchronized),
        ("height", Binding::Synchronized),
        ("x_pos", Binding::Synchronized),
        ("y_pos", Binding::Synchronized),
        ("autosize", Binding::Synchronized),
        ("no_resize", Binding::Synchronized),
        ("no_title_bar", Binding::Synchronized),
        ("no_move", Binding::Synchronized),
        ("no_scrollbar", Binding::Synchronized),
        ("no_collapse", Binding::Synchronized),
        ("collapsed", Binding::Synchronized),
        ("horizontal_scrollbar", Binding::Synchronized),
        ("no_focus_on_appearing", Binding::Synchronized),
        ("no_bring_to_front_on_focus", Binding::Synchronized),
        ("menubar", Binding::Synchronized),
        ("no_close", Binding::Synchronized),
        ("no_background", Binding::Synchronized),
        ("label", Binding::Synchronized),
        ("show", Binding::Synchronized),
        ("on_close", Binding::LocalOnly),
    ],
    defaults: window_defaults,
};

// ---------------------------------------------------------------------------
// Child
// ---------------------------------------------------------------------------

fn child_defaults() -> Vec<(&'static str, Value)> {
    vec![
        ("show", Value::Bool(true)),
        ("tip", Value::from("")),
        ("width", Value::Int(0)),
        ("height", Value::Int(0)),
        ("border", Value::Bool(true)),
        ("autosize_x", Value::Bool(false)),
        ("autosize_y", Value::Bool(false)),
        ("no_scrollbar", Value::Bool(false)),
        ("horizontal_scrollbar", Value::Bool(false)),
        ("menubar", Value::Bool(false)),
    ]
}

/// A bordered sub-region container.
pub static CHILD: KindDef = KindDef {
    name: "Child",
    container: true,
    dependent: true,
    schema: &[
        ("show", Binding::Synchronized),
        ("tip", Binding::Synchronized),
        ("width", Binding::Synchronized),
        ("height", Binding::Synchronized),
        ("border", Binding::Synchronized),
        ("autosize_x", Binding::Synchronized),
        ("autosize_y", Binding::Synchronized),
        ("no_scrollbar", Binding::Synchronized),
        ("horizontal_scrollbar", Binding::Synchronized),
        ("menubar", Binding::Synchronized),
    ],
    defaults: child_defaults,
};

// ---------------------------------------------------------------------------
// Group
// ---------------------------------------------------------------------------

fn group_defaults() -> Vec<(&'static str, Value)> {
    vec![
        ("show", Value::Bool(true)),
        ("tip", Value::from("")),
        ("width", Value::Int(0)),
        ("horizontal", Value::Bool(false)),
        ("horizontal_spacing", Value::Float(-1.0)),
    ]
}

/// A lightweight layout container.
pub static GROUP: KindDef = KindDef {
    name: "Group",
    container: true,
    dependent: true,
    schema: &[
        ("show", Binding::Synchronized),
        ("tip", Binding::Synchronized),
        ("width", Binding::Synchronized),
        ("horizontal", Binding::Synchronized),
        ("horizontal_spacing", Binding::Synchronized),
    ],
    defaults: group_defaults,
};

// ---------------------------------------------------------------------------
// Menus and tabs
// ---------------------------------------------------------------------------

fn show_only_defaults() -> Vec<(&'static str, Value)> {
    vec![("show", Value::Bool(true))]
}

pub static MENU_BAR: KindDef = KindDef {
    name: "MenuBar",
    container: true,
    dependent: true,
    schema: &[("show", Binding::Synchronized)],
    defaults: show_only_defaults,
};

fn menu_defaults() -> Vec<(&'static str, Value)> {
    vec![("show", Value::Bool(true)), ("enabled", Value::Bool(true))]
}

pub static MENU: KindDef = KindDef {
    name: "Menu",
    container: true,
    dependent: true,
    schema: &[
        ("label", Binding::Synchronized),
        ("show", Binding::Synchronized),
        ("enabled", Binding::Synchronized),
    ],
    defaults: menu_defaults,
};

fn tab_bar_defaults() -> Vec<(&'static str, Value)> {
    vec![
        ("reorderable", Value::Bool(false)),
        ("show", Value::Bool(true)),
    ]
}

/// A tab strip; fires its callback when the selected tab changes.
pub static TAB_BAR: KindDef = KindDef {
    name: "TabBar",
    container: true,
    dependent: true,
    schema: &[
        ("reorderable", Binding::Synchronized),
        ("callback", Binding::Special(&CALLBACK)),
        ("callback_data", Binding::Special(&CALLBACK_DATA)),
        ("show", Binding::Synchronized),
    ],
    defaults: tab_bar_defaults,
};

fn tab_defaults() -> Vec<(&'static str, Value)> {
    vec![
        ("closable", Value::Bool(false)),
        ("show", Value::Bool(true)),
        ("no_reorder", Value::Bool(false)),
        ("leading", Value::Bool(false)),
        ("trailing", Value::Bool(false)),
        ("no_tooltip", Value::Bool(false)),
        ("tip", Value::from("")),
    ]
}

pub static TAB: KindDef = KindDef {
    name: "Tab",
    container: true,
    dependent: true,
    schema: &[
        ("closable", Binding::Synchronized),
        ("label", Binding::Synchronized),
        ("show", Binding::Synchronized),
        ("no_reorder", Binding::Synchronized),
        ("leading", Binding::Synchronized),
        ("trailing", Binding::Synchronized),
        ("no_tooltip", Binding::Synchronized),
        ("tip", Binding::Synchronized),
    ],
    defaults: tab_defaults,
};

// ---------------------------------------------------------------------------
// Popup and tooltip
// ---------------------------------------------------------------------------

fn popup_defaults() -> Vec<(&'static str, Value)> {
    vec![
        ("popupparent", Value::from("")),
        ("mousebutton", Value::Int(1)),
        ("modal", Value::Bool(false)),
        ("width", Value::Int(0)),
        ("height", Value::Int(0)),
        ("show", Value::Bool(true)),
    ]
}

/// A popup anchored to another widget. The anchor (`popupparent`) is fixed at
/// creation; the host offers no way to re-target it afterwards.
pub static POPUP: KindDef = KindDef {
    name: "Popup",
    container: true,
    dependent: true,
    schema: &[
        ("popupparent", Binding::LocalOnly),
        ("mousebutton", Binding::Synchronized),
        ("modal", Binding::Synchronized),
        ("width", Binding::Synchronized),
        ("height", Binding::Synchronized),
        ("show", Binding::Synchronized),
    ],
    defaults: popup_defaults,
};

fn tooltip_defaults() -> Vec<(&'static str, Value)> {
    vec![("tipparent", Value::from("")), ("show", Value::Bool(true))]
}

/// A hover tooltip anchored to another widget (`tipparent`, fixed at
/// creation).
pub static TOOLTIP: KindDef = KindDef {
    name: "Tooltip",
    container: true,
    dependent: true,
    schema: &[
        ("tipparent", Binding::LocalOnly),
        ("show", Binding::Synchronized),
    ],
    defaults: tooltip_defaults,
};

// ---------------------------------------------------------------------------
// TreeNode and ManagedColumns
// ---------------------------------------------------------------------------

fn tree_node_defaults() -> Vec<(&'static str, Value)> {
    vec![
        ("show", Value::Bool(true)),
        ("tip", Value::from("")),
        ("default_open", Value::Bool(false)),
        ("open_on_double_click", Value::Bool(false)),
        ("open_on_arrow", Value::Bool(false)),
        ("leaf", Value::Bool(false)),
        ("bullet", Value::Bool(false)),
    ]
}

pub static TREE_NODE: KindDef = KindDef {
    name: "TreeNode",
    container: true,
    dependent: true,
    schema: &[
        ("label", Binding::Synchronized),
        ("show", Binding::Synchronized),
        ("tip", Binding::Synchronized),
        ("default_open", Binding::Synchronized),
        ("open_on_double_click", Binding::Synchronized),
        ("open_on_arrow", Binding::Synchronized),
        ("leaf", Binding::Synchronized),
        ("bullet", Binding::Synchronized),
    ],
    defaults: tree_node_defaults,
};

fn managed_columns_defaults() -> Vec<(&'static str, Value)> {
    vec![
        ("columns", Value::Int(0)),
        ("border", Value::Bool(false)),
        ("show", Value::Bool(true)),
    ]
}

pub static MANAGED_COLUMNS: KindDef = KindDef {
    name: "ManagedColumns",
    container: true,
    dependent: true,
    schema: &[
        ("columns", Binding::Synchronized),
        ("border", Binding::Synchronized),
        ("show", Binding::Synchronized),
    ],
    defaults: managed_columns_defaults,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_the_root_kind() {
        assert!(WINDOW.container);
        assert!(!WINDOW.dependent);
        assert!(matches!(WINDOW.binding("on_close"), Some(Binding::LocalOnly)));
    }

    #[test]
    fn anchored_kinds_keep_their_anchor_local() {
        assert!(matches!(
            POPUP.binding("popupparent"),
            Some(Binding::LocalOnly)
        ));
        assert!(matches!(
            TOOLTIP.binding("tipparent"),
            Some(Binding::LocalOnly)
        ));
    }

    #[test]
    fn tab_bar_pairs_callback_with_data() {
        match TAB_BAR.binding("callback") {
            Some(Binding::Special(spec)) => {
                assert_eq!(spec.set_slots, &["callback", "callback_data"]);
            }
            other => panic!("expected special binding, got {other:?}"),
        }
    }

    #[test]
    fn every_container_defaults_to_shown() {
        for kind in [
            &WINDOW,
            &CHILD,
            &GROUP,
            &MENU_BAR,
            &MENU,
            &TAB_BAR,
            &TAB,
            &POPUP,
            &TOOLTIP,
            &TREE_NODE,
            &MANAGED_COLUMNS,
        ] {
            let defaults = (kind.defaults)();
            let show = defaults.iter().find(|(n, _)| *n == "show").unwrap();
            assert_eq!(show.1, Value::Bool(true), "{}", kind.name);
        }
    }
}
