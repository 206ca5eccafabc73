//! Node-editor kinds: the editor canvas, nodes, and their attribute pins.

use crate::binding::schema::{Binding, KindDef};
use crate::value::Value;

fn node_editor_defaults() -> Vec<(&'static str, Value)> {
    vec![("show", Value::Bool(true))]
}

/// The editor canvas. Link and delink handlers are consumed by the host at
/// creation and cannot be re-queried, so they stay local.
pub static NODE_EDITOR: KindDef = KindDef {
    name: "NodeEditor",
    container: true,
    dependent: true,
    schema: &[
        ("show", Binding::Synchronized),
        ("link_callback", Binding::LocalOnly),
        ("delink_callback", Binding::LocalOnly),
    ],
    defaults: node_editor_defaults,
};

fn node_defaults() -> Vec<(&'static str, Value)> {
    vec![
        ("show", Value::Bool(true)),
        ("draggable", Value::Bool(true)),
        ("x_pos", Value::Int(0)),
        ("y_pos", Value::Int(0)),
    ]
}

/// One draggable node on the editor canvas.
pub static NODE: KindDef = KindDef {
    name: "Node",
    container: true,
    dependent: true,
    schema: &[
        ("label", Binding::Synchronized),
        ("show", Binding::Synchronized),
        ("draggable", Binding::Synchronized),
        ("x_pos", Binding::Synchronized),
        ("y_pos", Binding::Synchronized),
    ],
    defaults: node_defaults,
};

fn node_attribute_defaults() -> Vec<(&'static str, Value)> {
    vec![
        ("show", Value::Bool(true)),
        ("output", Value::Bool(false)),
        ("static", Value::Bool(false)),
    ]
}

/// An input/output pin on a node; holds the widget rendered inside the pin.
pub static NODE_ATTRIBUTE: KindDef = KindDef {
    name: "NodeAttribute",
    container: true,
    dependent: true,
    schema: &[
        ("show", Binding::Synchronized),
        ("output", Binding::Synchronized),
        ("static", Binding::Synchronized),
    ],
    defaults: node_attribute_defaults,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_handlers_stay_local() {
        assert!(matches!(
            NODE_EDITOR.binding("link_callback"),
            Some(Binding::LocalOnly)
        ));
        assert!(matches!(
            NODE_EDITOR.binding("delink_callback"),
            Some(Binding::LocalOnly)
        ));
    }

    #[test]
    fn editor_family_is_nested_containers() {
        for kind in [&NODE_EDITOR, &NODE, &NODE_ATTRIBUTE] {
            assert!(kind.container, "{}", kind.name);
            assert!(kind.dependent, "{}", kind.name);
        }
    }
}
