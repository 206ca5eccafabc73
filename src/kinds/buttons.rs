//! Button kind.

use crate::binding::schema::{Binding, KindDef, CALLBACK, CALLBACK_DATA};
use crate::value::Value;

fn button_defaults() -> Vec<(&'static str, Value)> {
    vec![
        ("small", Value::Bool(false)),
        ("arrow", Value::Bool(false)),
        ("direction", Value::Int(0)),
        ("tip", Value::from("")),
        ("width", Value::Int(100)),
        ("height", Value::Int(50)),
        ("show", Value::Bool(true)),
        ("enabled", Value::Bool(true)),
    ]
}

/// A clickable button. Leaf kind: cannot hold children.
pub static BUTTON: KindDef = KindDef {
    name: "Button",
    container: false,
    dependent: true,
    schema: &[
        ("small", Binding::Synchronized),
        ("arrow", Binding::Synchronized),
        ("direction", Binding::Synchronized),
        ("callback", Binding::Special(&CALLBACK)),
        ("callback_data", Binding::Special(&CALLBACK_DATA)),
        ("tip", Binding::Synchronized),
        ("width", Binding::Synchronized),
        ("height", Binding::Synchronized),
        ("label", Binding::Synchronized),
        ("show", Binding::Synchronized),
        ("enabled", Binding::Synchronized),
    ],
    defaults: button_defaults,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_shape() {
        assert!(!BUTTON.container);
        assert!(BUTTON.dependent);
        assert!(BUTTON.has_attr("callback"));
        assert!(matches!(
            BUTTON.binding("callback"),
            Some(Binding::Special(_))
        ));
        assert!(matches!(BUTTON.binding("width"), Some(Binding::Synchronized)));
    }

    #[test]
    fn button_default_dimensions() {
        let defaults = button_defaults();
        let width = defaults.iter().find(|(n, _)| *n == "width").unwrap();
        let height = defaults.iter().find(|(n, _)| *n == "height").unwrap();
        assert_eq!(width.1, Value::Int(100));
        assert_eq!(height.1, Value::Int(50));
    }
}
