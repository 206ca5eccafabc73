//! Text kind.

use crate::binding::schema::{Binding, KindDef};
use crate::value::Value;

fn text_defaults() -> Vec<(&'static str, Value)> {
    vec![
        ("wrap", Value::Int(-1)),
        // rgba; constructed fresh per node so instances never share the list
        ("color", Value::from(vec![255.0, 255.0, 255.0, 255.0])),
        ("bullet", Value::Bool(false)),
        ("tip", Value::from("")),
        ("source", Value::from("")),
        ("default_value", Value::from("")),
        ("show", Value::Bool(true)),
    ]
}

/// A static text line. `default_value` is the creation-time content; the host
/// exposes no way to re-read it, so it stays local.
pub static TEXT: KindDef = KindDef {
    name: "Text",
    container: false,
    dependent: true,
    schema: &[
        ("wrap", Binding::Synchronized),
        ("color", Binding::Synchronized),
        ("bullet", Binding::Synchronized),
        ("tip", Binding::Synchronized),
        ("source", Binding::Synchronized),
        ("default_value", Binding::LocalOnly),
        ("show", Binding::Synchronized),
    ],
    defaults: text_defaults,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_shape() {
        assert!(!TEXT.container);
        assert!(TEXT.dependent);
        assert!(matches!(
            TEXT.binding("default_value"),
            Some(Binding::LocalOnly)
        ));
    }

    #[test]
    fn color_default_is_opaque_white() {
        let defaults = text_defaults();
        let color = defaults.iter().find(|(n, _)| *n == "color").unwrap();
        assert_eq!(
            color.1,
            Value::from(vec![255.0, 255.0, 255.0, 255.0])
        );
    }
}
