//! Input kinds: text entry plus the int/float input, slider, and drag
//! families in one- to four-component arities.
//!
//! Within a family only the default value's shape differs between arities, so
//! the variants share schema tables and build their defaults through one
//! helper. `default_value` is creation-time only (the host's live value moves
//! to its value store), so it stays local.

use crate::binding::schema::{Binding, KindDef, CALLBACK, CALLBACK_DATA};
use crate::value::Value;

// ---------------------------------------------------------------------------
// InputText
// ---------------------------------------------------------------------------

fn input_text_defaults() -> Vec<(&'static str, Value)> {
    vec![
        ("width", Value::Int(0)),
        ("height", Value::Int(0)),
        ("hint", Value::from("")),
        ("multiline", Value::Bool(false)),
        ("no_spaces", Value::Bool(false)),
        ("uppercase", Value::Bool(false)),
        ("tab_input", Value::Bool(false)),
        ("decimal", Value::Bool(false)),
        ("hexadecimal", Value::Bool(false)),
        ("readonly", Value::Bool(false)),
        ("password", Value::Bool(false)),
        ("scientific", Value::Bool(false)),
        ("source", Value::from("")),
        ("enabled", Value::Bool(true)),
        ("tip", Value::from("")),
        ("show", Value::Bool(true)),
        ("default_value", Value::from("")),
    ]
}

pub static INPUT_TEXT: KindDef = KindDef {
    name: "InputText",
    container: false,
    dependent: true,
    schema: &[
        ("width", Binding::Synchronized),
        ("height", Binding::Synchronized),
        ("hint", Binding::Synchronized),
        ("multiline", Binding::Synchronized),
        ("no_spaces", Binding::Synchronized),
        ("uppercase", Binding::Synchronized),
        ("tab_input", Binding::Synchronized),
        ("decimal", Binding::Synchronized),
        ("hexadecimal", Binding::Synchronized),
        ("readonly", Binding::Synchronized),
        ("password", Binding::Synchronized),
        ("scientific", Binding::Synchronized),
        ("callback", Binding::Special(&CALLBACK)),
        ("callback_data", Binding::Special(&CALLBACK_DATA)),
        ("source", Binding::Synchronized),
        ("enabled", Binding::Synchronized),
        ("tip", Binding::Synchronized),
        ("show", Binding::Synchronized),
        ("default_value", Binding::LocalOnly),
    ],
    defaults: input_text_defaults,
};

// ---------------------------------------------------------------------------
// Input family (typed entry boxes)
// ---------------------------------------------------------------------------

static INPUT_SCHEMA: &[(&str, Binding)] = &[
    ("min_clamped", Binding::Synchronized),
    ("max_clamped", Binding::Synchronized),
    ("width", Binding::Synchronized),
    ("on_enter", Binding::Synchronized),
    ("readonly", Binding::Synchronized),
    ("min_value", Binding::Synchronized),
    ("max_value", Binding::Synchronized),
    ("callback", Binding::Special(&CALLBACK)),
    ("callback_data", Binding::Special(&CALLBACK_DATA)),
    ("source", Binding::Synchronized),
    ("enabled", Binding::Synchronized),
    ("tip", Binding::Synchronized),
    ("show", Binding::Synchronized),
    ("default_value", Binding::LocalOnly),
];

// Single-component inputs additionally step on +/- buttons.
static INPUT_STEP_SCHEMA: &[(&str, Binding)] = &[
    ("min_clamped", Binding::Synchronized),
    ("max_clamped", Binding::Synchronized),
    ("width", Binding::Synchronized),
    ("on_enter", Binding::Synchronized),
    ("readonly", Binding::Synchronized),
    ("min_value", Binding::Synchronized),
    ("max_value", Binding::Synchronized),
    ("step", Binding::Synchronized),
    ("step_fast", Binding::Synchronized),
    ("callback", Binding::Special(&CALLBACK)),
    ("callback_data", Binding::Special(&CALLBACK_DATA)),
    ("source", Binding::Synchronized),
    ("enabled", Binding::Synchronized),
    ("tip", Binding::Synchronized),
    ("show", Binding::Synchronized),
    ("default_value", Binding::LocalOnly),
];

static INPUT_FLOAT_SCHEMA: &[(&str, Binding)] = &[
    ("min_clamped", Binding::Synchronized),
    ("max_clamped", Binding::Synchronized),
    ("width", Binding::Synchronized),
    ("on_enter", Binding::Synchronized),
    ("readonly", Binding::Synchronized),
    ("min_value", Binding::Synchronized),
    ("max_value", Binding::Synchronized),
    ("format", Binding::Synchronized),
    ("callback", Binding::Special(&CALLBACK)),
    ("callback_data", Binding::Special(&CALLBACK_DATA)),
    ("source", Binding::Synchronized),
    ("enabled", Binding::Synchronized),
    ("tip", Binding::Synchronized),
    ("show", Binding::Synchronized),
    ("default_value", Binding::LocalOnly),
];

static INPUT_FLOAT_STEP_SCHEMA: &[(&str, Binding)] = &[
    ("min_clamped", Binding::Synchronized),
    ("max_clamped", Binding::Synchronized),
    ("width", Binding::Synchronized),
    ("on_enter", Binding::Synchronized),
    ("readonly", Binding::Synchronized),
    ("min_value", Binding::Synchronized),
    ("max_value", Binding::Synchronized),
    ("step", Binding::Synchronized),
    ("step_fast", Binding::Synchronized),
    ("format", Binding::Synchronized),
    ("callback", Binding::Special(&CALLBACK)),
    ("callback_data", Binding::Special(&CALLBACK_DATA)),
    ("source", Binding::Synchronized),
    ("enabled", Binding::Synchronized),
    ("tip", Binding::Synchronized),
    ("show", Binding::Synchronized),
    ("default_value", Binding::LocalOnly),
];

fn input_defaults(
    default_value: Value,
    min_value: Value,
    max_value: Value,
) -> Vec<(&'static str, Value)> {
    vec![
        ("min_clamped", Value::Bool(false)),
        ("max_clamped", Value::Bool(false)),
        ("width", Value::Int(0)),
        ("on_enter", Value::Bool(false)),
        ("readonly", Value::Bool(false)),
        ("min_value", min_value),
        ("max_value", max_value),
        ("source", Value::from("")),
        ("enabled", Value::Bool(true)),
        ("tip", Value::from("")),
        ("show", Value::Bool(true)),
        ("default_value", default_value),
    ]
}

fn input_int_bounds(default_value: Value) -> Vec<(&'static str, Value)> {
    input_defaults(default_value, Value::Int(0), Value::Int(100))
}

fn input_float_bounds(default_value: Value) -> Vec<(&'static str, Value)> {
    let mut defaults = input_defaults(default_value, Value::Float(0.0), Value::Float(100.0));
    defaults.push(("format", Value::from("%.3f")));
    defaults
}

fn input_int_defaults() -> Vec<(&'static str, Value)> {
    let mut defaults = input_int_bounds(Value::Int(0));
    defaults.push(("step", Value::Int(1)));
    defaults.push(("step_fast", Value::Int(100)));
    defaults
}

fn input_int2_defaults() -> Vec<(&'static str, Value)> {
    input_int_bounds(Value::from(vec![0i64; 2]))
}

fn input_int3_defaults() -> Vec<(&'static str, Value)> {
    input_int_bounds(Value::from(vec![0i64; 3]))
}

fn input_int4_defaults() -> Vec<(&'static str, Value)> {
    input_int_bounds(Value::from(vec![0i64; 4]))
}

fn input_float_defaults() -> Vec<(&'static str, Value)> {
    let mut defaults = input_float_bounds(Value::Float(0.0));
    defaults.push(("step", Value::Float(0.1)));
    defaults.push(("step_fast", Value::Float(1.0)));
    defaults
}

fn input_float2_defaults() -> Vec<(&'static str, Value)> {
    input_float_bounds(Value::from(vec![0.0f64; 2]))
}

fn input_float3_defaults() -> Vec<(&'static str, Value)> {
    input_float_bounds(Value::from(vec![0.0f64; 3]))
}

fn input_float4_defaults() -> Vec<(&'static str, Value)> {
    input_float_bounds(Value::from(vec![0.0f64; 4]))
}

pub static INPUT_INT: KindDef = KindDef {
    name: "InputInt",
    container: false,
    dependent: true,
    schema: INPUT_STEP_SCHEMA,
    defaults: input_int_defaults,
};

pub static INPUT_INT2: KindDef = KindDef {
    name: "InputInt2",
    container: false,
    dependent: true,
    schema: INPUT_SCHEMA,
    defaults: input_int2_defaults,
};

pub static INPUT_INT3: KindDef = KindDef {
    name: "InputInt3",
    container: false,
    dependent: true,
    schema: INPUT_SCHEMA,
    defaults: input_int3_defaults,
};

pub static INPUT_INT4: KindDef = KindDef {
    name: "InputInt4",
    container: false,
    dependent: true,
    schema: INPUT_SCHEMA,
    defaults: input_int4_defaults,
};

pub static INPUT_FLOAT: KindDef = KindDef {
    name: "InputFloat",
    container: false,
    dependent: true,
    schema: INPUT_FLOAT_STEP_SCHEMA,
    defaults: input_float_defaults,
};

pub static INPUT_FLOAT2: KindDef = KindDef {
    name: "InputFloat2",
    container: false,
    dependent: true,
    schema: INPUT_FLOAT_SCHEMA,
    defaults: input_float2_defaults,
};

pub static INPUT_FLOAT3: KindDef = KindDef {
    name: "InputFloat3",
    container: false,
    dependent: true,
    schema: INPUT_FLOAT_SCHEMA,
    defaults: input_float3_defaults,
};

pub static INPUT_FLOAT4: KindDef = KindDef {
    name: "InputFloat4",
    container: false,
    dependent: true,
    schema: INPUT_FLOAT_SCHEMA,
    defaults: input_float4_defaults,
};

// ---------------------------------------------------------------------------
// Slider family
// ---------------------------------------------------------------------------

static SLIDER_SCHEMA: &[(&str, Binding)] = &[
    ("format", Binding::Synchronized),
    ("width", Binding::Synchronized),
    ("no_input", Binding::Synchronized),
    ("clamped", Binding::Synchronized),
    ("min_value", Binding::Synchronized),
    ("max_value", Binding::Synchronized),
    ("callback", Binding::Special(&CALLBACK)),
    ("callback_data", Binding::Special(&CALLBACK_DATA)),
    ("source", Binding::Synchronized),
    ("enabled", Binding::Synchronized),
    ("tip", Binding::Synchronized),
    ("show", Binding::Synchronized),
    ("default_value", Binding::LocalOnly),
];

// Single-component sliders can also render as a vertical bar.
static SLIDER_BAR_SCHEMA: &[(&str, Binding)] = &[
    ("format", Binding::Synchronized),
    ("width", Binding::Synchronized),
    ("height", Binding::Synchronized),
    ("vertical", Binding::Synchronized),
    ("no_input", Binding::Synchronized),
    ("clamped", Binding::Synchronized),
    ("min_value", Binding::Synchronized),
    ("max_value", Binding::Synchronized),
    ("callback", Binding::Special(&CALLBACK)),
    ("callback_data", Binding::Special(&CALLBACK_DATA)),
    ("source", Binding::Synchronized),
    ("enabled", Binding::Synchronized),
    ("tip", Binding::Synchronized),
    ("show", Binding::Synchronized),
    ("default_value", Binding::LocalOnly),
];

fn slider_defaults(
    default_value: Value,
    min_value: Value,
    max_value: Value,
    format: &'static str,
) -> Vec<(&'static str, Value)> {
    vec![
        ("format", Value::from(format)),
        ("width", Value::Int(0)),
        ("no_input", Value::Bool(false)),
        ("clamped", Value::Bool(false)),
        ("min_value", min_value),
        ("max_value", max_value),
        ("source", Value::from("")),
        ("enabled", Value::Bool(true)),
        ("tip", Value::from("")),
        ("show", Value::Bool(true)),
        ("default_value", default_value),
    ]
}

fn slider_int_defaults(default_value: Value) -> Vec<(&'static str, Value)> {
    slider_defaults(default_value, Value::Int(0), Value::Int(100), "%d")
}

fn slider_float_defaults(default_value: Value) -> Vec<(&'static str, Value)> {
    slider_defaults(default_value, Value::Float(0.0), Value::Float(100.0), "%.3f")
}

fn slider_int1_defaults() -> Vec<(&'static str, Value)> {
    let mut defaults = slider_int_defaults(Value::Int(0));
    defaults.push(("height", Value::Int(0)));
    defaults.push(("vertical", Value::Bool(false)));
    defaults
}

fn slider_int2_defaults() -> Vec<(&'static str, Value)> {
    slider_int_defaults(Value::from(vec![0i64; 2]))
}

fn slider_int3_defaults() -> Vec<(&'static str, Value)> {
    slider_int_defaults(Value::from(vec![0i64; 3]))
}

fn slider_int4_defaults() -> Vec<(&'static str, Value)> {
    slider_int_defaults(Value::from(vec![0i64; 4]))
}

fn slider_float1_defaults() -> Vec<(&'static str, Value)> {
    let mut defaults = slider_float_defaults(Value::Float(0.0));
    defaults.push(("height", Value::Int(0)));
    defaults.push(("vertical", Value::Bool(false)));
    defaults
}

fn slider_float2_defaults() -> Vec<(&'static str, Value)> {
    slider_float_defaults(Value::from(vec![0.0f64; 2]))
}

fn slider_float3_defaults() -> Vec<(&'static str, Value)> {
    slider_float_defaults(Value::from(vec![0.0f64; 3]))
}

fn slider_float4_defaults() -> Vec<(&'static str, Value)> {
    slider_float_defaults(Value::from(vec![0.0f64; 4]))
}

pub static SLIDER_INT: KindDef = KindDef {
    name: "SliderInt",
    container: false,
    dependent: true,
    schema: SLIDER_BAR_SCHEMA,
    defaults: slider_int1_defaults,
};

pub static SLIDER_INT2: KindDef = KindDef {
    name: "SliderInt2",
    container: false,
    dependent: true,
    schema: SLIDER_SCHEMA,
    defaults: slider_int2_defaults,
};

pub static SLIDER_INT3: KindDef = KindDef {
    name: "SliderInt3",
    container: false,
    dependent: true,
    schema: SLIDER_SCHEMA,
    defaults: slider_int3_defaults,
};

pub static SLIDER_INT4: KindDef = KindDef {
    name: "SliderInt4",
    container: false,
    dependent: true,
    schema: SLIDER_SCHEMA,
    defaults: slider_int4_defaults,
};

pub static SLIDER_FLOAT: KindDef = KindDef {
    name: "SliderFloat",
    container: false,
    dependent: true,
    schema: SLIDER_BAR_SCHEMA,
    defaults: slider_float1_defaults,
};

pub static SLIDER_FLOAT2: KindDef = KindDef {
    name: "SliderFloat2",
    container: false,
    dependent: true,
    schema: SLIDER_SCHEMA,
    defaults: slider_float2_defaults,
};

pub static SLIDER_FLOAT3: KindDef = KindDef {
    name: "SliderFloat3",
    container: false,
    dependent: true,
    schema: SLIDER_SCHEMA,
    defaults: slider_float3_defaults,
};

pub static SLIDER_FLOAT4: KindDef = KindDef {
    name: "SliderFloat4",
    container: false,
    dependent: true,
    schema: SLIDER_SCHEMA,
    defaults: slider_float4_defaults,
};

// ---------------------------------------------------------------------------
// Drag family
// ---------------------------------------------------------------------------

static DRAG_SCHEMA: &[(&str, Binding)] = &[
    ("format", Binding::Synchronized),
    ("speed", Binding::Synchronized),
    ("width", Binding::Synchronized),
    ("no_input", Binding::Synchronized),
    ("clamped", Binding::Synchronized),
    ("min_value", Binding::Synchronized),
    ("max_value", Binding::Synchronized),
    ("callback", Binding::Special(&CALLBACK)),
    ("callback_data", Binding::Special(&CALLBACK_DATA)),
    ("source", Binding::Synchronized),
    ("enabled", Binding::Synchronized),
    ("tip", Binding::Synchronized),
    ("show", Binding::Synchronized),
    ("default_value", Binding::LocalOnly),
];

fn drag_int_defaults(default_value: Value) -> Vec<(&'static str, Value)> {
    let mut defaults = slider_int_defaults(default_value);
    defaults.push(("speed", Value::Float(1.0)));
    defaults
}

fn drag_float_defaults(default_value: Value) -> Vec<(&'static str, Value)> {
    let mut defaults = slider_float_defaults(default_value);
    defaults.push(("speed", Value::Float(1.0)));
    defaults
}

fn drag_int1_defaults() -> Vec<(&'static str, Value)> {
    drag_int_defaults(Value::Int(0))
}

fn drag_int2_defaults() -> Vec<(&'static str, Value)> {
    drag_int_defaults(Value::from(vec![0i64; 2]))
}

fn drag_int3_defaults() -> Vec<(&'static str, Value)> {
    drag_int_defaults(Value::from(vec![0i64; 3]))
}

fn drag_int4_defaults() -> Vec<(&'static str, Value)> {
    drag_int_defaults(Value::from(vec![0i64; 4]))
}

fn drag_float1_defaults() -> Vec<(&'static str, Value)> {
    drag_float_defaults(Value::Float(0.0))
}

fn drag_float2_defaults() -> Vec<(&'static str, Value)> {
    drag_float_defaults(Value::from(vec![0.0f64; 2]))
}

fn drag_float3_defaults() -> Vec<(&'static str, Value)> {
    drag_float_defaults(Value::from(vec![0.0f64; 3]))
}

fn drag_float4_defaults() -> Vec<(&'static str, Value)> {
    drag_float_defaults(Value::from(vec![0.0f64; 4]))
}

pub static DRAG_INT: KindDef = KindDef {
    name: "DragInt",
    container: false,
    dependent: true,
    schema: DRAG_SCHEMA,
    defaults: drag_int1_defaults,
};

pub static DRAG_INT2: KindDef = KindDef {
    name: "DragInt2",
    container: false,
    dependent: true,
    schema: DRAG_SCHEMA,
    defaults: drag_int2_defaults,
};

pub static DRAG_INT3: KindDef = KindDef {
    name: "DragInt3",
    container: false,
    dependent: true,
    schema: DRAG_SCHEMA,
    defaults: drag_int3_defaults,
};

pub static DRAG_INT4: KindDef = KindDef {
    name: "DragInt4",
    container: false,
    dependent: true,
    schema: DRAG_SCHEMA,
    defaults: drag_int4_defaults,
};

pub static DRAG_FLOAT: KindDef = KindDef {
    name: "DragFloat",
    container: false,
    dependent: true,
    schema: DRAG_SCHEMA,
    defaults: drag_float1_defaults,
};

pub static DRAG_FLOAT2: KindDef = KindDef {
    name: "DragFloat2",
    container: false,
    dependent: true,
    schema: DRAG_SCHEMA,
    defaults: drag_float2_defaults,
};

pub static DRAG_FLOAT3: KindDef = KindDef {
    name: "DragFloat3",
    container: false,
    dependent: true,
    schema: DRAG_SCHEMA,
    defaults: drag_float3_defaults,
};

pub static DRAG_FLOAT4: KindDef = KindDef {
    name: "DragFloat4",
    container: false,
    dependent: true,
    schema: DRAG_SCHEMA,
    defaults: drag_float4_defaults,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_matches_default_value_shape() {
        for (kind, arity) in [
            (&SLIDER_INT2, 2),
            (&SLIDER_INT3, 3),
            (&SLIDER_INT4, 4),
            (&INPUT_FLOAT4, 4),
            (&DRAG_FLOAT2, 2),
        ] {
            let defaults = (kind.defaults)();
            let (_, value) = defaults
                .iter()
                .find(|(n, _)| *n == "default_value")
                .unwrap();
            match value {
                Value::List(items) => assert_eq!(items.len(), arity, "{}", kind.name),
                other => panic!("{}: expected list default, got {other:?}", kind.name),
            }
        }
    }

    #[test]
    fn single_component_sliders_support_vertical_bars() {
        assert!(SLIDER_INT.has_attr("vertical"));
        assert!(SLIDER_FLOAT.has_attr("height"));
        assert!(!SLIDER_INT2.has_attr("vertical"));
        assert!(!DRAG_INT.has_attr("vertical"));
    }

    #[test]
    fn drag_kinds_carry_speed() {
        for kind in [&DRAG_INT, &DRAG_INT4, &DRAG_FLOAT, &DRAG_FLOAT3] {
            assert!(kind.has_attr("speed"), "{}", kind.name);
            let defaults = (kind.defaults)();
            let speed = defaults.iter().find(|(n, _)| *n == "speed").unwrap();
            assert_eq!(speed.1, Value::Float(1.0), "{}", kind.name);
        }
    }

    #[test]
    fn step_attrs_only_on_single_component_inputs() {
        assert!(INPUT_INT.has_attr("step"));
        assert!(INPUT_FLOAT.has_attr("step_fast"));
        assert!(!INPUT_INT3.has_attr("step"));
        assert!(!INPUT_FLOAT2.has_attr("step"));
    }

    #[test]
    fn format_strings_per_family() {
        let int_defaults = (SLIDER_INT4.defaults)();
        let float_defaults = (SLIDER_FLOAT4.defaults)();
        let fmt = |d: &[(&str, Value)]| {
            d.iter()
                .find(|(n, _)| *n == "format")
                .map(|(_, v)| v.clone())
                .unwrap()
        };
        assert_eq!(fmt(&int_defaults), Value::from("%d"));
        assert_eq!(fmt(&float_defaults), Value::from("%.3f"));
    }

    #[test]
    fn default_values_stay_local() {
        for kind in [&INPUT_TEXT, &INPUT_INT, &SLIDER_FLOAT2, &DRAG_INT4] {
            assert!(
                matches!(kind.binding("default_value"), Some(Binding::LocalOnly)),
                "{}",
                kind.name
            );
        }
    }
}
