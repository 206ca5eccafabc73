//! Dynamically-typed attribute values.
//!
//! Every attribute carried through the binding layer is a [`Value`]. The host
//! adapter works entirely in `Value`s; shape validation is the host's concern,
//! not the binding layer's.

use std::fmt;
use std::rc::Rc;

/// An event callback, invoked by the host's event loop with the sender's id
/// and the cached callback data.
///
/// Callbacks run on the same thread that drives the host loop and may mutate
/// the tree; reentrancy is plain call-stack recursion.
pub type CallbackFn = Rc<dyn Fn(&str, &Value)>;

/// A dynamically-typed attribute value.
#[derive(Clone, Default)]
pub enum Value {
    /// Unset / no value.
    #[default]
    Null,
    /// Boolean flag (e.g. `show`, `enabled`).
    Bool(bool),
    /// Integer scalar (e.g. `width`, `direction`).
    Int(i64),
    /// Floating-point scalar (e.g. `speed`, `horizontal_spacing`).
    Float(f64),
    /// String (labels, tooltips, ids of other nodes).
    Str(String),
    /// Multi-component value (e.g. RGBA color, 4-wide slider defaults).
    List(Vec<Value>),
    /// Event callback.
    Callback(CallbackFn),
}

impl Value {
    /// Build a callback value from a closure.
    pub fn callback(f: impl Fn(&str, &Value) + 'static) -> Self {
        Value::Callback(Rc::new(f))
    }

    /// Whether this value is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The boolean payload, if any.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer payload, if any.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The float payload, if any. Integers widen.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// The string payload, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The list payload, if any.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(x) => write!(f, "Float({x})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::List(items) => f.debug_tuple("List").field(items).finish(),
            Value::Callback(_) => write!(f, "Callback(..)"),
        }
    }
}

// Callbacks compare by identity; everything else by payload.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Callback(a), Value::Callback(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<CallbackFn> for Value {
    fn from(f: CallbackFn) -> Self {
        Value::Callback(f)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}
