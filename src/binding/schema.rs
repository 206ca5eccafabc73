//! Attribute schemas: binding kinds, special-attribute protocols, kind definitions.
//!
//! A [`KindDef`] is the static, per-kind description the generic
//! synchronization engine interprets. It replaces per-attribute getter/setter
//! boilerplate with one table: each attribute name maps to a [`Binding`]
//! telling the engine how reads and writes reach the host (or don't).

use crate::host::{Host, HostResult};
use crate::value::Value;

// ---------------------------------------------------------------------------
// Binding
// ---------------------------------------------------------------------------

/// How one attribute is kept in sync with the host.
#[derive(Debug, Clone, Copy)]
pub enum Binding {
    /// Reconciled through the host's generic configuration path on every
    /// read/write while the node is valid.
    Synchronized,
    /// Never touches the host; purely cached (e.g. immutable construction
    /// parameters like a tooltip's target).
    LocalOnly,
    /// Requires a bespoke getter/setter pair with a fixed argument template.
    Special(&'static SpecialSpec),
}

// ---------------------------------------------------------------------------
// SpecialSpec
// ---------------------------------------------------------------------------

/// Protocol for an attribute the host cannot expose through its generic
/// configuration path.
///
/// The setter's arguments are assembled from `set_slots`: each slot name is
/// resolved against the node's current attribute cache, in order. This lets a
/// special attribute's write carry values of *other* attributes: the host
/// pairs a callback with its callback data in a single call.
pub struct SpecialSpec {
    /// The attribute this protocol serves (for diagnostics).
    pub name: &'static str,
    /// Cache attribute names resolved, in order, into the setter's arguments.
    pub set_slots: &'static [&'static str],
    /// Dedicated getter: takes the node id, returns the live value.
    pub get: fn(&dyn Host, &str) -> HostResult<Value>,
    /// Dedicated setter: takes the node id and the resolved slot values.
    pub set: fn(&mut dyn Host, &str, &[Value]) -> HostResult<()>,
}

impl std::fmt::Debug for SpecialSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpecialSpec")
            .field("name", &self.name)
            .field("set_slots", &self.set_slots)
            .finish()
    }
}

fn callback_get(host: &dyn Host, id: &str) -> HostResult<Value> {
    host.callback(id)
}

fn callback_set(host: &mut dyn Host, id: &str, args: &[Value]) -> HostResult<()> {
    let callback = args.first().cloned().unwrap_or_default();
    let data = args.get(1).cloned().unwrap_or_default();
    host.set_callback(id, callback, data)
}

fn callback_data_get(host: &dyn Host, id: &str) -> HostResult<Value> {
    host.callback_data(id)
}

fn callback_data_set(host: &mut dyn Host, id: &str, args: &[Value]) -> HostResult<()> {
    let data = args.first().cloned().unwrap_or_default();
    host.set_callback_data(id, data)
}

/// Special protocol for the `callback` attribute: writes pair the callback
/// with the cached `callback_data` in one host call.
pub static CALLBACK: SpecialSpec = SpecialSpec {
    name: "callback",
    set_slots: &["callback", "callback_data"],
    get: callback_get,
    set: callback_set,
};

/// Special protocol for the `callback_data` attribute.
pub static CALLBACK_DATA: SpecialSpec = SpecialSpec {
    name: "callback_data",
    set_slots: &["callback_data"],
    get: callback_data_get,
    set: callback_data_set,
};

// ---------------------------------------------------------------------------
// KindDef
// ---------------------------------------------------------------------------

/// Static definition of one widget kind.
///
/// Fixed at definition time; shared by every node of the kind. The catalogue
/// of concrete kinds lives in [`crate::kinds`].
pub struct KindDef {
    /// Kind name, also the prefix for generated ids (`"Button<0>"`).
    pub name: &'static str,
    /// Whether materialization opens the host's container stack.
    pub container: bool,
    /// Whether nodes of this kind must live inside a parent container.
    pub dependent: bool,
    /// Attribute table: name to binding kind, in materialization order.
    pub schema: &'static [(&'static str, Binding)],
    /// Constructor for the kind's default attribute values.
    ///
    /// Called once per node so every instance owns an independent copy of
    /// multi-component defaults.
    pub defaults: fn() -> Vec<(&'static str, Value)>,
}

impl KindDef {
    /// Look up the binding for an attribute name, if it is in the schema.
    pub fn binding(&self, attr: &str) -> Option<&'static Binding> {
        self.schema
            .iter()
            .find(|(name, _)| *name == attr)
            .map(|(_, binding)| binding)
    }

    /// Whether the schema declares this attribute.
    pub fn has_attr(&self, attr: &str) -> bool {
        self.binding(attr).is_some()
    }

    /// Iterate the schema's attribute names in declaration order.
    pub fn attrs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.schema.iter().map(|(name, _)| *name)
    }
}

impl std::fmt::Debug for KindDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KindDef")
            .field("name", &self.name)
            .field("container", &self.container)
            .field("dependent", &self.dependent)
            .finish()
    }
}

impl PartialEq for KindDef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_defaults() -> Vec<(&'static str, Value)> {
        vec![("show", Value::Bool(true))]
    }

    static TEST_KIND: KindDef = KindDef {
        name: "Test",
        container: false,
        dependent: true,
        schema: &[
            ("show", Binding::Synchronized),
            ("callback", Binding::Special(&CALLBACK)),
            ("stash", Binding::LocalOnly),
        ],
        defaults: no_defaults,
    };

    #[test]
    fn binding_lookup() {
        assert!(matches!(
            TEST_KIND.binding("show"),
            Some(Binding::Synchronized)
        ));
        assert!(matches!(TEST_KIND.binding("stash"), Some(Binding::LocalOnly)));
        assert!(TEST_KIND.binding("missing").is_none());
    }

    #[test]
    fn special_binding_carries_spec() {
        match TEST_KIND.binding("callback") {
            Some(Binding::Special(spec)) => {
                assert_eq!(spec.name, "callback");
                assert_eq!(spec.set_slots, &["callback", "callback_data"]);
            }
            other => panic!("expected special binding, got {other:?}"),
        }
    }

    #[test]
    fn attrs_in_declaration_order() {
        let names: Vec<_> = TEST_KIND.attrs().collect();
        assert_eq!(names, vec!["show", "callback", "stash"]);
    }

    #[test]
    fn defaults_are_independent_copies() {
        let mut first = (TEST_KIND.defaults)();
        let second = (TEST_KIND.defaults)();
        first[0].1 = Value::Bool(false);
        assert_eq!(second[0].1, Value::Bool(true));
    }

    #[test]
    fn kind_eq_by_name() {
        static OTHER: KindDef = KindDef {
            name: "Test",
            container: true,
            dependent: false,
            schema: &[],
            defaults: Vec::new,
        };
        assert_eq!(TEST_KIND, OTHER);
    }
}
