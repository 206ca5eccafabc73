//! Generic attribute reconciliation.
//!
//! One interpreter, driven by the kind's schema table, covers every attribute
//! of every kind. While a node is valid the host is the source of truth for
//! reads (its state may have been changed through the UI or by code operating
//! on the host directly) and writes go through immediately (write-through,
//! not batched). While a node is unmaterialized only the local cache is
//! touched, so intent accumulates and is pushed wholesale at materialization.

use tracing::trace;

use crate::binding::schema::Binding;
use crate::error::{Error, Result};
use crate::host::Host;
use crate::tree::node::Node;
use crate::value::Value;

fn binding_for(node: &Node, attr: &str) -> Result<&'static Binding> {
    node.kind().binding(attr).ok_or_else(|| Error::UnknownAttribute {
        kind: node.kind().name,
        attr: attr.to_owned(),
    })
}

/// Read an attribute, reconciling the cache with the host when the node is valid.
pub fn read(host: &dyn Host, node: &mut Node, attr: &str) -> Result<Value> {
    let binding = binding_for(node, attr)?;
    let valid = host.exists(node.id());

    let value = match binding {
        Binding::Synchronized if valid => {
            let value = host.config(node.id(), attr)?;
            node.cache_insert(attr, value.clone());
            value
        }
        Binding::Special(spec) if valid => {
            let value = (spec.get)(host, node.id())?;
            node.cache_insert(attr, value.clone());
            value
        }
        // Local-only attributes and unmaterialized nodes read from the cache.
        _ => node.cached(attr),
    };

    trace!(id = node.id(), attr, valid, "attribute read");
    Ok(value)
}

/// Write an attribute: cache unconditionally, push to the host if valid.
///
/// Callers converting node references to values do so before this point; the
/// cache only ever holds plain values. A write to a valid node causes an
/// observable host mutation synchronously on assignment.
pub fn write(host: &mut dyn Host, node: &mut Node, attr: &str, value: Value) -> Result<()> {
    let binding = binding_for(node, attr)?;
    node.cache_insert(attr, value.clone());

    if host.exists(node.id()) {
        match binding {
            Binding::Synchronized => host.set_config(node.id(), attr, &value)?,
            Binding::Special(spec) => {
                // Resolve the setter's argument template against the cache so
                // paired attributes travel in one host call.
                let args: Vec<Value> = spec
                    .set_slots
                    .iter()
                    .map(|slot| node.cached(slot))
                    .collect();
                (spec.set)(host, node.id(), &args)?;
            }
            Binding::LocalOnly => {}
        }
    }

    trace!(id = node.id(), attr, "attribute write");
    Ok(())
}
