//! # hostlink
//!
//! An attribute synchronization and tree-lifecycle engine for UI widgets
//! owned by an external retained-mode rendering host.
//!
//! Application code describes widgets as ordinary in-process nodes; the host
//! owns the live visual state. Reads on a live node pull from the host and
//! refresh the local cache, writes update the cache and push through
//! immediately, and everything written before materialization is delivered in
//! one shot when the node is added. Kinds are pure data: a static schema
//! table drives one generic reconciliation routine, so adding a widget kind
//! never adds get/set code.
//!
//! ## Core Systems
//!
//! - **[`host`]**: the `Host` adapter trait, the boundary to the rendering host
//! - **[`value`]**: the dynamically-typed `Value` carried through the binding layer
//! - **[`binding`]**: attribute schemas, the reconciliation interpreter, value-store slots
//! - **[`tree`]**: nodes, the slotmap-backed registry, collision-free id generation
//! - **[`kinds`]**: the static kind catalogue (windows, buttons, inputs, node editor)
//! - **[`context`]**: the application-facing engine tying host, registry, and ids together
//! - **[`testing`]**: an in-memory host and tree-dump helpers for headless tests
//! - **[`error`]**: the crate's error taxonomy

// Foundation
pub mod error;
pub mod host;
pub mod value;

// Binding engine
pub mod binding;
pub mod tree;

// Kind catalogue
pub mod kinds;

// Application
pub mod context;

// Headless testing support
pub mod testing;

pub use context::Context;
pub use error::{Error, Result};
pub use host::Host;
pub use tree::node::NodeRef;
pub use value::Value;
