//! Host adapter boundary.
//!
//! The [`Host`] trait is the only surface through which the binding layer talks
//! to the external retained-mode rendering system. The host owns all real
//! widget state (creation, layout, drawing, input) and this trait exposes
//! just the primitives the synchronization engine needs. All calls are
//! synchronous round-trips on the single UI thread.
//!
//! An in-memory implementation for tests lives in [`crate::testing::FakeHost`].

use crate::error::HostError;
use crate::value::Value;

/// Result alias for host-adapter operations.
pub type HostResult<T> = std::result::Result<T, HostError>;

/// Primitive operations the core requires from the rendering host.
///
/// Implementations are expected to be idempotent-on-failure: a failed call must
/// not leave partial host-side mutation beyond what the adapter documents.
pub trait Host {
    /// Whether a widget (or value-store key) with this id currently exists.
    fn exists(&self, id: &str) -> bool;

    /// Create a widget of the given kind with the full configuration set.
    ///
    /// `config` carries every schema attribute's current value in schema order,
    /// plus `parent`/`before` placement intent for dependent kinds. An empty
    /// `parent` means the currently open container stack top.
    fn create_widget(&mut self, kind: &str, id: &str, config: &[(&str, Value)]) -> HostResult<()>;

    /// Destroy a widget and its host-side subtree.
    fn destroy_widget(&mut self, id: &str) -> HostResult<()>;

    /// Read a named configuration value from a live widget.
    fn config(&self, id: &str, attr: &str) -> HostResult<Value>;

    /// Write a named configuration value on a live widget.
    fn set_config(&mut self, id: &str, attr: &str, value: &Value) -> HostResult<()>;

    /// Read the event callback registered on a widget.
    ///
    /// Part of the special-attribute protocol: callbacks do not go through the
    /// generic configuration path.
    fn callback(&self, id: &str) -> HostResult<Value>;

    /// Register an event callback together with its callback data in one call.
    fn set_callback(&mut self, id: &str, callback: Value, data: Value) -> HostResult<()>;

    /// Read the callback data registered on a widget.
    fn callback_data(&self, id: &str) -> HostResult<Value>;

    /// Replace only the callback data on a widget.
    fn set_callback_data(&mut self, id: &str, data: Value) -> HostResult<()>;

    /// The authoritative current parent of a widget. Empty string for roots.
    fn parent(&self, id: &str) -> HostResult<String>;

    /// The authoritative current children of a widget, in sibling order.
    fn children(&self, id: &str) -> HostResult<Vec<String>>;

    /// Relocate a widget under `new_parent`, placed immediately before
    /// `before`, or appended when `before` is empty.
    fn move_widget(&mut self, id: &str, new_parent: &str, before: &str) -> HostResult<()>;

    /// Reorder a widget one position earlier among its siblings.
    /// No-op (not an error) if already first; never wraps.
    fn move_up(&mut self, id: &str) -> HostResult<()>;

    /// Reorder a widget one position later among its siblings.
    /// No-op (not an error) if already last; never wraps.
    fn move_down(&mut self, id: &str) -> HostResult<()>;

    /// Open the container stack on a widget: subsequent creations with empty
    /// `parent` intent target it until [`Host::end_container`].
    fn begin_container(&mut self, id: &str) -> HostResult<()>;

    /// Close the most recently opened container stack entry.
    fn end_container(&mut self) -> HostResult<()>;

    /// Write a named entry in the host's separate value store.
    fn set_value(&mut self, key: &str, value: &Value) -> HostResult<()>;

    /// Read a named entry from the host's value store.
    fn value(&self, key: &str) -> HostResult<Value>;
}
