//! Headless testing support: an in-memory host and tree-dump helpers.
//!
//! [`FakeHost`] implements the full [`Host`](crate::host::Host) trait against
//! plain in-process state, so the binding engine can be exercised without a
//! real rendering host. [`tree_to_string`] captures the resulting widget tree
//! as text for snapshot-style assertions.

pub mod host;
pub mod snapshot;

pub use host::FakeHost;
pub use snapshot::tree_to_string;
