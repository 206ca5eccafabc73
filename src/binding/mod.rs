//! Attribute binding: schemas, the reconciliation engine, value-store slots.

pub mod schema;
pub mod store;
pub mod sync;

pub use schema::{Binding, KindDef, SpecialSpec};
pub use store::ValueSlot;
