//! Node identity, registry, and id generation.

pub mod idgen;
pub mod node;
pub mod registry;

pub use idgen::IdGenerator;
pub use node::{Node, NodeKey, NodeRef};
pub use registry::Registry;
