//! Error types for the binding layer.
//!
//! All errors surface synchronously through `Result`; there is no deferred or
//! background error channel. Host failures propagate unchanged; the core never
//! retries a host call.

use thiserror::Error;

/// A failure reported by the host adapter.
///
/// Carries the name of the host operation that failed and a host-supplied
/// message. The core treats these as opaque: no retries, no interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("host operation `{op}` failed: {message}")]
pub struct HostError {
    /// Name of the host operation (e.g. `"create_widget"`).
    pub op: &'static str,
    /// Host-supplied failure description.
    pub message: String,
}

impl HostError {
    /// Create a new host error for the named operation.
    pub fn new(op: &'static str, message: impl Into<String>) -> Self {
        Self {
            op,
            message: message.into(),
        }
    }
}

/// Errors produced by the binding and tree-lifecycle engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A node was constructed with an explicit id already present in the registry.
    #[error("duplicate identifier `{0}`")]
    DuplicateId(String),

    /// An operation referenced an id that is not in the registry, or not in
    /// the host where host presence is required.
    #[error("invalid reference `{0}`")]
    InvalidReference(String),

    /// An attribute name that is not part of the node kind's schema.
    #[error("kind `{kind}` has no attribute `{attr}`")]
    UnknownAttribute {
        /// The node kind's name.
        kind: &'static str,
        /// The unknown attribute name.
        attr: String,
    },

    /// A tree-relationship operation on a kind that has no parent slot.
    #[error("node `{id}` of kind `{kind}` cannot be reparented")]
    NotDependent {
        /// The node's id.
        id: String,
        /// The node kind's name.
        kind: &'static str,
    },

    /// A host-adapter failure, propagated unchanged.
    #[error(transparent)]
    Host(#[from] HostError),
}

impl Error {
    /// Shorthand for an [`Error::InvalidReference`].
    pub(crate) fn invalid(id: impl Into<String>) -> Self {
        Error::InvalidReference(id.into())
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_error_display() {
        let err = HostError::new("create_widget", "id taken");
        assert_eq!(
            err.to_string(),
            "host operation `create_widget` failed: id taken"
        );
    }

    #[test]
    fn duplicate_id_display() {
        let err = Error::DuplicateId("b1".to_owned());
        assert_eq!(err.to_string(), "duplicate identifier `b1`");
    }

    #[test]
    fn unknown_attribute_display() {
        let err = Error::UnknownAttribute {
            kind: "Button",
            attr: "bogus".to_owned(),
        };
        assert_eq!(err.to_string(), "kind `Button` has no attribute `bogus`");
    }

    #[test]
    fn host_error_converts_transparently() {
        let err: Error = HostError::new("move_widget", "no such sibling").into();
        assert_eq!(
            err.to_string(),
            "host operation `move_widget` failed: no such sibling"
        );
        assert!(matches!(err, Error::Host(_)));
    }
}
