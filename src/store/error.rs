//! Error types for the store.
//!
//! Every failing store operation returns [`StoreError`] through the crate
//! [`Result`] alias. Errors are raised at the call that broke a precondition
//! and are never retried or recovered internally.

/// Errors raised by [`Store`](super::Store) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The dispatched action was never registered.
    #[error("no action found with the name `{0}`")]
    ActionNotFound(String),

    /// The action has no notifier bound to it.
    #[error("no reducer with the name `{0}` was found")]
    ReducerNotFound(String),

    /// The action requires a payload and none was supplied.
    #[error("argument \"props\" was not passed to `{0}`")]
    PropsRequired(String),

    /// No selector is registered under the key.
    #[error("no selector found with the name `{0}`")]
    SelectorNotFound(String),

    /// A reducer was re-registered while
    /// [`RebindPolicy::Reject`](super::RebindPolicy::Reject) is active.
    #[error("a reducer is already bound to `{0}`")]
    ReducerAlreadyBound(String),

    /// The selector produces a different type than the one requested.
    #[error("selector `{key}` does not produce a `{expected}`")]
    SelectorTypeMismatch {
        /// The selector key.
        key: String,
        /// Name of the requested type.
        expected: &'static str,
    },
}

/// Result alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
