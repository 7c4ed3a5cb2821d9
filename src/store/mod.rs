//! Action-dispatch state management.
//!
//! A [`Store`] owns the application state together with three registries:
//! actions, reducer bindings (one [`Notifier`](crate::Notifier) per action) and
//! selectors. Dispatching an action is the only way the state changes.

mod action;
mod error;
mod options;
mod store;

pub use action::{ActionDescriptor, ActionKind};
pub use error::{Result, StoreError};
pub use options::{RebindPolicy, StoreOptions};
pub use store::{State, Store};
