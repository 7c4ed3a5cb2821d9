//! # Courier
//!
//! A small action-dispatch state store for Rust.
//!
//! Courier keeps application state in one place and changes it only through
//! named actions:
//!
//! ## Notifier (Low-level primitive)
//!
//! - `Notifier<T>` - An ordered list of subscribers with a synchronous fan-out
//!
//! ## Store (State management)
//!
//! - `Store<S, P>` - Owns the state plus registries of actions, reducer
//!   bindings and selectors
//! - Actions are registered by name, optionally requiring a payload
//! - Transitions bound to an action replace the state on dispatch
//! - Selectors project derived values from the live state
//!
//! The default flavour `Store<State, Value>` holds a JSON object and accepts
//! JSON payloads; any `Clone` state and payload type works as well.

pub mod notifier;
pub mod store;

// Re-export main types for convenience
pub use notifier::Notifier;
pub use serde_json::Value;
pub use store::{
    ActionDescriptor, ActionKind, RebindPolicy, Result, State, Store, StoreError, StoreOptions,
};
