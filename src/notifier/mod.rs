//! Minimal publish-subscribe primitive.
//!
//! A [`Notifier`] decouples "an action happened" from "something reacts to it".
//! The store keeps one notifier per action and subscribes its transitions to it.

mod notifier;

pub use notifier::{Notifier, Subscriber};
