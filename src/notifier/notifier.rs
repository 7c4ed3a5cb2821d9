use std::fmt;
use std::sync::Arc;

/// A callback registered on a [`Notifier`].
pub type Subscriber<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// An ordered list of subscribers plus a fan-out operation.
///
/// Subscribers run synchronously in the order they were added. There is no
/// de-duplication and no unsubscribe. Cloning a notifier copies the list of
/// subscribers, so a clone can be published without borrowing the original.
pub struct Notifier<T> {
    subscribers: Vec<Subscriber<T>>,
}

impl<T> Notifier<T> {
    /// Create a notifier with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Append a subscriber to the end of the list.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.subscribers.push(Arc::new(callback));
    }

    /// Call every subscriber with `value`, in subscription order.
    ///
    /// A panicking subscriber unwinds straight to the caller; later
    /// subscribers are not run.
    pub fn publish(&self, value: &T) {
        for subscriber in &self.subscribers {
            subscriber(value);
        }
    }

    /// Number of subscribers currently registered.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Whether no subscriber is registered.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<T> Default for Notifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Notifier<T> {
    fn clone(&self) -> Self {
        Self {
            subscribers: self.subscribers.clone(),
        }
    }
}

impl<T> fmt::Debug for Notifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
