use std::any::{type_name, Any};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use serde_json::{Map, Value};
use tracing::{debug, trace, warn};

use super::action::{ActionDescriptor, ActionKind};
use super::error::{Result, StoreError};
use super::options::{RebindPolicy, StoreOptions};
use crate::notifier::Notifier;

/// Default state shape: string keys mapped to arbitrary JSON values.
pub type State = Map<String, Value>;

type Selector<S> = Arc<dyn Fn(&S) -> Box<dyn Any> + Send + Sync>;

struct Registries<S, P> {
    actions: HashMap<String, ActionDescriptor>,
    reducers: HashMap<String, Notifier<Option<P>>>,
    selectors: HashMap<String, Selector<S>>,
}

impl<S, P> Registries<S, P> {
    fn new() -> Self {
        Self {
            actions: HashMap::new(),
            reducers: HashMap::new(),
            selectors: HashMap::new(),
        }
    }
}

/// A centralized state container driven by named actions.
///
/// Actions are registered by name, each action gets a notifier ("reducer
/// binding"), and transitions are subscribed to that notifier with [`Store::on`].
/// [`Store::dispatch`] is the only path that changes the state. Derived values
/// are read through named selectors that evaluate against the live state.
///
/// A `Store` is a handle: clones share the same state and registries.
///
/// Transitions read a snapshot and write their result under separate locks, so
/// concurrent dispatches from several threads are last-write-wins.
///
/// # Examples
///
/// ```
/// use courier::{Store, Value};
/// use serde_json::json;
///
/// let store = Store::new();
/// let create = store.register_action("[USER] create", true);
/// store.register_reducer(&create)?;
/// store.on(&create, |mut state, props| {
///     state.insert("user".into(), props.cloned().unwrap_or(Value::Null));
///     state
/// })?;
///
/// let users = store.register_selector("users", |state| state.get("user").cloned());
/// store.dispatch(&create, Some(json!({ "name": "Bob", "age": 23 })))?;
///
/// assert_eq!(
///     store.select::<Option<Value>>(&users)?,
///     Some(json!({ "name": "Bob", "age": 23 }))
/// );
/// # Ok::<(), courier::StoreError>(())
/// ```
pub struct Store<S = State, P = Value> {
    state: Arc<RwLock<S>>,
    registries: Arc<RwLock<Registries<S, P>>>,
    options: Arc<StoreOptions>,
}

impl Store<State, Value> {
    /// Create an isolated store with an empty state and default options.
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    /// Create an isolated store with an empty state.
    pub fn with_options(options: StoreOptions) -> Self {
        Self::with_state_and_options(State::new(), options)
    }

    /// Get the process-wide default store.
    ///
    /// The store is created on the first call and lives for the rest of the
    /// process. Every call returns a handle to the same instance.
    pub fn create() -> Self {
        static DEFAULT: OnceLock<Store<State, Value>> = OnceLock::new();
        DEFAULT
            .get_or_init(|| {
                debug!("Creating default store");
                Self::new()
            })
            .clone()
    }
}

impl<S, P> Store<S, P>
where
    S: Clone + Send + Sync + 'static,
    P: Send + Sync + 'static,
{
    /// Create an isolated store holding `initial`.
    pub fn with_state(initial: S) -> Self {
        Self::with_state_and_options(initial, StoreOptions::default())
    }

    /// Create an isolated store holding `initial`, configured by `options`.
    pub fn with_state_and_options(initial: S, options: StoreOptions) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial)),
            registries: Arc::new(RwLock::new(Registries::new())),
            options: Arc::new(options),
        }
    }

    /// Whether two handles point at the same store.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.state, &b.state)
    }

    /// The options this store was created with.
    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Register an action, replacing any action with the same name.
    ///
    /// `kind` accepts an [`ActionKind`] or a `bool` ("requires a payload").
    /// Returns the name, which serves as the action handle.
    pub fn register_action(&self, name: impl Into<String>, kind: impl Into<ActionKind>) -> String {
        let descriptor = ActionDescriptor::new(name, kind.into());
        let name = descriptor.name.clone();
        debug!(action = %name, kind = ?descriptor.kind, "Registering action");
        self.registries
            .write()
            .actions
            .insert(name.clone(), descriptor);
        name
    }

    /// Bind a fresh notifier to `action_name`.
    ///
    /// With [`RebindPolicy::Replace`] an existing binding is dropped along with
    /// every transition subscribed to it. With [`RebindPolicy::Reject`] an
    /// existing binding is kept and [`StoreError::ReducerAlreadyBound`] is
    /// returned.
    pub fn register_reducer(&self, action_name: impl Into<String>) -> Result<String> {
        let name = action_name.into();
        let mut registries = self.registries.write();

        if let Some(previous) = registries.reducers.get(&name) {
            match self.options.rebind {
                RebindPolicy::Reject => {
                    return Err(StoreError::ReducerAlreadyBound(name));
                }
                RebindPolicy::Replace => {
                    warn!(
                        action = %name,
                        dropped = previous.len(),
                        "Replacing reducer binding"
                    );
                }
            }
        }

        debug!(action = %name, "Registering reducer");
        registries.reducers.insert(name.clone(), Notifier::new());
        Ok(name)
    }

    /// Subscribe a state transition to the notifier bound to `action_name`.
    ///
    /// On every dispatch the transition receives a snapshot of the state taken
    /// when it starts and the payload, and its return value replaces the
    /// state. Transitions bound to the same action run in binding order.
    pub fn on<F>(&self, action_name: &str, transition: F) -> Result<()>
    where
        F: Fn(S, Option<&P>) -> S + Send + Sync + 'static,
    {
        let mut registries = self.registries.write();
        let notifier = registries
            .reducers
            .get_mut(action_name)
            .ok_or_else(|| StoreError::ReducerNotFound(action_name.to_string()))?;

        let state = Arc::clone(&self.state);
        notifier.subscribe(move |payload: &Option<P>| {
            let snapshot = state.read().clone();
            let next = transition(snapshot, payload.as_ref());
            *state.write() = next;
        });

        debug!(action = action_name, subscribers = notifier.len(), "Bound transition");
        Ok(())
    }

    /// Register a named selector, replacing any selector with the same key.
    ///
    /// The projector runs against the state current at each [`Store::select`]
    /// call, not the state at registration. It runs under the state read lock
    /// and must not dispatch. Returns the key.
    pub fn register_selector<V, F>(&self, key: impl Into<String>, projector: F) -> String
    where
        V: 'static,
        F: Fn(&S) -> V + Send + Sync + 'static,
    {
        let key = key.into();
        debug!(selector = %key, output = type_name::<V>(), "Registering selector");
        let selector: Selector<S> =
            Arc::new(move |state: &S| Box::new(projector(state)) as Box<dyn Any>);
        self.registries
            .write()
            .selectors
            .insert(key.clone(), selector);
        key
    }

    /// Dispatch an action, publishing `payload` to its bound transitions.
    ///
    /// Checks, in order, that the action exists, that it has a reducer
    /// binding, and that a payload is present when the action requires one.
    /// `None` reaches the transitions as "no payload"; it is not turned into a
    /// null value.
    pub fn dispatch(&self, action_name: &str, payload: Option<P>) -> Result<()> {
        let notifier = {
            let registries = self.registries.read();
            let action = registries
                .actions
                .get(action_name)
                .ok_or_else(|| StoreError::ActionNotFound(action_name.to_string()))?;
            let notifier = registries
                .reducers
                .get(action_name)
                .ok_or_else(|| StoreError::ReducerNotFound(action_name.to_string()))?;
            if action.requires_payload() && payload.is_none() {
                return Err(StoreError::PropsRequired(action_name.to_string()));
            }
            notifier.clone()
        };

        if self.options.trace_dispatch {
            debug!(
                action = action_name,
                subscribers = notifier.len(),
                has_payload = payload.is_some(),
                "Dispatching action"
            );
        }

        // Registries are unlocked here so transitions may dispatch re-entrantly.
        notifier.publish(&payload);
        Ok(())
    }

    /// Evaluate the selector registered under `key` against the current state.
    pub fn select<V: 'static>(&self, key: &str) -> Result<V> {
        let selector = self
            .registries
            .read()
            .selectors
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::SelectorNotFound(key.to_string()))?;

        trace!(selector = key, "Evaluating selector");
        let value = selector(&*self.state.read());
        value
            .downcast::<V>()
            .map(|value| *value)
            .map_err(|_| StoreError::SelectorTypeMismatch {
                key: key.to_string(),
                expected: type_name::<V>(),
            })
    }

    /// Get a clone of the current state.
    pub fn state(&self) -> S {
        self.state.read().clone()
    }

    /// Read the state without cloning it.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&S) -> R,
    {
        let state = self.state.read();
        f(&*state)
    }

    /// Registered actions, sorted by name.
    pub fn actions(&self) -> Vec<ActionDescriptor> {
        let mut actions: Vec<_> = self.registries.read().actions.values().cloned().collect();
        actions.sort_by(|a, b| a.name.cmp(&b.name));
        actions
    }

    /// The descriptor registered under `name`, if any.
    pub fn action(&self, name: &str) -> Option<ActionDescriptor> {
        self.registries.read().actions.get(name).cloned()
    }

    /// Names of actions with a reducer binding, sorted.
    pub fn reducers(&self) -> Vec<String> {
        sorted_keys(&self.registries.read().reducers)
    }

    /// Number of transitions bound to `action_name`, if it has a binding.
    pub fn subscriber_count(&self, action_name: &str) -> Option<usize> {
        self.registries
            .read()
            .reducers
            .get(action_name)
            .map(Notifier::len)
    }

    /// A copy of the notifier bound to `action_name`.
    ///
    /// Publishing on the copy runs the same transitions as a dispatch would,
    /// minus the action checks.
    pub fn notifier(&self, action_name: &str) -> Option<Notifier<Option<P>>> {
        self.registries.read().reducers.get(action_name).cloned()
    }

    /// Registered selector keys, sorted.
    pub fn selectors(&self) -> Vec<String> {
        sorted_keys(&self.registries.read().selectors)
    }
}

fn sorted_keys<V>(map: &HashMap<String, V>) -> Vec<String> {
    let mut keys: Vec<_> = map.keys().cloned().collect();
    keys.sort();
    keys
}

impl<S, P> Default for Store<S, P>
where
    S: Clone + Default + Send + Sync + 'static,
    P: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::with_state(S::default())
    }
}

impl<S, P> Clone for Store<S, P> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            registries: Arc::clone(&self.registries),
            options: Arc::clone(&self.options),
        }
    }
}

impl<S, P> fmt::Debug for Store<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registries = self.registries.read();
        f.debug_struct("Store")
            .field("actions", &registries.actions.len())
            .field("reducers", &registries.reducers.len())
            .field("selectors", &registries.selectors.len())
            .field("options", &self.options)
            .finish()
    }
}
