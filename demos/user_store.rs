//! Wiring a user store: actions, a reducer binding, a transition and a selector

use courier::{Store, StoreError, Value};
use serde_json::json;
use tracing_subscriber::EnvFilter;

const USER_CREATE: &str = "[USER] create";
const USER_GET_ALL: &str = "[USER] Get All";
const USER_GET_ONE: &str = "[USER] Get One";

fn main() -> Result<(), StoreError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let store = Store::create();

    let create = store.register_action(USER_CREATE, true);
    store.register_action(USER_GET_ALL, false);
    store.register_action(USER_GET_ONE, true);

    store.register_reducer(&create)?;
    store.on(&create, |mut state, props| {
        state.insert("user".into(), props.cloned().unwrap_or(Value::Null));
        state
    })?;

    store.dispatch(&create, Some(json!({ "name": "Bob", "age": 23 })))?;

    let users = store.register_selector("users", |state| state.get("user").cloned());
    println!("{:?}", store.select::<Option<Value>>(&users)?);

    // Registered but never bound.
    if let Err(err) = store.dispatch(USER_GET_ALL, None) {
        println!("{USER_GET_ALL}: {err}");
    }

    // Requires a payload.
    store.register_reducer(USER_GET_ONE)?;
    if let Err(err) = store.dispatch(USER_GET_ONE, None) {
        println!("{USER_GET_ONE}: {err}");
    }

    println!("{store:?}");
    Ok(())
}
