use serde::Deserialize;

/// What `register_reducer` does when the action already has a notifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RebindPolicy {
    /// Install a fresh notifier, dropping the transitions bound to the old one.
    #[default]
    Replace,
    /// Keep the existing notifier and return `ReducerAlreadyBound`.
    Reject,
}

/// Store construction options.
///
/// Every field has a default, so a partial document deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    /// Behaviour when a reducer binding is registered twice.
    pub rebind: RebindPolicy,

    /// Emit a `debug` event for every dispatch.
    pub trace_dispatch: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            rebind: RebindPolicy::Replace,
            trace_dispatch: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let options: StoreOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, StoreOptions::default());
        assert_eq!(options.rebind, RebindPolicy::Replace);
        assert!(options.trace_dispatch);
    }

    #[test]
    fn partial_document_overrides_named_fields() {
        let options: StoreOptions = serde_json::from_str(r#"{ "rebind": "reject" }"#).unwrap();
        assert_eq!(options.rebind, RebindPolicy::Reject);
        assert!(options.trace_dispatch);
    }
}
