use serde::{Deserialize, Serialize};

/// Whether dispatching an action must carry a payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// The payload may be omitted.
    #[default]
    NoPayload,
    /// Dispatch fails with `PropsRequired` when the payload is omitted.
    Payload,
}

impl From<bool> for ActionKind {
    fn from(requires_payload: bool) -> Self {
        if requires_payload {
            Self::Payload
        } else {
            Self::NoPayload
        }
    }
}

/// A registered action. The name doubles as its registry key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionDescriptor {
    /// Action name and registry key.
    pub name: String,
    /// Whether dispatch must carry a payload.
    pub kind: ActionKind,
}

impl ActionDescriptor {
    /// Create a descriptor.
    pub fn new(name: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Whether dispatch without a payload fails with `PropsRequired`.
    pub fn requires_payload(&self) -> bool {
        self.kind == ActionKind::Payload
    }
}
