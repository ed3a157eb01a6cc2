use anyhow::Result;
use schemars::{JsonSchema, Schema};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use strum::{EnumMessage, IntoEnumIterator};

/// A tagged `{ "type": kind, "params": {...} }` enum the wizard can fill in
/// from its JSON schema.
pub trait UIChoice: Sized + Serialize + DeserializeOwned + JsonSchema {
    type Kind: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator;

    fn schema() -> Schema;

    fn prompt_label() -> &'static str {
        "Choose a type:"
    }
    fn prompt_help() -> &'static str {
        "↑/↓ to navigate, ↵ to select"
    }

    /// Fallback `params` for fields whose schema carries no default.
    fn default_params(kind: Self::Kind) -> Value;

    fn from_parts(kind: Self::Kind, params: Value) -> Result<Self> {
        let key: &'static str = kind.into();
        let v = json!({ "type": key, "params": params });
        Ok(serde_json::from_value(v)?)
    }
}
