use crate::algorithm::AlgorithmId;
use crate::error::Result;
use serde::Serialize;
use serde_json::{Map, Value};

/// JWT header
///
/// Every field of the decoded header JSON is kept, in document order. Typed
/// accessors cover the registered parameters; anything else is reachable
/// through [`TokenHeader::get`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TokenHeader {
    fields: Map<String, Value>,
}

impl TokenHeader {
    pub(crate) fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Algorithm used for signing (`alg`), if it is a string
    pub fn algorithm(&self) -> Option<&str> {
        self.fields.get("alg").and_then(Value::as_str)
    }

    /// Parse the `alg` header into a supported algorithm
    ///
    /// Fails with [`Error::AlgorithmUnsupported`](crate::Error::AlgorithmUnsupported)
    /// when the header names an unknown algorithm or has no `alg` at all.
    pub fn algorithm_id(&self) -> Result<AlgorithmId> {
        self.algorithm().unwrap_or_default().parse()
    }

    /// Token type (`typ`), typically "JWT"
    pub fn token_type(&self) -> Option<&str> {
        self.fields.get("typ").and_then(Value::as_str)
    }

    /// Key ID (`kid`)
    pub fn key_id(&self) -> Option<&str> {
        self.fields.get("kid").and_then(Value::as_str)
    }

    /// Any header field by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// All header fields in document order
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Indented JSON rendering, keys in document order
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.fields).unwrap_or_default()
    }
}
