use serde::Serialize;
use serde_json::{Map, Value};

/// JWT payload (claims set)
///
/// Claims are kept as dynamic JSON in document order. Time claim accessors
/// return whole epoch seconds (fractions floored) for display; claims
/// validation compares the exact numeric value. Non-numeric values count as
/// absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TokenPayload {
    claims: Map<String, Value>,
}

/// The `aud` claim, which may be a single string or a list of strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Audience {
    /// `"aud": "api"`
    Single(String),
    /// `"aud": ["api", "admin"]`
    Multiple(Vec<String>),
}

impl Audience {
    /// Check whether the audience includes `value`
    pub fn contains(&self, value: &str) -> bool {
        match self {
            Audience::Single(aud) => aud == value,
            Audience::Multiple(auds) => auds.iter().any(|aud| aud == value),
        }
    }

    /// Iterate over the audience entries
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let entries: &[String] = match self {
            Audience::Single(aud) => std::slice::from_ref(aud),
            Audience::Multiple(auds) => auds,
        };
        entries.iter().map(String::as_str)
    }
}

impl TokenPayload {
    pub(crate) fn new(claims: Map<String, Value>) -> Self {
        Self { claims }
    }

    /// Issuer (`iss`)
    pub fn issuer(&self) -> Option<&str> {
        self.string_claim("iss")
    }

    /// Subject (`sub`)
    pub fn subject(&self) -> Option<&str> {
        self.string_claim("sub")
    }

    /// Audience (`aud`)
    ///
    /// Non-string entries of an audience array are skipped.
    pub fn audience(&self) -> Option<Audience> {
        match self.claims.get("aud")? {
            Value::String(aud) => Some(Audience::Single(aud.clone())),
            Value::Array(entries) => Some(Audience::Multiple(
                entries
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect(),
            )),
            _ => None,
        }
    }

    /// Expiration time (`exp`) in epoch seconds
    pub fn expiration(&self) -> Option<i64> {
        self.time_claim("exp")
    }

    /// Not before (`nbf`) in epoch seconds
    pub fn not_before(&self) -> Option<i64> {
        self.time_claim("nbf")
    }

    /// Issued at (`iat`) in epoch seconds
    pub fn issued_at(&self) -> Option<i64> {
        self.time_claim("iat")
    }

    /// JWT ID (`jti`)
    pub fn jwt_id(&self) -> Option<&str> {
        self.string_claim("jti")
    }

    /// Any claim by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.claims.get(name)
    }

    /// All claims in document order
    pub fn claims(&self) -> &Map<String, Value> {
        &self.claims
    }

    /// Indented JSON rendering, keys in document order
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.claims).unwrap_or_default()
    }

    fn string_claim(&self, name: &str) -> Option<&str> {
        self.claims.get(name).and_then(Value::as_str)
    }

    /// Exact value of a numeric time claim, fractions included
    pub(crate) fn exact_time_claim(&self, name: &str) -> Option<f64> {
        self.claims
            .get(name)?
            .as_f64()
            .filter(|seconds| seconds.is_finite())
    }

    fn time_claim(&self, name: &str) -> Option<i64> {
        let value = self.claims.get(name)?;
        value
            .as_i64()
            .or_else(|| self.exact_time_claim(name).map(|seconds| seconds.floor() as i64))
    }
}
