use std::collections::HashMap;

use serde_json::Value;

use crate::error::AuthResultError;

/// Minimal record capability required of an authenticated principal.
///
/// The result type never demands a concrete entity or framework type:
/// any value supporting keyed field access qualifies. Implementations
/// must be free of side effects — lookups may run any number of times,
/// from any thread.
pub trait Identity: std::fmt::Debug + Send + Sync {
    /// Look up a field of the record by name.
    fn get(&self, field: &str) -> Option<&Value>;

    /// Returns `true` if the record carries no fields at all.
    ///
    /// An empty record is not a usable identity for a success outcome.
    fn is_empty(&self) -> bool;
}

impl Identity for HashMap<String, Value> {
    fn get(&self, field: &str) -> Option<&Value> {
        HashMap::get(self, field)
    }

    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }
}

/// A claims-backed identity record.
///
/// The concrete record shipped with this crate: a map of claim name to
/// JSON value. Authenticators that already hold richer entity types can
/// implement [`Identity`] on those directly instead.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ClaimsIdentity {
    claims: serde_json::Map<String, Value>,
}

impl ClaimsIdentity {
    /// Create a [`ClaimsIdentity`] builder.
    #[must_use]
    pub fn builder() -> ClaimsIdentityBuilder {
        ClaimsIdentityBuilder::default()
    }

    /// The claim names and values.
    #[must_use]
    pub fn claims(&self) -> &serde_json::Map<String, Value> {
        &self.claims
    }

    /// Vet a dynamic JSON value as an identity.
    ///
    /// `Null` maps to "no identity" — an absent identity is always
    /// acceptable for failure outcomes. A JSON object becomes a record.
    /// Any other kind is present but not record-like and is rejected,
    /// regardless of which result code it was destined for.
    ///
    /// # Errors
    ///
    /// [`AuthResultError::NotARecord`] for non-null, non-object input.
    pub fn from_json(value: Value) -> Result<Option<Self>, AuthResultError> {
        if value.is_null() {
            return Ok(None);
        }
        Self::try_from(value).map(Some)
    }
}

impl Identity for ClaimsIdentity {
    fn get(&self, field: &str) -> Option<&Value> {
        self.claims.get(field)
    }

    fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}

impl From<serde_json::Map<String, Value>> for ClaimsIdentity {
    fn from(claims: serde_json::Map<String, Value>) -> Self {
        Self { claims }
    }
}

impl TryFrom<Value> for ClaimsIdentity {
    type Error = AuthResultError;

    /// Only a JSON object satisfies the record capability.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let kind = json_kind(&value);
        if let Value::Object(claims) = value {
            Ok(Self { claims })
        } else {
            Err(AuthResultError::NotARecord { kind })
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Builder for [`ClaimsIdentity`].
#[derive(Debug, Default)]
pub struct ClaimsIdentityBuilder {
    claims: serde_json::Map<String, Value>,
}

impl ClaimsIdentityBuilder {
    /// Add a claim to the record.
    #[must_use]
    pub fn claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.claims.insert(name.into(), value.into());
        self
    }

    /// Build the identity record.
    #[must_use]
    pub fn build(self) -> ClaimsIdentity {
        ClaimsIdentity {
            claims: self.claims,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn builder_collects_claims() {
        let identity = ClaimsIdentity::builder()
            .claim("sub", "user-1")
            .claim("admin", true)
            .build();

        assert_eq!(identity.get("sub"), Some(&json!("user-1")));
        assert_eq!(identity.get("admin"), Some(&json!(true)));
        assert_eq!(identity.get("missing"), None);
        assert!(!Identity::is_empty(&identity));
    }

    #[test]
    fn default_record_is_empty() {
        let identity = ClaimsIdentity::default();
        assert!(Identity::is_empty(&identity));
    }

    #[test]
    fn json_object_becomes_a_record() {
        let identity = ClaimsIdentity::try_from(json!({"sub": "user-1"})).unwrap();
        assert_eq!(identity.get("sub"), Some(&json!("user-1")));
    }

    #[test]
    fn non_record_json_is_rejected_with_its_kind() {
        let err = ClaimsIdentity::try_from(json!("user-1")).unwrap_err();
        assert_eq!(err, AuthResultError::NotARecord { kind: "string" });

        let err = ClaimsIdentity::try_from(json!([1, 2])).unwrap_err();
        assert_eq!(err, AuthResultError::NotARecord { kind: "array" });
    }

    #[test]
    fn from_json_maps_null_to_absent() {
        assert_eq!(ClaimsIdentity::from_json(Value::Null), Ok(None));

        let some = ClaimsIdentity::from_json(json!({"sub": "u"})).unwrap();
        assert!(some.is_some());

        let err = ClaimsIdentity::from_json(json!(42)).unwrap_err();
        assert_eq!(err, AuthResultError::NotARecord { kind: "number" });
    }

    #[test]
    fn plain_maps_satisfy_the_capability() {
        let mut map = HashMap::new();
        map.insert("sub".to_owned(), json!("user-1"));

        let identity: &dyn Identity = &map;
        assert_eq!(identity.get("sub"), Some(&json!("user-1")));
        assert!(!identity.is_empty());
    }

    #[test]
    fn serde_round_trips_the_claims() {
        let identity = ClaimsIdentity::builder().claim("sub", "user-1").build();

        let encoded = serde_json::to_string(&identity).unwrap();
        let decoded: ClaimsIdentity = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, identity);
    }
}
