//! Request binder: decode the body, then overlay query and path fields.
//!
//! Binding is a pure transformation. The raw input is merged into a single
//! JSON object in fixed precedence order - body fields first, then query
//! fields, then path parameters - and the merged object is deserialized
//! into the route's typed request. A same-named field set by a later stage
//! overwrites the earlier one, so an identifier in the URL can never be
//! displaced by a stale value in the body.

use std::collections::HashMap;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

/// How a route treats the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyRule {
    /// Body must be present and decode as a JSON object
    Required,
    /// No decode step; fields come from the query string and path only
    None,
    /// Body decoded when present; an absent body binds like `None`
    Optional,
}

/// Raw per-request input handed to the binder.
pub struct RawRequest {
    pub path: HashMap<String, String>,
    pub query: HashMap<String, String>,
    pub body: Bytes,
}

/// Structural decode failure. Distinct from semantic validation, which the
/// gateway never performs.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("request body is required")]
    MissingBody,

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("invalid data: {0}")]
    Shape(String),
}

/// Bind the raw input into the route's typed request.
pub fn bind<T: DeserializeOwned>(rule: BodyRule, raw: &RawRequest) -> Result<T, BindError> {
    let mut doc = match rule {
        BodyRule::None => Value::Object(Map::new()),
        BodyRule::Required if raw.body.is_empty() => return Err(BindError::MissingBody),
        BodyRule::Optional if raw.body.is_empty() => Value::Object(Map::new()),
        BodyRule::Required | BodyRule::Optional => decode_object(&raw.body)?,
    };

    if let Value::Object(fields) = &mut doc {
        for (key, value) in &raw.query {
            fields.insert(key.clone(), Value::String(value.clone()));
        }
        for (key, value) in &raw.path {
            fields.insert(key.clone(), Value::String(value.clone()));
        }
    }

    serde_json::from_value(doc).map_err(|err| BindError::Shape(err.to_string()))
}

fn decode_object(body: &[u8]) -> Result<Value, BindError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|err| BindError::InvalidBody(err.to_string()))?;
    if !value.is_object() {
        return Err(BindError::InvalidBody("expected a JSON object".to_string()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default)]
        user_id: String,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        page: Option<i64>,
    }

    fn raw(path: &[(&str, &str)], query: &[(&str, &str)], body: &str) -> RawRequest {
        RawRequest {
            path: path
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: Bytes::copy_from_slice(body.as_bytes()),
        }
    }

    #[test]
    fn path_parameter_overrides_body_field() {
        let input = raw(&[("user_id", "42")], &[], r#"{"user_id":"1","name":"Bea"}"#);
        let probe: Probe = bind(BodyRule::Required, &input).unwrap();
        assert_eq!(probe.user_id, "42");
        assert_eq!(probe.name.as_deref(), Some("Bea"));
    }

    #[test]
    fn query_overrides_body_and_path_overrides_query() {
        let input = raw(
            &[("user_id", "path")],
            &[("user_id", "query"), ("name", "from-query")],
            r#"{"user_id":"body","name":"from-body"}"#,
        );
        let probe: Probe = bind(BodyRule::Optional, &input).unwrap();
        assert_eq!(probe.user_id, "path");
        assert_eq!(probe.name.as_deref(), Some("from-query"));
    }

    #[test]
    fn missing_body_on_required_route_is_rejected() {
        let input = raw(&[], &[], "");
        let result: Result<Probe, _> = bind(BodyRule::Required, &input);
        assert!(matches!(result, Err(BindError::MissingBody)));
    }

    #[test]
    fn malformed_body_is_rejected() {
        let input = raw(&[], &[], "{not json");
        let result: Result<Probe, _> = bind(BodyRule::Required, &input);
        assert!(matches!(result, Err(BindError::InvalidBody(_))));
    }

    #[test]
    fn non_object_body_is_rejected() {
        let input = raw(&[], &[], "[1,2,3]");
        let result: Result<Probe, _> = bind(BodyRule::Required, &input);
        assert!(matches!(result, Err(BindError::InvalidBody(_))));
    }

    #[test]
    fn body_is_ignored_on_path_only_routes() {
        // Even a garbage body cannot fail a route that declares no decode step.
        let input = raw(&[("user_id", "42")], &[], "{not json");
        let probe: Probe = bind(BodyRule::None, &input).unwrap();
        assert_eq!(probe.user_id, "42");
    }

    #[test]
    fn optional_body_may_be_absent() {
        let input = raw(&[], &[("user_id", "9")], "");
        let probe: Probe = bind(BodyRule::Optional, &input).unwrap();
        assert_eq!(probe.user_id, "9");
    }

    #[test]
    fn typed_fields_survive_binding() {
        let input = raw(&[], &[], r#"{"page":3}"#);
        let probe: Probe = bind(BodyRule::Required, &input).unwrap();
        assert_eq!(probe.page, Some(3));
    }

    #[test]
    fn mismatched_shape_is_a_bind_error() {
        let input = raw(&[], &[], r#"{"page":"not-a-number"}"#);
        let result: Result<Probe, _> = bind(BodyRule::Required, &input);
        assert!(matches!(result, Err(BindError::Shape(_))));
    }
}
