//! Decoded Nexus responses.

use std::ops::Index;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;

/// A decoded JSON response with object-style access.
#[derive(Debug, Clone, PartialEq)]
pub struct NexusResponse {
    http_status: u16,
    data: Value,
}

impl NexusResponse {
    pub fn new(http_status: u16, data: Value) -> Self {
        Self { http_status, data }
    }

    pub fn http_status(&self) -> u16 {
        self.http_status
    }

    /// The decoded body. An empty body decodes as `null`.
    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn into_data(self) -> Value {
        self.data
    }

    /// Look up a top-level field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Deserialize the body into a typed value.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.data.clone())?)
    }
}

impl Index<&str> for NexusResponse {
    type Output = Value;

    /// Missing keys index to `null`.
    fn index(&self, key: &str) -> &Value {
        &self.data[key]
    }
}

/// A decoded JSON response whose payload is an array.
///
/// The whole payload is held in memory; [`iter`](Self::iter) can be called
/// any number of times and yields the elements in payload order. A payload
/// that is not an array iterates as empty but stays reachable through
/// [`data`](Self::data).
#[derive(Debug, Clone, PartialEq)]
pub struct NexusArrayResponse {
    http_status: u16,
    data: Value,
}

impl NexusArrayResponse {
    pub fn new(http_status: u16, data: Value) -> Self {
        Self { http_status, data }
    }

    pub fn http_status(&self) -> u16 {
        self.http_status
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn into_data(self) -> Value {
        self.data
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// The array elements, or an empty slice for a non-array payload.
    pub fn as_slice(&self) -> &[Value] {
        self.data.as_array().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.as_slice().iter()
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl From<NexusResponse> for NexusArrayResponse {
    fn from(response: NexusResponse) -> Self {
        Self::new(response.http_status, response.data)
    }
}

impl Index<&str> for NexusArrayResponse {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        &self.data[key]
    }
}

impl<'a> IntoIterator for &'a NexusArrayResponse {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for NexusArrayResponse {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        match self.data {
            Value::Array(items) => items.into_iter(),
            _ => Vec::new().into_iter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_access() {
        let response = NexusResponse::new(200, json!({"id": "g1", "name": "Test Group"}));

        assert_eq!(response.http_status(), 200);
        assert_eq!(response["name"], "Test Group");
        assert_eq!(response.get("id"), Some(&json!("g1")));
        assert!(response["missing"].is_null());
        assert!(response.get("missing").is_none());
    }

    #[test]
    fn test_deserialize() {
        #[derive(serde::Deserialize)]
        struct Group {
            id: String,
        }

        let response = NexusResponse::new(200, json!({"id": "g1"}));
        let group: Group = response.deserialize().unwrap();
        assert_eq!(group.id, "g1");
    }

    #[test]
    fn test_array_iteration_is_repeatable() {
        let response = NexusArrayResponse::new(200, json!([{"id": "a"}, {"id": "b"}, {"id": "c"}]));

        let first: Vec<&Value> = response.iter().collect();
        let second: Vec<&Value> = (&response).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(response.len(), 3);

        let ids: Vec<String> = response
            .into_iter()
            .map(|g| g["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_non_array_payload() {
        let response = NexusArrayResponse::new(
            200,
            json!({"members": [{"identity_id": "u1"}], "total": 1}),
        );

        assert!(response.is_empty());
        assert_eq!(response.iter().count(), 0);
        assert_eq!(response["members"][0]["identity_id"], "u1");
        assert_eq!(response.get("total"), Some(&json!(1)));
    }

    #[test]
    fn test_null_payload() {
        let response = NexusResponse::new(204, Value::Null);
        assert!(response.data().is_null());
        assert!(response["anything"].is_null());

        let array: NexusArrayResponse = response.into();
        assert!(array.is_empty());
        assert_eq!(array.http_status(), 204);
    }
}
