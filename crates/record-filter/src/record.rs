//! Field access for flat records

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Value};

/// A scalar field value read from a record
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(Cow<'a, str>),
    Integer(i64),
    Number(f64),
    Flag(bool),
}

impl<'a> FieldValue<'a> {
    /// Text form used for search and equality comparison
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(text) => Cow::Borrowed(text.as_ref()),
            FieldValue::Integer(n) => Cow::Owned(n.to_string()),
            FieldValue::Number(n) => Cow::Owned(n.to_string()),
            FieldValue::Flag(true) => Cow::Borrowed("true"),
            FieldValue::Flag(false) => Cow::Borrowed("false"),
        }
    }

    pub fn into_owned(self) -> FieldValue<'static> {
        match self {
            FieldValue::Text(text) => FieldValue::Text(Cow::Owned(text.into_owned())),
            FieldValue::Integer(n) => FieldValue::Integer(n),
            FieldValue::Number(n) => FieldValue::Number(n),
            FieldValue::Flag(b) => FieldValue::Flag(b),
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(text: &'a str) -> Self {
        FieldValue::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<String> for FieldValue<'a> {
    fn from(text: String) -> Self {
        FieldValue::Text(Cow::Owned(text))
    }
}

impl<'a> From<i64> for FieldValue<'a> {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

impl<'a> From<u32> for FieldValue<'a> {
    fn from(n: u32) -> Self {
        FieldValue::Integer(i64::from(n))
    }
}

impl<'a> From<f64> for FieldValue<'a> {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl<'a> From<bool> for FieldValue<'a> {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

/// A flat record whose scalar fields can be looked up by name.
///
/// Unknown names and absent values both return `None`; the filter treats
/// them as non-matching rather than as errors.
pub trait Record {
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).field(name)
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).field(name)
    }
}

fn scalar(value: &Value) -> Option<FieldValue<'_>> {
    match value {
        Value::String(text) => Some(FieldValue::Text(Cow::Borrowed(text))),
        Value::Number(n) => n
            .as_i64()
            .map(FieldValue::Integer)
            .or_else(|| n.as_f64().map(FieldValue::Number)),
        Value::Bool(b) => Some(FieldValue::Flag(*b)),
        // Nested structures are not scalar fields
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

impl Record for Value {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.get(name).and_then(scalar)
    }
}

impl Record for Map<String, Value> {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.get(name).and_then(scalar)
    }
}

impl Record for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.get(name).map(|text| FieldValue::Text(Cow::Borrowed(text.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_object_fields() {
        let record = json!({
            "name": "Emma Johnson",
            "sqft": 550,
            "confidence": 87.5,
            "active": true,
            "tenant": null,
            "amenities": ["AC"]
        });

        assert_eq!(record.field("name").unwrap().as_text(), "Emma Johnson");
        assert_eq!(record.field("sqft"), Some(FieldValue::Integer(550)));
        assert_eq!(record.field("confidence").unwrap().as_text(), "87.5");
        assert_eq!(record.field("active").unwrap().as_text(), "true");
        assert_eq!(record.field("tenant"), None);
        assert_eq!(record.field("amenities"), None);
        assert_eq!(record.field("missing"), None);
    }

    #[test]
    fn test_non_object_json_has_no_fields() {
        assert_eq!(json!("Skyline Tower").field("name"), None);
        assert_eq!(json!([1, 2, 3]).field("0"), None);
    }

    #[test]
    fn test_string_map_record() {
        let mut record = BTreeMap::new();
        record.insert("building".to_string(), "Harbor Plaza".to_string());

        assert_eq!(record.field("building").unwrap().as_text(), "Harbor Plaza");
        assert_eq!(record.field("status"), None);
    }

    #[test]
    fn test_into_owned_keeps_text() {
        let owned = {
            let name = String::from("Riverfront Lofts");
            FieldValue::from(name.as_str()).into_owned()
        };
        assert_eq!(owned.to_string(), "Riverfront Lofts");
    }
}
