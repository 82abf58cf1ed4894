// crates/bizdb-core/src/raw.rs
use serde::Deserialize;
use serde_json::Value;

/// Raw business structure as it comes from the JSON dataset.
/// NOTE: This type mirrors the external dataset and may be subject to that
/// dataset's license. We do *not* expose this type from the public API.
#[derive(Debug, Deserialize)]
pub struct BusinessRaw {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    /// Free-form, comma-delimited tag string; null for some records.
    #[serde(default)]
    pub categories: Option<String>,
    /// Loosely typed on purpose: the source sometimes carries null or a
    /// non-object value here.
    #[serde(default)]
    pub attributes: Option<Value>,
    #[serde(default)]
    pub stars: Option<f64>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl BusinessRaw {
    /// Attributes as a JSON object, if present and actually an object.
    /// Anything else (absent, null, wrong-typed) yields `None`.
    pub fn attributes_object(&self) -> Option<&serde_json::Map<String, Value>> {
        self.attributes.as_ref().and_then(Value::as_object)
    }
}

pub type BusinessesRaw = Vec<BusinessRaw>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerates_sparse_records() {
        let r: BusinessRaw = serde_json::from_str(r#"{"name": "Bare"}"#).unwrap();
        assert!(r.categories.is_none());
        assert!(r.attributes_object().is_none());
    }

    #[test]
    fn wrong_typed_attributes_yield_none() {
        let r: BusinessRaw =
            serde_json::from_str(r#"{"name": "Odd", "attributes": "not-a-map"}"#).unwrap();
        assert!(r.attributes_object().is_none());

        let r: BusinessRaw =
            serde_json::from_str(r#"{"name": "Null", "attributes": null}"#).unwrap();
        assert!(r.attributes_object().is_none());
    }
}
