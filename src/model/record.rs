//! Schema-free record

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use super::Value;
use crate::error::FieldError;

/// One server-side item, rendered as one table row.
///
/// Records hold field values as a `HashMap<String, Value>`, allowing dynamic
/// access to any field. The server-assigned key that identifies the record
/// for PUT/DELETE lives outside the record itself (see
/// [`Row`](crate::controller::Row)); only the fields named by columns are
/// ever read.
///
/// # Example
///
/// ```
/// use datagrid::model::Record;
///
/// let record = Record::new()
///     .set("name", "Marian")
///     .set("price", 19.99);
///
/// assert_eq!(record.get_string("name").unwrap(), Some("Marian"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    /// Formats a field the way it appears in a table cell.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::Missing`] when the field does not exist. A
    /// column naming an absent field is a configuration mistake the caller
    /// is expected to surface, not swallow.
    pub fn display(&self, field: &str) -> Result<String, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(value) => Ok(value.to_display()),
        }
    }

    // =========================================================================
    // Typed getters
    //
    // Return Err if field is missing or wrong type.
    // Return Ok(None) only if the field exists and is Value::Null.
    // =========================================================================

    /// Gets a string field value.
    pub fn get_string(&self, field: &str) -> Result<Option<&str>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "string",
                other.type_name(),
            )),
        }
    }

    /// Gets a boolean field value.
    pub fn get_bool(&self, field: &str) -> Result<Option<bool>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(FieldError::type_mismatch(field, "bool", other.type_name())),
        }
    }

    /// Gets an integer field value.
    pub fn get_int(&self, field: &str) -> Result<Option<i64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Int(n)) => Ok(Some(*n)),
            Some(other) => Err(FieldError::type_mismatch(field, "int", other.type_name())),
        }
    }

    /// Gets a floating point field value.
    pub fn get_float(&self, field: &str) -> Result<Option<f64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Float(n)) => Ok(Some(*n)),
            Some(Value::Int(n)) => Ok(Some(*n as f64)), // Allow widening
            Some(other) => Err(FieldError::type_mismatch(field, "float", other.type_name())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_getters() {
        let record = Record::new().set("name", "Olha").set("age", 27i64);

        assert_eq!(record.get_string("name").unwrap(), Some("Olha"));
        assert_eq!(record.get_int("age").unwrap(), Some(27));
        assert_eq!(record.get_float("age").unwrap(), Some(27.0));
        assert!(matches!(
            record.get_string("missing"),
            Err(FieldError::Missing { .. })
        ));
        assert!(matches!(
            record.get_bool("name"),
            Err(FieldError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_mutation_helpers() {
        let mut record = Record::new().set("name", "Olha");
        record.insert("city", "Lviv");

        assert!(record.contains("city"));
        assert_eq!(record.fields().len(), 2);

        assert_eq!(record.remove("city"), Some(Value::from("Lviv")));
        assert!(!record.contains("city"));
        assert_eq!(record.remove("city"), None);
    }

    #[test]
    fn test_display() {
        let record = Record::new().set("price", 19.99);
        assert_eq!(record.display("price").unwrap(), "19.99");
        assert!(record.display("missing").is_err());
    }

    #[test]
    fn test_deserialize_from_json_object() {
        let record: Record =
            serde_json::from_str(r#"{"name":"Ivan","price":19.99,"active":true}"#).unwrap();
        assert_eq!(record.get_string("name").unwrap(), Some("Ivan"));
        assert_eq!(record.get_float("price").unwrap(), Some(19.99));
        assert_eq!(record.get_bool("active").unwrap(), Some(true));
    }
}
