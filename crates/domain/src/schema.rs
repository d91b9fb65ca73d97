//! Declarative payload schemas.
//!
//! A [`Schema`] lists the fields a create/update payload must carry and the
//! primitive kind of each one. Checking a payload reports the first violated
//! constraint only: fields are visited in declaration order, then any key the
//! schema does not declare is rejected.

use serde_json::{Map, Value};

use crate::error::PayloadError;
use crate::time::date_from_json;

/// Primitive kind of a payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Non-empty string.
    Text,
    /// Calendar date, see [`crate::time::date_from_json`].
    Date,
    /// Array of non-empty strings.
    TextList,
}

/// A required field of a payload.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl Field {
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// Shape of a resource payload.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    fields: &'static [Field],
}

impl Schema {
    #[must_use]
    pub const fn new(fields: &'static [Field]) -> Self {
        Self { fields }
    }

    /// Declared fields, in checking order.
    #[must_use]
    pub fn fields(&self) -> &'static [Field] {
        self.fields
    }

    /// Check `payload` against this schema.
    ///
    /// # Errors
    ///
    /// Returns the first [`PayloadError`] encountered.
    pub fn validate(&self, payload: &Value) -> Result<(), PayloadError> {
        let Value::Object(object) = payload else {
            return Err(PayloadError::NotAnObject);
        };

        for field in self.fields {
            check_field(object, field)?;
        }

        if let Some(key) = object
            .keys()
            .find(|key| !self.fields.iter().any(|f| f.name == key.as_str()))
        {
            return Err(PayloadError::Unknown(key.clone()));
        }

        Ok(())
    }
}

fn check_field(object: &Map<String, Value>, field: &Field) -> Result<(), PayloadError> {
    let Some(value) = object.get(field.name) else {
        return Err(PayloadError::Required(field.name.to_string()));
    };

    match field.kind {
        FieldKind::Text => check_text(field.name.to_string(), value),
        FieldKind::Date => date_from_json(value)
            .map(|_| ())
            .ok_or_else(|| PayloadError::NotADate(field.name.to_string())),
        FieldKind::TextList => {
            let Value::Array(items) = value else {
                return Err(PayloadError::NotAnArray(field.name.to_string()));
            };
            items
                .iter()
                .enumerate()
                .try_for_each(|(index, item)| check_text(format!("{}[{index}]", field.name), item))
        }
    }
}

fn check_text(path: String, value: &Value) -> Result<(), PayloadError> {
    match value {
        Value::String(text) if text.is_empty() => Err(PayloadError::Empty(path)),
        Value::String(_) => Ok(()),
        _ => Err(PayloadError::NotAString(path)),
    }
}
