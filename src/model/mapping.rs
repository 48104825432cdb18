/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Table-driven translation between Concur wire names and local field names
//!
//! Each resource family declares one [`FieldMap`]. Reads keep only the
//! declared external fields and rename them to their local names; writes
//! rename local fields to external ones and reject any field the table does
//! not declare as writable. The table is the only place a name pair lives.

use crate::error::AppError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Whether a field may be sent to the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Returned by the API, never sent
    ReadOnly,
    /// Returned by the API and accepted on create/update
    Writable,
}

/// One local/external name pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Local snake_case name
    pub local: &'static str,
    /// Concur wire name
    pub external: &'static str,
    /// Write permission
    pub access: Access,
}

impl FieldSpec {
    /// Declares a field accepted on writes
    pub const fn writable(local: &'static str, external: &'static str) -> Self {
        Self {
            local,
            external,
            access: Access::Writable,
        }
    }

    /// Declares a field that is only ever read
    pub const fn read_only(local: &'static str, external: &'static str) -> Self {
        Self {
            local,
            external,
            access: Access::ReadOnly,
        }
    }
}

/// Bidirectional field-name table for one resource family
#[derive(Debug)]
pub struct FieldMap {
    resource: &'static str,
    fields: &'static [FieldSpec],
    by_local: HashMap<&'static str, usize>,
    by_external: HashMap<&'static str, usize>,
}

impl FieldMap {
    /// Builds the lookup indexes for a table
    ///
    /// # Panics
    /// If a local or external name appears twice. Tables are static, so this
    /// fires the first time the table is touched.
    #[must_use]
    pub fn new(resource: &'static str, fields: &'static [FieldSpec]) -> Self {
        let mut by_local = HashMap::with_capacity(fields.len());
        let mut by_external = HashMap::with_capacity(fields.len());
        for (index, field) in fields.iter().enumerate() {
            let dup_local = by_local.insert(field.local, index);
            let dup_external = by_external.insert(field.external, index);
            assert!(
                dup_local.is_none() && dup_external.is_none(),
                "duplicate mapping for {resource}.{}",
                field.local
            );
        }
        Self {
            resource,
            fields,
            by_local,
            by_external,
        }
    }

    /// Resource name used in error messages
    #[must_use]
    pub fn resource(&self) -> &'static str {
        self.resource
    }

    /// Declared fields in table order
    #[must_use]
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Wire name for a local field
    #[must_use]
    pub fn external_name(&self, local: &str) -> Option<&'static str> {
        self.by_local.get(local).map(|&i| self.fields[i].external)
    }

    /// Local name for a wire field
    #[must_use]
    pub fn local_name(&self, external: &str) -> Option<&'static str> {
        self.by_external.get(external).map(|&i| self.fields[i].local)
    }

    /// Renames the declared fields of an API object to local names
    ///
    /// Undeclared and `null` fields are dropped.
    pub fn to_local(&self, external: &Value) -> Result<Map<String, Value>, AppError> {
        let object = external.as_object().ok_or_else(|| {
            AppError::Deserialization(format!(
                "expected a {} object, got {}",
                self.resource,
                kind_of(external)
            ))
        })?;

        Ok(object
            .iter()
            .filter(|(_, value)| !value.is_null())
            .filter_map(|(key, value)| {
                self.local_name(key)
                    .map(|local| (local.to_string(), value.clone()))
            })
            .collect())
    }

    /// Renames local fields to wire names
    ///
    /// Fails on any local name the table does not declare, so nothing is ever
    /// sent under a guessed name. `null` values are dropped.
    pub fn to_external(&self, local: &Map<String, Value>) -> Result<Map<String, Value>, AppError> {
        local
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(key, value)| {
                self.external_name(key)
                    .map(|external| (external.to_string(), value.clone()))
                    .ok_or_else(|| {
                        AppError::InvalidInput(format!(
                            "unknown {} field '{key}'",
                            self.resource
                        ))
                    })
            })
            .collect()
    }

    /// Like [`FieldMap::to_external`] but also rejects read-only fields
    pub fn to_writable_external(
        &self,
        local: &Map<String, Value>,
    ) -> Result<Map<String, Value>, AppError> {
        if let Some(key) = local.iter().find_map(|(key, value)| {
            let read_only = self
                .by_local
                .get(key.as_str())
                .is_some_and(|&i| self.fields[i].access == Access::ReadOnly);
            (read_only && !value.is_null()).then_some(key)
        }) {
            return Err(AppError::InvalidInput(format!(
                "{} field '{key}' is read-only",
                self.resource
            )));
        }
        self.to_external(local)
    }

    /// Decodes an API object into a local record
    pub fn decode<T: DeserializeOwned>(&self, external: &Value) -> Result<T, AppError> {
        let local = self.to_local(external)?;
        serde_json::from_value(Value::Object(local)).map_err(|e| {
            AppError::Deserialization(format!("invalid {} payload: {e}", self.resource))
        })
    }

    /// Encodes a local write payload into an API object
    pub fn encode<T: Serialize>(&self, value: &T) -> Result<Map<String, Value>, AppError> {
        match serde_json::to_value(value)? {
            Value::Object(local) => self.to_writable_external(&local),
            other => Err(AppError::InvalidInput(format!(
                "expected a {} object, got {}",
                self.resource,
                kind_of(&other)
            ))),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
