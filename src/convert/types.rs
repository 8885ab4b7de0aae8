//! Conversion types and traits
//!
//! Defines the converter contract and the domain objects it produces.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// Name of the model a converter should decode into
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelHint(String);

impl ModelHint {
    /// Create a hint for a model name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Model name
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ModelHint {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for ModelHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A domain object built from a JSON object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Model {
    kind: Option<String>,
    attributes: JsonObject,
}

impl Model {
    /// Create a model
    pub fn new(kind: Option<String>, attributes: JsonObject) -> Self {
        Self { kind, attributes }
    }

    /// Model name taken from the hint, if one was injected
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Get an attribute
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.attributes.get(key)
    }

    pub fn attributes(&self) -> &JsonObject {
        &self.attributes
    }

    pub fn into_attributes(self) -> JsonObject {
        self.attributes
    }

    /// Deserialize the attributes into a typed struct
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(JsonValue::Object(
            self.attributes.clone(),
        ))?)
    }
}

/// Result of converting one raw payload
#[derive(Debug, Clone, PartialEq)]
pub enum Converted {
    /// A modelized object
    Model(Model),
    /// Untouched JSON
    Raw(JsonValue),
    /// A list payload, converted element by element
    Many(Vec<Converted>),
}

impl Converted {
    pub fn as_model(&self) -> Option<&Model> {
        match self {
            Self::Model(model) => Some(model),
            _ => None,
        }
    }

    pub fn into_model(self) -> Option<Model> {
        match self {
            Self::Model(model) => Some(model),
            _ => None,
        }
    }

    /// Flatten into a list; single values become a one-element list
    pub fn into_many(self) -> Vec<Converted> {
        match self {
            Self::Many(items) => items,
            other => vec![other],
        }
    }

    /// JSON rendering of the converted value
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Model(model) => JsonValue::Object(model.attributes.clone()),
            Self::Raw(value) => value.clone(),
            Self::Many(items) => JsonValue::Array(items.iter().map(Self::to_json).collect()),
        }
    }

    /// Deserialize into a typed struct
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.to_json())
            .map_err(|e| Error::decode(format!("Failed to deserialize converted value: {e}")))
    }
}

/// Turns raw JSON payloads into domain objects.
///
/// A handler calls `inject` right before every `loads`, so the hint seen by
/// `loads` is always the one for the current payload.
pub trait ConversionStrategy: Send {
    /// Set or clear the model to decode into
    fn inject(&mut self, model: Option<ModelHint>);

    /// Decode one raw payload
    fn loads(&self, raw: JsonValue) -> Result<Converted>;
}

fn build<C: ConversionStrategy + Default + 'static>() -> Box<dyn ConversionStrategy> {
    Box::new(C::default())
}

/// A converter "type": builds one fresh converter per call
#[derive(Clone, Copy)]
pub struct ConverterType {
    /// Identity: the full type path, or the name given to `new`
    id: &'static str,
    name: &'static str,
    build: fn() -> Box<dyn ConversionStrategy>,
}

impl ConverterType {
    /// Converter type for a default-constructible strategy
    pub fn of<C: ConversionStrategy + Default + 'static>() -> Self {
        let full = std::any::type_name::<C>();
        Self {
            id: full,
            name: full.rsplit("::").next().unwrap_or(full),
            build: build::<C>,
        }
    }

    /// Converter type with an explicit name and constructor
    pub fn new(name: &'static str, build: fn() -> Box<dyn ConversionStrategy>) -> Self {
        Self {
            id: name,
            name,
            build,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Construct a new converter instance
    pub fn instantiate(&self) -> Box<dyn ConversionStrategy> {
        (self.build)()
    }
}

impl PartialEq for ConverterType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ConverterType {}

impl fmt::Debug for ConverterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConverterType").field(&self.name).finish()
    }
}
