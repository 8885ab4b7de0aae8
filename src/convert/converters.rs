//! Converter implementations

use super::types::{ConversionStrategy, Converted, Model, ModelHint};
use crate::error::{Error, Result};
use crate::types::JsonValue;

// ============================================================================
// Modelizer
// ============================================================================

/// Builds [`Model`] objects, tagged with the injected model name.
///
/// Objects become models and arrays become lists of models; any other JSON
/// value is a decode error.
#[derive(Debug, Clone, Default)]
pub struct Modelizer {
    model: Option<ModelHint>,
}

impl Modelizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently injected hint
    pub fn model(&self) -> Option<&ModelHint> {
        self.model.as_ref()
    }

    fn modelize(&self, raw: JsonValue) -> Result<Converted> {
        match raw {
            JsonValue::Object(attributes) => Ok(Converted::Model(Model::new(
                self.model.as_ref().map(|m| m.name().to_string()),
                attributes,
            ))),
            JsonValue::Array(items) => items
                .into_iter()
                .map(|item| self.modelize(item))
                .collect::<Result<Vec<_>>>()
                .map(Converted::Many),
            other => Err(Error::decode(format!(
                "Cannot build {} from {}",
                self.model
                    .as_ref()
                    .map_or("a model", |m| m.name()),
                json_kind(&other)
            ))),
        }
    }
}

impl ConversionStrategy for Modelizer {
    fn inject(&mut self, model: Option<ModelHint>) {
        self.model = model;
    }

    fn loads(&self, raw: JsonValue) -> Result<Converted> {
        self.modelize(raw)
    }
}

// ============================================================================
// Rawlizer
// ============================================================================

/// Hands payloads back untouched; hints are ignored
#[derive(Debug, Clone, Copy, Default)]
pub struct Rawlizer;

impl Rawlizer {
    pub fn new() -> Self {
        Self
    }
}

impl ConversionStrategy for Rawlizer {
    fn inject(&mut self, _model: Option<ModelHint>) {}

    fn loads(&self, raw: JsonValue) -> Result<Converted> {
        Ok(Converted::Raw(raw))
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
