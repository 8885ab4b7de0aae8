//! Response conversion module
//!
//! Converts raw JSON payloads into domain objects.
//!
//! # Overview
//!
//! A [`ConversionStrategy`] is told which model to build (`inject`) and then
//! decodes one payload (`loads`). Handlers pick the strategy per call through
//! a [`ConverterType`]; [`Modelizer`] is the fallback and [`Rawlizer`] keeps
//! payloads as plain JSON.

mod converters;
mod types;

pub use converters::{Modelizer, Rawlizer};
pub use types::{ConversionStrategy, Converted, ConverterType, Model, ModelHint};

/// Converter type used when neither the call nor the handler names one
pub fn default_converter() -> ConverterType {
    ConverterType::of::<Modelizer>()
}

#[cfg(test)]
mod tests;
