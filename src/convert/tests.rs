//! Tests for the conversion module

use super::*;
use crate::error::Error;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize, PartialEq)]
struct Issue {
    number: u64,
    title: String,
}

// ============================================================================
// Modelizer Tests
// ============================================================================

#[test]
fn test_modelizer_object_with_hint() {
    let mut converter = Modelizer::new();
    converter.inject(Some(ModelHint::new("issue")));

    let converted = converter
        .loads(json!({"number": 42, "title": "Broken build"}))
        .unwrap();
    let model = converted.as_model().unwrap();

    assert_eq!(model.kind(), Some("issue"));
    assert_eq!(model.get("number"), Some(&json!(42)));
    assert_eq!(
        model.deserialize::<Issue>().unwrap(),
        Issue {
            number: 42,
            title: "Broken build".to_string()
        }
    );
}

#[test]
fn test_modelizer_without_hint() {
    let converter = Modelizer::new();
    let model = converter
        .loads(json!({"login": "octocat"}))
        .unwrap()
        .into_model()
        .unwrap();

    assert_eq!(model.kind(), None);
    assert_eq!(model.attributes().len(), 1);
}

#[test]
fn test_modelizer_array_becomes_many() {
    let mut converter = Modelizer::new();
    converter.inject(Some("label".into()));

    let converted = converter
        .loads(json!([{"name": "bug"}, {"name": "docs"}]))
        .unwrap();
    let items = converted.into_many();

    assert_eq!(items.len(), 2);
    assert!(items
        .iter()
        .all(|item| item.as_model().and_then(Model::kind) == Some("label")));
}

#[test]
fn test_modelizer_inject_clears_hint() {
    let mut converter = Modelizer::new();
    converter.inject(Some("user".into()));
    assert_eq!(converter.model().map(ModelHint::name), Some("user"));

    converter.inject(None);
    assert!(converter.model().is_none());
}

#[test]
fn test_modelizer_rejects_scalars() {
    let mut converter = Modelizer::new();
    converter.inject(Some("issue".into()));

    let err = converter.loads(json!("not an object")).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.to_string().contains("Cannot build issue from a string"));

    assert!(converter.loads(json!([{"ok": true}, 3])).is_err());
}

// ============================================================================
// Rawlizer Tests
// ============================================================================

#[test]
fn test_rawlizer_passthrough() {
    let mut converter = Rawlizer::new();
    converter.inject(Some("ignored".into()));

    let raw = json!({"anything": [1, 2, 3]});
    assert_eq!(converter.loads(raw.clone()).unwrap(), Converted::Raw(raw));
    assert_eq!(converter.loads(json!(5)).unwrap(), Converted::Raw(json!(5)));
}

// ============================================================================
// Converted Tests
// ============================================================================

#[test]
fn test_converted_to_json_and_deserialize() {
    let converted = Modelizer::new()
        .loads(json!([{"number": 1, "title": "a"}, {"number": 2, "title": "b"}]))
        .unwrap();

    assert_eq!(
        converted.to_json(),
        json!([{"number": 1, "title": "a"}, {"number": 2, "title": "b"}])
    );

    let issues: Vec<Issue> = converted.deserialize().unwrap();
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[1].title, "b");
}

#[test]
fn test_converted_deserialize_mismatch() {
    let converted = Converted::Raw(json!({"number": "nope"}));
    let result = converted.deserialize::<Issue>();
    assert!(matches!(result, Err(Error::Decode { .. })));
}

// ============================================================================
// ConverterType Tests
// ============================================================================

#[test]
fn test_converter_type_names() {
    assert_eq!(ConverterType::of::<Modelizer>().name(), "Modelizer");
    assert_eq!(ConverterType::of::<Rawlizer>().name(), "Rawlizer");
    assert_eq!(default_converter(), ConverterType::of::<Modelizer>());
    assert_ne!(default_converter(), ConverterType::of::<Rawlizer>());
}

mod first {
    use super::*;

    #[derive(Default)]
    pub struct Passthrough;

    impl ConversionStrategy for Passthrough {
        fn inject(&mut self, _model: Option<ModelHint>) {}

        fn loads(&self, raw: serde_json::Value) -> crate::error::Result<Converted> {
            Ok(Converted::Raw(raw))
        }
    }
}

mod second {
    use super::*;

    #[derive(Default)]
    pub struct Passthrough;

    impl ConversionStrategy for Passthrough {
        fn inject(&mut self, _model: Option<ModelHint>) {}

        fn loads(&self, _raw: serde_json::Value) -> crate::error::Result<Converted> {
            Ok(Converted::Raw(serde_json::Value::Null))
        }
    }
}

#[test]
fn test_converter_type_equality_uses_full_path() {
    let a = ConverterType::of::<first::Passthrough>();
    let b = ConverterType::of::<second::Passthrough>();

    assert_eq!(a.name(), b.name());
    assert_ne!(a, b);
    assert_eq!(a, ConverterType::of::<first::Passthrough>());
}

#[test]
fn test_converter_type_instantiates_fresh_converters() {
    let converter_type = ConverterType::of::<Rawlizer>();
    let converter = converter_type.instantiate();
    assert_eq!(
        converter.loads(json!({"a": 1})).unwrap(),
        Converted::Raw(json!({"a": 1}))
    );
}

#[test]
fn test_converter_type_custom() {
    fn build() -> Box<dyn ConversionStrategy> {
        Box::new(Rawlizer)
    }

    let converter_type = ConverterType::new("passthrough", build);
    assert_eq!(converter_type.name(), "passthrough");
    assert_eq!(format!("{converter_type:?}"), "ConverterType(\"passthrough\")");
}
