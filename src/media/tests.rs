//! Tests for the content negotiation module

use super::*;
use crate::types::MediaVariant;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test]
fn test_no_variants_no_header() {
    let negotiator = ContentNegotiator::new();
    assert!(negotiator.is_empty());
    assert!(negotiator.header().is_none());
    assert!(negotiator.header_value().is_none());
}

#[test]
fn test_raw_then_full_header() {
    let mut negotiator = ContentNegotiator::new();
    let header = negotiator.add_raw().add_full().header().unwrap();

    assert_eq!(header.len(), 1);
    assert_eq!(
        header.get("Accept").map(String::as_str),
        Some(
            "application/vnd.github.beta.raw+json, application/vnd.github.beta.full+json"
        )
    );
}

#[test]
fn test_duplicates_are_ignored() {
    let mut negotiator = ContentNegotiator::new();
    negotiator.add_html().add_text().add_html().add_text();

    assert_eq!(negotiator.len(), 2);
    assert_eq!(
        negotiator.header_value().unwrap(),
        "application/vnd.github.beta.html+json, application/vnd.github.beta.text+json"
    );
}

#[test]
fn test_re_adding_keeps_first_position() {
    let mut negotiator = ContentNegotiator::new();
    negotiator.add_full().add_raw().add_full();

    assert_eq!(
        negotiator.media_types(),
        &[
            "application/vnd.github.beta.full+json".to_string(),
            "application/vnd.github.beta.raw+json".to_string(),
        ]
    );
}

#[test_case(MediaVariant::Raw, "application/vnd.github.beta.raw+json" ; "raw")]
#[test_case(MediaVariant::Text, "application/vnd.github.beta.text+json" ; "text")]
#[test_case(MediaVariant::Html, "application/vnd.github.beta.html+json" ; "html")]
#[test_case(MediaVariant::Full, "application/vnd.github.beta.full+json" ; "full")]
fn test_media_type_template(variant: MediaVariant, expected: &str) {
    let negotiator = ContentNegotiator::new();
    assert_eq!(negotiator.media_type(variant), expected);
}

#[test]
fn test_custom_namespace_and_version() {
    let mut negotiator = ContentNegotiator::with_version("acme", "v3");
    negotiator.add(MediaVariant::Raw);

    assert_eq!(negotiator.namespace(), "acme");
    assert_eq!(negotiator.version(), "v3");
    assert_eq!(
        negotiator.header_value().unwrap(),
        "application/vnd.acme.v3.raw+json"
    );
}

#[test]
fn test_all_variants() {
    let mut negotiator = ContentNegotiator::new();
    negotiator.add_raw().add_text().add_html().add_full();

    let value = negotiator.header_value().unwrap();
    assert_eq!(value.split(", ").count(), 4);
    for variant in ["raw", "text", "html", "full"] {
        assert!(value.contains(&format!("application/vnd.github.beta.{variant}+json")));
    }
}
