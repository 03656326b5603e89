// Test serialization using json
#![cfg(feature = "serde")]

use kas_font_files::fonts::{BoldRequest, FamilyNaming, FontQuery, FontStyle, FontWeight};
use kas_font_files::SourceConfig;
use serde::{de::Deserialize, ser::Serialize};
use std::cmp::PartialEq;
use std::fmt::Debug;

fn test<X: Debug + PartialEq + Serialize + for<'a> Deserialize<'a>>(x: X, t: &str) {
    match serde_json::to_string(&x) {
        Ok(text) => assert_eq!(text, t),
        Err(err) => panic!("Ser of '{x:?}' failed: {err}"),
    }

    match serde_json::from_str::<X>(t) {
        Ok(v) => assert_eq!(v, x),
        Err(err) => panic!("Deser of '{t}' failed: {err}"),
    }
}

#[test]
fn attributes() {
    test(FontWeight::BOLD, "700");
    test(FontStyle::Normal, "\"Normal\"");
    test(FontStyle::Oblique, "\"Oblique\"");
}

#[test]
fn query() {
    test(BoldRequest::Bold, "\"Bold\"");
    test(BoldRequest::Weight(600), "{\"Weight\":600}");
    test(
        FontQuery::new("Arial").with_italic(true).with_text("ba"),
        "{\"family\":\"Arial\",\"bold\":\"Regular\",\"italic\":true,\"codepoints\":[97,98]}",
    );
}

#[test]
fn config() {
    let config: SourceConfig = serde_json::from_str("{\"system_fonts\":false}").unwrap();
    assert!(!config.system_fonts);
    assert!(config.font_dirs.is_empty());
    assert_eq!(config.naming, FamilyNaming::default());
}
