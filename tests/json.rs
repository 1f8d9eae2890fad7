// Test serialization using json
#![cfg(feature = "serde")]

use plotstyle::tex::{FontRequest, TexEngine};
use plotstyle::{RenderOptions, Value};
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
fn value() {
    test(Value::Bool(true), "{\"Bool\":true}");
    test(Value::Float(12.0), "{\"Float\":12.0}");
    test(Value::Str("serif".to_string()), "{\"Str\":\"serif\"}");
    test(Value::Pair(8.0, 6.0), "{\"Pair\":[8.0,6.0]}");
}

#[test]
fn engine() {
    test(TexEngine::LuaLatex, "\"LuaLatex\"");
    test(TexEngine::PdfLatex, "\"PdfLatex\"");
}

#[test]
fn options() {
    test(
        FontRequest {
            math: Some("Cambria Math".to_string()),
            ..Default::default()
        },
        "{\"main\":null,\"sans\":null,\"math\":\"Cambria Math\",\
         \"mathrm\":null,\"mathcal\":null,\"special\":null}",
    );

    let options = RenderOptions::default();
    let text = serde_json::to_string(&options).unwrap();
    assert_eq!(serde_json::from_str::<RenderOptions>(&text).unwrap(), options);
}
