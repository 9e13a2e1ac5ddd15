//! Integration tests for residual parameter serialization
//!
//! Covers bracket-notation flattening of sequences and mappings, leaf value
//! coercion (null, callables) and form-style encoding.

use pretty_assertions::assert_eq;
use rhtmx_url::query::build_query_params;
use rhtmx_url::{ParamValue, QueryParamSerializer, RouteParams};
use rstest::rstest;

fn mapping(entries: Vec<(&str, ParamValue)>) -> ParamValue {
    ParamValue::Mapping(
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
    )
}

fn flattened_keys(prefix: &str, value: &ParamValue) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    build_query_params(prefix, value, &mut |key, leaf| {
        pairs.push((key.to_string(), leaf.to_param_string()));
    });
    pairs
}

#[test]
fn test_scalar_array_uses_empty_brackets() {
    let params = RouteParams::new().with("tags", vec!["a", "b"]);
    assert_eq!(
        QueryParamSerializer::serialize(&params),
        "tags%5B%5D=a&tags%5B%5D=b"
    );
}

#[test]
fn test_nested_object() {
    let params = RouteParams::new().with("filter", mapping(vec![("status", "open".into())]));
    assert_eq!(
        QueryParamSerializer::serialize(&params),
        "filter%5Bstatus%5D=open"
    );
}

#[test]
fn test_array_of_containers_uses_indices() {
    let rows = ParamValue::Sequence(vec![
        mapping(vec![("id", 1.into())]),
        mapping(vec![("id", 2.into()), ("tags", vec!["x"].into())]),
    ]);

    assert_eq!(
        flattened_keys("rows", &rows),
        vec![
            ("rows[0][id]".to_string(), "1".to_string()),
            ("rows[1][id]".to_string(), "2".to_string()),
            ("rows[1][tags][]".to_string(), "x".to_string()),
        ]
    );
}

#[test]
fn test_prefix_already_ending_in_brackets() {
    let params = RouteParams::new().with("ids[]", vec![3, 4]);
    assert_eq!(
        QueryParamSerializer::serialize(&params),
        "ids%5B%5D=3&ids%5B%5D=4"
    );
}

#[test]
fn test_container_leaf_under_bracket_prefix_is_stringified() {
    let value = ParamValue::Sequence(vec![vec!["a", "b"].into()]);
    assert_eq!(
        flattened_keys("pairs[]", &value),
        vec![("pairs[]".to_string(), "a,b".to_string())]
    );
}

#[test]
fn test_mapping_keeps_key_order() {
    let value = mapping(vec![("zeta", "1".into()), ("alpha", "2".into())]);
    assert_eq!(
        flattened_keys("f", &value),
        vec![
            ("f[zeta]".to_string(), "1".to_string()),
            ("f[alpha]".to_string(), "2".to_string()),
        ]
    );
}

#[rstest]
#[case(ParamValue::Null, "q=")]
#[case(ParamValue::from(true), "q=true")]
#[case(ParamValue::from(2.5), "q=2.5")]
#[case(ParamValue::from(2.0), "q=2")]
#[case(ParamValue::from("a b+c"), "q=a+b%2Bc")]
#[case(ParamValue::from("été"), "q=%C3%A9t%C3%A9")]
fn test_leaf_values(#[case] value: ParamValue, #[case] expected: &str) {
    let params = RouteParams::new().with("q", value);
    assert_eq!(QueryParamSerializer::serialize(&params), expected);
}

#[test]
fn test_callables_are_resolved() {
    let params = RouteParams::new()
        .with("now", ParamValue::callable(|| ParamValue::from("2024-01-01")))
        .with("none", ParamValue::callable(|| ParamValue::Null));
    assert_eq!(
        QueryParamSerializer::serialize(&params),
        "now=2024-01-01&none="
    );
}

#[test]
fn test_keys_are_encoded() {
    let params = RouteParams::new().with("my key", "v");
    assert_eq!(QueryParamSerializer::serialize(&params), "my+key=v");
}

#[test]
fn test_params_from_json_keep_order() {
    let json: serde_json::Value = serde_json::from_str(
        r#"{"sort": "desc", "filter": {"b": 1, "a": 2}, "page": 3}"#,
    )
    .unwrap();
    let params: RouteParams = serde_json::from_value(json).unwrap();

    assert_eq!(
        QueryParamSerializer::serialize(&params),
        "sort=desc&filter%5Bb%5D=1&filter%5Ba%5D=2&page=3"
    );
}

#[test]
fn test_insert_replaces_in_place() {
    let mut params = RouteParams::new().with("a", 1).with("b", 2);
    params.insert("a", 3);

    assert_eq!(QueryParamSerializer::serialize(&params), "a=3&b=2");
    assert_eq!(params.remove("a"), Some(ParamValue::from(3)));
    assert_eq!(params.len(), 1);
}
