//! # JSON Bridge
//!
//! Conversions between [`serde_json::Value`] and [`Nested`] structures.
//!
//! Arrays become sequences; strings (or unsigned integers, for ids) become
//! leaves. Anything else is [`LostScriptError::UnsupportedType`].

use serde_json::Value;

use crate::{
    errors::{LSResult, LostScriptError},
    nested::Nested,
};

fn unsupported(
    expected: &str,
    value: &Value,
) -> LostScriptError {
    LostScriptError::UnsupportedType(format!("expected {expected} or array, found {value}"))
}

fn from_json<L, F>(
    value: &Value,
    leaf: &F,
) -> LSResult<Nested<L>>
where
    F: Fn(&Value) -> LSResult<L>,
{
    match value {
        Value::Array(items) => items.iter().map(|item| from_json(item, leaf)).collect(),
        other => leaf(other).map(Nested::Leaf),
    }
}

/// Convert a JSON value of nested string arrays into [`Nested<String>`].
pub fn strings_from_json(value: &Value) -> LSResult<Nested<String>> {
    from_json(value, &|v| match v {
        Value::String(s) => Ok(s.clone()),
        other => Err(unsupported("a string", other)),
    })
}

/// Convert a JSON value of nested id arrays into [`Nested<u64>`].
pub fn ids_from_json(value: &Value) -> LSResult<Nested<u64>> {
    from_json(value, &|v| {
        v.as_u64()
            .ok_or_else(|| unsupported("an unsigned integer", v))
    })
}

/// Parse JSON text holding nested string arrays.
pub fn parse_strings(text: &str) -> LSResult<Nested<String>> {
    strings_from_json(&serde_json::from_str(text)?)
}

/// Parse JSON text holding nested id arrays.
pub fn parse_ids(text: &str) -> LSResult<Nested<u64>> {
    ids_from_json(&serde_json::from_str(text)?)
}

/// Convert a [`Nested`] structure into a JSON value.
pub fn nested_to_json<L>(nested: &Nested<L>) -> Value
where
    L: Clone + Into<Value>,
{
    match nested {
        Nested::Leaf(value) => value.clone().into(),
        Nested::Seq(items) => Value::Array(items.iter().map(nested_to_json).collect()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_strings() {
        let value = json!([["a", "b"], ["c"], []]);
        let nested = strings_from_json(&value).unwrap();
        assert_eq!(
            nested,
            Nested::from_rows(vec![vec!["a", "b"], vec!["c"], vec![]]).map(|s| s.to_string())
        );
        assert_eq!(nested_to_json(&nested), value);

        assert_eq!(
            strings_from_json(&json!("x")).unwrap(),
            Nested::leaf("x".to_string())
        );
    }

    #[test]
    fn test_ids() {
        let nested = parse_ids("[[[1, 4, 2]], [[1, 2]]]").unwrap();
        assert_eq!(nested, Nested::from_batches(vec![vec![vec![1u64, 4, 2]], vec![vec![1, 2]]]));
        assert_eq!(nested_to_json(&nested), json!([[[1, 4, 2]], [[1, 2]]]));
    }

    #[test]
    fn test_unsupported() {
        for bad in [
            json!({"a": "b"}),
            json!([true]),
            json!([["a", null]]),
            json!([1]),
        ] {
            assert!(matches!(
                strings_from_json(&bad),
                Err(LostScriptError::UnsupportedType(_))
            ));
        }
        for bad in [json!([-1]), json!([1.5]), json!(["1"])] {
            assert!(matches!(
                ids_from_json(&bad),
                Err(LostScriptError::UnsupportedType(_))
            ));
        }
        assert!(matches!(parse_ids("[1,"), Err(LostScriptError::Json(_))));
    }
}
