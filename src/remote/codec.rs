//! Firestore typed-value codec.
//!
//! The REST API wraps every value in a single-key object naming its type
//! (`{"stringValue": "x"}`, `{"integerValue": "42"}`, ...). Records are kept
//! as plain JSON everywhere else, so this module translates at the edge.

use super::{Fields, RemoteError};
use serde_json::{Map, Number, Value, json};

/// Encodes plain JSON fields into a Firestore `fields` map.
pub fn encode_fields(fields: &Fields) -> Result<Map<String, Value>, RemoteError> {
    fields
        .iter()
        .map(|(name, value)| encode_value(value).map(|v| (name.clone(), v)))
        .collect()
}

/// Encodes one plain JSON value.
///
/// Firestore integers are signed 64-bit; unsigned values above `i64::MAX` are
/// rejected rather than rounded through a double.
pub fn encode_value(value: &Value) -> Result<Value, RemoteError> {
    let encoded = match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                json!({ "integerValue": i.to_string() })
            } else if n.is_u64() {
                return Err(RemoteError::Encode(format!(
                    "integer {n} exceeds the signed 64-bit range"
                )));
            } else {
                json!({ "doubleValue": n.as_f64().unwrap_or_default() })
            }
        }
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            if items.is_empty() {
                json!({ "arrayValue": {} })
            } else {
                let values = items
                    .iter()
                    .map(encode_value)
                    .collect::<Result<Vec<_>, _>>()?;
                json!({ "arrayValue": { "values": values } })
            }
        }
        Value::Object(map) => json!({ "mapValue": { "fields": encode_fields(map)? } }),
    };
    Ok(encoded)
}

/// Decodes a Firestore `fields` map into plain JSON fields.
pub fn decode_fields(fields: &Map<String, Value>) -> Result<Fields, RemoteError> {
    fields
        .iter()
        .map(|(name, value)| decode_value(value).map(|v| (name.clone(), v)))
        .collect()
}

/// Decodes one typed value.
pub fn decode_value(value: &Value) -> Result<Value, RemoteError> {
    let Some((kind, inner)) = value.as_object().and_then(|o| o.iter().next()) else {
        return Err(RemoteError::Decode(format!("expected typed value, got {value}")));
    };

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" => inner
            .as_bool()
            .map(Value::Bool)
            .ok_or_else(|| mismatch(kind, inner)),
        "integerValue" => decode_integer(inner).ok_or_else(|| mismatch(kind, inner)),
        "doubleValue" => decode_double(inner).ok_or_else(|| mismatch(kind, inner)),
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => inner
            .as_str()
            .map(|s| Value::String(s.to_string()))
            .ok_or_else(|| mismatch(kind, inner)),
        "geoPointValue" => Ok(inner.clone()),
        "arrayValue" => {
            let values = inner
                .get("values")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default();
            values
                .iter()
                .map(decode_value)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        }
        "mapValue" => match inner.get("fields").and_then(Value::as_object) {
            Some(fields) => decode_fields(fields).map(Value::Object),
            None => Ok(Value::Object(Map::new())),
        },
        other => Err(RemoteError::Decode(format!("unsupported value type '{other}'"))),
    }
}

fn decode_integer(inner: &Value) -> Option<Value> {
    match inner {
        Value::String(s) => s.parse::<i64>().ok().map(Value::from),
        Value::Number(n) => n.as_i64().map(Value::from),
        _ => None,
    }
}

fn decode_double(inner: &Value) -> Option<Value> {
    match inner {
        // NaN and infinities have no JSON form
        Value::String(_) => Some(Value::Null),
        Value::Number(n) => n.as_f64().and_then(Number::from_f64).map(Value::Number),
        _ => None,
    }
}

fn mismatch(kind: &str, inner: &Value) -> RemoteError {
    RemoteError::Decode(format!("bad payload for {kind}: {inner}"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_encode_scalars() {
        assert_eq!(encode_value(&json!(21)).unwrap(), json!({ "integerValue": "21" }));
        assert_eq!(encode_value(&json!(45.5)).unwrap(), json!({ "doubleValue": 45.5 }));
        assert_eq!(encode_value(&json!("set")).unwrap(), json!({ "stringValue": "set" }));
        assert_eq!(encode_value(&json!(true)).unwrap(), json!({ "booleanValue": true }));
        assert_eq!(encode_value(&Value::Null).unwrap(), json!({ "nullValue": null }));
    }

    #[test]
    fn test_encode_rejects_integers_beyond_i64() {
        let max = i64::MAX.unsigned_abs();
        assert_eq!(
            encode_value(&json!(max)).unwrap(),
            json!({ "integerValue": i64::MAX.to_string() })
        );

        let too_big = json!({ "priceEstimate": max + 1 });
        assert!(matches!(
            encode_fields(too_big.as_object().unwrap()),
            Err(RemoteError::Encode(_))
        ));
        assert!(matches!(
            encode_value(&json!([1, u64::MAX])),
            Err(RemoteError::Encode(_))
        ));
    }

    #[test]
    fn test_encode_price_document() {
        let fields = json!({ "values": [{ "karat": 24, "buy": 34500, "sell": 35000 }] });
        let encoded = encode_fields(fields.as_object().unwrap()).unwrap();

        assert_eq!(
            encoded["values"],
            json!({ "arrayValue": { "values": [ { "mapValue": { "fields": {
                "karat": { "integerValue": "24" },
                "buy": { "integerValue": "34500" },
                "sell": { "integerValue": "35000" }
            } } } ] } })
        );
    }

    #[test]
    fn test_decode_firestore_product() {
        let raw = json!({
            "name": { "stringValue": "Sultana Ring" },
            "weight": { "doubleValue": 8.2 },
            "karat": { "integerValue": "21" },
            "priceEstimate": { "integerValue": "850000" },
            "tags": { "arrayValue": {} },
            "meta": { "mapValue": {} },
            "updated": { "timestampValue": "2024-01-01T00:00:00Z" }
        });

        let decoded = decode_fields(raw.as_object().unwrap()).unwrap();
        assert_eq!(decoded["name"], "Sultana Ring");
        assert_eq!(decoded["weight"], 8.2);
        assert_eq!(decoded["karat"], 21);
        assert_eq!(decoded["priceEstimate"], 850_000);
        assert_eq!(decoded["tags"], json!([]));
        assert_eq!(decoded["meta"], json!({}));
        assert_eq!(decoded["updated"], "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_nested_values_survive_encoding() {
        let original = json!({
            "values": [
                { "karat": 18, "buy": 25800, "sell": 26500 },
                { "karat": 21, "buy": 30200, "sell": 30800 }
            ],
            "note": null,
            "ratio": 0.03
        });
        let encoded = encode_fields(original.as_object().unwrap()).unwrap();
        let decoded = decode_fields(&encoded).unwrap();
        assert_eq!(Value::Object(decoded), original);
    }

    #[test]
    fn test_decode_rejects_unknown_or_bad_payloads() {
        assert!(decode_value(&json!({ "vectorValue": {} })).is_err());
        assert!(decode_value(&json!({ "integerValue": "abc" })).is_err());
        assert!(decode_value(&json!("bare")).is_err());
    }

    #[test]
    fn test_decode_nan_double_as_null() {
        assert_eq!(
            decode_value(&json!({ "doubleValue": "NaN" })).unwrap(),
            Value::Null
        );
    }
}
