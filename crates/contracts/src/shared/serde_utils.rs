use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept a JSON string or number and keep it as a string; `null` becomes empty
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!(
            "expected a string or a number, got {}",
            other
        ))),
    }
}

/// Explicit `null` reads as the type's default, like a missing key
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Integer id given as a number or a numeric string; anything else reads as `None`
pub fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct UserRef {
        #[serde(default, deserialize_with = "string_or_number")]
        id: String,
    }

    #[derive(Deserialize)]
    struct Record {
        #[serde(default, deserialize_with = "null_as_default")]
        name: String,
        #[serde(default, deserialize_with = "null_as_default")]
        tags: Vec<String>,
        #[serde(default, deserialize_with = "lenient_id")]
        owner: Option<i64>,
    }

    #[test]
    fn test_string_or_number() {
        let n: UserRef = serde_json::from_value(json!({"id": 12})).unwrap();
        assert_eq!(n.id, "12");
        let s: UserRef = serde_json::from_value(json!({"id": "abc"})).unwrap();
        assert_eq!(s.id, "abc");
        let null: UserRef = serde_json::from_value(json!({"id": null})).unwrap();
        assert_eq!(null.id, "");
        let missing: UserRef = serde_json::from_value(json!({})).unwrap();
        assert_eq!(missing.id, "");
        assert!(serde_json::from_value::<UserRef>(json!({"id": [1]})).is_err());
    }

    #[test]
    fn test_null_reads_as_default() {
        let r: Record =
            serde_json::from_value(json!({"name": null, "tags": null, "owner": null})).unwrap();
        assert_eq!(r.name, "");
        assert!(r.tags.is_empty());
        assert_eq!(r.owner, None);

        let r: Record = serde_json::from_value(json!({"name": "Ana", "tags": ["a"]})).unwrap();
        assert_eq!(r.name, "Ana");
        assert_eq!(r.tags, vec!["a".to_string()]);
    }

    #[test]
    fn test_lenient_id() {
        let r: Record = serde_json::from_value(json!({"owner": 7})).unwrap();
        assert_eq!(r.owner, Some(7));
        let r: Record = serde_json::from_value(json!({"owner": " 8 "})).unwrap();
        assert_eq!(r.owner, Some(8));
        let r: Record = serde_json::from_value(json!({"owner": "x"})).unwrap();
        assert_eq!(r.owner, None);
        let r: Record = serde_json::from_value(json!({"owner": {"id": 1}})).unwrap();
        assert_eq!(r.owner, None);
    }
}
