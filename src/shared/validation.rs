use serde::{de::Error as _, Deserialize, Deserializer};
use validator::ValidationError;

/// Rejects strings that are empty once surrounding whitespace is removed
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrText {
    Int(i64),
    Text(String),
}

/// Accepts `1` as well as `"1"`; anything else is a deserialization error.
///
/// Clients built around HTML forms tend to send numeric fields as strings.
pub fn deserialize_lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = IntOrText::deserialize(deserializer)
        .map_err(|_| D::Error::custom("expected an integer"))?;

    match raw {
        IntOrText::Int(value) => i32::try_from(value)
            .map_err(|_| D::Error::custom(format!("integer {} is out of range", value))),
        IntOrText::Text(text) => text
            .trim()
            .parse::<i32>()
            .map_err(|_| D::Error::custom(format!("expected an integer, found \"{}\"", text))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "deserialize_lenient_i32")]
        value: i32,
    }

    fn parse(json: &str) -> Result<i32, serde_json::Error> {
        serde_json::from_str::<Holder>(json).map(|h| h.value)
    }

    #[test]
    fn test_lenient_int_valid() {
        assert_eq!(parse(r#"{"value": 3}"#).unwrap(), 3);
        assert_eq!(parse(r#"{"value": "4"}"#).unwrap(), 4);
        assert_eq!(parse(r#"{"value": " 5 "}"#).unwrap(), 5);
    }

    #[test]
    fn test_lenient_int_invalid() {
        assert!(parse(r#"{"value": "should integer"}"#).is_err());
        assert!(parse(r#"{"value": 1.5}"#).is_err());
        assert!(parse(r#"{"value": true}"#).is_err());
        assert!(parse(r#"{"value": null}"#).is_err());
        assert!(parse(r#"{"value": 99999999999}"#).is_err());
        assert!(parse(r#"{}"#).is_err());
    }

    #[test]
    fn test_not_blank() {
        assert!(validate_not_blank("What is my age").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
    }
}
