//! Deserialization helpers.

use serde::{Deserialize, Deserializer};

/// Accept a string or a bare number where the backend is inconsistent
/// (`"12 LPA"` vs `1200000`).
pub(crate) fn stringly<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Stringly {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Stringly::deserialize(deserializer)? {
        Stringly::Text(s) => s,
        Stringly::Int(n) => n.to_string(),
        Stringly::Float(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(default, deserialize_with = "super::stringly")]
        salary: String,
    }

    #[test]
    fn test_stringly_accepts_text_and_numbers() {
        let text: Wrapper = serde_json::from_str(r#"{"salary":"12 LPA"}"#).unwrap();
        assert_eq!(text.salary, "12 LPA");

        let int: Wrapper = serde_json::from_str(r#"{"salary":1200000}"#).unwrap();
        assert_eq!(int.salary, "1200000");
    }

    #[test]
    fn test_stringly_defaults_when_absent() {
        let absent: Wrapper = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.salary, "");
    }
}
