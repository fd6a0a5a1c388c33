use std::collections::HashMap;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParameterError {
    #[error("Missing required parameter '{0}'")]
    Missing(String),
    #[error("Invalid parameter '{name}': {reason}")]
    Invalid { name: String, reason: String },
}

/// Raw request fields, from either the query string or a submitted form.
#[derive(Debug, Clone, Default)]
pub struct RequestParams {
    fields: HashMap<String, String>,
}

impl From<HashMap<String, String>> for RequestParams {
    fn from(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }
}

impl<const N: usize> From<[(&str, &str); N]> for RequestParams {
    fn from(fields: [(&str, &str); N]) -> Self {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl RequestParams {
    /// Required free-text field. Blank values count as absent.
    pub fn required_text(&self, name: &str) -> Result<String, ParameterError> {
        match self.fields.get(name).map(|v| v.trim()) {
            Some(value) if !value.is_empty() => Ok(value.to_string()),
            _ => Err(ParameterError::Missing(name.to_string())),
        }
    }

    /// Required numeric field; non-numeric input is rejected, never coerced.
    pub fn required_int<T>(&self, name: &str) -> Result<T, ParameterError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.required_text(name)?;
        raw.parse::<T>().map_err(|e| ParameterError::Invalid {
            name: name.to_string(),
            reason: format!("'{raw}' is not a valid integer ({e})"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_int_parses() {
        let params = RequestParams::from([("singer_id", "30001")]);
        assert_eq!(params.required_int::<i64>("singer_id"), Ok(30001));
    }

    #[test]
    fn test_required_int_trims_whitespace() {
        let params = RequestParams::from([("singer_id", " 42 ")]);
        assert_eq!(params.required_int::<i64>("singer_id"), Ok(42));
    }

    #[test]
    fn test_missing_parameter() {
        let params = RequestParams::default();
        assert_eq!(
            params.required_int::<i64>("singer_id"),
            Err(ParameterError::Missing("singer_id".to_string()))
        );
        assert_eq!(
            params.required_text("genre"),
            Err(ParameterError::Missing("genre".to_string()))
        );
    }

    #[test]
    fn test_blank_parameter_is_missing() {
        let params = RequestParams::from([("genre", "   ")]);
        assert_eq!(
            params.required_text("genre"),
            Err(ParameterError::Missing("genre".to_string()))
        );
    }

    #[test]
    fn test_non_numeric_is_invalid() {
        let params = RequestParams::from([("singer_id", "abc")]);
        match params.required_int::<i64>("singer_id") {
            Err(ParameterError::Invalid { name, reason }) => {
                assert_eq!(name, "singer_id");
                assert!(reason.contains("abc"));
            }
            other => panic!("expected invalid parameter, got {other:?}"),
        }
    }

    #[test]
    fn test_overflowing_year_is_invalid() {
        let params = RequestParams::from([("year", "99999999999")]);
        assert!(matches!(
            params.required_int::<i32>("year"),
            Err(ParameterError::Invalid { .. })
        ));
    }
}
