//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every helper returns an `invalid_request` domain error whose `details`
//! name the offending field and a stable reason code.

use serde_json::json;

use crate::domain::Error;

/// Reason codes placed in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReasonCode {
    MissingField,
    InvalidValue,
}

impl ReasonCode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidValue => "invalid_value",
        }
    }
}

/// Error for required fields that were absent or empty.
pub(crate) fn missing_fields_error(message: &str, fields: &[&str]) -> Error {
    Error::invalid_request(message).with_details(json!({
        "fields": fields,
        "code": ReasonCode::MissingField.as_str(),
    }))
}

/// Error for an enum-like field holding an unsupported value.
pub(crate) fn invalid_value_error(field: &str, value: &str, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "value": value,
        "code": ReasonCode::InvalidValue.as_str(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;

    #[test]
    fn missing_fields_lists_every_field() {
        let err = missing_fields_error("Email and password are required", &["email", "password"]);
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            err.details(),
            Some(&json!({"fields": ["email", "password"], "code": "missing_field"}))
        );
    }

    #[test]
    fn invalid_value_keeps_the_offending_input() {
        let err = invalid_value_error("priority", "urgent", "bad priority");
        assert_eq!(err.message(), "bad priority");
        assert_eq!(
            err.details().and_then(|d| d.get("value")),
            Some(&json!("urgent"))
        );
    }
}
