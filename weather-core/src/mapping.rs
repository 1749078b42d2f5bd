//! Turns a decoded JSON body into the typed entity tree.
//!
//! Mapping is all-or-nothing: the first missing or malformed field aborts the
//! whole response, and the error names the field by its wire path, e.g.
//! `forecastDays[3].nighttimeForecast.wind.speed`.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// The body of a successful response did not fit the model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// Body is not syntactically valid JSON.
    #[error("response body is not valid JSON: {message}")]
    MalformedJson { message: String },

    /// A required wire key is absent.
    #[error("missing required field `{path}`")]
    MissingField { path: String },

    /// The key is present but its value has the wrong type or shape.
    #[error("invalid value at `{path}`: {message}")]
    InvalidValue { path: String, message: String },
}

impl MappingError {
    /// Wire path of the offending field; `.` for the document itself.
    pub fn path(&self) -> &str {
        match self {
            MappingError::MalformedJson { .. } => ".",
            MappingError::MissingField { path } | MappingError::InvalidValue { path, .. } => path,
        }
    }

    fn from_path_error(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let parent = err.path().to_string();
        let message = err.into_inner().to_string();

        // serde reports a missing key against the struct that should hold it.
        match missing_field_name(&message) {
            Some(field) => MappingError::MissingField {
                path: join_path(&parent, field),
            },
            None => MappingError::InvalidValue {
                path: parent,
                message,
            },
        }
    }
}

/// Maps an already decoded JSON value onto `T`.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, MappingError> {
    serde_path_to_error::deserialize(value).map_err(MappingError::from_path_error)
}

/// Decodes `body` as JSON, then maps it onto `T`.
pub fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, MappingError> {
    let value: Value = serde_json::from_str(body).map_err(|e| MappingError::MalformedJson {
        message: e.to_string(),
    })?;
    from_value(value)
}

// serde exposes no structured kind for a missing key, only the
// "missing field `x`" wording produced by `de::Error::missing_field`.
fn missing_field_name(message: &str) -> Option<&str> {
    message.strip_prefix("missing field `")?.strip_suffix('`')
}

fn join_path(parent: &str, field: &str) -> String {
    if parent == "." {
        field.to_owned()
    } else {
        format!("{parent}.{field}")
    }
}
