//! Error type returned by every client operation.

use thiserror::Error;

use crate::http::TransportError;
use crate::mapping::MappingError;

pub type Result<T, E = WeatherApiError> = std::result::Result<T, E>;

/// Errors returned by [`crate::WeatherClient`] operations.
#[derive(Debug, Error)]
pub enum WeatherApiError {
    /// No usable response: connection failure, TLS failure or timeout.
    #[error("error connecting to API: {0}")]
    Connection(#[from] TransportError),

    /// The service answered with a status other than 200.
    ///
    /// `message` is the service's `error.message`, verbatim.
    #[error("{message}")]
    Response {
        status: u16,
        message: String,
        /// Canonical status string from the body, e.g. `PERMISSION_DENIED`.
        code: Option<String>,
    },

    /// A 200 body that does not fit the response model.
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

impl WeatherApiError {
    pub fn is_connection(&self) -> bool {
        matches!(self, WeatherApiError::Connection(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, WeatherApiError::Connection(TransportError::Timeout))
    }

    pub fn is_response(&self) -> bool {
        matches!(self, WeatherApiError::Response { .. })
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, WeatherApiError::Mapping(_))
    }

    /// Whether re-issuing the identical request could succeed. Only connection
    /// failures qualify; a rejected request needs a caller decision.
    pub fn is_retryable(&self) -> bool {
        self.is_connection()
    }

    /// HTTP status for [`WeatherApiError::Response`].
    pub fn status(&self) -> Option<u16> {
        match self {
            WeatherApiError::Response { status, .. } => Some(*status),
            _ => None,
        }
    }
}
