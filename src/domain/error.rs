use thiserror::Error;

/// Errors surfaced by every SDK operation
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Missing required parameters: {}", names.join(", "))]
    MissingParameters { names: Vec<String> },

    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    #[error("API error {status}: {message}")]
    Api {
        status: u16,
        message: String,
        body: Option<serde_json::Value>,
        transaction_id: Option<String>,
    },

    #[error("HTTP error: {message}")]
    Http { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Deserialization error: {message}")]
    Deserialization { message: String },

    #[error("Invalid header: {name}")]
    InvalidHeader { name: String },

    #[error("Invalid URL: {message}")]
    InvalidUrl { message: String },

    #[error("Authentication error: {message}")]
    Authentication { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("No more results available")]
    NoMoreResults,
}

impl SdkError {
    pub fn missing_parameters<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingParameters {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
            body: None,
            transaction_id: None,
        }
    }

    pub fn http(message: impl Into<String>) -> Self {
        Self::Http {
            message: message.into(),
        }
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    pub fn deserialization(message: impl Into<String>) -> Self {
        Self::Deserialization {
            message: message.into(),
        }
    }

    pub fn invalid_header(name: impl Into<String>) -> Self {
        Self::InvalidHeader { name: name.into() }
    }

    pub fn invalid_url(message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            message: message.into(),
        }
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// HTTP status code for API errors
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Raw response body for API errors, when the service returned JSON
    pub fn body(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Api { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}
