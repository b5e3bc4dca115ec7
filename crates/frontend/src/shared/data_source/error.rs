use contracts::domain::common::EntityKind;

/// Ошибки источника данных экранов
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataSourceError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("{kind} `{id}` not found")]
    NotFound { kind: EntityKind, id: String },
    #[error("data store is unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for DataSourceError {
    fn from(e: serde_json::Error) -> Self {
        DataSourceError::Decode(e.to_string())
    }
}

impl From<gloo_net::Error> for DataSourceError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => DataSourceError::Decode(e.to_string()),
            other => DataSourceError::Network(other.to_string()),
        }
    }
}
