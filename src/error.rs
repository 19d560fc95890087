use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse event data: {0}")]
    EventParse(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date/time parsing error: {0}")]
    DateTimeParse(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    #[error("Live event notification failed for {event_key}: {message}")]
    NotificationDelivery { event_key: String, message: String },
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a notification delivery error for the given event key
    pub fn notification_delivery(
        event_key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::NotificationDelivery {
            event_key: event_key.into(),
            message: message.into(),
        }
    }

    /// Check if the error came from the live-update side channel
    pub fn is_notification_failure(&self) -> bool {
        matches!(self, AppError::NotificationDelivery { .. })
    }
}
