use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Usage event sent by the directory's pages.
/// `accion` and `detalle` are accepted for older clients.
#[derive(Debug, Serialize, Deserialize, Getters, Default, PartialEq, Clone)]
pub struct EventRequest {
    #[serde(default, alias = "accion")]
    action: Option<String>,
    #[serde(default, alias = "detalle")]
    detail: Option<String>,
    #[serde(default)]
    timestamp: Option<String>,
}

impl EventRequest {
    pub fn new(action: Option<String>, detail: Option<String>, timestamp: Option<String>) -> Self {
        Self {
            action,
            detail,
            timestamp,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Success,
    Error,
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct EventResponse {
    status: EventStatus,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    bytes_written: Option<usize>,
}

impl EventResponse {
    pub fn success(message: String, timestamp: String, bytes_written: usize) -> Self {
        Self {
            status: EventStatus::Success,
            message,
            timestamp: Some(timestamp),
            bytes_written: Some(bytes_written),
        }
    }

    pub fn error(message: String, timestamp: Option<String>) -> Self {
        Self {
            status: EventStatus::Error,
            message,
            timestamp,
            bytes_written: None,
        }
    }
}
