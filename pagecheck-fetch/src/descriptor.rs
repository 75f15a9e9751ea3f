//! HTTP response descriptor.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What one HTTP attempt produced, as seen by the classifier.
///
/// `status` is absent when no response reached the caller at all (a
/// network-level failure). `body` is absent when the response carried no
/// content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseDescriptor {
    /// HTTP status code, or `None` when no response was received.
    pub status: Option<u16>,
    /// Response body, or `None` when the response was empty.
    pub body: Option<Value>,
}

impl ResponseDescriptor {
    /// Create a descriptor from raw parts.
    pub fn new(status: Option<u16>, body: Option<Value>) -> Self {
        Self { status, body }
    }

    /// Descriptor for a response with a status and a body.
    pub fn with_body(status: u16, body: Value) -> Self {
        Self {
            status: Some(status),
            body: Some(body),
        }
    }

    /// Descriptor for a response with a status but no content.
    pub fn empty(status: u16) -> Self {
        Self {
            status: Some(status),
            body: None,
        }
    }

    /// Descriptor for an attempt where no response arrived.
    pub fn no_response(body: Option<Value>) -> Self {
        Self { status: None, body }
    }

    /// Whether the body carries actual content.
    ///
    /// Absent bodies, JSON null, the empty string, zero, and `false` all
    /// count as no content.
    pub fn has_content(&self) -> bool {
        match &self.body {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0),
            Some(_) => true,
        }
    }
}
