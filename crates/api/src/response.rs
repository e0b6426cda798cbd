//! Shared response envelope for API handlers.
//!
//! Every resource endpoint answers with
//! `{ "status": "success" | "error", "message"?, "data"?, "count"?, ... }`.
//! Optional members are omitted when unset. Use [`Envelope`] instead of
//! ad-hoc `serde_json::json!` bodies so both resources stay uniform.

use serde::Serialize;

/// Outcome marker carried in every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// Standard response envelope.
///
/// `T` is the payload type, used either as `data` or as `stats`.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Envelope::data(projects).with_count(n)))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize = ()> {
    pub status: EnvelopeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T: Serialize> Envelope<T> {
    fn new(status: EnvelopeStatus) -> Self {
        Self {
            status,
            message: None,
            data: None,
            count: None,
            total: None,
            unread: None,
            category: None,
            stats: None,
            errors: None,
        }
    }

    /// Success envelope carrying `data`.
    pub fn data(data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::new(EnvelopeStatus::Success)
        }
    }

    /// Success envelope carrying `stats`.
    pub fn stats(stats: T) -> Self {
        Self {
            stats: Some(stats),
            ..Self::new(EnvelopeStatus::Success)
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_total(mut self, total: usize) -> Self {
        self.total = Some(total);
        self
    }

    pub fn with_unread(mut self, unread: usize) -> Self {
        self.unread = Some(unread);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

impl Envelope<()> {
    /// Success envelope with only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(EnvelopeStatus::Success).with_message(message)
    }

    /// Error envelope with a message and, optionally, every violation found.
    pub fn error(message: impl Into<String>, errors: Option<Vec<String>>) -> Self {
        Self {
            errors,
            ..Self::new(EnvelopeStatus::Error).with_message(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_members_are_omitted() {
        let json = serde_json::to_value(Envelope::message("ok")).unwrap();
        assert_eq!(json, serde_json::json!({"status": "success", "message": "ok"}));
    }

    #[test]
    fn data_envelope_carries_count() {
        let json = serde_json::to_value(Envelope::data(vec![1, 2]).with_count(2)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "success", "data": [1, 2], "count": 2})
        );
    }

    #[test]
    fn error_envelope_lists_violations() {
        let envelope = Envelope::error("bad", Some(vec!["a".into(), "b".into()]));
        let json = serde_json::to_value(envelope).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["errors"], serde_json::json!(["a", "b"]));
        assert!(json.get("data").is_none());
    }
}
