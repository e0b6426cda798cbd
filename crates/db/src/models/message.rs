//! Contact message model and DTOs.

use folio_core::contact::Submission;
use folio_core::types::{DbId, Timestamp};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// A contact message left through the portfolio form.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub phone: Option<String>,
    pub created_at: Timestamp,
    pub read: bool,
}

/// DTO for submitting the contact form.
///
/// Required fields are optional here so a missing key can be reported by
/// name instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMessage {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub phone: Option<String>,
}

impl CreateMessage {
    pub fn as_submission(&self) -> Submission<'_> {
        Submission {
            name: self.name.as_deref(),
            email: self.email.as_deref(),
            subject: self.subject.as_deref(),
            message: self.message.as_deref(),
        }
    }
}

/// Short confirmation returned after a message is stored.
#[derive(Debug, Clone, Serialize)]
pub struct MessageReceipt {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
}

impl From<&Message> for MessageReceipt {
    fn from(msg: &Message) -> Self {
        Self {
            id: msg.id,
            name: msg.name.clone(),
            email: msg.email.clone(),
            created_at: msg.created_at,
        }
    }
}

/// A filtered message list together with inbox-wide counters.
#[derive(Debug, Clone)]
pub struct MessageListing {
    pub items: Vec<Message>,
    pub total: usize,
    pub unread: usize,
}

/// Read/unread counters for the whole inbox.
///
/// An empty inbox reports `percentage_read` as the integer `0`.
#[derive(Debug, Clone)]
pub struct MessageStats {
    pub total_messages: usize,
    pub unread: usize,
    pub read: usize,
    pub percentage_read: f64,
}

impl Serialize for MessageStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MessageStats", 4)?;
        state.serialize_field("total_messages", &self.total_messages)?;
        state.serialize_field("unread", &self.unread)?;
        state.serialize_field("read", &self.read)?;
        if self.total_messages == 0 {
            state.serialize_field("percentage_read", &0u8)?;
        } else {
            state.serialize_field("percentage_read", &self.percentage_read)?;
        }
        state.end()
    }
}
