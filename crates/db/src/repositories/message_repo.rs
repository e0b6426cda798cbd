//! Repository for contact messages.

use chrono::Utc;
use folio_core::contact::{percentage_read, validate_submission};
use folio_core::error::CoreError;
use folio_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::message::{CreateMessage, Message, MessageListing, MessageStats};

#[derive(Default)]
struct MessageTable {
    rows: Vec<Message>,
    /// Highest ID handed out so far. Deleting a message never frees its ID.
    last_id: DbId,
}

/// Inbox of contact messages with read/unread tracking.
#[derive(Default)]
pub struct MessageRepo {
    table: RwLock<MessageTable>,
}

impl MessageRepo {
    /// Create an empty inbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a submission and store it as a new unread message.
    ///
    /// Validation stops at the first failed rule, see
    /// [`folio_core::contact::validate_submission`].
    pub async fn create(&self, input: CreateMessage) -> Result<Message, CoreError> {
        validate_submission(&input.as_submission())?;

        let mut table = self.table.write().await;
        table.last_id += 1;
        let msg = Message {
            id: table.last_id,
            name: input.name.unwrap_or_default(),
            email: input.email.unwrap_or_default(),
            subject: input.subject.unwrap_or_default(),
            message: input.message.unwrap_or_default(),
            phone: input.phone,
            created_at: Utc::now(),
            read: false,
        };
        table.rows.push(msg.clone());
        tracing::debug!(message_id = msg.id, "Contact message stored");
        Ok(msg)
    }

    /// Fetch a message for viewing. Viewing marks it as read.
    pub async fn find_and_mark_read(&self, id: DbId) -> Option<Message> {
        self.mark_read(id).await
    }

    /// Mark a message as read. Calling it again has no further effect.
    ///
    /// Returns `None` if no message with the given `id` exists.
    pub async fn mark_read(&self, id: DbId) -> Option<Message> {
        let mut table = self.table.write().await;
        let msg = table.rows.iter_mut().find(|m| m.id == id)?;
        msg.read = true;
        Some(msg.clone())
    }

    /// Remove a message by ID. Returns `true` if a message was removed.
    pub async fn delete(&self, id: DbId) -> bool {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|m| m.id != id);
        let deleted = table.rows.len() < before;
        if deleted {
            tracing::debug!(message_id = id, "Contact message deleted");
        }
        deleted
    }

    /// List messages, optionally keeping only those whose `read` flag
    /// equals `read`. Totals always cover the whole inbox.
    pub async fn list(&self, read: Option<bool>) -> MessageListing {
        let table = self.table.read().await;
        let items = table
            .rows
            .iter()
            .filter(|m| read.map_or(true, |r| m.read == r))
            .cloned()
            .collect();
        MessageListing {
            items,
            total: table.rows.len(),
            unread: table.rows.iter().filter(|m| !m.read).count(),
        }
    }

    /// Read/unread counters for the whole inbox.
    pub async fn stats(&self) -> MessageStats {
        let table = self.table.read().await;
        let total = table.rows.len();
        let read = table.rows.iter().filter(|m| m.read).count();
        MessageStats {
            total_messages: total,
            unread: total - read,
            read,
            percentage_read: percentage_read(read, total),
        }
    }

    /// Number of stored messages.
    pub async fn count(&self) -> usize {
        self.table.read().await.rows.len()
    }
}
