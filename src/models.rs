//! Data model
//!
//! Entities managed by the calendar service. All models use serde and
//! serialize to the exact JSON shapes written by earlier versions of the
//! application (camelCase where the stored data used it, `type` for the
//! event category).

use crate::config::MAX_TITLE_LENGTH;
use crate::error::{AppError, Result};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Category of a calendar event.
///
/// The recognized set is closed, but values outside it are preserved
/// byte-for-byte through a store round-trip so that data written by other
/// versions of the application is never mangled. Unrecognized categories
/// get a default visual treatment in the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    Work,
    Meeting,
    Personal,
    Urgent,
    Other(String),
}

impl EventKind {
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::Work => "work",
            EventKind::Meeting => "meeting",
            EventKind::Personal => "personal",
            EventKind::Urgent => "urgent",
            EventKind::Other(s) => s,
        }
    }
}

impl Default for EventKind {
    fn default() -> Self {
        EventKind::Work
    }
}

impl From<String> for EventKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "work" => EventKind::Work,
            "meeting" => EventKind::Meeting,
            "personal" => EventKind::Personal,
            "urgent" => EventKind::Urgent,
            _ => EventKind::Other(s),
        }
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        kind.as_str().to_string()
    }
}

/// A titled, timed, categorized calendar entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Assigned by the calendar service at creation time, never by callers
    pub id: String,
    pub title: String,
    /// Local timestamps: day/month queries compare calendar components
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    #[serde(rename = "type", default)]
    pub kind: EventKind,
}

/// Create event request (id is generated by the service)
#[derive(Debug, Clone, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    #[serde(default)]
    pub kind: EventKind,
}

impl NewEvent {
    /// Validate an event before it is handed to the store.
    ///
    /// Validation lives here, above the store: the calendar service itself
    /// accepts any well-shaped record, and the calling layer decides when
    /// to enforce these rules.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("event title is empty".to_string()));
        }
        if self.title.len() > MAX_TITLE_LENGTH {
            return Err(AppError::Validation(format!(
                "event title exceeds {} characters",
                MAX_TITLE_LENGTH
            )));
        }
        if self.end <= self.start {
            return Err(AppError::Validation(
                "event end must be after its start".to_string(),
            ));
        }
        Ok(())
    }
}

/// Update event request (shallow field overwrite; absent fields keep
/// their stored value)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPatch {
    pub title: Option<String>,
    pub start: Option<DateTime<Local>>,
    pub end: Option<DateTime<Local>>,
    pub kind: Option<EventKind>,
}

impl EventPatch {
    /// Apply this patch to a stored event in place
    pub fn apply(&self, event: &mut Event) {
        if let Some(title) = &self.title {
            event.title = title.clone();
        }
        if let Some(start) = self.start {
            event.start = start;
        }
        if let Some(end) = self.end {
            event.end = end;
        }
        if let Some(kind) = &self.kind {
            event.kind = kind.clone();
        }
    }
}

/// An image saved to a calendar date's collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Assigned at save time, same generation strategy as event ids but a
    /// separate namespace
    pub id: String,
    pub url: String,
    pub description: String,
    pub author: String,
    #[serde(rename = "savedAt")]
    pub saved_at: DateTime<Utc>,
}

/// Save image request (id and timestamp are generated by the service)
#[derive(Debug, Clone, Deserialize)]
pub struct NewImage {
    pub url: String,
    pub description: String,
    pub author: String,
}
