//! Frontend Models
//!
//! Data structures matching the remote notes service.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Note data structure (matches the service payload)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(deserialize_with = "deserialize_created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub archived: bool,
}

impl Note {
    /// Long English date, e.g. "Tuesday, November 14, 2023"
    pub fn formatted_date(&self) -> String {
        self.created_at.format("%A, %B %-d, %Y").to_string()
    }

    /// Label of the archive toggle for this note
    pub fn archive_label(&self) -> &'static str {
        archive_label(self.archived)
    }
}

pub fn archive_label(archived: bool) -> &'static str {
    if archived { "Unarchive" } else { "Archive" }
}

/// The service sends either epoch millis or an RFC 3339 string.
fn deserialize_created_at<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Millis(i64),
        Text(String),
    }

    match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Millis(ms) => Utc
            .timestamp_millis_opt(ms)
            .single()
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {}", ms))),
        RawTimestamp::Text(text) => DateTime::parse_from_rfc3339(&text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom),
    }
}

/// Which of the two rendered lists a note belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    Active,
    Archived,
}

impl Partition {
    pub fn heading(self) -> &'static str {
        match self {
            Partition::Active => "Active Notes",
            Partition::Archived => "Archived Notes",
        }
    }
}

/// Creation request, also the POST body of the create call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteDraft {
    pub title: String,
    pub body: String,
}

/// Requests emitted by the leaf components, consumed once by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteEvent {
    CreateRequested(NoteDraft),
    DeleteRequested { id: String },
    ArchiveToggleRequested { id: String, archived: bool },
}

impl NoteEvent {
    pub fn delete(note: &Note) -> Self {
        NoteEvent::DeleteRequested { id: note.id.clone() }
    }

    pub fn archive_toggle(note: &Note) -> Self {
        NoteEvent::ArchiveToggleRequested { id: note.id.clone(), archived: note.archived }
    }
}
