//! Backup service
//!
//! Exports the full event collection as a portable JSON document tagged
//! with an export timestamp, and restores a collection from such a
//! document. Per-date content, backgrounds, and images are deliberately
//! not part of the document.

use crate::config::BACKUP_FILE_PREFIX;
use crate::error::{AppError, Result};
use crate::models::Event;
use crate::services::CalendarService;
use crate::storage::KeyValueStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Portable backup document
#[derive(Debug, Serialize, Deserialize)]
pub struct BackupDocument {
    pub events: Vec<Event>,
    #[serde(rename = "exportDate")]
    pub export_date: DateTime<Utc>,
}

/// Backup/restore over a calendar service
#[derive(Clone)]
pub struct BackupService<S> {
    calendar: CalendarService<S>,
}

impl<S: KeyValueStore> BackupService<S> {
    pub fn new(calendar: CalendarService<S>) -> Self {
        Self { calendar }
    }

    /// Snapshot the current event collection into a backup document
    pub fn export_document(&self) -> BackupDocument {
        BackupDocument {
            events: self.calendar.get_events(),
            export_date: Utc::now(),
        }
    }

    /// Write a backup document into the given directory as
    /// `calendar-backup-<YYYY-MM-DD>.json`. Returns the written path.
    pub fn export_to_file(&self, dir: &Path) -> Result<PathBuf> {
        tracing::info!("Exporting backup to {:?}", dir);

        fs::create_dir_all(dir)?;

        let document = self.export_document();
        let json = serde_json::to_string_pretty(&document)?;

        let filename = format!(
            "{}{}.json",
            BACKUP_FILE_PREFIX,
            document.export_date.format("%Y-%m-%d")
        );
        let path = dir.join(filename);

        fs::write(&path, json)?;

        tracing::info!(
            "Backup written: {:?} ({} events)",
            path,
            document.events.len()
        );

        Ok(path)
    }

    /// Replace the stored event collection with the one in a backup
    /// document. The document must carry an array-typed `events` field;
    /// anything else is rejected and the existing collection is left
    /// untouched. Returns the number of imported events.
    pub fn import_document(&self, raw: &str) -> Result<usize> {
        let value: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| AppError::Restore(format!("backup document is not valid JSON: {}", e)))?;

        let events_value = match value.get("events") {
            Some(v) if v.is_array() => v.clone(),
            Some(_) => {
                return Err(AppError::Restore(
                    "backup document's events field is not an array".to_string(),
                ))
            }
            None => {
                return Err(AppError::Restore(
                    "backup document has no events field".to_string(),
                ))
            }
        };

        let events: Vec<Event> = serde_json::from_value(events_value).map_err(|e| {
            AppError::Restore(format!("backup document holds malformed events: {}", e))
        })?;

        if !self.calendar.save_events(&events) {
            return Err(AppError::Backup(
                "failed to persist imported events".to_string(),
            ));
        }

        tracing::info!("Imported {} events from backup", events.len());

        Ok(events.len())
    }

    /// Read a backup document from disk and import it
    pub fn import_from_file(&self, path: &Path) -> Result<usize> {
        tracing::info!("Importing backup from {:?}", path);

        let raw = fs::read_to_string(path)?;
        self.import_document(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventKind, NewEvent};
    use crate::storage::MemoryStore;
    use chrono::{Local, TimeZone};
    use tempfile::TempDir;

    fn create_test_services() -> (CalendarService<MemoryStore>, BackupService<MemoryStore>) {
        let calendar = CalendarService::new(MemoryStore::new());
        let backup = BackupService::new(calendar.clone());
        (calendar, backup)
    }

    fn add_event(calendar: &CalendarService<MemoryStore>, title: &str) -> Event {
        calendar
            .add_event(NewEvent {
                title: title.to_string(),
                start: Local.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
                end: Local.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
                kind: EventKind::Work,
            })
            .unwrap()
    }

    #[test]
    fn test_export_document_snapshots_events() {
        let (calendar, backup) = create_test_services();

        add_event(&calendar, "A");
        add_event(&calendar, "B");

        let document = backup.export_document();

        assert_eq!(document.events.len(), 2);
    }

    #[test]
    fn test_export_document_wire_shape() {
        let (calendar, backup) = create_test_services();
        add_event(&calendar, "A");

        let value = serde_json::to_value(backup.export_document()).unwrap();

        assert!(value["events"].is_array());
        assert!(value["exportDate"].is_string());
    }

    #[test]
    fn test_import_replaces_prior_collection() {
        let (calendar, backup) = create_test_services();

        add_event(&calendar, "Old");

        let incoming = BackupDocument {
            events: (0..5)
                .map(|i| Event {
                    id: format!("import-{}", i),
                    title: format!("Imported {}", i),
                    start: Local.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap(),
                    end: Local.with_ymd_and_hms(2024, 4, 1, 10, 0, 0).unwrap(),
                    kind: EventKind::Personal,
                })
                .collect(),
            export_date: Utc::now(),
        };
        let raw = serde_json::to_string(&incoming).unwrap();

        let count = backup.import_document(&raw).unwrap();

        assert_eq!(count, 5);
        let events = calendar.get_events();
        assert_eq!(events.len(), 5);
        assert!(events.iter().all(|e| e.id.starts_with("import-")));
    }

    #[test]
    fn test_import_rejects_missing_events_field() {
        let (calendar, backup) = create_test_services();
        let kept = add_event(&calendar, "Keep");

        let result = backup.import_document(r#"{"exportDate": "2024-03-01T00:00:00Z"}"#);

        let err = result.unwrap_err();
        assert!(err.to_string().contains("events"));
        // Existing collection untouched on rejection
        assert_eq!(calendar.get_events(), vec![kept]);
    }

    #[test]
    fn test_import_rejects_non_array_events_field() {
        let (_, backup) = create_test_services();

        let result = backup.import_document(r#"{"events": "not an array"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_import_rejects_invalid_json() {
        let (calendar, backup) = create_test_services();
        add_event(&calendar, "Keep");

        let result = backup.import_document("{not json");

        assert!(result.is_err());
        assert_eq!(calendar.get_events().len(), 1);
    }

    #[test]
    fn test_export_and_import_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let (calendar, backup) = create_test_services();

        let a = add_event(&calendar, "A");
        let b = add_event(&calendar, "B");

        let path = backup.export_to_file(temp_dir.path()).unwrap();

        let filename = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(filename.starts_with("calendar-backup-"));
        assert!(filename.ends_with(".json"));

        // Wipe and restore
        calendar.clear_all_data();
        assert!(calendar.get_events().is_empty());

        let count = backup.import_from_file(&path).unwrap();

        assert_eq!(count, 2);
        assert_eq!(calendar.get_events(), vec![a, b]);
    }
}
