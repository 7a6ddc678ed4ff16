//! Calendar service
//!
//! Single point of truth for all calendar state: the event collection plus
//! the per-date journal content, background image, and saved-image
//! collections. Every other component goes through this service rather
//! than touching the key-value store directly.
//!
//! Failure semantics: reads never fail outward — a corrupt or unreadable
//! value is logged and treated as "nothing saved yet." Writes catch store
//! errors, log them, and report failure through the return value; they
//! never panic or propagate.

use crate::config::{
    DAILY_BACKGROUND_PREFIX, DAILY_CONTENT_PREFIX, DAILY_IMAGES_PREFIX, DATE_KEY_FORMAT,
    EVENTS_KEY,
};
use crate::models::{Event, EventPatch, ImageRecord, NewEvent, NewImage};
use crate::storage::KeyValueStore;
use chrono::{Datelike, NaiveDate, Utc};
use uuid::Uuid;

/// Service owning all read/write access to calendar state
#[derive(Clone)]
pub struct CalendarService<S> {
    store: S,
}

impl<S: KeyValueStore> CalendarService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    // ===== Events =====

    /// All stored events. Empty if nothing is stored or the stored value
    /// is corrupt; corruption is logged, never surfaced.
    pub fn get_events(&self) -> Vec<Event> {
        let raw = match self.store.get_item(EVENTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::error!("Failed to read events: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(events) => events,
            Err(e) => {
                tracing::warn!("Stored events are corrupt, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Replace the entire stored collection in a single write
    pub fn save_events(&self, events: &[Event]) -> bool {
        let raw = match serde_json::to_string(events) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!("Failed to serialize events: {}", e);
                return false;
            }
        };

        match self.store.set_item(EVENTS_KEY, &raw) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Failed to save events: {}", e);
                false
            }
        }
    }

    /// Assign a fresh id, append, persist. Returns the stored event, or
    /// `None` if the persist failed.
    pub fn add_event(&self, new: NewEvent) -> Option<Event> {
        let event = Event {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            start: new.start,
            end: new.end,
            kind: new.kind,
        };

        let mut events = self.get_events();
        events.push(event.clone());

        if !self.save_events(&events) {
            return None;
        }

        tracing::info!("Event created: {}", event.id);
        Some(event)
    }

    /// Shallow-merge a patch into the matching event and persist.
    /// `None` when no event has that id or the persist failed.
    pub fn update_event(&self, id: &str, patch: EventPatch) -> Option<Event> {
        let mut events = self.get_events();

        let event = events.iter_mut().find(|e| e.id == id)?;
        patch.apply(event);
        let updated = event.clone();

        if !self.save_events(&events) {
            return None;
        }

        tracing::debug!("Event updated: {}", id);
        Some(updated)
    }

    /// Remove the matching event (no-op if absent) and persist.
    /// Returns the resulting full collection.
    pub fn delete_event(&self, id: &str) -> Vec<Event> {
        let mut events = self.get_events();
        let before = events.len();
        events.retain(|e| e.id != id);

        if events.len() < before {
            self.save_events(&events);
            tracing::info!("Event deleted: {}", id);
        }

        events
    }

    /// Events whose start falls on the given local calendar day
    pub fn get_events_by_date(&self, date: NaiveDate) -> Vec<Event> {
        self.get_events()
            .into_iter()
            .filter(|e| e.start.date_naive() == date)
            .collect()
    }

    /// Events whose start falls in the given local calendar month
    pub fn get_events_by_month(&self, date: NaiveDate) -> Vec<Event> {
        self.get_events()
            .into_iter()
            .filter(|e| e.start.year() == date.year() && e.start.month() == date.month())
            .collect()
    }

    // ===== Daily content =====

    /// Journal markup for the date, empty string if none. The markup is
    /// opaque at this boundary; any structure is the UI layer's concern.
    pub fn get_daily_content(&self, date: NaiveDate) -> String {
        self.read_raw(&date_key(DAILY_CONTENT_PREFIX, date))
    }

    /// Wholesale overwrite of the date's journal markup
    pub fn save_daily_content(&self, date: NaiveDate, content: &str) -> bool {
        self.write_raw(&date_key(DAILY_CONTENT_PREFIX, date), content)
    }

    // ===== Daily background =====

    /// Background image reference for the date, empty string if none
    pub fn get_daily_background(&self, date: NaiveDate) -> String {
        self.read_raw(&date_key(DAILY_BACKGROUND_PREFIX, date))
    }

    /// Wholesale overwrite of the date's background image reference
    pub fn save_daily_background(&self, date: NaiveDate, image: &str) -> bool {
        self.write_raw(&date_key(DAILY_BACKGROUND_PREFIX, date), image)
    }

    // ===== Daily images =====

    /// Saved images for the date, empty if none or corrupt
    pub fn get_daily_images(&self, date: NaiveDate) -> Vec<ImageRecord> {
        let key = date_key(DAILY_IMAGES_PREFIX, date);

        let raw = match self.store.get_item(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::error!("Failed to read daily images for {}: {}", date, e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(images) => images,
            Err(e) => {
                tracing::warn!("Daily images for {} are corrupt, treating as empty: {}", date, e);
                Vec::new()
            }
        }
    }

    /// Assign a fresh id and save timestamp, append, persist. Returns the
    /// new record, or `None` if the persist failed.
    pub fn save_daily_image(&self, date: NaiveDate, image: NewImage) -> Option<ImageRecord> {
        let record = ImageRecord {
            id: Uuid::new_v4().to_string(),
            url: image.url,
            description: image.description,
            author: image.author,
            saved_at: Utc::now(),
        };

        let mut images = self.get_daily_images(date);
        images.push(record.clone());

        if !self.save_daily_images(date, &images) {
            return None;
        }

        tracing::info!("Image saved for {}: {}", date, record.id);
        Some(record)
    }

    /// Remove an image by id (no-op if absent) and persist. Returns the
    /// resulting collection.
    pub fn delete_daily_image(&self, date: NaiveDate, id: &str) -> Vec<ImageRecord> {
        let mut images = self.get_daily_images(date);
        let before = images.len();
        images.retain(|i| i.id != id);

        if images.len() < before {
            self.save_daily_images(date, &images);
            tracing::info!("Image deleted for {}: {}", date, id);
        }

        images
    }

    /// Whether the date has any saved images. Reads only that date's key,
    /// never the whole store; used for calendar-grid decoration.
    pub fn has_daily_images(&self, date: NaiveDate) -> bool {
        !self.get_daily_images(date).is_empty()
    }

    // ===== Maintenance =====

    /// Remove every key this service owns (events plus all per-date
    /// values), leaving unrelated keys in the shared store untouched.
    pub fn clear_all_data(&self) -> bool {
        let keys = match self.store.keys() {
            Ok(keys) => keys,
            Err(e) => {
                tracing::error!("Failed to enumerate store keys: {}", e);
                return false;
            }
        };

        let mut ok = true;
        for key in keys {
            if !is_owned_key(&key) {
                continue;
            }
            if let Err(e) = self.store.remove_item(&key) {
                tracing::error!("Failed to remove key {}: {}", key, e);
                ok = false;
            }
        }

        if ok {
            tracing::info!("All calendar data cleared");
        }
        ok
    }

    // ===== Internals =====

    fn read_raw(&self, key: &str) -> String {
        match self.store.get_item(key) {
            Ok(Some(value)) => value,
            Ok(None) => String::new(),
            Err(e) => {
                tracing::error!("Failed to read key {}: {}", key, e);
                String::new()
            }
        }
    }

    fn write_raw(&self, key: &str, value: &str) -> bool {
        match self.store.set_item(key, value) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Failed to write key {}: {}", key, e);
                false
            }
        }
    }

    fn save_daily_images(&self, date: NaiveDate, images: &[ImageRecord]) -> bool {
        let key = date_key(DAILY_IMAGES_PREFIX, date);

        let raw = match serde_json::to_string(images) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!("Failed to serialize daily images for {}: {}", date, e);
                return false;
            }
        };

        self.write_raw(&key, &raw)
    }
}

fn date_key(prefix: &str, date: NaiveDate) -> String {
    format!("{}{}", prefix, date.format(DATE_KEY_FORMAT))
}

fn is_owned_key(key: &str) -> bool {
    key == EVENTS_KEY
        || key.starts_with(DAILY_CONTENT_PREFIX)
        || key.starts_with(DAILY_BACKGROUND_PREFIX)
        || key.starts_with(DAILY_IMAGES_PREFIX)
}
