//! Application configuration constants
//!
//! Central location for the storage key layout, validation boundaries,
//! and external-service settings used throughout the crate.

// ===== Storage Key Layout =====
//
// These must stay bit-for-bit stable: they are the on-disk contract with
// data saved by earlier versions of the application.

/// Key holding the full JSON array of calendar events
pub const EVENTS_KEY: &str = "calendar-events";

/// Key prefix for per-date journal markup (`daily-content-<YYYY-MM-DD>`)
pub const DAILY_CONTENT_PREFIX: &str = "daily-content-";

/// Key prefix for per-date background image references
pub const DAILY_BACKGROUND_PREFIX: &str = "daily-background-";

/// Key prefix for per-date saved-image collections
pub const DAILY_IMAGES_PREFIX: &str = "daily-images-";

/// Date format used in per-date storage keys and backup filenames
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

// ===== Backup =====

/// Filename prefix for exported backup documents
/// (full name: `calendar-backup-<YYYY-MM-DD>.json`)
pub const BACKUP_FILE_PREFIX: &str = "calendar-backup-";

// ===== Validation Boundaries =====

/// Maximum length for an event title.
/// Prevents excessively long values from being stored.
pub const MAX_TITLE_LENGTH: usize = 200;

// ===== Image Search =====

/// Base URL of the Unsplash REST API
pub const UNSPLASH_API_BASE: &str = "https://api.unsplash.com";

/// Default number of results per search page
pub const DEFAULT_SEARCH_PER_PAGE: u32 = 20;

/// Default number of photos returned by a random-photos request
pub const DEFAULT_RANDOM_COUNT: u32 = 20;
