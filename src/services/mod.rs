//! Service layer
//!
//! - `calendar`: the persistence service owning all calendar state
//! - `backup`: portable export/import of the event collection
//! - `unsplash`: external image search, consumed by the UI layer

pub mod backup;
pub mod calendar;
pub mod unsplash;

pub use backup::{BackupDocument, BackupService};
pub use calendar::CalendarService;
pub use unsplash::{Photo, UnsplashClient};
