//! Daybook storage engine
//!
//! Local-first persistence for a calendar and daily-journal application:
//! events, per-date journal markup, background images, and saved-image
//! collections, all kept in a synchronous string key-value store.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
