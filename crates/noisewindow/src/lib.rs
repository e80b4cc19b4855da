//! NoiseWindow: availability-status service for housemates and shared
//! spaces.
//!
//! The engine core is pure: `schedule::compute_status` derives the four-way
//! status from an injected clock time and the stored schedule, and
//! `store::SettingsStore` is the single source of truth for everything
//! persisted. The `server` module exposes both over a small HTTP API for the
//! single-page UI.

pub mod config;
pub mod locale;
pub mod schedule;
pub mod server;
pub mod store;
pub mod types;
