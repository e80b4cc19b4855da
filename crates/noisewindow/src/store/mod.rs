//! Persistent key-value settings store with change notification.
//!
//! Single source of truth for the schedule, the display name, and the
//! language choice. Each slot is read and written whole; a save either
//! persists the entire record or nothing. Subscribers registered here are
//! notified after every successful schedule save so concurrent observers
//! (status display, schedule preview) re-read and recompute.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use dashmap::DashMap;
use rusqlite::{Connection, OptionalExtension};
use tracing::{error, warn};

use crate::locale::Language;
use crate::schedule::{ScheduleError, ScheduleRecord};

const SCHEMA_SQL: &str = include_str!("../../../../sql/init_storage.sql");

/// Persisted slot for the schedule record (JSON-encoded).
pub const SCHEDULE_KEY: &str = "noisewindow-schedule";
/// Persisted slot for the viewer display name (plain string).
pub const USER_NAME_KEY: &str = "noisewindow-user-name";
/// Persisted slot for the language choice (`"en"` or `"pt-PT"`).
pub const LANGUAGE_KEY: &str = "noisewindow-language";

/// Maximum accepted display-name length, after trimming.
pub const MAX_NAME_LEN: usize = 50;

/// Handle returned by [`SettingsStore::subscribe`], used to unsubscribe.
pub type SubscriberId = u64;

type ChangeCallback = Box<dyn Fn() + Send + Sync>;

pub struct SettingsStore {
    db: Mutex<Connection>,
    subscribers: DashMap<SubscriberId, ChangeCallback>,
    next_subscriber_id: AtomicU64,
}

impl SettingsStore {
    /// Opens (or creates) the settings database and initializes the schema.
    pub fn new(db_path: &str) -> Self {
        let conn = Connection::open(db_path).expect("Failed to open settings database");
        conn.execute_batch(SCHEMA_SQL)
            .expect("Failed to initialize settings schema");

        Self {
            db: Mutex::new(conn),
            subscribers: DashMap::new(),
            next_subscriber_id: AtomicU64::new(1),
        }
    }

    /// In-memory store, used by tests.
    pub fn open_in_memory() -> Self {
        let conn = Connection::open_in_memory().expect("Failed to open in-memory database");
        conn.execute_batch(SCHEMA_SQL)
            .expect("Failed to initialize settings schema");

        Self {
            db: Mutex::new(conn),
            subscribers: DashMap::new(),
            next_subscriber_id: AtomicU64::new(1),
        }
    }

    fn get_raw(&self, key: &str) -> Result<Option<String>, ScheduleError> {
        let db = self.db.lock().expect("settings lock poisoned");
        db.query_row("SELECT value FROM settings WHERE key = ?1", [key], |row| {
            row.get(0)
        })
        .optional()
        .map_err(ScheduleError::read_failure)
    }

    fn put_raw(&self, key: &str, value: &str) -> Result<(), ScheduleError> {
        let db = self.db.lock().expect("settings lock poisoned");
        db.execute(
            "INSERT OR REPLACE INTO settings (key, value, updated_at)
             VALUES (?1, ?2, datetime('now'))",
            (key, value),
        )
        .map_err(ScheduleError::write_failure)?;
        Ok(())
    }

    /// Loads the persisted schedule record.
    ///
    /// Returns `None` when the slot is absent or the stored payload fails to
    /// parse; callers substitute built-in defaults. Parse failures are
    /// swallowed deliberately: the viewer must always get some status.
    pub fn load(&self) -> Option<ScheduleRecord> {
        let raw = match self.get_raw(SCHEDULE_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Schedule slot unreadable, using defaults: {e}");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Stored schedule is malformed, using defaults: {e}");
                None
            }
        }
    }

    /// Validates and persists a full schedule record, then notifies
    /// subscribers.
    ///
    /// Every day in the record is validated first (days marked off/tba are
    /// skipped); any failure blocks the entire write, so the stored record
    /// is never partially updated.
    pub fn save(&self, record: &ScheduleRecord) -> Result<(), ScheduleError> {
        record.validate()?;

        let payload = serde_json::to_string(record).map_err(ScheduleError::write_failure)?;
        if let Err(e) = self.put_raw(SCHEDULE_KEY, &payload) {
            error!("Schedule save failed: {e}");
            return Err(e);
        }

        self.notify_subscribers();
        Ok(())
    }

    /// Loads the persisted display name, if one has been set.
    pub fn load_user_name(&self) -> Option<String> {
        match self.get_raw(USER_NAME_KEY) {
            Ok(name) => name,
            Err(e) => {
                warn!("Name slot unreadable: {e}");
                None
            }
        }
    }

    /// Persists the display name, trimmed. Callers reject empty or oversized
    /// input before calling; the trimmed value is returned for display.
    pub fn save_user_name(&self, name: &str) -> Result<String, ScheduleError> {
        let trimmed = name.trim();
        self.put_raw(USER_NAME_KEY, trimmed)?;
        Ok(trimmed.to_string())
    }

    /// Loads the persisted language choice, defaulting to English for an
    /// absent or unrecognized value.
    pub fn load_language(&self) -> Language {
        match self.get_raw(LANGUAGE_KEY) {
            Ok(Some(value)) => Language::parse(&value).unwrap_or_default(),
            Ok(None) => Language::default(),
            Err(e) => {
                warn!("Language slot unreadable: {e}");
                Language::default()
            }
        }
    }

    pub fn save_language(&self, language: Language) -> Result<(), ScheduleError> {
        self.put_raw(LANGUAGE_KEY, language.as_str())
    }

    /// Registers a callback fired after every successful schedule save.
    pub fn subscribe(&self, callback: impl Fn() + Send + Sync + 'static) -> SubscriberId {
        let id = self.next_subscriber_id.fetch_add(1, Ordering::Relaxed);
        self.subscribers.insert(id, Box::new(callback));
        id
    }

    /// Removes a previously registered callback. Returns false if the id was
    /// not registered.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        self.subscribers.remove(&id).is_some()
    }

    fn notify_subscribers(&self) {
        for entry in self.subscribers.iter() {
            (entry.value())();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::schedule::UpcomingDay;

    fn sample_record() -> ScheduleRecord {
        let mut record = ScheduleRecord::default();
        record.last_updated = "2026-08-07T10:00:00+00:00".to_string();
        record
    }

    #[test]
    fn test_load_on_empty_store() {
        let store = SettingsStore::open_in_memory();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_load_round_trip() {
        let store = SettingsStore::open_in_memory();
        let mut record = sample_record();
        record.today.as_mut().unwrap().set_tba(true);
        record.upcoming_days[2].off = true;

        store.save(&record).expect("save should succeed");
        let loaded = store.load().expect("record should be present");
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_save_is_atomic_on_validation_failure() {
        let store = SettingsStore::open_in_memory();
        let good = sample_record();
        store.save(&good).unwrap();

        let mut bad = sample_record();
        bad.upcoming_days
            .push(UpcomingDay::working("Friday", "17:00", "09:00"));
        let err = store.save(&bad).expect_err("invalid record must be rejected");
        assert!(err.is_validation());

        // Prior record untouched
        assert_eq!(store.load().unwrap(), good);
    }

    #[test]
    fn test_corrupt_payload_is_swallowed() {
        let store = SettingsStore::open_in_memory();
        store.put_raw(SCHEDULE_KEY, "{not json").unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_user_name_is_trimmed() {
        let store = SettingsStore::open_in_memory();
        assert!(store.load_user_name().is_none());

        let saved = store.save_user_name("  Marta  ").unwrap();
        assert_eq!(saved, "Marta");
        assert_eq!(store.load_user_name().as_deref(), Some("Marta"));
    }

    #[test]
    fn test_language_defaults_to_english() {
        let store = SettingsStore::open_in_memory();
        assert_eq!(store.load_language(), Language::En);

        store.save_language(Language::PtPt).unwrap();
        assert_eq!(store.load_language(), Language::PtPt);

        store.put_raw(LANGUAGE_KEY, "klingon").unwrap();
        assert_eq!(store.load_language(), Language::En);
    }

    #[test]
    fn test_subscribers_fire_on_successful_save_only() {
        let store = SettingsStore::open_in_memory();
        let count = Arc::new(AtomicUsize::new(0));

        let seen = count.clone();
        let id = store.subscribe(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        store.save(&sample_record()).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // Failed validation must not notify
        let mut bad = sample_record();
        bad.today = Some(crate::schedule::DaySchedule::working("17:00", "09:00"));
        assert!(store.save(&bad).is_err());
        assert_eq!(count.load(Ordering::SeqCst), 1);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.save(&sample_record()).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
