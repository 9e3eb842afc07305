//! Persistent preference flags using redb.
//!
//! Two string-encoded entries survive restarts:
//! - `theme`: `"light"` or `"dark"`
//! - `footerMinimized`: `"true"` or `"false"`
//!
//! Each entry is the single source of truth for the initial rendered state of
//! its element. Missing or unrecognised values fall back to the defaults.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};

use crate::error::PortfolioError;
use crate::types::Theme;

const PREFERENCES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");

pub const THEME_KEY: &str = "theme";
pub const FOOTER_KEY: &str = "footerMinimized";

/// Snapshot of both preference flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub theme: Theme,
    pub footer_collapsed: bool,
}

/// Key-value preference store backed by a redb file
#[derive(Clone)]
pub struct PreferenceStore {
    db: Arc<RwLock<Database>>,
}

impl PreferenceStore {
    /// Open (or create) the store at `path`, creating parent directories.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, PortfolioError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Read a raw entry.
    pub fn get(&self, key: &str) -> Result<Option<String>, PortfolioError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;
        Ok(table.get(key)?.map(|v| v.value().to_string()))
    }

    /// Write a raw entry, overwriting any previous value.
    pub fn set(&self, key: &str, value: &str) -> Result<(), PortfolioError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        tracing::debug!(key, value, "Preference saved");
        Ok(())
    }

    /// Load both flags, applying defaults for missing or garbled entries.
    pub fn load(&self) -> Result<Preferences, PortfolioError> {
        let theme = match self.get(THEME_KEY)? {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Stored theme unreadable, using default");
                Theme::default()
            }),
            None => Theme::default(),
        };
        // Only the exact string "true" collapses the footer.
        let footer_collapsed = self.get(FOOTER_KEY)?.as_deref() == Some("true");

        Ok(Preferences {
            theme,
            footer_collapsed,
        })
    }

    pub fn save_theme(&self, theme: Theme) -> Result<(), PortfolioError> {
        self.set(THEME_KEY, theme.as_str())
    }

    pub fn save_footer_collapsed(&self, collapsed: bool) -> Result<(), PortfolioError> {
        self.set(FOOTER_KEY, if collapsed { "true" } else { "false" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (PreferenceStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("prefs.redb");
        let store = PreferenceStore::new(&db_path).unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_creates_nested_directories() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested/path/prefs.redb");
        assert!(PreferenceStore::new(&db_path).is_ok());
        assert!(db_path.exists());
    }

    #[test]
    fn test_defaults_when_empty() {
        let (store, _temp) = create_test_store();
        let prefs = store.load().unwrap();
        assert_eq!(prefs.theme, Theme::Light);
        assert!(!prefs.footer_collapsed);
    }

    #[test]
    fn test_save_and_load_flags() {
        let (store, _temp) = create_test_store();

        store.save_theme(Theme::Dark).unwrap();
        store.save_footer_collapsed(true).unwrap();

        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(store.get(FOOTER_KEY).unwrap().as_deref(), Some("true"));

        let prefs = store.load().unwrap();
        assert_eq!(prefs.theme, Theme::Dark);
        assert!(prefs.footer_collapsed);
    }

    #[test]
    fn test_garbled_values_fall_back() {
        let (store, _temp) = create_test_store();

        store.set(THEME_KEY, "neon").unwrap();
        store.set(FOOTER_KEY, "yes").unwrap();

        assert_eq!(store.load().unwrap(), Preferences::default());
    }

    #[test]
    fn test_preferences_persist_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("prefs.redb");

        {
            let store = PreferenceStore::new(&db_path).unwrap();
            store.save_theme(Theme::Dark).unwrap();
        }

        {
            let store = PreferenceStore::new(&db_path).unwrap();
            assert_eq!(store.load().unwrap().theme, Theme::Dark);
        }
    }

    #[test]
    fn test_toggle_overwrites() {
        let (store, _temp) = create_test_store();

        store.save_footer_collapsed(true).unwrap();
        store.save_footer_collapsed(false).unwrap();
        assert_eq!(store.get(FOOTER_KEY).unwrap().as_deref(), Some("false"));
    }
}
