//! Theme preference resolution and persistence.
//!
//! The preference store is a process-wide key-value mechanism that outlives a
//! single session: a JSON file in the user config directory on native
//! platforms, `localStorage` on the web. [`ThemePreferences`] layers the
//! resolution rules on top of an injected [`PreferenceStore`] handle so the
//! logic is testable against an in-memory fake.
//!
//! Storage failures are never surfaced to the user. A store that cannot be
//! read or written behaves as if no preference existed, and the session falls
//! back to the ambient color-scheme signal.

use std::collections::HashMap;

use crate::theme::Theme;

/// Key under which the active theme is persisted.
pub const THEME_KEY: &str = "portfolio-theme";

/// Errors that can occur in a preference store backend.
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    /// JSON parsing error
    #[error("Failed to parse preference data: {0}")]
    Parse(#[from] serde_json::Error),

    /// I/O error when reading/writing the preference file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Storage error (localStorage in WASM)
    #[error("Storage error: {0}")]
    Storage(String),
}

/// A persistent string key-value store.
///
/// Implementations are free to fail; callers that must not surface errors
/// (like [`ThemePreferences`]) log and degrade instead.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Write `value` under `key`, overwriting any prior value.
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

// ============================================================================
// In-memory store
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

/// An in-memory preference store.
///
/// Clones share the same backing map, so a clone kept aside observes writes
/// made through the original handle. That makes it a drop-in fake for tests
/// that simulate an application restart against the same store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================================================
// File-backed store (native)
// ============================================================================

/// Get the application's config directory.
/// Returns None if no config directory can be determined.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn config_dir() -> Option<std::path::PathBuf> {
    // Try to use XDG config directory, fall back to home directory
    if let Some(config_dir) = dirs::config_dir() {
        Some(config_dir.join("folio"))
    } else if let Some(home_dir) = dirs::home_dir() {
        Some(home_dir.join(".config").join("folio"))
    } else {
        None
    }
}

/// A preference store backed by a single JSON object file.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    /// Create a store backed by the given file path.
    pub fn new(path: std::path::PathBuf) -> Self {
        Self { path }
    }

    /// Get the default preference file path.
    /// Returns None if no config directory can be determined.
    pub fn default_path() -> Option<std::path::PathBuf> {
        config_dir().map(|dir| dir.join("preferences.json"))
    }

    /// Read the whole key-value map. A missing file is an empty map.
    fn read_map(&self) -> Result<HashMap<String, String>, PreferenceError> {
        if !self.path.exists() {
            log::debug!("No preference file found at {:?}", self.path);
            return Ok(HashMap::new());
        }
        let json = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let mut map = self.read_map()?;
        Ok(map.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());

        // Create parent directories if needed
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&map)?;
        std::fs::write(&self.path, json)?;
        log::debug!("Saved preference {} to {:?}", key, self.path);
        Ok(())
    }
}

// ============================================================================
// localStorage store (WASM)
// ============================================================================

/// A preference store backed by the browser's `localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, PreferenceError> {
    let window = web_sys::window()
        .ok_or_else(|| PreferenceError::Storage("No window object available".to_string()))?;

    window
        .local_storage()
        .map_err(|e| PreferenceError::Storage(format!("localStorage access error: {:?}", e)))?
        .ok_or_else(|| PreferenceError::Storage("localStorage not available".to_string()))
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| PreferenceError::Storage(format!("Failed to read from localStorage: {:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| PreferenceError::Storage(format!("Failed to save to localStorage: {:?}", e)))
    }
}

// ============================================================================
// Theme preference resolution
// ============================================================================

/// Resolves and persists the active theme across sessions.
///
/// The ambient color-scheme signal is captured once at construction and never
/// re-read; live OS theme changes are deliberately not tracked.
pub struct ThemePreferences {
    store: Box<dyn PreferenceStore>,
    ambient_dark: bool,
}

impl ThemePreferences {
    /// Create a resolver over an injected store handle.
    ///
    /// `ambient_dark` is the host environment's color-scheme hint, read once
    /// at startup (see [`ambient_prefers_dark`]).
    pub fn new(store: Box<dyn PreferenceStore>, ambient_dark: bool) -> Self {
        Self {
            store,
            ambient_dark,
        }
    }

    /// Resolve the initial theme for this session.
    ///
    /// A stored preference wins. An absent, invalid, or unreadable preference
    /// falls back to the ambient signal: dark if the host prefers dark, light
    /// otherwise. This never fails.
    pub fn resolve_initial(&self) -> Theme {
        match self.store.get(THEME_KEY) {
            Ok(Some(value)) => {
                if let Some(theme) = Theme::parse(&value) {
                    log::debug!("Resolved stored theme preference: {}", value);
                    return theme;
                }
                log::warn!("Ignoring invalid stored theme preference: {:?}", value);
            }
            Ok(None) => {
                log::debug!("No stored theme preference");
            }
            Err(e) => {
                log::warn!("Failed to read theme preference: {}", e);
            }
        }

        if self.ambient_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Persist the given theme, overwriting any prior value.
    ///
    /// Storage failures are logged and swallowed; the session keeps its
    /// active theme and the next session falls back to the ambient signal.
    pub fn persist(&self, theme: Theme) {
        if let Err(e) = self.store.set(THEME_KEY, theme.as_str()) {
            log::warn!("Failed to persist theme preference: {}", e);
        }
    }
}

// ============================================================================
// Ambient color-scheme signal
// ============================================================================

/// Probe the host environment's color-scheme hint.
///
/// Reads the `COLORFGBG` convention some terminals export. Meant to be read
/// once at startup and passed into [`ThemePreferences::new`].
#[cfg(not(target_arch = "wasm32"))]
pub fn ambient_prefers_dark() -> bool {
    colorfgbg_prefers_dark(std::env::var("COLORFGBG").ok().as_deref())
}

/// Probe the host environment's color-scheme hint.
///
/// Evaluates the `prefers-color-scheme` media query once; the result is not
/// subscribed to for live changes.
#[cfg(target_arch = "wasm32")]
pub fn ambient_prefers_dark() -> bool {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return false,
    };

    match window.match_media("(prefers-color-scheme: dark)") {
        Ok(Some(query)) => query.matches(),
        _ => false,
    }
}

/// Interpret a `COLORFGBG` value ("<fg>;<bg>" with ANSI palette indices).
/// Background indices 0-6 and 8 indicate a dark terminal.
#[cfg(not(target_arch = "wasm32"))]
fn colorfgbg_prefers_dark(value: Option<&str>) -> bool {
    match value
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok())
    {
        Some(bg) => bg <= 6 || bg == 8,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A store whose medium is unavailable; every operation fails.
    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, PreferenceError> {
            Err(PreferenceError::Storage("store offline".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
            Err(PreferenceError::Storage("store offline".to_string()))
        }
    }

    fn prefs_with(store: MemoryStore, ambient_dark: bool) -> ThemePreferences {
        ThemePreferences::new(Box::new(store), ambient_dark)
    }

    #[test]
    fn test_empty_store_falls_back_to_ambient_signal() {
        let light = prefs_with(MemoryStore::new(), false);
        assert_eq!(light.resolve_initial(), Theme::Light);

        let dark = prefs_with(MemoryStore::new(), true);
        assert_eq!(dark.resolve_initial(), Theme::Dark);
    }

    #[test]
    fn test_stored_preference_wins_over_ambient_signal() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "light").unwrap();

        // Ambient says dark, but the stored value takes precedence.
        let prefs = prefs_with(store, true);
        assert_eq!(prefs.resolve_initial(), Theme::Light);
    }

    #[test]
    fn test_invalid_stored_value_is_treated_as_absent() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "sepia").unwrap();

        let prefs = prefs_with(store.clone(), true);
        assert_eq!(prefs.resolve_initial(), Theme::Dark);

        let prefs = prefs_with(store, false);
        assert_eq!(prefs.resolve_initial(), Theme::Light);
    }

    #[test]
    fn test_persist_round_trips_across_sessions() {
        let store = MemoryStore::new();

        let first_session = prefs_with(store.clone(), false);
        first_session.persist(Theme::Dark);

        // Fresh resolver over the same store: the write survives.
        let second_session = prefs_with(store.clone(), false);
        assert_eq!(second_session.resolve_initial(), Theme::Dark);
        assert_eq!(
            store.get(THEME_KEY).unwrap().as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn test_unavailable_store_behaves_as_absent() {
        let prefs = ThemePreferences::new(Box::new(FailingStore), true);
        assert_eq!(prefs.resolve_initial(), Theme::Dark);

        // Persisting into a failing store must not panic or surface an error.
        prefs.persist(Theme::Light);
        assert_eq!(prefs.resolve_initial(), Theme::Dark);
    }

    #[test]
    fn test_memory_store_overwrites_prior_value() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "light").unwrap();
        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_file_store_reads_missing_file_as_empty() {
        let path = std::env::temp_dir().join(format!(
            "folio-prefs-missing-{}.json",
            std::process::id()
        ));
        let store = FileStore::new(path);
        assert_eq!(store.get(THEME_KEY).unwrap(), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_file_store_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "folio-prefs-roundtrip-{}.json",
            std::process::id()
        ));
        let store = FileStore::new(path.clone());

        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

        // A second handle over the same path sees the write.
        let reopened = FileStore::new(path.clone());
        assert_eq!(reopened.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

        std::fs::remove_file(path).unwrap();
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_colorfgbg_parsing() {
        assert!(colorfgbg_prefers_dark(Some("15;0")));
        assert!(colorfgbg_prefers_dark(Some("12;8")));
        assert!(!colorfgbg_prefers_dark(Some("0;15")));
        assert!(!colorfgbg_prefers_dark(Some("0;7")));
        assert!(!colorfgbg_prefers_dark(Some("garbage")));
        assert!(!colorfgbg_prefers_dark(None));
    }
}
