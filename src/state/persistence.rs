use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::AppState;
use crate::config::{FONT_SETTINGS_KEY, RESUME_DATA_KEY};

/// Errors that can occur while reading or writing persisted state
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Stored value under `{key}` is not valid: {source}")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize `{key}`: {source}")]
    Serialize {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Keeps `resumeData` and `fontSettings` in storage in step with the app state.
///
/// Template, background and view mode are deliberately not stored; they
/// come back as defaults on every launch.
#[derive(Debug, Clone)]
pub struct PersistenceBridge {
    /// Last serialization of each persisted slice, as it is (or would be) in storage.
    resume_data: String,
    font_settings: String,
}

impl PersistenceBridge {
    /// Build the initial state from storage.
    ///
    /// A missing or empty key (or no storage at all) leaves that slice at its
    /// default and writes nothing. A key holding anything but a valid serialization
    /// is an error; there is no fallback.
    pub fn hydrate(
        storage: Option<&dyn eframe::Storage>,
    ) -> PersistenceResult<(AppState, Self)> {
        let mut state = AppState::default();

        if let Some(storage) = storage {
            if let Some(resume_data) = load(storage, RESUME_DATA_KEY)? {
                log::info!("Restored `{RESUME_DATA_KEY}` from storage");
                state.resume_data = resume_data;
            }
            if let Some(font_settings) = load(storage, FONT_SETTINGS_KEY)? {
                log::info!("Restored `{FONT_SETTINGS_KEY}` from storage");
                state.font_settings = font_settings;
            }
        }

        let bridge = Self {
            resume_data: serialize(RESUME_DATA_KEY, &state.resume_data)?,
            font_settings: serialize(FONT_SETTINGS_KEY, &state.font_settings)?,
        };
        Ok((state, bridge))
    }

    /// Write every persisted slice whose value changed since the last write.
    ///
    /// Each key is written whole and the storage flushed before returning.
    /// Returns whether anything was written.
    pub fn sync(
        &mut self,
        storage: &mut dyn eframe::Storage,
        state: &AppState,
    ) -> PersistenceResult<bool> {
        let wrote_resume =
            write_if_changed(storage, RESUME_DATA_KEY, &state.resume_data, &mut self.resume_data)?;
        let wrote_font = write_if_changed(
            storage,
            FONT_SETTINGS_KEY,
            &state.font_settings,
            &mut self.font_settings,
        )?;

        let wrote = wrote_resume || wrote_font;
        if wrote {
            storage.flush();
        }
        Ok(wrote)
    }
}

/// An empty value counts as absent.
fn load<T: DeserializeOwned>(
    storage: &dyn eframe::Storage,
    key: &'static str,
) -> PersistenceResult<Option<T>> {
    storage
        .get_string(key)
        .filter(|json| !json.is_empty())
        .map(|json| {
            serde_json::from_str(&json).map_err(|source| PersistenceError::Corrupt { key, source })
        })
        .transpose()
}

fn serialize<T: Serialize>(key: &'static str, value: &T) -> PersistenceResult<String> {
    serde_json::to_string(value).map_err(|source| PersistenceError::Serialize { key, source })
}

fn write_if_changed<T: Serialize>(
    storage: &mut dyn eframe::Storage,
    key: &'static str,
    value: &T,
    last_written: &mut String,
) -> PersistenceResult<bool> {
    let json = serialize(key, value)?;
    if json == *last_written {
        return Ok(false);
    }
    log::info!("Writing `{key}` ({} bytes)", json.len());
    storage.set_string(key, json.clone());
    *last_written = json;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::resume::{FontFamily, FontSettings, FontSize, ResumeData};

    #[derive(Default)]
    struct MapStorage {
        values: HashMap<String, String>,
        flushes: usize,
    }

    impl eframe::Storage for MapStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.values.insert(key.to_owned(), value);
        }

        fn flush(&mut self) {
            self.flushes += 1;
        }
    }

    #[test]
    fn test_empty_storage_gives_defaults_without_writes() {
        let mut storage = MapStorage::default();
        let (state, mut bridge) = PersistenceBridge::hydrate(Some(&storage)).unwrap();
        assert_eq!(state, AppState::default());

        assert!(!bridge.sync(&mut storage, &state).unwrap());
        assert!(storage.values.is_empty());
        assert_eq!(storage.flushes, 0);
    }

    #[test]
    fn test_no_storage_gives_defaults() {
        let (state, _) = PersistenceBridge::hydrate(None).unwrap();
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn test_change_is_written_through() {
        let mut storage = MapStorage::default();
        let (mut state, mut bridge) = PersistenceBridge::hydrate(Some(&storage)).unwrap();

        state.set_font_settings(FontSettings { family: FontFamily::Lato, size: FontSize::Large });
        assert!(bridge.sync(&mut storage, &state).unwrap());

        assert_eq!(
            storage.values.get(FONT_SETTINGS_KEY).map(String::as_str),
            Some(r#"{"family":"font-lato","size":"large"}"#)
        );
        assert!(!storage.values.contains_key(RESUME_DATA_KEY));
        assert_eq!(storage.flushes, 1);

        // Nothing changed since: no second write.
        assert!(!bridge.sync(&mut storage, &state).unwrap());
        assert_eq!(storage.flushes, 1);
    }

    #[test]
    fn test_corrupt_value_fails_loudly() {
        let mut storage = MapStorage::default();
        storage.values.insert(RESUME_DATA_KEY.to_owned(), "{not json".to_owned());

        let err = PersistenceBridge::hydrate(Some(&storage)).unwrap_err();
        assert!(matches!(err, PersistenceError::Corrupt { key: RESUME_DATA_KEY, .. }));
        assert!(err.to_string().contains("resumeData"));
    }

    #[test]
    fn test_empty_value_counts_as_absent() {
        let mut storage = MapStorage::default();
        storage.values.insert(RESUME_DATA_KEY.to_owned(), String::new());
        storage.values.insert(FONT_SETTINGS_KEY.to_owned(), String::new());

        let (state, mut bridge) = PersistenceBridge::hydrate(Some(&storage)).unwrap();
        assert_eq!(state, AppState::default());

        // Defaults differ from the empty stored text, so the first sync fills both keys.
        assert!(bridge.sync(&mut storage, &state).unwrap());
        assert!(!storage.values[RESUME_DATA_KEY].is_empty());
        assert!(!storage.values[FONT_SETTINGS_KEY].is_empty());
    }

    #[test]
    fn test_stored_resume_is_adopted() {
        let mut data = ResumeData::default();
        data.personal_info.full_name = "Sam Lee".into();

        let mut storage = MapStorage::default();
        storage
            .values
            .insert(RESUME_DATA_KEY.to_owned(), serde_json::to_string(&data).unwrap());

        let (state, _) = PersistenceBridge::hydrate(Some(&storage)).unwrap();
        assert_eq!(state.resume_data, data);
        assert_eq!(state.font_settings, FontSettings::default());
    }
}
