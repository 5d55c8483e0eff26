//! Carga y guardado de los dos registros sobre un almacén clave-valor.
//!
//! Cargar nunca falla: si falta el registro o no se puede leer se usa el valor
//! por defecto y se deja constancia en el log.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

use crate::error::StorageError;
use crate::model::{Level, UserProfile};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Un fichero `<key>.json` por registro dentro del directorio de datos.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> std::path::PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        // Escribe primero a un temporal para no dejar un JSON a medias
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// `localStorage` del navegador.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| StorageError::Unavailable("localStorage".into()))
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }
}

/// Registros JSON tipados sobre un [`KeyValueStore`].
pub struct Persistence {
    store: Box<dyn KeyValueStore>,
}

impl Persistence {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str, default: impl FnOnce() -> T) -> T {
        let text = match self.store.get(key) {
            Ok(Some(text)) if !text.trim().is_empty() => text,
            Ok(_) => {
                log::debug!("No stored record for {key}, using defaults");
                return default();
            }
            Err(e) => {
                log::warn!("Failed to read {key}: {e}");
                return default();
            }
        };
        match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) => {
                log::error!("Failed to parse {key}, falling back to defaults: {e}");
                default()
            }
        }
    }

    /// Como [`Persistence::load`], pero indica si había un registro válido.
    pub fn load_opt<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.load(key, || None)
    }

    pub fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)?;
        self.store.set(key, &json)
    }

    pub fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.store.remove(key)
    }

    pub fn load_profile(&self, key: &str) -> UserProfile {
        self.load(key, UserProfile::default)
    }

    pub fn load_levels(&self, key: &str) -> Option<Vec<Level>> {
        self.load_opt(key)
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }
}
