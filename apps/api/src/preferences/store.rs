//! Key-value storage for the preferences record.
//!
//! One key per profile holds the JSON-serialized record. `RedisPreferenceStore`
//! is used when `REDIS_URL` is configured; otherwise `MemoryPreferenceStore`.

use std::collections::HashMap;

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::preferences::models::Preferences;

pub const PREFERENCES_KEY: &str = "userPreferences";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Raw string storage, mirroring a browser's local storage.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Result of reading a profile's record.
#[derive(Debug)]
pub enum StoredPreferences {
    Found(Preferences),
    Missing,
    /// A value exists under the key but does not decode as a record.
    Unreadable(serde_json::Error),
}

pub fn preferences_key(profile_id: Uuid) -> String {
    format!("{PREFERENCES_KEY}:{profile_id}")
}

pub async fn save_preferences(
    store: &dyn PreferenceStore,
    profile_id: Uuid,
    preferences: &Preferences,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(preferences)?;
    store.set(&preferences_key(profile_id), &raw).await?;
    debug!("Stored preferences for profile {profile_id}");
    Ok(())
}

pub async fn load_preferences(
    store: &dyn PreferenceStore,
    profile_id: Uuid,
) -> Result<StoredPreferences, StoreError> {
    let Some(raw) = store.get(&preferences_key(profile_id)).await? else {
        return Ok(StoredPreferences::Missing);
    };

    match serde_json::from_str::<Preferences>(&raw) {
        Ok(preferences) => Ok(StoredPreferences::Found(preferences)),
        Err(e) => {
            warn!("Unreadable preferences record for profile {profile_id}: {e}");
            Ok(StoredPreferences::Unreadable(e))
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Redis
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct RedisPreferenceStore {
    conn: ConnectionManager,
}

impl RedisPreferenceStore {
    pub async fn connect(redis_url: &str) -> Result<Self, StoreError> {
        let client = redis::Client::open(redis_url)?;
        let conn = ConnectionManager::new(client).await?;
        info!("Redis preference store connected");
        Ok(Self { conn })
    }
}

#[async_trait]
impl PreferenceStore for RedisPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key, value).await?;
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryPreferenceStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::models::{ExperienceLevel, JobType};

    fn prefs(interests: &str) -> Preferences {
        Preferences {
            interests: interests.to_string(),
            skills: "Go".to_string(),
            selected_interests: vec![],
            selected_skills: vec!["Go".to_string()],
            job_type: JobType::PartTime,
            experience: ExperienceLevel::Senior,
            locations: vec!["canada".to_string()],
        }
    }

    #[test]
    fn test_key_is_namespaced_per_profile() {
        let id = Uuid::nil();
        assert_eq!(
            preferences_key(id),
            "userPreferences:00000000-0000-0000-0000-000000000000"
        );
    }

    #[tokio::test]
    async fn test_missing_record() {
        let store = MemoryPreferenceStore::new();
        let loaded = load_preferences(&store, Uuid::new_v4()).await.unwrap();
        assert!(matches!(loaded, StoredPreferences::Missing));
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let store = MemoryPreferenceStore::new();
        let id = Uuid::new_v4();
        save_preferences(&store, id, &prefs("backend"))
            .await
            .unwrap();

        match load_preferences(&store, id).await.unwrap() {
            StoredPreferences::Found(p) => assert_eq!(p, prefs("backend")),
            other => panic!("expected stored record, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_second_submit_overwrites_record() {
        let store = MemoryPreferenceStore::new();
        let id = Uuid::new_v4();
        save_preferences(&store, id, &prefs("backend"))
            .await
            .unwrap();
        save_preferences(&store, id, &prefs("design"))
            .await
            .unwrap();

        let StoredPreferences::Found(p) = load_preferences(&store, id).await.unwrap() else {
            panic!("record should exist");
        };
        assert_eq!(p.interests, "design");
    }

    #[tokio::test]
    async fn test_garbage_value_is_unreadable() {
        let store = MemoryPreferenceStore::new();
        let id = Uuid::new_v4();
        store.set(&preferences_key(id), "{not json").await.unwrap();

        let loaded = load_preferences(&store, id).await.unwrap();
        assert!(matches!(loaded, StoredPreferences::Unreadable(_)));
    }
}
