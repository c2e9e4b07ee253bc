use std::collections::BTreeMap;
use std::fmt;
use std::sync::Mutex;

use async_trait::async_trait;
use sqlx::PgPool;

use super::queries;
use super::types::Talk;

/// Why a store operation failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NotFound,
    Storage(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound => write!(f, "Record not found"),
            StoreError::Storage(e) => write!(f, "Storage error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Storage(other.to_string()),
        }
    }
}

/// Durable talk storage. Ids are assigned by the store.
#[async_trait]
pub trait TalkStore: Send + Sync {
    /// Persist a validated talk and return its new id. Either the whole
    /// talk is stored or nothing is.
    async fn insert(&self, talk: &Talk) -> Result<i64, StoreError>;

    /// Fetch a stored talk, including its id.
    async fn get_by_id(&self, id: i64) -> Result<Talk, StoreError>;
}

/// PostgreSQL-backed store.
#[derive(Clone)]
pub struct PgTalkStore {
    pool: PgPool,
}

impl PgTalkStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TalkStore for PgTalkStore {
    async fn insert(&self, talk: &Talk) -> Result<i64, StoreError> {
        Ok(queries::insert(&self.pool, talk).await?)
    }

    async fn get_by_id(&self, id: i64) -> Result<Talk, StoreError> {
        queries::find_by_id(&self.pool, id)
            .await?
            .ok_or(StoreError::NotFound)
    }
}

/// Process-local store; contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryTalkStore {
    inner: Mutex<MemoryTalks>,
}

#[derive(Debug, Default)]
struct MemoryTalks {
    last_id: i64,
    talks: BTreeMap<i64, Talk>,
}

impl MemoryTalkStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|m| m.talks.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl TalkStore for MemoryTalkStore {
    async fn insert(&self, talk: &Talk) -> Result<i64, StoreError> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|e| StoreError::Storage(format!("Memory store poisoned: {e}")))?;
        inner.last_id += 1;
        let id = inner.last_id;
        let stored = Talk { id, ..talk.clone() };
        inner.talks.insert(id, stored);
        Ok(id)
    }

    async fn get_by_id(&self, id: i64) -> Result<Talk, StoreError> {
        let inner = self
            .inner
            .lock()
            .map_err(|e| StoreError::Storage(format!("Memory store poisoned: {e}")))?;
        inner.talks.get(&id).cloned().ok_or(StoreError::NotFound)
    }
}
