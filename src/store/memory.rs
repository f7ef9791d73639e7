//! In-memory store for tests and local development.
//!
//! Mirrors the MySQL backend's observable behavior: ids are assigned
//! from an auto-increment counter starting at 1 and `fetch_all` returns
//! rows in id order. Failure injection flags let tests exercise the
//! persistence-error paths without a database.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::errors::{StoreError, StoreResult};
use super::school_store::SchoolStore;
use crate::schools::{NewSchool, School};

#[derive(Debug, Default)]
struct Inner {
    rows: Vec<School>,
    next_id: u64,
}

/// In-memory school store.
#[derive(Debug, Default)]
pub struct MemorySchoolStore {
    inner: Mutex<Inner>,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
}

impl MemorySchoolStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent `insert` calls fail until cleared.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Makes subsequent `fetch_all` calls fail until cleared.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Number of persisted rows.
    pub fn len(&self) -> usize {
        self.inner.lock().expect("store lock poisoned").rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SchoolStore for MemorySchoolStore {
    async fn insert(&self, school: &NewSchool) -> StoreResult<u64> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::backend("injected write failure"));
        }

        let mut inner = self.inner.lock().expect("store lock poisoned");
        inner.next_id += 1;
        let id = inner.next_id;
        inner.rows.push(School {
            id,
            name: school.name.clone(),
            address: school.address.clone(),
            latitude: school.latitude,
            longitude: school.longitude,
        });
        Ok(id)
    }

    async fn fetch_all(&self) -> StoreResult<Vec<School>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::backend("injected read failure"));
        }

        let inner = self.inner.lock().expect("store lock poisoned");
        Ok(inner.rows.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str) -> NewSchool {
        NewSchool {
            name: name.to_string(),
            address: "1 Main St".to_string(),
            latitude: 1.0,
            longitude: 2.0,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = MemorySchoolStore::new();
        assert_eq!(store.insert(&sample("a")).await.unwrap(), 1);
        assert_eq!(store.insert(&sample("b")).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_fetch_all_returns_rows_in_id_order() {
        let store = MemorySchoolStore::new();
        store.insert(&sample("a")).await.unwrap();
        store.insert(&sample("b")).await.unwrap();

        let rows = store.fetch_all().await.unwrap();
        let ids: Vec<u64> = rows.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(rows[0].name, "a");
    }

    #[tokio::test]
    async fn test_write_failure_injection_persists_nothing() {
        let store = MemorySchoolStore::new();
        store.set_fail_writes(true);
        assert!(store.insert(&sample("a")).await.is_err());
        assert!(store.is_empty());

        store.set_fail_writes(false);
        assert!(store.insert(&sample("a")).await.is_ok());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_read_failure_injection() {
        let store = MemorySchoolStore::new();
        store.set_fail_reads(true);
        assert!(store.fetch_all().await.is_err());
    }
}
