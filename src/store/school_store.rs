//! The store trait consumed by the HTTP handlers.

use async_trait::async_trait;

use super::errors::StoreResult;
use crate::schools::{NewSchool, School};

/// Database collaborator contract.
///
/// Implementations execute one parameterized statement per call and
/// return rows or the generated id. No retries, no transactions; a
/// failure surfaces immediately to the caller.
#[async_trait]
pub trait SchoolStore: Send + Sync {
    /// Inserts one validated record and returns its generated id.
    async fn insert(&self, school: &NewSchool) -> StoreResult<u64>;

    /// Fetches every persisted record, in id order.
    async fn fetch_all(&self) -> StoreResult<Vec<School>>;
}
