use std::sync::Arc;

use repoboard_types::Repository;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("repository not found")]
    NotFound,
}

/// Insertion-ordered in-memory collection of repository records, unique by
/// id. Cloning the store clones the handle; all clones share the same
/// collection. Nothing survives a restart.
///
/// The lock keeps each mutation atomic under the multi-threaded runtime. No
/// guard is ever held across an await point.
#[derive(Clone, Default)]
pub struct RepositoryStore {
    inner: Arc<RwLock<Vec<Repository>>>,
}

impl RepositoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record with a freshly generated id and a zeroed like
    /// counter. Ids are never client-supplied.
    pub async fn create(
        &self,
        title: Option<String>,
        url: Option<String>,
        techs: Option<Vec<String>>,
    ) -> Repository {
        let repository = Repository {
            id: Uuid::new_v4(),
            title,
            url,
            techs,
            likes: 0,
        };
        self.inner.write().await.push(repository.clone());
        repository
    }

    /// Full collection in insertion order.
    pub async fn list(&self) -> Vec<Repository> {
        self.inner.read().await.clone()
    }

    /// Overwrites the record at its existing position, keeping its id and
    /// accumulated likes. A replace never resets the counter.
    pub async fn replace(
        &self,
        id: Uuid,
        title: Option<String>,
        url: Option<String>,
        techs: Option<Vec<String>>,
    ) -> Result<Repository, StoreError> {
        let mut records = self.inner.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound)?;
        *slot = Repository {
            id,
            title,
            url,
            techs,
            likes: slot.likes,
        };
        Ok(slot.clone())
    }

    /// Removes exactly the matching record; later records shift up to close
    /// the gap.
    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut records = self.inner.write().await;
        let index = records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound)?;
        records.remove(index);
        Ok(())
    }

    pub async fn like(&self, id: Uuid) -> Result<Repository, StoreError> {
        let mut records = self.inner.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound)?;
        record.likes += 1;
        Ok(record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn titled(store: &RepositoryStore, title: &str) -> Repository {
        store.create(Some(title.to_string()), None, None).await
    }

    #[tokio::test]
    async fn create_assigns_fresh_distinct_ids() {
        let store = RepositoryStore::new();
        let a = store.create(None, None, None).await;
        let b = store.create(None, None, None).await;
        let c = store.create(None, None, None).await;
        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert_ne!(a.id, c.id);
        assert_eq!(a.likes, 0);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = RepositoryStore::new();
        let first = titled(&store, "first").await;
        let second = titled(&store, "second").await;
        let third = titled(&store, "third").await;

        let ids: Vec<_> = store.list().await.into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![first.id, second.id, third.id]);
    }

    #[tokio::test]
    async fn like_is_monotonic() {
        let store = RepositoryStore::new();
        let created = store.create(None, None, None).await;

        for expected in 1..=5u64 {
            let liked = store.like(created.id).await.unwrap();
            assert_eq!(liked.likes, expected);
        }
    }

    #[tokio::test]
    async fn replace_keeps_likes_position_and_id() {
        let store = RepositoryStore::new();
        let first = titled(&store, "first").await;
        let second = titled(&store, "second").await;
        store.like(first.id).await.unwrap();
        store.like(first.id).await.unwrap();

        let replaced = store
            .replace(
                first.id,
                Some("renamed".into()),
                Some("https://example.com".into()),
                Some(vec!["rust".into()]),
            )
            .await
            .unwrap();

        assert_eq!(replaced.id, first.id);
        assert_eq!(replaced.title.as_deref(), Some("renamed"));
        assert_eq!(replaced.likes, 2);

        // Still in front of the untouched record.
        let listed = store.list().await;
        assert_eq!(listed[0].id, first.id);
        assert_eq!(listed[1], second);
    }

    #[tokio::test]
    async fn delete_removes_exactly_one() {
        let store = RepositoryStore::new();
        let first = titled(&store, "first").await;
        let second = titled(&store, "second").await;

        store.delete(first.id).await.unwrap();
        let listed = store.list().await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, second.id);

        // Gone means gone: a second delete is a not-found.
        assert_eq!(store.delete(first.id).await, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn missing_ids_fail_without_mutation() {
        let store = RepositoryStore::new();
        store.create(Some("kept".into()), None, None).await;
        let absent = Uuid::new_v4();

        assert_eq!(
            store.replace(absent, None, None, None).await,
            Err(StoreError::NotFound)
        );
        assert_eq!(store.delete(absent).await, Err(StoreError::NotFound));
        assert_eq!(store.like(absent).await, Err(StoreError::NotFound));
        assert_eq!(store.list().await.len(), 1);
    }
}
