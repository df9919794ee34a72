use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::LiftStore;
use crate::dto::lift::{CreateLiftRequest, UpdateLiftRequest};
use crate::error::{Result, StorageError};
use crate::models::Lift;

#[derive(Debug, Default)]
struct Inner {
    next_id: i32,
    rows: BTreeMap<i32, Lift>,
}

/// Map-backed store with serial ids starting at 1.
#[derive(Debug, Default)]
pub struct MemoryLiftStore {
    inner: RwLock<Inner>,
}

impl MemoryLiftStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl LiftStore for MemoryLiftStore {
    async fn list_by_carservice(&self, carservice_id: i32) -> Result<Vec<Lift>> {
        let inner = self.inner.read().await;
        Ok(inner
            .rows
            .values()
            .filter(|lift| lift.carservice_id == carservice_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Lift> {
        let inner = self.inner.read().await;
        inner.rows.get(&id).cloned().ok_or(StorageError::NotFound)
    }

    async fn create(&self, req: &CreateLiftRequest) -> Result<Lift> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;

        let lift = Lift {
            id: inner.next_id,
            carservice_id: req.carservice_id,
            owner_id: req.owner_id,
            name: req.name.clone(),
            description: req.description.clone(),
        };
        inner.rows.insert(lift.id, lift.clone());

        Ok(lift)
    }

    async fn update(&self, id: i32, req: &UpdateLiftRequest) -> Result<Lift> {
        let mut inner = self.inner.write().await;
        let lift = inner.rows.get_mut(&id).ok_or(StorageError::NotFound)?;
        lift.apply(req);
        Ok(lift.clone())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StorageError::NotFound)
    }
}
