//! Storage seam used by the web layer.
//!
//! [`PgLiftStore`] is the production implementation. [`MemoryLiftStore`]
//! keeps rows in a map and is compiled for tests or with the `memory` feature.

use async_trait::async_trait;

use crate::Database;
use crate::dto::lift::{CreateLiftRequest, UpdateLiftRequest};
use crate::error::Result;
use crate::models::Lift;
use crate::repository::lift::LiftRepository;

#[cfg(any(test, feature = "memory"))]
mod memory;

#[cfg(any(test, feature = "memory"))]
pub use memory::MemoryLiftStore;

#[async_trait]
pub trait LiftStore: Send + Sync {
    async fn list_by_carservice(&self, carservice_id: i32) -> Result<Vec<Lift>>;

    /// Fails with [`StorageError::NotFound`](crate::error::StorageError::NotFound)
    /// when no row has this id.
    async fn find_by_id(&self, id: i32) -> Result<Lift>;

    async fn create(&self, req: &CreateLiftRequest) -> Result<Lift>;

    async fn update(&self, id: i32, req: &UpdateLiftRequest) -> Result<Lift>;

    async fn delete(&self, id: i32) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct PgLiftStore {
    db: Database,
}

impl PgLiftStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LiftStore for PgLiftStore {
    async fn list_by_carservice(&self, carservice_id: i32) -> Result<Vec<Lift>> {
        LiftRepository::new(self.db.pool())
            .list_by_carservice(carservice_id)
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<Lift> {
        LiftRepository::new(self.db.pool()).find_by_id(id).await
    }

    async fn create(&self, req: &CreateLiftRequest) -> Result<Lift> {
        LiftRepository::new(self.db.pool()).create(req).await
    }

    async fn update(&self, id: i32, req: &UpdateLiftRequest) -> Result<Lift> {
        LiftRepository::new(self.db.pool()).update(id, req).await
    }

    async fn delete(&self, id: i32) -> Result<()> {
        LiftRepository::new(self.db.pool()).delete(id).await
    }
}
