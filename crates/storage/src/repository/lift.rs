use sqlx::PgPool;

use crate::dto::lift::{CreateLiftRequest, UpdateLiftRequest};
use crate::error::{Result, StorageError};
use crate::models::Lift;

pub struct LiftRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LiftRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every lift belonging to a car service
    pub async fn list_by_carservice(&self, carservice_id: i32) -> Result<Vec<Lift>> {
        let lifts = sqlx::query_as::<_, Lift>(
            r#"
            SELECT id, carservice_id, owner_id, name, description
            FROM lift
            WHERE carservice_id = $1
            ORDER BY id
            "#,
        )
        .bind(carservice_id)
        .fetch_all(self.pool)
        .await?;

        Ok(lifts)
    }

    /// Find lift by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Lift> {
        let lift = sqlx::query_as::<_, Lift>(
            r#"
            SELECT id, carservice_id, owner_id, name, description
            FROM lift
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(lift)
    }

    /// Create a new lift
    pub async fn create(&self, req: &CreateLiftRequest) -> Result<Lift> {
        let lift = sqlx::query_as::<_, Lift>(
            r#"
            INSERT INTO lift (carservice_id, owner_id, name, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, carservice_id, owner_id, name, description
            "#,
        )
        .bind(req.carservice_id)
        .bind(req.owner_id)
        .bind(&req.name)
        .bind(&req.description)
        .fetch_one(self.pool)
        .await?;

        Ok(lift)
    }

    /// Update an existing lift. The row is locked while the payload is applied.
    pub async fn update(&self, id: i32, req: &UpdateLiftRequest) -> Result<Lift> {
        let mut tx = self.pool.begin().await?;

        let mut lift = sqlx::query_as::<_, Lift>(
            r#"
            SELECT id, carservice_id, owner_id, name, description
            FROM lift
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

        lift.apply(req);

        let updated = sqlx::query_as::<_, Lift>(
            r#"
            UPDATE lift
            SET carservice_id = $2,
                owner_id = $3,
                name = $4,
                description = $5
            WHERE id = $1
            RETURNING id, carservice_id, owner_id, name, description
            "#,
        )
        .bind(lift.id)
        .bind(lift.carservice_id)
        .bind(lift.owner_id)
        .bind(&lift.name)
        .bind(&lift.description)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(updated)
    }

    /// Delete a lift by ID
    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM lift WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
