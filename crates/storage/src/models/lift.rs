use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::dto::lift::UpdateLiftRequest;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Lift {
    pub id: i32,
    pub carservice_id: i32,
    pub owner_id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl Lift {
    /// Overwrites every field present in `req`, leaving the rest untouched.
    /// `id` is never written.
    pub fn apply(&mut self, req: &UpdateLiftRequest) {
        if let Some(carservice_id) = req.carservice_id {
            self.carservice_id = carservice_id;
        }
        if let Some(owner_id) = req.owner_id {
            self.owner_id = owner_id;
        }
        if let Some(name) = &req.name {
            self.name = name.clone();
        }
        if let Some(description) = &req.description {
            self.description = description.clone();
        }
    }

    /// Superusers may touch any lift; everyone else only their own.
    pub fn can_be_managed_by(&self, user_id: i32, is_superuser: bool) -> bool {
        is_superuser || self.owner_id == user_id
    }
}
