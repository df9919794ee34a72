use storage::{
    dto::lift::{CreateLiftRequest, MessageResponse, UpdateLiftRequest},
    models::Lift,
    store::LiftStore,
};

use crate::error::{WebError, WebResult};
use crate::middleware::auth::CurrentUser;

pub const LIFT_NOT_FOUND: &str = "Booking not found";
pub const NOT_ENOUGH_PERMISSIONS: &str = "Not enough permissions";
pub const LIFT_REMOVED: &str = "Lift removed";

/// List every lift of a car service
pub async fn list_lifts(store: &dyn LiftStore, carservice_id: i32) -> WebResult<Vec<Lift>> {
    Ok(store.list_by_carservice(carservice_id).await?)
}

/// Create a new lift
pub async fn create_lift(
    store: &dyn LiftStore,
    request: &CreateLiftRequest,
    user: CurrentUser,
) -> WebResult<Lift> {
    let lift = store.create(request).await?;
    tracing::info!(
        lift_id = lift.id,
        carservice_id = lift.carservice_id,
        user_id = user.id,
        "Lift created"
    );
    Ok(lift)
}

/// Update a lift
pub async fn update_lift(
    store: &dyn LiftStore,
    id: i32,
    request: &UpdateLiftRequest,
    user: CurrentUser,
) -> WebResult<Lift> {
    let lift = store
        .update(id, request)
        .await
        .map_err(WebError::not_found_or(LIFT_NOT_FOUND))?;
    tracing::info!(lift_id = lift.id, user_id = user.id, "Lift updated");
    Ok(lift)
}

/// Delete a lift owned by the caller, or any lift when the caller is a superuser
pub async fn delete_lift(
    store: &dyn LiftStore,
    id: i32,
    user: CurrentUser,
) -> WebResult<MessageResponse> {
    let lift = store
        .find_by_id(id)
        .await
        .map_err(WebError::not_found_or(LIFT_NOT_FOUND))?;

    if !lift.can_be_managed_by(user.id, user.is_superuser) {
        tracing::warn!(lift_id = id, user_id = user.id, "Lift deletion refused");
        return Err(WebError::Forbidden(NOT_ENOUGH_PERMISSIONS.to_string()));
    }

    store
        .delete(id)
        .await
        .map_err(WebError::not_found_or(LIFT_NOT_FOUND))?;
    tracing::info!(lift_id = id, user_id = user.id, "Lift removed");

    Ok(MessageResponse::new(LIFT_REMOVED))
}
