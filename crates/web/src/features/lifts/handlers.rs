use axum::extract::State;
use storage::{
    dto::lift::{CreateLiftRequest, MessageResponse, UpdateLiftRequest},
    models::Lift,
};
use validator::Validate;

use crate::error::WebResult;
use crate::extract::{Json, Path};
use crate::middleware::auth::{CurrentUser, SuperUser};
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/lifts/{carservice_id}",
    params(
        ("carservice_id" = i32, Path, description = "Car service id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Lifts of the car service", body = Vec<Lift>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "lifts"
)]
pub async fn list_lifts(
    State(state): State<AppState>,
    Path(carservice_id): Path<i32>,
    _user: CurrentUser,
) -> WebResult<Json<Vec<Lift>>> {
    let lifts = services::list_lifts(state.lifts.as_ref(), carservice_id).await?;

    Ok(Json(lifts))
}

#[utoipa::path(
    post,
    path = "/api/lifts",
    request_body = CreateLiftRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Lift created successfully", body = Lift),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Malformed payload")
    ),
    tag = "lifts"
)]
pub async fn create_lift(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateLiftRequest>,
) -> WebResult<Json<Lift>> {
    req.validate()?;

    let lift = services::create_lift(state.lifts.as_ref(), &req, user).await?;

    Ok(Json(lift))
}

#[utoipa::path(
    put,
    path = "/api/lifts/{id}",
    params(
        ("id" = i32, Path, description = "Lift id")
    ),
    request_body = UpdateLiftRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Lift updated successfully", body = Lift),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Superuser required"),
        (status = 404, description = "Lift not found")
    ),
    tag = "lifts"
)]
pub async fn update_lift(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    SuperUser(user): SuperUser,
    Json(update_req): Json<UpdateLiftRequest>,
) -> WebResult<Json<Lift>> {
    update_req.validate()?;

    let updated = services::update_lift(state.lifts.as_ref(), id, &update_req, user).await?;

    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/api/lifts/{id}",
    params(
        ("id" = i32, Path, description = "Lift id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Lift removed", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not enough permissions"),
        (status = 404, description = "Lift not found")
    ),
    tag = "lifts"
)]
pub async fn delete_lift(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    user: CurrentUser,
) -> WebResult<Json<MessageResponse>> {
    let message = services::delete_lift(state.lifts.as_ref(), id, user).await?;

    Ok(Json(message))
}
