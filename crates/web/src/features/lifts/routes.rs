use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{create_lift, delete_lift, list_lifts, update_lift};
use crate::state::AppState;

/// `GET /:id` lists by car service id; `PUT`/`DELETE /:id` address a single lift.
/// Create answers with and without the trailing slash.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/lifts", post(create_lift))
        .route("/api/lifts/", post(create_lift))
        .route(
            "/api/lifts/:id",
            get(list_lifts).put(update_lift).delete(delete_lift),
        )
}
