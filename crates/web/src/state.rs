use std::sync::Arc;

use storage::store::LiftStore;

use crate::auth::jwt::JwtConfig;

#[derive(Clone)]
pub struct AppState {
    pub lifts: Arc<dyn LiftStore>,
    pub jwt: Arc<JwtConfig>,
}

impl AppState {
    pub fn new(lifts: Arc<dyn LiftStore>, jwt: JwtConfig) -> Self {
        Self {
            lifts,
            jwt: Arc::new(jwt),
        }
    }
}
