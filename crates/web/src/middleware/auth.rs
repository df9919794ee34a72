//! Bearer-token extractors.
//!
//! [`CurrentUser`] accepts any valid token; [`SuperUser`] additionally
//! requires the `is_superuser` claim.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::auth::jwt::decode_token;
use crate::error::WebError;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i32,
    pub is_superuser: bool,
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = WebError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or_else(|| {
                tracing::warn!("Request without bearer token");
                WebError::Unauthorized
            })?;

        let claims = decode_token(token, &state.jwt).map_err(|e| {
            tracing::warn!("Rejected access token: {}", e);
            WebError::Unauthorized
        })?;

        Ok(Self {
            id: claims.sub,
            is_superuser: claims.is_superuser,
        })
    }
}

pub struct SuperUser(pub CurrentUser);

#[async_trait]
impl FromRequestParts<AppState> for SuperUser {
    type Rejection = WebError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        if !user.is_superuser {
            tracing::warn!(user_id = user.id, "Superuser route refused");
            return Err(WebError::Forbidden(
                "The user doesn't have enough privileges".to_string(),
            ));
        }
        Ok(Self(user))
    }
}
