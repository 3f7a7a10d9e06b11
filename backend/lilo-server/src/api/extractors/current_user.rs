//! Axum extractor binding the authenticated user into a handler

use crate::{ApiError, AppState};

use lilo_core::User;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// The local user behind the request's bearer token.
///
/// Extraction runs the whole auth gate; when it fails the handler never
/// runs and the client gets a 401.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            // A header that is not visible ASCII cannot carry "Bearer <token>"
            let authorization = parts
                .headers
                .get(AUTHORIZATION)
                .map(|value| value.to_str().unwrap_or_default());

            let authenticated = state.auth_gate.authenticate(authorization)?;

            if authenticated.newly_created {
                log::info!(
                    "First request from user {} ({})",
                    authenticated.user.id,
                    authenticated.user.email
                );
            }

            Ok(CurrentUser(authenticated.user))
        }
    }
}
