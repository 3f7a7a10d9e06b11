use crate::{AuthError, Clock, IdentityResolver, Result as AuthErrorResult, TokenVerifier};

use lilo_core::User;

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::debug;

/// Required scheme prefix on the authorization header (case-sensitive)
pub const BEARER_PREFIX: &str = "Bearer ";

/// Identity bound to a request that passed the gate
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    /// True when this request provisioned the user
    pub newly_created: bool,
}

/// Request-boundary gate: credential -> verified claims -> local user
#[derive(Clone)]
pub struct AuthGate {
    verifier: Arc<TokenVerifier>,
    resolver: IdentityResolver,
    clock: Arc<dyn Clock>,
}

impl AuthGate {
    pub fn new(verifier: TokenVerifier, resolver: IdentityResolver, clock: Arc<dyn Clock>) -> Self {
        Self {
            verifier: Arc::new(verifier),
            resolver,
            clock,
        }
    }

    /// Authenticate the raw `Authorization` header value
    #[track_caller]
    pub fn authenticate(&self, authorization: Option<&str>) -> AuthErrorResult<AuthenticatedUser> {
        let caller = Location::caller();
        let header = authorization.ok_or_else(|| AuthError::MissingCredential {
            location: ErrorLocation::from(caller),
        })?;

        let token = header
            .strip_prefix(BEARER_PREFIX)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AuthError::InvalidCredentialFormat {
                location: ErrorLocation::from(caller),
            })?;

        let claims = self.verifier.verify(token, self.clock.now())?;

        let (user, newly_created) =
            self.resolver
                .resolve(&claims)
                .map_err(|source| AuthError::IdentityResolution {
                    source,
                    location: ErrorLocation::from(caller),
                })?;

        debug!("Authenticated user {} (subject {})", user.id, claims.sub);

        Ok(AuthenticatedUser {
            user,
            newly_created,
        })
    }

    /// Run `op` with the authenticated user. `op` never runs when
    /// authentication fails.
    #[track_caller]
    pub fn guard<R, F>(&self, authorization: Option<&str>, op: F) -> AuthErrorResult<R>
    where
        F: FnOnce(&AuthenticatedUser) -> R,
    {
        let authenticated = self.authenticate(authorization)?;
        Ok(op(&authenticated))
    }
}
