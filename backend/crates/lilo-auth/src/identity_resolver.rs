use crate::Claims;

use lilo_core::User;
use lilo_store::{Result as StoreErrorResult, UserRepository};

use log::info;

/// Maps verified external identities onto local users, creating the local
/// user the first time a subject id is seen
#[derive(Clone)]
pub struct IdentityResolver {
    users: UserRepository,
}

impl IdentityResolver {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    /// Return the local user for `claims.sub`, provisioning it if needed.
    ///
    /// Existing users are returned as stored; claims never overwrite them.
    /// Concurrent first sightings of one subject create exactly one user.
    pub fn resolve(&self, claims: &Claims) -> StoreErrorResult<(User, bool)> {
        let (user, created) = self.users.find_or_create(&claims.sub, || {
            User::new(
                claims.sub.clone(),
                claims.email.clone(),
                claims.display_name().to_string(),
                claims.avatar_url().to_string(),
            )
        })?;

        if created {
            info!("Provisioned user {} for subject {}", user.id, claims.sub);
        }

        Ok((user, created))
    }
}
