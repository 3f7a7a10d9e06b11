use lilo_auth::{AuthGate, Clock, IdentityResolver, SystemClock, TokenVerifier};
use lilo_store::{
    ClothingItemRepository, OutfitRepository, RecommendationRepository, ReflectionRepository,
    StyleProfileRepository, UserRepository,
};

use std::sync::Arc;

use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Shared state handed to every handler. Clones share the same stores.
#[derive(Clone)]
pub struct AppState {
    pub users: UserRepository,
    pub clothing_items: ClothingItemRepository,
    pub outfits: OutfitRepository,
    pub reflections: ReflectionRepository,
    pub recommendations: RecommendationRepository,
    pub style_profiles: StyleProfileRepository,
    pub auth_gate: AuthGate,
    /// Randomness for daily recommendations
    pub rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    /// In-memory state verifying tokens against `jwt_secret` with the system
    /// clock and an OS-seeded RNG
    pub fn in_memory(jwt_secret: &[u8]) -> Self {
        Self::with_parts(jwt_secret, Arc::new(SystemClock), StdRng::from_os_rng())
    }

    /// In-memory state with an explicit clock and random source
    pub fn with_parts(jwt_secret: &[u8], clock: Arc<dyn Clock>, rng: StdRng) -> Self {
        let users = UserRepository::in_memory();
        let auth_gate = AuthGate::new(
            TokenVerifier::new(jwt_secret),
            IdentityResolver::new(users.clone()),
            clock,
        );

        Self {
            users,
            clothing_items: ClothingItemRepository::in_memory(),
            outfits: OutfitRepository::in_memory(),
            reflections: ReflectionRepository::in_memory(),
            recommendations: RecommendationRepository::in_memory(),
            style_profiles: StyleProfileRepository::in_memory(),
            auth_gate,
            rng: Arc::new(Mutex::new(rng)),
        }
    }
}
