pub mod auth_gate;
pub mod claims;
pub mod clock;
pub mod error;
pub mod hmac_algorithm;
pub mod identity_resolver;
pub mod token_verifier;

pub use auth_gate::{AuthGate, AuthenticatedUser, BEARER_PREFIX};
pub use claims::Claims;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{AuthError, Result};
pub use hmac_algorithm::HmacAlgorithm;
pub use identity_resolver::IdentityResolver;
pub use token_verifier::TokenVerifier;

#[cfg(test)]
mod tests;
