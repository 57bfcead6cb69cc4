//! Port for resolving session identities from an external auth collaborator.

use crate::domain::entities::SessionIdentity;
use crate::error::AppError;
use async_trait::async_trait;

/// Resolves the current user identity from a presented session token.
///
/// The only fact the portal consumes is presence or absence of an identity:
/// `Ok(None)` means "not signed in" and triggers a redirect to the sign-in
/// route, never an error response. Provider failures (backend unreachable,
/// malformed state) surface as [`AppError`] and propagate to the framework's
/// error conversion.
///
/// # Implementations
///
/// - [`crate::infrastructure::session::SignedSessionProvider`] - HMAC-signed
///   session cookies
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Resolves a raw session token to an identity, if the token is valid.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the provider itself fails; an
    /// invalid or expired token is `Ok(None)`, not an error.
    async fn resolve(&self, token: &str) -> Result<Option<SessionIdentity>, AppError>;
}
