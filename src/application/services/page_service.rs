//! Access-gated dashboard page resolution service.

use std::sync::Arc;

use crate::domain::entities::{DashboardPage, PageOutcome};
use crate::domain::ports::SessionProvider;
use crate::error::AppError;

/// Service resolving dashboard page requests against the session gate.
///
/// Produces an explicit [`PageOutcome`] per request: render the shell for a
/// resolved identity, or redirect to the fixed sign-in route when no identity
/// is present. The caller (the web handler) matches on the outcome; nothing
/// here interrupts rendering by side effect.
pub struct PageService<P: SessionProvider + ?Sized> {
    sessions: Arc<P>,
    sign_in_path: String,
}

impl<P: SessionProvider + ?Sized> PageService<P> {
    /// Creates a new page service.
    ///
    /// # Arguments
    ///
    /// - `sessions` - session provider resolving tokens to identities
    /// - `sign_in_path` - route the shell redirects to when no identity resolves
    pub fn new(sessions: Arc<P>, sign_in_path: impl Into<String>) -> Self {
        Self {
            sessions,
            sign_in_path: sign_in_path.into(),
        }
    }

    /// Resolves a dashboard request to a render-or-redirect outcome.
    ///
    /// A missing token short-circuits to a redirect without consulting the
    /// provider. A presented token is resolved asynchronously; only a token
    /// that maps to an identity renders the page, and the rendered page
    /// carries that exact identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] only when the session provider itself fails;
    /// absence of an identity is an outcome, not an error.
    pub async fn resolve_dashboard(
        &self,
        session_token: Option<&str>,
    ) -> Result<PageOutcome, AppError> {
        let Some(token) = session_token else {
            return Ok(PageOutcome::RedirectTo(self.sign_in_path.clone()));
        };

        match self.sessions.resolve(token).await? {
            Some(identity) => Ok(PageOutcome::Render(DashboardPage::new(identity))),
            None => Ok(PageOutcome::RedirectTo(self.sign_in_path.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SessionIdentity;
    use crate::domain::ports::MockSessionProvider;
    use serde_json::json;

    const SIGN_IN: &str = "/dashboard/login";

    #[tokio::test]
    async fn test_missing_token_redirects_without_resolving() {
        let mut mock = MockSessionProvider::new();
        mock.expect_resolve().times(0);

        let service = PageService::new(Arc::new(mock), SIGN_IN);

        let outcome = service.resolve_dashboard(None).await.unwrap();

        assert_eq!(outcome, PageOutcome::RedirectTo(SIGN_IN.to_string()));
    }

    #[tokio::test]
    async fn test_unresolvable_token_redirects() {
        let mut mock = MockSessionProvider::new();
        mock.expect_resolve()
            .withf(|token| token == "stale-token")
            .times(1)
            .returning(|_| Ok(None));

        let service = PageService::new(Arc::new(mock), SIGN_IN);

        let outcome = service.resolve_dashboard(Some("stale-token")).await.unwrap();

        assert_eq!(outcome, PageOutcome::RedirectTo(SIGN_IN.to_string()));
    }

    #[tokio::test]
    async fn test_resolved_identity_renders_page() {
        let mut mock = MockSessionProvider::new();
        mock.expect_resolve()
            .withf(|token| token == "good-token")
            .times(1)
            .returning(|_| Ok(Some(SessionIdentity::new("user-42"))));

        let service = PageService::new(Arc::new(mock), SIGN_IN);

        let outcome = service.resolve_dashboard(Some("good-token")).await.unwrap();

        // The rendered page carries the exact identity the provider returned.
        match outcome {
            PageOutcome::Render(page) => assert_eq!(page.identity.as_str(), "user-42"),
            PageOutcome::RedirectTo(_) => panic!("expected render outcome"),
        }
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let mut mock = MockSessionProvider::new();
        mock.expect_resolve()
            .times(1)
            .returning(|_| Err(AppError::internal("session backend down", json!({}))));

        let service = PageService::new(Arc::new(mock), SIGN_IN);

        let result = service.resolve_dashboard(Some("any-token")).await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_custom_sign_in_path_is_used() {
        let mock = MockSessionProvider::new();
        let service = PageService::new(Arc::new(mock), "/auth/sign-in");

        let outcome = service.resolve_dashboard(None).await.unwrap();

        assert_eq!(outcome, PageOutcome::RedirectTo("/auth/sign-in".to_string()));
    }
}
