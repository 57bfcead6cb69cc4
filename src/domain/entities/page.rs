//! Page resolution outcome for the access-gated dashboard.

use crate::domain::entities::SessionIdentity;

/// The content of a successfully resolved dashboard page.
///
/// Carries the identity that gated the request; the web layer passes it to
/// the client-side compliance view, which renders asynchronously behind a
/// loading placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardPage {
    pub identity: SessionIdentity,
}

impl DashboardPage {
    pub fn new(identity: SessionIdentity) -> Self {
        Self { identity }
    }
}

/// Result of resolving an access-gated page request.
///
/// Redirect-as-control-flow is modeled as an explicit variant rather than an
/// interrupting signal: the caller matches on the outcome and either renders
/// the page or issues a navigation response. Exactly one variant is produced
/// per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// Render the page shell with the resolved identity.
    Render(DashboardPage),
    /// Abort rendering and navigate the client to the given path.
    RedirectTo(String),
}
