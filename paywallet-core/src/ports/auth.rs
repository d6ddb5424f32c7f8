//! Auth provider port - external authentication abstraction
//!
//! The application treats authentication as an opaque collaborator: a
//! login/logout call pair plus a subscription callback reporting the current
//! user and a loading flag. No token or session protocol is implemented
//! here; adapters decide what "authenticated" means.

use serde::{Deserialize, Serialize};

use crate::domain::result::Result;

/// Identity reported by the auth provider
///
/// This is the provider's notion of a user, not a wallet user; the
/// application looks the email up in the store to decide between an
/// existing account and onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub email: String,
    pub display_name: Option<String>,
}

/// Snapshot delivered to auth state listeners
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub is_loading: bool,
}

impl AuthState {
    pub fn signed_out() -> Self {
        Self {
            user: None,
            is_loading: false,
        }
    }
}

/// Listener invoked on every auth state change
pub type AuthListener = Box<dyn Fn(&AuthState) + Send + Sync>;

/// External authentication abstraction
pub trait AuthProvider: Send + Sync {
    /// Authenticate as the given email
    fn login(&self, email: &str) -> Result<AuthUser>;

    /// Clear the current identity
    fn logout(&self);

    /// Current auth state
    fn current(&self) -> AuthState;

    /// Register a listener; it is immediately invoked with the current
    /// state, then on every change. Returns a subscription id usable with
    /// `unsubscribe`.
    fn subscribe(&self, listener: AuthListener) -> usize;

    /// Remove a previously registered listener
    fn unsubscribe(&self, subscription_id: usize);
}
