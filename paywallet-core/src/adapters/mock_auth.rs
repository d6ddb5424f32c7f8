//! Mock auth provider
//!
//! Stands in for the external authentication widget. Accepts any
//! well-formed email as an identity - deciding whether that identity maps
//! to a wallet account (or needs onboarding) is the application's job, not
//! the provider's.

use std::sync::Mutex;

use crate::domain::result::Result;
use crate::domain::User;
use crate::ports::{AuthListener, AuthProvider, AuthState, AuthUser};

struct AuthInner {
    state: AuthState,
    listeners: Vec<(usize, AuthListener)>,
    next_subscription: usize,
}

/// In-process auth provider for the demo
pub struct MockAuthProvider {
    inner: Mutex<AuthInner>,
}

impl MockAuthProvider {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(AuthInner {
                state: AuthState::signed_out(),
                listeners: Vec::new(),
                next_subscription: 0,
            }),
        }
    }

    fn set_state(&self, state: AuthState) {
        let mut inner = self.inner.lock().expect("auth lock");
        inner.state = state.clone();
        for (_, listener) in &inner.listeners {
            listener(&state);
        }
    }
}

impl Default for MockAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthProvider for MockAuthProvider {
    fn login(&self, email: &str) -> Result<AuthUser> {
        User::validate_email(email)?;

        let user = AuthUser {
            email: email.to_lowercase(),
            display_name: None,
        };
        self.set_state(AuthState {
            user: Some(user.clone()),
            is_loading: false,
        });
        Ok(user)
    }

    fn logout(&self) {
        self.set_state(AuthState::signed_out());
    }

    fn current(&self) -> AuthState {
        self.inner.lock().expect("auth lock").state.clone()
    }

    fn subscribe(&self, listener: AuthListener) -> usize {
        let mut inner = self.inner.lock().expect("auth lock");
        let id = inner.next_subscription;
        inner.next_subscription += 1;
        // Deliver the current state immediately, like the widget does
        listener(&inner.state);
        inner.listeners.push((id, listener));
        id
    }

    fn unsubscribe(&self, subscription_id: usize) {
        let mut inner = self.inner.lock().expect("auth lock");
        inner.listeners.retain(|(id, _)| *id != subscription_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_login_rejects_malformed_email() {
        let auth = MockAuthProvider::new();
        assert!(auth.login("not-an-email").is_err());
        assert!(auth.current().user.is_none());
    }

    #[test]
    fn test_login_logout_cycle() {
        let auth = MockAuthProvider::new();
        let user = auth.login("John@Example.com").unwrap();
        assert_eq!(user.email, "john@example.com");
        assert_eq!(auth.current().user, Some(user));

        auth.logout();
        assert!(auth.current().user.is_none());
    }

    #[test]
    fn test_subscribe_delivers_current_and_future_states() {
        let auth = MockAuthProvider::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        let id = auth.subscribe(Box::new(move |_state| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        // Immediate delivery of the current (signed out) state
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        auth.login("john@example.com").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        auth.unsubscribe(id);
        auth.logout();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
