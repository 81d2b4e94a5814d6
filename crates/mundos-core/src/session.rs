//! Session access.
//!
//! Authentication itself belongs to an external backend. The app only needs
//! two capabilities from it, captured by [`SessionProvider`]. [`LocalSession`]
//! is an in-memory provider used for local runs and tests.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{MundosError, MundosResult};

/// Paths reachable without a signed-in user
const PUBLIC_PATHS: &[&str] = &["/", "/login"];

/// Whether rendering `path` requires a signed-in user
pub fn requires_auth(path: &str) -> bool {
    !PUBLIC_PATHS.contains(&path)
}

/// A signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub display_name: String,
    /// Experience points earned so far
    pub xp: u64,
}

/// The capabilities the app consumes from the authentication backend
pub trait SessionProvider {
    /// The signed-in user, if any
    fn current_user(&self) -> Option<User>;

    /// End the current session
    fn logout(&self);
}

/// In-memory session provider.
///
/// Clones share one session.
#[derive(Debug, Clone, Default)]
pub struct LocalSession {
    user: Arc<RwLock<Option<User>>>,
}

impl LocalSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign in with an email and password.
    ///
    /// Any well-formed email with a non-empty password is accepted.
    pub fn sign_in(&self, email: &str, password: &str) -> MundosResult<User> {
        let email = email.trim().to_lowercase();
        if !is_plausible_email(&email) {
            return Err(MundosError::InvalidCredentials(format!(
                "'{}' is not a valid email",
                email
            )));
        }
        if password.is_empty() {
            return Err(MundosError::InvalidCredentials("empty password".to_string()));
        }

        let user = User {
            id: format!("local-{}", email),
            display_name: display_name_for(&email),
            email,
            xp: 0,
        };
        *self.user.write() = Some(user.clone());
        tracing::info!(email = %user.email, "Signed in");
        Ok(user)
    }

    /// Add experience points to the signed-in user.
    ///
    /// Returns the new total, or None when nobody is signed in.
    pub fn award_xp(&self, amount: u64) -> Option<u64> {
        let mut guard = self.user.write();
        let user = guard.as_mut()?;
        user.xp = user.xp.saturating_add(amount);
        tracing::debug!(amount, total = user.xp, "Awarded XP");
        Some(user.xp)
    }
}

impl SessionProvider for LocalSession {
    fn current_user(&self) -> Option<User> {
        self.user.read().clone()
    }

    fn logout(&self) {
        if let Some(user) = self.user.write().take() {
            tracing::info!(email = %user.email, "Signed out");
        }
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// "ana.garcia@example.com" -> "Ana Garcia"
fn display_name_for(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    local
        .split(['.', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_paths() {
        assert!(!requires_auth("/"));
        assert!(!requires_auth("/login"));
        assert!(requires_auth("/dashboard"));
        assert!(requires_auth("/ejercicios"));
        assert!(requires_auth("/ejercicios/mundos/1"));
        assert!(requires_auth("/perfil"));
    }

    #[test]
    fn sign_in_and_logout() {
        let session = LocalSession::new();
        assert!(session.current_user().is_none());

        let user = session.sign_in("  Ana.Garcia@Example.com ", "secreto").unwrap();
        assert_eq!(user.email, "ana.garcia@example.com");
        assert_eq!(user.display_name, "Ana Garcia");
        assert_eq!(session.current_user(), Some(user));

        session.logout();
        assert!(session.current_user().is_none());
        // Logging out twice is harmless
        session.logout();
    }

    #[test]
    fn rejects_bad_credentials() {
        let session = LocalSession::new();
        assert!(matches!(
            session.sign_in("no-at-sign", "x"),
            Err(MundosError::InvalidCredentials(_))
        ));
        assert!(session.sign_in("a@b", "x").is_err());
        assert!(session.sign_in("a@b.com", "").is_err());
        assert!(session.sign_in("@b.com", "x").is_err());
        assert!(session.current_user().is_none());
    }

    #[test]
    fn clones_share_session() {
        let session = LocalSession::new();
        let other = session.clone();
        session.sign_in("luis@example.com", "pw").unwrap();
        assert_eq!(other.current_user().unwrap().display_name, "Luis");
    }

    #[test]
    fn award_xp_requires_user() {
        let session = LocalSession::new();
        assert_eq!(session.award_xp(10), None);

        session.sign_in("luis@example.com", "pw").unwrap();
        assert_eq!(session.award_xp(10), Some(10));
        assert_eq!(session.award_xp(5), Some(15));
        assert_eq!(session.current_user().unwrap().xp, 15);
    }
}
