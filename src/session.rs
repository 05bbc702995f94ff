//! Login flow and the persisted session flag.
//!
//! The host environment provides the actual key-value persistence
//! (browser local storage); this module owns validation, the
//! credential check and the flag's payload. The entire persisted
//! surface is one key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logging::ViewContext;
use crate::routing::Route;

/// The single persisted key.
pub const SESSION_KEY: &str = "safetyUser";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email address is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    // The message deliberately does not hint at which accounts exist.
    #[error("Credentials not recognized")]
    InvalidCredentials,
}

/// Payload written under `SESSION_KEY` at successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    pub role: String,
    /// ISO-8601 login timestamp.
    pub login_time: String,
}

/// One known account.
#[derive(Debug, Clone)]
pub struct Credential {
    pub email: String,
    pub password: String,
    pub role: String,
}

/// The set of accounts logins are checked against.
#[derive(Debug, Clone)]
pub struct CredentialSet {
    credentials: Vec<Credential>,
}

impl CredentialSet {
    pub fn new(credentials: Vec<Credential>) -> Self {
        Self { credentials }
    }

    /// The demo accounts shipped with the product.
    pub fn demo() -> Self {
        let demo = |email: &str, password: &str, role: &str| Credential {
            email: email.to_string(),
            password: password.to_string(),
            role: role.to_string(),
        };
        Self::new(vec![
            demo("safety.manager@company.com", "SafetyFirst123", "Safety Manager"),
            demo("supervisor@company.com", "Supervisor456", "Field Supervisor"),
            demo("admin@company.com", "Admin789", "System Administrator"),
        ])
    }

    fn verify(&self, email: &str, password: &str) -> Option<&Credential> {
        self.credentials
            .iter()
            .find(|c| c.email == email && c.password == password)
    }
}

/// Key-value persistence provided by the host environment.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory store, used by tests and headless hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

fn validate_email(email: &str) -> Result<(), AuthError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AuthError::EmailRequired);
    }
    // Shape check only: non-empty local part, an @, and a dot in the
    // domain. Real address validation is the identity provider's job.
    let (local, domain) = email.split_once('@').ok_or(AuthError::EmailInvalid)?;
    if local.is_empty() || domain.len() < 3 || !domain.contains('.') || email.contains(char::is_whitespace) {
        return Err(AuthError::EmailInvalid);
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.trim().is_empty() {
        return Err(AuthError::PasswordRequired);
    }
    if password.len() < 6 {
        return Err(AuthError::PasswordTooShort);
    }
    Ok(())
}

/// Validate the form fields without checking credentials.
pub fn validate_form(email: &str, password: &str) -> Result<(), AuthError> {
    validate_email(email)?;
    validate_password(password)?;
    Ok(())
}

/// Attempt a login. On success the session flag is written and the
/// logged-in user returned.
pub fn login(
    credentials: &CredentialSet,
    email: &str,
    password: &str,
    store: &mut dyn SessionStore,
    now: DateTime<Utc>,
) -> Result<SessionUser, AuthError> {
    let ctx = ViewContext::new("login");
    validate_form(email, password)?;

    let matched = credentials.verify(email.trim(), password).ok_or_else(|| {
        log::warn!("{} LOGIN_REJECTED reason=invalid_credentials", ctx);
        AuthError::InvalidCredentials
    })?;

    let user = SessionUser {
        email: matched.email.clone(),
        role: matched.role.clone(),
        login_time: now.to_rfc3339(),
    };

    match serde_json::to_string(&user) {
        Ok(payload) => store.set(SESSION_KEY, &payload),
        Err(e) => log::error!("{} SESSION_WRITE_FAILED error={}", ctx, e),
    }

    log::info!("{} LOGIN_OK role={}", ctx, user.role);
    Ok(user)
}

/// Read the persisted session flag, if present and parseable.
pub fn current_session(store: &dyn SessionStore) -> Option<SessionUser> {
    let payload = store.get(SESSION_KEY)?;
    match serde_json::from_str(&payload) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("SESSION_PARSE_FAILED error={}", e);
            None
        }
    }
}

/// Route to show at startup: straight to the live dashboard when a
/// session flag is present, the login page otherwise.
pub fn startup_route(store: &dyn SessionStore) -> Route {
    match current_session(store) {
        Some(user) => {
            log::info!("SESSION_RESUMED role={}", user.role);
            Route::RealTimeDashboard
        }
        None => Route::Login,
    }
}

/// Clear the session flag.
pub fn logout(store: &mut dyn SessionStore) {
    store.remove(SESSION_KEY);
    log::info!("LOGOUT_OK");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_validation() {
        assert_eq!(validate_form("", "SafetyFirst123"), Err(AuthError::EmailRequired));
        assert_eq!(validate_form("not-an-email", "SafetyFirst123"), Err(AuthError::EmailInvalid));
        assert_eq!(validate_form("a@b", "SafetyFirst123"), Err(AuthError::EmailInvalid));
        assert_eq!(validate_form("a@company.com", ""), Err(AuthError::PasswordRequired));
        assert_eq!(validate_form("a@company.com", "abc"), Err(AuthError::PasswordTooShort));
        assert!(validate_form("a@company.com", "SafetyFirst123").is_ok());
    }

    #[test]
    fn test_login_round_trip() {
        let creds = CredentialSet::demo();
        let mut store = MemoryStore::new();
        let now = Utc::now();

        assert!(current_session(&store).is_none());
        assert_eq!(startup_route(&store), Route::Login);

        let user = login(&creds, "safety.manager@company.com", "SafetyFirst123", &mut store, now)
            .unwrap();
        assert_eq!(user.role, "Safety Manager");

        let resumed = current_session(&store).unwrap();
        assert_eq!(resumed.email, "safety.manager@company.com");
        assert_eq!(resumed.login_time, now.to_rfc3339());
        assert_eq!(startup_route(&store), Route::RealTimeDashboard);

        logout(&mut store);
        assert_eq!(startup_route(&store), Route::Login);
    }

    #[test]
    fn test_failed_login_leaks_no_credentials() {
        let creds = CredentialSet::demo();
        let mut store = MemoryStore::new();

        let err = login(&creds, "safety.manager@company.com", "WrongPass1", &mut store, Utc::now())
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);

        let message = err.to_string();
        assert!(!message.contains("SafetyFirst123"));
        assert!(!message.contains("supervisor@company.com"));

        // No flag is written on failure.
        assert!(current_session(&store).is_none());
    }

    #[test]
    fn test_corrupt_session_flag_treated_as_absent() {
        let mut store = MemoryStore::new();
        store.set(SESSION_KEY, "{not json");
        assert!(current_session(&store).is_none());
        assert_eq!(startup_route(&store), Route::Login);
    }
}
