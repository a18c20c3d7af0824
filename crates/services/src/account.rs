use std::collections::HashMap;
use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

use storage::KeyValueRepository;

use crate::error::AccountError;

const USERS_KEY: &str = "users";
const SESSION_KEY: &str = "session";
const MIN_PASSWORD_LEN: usize = 6;

/// Stored account record, keyed by normalized email in the users map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct UserRecord {
    name: String,
    email: String,
    pass_hash: String,
}

/// Marker for the logged-in account.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ActiveLogin {
    email: String,
}

/// Publicly visible slice of the logged-in account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub email: String,
}

/// Demo account flows over the key-value store.
///
/// Passwords are stored base64-encoded, not hashed: this is a local demo
/// login, not credential storage that resists offline attack.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn KeyValueRepository>,
}

impl AccountService {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueRepository>) -> Self {
        Self { store }
    }

    /// Creates an account and logs it in.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::InvalidEmail`, `AccountError::PasswordTooShort`
    /// or `AccountError::AccountExists` on validation failures, and storage
    /// errors otherwise.
    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Profile, AccountError> {
        let email = normalize_email(email)?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AccountError::PasswordTooShort);
        }

        let mut users = self.load_users().await?;
        if users.contains_key(&email) {
            return Err(AccountError::AccountExists);
        }

        let record = UserRecord {
            name: name.trim().to_owned(),
            email: email.clone(),
            pass_hash: encode_password(password),
        };
        users.insert(email.clone(), record.clone());
        self.save_users(&users).await?;
        self.set_active(&email).await?;

        log::debug!("account created for {email}");
        Ok(Profile {
            name: record.name,
            email,
        })
    }

    /// Logs an existing account in.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::UnknownAccount` or `AccountError::WrongPassword`
    /// when credentials do not match, and storage errors otherwise.
    pub async fn log_in(&self, email: &str, password: &str) -> Result<Profile, AccountError> {
        let email = normalize_email(email)?;
        let users = self.load_users().await?;
        let Some(user) = users.get(&email) else {
            return Err(AccountError::UnknownAccount);
        };
        if user.pass_hash != encode_password(password) {
            return Err(AccountError::WrongPassword);
        }

        self.set_active(&email).await?;
        log::debug!("login for {email}");
        Ok(Profile {
            name: user.name.clone(),
            email,
        })
    }

    /// The logged-in profile, or `None`.
    ///
    /// A dangling login marker (user record deleted meanwhile) reads as
    /// logged out.
    ///
    /// # Errors
    ///
    /// Returns `AccountError` on storage failures or corrupt records.
    pub async fn current(&self) -> Result<Option<Profile>, AccountError> {
        let Some(raw) = self.store.get(SESSION_KEY).await? else {
            return Ok(None);
        };
        let active: ActiveLogin = serde_json::from_str(&raw)?;
        let users = self.load_users().await?;
        Ok(users.get(&active.email).map(|user| Profile {
            name: user.name.clone(),
            email: user.email.clone(),
        }))
    }

    /// Logs out by dropping the login marker. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `AccountError` on storage failures.
    pub async fn log_out(&self) -> Result<(), AccountError> {
        self.store.delete(SESSION_KEY).await?;
        Ok(())
    }

    async fn load_users(&self) -> Result<HashMap<String, UserRecord>, AccountError> {
        match self.store.get(USERS_KEY).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(HashMap::new()),
        }
    }

    async fn save_users(&self, users: &HashMap<String, UserRecord>) -> Result<(), AccountError> {
        self.store
            .set(USERS_KEY, &serde_json::to_string(users)?)
            .await?;
        Ok(())
    }

    async fn set_active(&self, email: &str) -> Result<(), AccountError> {
        let marker = ActiveLogin {
            email: email.to_owned(),
        };
        self.store
            .set(SESSION_KEY, &serde_json::to_string(&marker)?)
            .await?;
        Ok(())
    }
}

fn normalize_email(email: &str) -> Result<String, AccountError> {
    let email = email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(AccountError::InvalidEmail);
    }
    Ok(email)
}

fn encode_password(password: &str) -> String {
    BASE64.encode(password.as_bytes())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use storage::InMemoryStore;

    fn service() -> AccountService {
        AccountService::new(Arc::new(InMemoryStore::new()))
    }

    #[tokio::test]
    async fn sign_up_logs_the_account_in() {
        let svc = service();
        let profile = svc.sign_up("Ada", "Ada@Example.com", "secret1").await.unwrap();
        assert_eq!(profile.email, "ada@example.com");
        assert_eq!(profile.name, "Ada");

        let current = svc.current().await.unwrap().unwrap();
        assert_eq!(current.email, "ada@example.com");
    }

    #[tokio::test]
    async fn sign_up_rejects_short_passwords() {
        let err = service().sign_up("Ada", "a@b.c", "12345").await.unwrap_err();
        assert!(matches!(err, AccountError::PasswordTooShort));
    }

    #[tokio::test]
    async fn sign_up_rejects_duplicate_emails() {
        let svc = service();
        svc.sign_up("Ada", "a@b.c", "secret1").await.unwrap();
        let err = svc.sign_up("Ada II", "A@B.C", "secret2").await.unwrap_err();
        assert!(matches!(err, AccountError::AccountExists));
    }

    #[tokio::test]
    async fn sign_up_rejects_invalid_emails() {
        let err = service().sign_up("Ada", "nonsense", "secret1").await.unwrap_err();
        assert!(matches!(err, AccountError::InvalidEmail));
    }

    #[tokio::test]
    async fn log_in_checks_credentials() {
        let svc = service();
        svc.sign_up("Ada", "a@b.c", "secret1").await.unwrap();
        svc.log_out().await.unwrap();

        let err = svc.log_in("a@b.c", "wrong-pass").await.unwrap_err();
        assert!(matches!(err, AccountError::WrongPassword));

        let err = svc.log_in("nobody@b.c", "secret1").await.unwrap_err();
        assert!(matches!(err, AccountError::UnknownAccount));

        let profile = svc.log_in(" A@B.C ", "secret1").await.unwrap();
        assert_eq!(profile.email, "a@b.c");
    }

    #[tokio::test]
    async fn log_out_clears_the_login() {
        let svc = service();
        svc.sign_up("Ada", "a@b.c", "secret1").await.unwrap();
        svc.log_out().await.unwrap();
        assert_eq!(svc.current().await.unwrap(), None);

        // Idempotent.
        svc.log_out().await.unwrap();
    }

    #[tokio::test]
    async fn stores_are_independent() {
        let first = service();
        first.sign_up("Ada", "a@b.c", "secret1").await.unwrap();

        let second = service();
        assert_eq!(second.current().await.unwrap(), None);
        let err = second.log_in("a@b.c", "secret1").await.unwrap_err();
        assert!(matches!(err, AccountError::UnknownAccount));
    }
}
