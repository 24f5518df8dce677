//! Mock authentication gate and session-scoped user store.
//!
//! This is deliberately not real authentication. The login check accepts a
//! fixed demo credential pair or any plausible-looking email/password
//! combination, registration always succeeds, and the "session" is a JSON
//! file under the OS runtime directory, the command-line analogue of
//! browser session storage. It gates access to the dashboard views and
//! nothing more.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// The demo account email.
pub const DEMO_EMAIL: &str = "demo@forecare.com";

/// The demo account password.
pub const DEMO_PASSWORD: &str = "Demo1234!";

/// Minimum accepted password length for non-demo logins.
const MIN_PASSWORD_CHARS: usize = 6;

/// Session file name.
const SESSION_FILE_NAME: &str = "session.json";

/// The signed-in user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Facility or organization name.
    pub organization: String,
    /// Role label shown in the header.
    pub role: String,
    /// When this session started.
    pub logged_in_at: DateTime<Utc>,
}

/// Profile data submitted through the registration form.
///
/// The password and country are accepted but not persisted; only the
/// profile fields end up in the session record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Chosen password (unused beyond the form).
    pub password: String,
    /// Facility or organization name.
    pub organization: String,
    /// Role label.
    pub role: String,
    /// Country of the facility.
    pub country: String,
}

/// The canned demo profile used by `demo_login`.
#[must_use]
pub fn demo_user() -> User {
    User {
        email: DEMO_EMAIL.to_string(),
        name: "Dr. Anna Weber".to_string(),
        organization: "Sunrise Senior Living".to_string(),
        role: "Care Manager".to_string(),
        logged_in_at: Utc::now(),
    }
}

/// Default location of the session file.
///
/// The runtime directory is cleared when the login session ends, which
/// matches the tab-scoped persistence of the original; the temp dir is the
/// fallback on platforms without one.
#[must_use]
pub fn default_session_path() -> PathBuf {
    dirs::runtime_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("forecare")
        .join(SESSION_FILE_NAME)
}

/// File-backed store for the current user record.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store at the given path. Nothing is read or written yet.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the session file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored user, if a valid session file exists.
    ///
    /// A missing file reads as "not signed in". A corrupt file does too:
    /// it is discarded with a warning rather than surfaced as an error, so
    /// a damaged session can never wedge the dashboard.
    ///
    /// # Errors
    ///
    /// Returns an error only for real I/O failures (e.g. permissions).
    pub fn load(&self) -> Result<Option<User>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(Error::session_read(&self.path, err)),
        };

        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "discarding corrupt session file");
                Ok(None)
            }
        }
    }

    /// Persist a user record, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, user: &User) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let raw = serde_json::to_string_pretty(user)?;
        std::fs::write(&self.path, raw).map_err(|err| Error::session_write(&self.path, err))?;
        debug!(path = %self.path.display(), "session persisted");
        Ok(())
    }

    /// Remove the session file. Removing a file that is already gone is
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns an error for real I/O failures.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Error::session_write(&self.path, err)),
        }
    }
}

/// The authentication gate: current user plus its backing store.
#[derive(Debug)]
pub struct Session {
    store: SessionStore,
    user: Option<User>,
}

impl Session {
    /// Open a session against the given store, restoring any persisted
    /// user.
    ///
    /// # Errors
    ///
    /// Returns an error if the store exists but cannot be read.
    pub fn open(store: SessionStore) -> Result<Self> {
        let user = store.load()?;
        Ok(Self { store, user })
    }

    /// Open a session at the default store location.
    ///
    /// # Errors
    ///
    /// Returns an error if the store exists but cannot be read.
    pub fn open_default() -> Result<Self> {
        Self::open(SessionStore::at(default_session_path()))
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether anyone is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Attempt to sign in.
    ///
    /// Accepts the demo credential pair, or any email containing `@` with
    /// a password of at least six characters. On success the user record
    /// is persisted and `true` is returned; on rejection nothing changes
    /// and `false` is returned. Rejection is a message for the user, not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting an accepted login fails.
    pub fn login(&mut self, email: &str, password: &str) -> Result<bool> {
        let is_demo = email == DEMO_EMAIL && password == DEMO_PASSWORD;
        let is_plausible = email.contains('@') && password.chars().count() >= MIN_PASSWORD_CHARS;
        if !is_demo && !is_plausible {
            debug!(email, "login rejected");
            return Ok(false);
        }

        let name = if email == DEMO_EMAIL {
            "Dr. Anna Weber".to_string()
        } else {
            email.split('@').next().unwrap_or(email).to_string()
        };

        let user = User {
            email: email.to_string(),
            name,
            organization: "Sunrise Senior Living".to_string(),
            role: "Care Manager".to_string(),
            logged_in_at: Utc::now(),
        };
        self.persist(user)?;
        Ok(true)
    }

    /// Register a new profile. Always succeeds; no uniqueness or content
    /// validation is performed.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the profile fails.
    pub fn register(&mut self, data: Registration) -> Result<()> {
        let user = User {
            email: data.email,
            name: data.name,
            organization: data.organization,
            role: data.role,
            logged_in_at: Utc::now(),
        };
        self.persist(user)
    }

    /// Sign in as the canned demo user, bypassing credential checks.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the profile fails.
    pub fn demo_login(&mut self) -> Result<()> {
        self.persist(demo_user())
    }

    /// Sign out, clearing the persisted record unconditionally.
    ///
    /// # Errors
    ///
    /// Returns an error if the session file cannot be removed.
    pub fn logout(&mut self) -> Result<()> {
        self.store.clear()?;
        self.user = None;
        Ok(())
    }

    fn persist(&mut self, user: User) -> Result<()> {
        self.store.save(&user)?;
        self.user = Some(user);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_session(test_name: &str) -> Session {
        let path = std::env::temp_dir()
            .join("forecare-tests")
            .join(format!("{test_name}.json"));
        let store = SessionStore::at(&path);
        store.clear().unwrap();
        Session::open(store).unwrap()
    }

    #[test]
    fn test_demo_credentials_succeed() {
        let mut session = scratch_session("demo_credentials");
        assert!(session.login(DEMO_EMAIL, DEMO_PASSWORD).unwrap());
        assert!(session.is_authenticated());
        assert_eq!(session.user().unwrap().name, "Dr. Anna Weber");
    }

    #[test]
    fn test_plausible_credentials_succeed() {
        let mut session = scratch_session("plausible_credentials");
        assert!(session.login("nurse.becker@sunrise.org", "secret99").unwrap());
        assert_eq!(session.user().unwrap().name, "nurse.becker");
        assert_eq!(session.user().unwrap().organization, "Sunrise Senior Living");
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut session = scratch_session("malformed_email");
        assert!(!session.login("not-an-email", "longenough").unwrap());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_short_password_rejected() {
        let mut session = scratch_session("short_password");
        assert!(!session.login("someone@example.com", "five5").unwrap());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_rejected_login_persists_nothing() {
        let mut session = scratch_session("rejected_persists_nothing");
        let path = session.store.path().to_path_buf();
        assert!(!session.login("nope", "x").unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn test_register_always_succeeds() {
        let mut session = scratch_session("register");
        session
            .register(Registration {
                name: "Jonas Vogel".to_string(),
                email: "j.vogel@pflegeheim.de".to_string(),
                password: "x".to_string(),
                organization: "Pflegeheim Sonnenhof".to_string(),
                role: "Shift Lead".to_string(),
                country: "Germany".to_string(),
            })
            .unwrap();
        let user = session.user().unwrap();
        assert_eq!(user.name, "Jonas Vogel");
        assert_eq!(user.organization, "Pflegeheim Sonnenhof");
    }

    #[test]
    fn test_demo_login_bypasses_credentials() {
        let mut session = scratch_session("demo_login");
        session.demo_login().unwrap();
        assert_eq!(session.user().unwrap().email, DEMO_EMAIL);
    }

    #[test]
    fn test_logout_clears_state_unconditionally() {
        let mut session = scratch_session("logout");
        session.demo_login().unwrap();
        session.logout().unwrap();
        assert!(!session.is_authenticated());
        // A second logout with nothing stored still succeeds.
        session.logout().unwrap();
    }

    #[test]
    fn test_session_restores_persisted_user() {
        let mut session = scratch_session("restore");
        session.login("anna@sunrise.org", "longpass").unwrap();
        let store = SessionStore::at(session.store.path());

        let restored = Session::open(store).unwrap();
        assert!(restored.is_authenticated());
        assert_eq!(restored.user().unwrap().email, "anna@sunrise.org");
    }

    #[test]
    fn test_missing_session_file_reads_as_signed_out() {
        let session = scratch_session("missing_file");
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_corrupt_session_file_reads_as_signed_out() {
        let path = std::env::temp_dir()
            .join("forecare-tests")
            .join("corrupt.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{not valid json").unwrap();

        let session = Session::open(SessionStore::at(&path)).unwrap();
        assert!(!session.is_authenticated());
    }
}
