//! Session manager
//!
//! This service owns the in-memory session state and mediates every
//! credential-changing operation: login, registration, logout and profile
//! updates. Successful operations persist the session record so the
//! authentication state survives restarts; failed operations leave the
//! session exactly as it was before the call.

use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};
use tracing::{debug, info, warn};

use crate::models::user::{
    RegisterRequest, UpdateProfileRequest, UpdateUserDetailRequest, User, UserDetail,
};
use crate::services::backend::BackendClient;
use crate::state::session::{Session, SessionRecord};
use crate::state::storage::SessionStore;
use crate::utils::errors::{ApiError, AppError, Result};
use crate::utils::validation;

/// Session manager for the authenticated user
#[derive(Clone)]
pub struct SessionManager {
    backend: BackendClient,
    store: SessionStore,
    session: Arc<RwLock<Session>>,
    /// Rejects a credential-changing operation while another is in flight
    op_guard: Arc<Mutex<()>>,
}

impl SessionManager {
    /// Create a new SessionManager instance, starting logged out
    pub fn new(backend: BackendClient, store: SessionStore) -> Self {
        Self {
            backend,
            store,
            session: Arc::new(RwLock::new(Session::logged_out())),
            op_guard: Arc::new(Mutex::new(())),
        }
    }

    /// Restore a persisted session on app start. Returns whether a session
    /// was restored. A corrupted record restores to logged-out.
    pub async fn init(&self) -> Result<bool> {
        match self.store.load().await? {
            Some(record) => {
                info!(user_id = record.user.id, "Restored persisted session");
                *self.session.write().await = Session::restore(record);
                Ok(true)
            }
            None => {
                debug!("No persisted session to restore");
                Ok(false)
            }
        }
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_authenticated()
    }

    pub async fn current_user(&self) -> Option<User> {
        self.session.read().await.user().cloned()
    }

    pub async fn token(&self) -> Option<String> {
        self.session.read().await.token().map(str::to_owned)
    }

    /// Check whether a session record exists on disk
    pub async fn has_persisted_session(&self) -> bool {
        self.store.exists().await
    }

    /// Log in with email and password. On success the session record is
    /// persisted and the in-memory state replaced; on any failure both are
    /// untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let _guard = self.try_begin_operation()?;
        self.login_inner(email, password).await
    }

    /// Register a new account and immediately log in with the same
    /// credentials, so the caller ends authenticated in one combined call.
    /// Duplicate email and duplicate username surface as distinct errors.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<User> {
        let _guard = self.try_begin_operation()?;
        validation::validate_registration(email, password, first_name, last_name)?;

        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            username: derive_username(email),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        };

        self.backend.register(&request).await?;
        info!(email = email, "Registration accepted, performing initial login");
        self.login_inner(email, password).await
    }

    /// Clear the persisted record and the in-memory state. Idempotent:
    /// calling it while logged out is a no-op.
    pub async fn logout(&self) -> Result<()> {
        let _guard = self.try_begin_operation()?;

        self.store.clear().await?;
        self.session.write().await.clear();
        info!("Logged out");
        Ok(())
    }

    /// Update profile fields. Requires an authenticated session and fails
    /// without touching the network when no token is stored. Fields missing
    /// from the backend response keep their current values.
    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<User> {
        let _guard = self.try_begin_operation()?;
        let token = self.require_token().await?;

        let patch = self.backend.update_profile(&token, request).await?;

        let mut session = self.session.write().await;
        let mut user = session.user().cloned().ok_or_else(|| {
            AppError::NotAuthenticated("no user profile in session".to_string())
        })?;
        user.apply(patch);
        session.replace_user(user.clone());

        if let Some(record) = session.to_record() {
            self.store.save(&record).await?;
        }

        info!(user_id = user.id, "Profile updated");
        Ok(user)
    }

    /// Update extended profile detail. Requires an authenticated session;
    /// the returned detail record is not part of the session state.
    pub async fn update_user_detail(
        &self,
        request: &UpdateUserDetailRequest,
    ) -> Result<UserDetail> {
        let _guard = self.try_begin_operation()?;
        let token = self.require_token().await?;

        let detail = self.backend.update_user_detail(&token, request).await?;
        info!(user_id = detail.user_id, "User detail updated");
        Ok(detail)
    }

    async fn login_inner(&self, email: &str, password: &str) -> Result<User> {
        debug!(email = email, "Logging in");

        let data = self.backend.login(email, password).await.map_err(|e| {
            warn!(email = email, error = %e, "Login failed");
            e
        })?;

        if data.token.is_empty() {
            return Err(AppError::Api(ApiError::InvalidResponse(
                "login response carried an empty token".to_string(),
            )));
        }

        // Persist first, then swap the in-memory state, so a storage failure
        // leaves the previous session intact.
        let record = SessionRecord {
            token: data.token,
            user: data.user,
        };
        self.store.save(&record).await?;

        let user = record.user.clone();
        self.session
            .write()
            .await
            .establish(record.token, record.user);

        info!(user_id = user.id, username = %user.username, "Login succeeded");
        Ok(user)
    }

    async fn require_token(&self) -> Result<String> {
        self.session
            .read()
            .await
            .token()
            .map(str::to_owned)
            .ok_or_else(|| AppError::NotAuthenticated("no session token stored".to_string()))
    }

    fn try_begin_operation(&self) -> Result<OwnedMutexGuard<()>> {
        self.op_guard
            .clone()
            .try_lock_owned()
            .map_err(|_| AppError::OperationInFlight)
    }
}

/// Derive the account username from the email local part, reduced to the
/// characters the registration endpoint accepts.
fn derive_username(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    local
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .take(20)
        .collect()
}
