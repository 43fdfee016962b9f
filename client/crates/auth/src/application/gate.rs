//! Auth Gate
//!
//! The single entry point the presentation layer talks to. Owns the
//! current-identity state, funnels every mutation through the use cases,
//! and rejects a second operation while one is still resolving.

use std::sync::{Arc, PoisonError, RwLock};

use crate::application::config::AuthConfig;
use crate::application::login::{LoginInput, LoginUseCase};
use crate::application::sign_out::SignOutUseCase;
use crate::application::sign_up::{SignUpInput, SignUpUseCase};
use crate::application::verify_code::VerifyCodeUseCase;
use crate::domain::entity::identity::Identity;
use crate::domain::repository::{PendingRegistrationStore, SessionStore};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Auth gate
///
/// Mutating operations return `bool` (success) rather than an error: the
/// caller is a UI flow that only branches on outcome. Failures are logged
/// here with the severity each variant deserves.
pub struct AuthGate<S, P>
where
    S: SessionStore,
    P: PendingRegistrationStore,
{
    session_store: Arc<S>,
    pending_store: Arc<P>,
    config: Arc<AuthConfig>,
    current: RwLock<Option<Identity>>,
    // Held for the duration of each mutating operation. `try_lock` makes
    // a concurrent second submission fail fast instead of queueing.
    in_flight: tokio::sync::Mutex<()>,
}

impl<S, P> AuthGate<S, P>
where
    S: SessionStore,
    P: PendingRegistrationStore,
{
    pub fn new(session_store: Arc<S>, pending_store: Arc<P>, config: AuthConfig) -> Self {
        Self {
            session_store,
            pending_store,
            config: Arc::new(config),
            current: RwLock::new(None),
            in_flight: tokio::sync::Mutex::new(()),
        }
    }

    /// Seed the gate from the persisted session, if one exists.
    ///
    /// Called once at startup, before any routing decision.
    pub async fn restore(&self) -> AuthResult<()> {
        let stored = self.session_store.load().await?;
        if let Some(identity) = &stored {
            tracing::info!(email = %identity.email, role = %identity.role(), "Session restored");
        }
        *self.write_current() = stored;
        Ok(())
    }

    /// Log in with an email address.
    pub async fn login(&self, email: Email) -> bool {
        let Some(_guard) = self.begin("login") else {
            return false;
        };

        let use_case = LoginUseCase::new(self.session_store.clone(), self.config.clone());
        match use_case.execute(LoginInput { email }).await {
            Ok(identity) => {
                *self.write_current() = Some(identity);
                true
            }
            Err(e) => {
                e.log();
                false
            }
        }
    }

    /// Submit a registration, to be confirmed by [`verify_code`](Self::verify_code).
    pub async fn signup(&self, input: SignUpInput) -> bool {
        let Some(_guard) = self.begin("signup") else {
            return false;
        };

        let use_case = SignUpUseCase::new(self.pending_store.clone(), self.config.clone());
        match use_case.execute(input).await {
            Ok(()) => true,
            Err(e) => {
                e.log();
                false
            }
        }
    }

    /// Confirm the pending registration with a verification code.
    pub async fn verify_code(&self, code: &str) -> bool {
        let Some(_guard) = self.begin("verify_code") else {
            return false;
        };

        let use_case = VerifyCodeUseCase::new(
            self.session_store.clone(),
            self.pending_store.clone(),
            self.config.clone(),
        );
        match use_case.execute(code).await {
            Ok(identity) => {
                *self.write_current() = Some(identity);
                true
            }
            Err(e) => {
                e.log();
                false
            }
        }
    }

    /// End the session. Always leaves the gate anonymous, even if the
    /// backing store failed to clear.
    pub async fn logout(&self) {
        let use_case = SignOutUseCase::new(self.session_store.clone(), self.pending_store.clone());
        if let Err(e) = use_case.execute().await {
            e.log();
        }
        *self.write_current() = None;
    }

    /// The identity of the current session, if any.
    pub fn current_identity(&self) -> Option<Identity> {
        self.read_current().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read_current().is_some()
    }

    /// Whether a registration is waiting for its verification code.
    pub async fn has_pending(&self) -> bool {
        match self.pending_store.get().await {
            Ok(draft) => draft.is_some(),
            Err(e) => {
                e.log();
                false
            }
        }
    }

    /// Email of the pending registration, for the verification view.
    pub async fn pending_email(&self) -> Option<Email> {
        match self.pending_store.get().await {
            Ok(draft) => draft.map(|d| d.email),
            Err(e) => {
                e.log();
                None
            }
        }
    }

    fn begin(&self, operation: &'static str) -> Option<tokio::sync::MutexGuard<'_, ()>> {
        match self.in_flight.try_lock() {
            Ok(guard) => Some(guard),
            Err(_) => {
                AuthError::OperationInFlight.log();
                tracing::debug!(operation, "Rejected concurrent auth operation");
                None
            }
        }
    }

    fn read_current(&self) -> std::sync::RwLockReadGuard<'_, Option<Identity>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_current(&self) -> std::sync::RwLockWriteGuard<'_, Option<Identity>> {
        self.current
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
