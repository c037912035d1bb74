#[cfg(test)]
#[path = "session_manager_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::bearer;
use crate::domain::models::Action;
use crate::domain::models::AuthError;
use crate::domain::models::ClientError;
use crate::domain::models::LoginForm;
use crate::domain::models::LoginReply;
use crate::domain::models::LoginRequest;
use crate::domain::models::Session;

/// Owns the coach session. Other components only read it through
/// `is_authenticated` and `auth_header`.
pub struct SessionManager {
    session: Session,
    form: LoginForm,
    pending: bool,
}

impl SessionManager {
    pub fn new(requested_name: &str) -> SessionManager {
        return SessionManager {
            session: Session::default(),
            form: LoginForm {
                password: "".to_string(),
                requested_name: requested_name.to_string(),
            },
            pending: false,
        };
    }

    pub fn session(&self) -> &Session {
        return &self.session;
    }

    pub fn form(&self) -> &LoginForm {
        return &self.form;
    }

    pub fn is_authenticated(&self) -> bool {
        return self.session.authenticated();
    }

    pub fn is_pending(&self) -> bool {
        return self.pending;
    }

    pub fn auth_header(&self) -> Result<String, ClientError> {
        match self.session.token() {
            Some(token) => return Ok(bearer(token)),
            None => return Err(ClientError::Unauthenticated),
        }
    }

    /// Queues a login attempt. Returns false if nothing was sent because the
    /// password is blank or an attempt is already in flight.
    pub fn login(&mut self, password: &str, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        if self.pending || password.trim().is_empty() {
            return Ok(false);
        }

        self.form.password = password.to_string();
        self.pending = true;
        tx.send(Action::Login(LoginRequest {
            password: self.form.password.to_string(),
            requested_name: self.form.requested_name.to_string(),
        }))?;

        return Ok(true);
    }

    /// Applies the login response. On failure the session is left signed out
    /// and the typed password is kept.
    pub fn complete_login(
        &mut self,
        result: Result<LoginReply, ClientError>,
    ) -> Result<Session, AuthError> {
        self.pending = false;

        match result {
            Ok(reply) => {
                tracing::debug!(coach = %reply.coach_name, "coach signed in");
                self.session.establish(&reply.token, &reply.coach_name);
                self.form.password = "".to_string();
                return Ok(self.session.clone());
            }
            Err(err) => {
                tracing::error!(error = %err, "coach login failed");
                let auth_err = AuthError::from(err);
                self.session.last_auth_error = Some(auth_err.to_string());
                return Err(auth_err);
            }
        }
    }

    /// Drops the token and coach identity. The backend keeps no session state
    /// to tear down.
    pub fn logout(&mut self) {
        tracing::debug!(coach = %self.session.coach_name, "coach signed out");
        self.session.clear();
        self.form.password = "".to_string();
    }
}
