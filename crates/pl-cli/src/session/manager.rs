use crate::client::{CliClientResult, Client, ClientError};
use crate::session::state::SessionState;
use crate::session::store::{PersistedSession, SessionStore};

use serde_json::Value;

/// Owns "who is logged in" on the client side.
///
/// All transitions run through this type. Consumers read the current
/// session through [`SessionManager::snapshot`] and never mutate it.
pub struct SessionManager {
    client: Client,
    store: SessionStore,
    state: SessionState,
    user: Option<Value>,
    token: Option<String>,
}

/// Read-only view of the current session
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub user: Option<Value>,
    pub token: Option<String>,
}

impl SessionManager {
    /// A fresh manager starts unauthenticated; call
    /// [`SessionManager::rehydrate`] to pick up a persisted session.
    pub fn new(client: Client, store: SessionStore) -> Self {
        Self {
            client,
            store,
            state: SessionState::Unauthenticated,
            user: None,
            token: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state,
            user: self.user.clone(),
            token: self.token.clone(),
        }
    }

    /// The underlying API client, for calls that need no session
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Create an account and enter the new session immediately
    pub async fn register(
        &mut self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> CliClientResult<Value> {
        self.state = SessionState::Authenticating;

        let result = self
            .client
            .signup(email, password, first_name, last_name)
            .await;

        self.finish_authentication(result)
    }

    /// Exchange credentials for a session
    pub async fn login(&mut self, email: &str, password: &str) -> CliClientResult<Value> {
        self.state = SessionState::Authenticating;

        let result = self.client.login(email, password).await;

        self.finish_authentication(result)
    }

    /// Drop the session, in memory and on disk.
    ///
    /// Idempotent: logging out while already logged out is not an error.
    /// The in-memory session is gone even if removing the file fails.
    pub fn logout(&mut self) -> CliClientResult<()> {
        self.clear_session()
    }

    /// Restore a persisted session, then revalidate it against the server.
    ///
    /// The persisted snapshot is visible while the round trip is in
    /// flight. A definitive rejection ends the session and leaves the
    /// manager unauthenticated, which is a successful outcome here. A
    /// transport failure keeps the snapshot, so a flaky network cannot
    /// destroy a still-valid session, and surfaces the error.
    pub async fn rehydrate(&mut self) -> CliClientResult<()> {
        let Some(persisted) = self.store.load() else {
            self.state = SessionState::Unauthenticated;
            return Ok(());
        };

        self.state = SessionState::Rehydrating;
        self.token = Some(persisted.token.clone());
        self.user = Some(persisted.user);

        match self.client.me(&persisted.token).await {
            Ok(user) => {
                self.store.save(&PersistedSession {
                    token: persisted.token,
                    user: user.clone(),
                })?;
                self.user = Some(user);
                self.state = SessionState::Authenticated;
                Ok(())
            }
            Err(ClientError::Api { ref code, .. }) if code == "UNAUTHORIZED" => {
                self.clear_session()
            }
            Err(e) => {
                self.state = SessionState::Authenticated;
                Err(e)
            }
        }
    }

    /// Fetch a fresh copy of the logged-in identity
    pub async fn current_user(&mut self) -> CliClientResult<Value> {
        let token = self.require_token()?;

        match self.client.me(&token).await {
            Ok(user) => {
                self.refresh_user(token, user.clone())?;
                Ok(user)
            }
            Err(e) => {
                self.clear_if_rejected(&e);
                Err(e)
            }
        }
    }

    /// Update the logged-in user's profile and refresh the cached snapshot
    pub async fn update_profile(
        &mut self,
        first_name: Option<&str>,
        last_name: Option<&str>,
        bio: Option<&str>,
        can_teach: Option<&[String]>,
        want_to_learn: Option<&[String]>,
    ) -> CliClientResult<Value> {
        let token = self.require_token()?;
        let user_id = self.require_user_id()?;

        let result = self
            .client
            .update_user(
                &user_id,
                &token,
                first_name,
                last_name,
                bio,
                can_teach,
                want_to_learn,
            )
            .await;

        match result {
            Ok(body) => {
                // The server wraps the updated profile as {"user": {...}}
                let user = body.get("user").cloned().unwrap_or(body);
                self.refresh_user(token, user.clone())?;
                Ok(user)
            }
            Err(e) => {
                self.clear_if_rejected(&e);
                Err(e)
            }
        }
    }

    /// Connect the logged-in user with another user
    pub async fn connect(&mut self, target_id: &str) -> CliClientResult<Value> {
        let token = self.require_token()?;

        match self.client.connect(&token, target_id).await {
            Ok(body) => Ok(body),
            Err(e) => {
                self.clear_if_rejected(&e);
                Err(e)
            }
        }
    }

    /// Land an authentication attempt: success enters the session,
    /// any failure returns the manager to unauthenticated.
    fn finish_authentication(&mut self, result: CliClientResult<Value>) -> CliClientResult<Value> {
        match self.try_enter_session(result) {
            Ok(user) => Ok(user),
            Err(e) => {
                self.state = SessionState::Unauthenticated;
                self.user = None;
                self.token = None;
                Err(e)
            }
        }
    }

    fn try_enter_session(&mut self, result: CliClientResult<Value>) -> CliClientResult<Value> {
        let body = result?;

        let token = body
            .get("token")
            .and_then(Value::as_str)
            .ok_or_else(|| ClientError::session("Authentication response carried no token"))?
            .to_string();
        let user = body
            .get("user")
            .cloned()
            .ok_or_else(|| ClientError::session("Authentication response carried no user"))?;

        self.store.save(&PersistedSession {
            token: token.clone(),
            user: user.clone(),
        })?;

        self.token = Some(token);
        self.user = Some(user.clone());
        self.state = SessionState::Authenticated;

        Ok(user)
    }

    /// Replace the cached user and persist it alongside the token
    fn refresh_user(&mut self, token: String, user: Value) -> CliClientResult<()> {
        self.store.save(&PersistedSession {
            token: token.clone(),
            user: user.clone(),
        })?;
        self.token = Some(token);
        self.user = Some(user);

        Ok(())
    }

    /// A rejected token ends the session; other failures leave it intact
    fn clear_if_rejected(&mut self, error: &ClientError) {
        if let ClientError::Api { code, .. } = error
            && code == "UNAUTHORIZED"
        {
            if let Err(e) = self.clear_session() {
                eprintln!("Warning: failed to clear session file: {}", e);
            }
        }
    }

    fn clear_session(&mut self) -> CliClientResult<()> {
        self.state = SessionState::Unauthenticated;
        self.user = None;
        self.token = None;

        self.store.clear()
    }

    fn require_token(&self) -> CliClientResult<String> {
        if self.state == SessionState::Authenticated
            && let Some(token) = &self.token
        {
            Ok(token.clone())
        } else {
            Err(ClientError::session("Not logged in"))
        }
    }

    fn require_user_id(&self) -> CliClientResult<String> {
        self.user
            .as_ref()
            .and_then(|user| user.get("id"))
            .and_then(Value::as_str)
            .map(String::from)
            .ok_or_else(|| ClientError::session("No identity in session"))
    }
}
