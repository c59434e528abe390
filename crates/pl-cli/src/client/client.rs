use crate::client::error::{ClientError, Result as CliClientResult};

use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the PeerLearn REST API.
///
/// Thin and stateless: it shapes requests and decodes responses, and
/// leaves deciding who is logged in to [`crate::session::SessionManager`].
/// Authenticated calls take the bearer token explicitly.
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new API client for the given server
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Build a request, attaching the bearer token when one is given
    fn request(&self, method: Method, path: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, &url);

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        request
    }

    /// Send a request and decode the JSON body.
    ///
    /// Non-2xx responses become [`ClientError::Api`], using the server's
    /// `{"error": {...}}` body when it parses and a synthesized code when
    /// it does not. A success response that is not valid JSON is an error.
    async fn execute(&self, request: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let body: Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) if status.is_success() => return Err(ClientError::from_json(e)),
            Err(_) => Value::Null,
        };

        if !status.is_success() {
            if let Some(error) = body.get("error") {
                let code = error
                    .get("code")
                    .and_then(Value::as_str)
                    .unwrap_or("UNKNOWN")
                    .to_string();
                let message = error
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("Unknown error")
                    .to_string();

                return Err(ClientError::api_error(code, message));
            }

            return Err(ClientError::api_error(
                "UNKNOWN".to_string(),
                format!("HTTP {}", status),
            ));
        }

        Ok(body)
    }

    // ========================================================================
    // Accounts
    // ========================================================================

    /// Create an account. Returns `{"token": ..., "user": {...}}`.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct SignupRequest<'a> {
            email: &'a str,
            password: &'a str,
            first_name: &'a str,
            last_name: &'a str,
        }

        let body = SignupRequest {
            email,
            password,
            first_name,
            last_name,
        };

        let request = self
            .request(Method::POST, "/api/users/signup", None)
            .json(&body);

        self.execute(request).await
    }

    /// Exchange credentials for a token. Returns `{"token": ..., "user": {...}}`.
    pub async fn login(&self, email: &str, password: &str) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let body = LoginRequest { email, password };

        let request = self
            .request(Method::POST, "/api/users/login", None)
            .json(&body);

        self.execute(request).await
    }

    /// Fetch the identity behind the token
    pub async fn me(&self, token: &str) -> CliClientResult<Value> {
        let request = self.request(Method::GET, "/api/users/me", Some(token));

        self.execute(request).await
    }

    // ========================================================================
    // Users
    // ========================================================================

    /// List all users
    pub async fn list_users(&self) -> CliClientResult<Value> {
        let request = self.request(Method::GET, "/api/users", None);

        self.execute(request).await
    }

    /// Get a single user by id
    pub async fn get_user(&self, id: &str) -> CliClientResult<Value> {
        let request = self.request(Method::GET, &format!("/api/users/{}", id), None);

        self.execute(request).await
    }

    /// Update the profile of the user behind the token.
    ///
    /// Absent fields are left out of the request body entirely, so the
    /// server keeps their current values.
    #[allow(clippy::too_many_arguments)]
    pub async fn update_user(
        &self,
        id: &str,
        token: &str,
        first_name: Option<&str>,
        last_name: Option<&str>,
        bio: Option<&str>,
        can_teach: Option<&[String]>,
        want_to_learn: Option<&[String]>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct UpdateUserRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            first_name: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            last_name: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            bio: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            can_teach: Option<&'a [String]>,
            #[serde(skip_serializing_if = "Option::is_none")]
            want_to_learn: Option<&'a [String]>,
        }

        let body = UpdateUserRequest {
            first_name,
            last_name,
            bio,
            can_teach,
            want_to_learn,
        };

        let request = self
            .request(Method::PUT, &format!("/api/users/{}", id), Some(token))
            .json(&body);

        self.execute(request).await
    }

    /// Add another user to the caller's connection list
    pub async fn connect(&self, token: &str, target_id: &str) -> CliClientResult<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct ConnectRequest<'a> {
            target_id: &'a str,
        }

        let body = ConnectRequest { target_id };

        let request = self
            .request(Method::POST, "/api/users/connect", Some(token))
            .json(&body);

        self.execute(request).await
    }
}
