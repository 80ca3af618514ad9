use crate::credentials::{CredentialStore, Credentials};
use crate::error::{MusigraphError, Result};
use crate::models::{SessionResponse, TokenResponse};
use crate::signature::build_signature;
use serde_json::Value;

pub const API_ROOT: &str = "http://ws.audioscrobbler.com/2.0/";
pub const AUTH_ROOT: &str = "http://www.last.fm/api/auth/";

/// Blocking HTTP GET. Implementations return the body whatever the status
/// code is, since the service reports errors inside JSON bodies.
pub trait Transport {
    fn get(&self, url: &str, query: &[(String, String)]) -> Result<String>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str, query: &[(String, String)]) -> Result<String> {
        (**self).get(url, query)
    }
}

/// Presents the authorization URL to the operator and blocks until they
/// confirm that access was granted.
pub trait Authorizer {
    fn authorize(&mut self, url: &str) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Configured,
    Authorizing { token: String },
    SessionEstablished,
}

pub struct LastFmClient<T: Transport> {
    transport: T,
    credentials: Credentials,
    state: AuthState,
}

impl<T: Transport> LastFmClient<T> {
    pub fn new(transport: T, credentials: Credentials) -> Self {
        Self {
            transport,
            credentials,
            state: AuthState::Configured,
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    /// Issues `method` against the API root. `format=json` is appended after
    /// signing so it never takes part in the signature.
    pub fn get(&self, method: &str, signed: bool, extra: &[(&str, String)]) -> Result<Value> {
        let mut params: Vec<(String, String)> = vec![
            ("method".to_string(), method.to_string()),
            ("api_key".to_string(), self.credentials.api_key.clone()),
        ];
        params.extend(
            extra
                .iter()
                .map(|(key, value)| (key.to_string(), value.clone())),
        );

        if signed {
            let signature = build_signature(&params, &self.credentials.secret);
            params.push(("api_sig".to_string(), signature));
        }
        params.push(("format".to_string(), "json".to_string()));

        tracing::debug!(method, signed, "Last.fm request");
        let body = self.transport.get(API_ROOT, &params)?;
        let response: Value = serde_json::from_str(&body)?;

        if let Some(code) = response.get("error") {
            let message = response
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            return Err(MusigraphError::Api {
                code: error_code(code),
                message,
            });
        }

        Ok(response)
    }

    pub fn authorization_url(&self, token: &str) -> String {
        format!(
            "{}?api_key={}&token={}",
            AUTH_ROOT,
            urlencoding::encode(&self.credentials.api_key),
            urlencoding::encode(token)
        )
    }

    /// Moves the client into `SessionEstablished`. A stored session is reused
    /// without touching the network; otherwise the interactive handshake runs
    /// and the new session is written back through `store` before returning.
    pub fn establish_session<A: Authorizer + ?Sized>(
        &mut self,
        store: &mut CredentialStore,
        authorizer: &mut A,
    ) -> Result<()> {
        if self.state == AuthState::SessionEstablished {
            return Ok(());
        }

        if self.credentials.has_session() {
            tracing::debug!(username = %self.credentials.username, "reusing stored session");
            self.state = AuthState::SessionEstablished;
            return Ok(());
        }

        let token = self.request_token()?;
        self.state = AuthState::Authorizing {
            token: token.clone(),
        };

        authorizer.authorize(&self.authorization_url(&token))?;

        let session = self.fetch_session(&token)?;
        self.credentials.session_key = session.key;
        self.credentials.username = session.name;
        store.persist(&self.credentials)?;

        tracing::info!(username = %self.credentials.username, "Last.fm session established");
        self.state = AuthState::SessionEstablished;
        Ok(())
    }

    fn request_token(&self) -> Result<String> {
        let response = self.get("auth.gettoken", true, &[])?;
        let parsed: TokenResponse = serde_json::from_value(response)
            .map_err(|e| MusigraphError::MalformedResponse(format!("auth.gettoken: {e}")))?;
        Ok(parsed.token)
    }

    fn fetch_session(&self, token: &str) -> Result<crate::models::Session> {
        let response = self.get("auth.getSession", true, &[("token", token.to_string())])?;
        let parsed: SessionResponse = serde_json::from_value(response)
            .map_err(|e| MusigraphError::MalformedResponse(format!("auth.getSession: {e}")))?;
        Ok(parsed.session)
    }
}

fn error_code(value: &Value) -> i64 {
    value
        .as_i64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
        .unwrap_or_default()
}
