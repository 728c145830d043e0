use crate::{CacheInvalidator, DirectoryClient, DirectoryError, Result as DirectoryResult};

use atrium_core::{User, UserAttributes};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;

/// Request envelope the directory expects for member writes.
#[derive(Serialize)]
struct UserEnvelope<'a> {
    user: &'a UserAttributes,
}

/// HTTP client for the member directory's JSON API.
pub struct HttpDirectoryClient {
    pub base_url: String,
    client: ReqwestClient,
    cache: Option<Arc<dyn CacheInvalidator>>,
}

impl HttpDirectoryClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `base_url` - Directory URL (e.g., "https://directory.example.com")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
            cache: None,
        }
    }

    /// Create a client with a per-request timeout, typically taken from
    /// configuration.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> DirectoryResult<Self> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::builder().timeout(timeout).build()?,
            cache: None,
        })
    }

    /// Attach a cache hook to be flushed after every successful member save.
    pub fn with_cache(mut self, cache: Arc<dyn CacheInvalidator>) -> Self {
        self.cache = Some(cache);
        self
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Fetch a single member. 404 means "nobody there", not a fault.
    async fn fetch_user(&self, req: reqwest::RequestBuilder) -> DirectoryResult<Option<User>> {
        let response = req.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(DirectoryError::api(
                status.as_u16(),
                "unexpected directory response".to_string(),
            ));
        }

        let body: Value = response.json().await?;
        Ok(Some(unwrap_user(&body)?))
    }

    /// Execute a member write and flush the cache hook on success.
    async fn save_user(&self, req: reqwest::RequestBuilder) -> DirectoryResult<User> {
        let response = req.send().await?;
        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success() {
            if let Some(errors) = body.get("errors") {
                return Err(DirectoryError::validation(errors.to_string()));
            }
            let message = body
                .get("error")
                .and_then(|e| e.as_str())
                .unwrap_or("unexpected directory response")
                .to_string();
            return Err(DirectoryError::api(status.as_u16(), message));
        }

        let user = unwrap_user(&body)?;
        self.decache();
        Ok(user)
    }

    /// Best-effort flush of the process-wide cache after a member save.
    fn decache(&self) {
        if let Some(cache) = &self.cache {
            debug!("member saved; flushing cache");
            cache.flush_all();
        }
    }
}

#[async_trait]
impl DirectoryClient for HttpDirectoryClient {
    async fn find_by_uid(&self, uid: &str) -> DirectoryResult<Option<User>> {
        let req = self.request(Method::GET, &format!("/api/users/{}", uid));
        self.fetch_user(req).await
    }

    async fn find_by_email(&self, email: &str) -> DirectoryResult<Option<User>> {
        let req = self
            .request(Method::GET, "/api/users")
            .query(&[("email", email)]);

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::api(
                status.as_u16(),
                "unexpected directory response".to_string(),
            ));
        }

        let body: Value = response.json().await?;
        let first = body
            .get("users")
            .and_then(|users| users.as_array())
            .and_then(|users| users.first())
            .cloned();

        match first {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, attrs: &UserAttributes) -> DirectoryResult<User> {
        let req = self
            .request(Method::POST, "/api/users")
            .json(&UserEnvelope { user: attrs });
        self.save_user(req).await
    }

    async fn update(&self, uid: &str, attrs: &UserAttributes) -> DirectoryResult<User> {
        let req = self
            .request(Method::PUT, &format!("/api/users/{}", uid))
            .json(&UserEnvelope { user: attrs });
        self.save_user(req).await
    }

    async fn authenticate_by_token(&self, token: &str) -> DirectoryResult<Option<User>> {
        let req = self.request(Method::GET, &format!("/api/authenticate/{}", token));
        let response = req.send().await?;

        if !response.status().is_success() {
            return Ok(None);
        }

        // A token the directory cannot place sometimes comes back as a
        // malformed body rather than a clean 404. Either way the answer is
        // "credentials not recognised".
        match response.json::<Value>().await {
            Ok(body) => Ok(unwrap_user(&body).ok()),
            Err(_) => Ok(None),
        }
    }

    async fn deauthenticate(&self, token: &str) -> DirectoryResult<()> {
        let req = self.request(Method::GET, &format!("/api/deauthenticate/{}", token));
        let response = req.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            Err(DirectoryError::api(
                status.as_u16(),
                "deauthentication failed".to_string(),
            ))
        }
    }
}

/// Pull the member out of the directory's `{"user": {...}}` envelope.
fn unwrap_user(body: &Value) -> DirectoryResult<User> {
    let value = body.get("user").cloned().unwrap_or(Value::Null);
    Ok(serde_json::from_value(value)?)
}
