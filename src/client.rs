//! The Notehub client facade.

use reqwest::Method;
use tracing::debug;

use crate::error::NotehubError;
use crate::request::{self, ApiRequest, NoteAuth};
use crate::response::{self, Note, NotePayload};
use crate::signing::{Credentials, PasswordHash};

/// The production API host.
pub const DEFAULT_BASE_URL: &str = "http://notehub.org";

/// Client for the Notehub.org API.
///
/// Holds the publisher credentials and a reqwest client; no other state is
/// retained between calls, so calls are independent and order-free. Each
/// method performs exactly one HTTP round trip and returns the decoded note
/// or the first error encountered; there are no retries. Timeouts are
/// whatever the transport is configured with.
pub struct Notehub {
    credentials: Credentials,
    base_url: String,
    http: reqwest::Client,
}

impl Notehub {
    /// Client against the production host.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_base_url(credentials, DEFAULT_BASE_URL)
    }

    /// Client against a different host. Used by tests and self-hosted
    /// deployments.
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            credentials,
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Fetch a note by its ID.
    ///
    /// Returns the note text plus whatever metadata the server publishes
    /// (title, URLs, view statistics).
    pub async fn get_note(&self, note_id: &str) -> Result<Note, NotehubError> {
        let req = request::get_note(&self.credentials, note_id)?;
        let payload = self.dispatch(&req).await?;
        payload.into_note(Some(note_id), None)
    }

    /// Publish a note with the given text.
    ///
    /// A note created with a password can be updated later; without one it
    /// is immutable. The returned note carries the server-assigned id.
    pub async fn create_note(
        &self,
        text: &str,
        password: Option<&str>,
    ) -> Result<Note, NotehubError> {
        let auth = NoteAuth::from_password(password)?;
        let req = request::create_note(&self.credentials, text, &auth)?;
        let payload = self.dispatch(&req).await?;
        payload.into_note(None, Some(text))
    }

    /// Replace the text of a note that was created with a password.
    pub async fn update_note(
        &self,
        note_id: &str,
        text: &str,
        password: &str,
    ) -> Result<Note, NotehubError> {
        let hash = PasswordHash::new(password)?;
        let req = request::update_note(&self.credentials, note_id, text, &hash)?;
        let payload = self.dispatch(&req).await?;
        payload.into_note(Some(note_id), Some(text))
    }

    /// Perform one HTTP round trip and translate the raw response.
    async fn dispatch(&self, req: &ApiRequest) -> Result<NotePayload, NotehubError> {
        let url = format!("{}{}", self.base_url, req.path);
        debug!(method = %req.method, %url, "calling notehub api");

        let builder = if req.method == Method::GET {
            self.http.get(&url).query(&req.params)
        } else {
            self.http.request(req.method.clone(), &url).form(&req.params)
        };

        let resp = builder.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        response::translate(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Notehub {
        Notehub::new(Credentials::new("example_pid", "example_psk").unwrap())
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let client = Notehub::with_base_url(
            Credentials::new("example_pid", "example_psk").unwrap(),
            "http://localhost:8080/",
        );
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[tokio::test]
    async fn test_empty_note_id_fails_without_network() {
        // Port 1, nothing listening; validation must trip first.
        let client = Notehub::with_base_url(
            Credentials::new("example_pid", "example_psk").unwrap(),
            "http://127.0.0.1:1",
        );
        let err = client.get_note("").await.unwrap_err();
        assert!(matches!(err, NotehubError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_update_with_empty_password_fails_without_network() {
        let client = Notehub::with_base_url(
            Credentials::new("example_pid", "example_psk").unwrap(),
            "http://127.0.0.1:1",
        );
        let err = client
            .update_note("2014 1 18 test-7", "New note text.", "")
            .await
            .unwrap_err();
        assert!(matches!(err, NotehubError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_surfaces_transport_error() {
        let client = Notehub::with_base_url(
            Credentials::new("example_pid", "example_psk").unwrap(),
            "http://127.0.0.1:1",
        );
        let err = client.get_note("2014 1 18 test-7").await.unwrap_err();
        assert!(matches!(err, NotehubError::Transport(_)));
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(client().base_url, "http://notehub.org");
    }
}
