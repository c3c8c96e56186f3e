//! Outgoing request assembly.
//!
//! Every operation targets the single `/api/note` endpoint; what varies is
//! the HTTP method and the parameter list. Parameters are kept as an ordered
//! list and the signature is always computed last, over the operation's
//! signed fields, then appended after every other parameter.
//!
//! The endpoint spells the note-id parameter differently per method:
//! `noteID` on read, `noteId` on update. Both spellings are part of the
//! external contract.

use reqwest::Method;

use crate::error::NotehubError;
use crate::signing::{Credentials, PasswordHash};

/// Path of the note endpoint, relative to the API base URL.
pub const NOTE_ENDPOINT: &str = "/api/note";

/// Protocol version sent with every call.
pub const API_VERSION: &str = "1.1";

/// Whether a create call carries a password.
///
/// The raw password is masked as a [`PasswordHash`] at construction, so the
/// two request shapes differ only in the presence of the `password`
/// parameter.
#[derive(Debug, Clone)]
pub enum NoteAuth {
    Unauthenticated,
    WithPassword(PasswordHash),
}

impl NoteAuth {
    /// Hash an optional raw password. `None` yields `Unauthenticated`;
    /// `Some("")` is rejected rather than silently treated as no password.
    pub fn from_password(password: Option<&str>) -> Result<Self, NotehubError> {
        match password {
            None => Ok(Self::Unauthenticated),
            Some(raw) => Ok(Self::WithPassword(PasswordHash::new(raw)?)),
        }
    }
}

/// A fully-assembled API call, ready for the HTTP transport.
///
/// Parameters travel URL-encoded: in the query string for GET, as an
/// `application/x-www-form-urlencoded` body otherwise.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: &'static str,
    pub params: Vec<(&'static str, String)>,
}

impl ApiRequest {
    /// Look up a parameter by key. The transport sends the whole list; this
    /// exists for inspection and tests.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Build the read call for a note.
///
/// Signed fields: the note id.
pub fn get_note(
    credentials: &Credentials,
    note_id: &str,
) -> Result<ApiRequest, NotehubError> {
    if note_id.is_empty() {
        return Err(NotehubError::InvalidArgument(
            "note id must not be empty".to_string(),
        ));
    }
    let mut params = vec![
        ("noteID", note_id.to_string()),
        ("pid", credentials.pid().to_string()),
        ("version", API_VERSION.to_string()),
    ];
    params.push(("signature", credentials.sign(&[note_id])));
    Ok(ApiRequest {
        method: Method::GET,
        path: NOTE_ENDPOINT,
        params,
    })
}

/// Build the create call.
///
/// Signed fields: the note text. The password digest is sent as a parameter
/// but does not enter the signature input on create.
pub fn create_note(
    credentials: &Credentials,
    text: &str,
    auth: &NoteAuth,
) -> Result<ApiRequest, NotehubError> {
    if text.is_empty() {
        return Err(NotehubError::InvalidArgument(
            "note text must not be empty".to_string(),
        ));
    }
    let mut params = vec![
        ("note", text.to_string()),
        ("pid", credentials.pid().to_string()),
        ("version", API_VERSION.to_string()),
    ];
    if let NoteAuth::WithPassword(hash) = auth {
        params.push(("password", hash.as_str().to_string()));
    }
    params.push(("signature", credentials.sign(&[text])));
    Ok(ApiRequest {
        method: Method::POST,
        path: NOTE_ENDPOINT,
        params,
    })
}

/// Build the update call. Updates must be authorized, so the password is
/// mandatory here.
///
/// Signed fields, in order: note id, new text, password digest.
pub fn update_note(
    credentials: &Credentials,
    note_id: &str,
    text: &str,
    password: &PasswordHash,
) -> Result<ApiRequest, NotehubError> {
    if note_id.is_empty() {
        return Err(NotehubError::InvalidArgument(
            "note id must not be empty".to_string(),
        ));
    }
    if text.is_empty() {
        return Err(NotehubError::InvalidArgument(
            "note text must not be empty".to_string(),
        ));
    }
    let mut params = vec![
        ("noteId", note_id.to_string()),
        ("note", text.to_string()),
        ("pid", credentials.pid().to_string()),
        ("password", password.as_str().to_string()),
        ("version", API_VERSION.to_string()),
    ];
    params.push((
        "signature",
        credentials.sign(&[note_id, text, password.as_str()]),
    ));
    Ok(ApiRequest {
        method: Method::PUT,
        path: NOTE_ENDPOINT,
        params,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials::new("example_pid", "example_psk").unwrap()
    }

    #[test]
    fn test_get_note_params() {
        let req = get_note(&creds(), "2014 1 18 test-7").unwrap();
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path, "/api/note");
        assert_eq!(req.param("noteID"), Some("2014 1 18 test-7"));
        assert_eq!(req.param("pid"), Some("example_pid"));
        assert_eq!(req.param("version"), Some("1.1"));
        // md5("example_pid" + "example_psk" + "2014 1 18 test-7")
        assert_eq!(
            req.param("signature"),
            Some("292ba81cfa8ef7765accdac416ce99b0"),
        );
    }

    #[test]
    fn test_get_note_rejects_empty_id() {
        let err = get_note(&creds(), "").unwrap_err();
        assert!(matches!(err, NotehubError::InvalidArgument(_)));
    }

    #[test]
    fn test_signature_is_the_last_parameter() {
        for req in [
            get_note(&creds(), "id").unwrap(),
            create_note(&creds(), "text", &NoteAuth::Unauthenticated).unwrap(),
            update_note(
                &creds(),
                "id",
                "text",
                &PasswordHash::new("abc123").unwrap(),
            )
            .unwrap(),
        ] {
            assert_eq!(req.params.last().unwrap().0, "signature");
        }
    }

    #[test]
    fn test_create_note_without_password_omits_the_parameter() {
        let req =
            create_note(&creds(), "Test note 123.", &NoteAuth::Unauthenticated)
                .unwrap();
        assert_eq!(req.method, Method::POST);
        assert!(req.param("password").is_none());
        // md5("example_pid" + "example_psk" + "Test note 123.")
        assert_eq!(
            req.param("signature"),
            Some("2c9b31f98e59991f211355c7634ef980"),
        );
    }

    #[test]
    fn test_create_note_with_password_sends_digest_not_cleartext() {
        let auth = NoteAuth::from_password(Some("abc123")).unwrap();
        let req = create_note(&creds(), "Test note 123.", &auth).unwrap();
        assert_eq!(
            req.param("password"),
            Some("e99a18c428cb38d5f260853678922e03"),
        );
        assert!(req.params.iter().all(|(_, v)| !v.contains("abc123")));
        // The password digest does not change the create signature.
        let unauthenticated =
            create_note(&creds(), "Test note 123.", &NoteAuth::Unauthenticated)
                .unwrap();
        assert_eq!(req.param("signature"), unauthenticated.param("signature"));
    }

    #[test]
    fn test_create_note_rejects_empty_text() {
        let err = create_note(&creds(), "", &NoteAuth::Unauthenticated)
            .unwrap_err();
        assert!(matches!(err, NotehubError::InvalidArgument(_)));
    }

    #[test]
    fn test_empty_password_rejected_before_building() {
        let err = NoteAuth::from_password(Some("")).unwrap_err();
        assert!(matches!(err, NotehubError::InvalidArgument(_)));
    }

    #[test]
    fn test_update_note_params_and_signature() {
        let hash = PasswordHash::new("abc123").unwrap();
        let req =
            update_note(&creds(), "2014 1 18 test-7", "New note text.", &hash)
                .unwrap();
        assert_eq!(req.method, Method::PUT);
        assert_eq!(req.param("noteId"), Some("2014 1 18 test-7"));
        assert_eq!(req.param("note"), Some("New note text."));
        assert_eq!(
            req.param("password"),
            Some("e99a18c428cb38d5f260853678922e03"),
        );
        // md5(pid + psk + note_id + text + password_digest)
        assert_eq!(
            req.param("signature"),
            Some("4df1fd4a7569102962f54ee816d8c157"),
        );
    }

    #[test]
    fn test_update_note_rejects_empty_fields() {
        let hash = PasswordHash::new("abc123").unwrap();
        assert!(matches!(
            update_note(&creds(), "", "text", &hash).unwrap_err(),
            NotehubError::InvalidArgument(_),
        ));
        assert!(matches!(
            update_note(&creds(), "id", "", &hash).unwrap_err(),
            NotehubError::InvalidArgument(_),
        ));
    }
}
