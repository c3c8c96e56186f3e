//! Decoding of Notehub API responses.
//!
//! Every call answers over HTTP with a JSON body; API-level failures are
//! flagged in a `status` envelope inside a 200 response rather than through
//! HTTP status codes. Success bodies carry the note fields next to the
//! envelope. Which fields the server fills depends on the operation (the
//! read call returns the full note, create returns the new id plus URLs,
//! update returns URLs only), so decoding happens in two steps: [`translate`]
//! checks status and envelope and yields a [`NotePayload`] with everything
//! optional, then [`NotePayload::into_note`] applies the per-operation
//! required-field rules.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::NotehubError;

/// The `status` envelope the API embeds in response bodies.
///
/// The v1.1 envelope carries `success` and `message`; a numeric `code` is
/// decoded when the server sends one and defaults to 0 otherwise.
#[derive(Debug, Deserialize)]
struct ApiStatus {
    success: bool,
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

/// Raw response body. Field spellings cover both the wire names (`noteID`,
/// `note`, `longURL`) and their plain equivalents.
#[derive(Debug, Deserialize)]
struct ApiBody {
    status: Option<ApiStatus>,
    #[serde(alias = "noteID", alias = "noteId", alias = "id")]
    note_id: Option<String>,
    #[serde(alias = "note")]
    text: Option<String>,
    title: Option<String>,
    publisher: Option<String>,
    #[serde(alias = "longURL")]
    long_url: Option<String>,
    #[serde(alias = "shortURL")]
    short_url: Option<String>,
    statistics: Option<NoteStatistics>,
}

/// Usage counters the server reports for a published note.
///
/// All values arrive as opaque server-formatted strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteStatistics {
    pub published: Option<String>,
    pub edited: Option<String>,
    pub views: Option<String>,
    pub publisher: Option<String>,
}

/// A note returned by a successful call.
#[derive(Debug, Clone, Serialize)]
pub struct Note {
    pub id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<NoteStatistics>,
}

/// Note fields decoded from a successful body, everything optional.
#[derive(Debug)]
pub(crate) struct NotePayload {
    note_id: Option<String>,
    text: Option<String>,
    title: Option<String>,
    publisher: Option<String>,
    long_url: Option<String>,
    short_url: Option<String>,
    statistics: Option<NoteStatistics>,
}

impl NotePayload {
    /// Finalize into a [`Note`], filling id/text from the call arguments
    /// where the operation's response legitimately omits them. A field with
    /// no server value and no fallback is a malformed response.
    pub(crate) fn into_note(
        self,
        fallback_id: Option<&str>,
        fallback_text: Option<&str>,
    ) -> Result<Note, NotehubError> {
        let id = self
            .note_id
            .or_else(|| fallback_id.map(str::to_string))
            .ok_or_else(|| {
                NotehubError::MalformedResponse(
                    "response carries no note id".to_string(),
                )
            })?;
        let text = self
            .text
            .or_else(|| fallback_text.map(str::to_string))
            .ok_or_else(|| {
                NotehubError::MalformedResponse(
                    "response carries no note text".to_string(),
                )
            })?;
        Ok(Note {
            id,
            text,
            title: self.title,
            publisher: self.publisher,
            long_url: self.long_url,
            short_url: self.short_url,
            statistics: self.statistics,
        })
    }
}

/// Map an HTTP status and body to a decoded payload or the matching error.
///
/// Non-2xx wins over everything; then the envelope verdict; then JSON shape.
/// A 2xx body without a `status` envelope is treated as successful; only a
/// present envelope can flag an API-level failure.
pub(crate) fn translate(
    status: StatusCode,
    body: &str,
) -> Result<NotePayload, NotehubError> {
    if !status.is_success() {
        return Err(NotehubError::HttpStatus(status.as_u16()));
    }

    let body: ApiBody = serde_json::from_str(body)
        .map_err(|e| NotehubError::MalformedResponse(e.to_string()))?;

    if let Some(status) = body.status {
        if !status.success {
            return Err(NotehubError::Api {
                code: status.code,
                message: status.message,
            });
        }
    }

    Ok(NotePayload {
        note_id: body.note_id,
        text: body.text,
        title: body.title,
        publisher: body.publisher,
        long_url: body.long_url,
        short_url: body.short_url,
        statistics: body.statistics,
    })
}

// ============================================================================
// Tests
// ============================================================================
