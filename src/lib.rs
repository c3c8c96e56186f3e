//! Notehub.org API client
//!
//! Notehub hosts markdown notes addressed by an opaque note ID. Publishing
//! and updating require a PID/PSK credential pair issued at notehub.org/api;
//! every call carries an MD5 signature binding the request parameters to the
//! PSK. This crate wraps the three API operations and handles the work of
//! assembling parameters, hashing passwords, generating signatures and
//! checking response envelopes:
//! - `get_note`: fetch a note's text and metadata
//! - `create_note`: publish a note, optionally password-protected
//! - `update_note`: replace the text of a password-protected note
//!
//! # Example
//!
//! ```no_run
//! use notehub::{Credentials, Notehub};
//!
//! # async fn run() -> Result<(), notehub::NotehubError> {
//! let client = Notehub::new(Credentials::new("example_pid", "example_psk")?);
//!
//! let note = client.create_note("Test note 123.", Some("abc123")).await?;
//! let fetched = client.get_note(&note.id).await?;
//! assert_eq!(fetched.text, "Test note 123.");
//!
//! client.update_note(&note.id, "New note text.", "abc123").await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod request;
pub mod response;
pub mod signing;

pub use client::Notehub;
pub use error::NotehubError;
pub use request::{ApiRequest, NoteAuth};
pub use response::{Note, NoteStatistics};
pub use signing::{Credentials, PasswordHash};
