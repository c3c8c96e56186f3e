//! Request signing for the Notehub wire contract.
//!
//! Notehub authenticates calls with an MD5 digest over the publisher
//! credentials and the signed request fields, concatenated in a fixed
//! per-operation order (documented on each builder in [`crate::request`]).
//! The server recomputes the digest with the same order, so the order must
//! never change. Note passwords are masked with the same digest before they
//! enter a request.

use md5::{Digest, Md5};

use crate::error::NotehubError;

/// Publisher credentials issued at notehub.org/api.
///
/// Both components must be non-empty; the pair is validated once here and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Credentials {
    pid: String,
    psk: String,
}

impl Credentials {
    pub fn new(
        pid: impl Into<String>,
        psk: impl Into<String>,
    ) -> Result<Self, NotehubError> {
        let pid = pid.into();
        let psk = psk.into();
        if pid.is_empty() {
            return Err(NotehubError::InvalidCredentials(
                "PID must not be empty".to_string(),
            ));
        }
        if psk.is_empty() {
            return Err(NotehubError::InvalidCredentials(
                "PSK must not be empty".to_string(),
            ));
        }
        Ok(Self { pid, psk })
    }

    /// The partner identifier, sent as the `pid` parameter.
    pub fn pid(&self) -> &str {
        &self.pid
    }

    /// Sign the given request fields.
    ///
    /// The digest input is `pid + psk + fields`, with the fields fed to the
    /// hasher in the order given. The PSK itself never leaves the process.
    pub fn sign(&self, fields: &[&str]) -> String {
        let mut hasher = Md5::new();
        hasher.update(self.pid.as_bytes());
        hasher.update(self.psk.as_bytes());
        for field in fields {
            hasher.update(field.as_bytes());
        }
        hex::encode(hasher.finalize())
    }
}

/// An MD5-masked note password.
///
/// Construction consumes the raw password and keeps only the hex digest, so
/// cleartext can never end up in an outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(password: &str) -> Result<Self, NotehubError> {
        if password.is_empty() {
            return Err(NotehubError::InvalidArgument(
                "password must not be empty".to_string(),
            ));
        }
        let mut hasher = Md5::new();
        hasher.update(password.as_bytes());
        Ok(Self(hex::encode(hasher.finalize())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Tests
// ============================================================================
