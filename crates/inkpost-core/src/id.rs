//! Record ID generation for inkpost
//!
//! ID format:
//! - Posts: `ip-<suffix>`, comments: `ic-<suffix>`
//! - Hash scheme (default): adaptive-length SHA-256 hex, e.g. `ip-a1b2`
//! - ULID scheme: lowercase ULID, e.g. `ip-01hx...`

use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{InkpostError, Result};

/// ID generation scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdScheme {
    /// Hash-based IDs (default)
    #[default]
    Hash,
    /// ULID-based IDs
    Ulid,
}

impl FromStr for IdScheme {
    type Err = InkpostError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "hash" => Ok(IdScheme::Hash),
            "ulid" => Ok(IdScheme::Ulid),
            other => Err(InkpostError::invalid_value("ID scheme", other)),
        }
    }
}

/// Which kind of record an ID names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Post,
    Comment,
}

impl IdKind {
    pub const fn prefix(self) -> &'static str {
        match self {
            IdKind::Post => "ip-",
            IdKind::Comment => "ic-",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            IdKind::Post => "post ID",
            IdKind::Comment => "comment ID",
        }
    }
}

/// A validated record ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(String);

impl RecordId {
    /// Minimum hash length (4 hex chars)
    pub const MIN_HASH_LEN: usize = 4;

    /// Maximum hash length (64 hex chars for SHA256)
    pub const MAX_HASH_LEN: usize = 64;

    /// Parse and validate an ID of the given kind
    pub fn parse(kind: IdKind, id: &str) -> Result<Self> {
        let suffix = id
            .strip_prefix(kind.prefix())
            .ok_or_else(|| InkpostError::invalid_value(kind.label(), id))?;

        if suffix.is_empty() || !suffix.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(InkpostError::invalid_value(kind.label(), id));
        }

        Ok(RecordId(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Generate a hash-based ID, lengthening the hash until `is_taken` says it is unused
    pub fn generate_hash<F>(kind: IdKind, seed: &str, mut is_taken: F) -> Result<Self>
    where
        F: FnMut(&str) -> Result<bool>,
    {
        let timestamp = Utc::now().timestamp_nanos_opt().unwrap_or(0);
        let input = format!("{}:{}:{}", seed, timestamp, ulid::Ulid::new());

        let mut hasher = Sha256::new();
        hasher.update(input.as_bytes());
        let full_hex = hex::encode(hasher.finalize());

        let mut len = Self::MIN_HASH_LEN;
        loop {
            let candidate = format!("{}{}", kind.prefix(), &full_hex[..len]);
            if len >= Self::MAX_HASH_LEN || !is_taken(&candidate)? {
                return Ok(RecordId(candidate));
            }
            len += 1;
        }
    }

    /// Generate a ULID-based ID
    pub fn generate_ulid(kind: IdKind) -> Self {
        let ulid = ulid::Ulid::new();
        RecordId(format!(
            "{}{}",
            kind.prefix(),
            ulid.to_string().to_lowercase()
        ))
    }

    /// Generate a new ID using the specified scheme
    pub fn generate<F>(scheme: IdScheme, kind: IdKind, seed: &str, is_taken: F) -> Result<Self>
    where
        F: FnMut(&str) -> Result<bool>,
    {
        match scheme {
            IdScheme::Hash => Self::generate_hash(kind, seed, is_taken),
            IdScheme::Ulid => Ok(Self::generate_ulid(kind)),
        }
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
