//! Model Artifact - content-addressable reference to a trained model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The trained model produced by a run.
///
/// Models are referenced through content-addressable storage (CAS),
/// where the `cas_hash` uniquely identifies the serialized model bytes.
/// Loggers persist this reference; moving the bytes themselves is the
/// concern of whatever artifact store the hash points into.
///
/// ## CAS Hash Format
///
/// The `cas_hash` follows the format: `algorithm:hex_digest`
///
/// Examples:
/// - `sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855`
/// - `blake3:af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelArtifact {
    key: String,
    cas_hash: String,
    size_bytes: u64,
    created_at: DateTime<Utc>,
}

impl ModelArtifact {
    /// Create a new model artifact reference.
    ///
    /// # Arguments
    ///
    /// * `key` - Artifact name (e.g., "model.pt", "classifier.onnx")
    /// * `cas_hash` - Content-addressable hash (e.g., "sha256:abc123")
    /// * `size_bytes` - Size of the serialized model in bytes
    #[must_use]
    pub fn new(key: impl Into<String>, cas_hash: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            key: key.into(),
            cas_hash: cas_hash.into(),
            size_bytes,
            created_at: Utc::now(),
        }
    }

    /// Get the artifact key/name.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the content-addressable hash.
    #[must_use]
    pub fn cas_hash(&self) -> &str {
        &self.cas_hash
    }

    /// Get the hash algorithm prefix (`sha256` in `sha256:abc`), if present.
    #[must_use]
    pub fn hash_algorithm(&self) -> Option<&str> {
        self.cas_hash.split_once(':').map(|(algorithm, _)| algorithm)
    }

    /// Get the artifact size in bytes.
    #[must_use]
    pub const fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
