//! Result-table fingerprints.
//!
//! A fingerprint is the SHA-256 digest of a table's canonical CSV encoding,
//! hex-encoded. Two tables are considered equivalent exactly when their
//! digests are equal; no direct table comparison happens anywhere else.
//!
//! ```text
//! ResultTable --canonicalize--> CanonicalForm --to_csv--> UTF-8 bytes --SHA-256--> hex
//! ```

use crate::canonical::{CanonicalOptions, canonicalize};
use crate::table::ResultTable;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Diagnostic facts about the fingerprinted table.
///
/// Carried alongside the digest for logging only; never hashed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FingerprintMetadata {
    pub row_count: usize,
    /// Column names in the order the query returned them.
    pub column_names: Vec<String>,
}

/// Digest of a canonicalized table plus diagnostic metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fingerprint {
    /// 64 lowercase hex characters.
    pub digest: String,
    pub metadata: FingerprintMetadata,
}

/// Fingerprint a table under the given canonicalization options.
pub fn fingerprint(table: &ResultTable, options: &CanonicalOptions) -> Fingerprint {
    let payload = canonicalize(table, options).to_csv();
    let digest = digest_hex(payload.as_bytes());

    let metadata = FingerprintMetadata {
        row_count: table.row_count(),
        column_names: table.columns().to_vec(),
    };

    tracing::debug!(
        digest = %digest,
        rows = metadata.row_count,
        columns = ?metadata.column_names,
        "fingerprinted result table"
    );

    Fingerprint { digest, metadata }
}

/// SHA-256 of `bytes`, lowercase hex.
pub fn digest_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
