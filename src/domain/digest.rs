//! Content addressing for query documents

use sha2::{Digest, Sha256};

/// Computes the lowercase hex SHA-256 digest of a query document.
///
/// The digest of the exact bytes is the canonical store key for the
/// document; two documents share a key only if they are byte-identical.
pub fn sha256_hex(query: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(query.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        assert_eq!(
            sha256_hex("query { someData }"),
            "3a7408a3748c777e77a3bece877a26d26a9ebcd07c20023fb005be4430152857"
        );
    }

    #[test]
    fn test_empty_document_digest() {
        assert_eq!(
            sha256_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_digest_is_deterministic() {
        assert_eq!(sha256_hex("{ hello }"), sha256_hex("{ hello }"));
    }

    #[test]
    fn test_digest_depends_on_exact_bytes() {
        assert_ne!(sha256_hex("{ hello }"), sha256_hex("{ hello } "));
    }
}
