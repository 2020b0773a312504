use sha2::{Digest, Sha256};

/// Hex characters kept from the digest.
pub const ID_LENGTH: usize = 32;

/// Map a pipe-delimited canonical string to a stable 32-hex identifier.
/// Equal canonical strings always yield equal ids.
pub fn deterministic_id(canonical: &str) -> String {
    let digest = Sha256::digest(canonical.as_bytes());
    let mut id = hex::encode(digest);
    id.truncate(ID_LENGTH);
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_stable_and_truncated() {
        let canonical = "media|R01|1|1|1|R02|1|1|1|cable";
        let id = deterministic_id(canonical);
        assert_eq!(id.len(), ID_LENGTH);
        assert_eq!(id, deterministic_id(canonical));
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn different_canonicals_differ() {
        let base = deterministic_id("utp_rj45|R01|R02|1");
        assert_ne!(base, deterministic_id("utp_rj45|R01|R02|2"));
        assert_ne!(base, deterministic_id("utp_rj45|R01|R03|1"));
    }
}
