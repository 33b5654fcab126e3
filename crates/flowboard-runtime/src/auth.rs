use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

/// Identity hash the AirOps identify flow expects: hex HMAC-SHA256 of the user id keyed by the API key
pub fn hash_user_id(api_key: &str, user_id: &str) -> Result<String> {
    let mut mac = HmacSha256::new_from_slice(api_key.as_bytes())
        .map_err(|e| Error::Config(format!("invalid API key for HMAC: {}", e)))?;
    mac.update(user_id.as_bytes());
    Ok(format!("{:x}", mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() -> Result<()> {
        let hash = hash_user_id("key", "The quick brown fox jumps over the lazy dog")?;
        assert_eq!(
            hash,
            "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
        );
        Ok(())
    }

    #[test]
    fn test_hash_is_lowercase_hex() -> Result<()> {
        let hash = hash_user_id("", "user")?;
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        Ok(())
    }
}
