//! Structural checks on strkey-encoded keys.
//!
//! Only the shape is verified (prefix, length, base32 alphabet). Checksums and
//! key derivation belong to the external keypair model.

const STRKEY_LEN: usize = 56;

fn is_strkey(value: &str, prefix: char) -> bool {
    value.len() == STRKEY_LEN
        && value.starts_with(prefix)
        && value
            .bytes()
            .all(|b| b.is_ascii_uppercase() || (b'2'..=b'7').contains(&b))
}

pub fn is_valid_public_key(value: &str) -> bool {
    is_strkey(value, 'G')
}

pub fn is_valid_secret_key(value: &str) -> bool {
    is_strkey(value, 'S')
}

/// `GBPBFW…NF4W` style abbreviation for lists and subtitles.
pub fn shorten_public_key(public_key: &str) -> String {
    if public_key.len() <= 12 || !public_key.is_ascii() {
        return public_key.to_string();
    }
    format!(
        "{}…{}",
        &public_key[..6],
        &public_key[public_key.len() - 4..]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUBLIC: &str = "GBPBFWVBADSESGADWEGC7SGTHE3535FWK4BS6UW3WMHX26PHGIH5NF4W";
    const SECRET: &str = "SBPBFWVBADSESGADWEGC7SGTHE3535FWK4BS6UW3WMHX26PHGIH5NF4W";

    #[test]
    fn test_key_shapes() {
        assert!(is_valid_public_key(PUBLIC));
        assert!(!is_valid_secret_key(PUBLIC));
        assert!(is_valid_secret_key(SECRET));
        assert!(!is_valid_secret_key("S123"));
        assert!(!is_valid_secret_key(&SECRET.to_lowercase()));
    }

    #[test]
    fn test_shorten_public_key() {
        assert_eq!(shorten_public_key(PUBLIC), "GBPBFW…NF4W");
        assert_eq!(shorten_public_key("GABC"), "GABC");
    }
}
