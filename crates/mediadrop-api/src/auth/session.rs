//! Session token and cookie helpers.
//!
//! The cookie carries a random 256-bit token in hex; the database stores
//! only the token's sha256 digest, so a leaked sessions table does not
//! yield usable cookies.

use axum::http::HeaderMap;
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::constants::SESSION_COOKIE;

/// Generate a new random session token (64 hex chars).
pub fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Digest a token for storage and lookup.
pub fn digest_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// Extract the session token from a Cookie header, if present.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    let cookie_header = headers.get(axum::http::header::COOKIE)?.to_str().ok()?;
    for pair in cookie_header.split(';') {
        let mut parts = pair.trim().splitn(2, '=');
        let name = parts.next()?;
        if name == SESSION_COOKIE {
            let value = parts.next().unwrap_or("");
            if value.is_empty() {
                return None;
            }
            return Some(value.to_string());
        }
    }
    None
}

/// Build the Set-Cookie value for a new session.
pub fn session_cookie(token: &str, max_age_secs: i64) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE, token, max_age_secs
    )
}

/// Build the Set-Cookie value that clears the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", SESSION_COOKIE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::COOKIE;

    #[test]
    fn generated_tokens_are_unique_hex() {
        let a = generate_token();
        let b = generate_token();
        assert_ne!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn digest_is_stable_and_differs_from_token() {
        let token = "abc123";
        assert_eq!(digest_token(token), digest_token(token));
        assert_ne!(digest_token(token), token);
    }

    #[test]
    fn token_parsed_from_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            format!("other=1; {}=deadbeef; theme=dark", SESSION_COOKIE)
                .parse()
                .unwrap(),
        );
        assert_eq!(token_from_headers(&headers), Some("deadbeef".to_string()));
    }

    #[test]
    fn missing_or_empty_cookie_yields_none() {
        let headers = HeaderMap::new();
        assert_eq!(token_from_headers(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, format!("{}=", SESSION_COOKIE).parse().unwrap());
        assert_eq!(token_from_headers(&headers), None);
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        assert!(clear_session_cookie().contains("Max-Age=0"));
    }
}
