use log::{error, warn};
use std::io::Read;

static DATABASE_URL: &'static str = "DATABASE_URL";
static DOMAIN: &'static str = "DOMAIN";
static SECRET_KEY: &'static str = "SECRET_KEY";
static OMDB_API_KEY: &'static str = "OMDB_API_KEY";
static OMDB_URL: &'static str = "OMDB_URL";

// Fallback values mirror the development defaults; neither is suitable
// for a production deployment.
static FALLBACK_SECRET_KEY: &'static str = "fallback-secret-key";
static FALLBACK_API_KEY: &'static str = "fallback-api-key";
static DEFAULT_OMDB_URL: &'static str = "http://www.omdbapi.com/";

/// Process configuration, read once from the environment at startup.
pub struct Config {
    pub database_url: String,
    pub domain: String,
    /// Signing key for the identity cookie.
    pub cookie_key: [u8; 32],
    pub omdb_url: String,
    pub omdb_api_key: String,
}

impl Config {
    pub fn from_env() -> Config {
        let database_url = match std::env::var(DATABASE_URL) {
            Ok(v) => v,
            Err(e) => {
                error!("{}: {}", DATABASE_URL, e);
                std::process::exit(1);
            }
        };

        let secret_key = std::env::var(SECRET_KEY).unwrap_or_else(|_| {
            warn!("{} not set, using fallback value", SECRET_KEY);
            FALLBACK_SECRET_KEY.to_string()
        });

        let omdb_api_key = std::env::var(OMDB_API_KEY).unwrap_or_else(|_| {
            warn!("{} not set, using fallback value", OMDB_API_KEY);
            FALLBACK_API_KEY.to_string()
        });

        Config {
            database_url,
            domain: std::env::var(DOMAIN).unwrap_or("localhost".to_string()),
            cookie_key: fold_key(&secret_key),
            omdb_url: std::env::var(OMDB_URL).unwrap_or(DEFAULT_OMDB_URL.to_string()),
            omdb_api_key,
        }
    }
}

/// Fold a secret string into the fixed-width cookie signing key. Shorter
/// secrets are zero-padded, longer ones truncated.
fn fold_key(secret: &str) -> [u8; 32] {
    let mut key = [0; 32];
    secret
        .as_bytes()
        .read(&mut key)
        .expect("reading from a byte slice cannot fail");
    key
}

#[cfg(test)]
pub mod test {
    use super::*;

    #[test]
    fn test_fold_key_pads_short_secrets() {
        let key = fold_key("abc");
        assert_eq!(&key[..3], b"abc");
        assert_eq!(&key[3..], &[0; 29][..]);
    }

    #[test]
    fn test_fold_key_truncates_long_secrets() {
        let secret = "0123456789012345678901234567890123456789";
        let key = fold_key(secret);
        assert_eq!(&key[..], &secret.as_bytes()[..32]);
    }
}
