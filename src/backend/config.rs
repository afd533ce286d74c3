// src/backend/config.rs
use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_STORE_PATH: &str = "data/store.json";
const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Environment-provided configuration, read once at startup and passed by
/// reference into the endpoint layer.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AppConfig {
    /// Base URL of this backend, for building verification links.
    pub backend_url: String,
    /// Base URL of the client, for the post-verification redirect.
    pub client_url: String,
    /// Secret used to sign session tokens.
    pub jwt_secret: String,
    /// Path of the JSON store snapshot.
    pub store_path: String,
    /// Directory uploaded images are written to.
    pub upload_dir: String,
    /// Listening port for the hosting layer.
    pub port: u16,
    /// Origins allowed by the hosting layer's CORS handling.
    pub allowed_origins: Vec<String>,
    /// Mail API endpoint; when unset the host should fall back to the
    /// no-op mailer.
    pub mail_api_url: Option<String>,
    /// Bearer key for the mail API.
    pub mail_api_key: Option<String>,
}

impl AppConfig {
    /// Loads configuration from the process environment, reading a `.env`
    /// file first when one is present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        AppConfig {
            backend_url: env_or("BACKEND_URL", "http://localhost:5000"),
            client_url: env_or("CLIENT_URL", "http://localhost:3000"),
            jwt_secret: env_or("JWT_SECRET", "change-me"),
            store_path: env_or("STORE_PATH", DEFAULT_STORE_PATH),
            upload_dir: env_or("UPLOAD_DIR", DEFAULT_UPLOAD_DIR),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            mail_api_url: env::var("MAIL_API_URL").ok(),
            mail_api_key: env::var("MAIL_API_KEY").ok(),
        }
    }

    /// Link embedded in the verification email.
    pub fn verification_link(&self, token: &str) -> String {
        format!("{}/api/auth/verify/{}", self.backend_url, token)
    }

    /// Location clients are redirected to after a successful verification.
    pub fn signin_redirect(&self) -> String {
        format!("{}/signin", self.client_url)
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
impl AppConfig {
    /// Fixed configuration for tests; no environment reads.
    pub fn for_tests() -> Self {
        AppConfig {
            backend_url: "http://backend.test".to_string(),
            client_url: "http://client.test".to_string(),
            jwt_secret: "test-secret".to_string(),
            store_path: String::new(),
            upload_dir: String::new(),
            port: 0,
            allowed_origins: vec![],
            mail_api_url: None,
            mail_api_key: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_building() {
        let config = AppConfig::for_tests();
        assert_eq!(
            config.verification_link("abc123"),
            "http://backend.test/api/auth/verify/abc123"
        );
        assert_eq!(config.signin_redirect(), "http://client.test/signin");
    }
}
