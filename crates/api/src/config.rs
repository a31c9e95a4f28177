//! Runtime configuration from the environment.

const DEFAULT_PORT: u16 = 8080;

/// Local front-end origins allowed by CORS.
pub const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:5173"];

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
}

impl ApiConfig {
    /// Read configuration from the environment. `PORT` overrides the
    /// default; an unparsable value falls back with a warning.
    pub fn from_env() -> Self {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(%raw, "PORT is not a valid port; using default");
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };
        Self { port }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}
