/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A single `*` opens the API to any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Gemini connection settings.
    pub gemini: GeminiConfig,
}

/// Connection settings for the hosted Gemini service.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key. May be empty; the health endpoint reports availability
    /// and generation calls fail upstream without it.
    pub api_key: String,
    /// Base URL of the Generative Language API.
    pub api_url: String,
    /// Model name used for all generation calls.
    pub model: String,
}

impl GeminiConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                       |
    /// |------------------------|-----------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                     |
    /// | `PORT`                 | `3000`                                        |
    /// | `CORS_ORIGINS`         | `*`                                           |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                          |
    /// | `GOOGLE_API_KEY`       | (empty)                                       |
    /// | `GEMINI_API_URL`       | `https://generativelanguage.googleapis.com`   |
    /// | `GEMINI_MODEL`         | `gemini-1.5-flash`                            |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let gemini = GeminiConfig {
            api_key: std::env::var("GOOGLE_API_KEY").unwrap_or_default(),
            api_url: std::env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| publixy_gemini::DEFAULT_API_URL.into()),
            model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| publixy_gemini::DEFAULT_MODEL.into()),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            gemini,
        }
    }
}
