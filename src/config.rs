//! API Configuration
//!
//! The REST base URL is resolved once at startup and handed to the client
//! explicitly instead of being read from ambient globals.

/// Fallback when no base URL is baked in at build time.
const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Normalized base URL for the menu API.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build-time configuration via `CAFESAAS_API_URL`.
    pub fn from_env() -> Self {
        Self::new(option_env!("CAFESAAS_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    /// Trailing slashes are stripped so joined paths never double up.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::ApiConfig;

    #[test]
    fn strips_trailing_slashes() {
        let config = ApiConfig::new("https://api.example.com/");
        assert_eq!(config.url("/api/restaurants"), "https://api.example.com/api/restaurants");

        let config = ApiConfig::new("https://api.example.com///");
        assert_eq!(config.url("/api/restaurants"), "https://api.example.com/api/restaurants");
    }

    #[test]
    fn joins_paths_verbatim() {
        let config = ApiConfig::new("http://localhost:8000");
        assert_eq!(config.url("/api/menu/5"), "http://localhost:8000/api/menu/5");
    }
}
