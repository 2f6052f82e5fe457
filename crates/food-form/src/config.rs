//! Endpoint Configuration

/// Base URL used when `FOODS_API_URL` is not set at build time
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Where the foods service lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Read `FOODS_API_URL` baked in at compile time
    pub fn from_env() -> Self {
        Self::new(option_env!("FOODS_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    /// Collection URL for food resources
    pub fn foods_url(&self) -> String {
        format!("{}/foods", self.base_url)
    }
}
