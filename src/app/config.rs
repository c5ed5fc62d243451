/// Default API base address (includes the `/api` prefix)
const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    base_url: String,
    file_vault: bool,
}

impl Default for Config {
    fn default() -> Self {
        let base_url = std::env::var("EVENTDESK_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let file_vault = std::env::var("EVENTDESK_FILE_VAULT").unwrap_or_default() == "1";
        Self {
            base_url,
            file_vault,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration pointing at the given base address
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            file_vault: false,
        }
    }

    /// The API base address
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Whether the file-backed token vault was requested
    pub fn use_file_vault(&self) -> bool {
        self.file_vault
    }
}
