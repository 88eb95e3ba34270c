use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Listing base URL; `<base_url>/<country>.txt` is fetched.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_country_code")]
    pub country_code: String,

    #[serde(default = "default_max_servers")]
    pub max_servers: usize,

    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

impl SourceConfig {
    /// Listings are published under lowercase country codes.
    pub fn listing_code(&self) -> String {
        self.country_code.trim().to_ascii_lowercase()
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            country_code: default_country_code(),
            max_servers: default_max_servers(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "https://public-dns.info/nameserver".to_string()
}

fn default_country_code() -> String {
    "us".to_string()
}

fn default_max_servers() -> usize {
    200
}

fn default_fetch_timeout_secs() -> u64 {
    30
}
