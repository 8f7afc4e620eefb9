use std::time::Duration;

use crate::service::gameapi::endpoints::Endpoints;

pub const DEFAULT_BASE_URL: &str = "https://ddragon.leagueoflegends.com";
pub const DEFAULT_LOCALE: &str = "en_US";
pub const FALLBACK_VERSION: &str = "13.1.1";

/// Settings for the Data Dragon client and the data manager on top of it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub locale: String,
    /// Version token returned when the versions endpoint cannot be used.
    pub fallback_version: String,
    /// Request timeout; `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
    /// Memoize the first successfully resolved version for the manager's lifetime.
    pub cache_version: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            fallback_version: FALLBACK_VERSION.to_string(),
            timeout: None,
            cache_version: false,
        }
    }
}

impl ClientConfig {
    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.base_url, &self.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_data_dragon() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://ddragon.leagueoflegends.com");
        assert_eq!(config.locale, "en_US");
        assert_eq!(config.fallback_version, "13.1.1");
        assert!(config.timeout.is_none());
        assert!(!config.cache_version);
    }
}
