use std::collections::BTreeMap;

use json::JsonValue;
use once_cell::sync::OnceCell;
use tracing::warn;

use crate::{
    config::ClientConfig,
    model::{
        build::RecommendedBuild,
        champion::{Champion, ChampionDetail},
        ids::{ChampionId, Version},
        item::{Item, ItemCategory},
    },
    service::{
        builds,
        categorize::categorize_items,
        fallback::{default_catalog, default_detail, default_roster},
        gameapi::{
            ddragon_client::{DataDragonClient, FetchError, FetchResult},
            endpoints::CatalogKind,
            parsing::{
                champion::{to_champion_detail, to_display_collection},
                item::parse_items,
            },
            transport::{ClientInitError, HttpTransport, Transport},
        },
        normalize::normalize,
    },
};

/// Caller-facing entry point. Every operation returns a usable value: fetch
/// failures are logged and replaced by the static fallbacks.
pub struct DataManager<T = HttpTransport> {
    client: DataDragonClient<T>,
    config: ClientConfig,
    version_cache: OnceCell<Version>,
}

impl DataManager<HttpTransport> {
    pub fn new(config: ClientConfig) -> Result<Self, ClientInitError> {
        let transport = HttpTransport::new(config.timeout)?;
        Ok(Self::with_transport(transport, config))
    }
}

impl<T: Transport> DataManager<T> {
    pub fn with_transport(transport: T, config: ClientConfig) -> Self {
        Self {
            client: DataDragonClient::new(transport, config.endpoints()),
            config,
            version_cache: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Newest upstream version, or the configured fallback token.
    pub fn latest_version(&self) -> Version {
        let resolved = if self.config.cache_version {
            self.version_cache.get_or_try_init(|| self.resolve_version()).cloned()
        } else {
            self.resolve_version()
        };

        or_fallback(resolved, "latest version", || {
            Version::from(self.config.fallback_version.as_str())
        })
    }

    pub fn all_champions(&self) -> Vec<Champion> {
        let version = self.latest_version();
        let catalog = self
            .client
            .fetch_catalog(&version, CatalogKind::Champions)
            .and_then(non_empty);
        let catalog = or_fallback(catalog, "champion catalog", default_roster);
        to_display_collection(&catalog, self.client.endpoints())
    }

    pub fn champion_details(&self, id: &ChampionId) -> ChampionDetail {
        let version = self.latest_version();
        let canonical = normalize(id);
        let detail = or_fallback(
            self.client.fetch_detail(&version, &canonical),
            &format!("champion detail for {}", id),
            || default_detail(id),
        );
        to_champion_detail(&detail, &version, self.client.endpoints())
    }

    pub fn all_items(&self) -> Vec<Item> {
        let version = self.latest_version();
        let catalog = or_fallback(
            self.client.fetch_catalog(&version, CatalogKind::Items),
            "item catalog",
            default_catalog,
        );
        parse_items(&catalog, &version, self.client.endpoints())
    }

    pub fn categorized_items(&self) -> BTreeMap<ItemCategory, Vec<Item>> {
        categorize_items(&self.all_items())
    }

    pub fn item_image_url(&self, version: &Version, image: &str) -> String {
        self.client.endpoints().item_image(version, image)
    }

    /// Static lookup, never touches the network.
    pub fn recommended_build(&self, id: &ChampionId) -> RecommendedBuild {
        builds::recommended_build(id)
    }

    /// Drops the memoized version so the next call asks upstream again.
    pub fn refresh(&mut self) {
        self.version_cache = OnceCell::new();
    }

    fn resolve_version(&self) -> FetchResult<Version> {
        self.client
            .fetch_versions()?
            .into_iter()
            .next()
            .ok_or(FetchError::EmptyVersionList)
    }
}

fn non_empty(catalog: JsonValue) -> FetchResult<JsonValue> {
    if catalog.is_empty() {
        Err(FetchError::EmptyCatalog)
    } else {
        Ok(catalog)
    }
}

/// Unwraps a fetch result, logging the error and substituting `fallback` on failure.
pub fn or_fallback<V, F>(result: FetchResult<V>, what: &str, fallback: F) -> V
where
    F: FnOnce() -> V,
{
    match result {
        Ok(value) => value,
        Err(error) => {
            warn!(%error, "{} unavailable, using fallback", what);
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn or_fallback_passes_success_through() {
        let value = or_fallback(Ok(3), "number", || 7);
        assert_eq!(value, 3);
    }

    #[test]
    fn or_fallback_substitutes_on_error() {
        let value = or_fallback(Err(FetchError::EmptyVersionList), "number", || 7);
        assert_eq!(value, 7);
    }

    #[test]
    fn empty_catalog_counts_as_failure() {
        assert!(matches!(non_empty(JsonValue::new_object()), Err(FetchError::EmptyCatalog)));

        let mut catalog = JsonValue::new_object();
        catalog["Ahri"]["id"] = "Ahri".into();
        assert!(non_empty(catalog).is_ok());
    }
}
