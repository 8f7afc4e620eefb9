use crate::model::ids::{CanonicalId, Version};

/// Catalog documents served per version.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum CatalogKind {
    Champions,
    Items,
}

impl CatalogKind {
    fn document(&self) -> &'static str {
        match self {
            CatalogKind::Champions => "champion",
            CatalogKind::Items => "item",
        }
    }
}

/// URL templates for Data Dragon documents and images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
    locale: String,
}

impl Endpoints {
    pub fn new(base_url: &str, locale: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            locale: locale.to_string(),
        }
    }

    pub fn versions(&self) -> String {
        format!("{}/api/versions.json", self.base_url)
    }

    pub fn catalog(&self, version: &Version, kind: CatalogKind) -> String {
        format!(
            "{}/cdn/{}/data/{}/{}.json",
            self.base_url,
            version,
            self.locale,
            kind.document()
        )
    }

    pub fn detail(&self, version: &Version, id: &CanonicalId) -> String {
        format!("{}/cdn/{}/data/{}/champion/{}.json", self.base_url, version, self.locale, id)
    }

    /// Splash art is not versioned upstream.
    pub fn splash(&self, champion_id: &str, skin_num: u32) -> String {
        format!(
            "{}/cdn/img/champion/splash/{}_{}.jpg",
            self.base_url, champion_id, skin_num
        )
    }

    pub fn passive_icon(&self, version: &Version, file: &str) -> String {
        format!("{}/cdn/{}/img/passive/{}", self.base_url, version, file)
    }

    pub fn spell_icon(&self, version: &Version, file: &str) -> String {
        format!("{}/cdn/{}/img/spell/{}", self.base_url, version, file)
    }

    pub fn item_image(&self, version: &Version, file: &str) -> String {
        format!("{}/cdn/{}/img/item/{}", self.base_url, version, file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> Endpoints {
        Endpoints::new("https://ddragon.leagueoflegends.com/", "en_US")
    }

    #[test]
    fn document_urls() {
        let e = endpoints();
        let version = Version::from("14.3.1");
        assert_eq!(e.versions(), "https://ddragon.leagueoflegends.com/api/versions.json");
        assert_eq!(
            e.catalog(&version, CatalogKind::Champions),
            "https://ddragon.leagueoflegends.com/cdn/14.3.1/data/en_US/champion.json"
        );
        assert_eq!(
            e.catalog(&version, CatalogKind::Items),
            "https://ddragon.leagueoflegends.com/cdn/14.3.1/data/en_US/item.json"
        );
        assert_eq!(
            e.detail(&version, &CanonicalId::from("DrMundo")),
            "https://ddragon.leagueoflegends.com/cdn/14.3.1/data/en_US/champion/DrMundo.json"
        );
    }

    #[test]
    fn image_urls() {
        let e = endpoints();
        let version = Version::from("14.3.1");
        assert_eq!(
            e.splash("Ahri", 0),
            "https://ddragon.leagueoflegends.com/cdn/img/champion/splash/Ahri_0.jpg"
        );
        assert_eq!(
            e.spell_icon(&version, "AhriQ.png"),
            "https://ddragon.leagueoflegends.com/cdn/14.3.1/img/spell/AhriQ.png"
        );
        assert_eq!(
            e.passive_icon(&version, "Ahri_P.png"),
            "https://ddragon.leagueoflegends.com/cdn/14.3.1/img/passive/Ahri_P.png"
        );
        assert_eq!(
            e.item_image(&version, "1001.png"),
            "https://ddragon.leagueoflegends.com/cdn/14.3.1/img/item/1001.png"
        );
    }
}
