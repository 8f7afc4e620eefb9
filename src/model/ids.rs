use std::fmt::Display;

/// Loosely-cased champion identifier as supplied by a caller (`"drmundo"`, `"Zed"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChampionId(String);

/// Exact-cased identifier Data Dragon uses for a champion document (`"DrMundo"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalId(String);

/// Opaque Data Dragon content version (`"14.3.1"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ChampionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CanonicalId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Version {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ChampionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for CanonicalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ChampionId {
    fn from(value: &str) -> Self {
        ChampionId(value.to_string())
    }
}

impl From<String> for ChampionId {
    fn from(value: String) -> Self {
        ChampionId(value)
    }
}

impl From<String> for CanonicalId {
    fn from(value: String) -> Self {
        CanonicalId(value)
    }
}

impl From<&str> for CanonicalId {
    fn from(value: &str) -> Self {
        CanonicalId(value.to_string())
    }
}

impl From<String> for Version {
    fn from(value: String) -> Self {
        Version(value)
    }
}

impl From<&str> for Version {
    fn from(value: &str) -> Self {
        Version(value.to_string())
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId(value.to_string())
    }
}

impl From<u32> for ItemId {
    fn from(value: u32) -> Self {
        ItemId(value.to_string())
    }
}
