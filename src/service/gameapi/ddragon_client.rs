use json::JsonValue;
use thiserror::Error;
use tracing::debug;

use crate::model::ids::{CanonicalId, Version};

use super::{
    endpoints::{CatalogKind, Endpoints},
    transport::{Transport, TransportError},
};

/// Data Dragon document client. One attempt per call, no caching.
pub struct DataDragonClient<T> {
    transport: T,
    endpoints: Endpoints,
}

impl<T: Transport> DataDragonClient<T> {
    pub fn new(transport: T, endpoints: Endpoints) -> Self {
        Self { transport, endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// All published versions, newest first.
    pub fn fetch_versions(&self) -> FetchResult<Vec<Version>> {
        let url = self.endpoints.versions();
        let document = self.request(&url)?;

        if let JsonValue::Array(entries) = &document {
            entries
                .iter()
                .map(|entry| {
                    entry.as_str().map(Version::from).ok_or(FetchError::Malformed {
                        url: url.clone(),
                        reason: "version entry is not a string",
                    })
                })
                .collect()
        } else {
            Err(FetchError::Malformed {
                url,
                reason: "version list is not an array",
            })
        }
    }

    /// The `data` object of a catalog document, keyed by entity id.
    pub fn fetch_catalog(&self, version: &Version, kind: CatalogKind) -> FetchResult<JsonValue> {
        let url = self.endpoints.catalog(version, kind);
        let mut document = self.request(&url)?;
        take_object(&mut document["data"], &url, "data")
    }

    /// The record for one champion, taken from `data[<canonical id>]`.
    pub fn fetch_detail(&self, version: &Version, id: &CanonicalId) -> FetchResult<JsonValue> {
        let url = self.endpoints.detail(version, id);
        let mut document = self.request(&url)?;
        take_object(&mut document["data"][id.as_str()], &url, id.as_str())
    }

    fn request(&self, url: &str) -> FetchResult<JsonValue> {
        debug!(url, "requesting document");

        let response = self.transport.get(url).map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

        if !(200..300).contains(&response.status) {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status,
            });
        }

        let is_json = response
            .content_type
            .as_deref()
            .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
            .unwrap_or(false);
        if !is_json {
            return Err(FetchError::ContentType {
                url: url.to_string(),
                content_type: response.content_type,
            });
        }

        json::parse(&response.body).map_err(|source| FetchError::Parse {
            url: url.to_string(),
            source,
        })
    }
}

fn take_object(value: &mut JsonValue, url: &str, key: &str) -> FetchResult<JsonValue> {
    if value.is_object() {
        Ok(value.take())
    } else {
        Err(FetchError::MissingData {
            url: url.to_string(),
            key: key.to_string(),
        })
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: TransportError,
    },
    #[error("The server returned status {status} for {url}")]
    Status { url: String, status: u16 },
    #[error("Unexpected content type {content_type:?} for {url}")]
    ContentType { url: String, content_type: Option<String> },
    #[error("Failed to parse JSON from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: json::Error,
    },
    #[error("Response from {url} has no object for {key}")]
    MissingData { url: String, key: String },
    #[error("Malformed response from {url}: {reason}")]
    Malformed { url: String, reason: &'static str },
    #[error("The version list is empty")]
    EmptyVersionList,
    #[error("The catalog has no entries")]
    EmptyCatalog,
}
