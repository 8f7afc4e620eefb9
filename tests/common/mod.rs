#![allow(dead_code)]

use std::{cell::RefCell, collections::HashMap};

use champdex::{
    service::gameapi::transport::{RawResponse, Transport, TransportError},
    ClientConfig, DataManager,
};

pub const BASE: &str = "https://cdn.test";
pub const VERSIONS_URL: &str = "https://cdn.test/api/versions.json";
pub const CHAMPIONS_URL: &str = "https://cdn.test/cdn/14.3.1/data/en_US/champion.json";
pub const ITEMS_URL: &str = "https://cdn.test/cdn/14.3.1/data/en_US/item.json";

/// In-memory upstream: unknown URLs fail like an unreachable host.
#[derive(Default)]
pub struct FakeUpstream {
    responses: HashMap<String, RawResponse>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeUpstream {
    pub fn json(self, url: &str, body: &str) -> Self {
        self.respond(url, 200, Some("application/json"), body)
    }

    pub fn respond(mut self, url: &str, status: u16, content_type: Option<&str>, body: &str) -> Self {
        self.responses.insert(
            url.to_string(),
            RawResponse {
                status,
                content_type: content_type.map(str::to_string),
                body: body.to_string(),
            },
        );
        self
    }

    pub fn with_versions(self) -> Self {
        self.json(VERSIONS_URL, r#"["14.3.1", "14.2.1"]"#)
    }

    pub fn request_count(&self, url: &str) -> usize {
        self.requests.borrow().iter().filter(|u| *u == url).count()
    }
}

impl Transport for FakeUpstream {
    fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        self.requests.borrow_mut().push(url.to_string());
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| TransportError::Unavailable(format!("no route to {}", url)))
    }
}

pub fn config() -> ClientConfig {
    ClientConfig {
        base_url: BASE.to_string(),
        ..ClientConfig::default()
    }
}

pub fn manager(upstream: &FakeUpstream) -> DataManager<&FakeUpstream> {
    DataManager::with_transport(upstream, config())
}

pub fn detail_url(canonical: &str) -> String {
    format!("https://cdn.test/cdn/14.3.1/data/en_US/champion/{}.json", canonical)
}
