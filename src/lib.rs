//! Data access for the champion roster site: version resolution, identifier
//! normalization, Data Dragon fetching with static fallbacks, and the
//! reshaping of upstream records into display records.

pub mod config;
pub mod model;
pub mod service;
pub mod ui;

pub use config::ClientConfig;
pub use service::data_manager::DataManager;
