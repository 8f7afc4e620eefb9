pub mod builds;
pub mod categorize;
pub mod data_manager;
pub mod fallback;
pub mod gameapi;
pub mod normalize;
