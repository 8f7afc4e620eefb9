pub mod build;
pub mod champion;
pub mod ids;
pub mod item;
