pub mod ddragon_client;
pub mod endpoints;
pub mod parsing;
pub mod transport;
