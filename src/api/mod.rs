// Inventory API access
pub mod client;
mod error;

pub use client::{parse_teleservices, InventoryClient};
pub use error::ApiError;
