// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod attractions;
pub mod health;
pub mod images;
pub mod towns;

pub use health::config as health_config;
pub use images::config as attraction_images_config;
pub use towns::config as towns_config;
