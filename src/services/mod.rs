// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod attraction_service;
pub mod image_service;
pub mod town_service;

pub use attraction_service::*;
pub use image_service::*;
pub use town_service::*;
