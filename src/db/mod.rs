// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod attraction_repository;
pub mod image_repository;
pub mod town_repository;

pub use attraction_repository::*;
pub use image_repository::*;
pub use town_repository::*;
