// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod attraction;
pub mod image;
pub mod ordering;
pub mod town;

pub use attraction::*;
pub use image::*;
pub use ordering::*;
pub use town::*;
