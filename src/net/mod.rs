//! Network layer: REST helpers and wire types for the image-generation
//! backend.

pub mod api;
pub mod types;
