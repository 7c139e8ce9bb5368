//! Zone entity, grid sampling, and polygon approximation.

pub mod cache;
pub mod model;
pub mod sampler;

pub(crate) mod hull;
