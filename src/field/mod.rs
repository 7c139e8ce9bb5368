//! Field-level supporting utilities: coordinate transforms, line equations,
//! and the persisted field configuration document.

pub mod config;
pub mod line;
pub mod transform;
