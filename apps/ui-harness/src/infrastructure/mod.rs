//! Infrastructure layer: adapters implementing the application ports.

pub mod browser;
