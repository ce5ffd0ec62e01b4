//! Application layer: the browser port and the services UI tests call.

pub mod ports;
pub mod services;
