//! Infrastructure layer — real implementations of the application ports.

pub mod api;

pub use api::ZabbixGateway;
