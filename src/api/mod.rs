//! Backend API layer: wire types, the HTTP transport, and the typed client.

pub mod client;
pub mod error;
#[cfg(test)]
pub mod mock;
pub mod transport;
pub mod types;
