//! External service clients

pub mod dokploy;

pub use dokploy::{DokployClient, DokployError};
