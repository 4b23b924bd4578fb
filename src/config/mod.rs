//! Configuration loading

pub mod env;

pub use env::EnvConfig;
