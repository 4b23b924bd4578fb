//! Domain types for upstream JSON shapes

pub mod deployment;
pub mod project;

pub use deployment::Deployment;
pub use project::collect_applications;
