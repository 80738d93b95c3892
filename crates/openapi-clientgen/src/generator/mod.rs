pub mod ast;
pub mod config;
pub(crate) mod converter;
pub mod errors;
pub mod metrics;
pub mod naming;
pub mod orchestrator;
pub(crate) mod schema_registry;

pub use converter::operations::{ContainerNamer, ContainerNaming};

#[cfg(test)]
pub(crate) mod tests;
