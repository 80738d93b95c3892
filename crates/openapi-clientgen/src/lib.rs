//! Resolves OpenAPI v3 documents into a language-neutral client model: a type declaration
//! graph grouped by namespace, an alias table, and operation containers ready for an emitter.
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]

pub mod document;
pub mod generator;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod tests;
