pub mod identifiers;
pub mod operations;
pub(crate) mod reserved;

pub use identifiers::{NameContext, ensure_unique, sanitize, upper_first};
