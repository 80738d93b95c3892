pub mod refs;
pub mod spec;

pub use spec::{SpecFormat, SpecLoader};
