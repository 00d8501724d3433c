// Collaborator traits and the in-crate category registry
pub mod common;
pub mod registry;

pub use common::*;
pub use registry::*;
