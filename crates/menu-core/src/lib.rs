//! # Menu Core
//! 
//! Menu entities, the tree engine (flatten, assemble, filter), repository
//! and collaborator ports, and the services built on top of them.

pub mod domain;
pub mod ports;
pub mod repositories;
pub mod services;
pub mod tree;
pub mod error;

#[cfg(test)]
pub(crate) mod testing;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
pub use services::{MenuBuilder, MenuService};
