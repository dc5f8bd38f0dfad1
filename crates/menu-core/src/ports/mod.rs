//! Collaborator ports consumed by the tree engine and the menu service

pub mod access;
pub mod cache;
pub mod hooks;
pub mod menuable;

pub use access::{FeatureFlags, PermissionChecker, RouteResolver};
pub use cache::TreeCache;
pub use hooks::{MenuMutationHook, MutationKind};
pub use menuable::MenuableResolver;
