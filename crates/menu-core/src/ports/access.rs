//! Routing, authorization and feature-flag checks (ports)
//!
//! Implementations are owned by the host application. Errors returned by
//! `can` and `is_active` are treated as a denial by the visibility filter.

use crate::domain::Viewer;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
pub trait RouteResolver: Send + Sync {
    /// Whether a route with this name is registered
    fn exists(&self, route_name: &str) -> bool;

    /// URL the route resolves to
    fn url_for(&self, route_name: &str) -> Result<String, DomainError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait PermissionChecker: Send + Sync {
    fn can(&self, viewer: &Viewer, permission: &str) -> Result<bool, DomainError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait FeatureFlags: Send + Sync {
    fn is_active(&self, feature: &str) -> Result<bool, DomainError>;
}
