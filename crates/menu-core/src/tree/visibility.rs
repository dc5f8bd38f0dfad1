// ============================================================================
// Menu Core - Visibility Filter
// File: crates/menu-core/src/tree/visibility.rs
// Description: Per-viewer pruning with per-type visibility predicates
// ============================================================================

use std::sync::Arc;

use tracing::warn;

use crate::domain::{Forest, MenuItemType, MenuNode, Viewer};
use crate::ports::{FeatureFlags, PermissionChecker, RouteResolver};

/// Visibility predicates backed by the host application's collaborators
#[derive(Clone)]
pub struct VisibilityRules {
    routes: Arc<dyn RouteResolver>,
    permissions: Arc<dyn PermissionChecker>,
    features: Option<Arc<dyn FeatureFlags>>,
}

impl VisibilityRules {
    pub fn new(routes: Arc<dyn RouteResolver>, permissions: Arc<dyn PermissionChecker>) -> Self {
        Self {
            routes,
            permissions,
            features: None,
        }
    }

    /// Without a feature-flag provider every `feature` item is visible.
    pub fn with_feature_flags(mut self, features: Arc<dyn FeatureFlags>) -> Self {
        self.features = Some(features);
        self
    }

    pub fn routes(&self) -> &dyn RouteResolver {
        self.routes.as_ref()
    }

    /// Whether a single node is visible on its own, ignoring its children
    pub fn is_visible(&self, node: &MenuNode, viewer: Option<&Viewer>) -> bool {
        let Some(kind) = node.kind() else {
            return false;
        };
        let value = kind.meta_key().and_then(|key| node.meta_str(key));

        match kind {
            MenuItemType::Url | MenuItemType::Divider => true,
            MenuItemType::Route => value.is_some_and(|route| self.routes.exists(route)),
            MenuItemType::Permission => match (viewer, value) {
                (Some(viewer), Some(permission)) => self.permission_granted(viewer, permission),
                _ => false,
            },
            // a missing key is still the provider's call
            MenuItemType::Feature => match &self.features {
                None => true,
                Some(features) => Self::feature_active(features.as_ref(), value.unwrap_or_default()),
            },
        }
    }

    /// Prune a forest for one viewer.
    ///
    /// Children are filtered first; a node survives when it is visible or
    /// still has at least one surviving child. Takes ownership so the
    /// caller's copy is the one being rewritten.
    pub fn filter(&self, forest: Forest, viewer: Option<&Viewer>) -> Forest {
        forest
            .into_iter()
            .filter_map(|node| self.filter_node(node, viewer))
            .collect()
    }

    fn filter_node(&self, mut node: MenuNode, viewer: Option<&Viewer>) -> Option<MenuNode> {
        node.children = self.filter(std::mem::take(&mut node.children), viewer);

        if !node.children.is_empty() || self.is_visible(&node, viewer) {
            Some(node)
        } else {
            None
        }
    }

    fn permission_granted(&self, viewer: &Viewer, permission: &str) -> bool {
        self.permissions.can(viewer, permission).unwrap_or_else(|e| {
            warn!("Permission check for '{}' failed, denying: {}", permission, e);
            false
        })
    }

    fn feature_active(features: &dyn FeatureFlags, feature: &str) -> bool {
        features.is_active(feature).unwrap_or_else(|e| {
            warn!("Feature flag '{}' lookup failed, treating as inactive: {}", feature, e);
            false
        })
    }
}
