// ============================================================================
// Menu Core - Breadcrumb Resolver
// File: crates/menu-core/src/services/breadcrumbs.rs
// Description: Locate a node in a flat tree and rebuild its ancestor chain
// ============================================================================

use menu_shared::utils::{trim_leading_slash, trim_trailing_slash};
use tracing::debug;

use crate::domain::{Breadcrumb, MenuItemType, MenuNode};
use crate::ports::RouteResolver;

/// First node whose URL matches `url`.
///
/// A node matches on its own URL (exactly, or ignoring leading slashes) or,
/// for `route` nodes, on the URL its registered route resolves to.
pub fn find_by_url<'a>(
    flat: &'a [MenuNode],
    url: &str,
    routes: &dyn RouteResolver,
) -> Option<&'a MenuNode> {
    let url = trim_trailing_slash(url);

    flat.iter().find(|node| {
        let node_url = trim_trailing_slash(&node.url);
        if node_url == url || trim_leading_slash(node_url) == trim_leading_slash(url) {
            return true;
        }

        if node.kind() != Some(MenuItemType::Route) {
            return false;
        }
        let Some(route) = node.meta_str("route").filter(|r| routes.exists(r)) else {
            return false;
        };
        match routes.url_for(route) {
            Ok(route_url) => trim_trailing_slash(&route_url) == url,
            Err(e) => {
                debug!("Skipping route '{}' while matching breadcrumbs: {}", route, e);
                false
            }
        }
    })
}

/// First `route` node bound to exactly `route_name`
pub fn find_by_route<'a>(flat: &'a [MenuNode], route_name: &str) -> Option<&'a MenuNode> {
    flat.iter().find(|node| {
        node.kind() == Some(MenuItemType::Route)
            && node.meta.get("route").and_then(|v| v.as_str()) == Some(route_name)
    })
}

/// Ancestor chain of `target`, root first
pub fn trail(flat: &[MenuNode], target: &MenuNode) -> Vec<Breadcrumb> {
    let path_ids = target.path_ids();
    let mut chain: Vec<&MenuNode> = flat
        .iter()
        .filter(|node| path_ids.contains(&node.id))
        .collect();
    chain.sort_by_key(|node| node.depth);
    chain.into_iter().map(Breadcrumb::from).collect()
}

/// Trail for a match, or the home fallback when nothing matched
pub fn resolve(flat: &[MenuNode], target: Option<&MenuNode>, include_home: bool) -> Vec<Breadcrumb> {
    match target {
        Some(node) => trail(flat, node),
        None if include_home => flat.first().map(Breadcrumb::from).into_iter().collect(),
        None => Vec::new(),
    }
}
